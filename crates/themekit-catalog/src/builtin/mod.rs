//! Built-in themes and fonts.
//!
//! - `classic` - the first six palettes, each with a full dark variant
//! - `extended` - seven newer palettes; some override only part of the
//!   palette in dark mode and some have no dark variant at all

mod classic;
mod extended;

use crate::catalog::ThemeCatalog;
use crate::color::{ColorOverride, ColorSet, TextColors, TextOverride};
use crate::font::FontOption;
use crate::theme::{ThemeCategory, ThemeEntry, ThemeMetadata};

/// Id of the theme selected when nothing valid is persisted.
pub const DEFAULT_THEME_ID: &str = "professional-blue";

/// Id of the font selected when nothing valid is persisted.
pub const DEFAULT_FONT_ID: &str = "inter";

pub(crate) fn catalog() -> ThemeCatalog {
    let mut themes = classic::themes();
    themes.extend(extended::themes());
    // Both defaults are the first declared entries.
    ThemeCatalog::from_parts(themes, fonts(), 0, 0)
}

fn fonts() -> Vec<FontOption> {
    vec![
        FontOption::new("inter", "Inter", "Inter, system-ui, sans-serif"),
        FontOption::new("roboto", "Roboto", "Roboto, Arial, sans-serif"),
        FontOption::new(
            "open-sans",
            "Open Sans",
            "'Open Sans', 'Helvetica Neue', sans-serif",
        ),
        FontOption::new("poppins", "Poppins", "Poppins, system-ui, sans-serif"),
        FontOption::new("lato", "Lato", "Lato, 'Segoe UI', sans-serif"),
        FontOption::new("montserrat", "Montserrat", "Montserrat, Verdana, sans-serif"),
        FontOption::new("serif", "Serif", "Georgia, 'Times New Roman', serif"),
        FontOption::new(
            "mono",
            "Monospace",
            "'JetBrains Mono', 'Fira Code', ui-monospace, monospace",
        ),
    ]
}

fn meta(label: &str, category: ThemeCategory, icon: &str, description: &str) -> ThemeMetadata {
    ThemeMetadata {
        label: label.to_string(),
        category,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

/// Colors in field order; `text` is `[primary, secondary, accent]`.
struct Palette<'a> {
    primary: &'a str,
    secondary: &'a str,
    background: &'a str,
    surface: &'a str,
    text: [&'a str; 3],
    border: &'a str,
    success: &'a str,
    warning: &'a str,
    error: &'a str,
    shadow: &'a str,
}

impl Palette<'_> {
    fn build(&self) -> ColorSet {
        let [text_primary, text_secondary, text_accent] = self.text;
        ColorSet {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            background: self.background.to_string(),
            surface: self.surface.to_string(),
            text: TextColors {
                primary: text_primary.to_string(),
                secondary: text_secondary.to_string(),
                accent: text_accent.to_string(),
            },
            border: self.border.to_string(),
            success: self.success.to_string(),
            warning: self.warning.to_string(),
            error: self.error.to_string(),
            shadow: self.shadow.to_string(),
        }
    }

    /// Dark variant that names every field.
    fn build_override(&self) -> ColorOverride {
        let [text_primary, text_secondary, text_accent] = self.text;
        ColorOverride {
            primary: some(self.primary),
            secondary: some(self.secondary),
            background: some(self.background),
            surface: some(self.surface),
            text: Some(TextOverride {
                primary: some(text_primary),
                secondary: some(text_secondary),
                accent: some(text_accent),
            }),
            border: some(self.border),
            success: some(self.success),
            warning: some(self.warning),
            error: some(self.error),
            shadow: some(self.shadow),
        }
    }
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        let built = catalog();
        let checked = ThemeCatalog::new(
            built.themes().to_vec(),
            built.fonts().to_vec(),
            DEFAULT_THEME_ID,
            DEFAULT_FONT_ID,
        );
        assert_eq!(checked.as_ref(), Ok(&built));
    }

    #[test]
    fn declaration_order_is_stable() {
        let ids: Vec<_> = catalog()
            .themes()
            .iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(
            ids,
            [
                "professional-blue",
                "corporate-green",
                "premium-purple",
                "luxury-gold",
                "minimal-gray",
                "tech-cyan",
                "nature-green",
                "ocean-blue",
                "sunset-orange",
                "midnight-purple",
                "rose-pink",
                "vibrant-red",
                "cool-teal",
            ]
        );
    }
}
