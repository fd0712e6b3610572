//! Flattening a snapshot into CSS custom properties.
//!
//! The store only produces this data; writing it into a document is the
//! host's job.

use std::fmt::Write;

use serde::Serialize;
use themekit_catalog::ColorField;

use crate::selection::EffectiveSnapshot;

/// Class (or attribute value) the host toggles on the root element in dark
/// mode.
pub const DARK_CLASS: &str = "dark";

/// Variable holding the active font stack.
pub const FONT_FAMILY_VARIABLE: &str = "font-family";

/// Everything a host needs to apply a snapshot to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleApplication {
    /// `(name, value)` pairs without the `--` prefix, in fixed order.
    pub variables: Vec<(&'static str, String)>,
    /// Whether [`DARK_CLASS`] should be set on the root element.
    pub dark: bool,
    /// Value for `<meta name="theme-color">`.
    pub theme_color: String,
}

impl StyleApplication {
    /// Flatten `snapshot`, using `font_family` for the font variable.
    pub fn new(snapshot: &EffectiveSnapshot, font_family: &str) -> Self {
        let mut variables: Vec<(&'static str, String)> = snapshot
            .colors
            .entries()
            .map(|(field, value)| (field.css_name(), value.to_string()))
            .collect();
        variables.push((FONT_FAMILY_VARIABLE, font_family.to_string()));

        Self {
            variables,
            dark: snapshot.dark_mode,
            theme_color: snapshot.colors.get(ColorField::Primary).to_string(),
        }
    }

    /// Value of one variable by name (without `--`).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render a `:root` rule declaring every variable.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        let scheme = if self.dark { "dark" } else { "light" };
        let _ = writeln!(css, "  color-scheme: {scheme};");
        for (name, value) in &self.variables {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_catalog::ThemeCatalog;

    use crate::resolve::resolve;

    fn snapshot(theme: &str, dark_mode: bool) -> EffectiveSnapshot {
        let catalog = ThemeCatalog::builtin();
        let entry = catalog.theme(theme).unwrap();
        EffectiveSnapshot {
            theme: entry.id.clone(),
            dark_mode,
            font: "mono".to_string(),
            colors: resolve(entry, dark_mode),
        }
    }

    #[test]
    fn variables_cover_every_field_and_font() {
        let style = StyleApplication::new(&snapshot("corporate-green", false), "monospace");
        assert_eq!(style.variables.len(), ColorField::ALL.len() + 1);
        assert_eq!(style.get("text-secondary"), Some("#4B5563"));
        assert_eq!(style.get("font-family"), Some("monospace"));
        assert_eq!(style.get("missing"), None);
        assert_eq!(style.theme_color, "#059669");
        assert!(!style.dark);
    }

    #[test]
    fn serializes_for_hosts() {
        let style = StyleApplication::new(&snapshot("professional-blue", false), "Inter");
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["dark"], false);
        assert_eq!(value["theme_color"], "#2563EB");
        assert_eq!(value["variables"][0][0], "primary");
        assert_eq!(value["variables"][12][1], "Inter");
    }

    #[test]
    fn css_for_dark_snapshot() {
        let style = StyleApplication::new(&snapshot("minimal-gray", true), "Georgia, serif");
        insta::assert_snapshot!(style.to_css(), @r"
        :root {
          color-scheme: dark;
          --primary: #9CA3AF;
          --secondary: #D1D5DB;
          --background: #111827;
          --surface: #1F2937;
          --text-primary: #F9FAFB;
          --text-secondary: #E5E7EB;
          --text-accent: #FFFFFF;
          --border: #374151;
          --success: #10B981;
          --warning: #F59E0B;
          --error: #EF4444;
          --shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
          --font-family: Georgia, serif;
        }
        ");
    }
}
