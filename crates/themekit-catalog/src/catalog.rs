//! The closed registry of themes and fonts.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::builtin;
use crate::color::{ColorField, ColorSet};
use crate::error::{CatalogError, Result, ThemeError};
use crate::font::FontOption;
use crate::theme::{ThemeEntry, ThemeId};

static BUILTIN: OnceLock<Arc<ThemeCatalog>> = OnceLock::new();

/// Immutable set of themes and fonts, in declaration order.
///
/// Every instance has passed [`ThemeCatalog::new`]'s checks: ids are
/// unique, colors are non-blank, and both defaults are members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<ThemeEntry>,
    fonts: Vec<FontOption>,
    default_theme: usize,
    default_font: usize,
}

impl ThemeCatalog {
    /// Build and validate a catalog.
    pub fn new(
        themes: Vec<ThemeEntry>,
        fonts: Vec<FontOption>,
        default_theme: impl Into<ThemeId>,
        default_font: impl Into<String>,
    ) -> Result<Self> {
        validate_entries(&themes, &fonts)?;

        let default_theme = default_theme.into();
        let Some(theme_index) = themes.iter().position(|entry| entry.id == default_theme) else {
            return Err(CatalogError::UnknownDefaultTheme {
                id: default_theme.to_string(),
            });
        };
        let default_font = default_font.into();
        let Some(font_index) = fonts.iter().position(|font| font.id == default_font) else {
            return Err(CatalogError::UnknownDefaultFont { id: default_font });
        };

        Ok(Self::from_parts(themes, fonts, theme_index, font_index))
    }

    /// The catalog shipped with the crate, built once per process.
    pub fn builtin() -> Arc<ThemeCatalog> {
        Arc::clone(BUILTIN.get_or_init(|| {
            let catalog = builtin::catalog();
            debug_assert!(
                validate_entries(&catalog.themes, &catalog.fonts).is_ok(),
                "built-in catalog is invalid"
            );
            Arc::new(catalog)
        }))
    }

    /// Assemble without validation. Only for data verified by tests; the
    /// default positions must be in range.
    pub(crate) fn from_parts(
        themes: Vec<ThemeEntry>,
        fonts: Vec<FontOption>,
        default_theme: usize,
        default_font: usize,
    ) -> Self {
        Self {
            themes,
            fonts,
            default_theme,
            default_font,
        }
    }

    /// Look up a theme by id.
    pub fn theme(&self, id: &str) -> std::result::Result<&ThemeEntry, ThemeError> {
        self.themes
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| ThemeError::UnknownTheme { id: id.to_string() })
    }

    /// Look up a font by id.
    pub fn font(&self, id: &str) -> std::result::Result<&FontOption, ThemeError> {
        self.fonts
            .iter()
            .find(|font| font.id == id)
            .ok_or_else(|| ThemeError::UnknownFont { id: id.to_string() })
    }

    pub fn contains_theme(&self, id: &str) -> bool {
        self.themes.iter().any(|entry| entry.id == id)
    }

    pub fn contains_font(&self, id: &str) -> bool {
        self.fonts.iter().any(|font| font.id == id)
    }

    /// All themes in declaration order.
    pub fn themes(&self) -> &[ThemeEntry] {
        &self.themes
    }

    /// All fonts in display order.
    pub fn fonts(&self) -> &[FontOption] {
        &self.fonts
    }

    /// Position of a theme in [`ThemeCatalog::themes`].
    pub fn theme_index(&self, id: &str) -> Option<usize> {
        self.themes.iter().position(|entry| entry.id == id)
    }

    /// Position of a font in [`ThemeCatalog::fonts`].
    pub fn font_index(&self, id: &str) -> Option<usize> {
        self.fonts.iter().position(|font| font.id == id)
    }

    pub fn default_theme_id(&self) -> &ThemeId {
        &self.themes[self.default_theme].id
    }

    pub fn default_font_id(&self) -> &str {
        &self.fonts[self.default_font].id
    }

    /// Position of the default theme; always a valid index.
    pub fn default_theme_index(&self) -> usize {
        self.default_theme
    }

    /// Position of the default font; always a valid index.
    pub fn default_font_index(&self) -> usize {
        self.default_font
    }
}

fn validate_entries(themes: &[ThemeEntry], fonts: &[FontOption]) -> Result<()> {
    if themes.is_empty() || fonts.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = BTreeSet::new();
    for entry in themes {
        if !seen.insert(entry.id.as_str()) {
            return Err(CatalogError::DuplicateTheme {
                id: entry.id.to_string(),
            });
        }
        validate_colors(entry)?;
    }

    let mut seen = BTreeSet::new();
    for font in fonts {
        if !seen.insert(font.id.as_str()) {
            return Err(CatalogError::DuplicateFont {
                id: font.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_colors(entry: &ThemeEntry) -> Result<()> {
    let blank = |value: &str| value.trim().is_empty();

    if let Some(field) = first_blank(&entry.light, blank) {
        return Err(CatalogError::EmptyColor {
            theme: entry.id.to_string(),
            mode: "light",
            field,
        });
    }

    if let Some(dark) = &entry.dark {
        let field = ColorField::ALL
            .into_iter()
            .find(|field| dark.get(*field).is_some_and(blank));
        if let Some(field) = field {
            return Err(CatalogError::EmptyColor {
                theme: entry.id.to_string(),
                mode: "dark",
                field,
            });
        }
    }
    Ok(())
}

fn first_blank(colors: &ColorSet, blank: impl Fn(&str) -> bool) -> Option<ColorField> {
    colors
        .entries()
        .find(|(_, value)| blank(value))
        .map(|(field, _)| field)
}
