//! Palette resolution.

use themekit_catalog::{ColorSet, ThemeEntry};

/// Effective colors of `entry` in the requested mode.
///
/// Light mode is the light palette unchanged. Dark mode merges the theme's
/// dark override onto the light palette; a theme without an override (or
/// with an empty one) keeps its light colors.
pub fn resolve(entry: &ThemeEntry, dark_mode: bool) -> ColorSet {
    match (&entry.dark, dark_mode) {
        (Some(dark), true) if !dark.is_empty() => {
            tracing::debug!(theme = %entry.id, "applying dark override");
            entry.light.with_override(dark)
        }
        _ => entry.light.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_catalog::ThemeCatalog;

    #[test]
    fn light_mode_is_the_light_palette() {
        let catalog = ThemeCatalog::builtin();
        for entry in catalog.themes() {
            assert_eq!(resolve(entry, false), entry.light, "{}", entry.id);
        }
    }

    #[test]
    fn missing_dark_variant_falls_back_to_light() {
        let catalog = ThemeCatalog::builtin();
        let entry = catalog.theme("vibrant-red").unwrap();
        assert!(entry.dark.is_none());
        assert_eq!(resolve(entry, true), entry.light);
    }

    #[test]
    fn dark_mode_uses_override() {
        let catalog = ThemeCatalog::builtin();
        let entry = catalog.theme("corporate-green").unwrap();
        let dark = resolve(entry, true);
        assert_eq!(dark.primary, "#10B981");
        assert_eq!(dark.background, "#0F172A");
        assert_eq!(dark.text.primary, "#F1F5F9");
    }

    #[test]
    fn partial_text_override_keeps_base_siblings() {
        let catalog = ThemeCatalog::builtin();
        let entry = catalog.theme("rose-pink").unwrap();
        let dark = resolve(entry, true);
        assert_eq!(dark.text.primary, "#FFE4E6");
        assert_eq!(dark.text.secondary, entry.light.text.secondary);
        assert_eq!(dark.text.accent, entry.light.text.accent);
        assert_eq!(dark.border, entry.light.border);
    }
}
