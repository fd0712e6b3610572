//! Color sets and dark-mode overrides.
//!
//! A [`ColorSet`] is always complete. A [`ColorOverride`] names only the
//! fields that differ in dark mode; everything else falls back to the light
//! set when the two are merged with [`ColorSet::with_override`].
//!
//! Color values are opaque strings (`#2563EB`, `rgba(...)`, a full
//! `box-shadow` declaration). They are carried verbatim and never parsed.

use serde::{Deserialize, Serialize};

/// Text colors nested inside a [`ColorSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    /// Headings and body copy.
    pub primary: String,
    /// Secondary labels, captions, hints.
    pub secondary: String,
    /// Text drawn on top of the primary color.
    pub accent: String,
}

/// Complete set of named colors for one theme in one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: TextColors,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    /// Full `box-shadow` value, not just a color.
    pub shadow: String,
}

/// Partial text colors used by a dark-mode override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl TextOverride {
    /// True when no text field is overridden.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.accent.is_none()
    }
}

/// Dark-mode override: only the fields that differ from the light set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

impl ColorOverride {
    /// True when the override would leave any base set unchanged.
    pub fn is_empty(&self) -> bool {
        ColorField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Overridden value for a field, if this override names it.
    pub fn get(&self, field: ColorField) -> Option<&str> {
        let text = self.text.as_ref();
        let value = match field {
            ColorField::Primary => self.primary.as_ref(),
            ColorField::Secondary => self.secondary.as_ref(),
            ColorField::Background => self.background.as_ref(),
            ColorField::Surface => self.surface.as_ref(),
            ColorField::TextPrimary => text.and_then(|t| t.primary.as_ref()),
            ColorField::TextSecondary => text.and_then(|t| t.secondary.as_ref()),
            ColorField::TextAccent => text.and_then(|t| t.accent.as_ref()),
            ColorField::Border => self.border.as_ref(),
            ColorField::Success => self.success.as_ref(),
            ColorField::Warning => self.warning.as_ref(),
            ColorField::Error => self.error.as_ref(),
            ColorField::Shadow => self.shadow.as_ref(),
        };
        value.map(String::as_str)
    }
}

impl ColorSet {
    /// Value of a single field.
    pub fn get(&self, field: ColorField) -> &str {
        match field {
            ColorField::Primary => &self.primary,
            ColorField::Secondary => &self.secondary,
            ColorField::Background => &self.background,
            ColorField::Surface => &self.surface,
            ColorField::TextPrimary => &self.text.primary,
            ColorField::TextSecondary => &self.text.secondary,
            ColorField::TextAccent => &self.text.accent,
            ColorField::Border => &self.border,
            ColorField::Success => &self.success,
            ColorField::Warning => &self.warning,
            ColorField::Error => &self.error,
            ColorField::Shadow => &self.shadow,
        }
    }

    /// All fields with their values, in [`ColorField::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorField, &str)> + '_ {
        ColorField::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Merge a dark-mode override onto this set.
    ///
    /// Every field present in `dark` replaces the base value; absent fields
    /// keep it. The nested text colors merge independently, so an override
    /// naming only `text.primary` keeps the base `text.secondary` and
    /// `text.accent`.
    pub fn with_override(&self, dark: &ColorOverride) -> ColorSet {
        fn pick(base: &str, over: Option<&String>) -> String {
            over.map_or_else(|| base.to_string(), Clone::clone)
        }

        let text = match &dark.text {
            Some(text) => TextColors {
                primary: pick(&self.text.primary, text.primary.as_ref()),
                secondary: pick(&self.text.secondary, text.secondary.as_ref()),
                accent: pick(&self.text.accent, text.accent.as_ref()),
            },
            None => self.text.clone(),
        };

        ColorSet {
            primary: pick(&self.primary, dark.primary.as_ref()),
            secondary: pick(&self.secondary, dark.secondary.as_ref()),
            background: pick(&self.background, dark.background.as_ref()),
            surface: pick(&self.surface, dark.surface.as_ref()),
            text,
            border: pick(&self.border, dark.border.as_ref()),
            success: pick(&self.success, dark.success.as_ref()),
            warning: pick(&self.warning, dark.warning.as_ref()),
            error: pick(&self.error, dark.error.as_ref()),
            shadow: pick(&self.shadow, dark.shadow.as_ref()),
        }
    }
}

/// Addressable color fields, including the three nested text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    Primary,
    Secondary,
    Background,
    Surface,
    TextPrimary,
    TextSecondary,
    TextAccent,
    Border,
    Success,
    Warning,
    Error,
    Shadow,
}

impl ColorField {
    /// Every field, in CSS variable order.
    pub const ALL: [Self; 12] = [
        Self::Primary,
        Self::Secondary,
        Self::Background,
        Self::Surface,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextAccent,
        Self::Border,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Shadow,
    ];

    /// Dotted path as it appears in the nested record (`text.primary`).
    pub fn path(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::TextPrimary => "text.primary",
            Self::TextSecondary => "text.secondary",
            Self::TextAccent => "text.accent",
            Self::Border => "border",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Shadow => "shadow",
        }
    }

    /// CSS custom property name without the leading `--`.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextAccent => "text-accent",
            other => other.path(),
        }
    }
}

impl std::fmt::Display for ColorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ColorSet {
        ColorSet {
            primary: "#111111".to_string(),
            secondary: "#222222".to_string(),
            background: "#FFFFFF".to_string(),
            surface: "#F0F0F0".to_string(),
            text: TextColors {
                primary: "#000000".to_string(),
                secondary: "#555555".to_string(),
                accent: "#FFFFFF".to_string(),
            },
            border: "#CCCCCC".to_string(),
            success: "#00AA00".to_string(),
            warning: "#AAAA00".to_string(),
            error: "#AA0000".to_string(),
            shadow: "0 2px 8px rgba(0, 0, 0, 0.08)".to_string(),
        }
    }

    #[test]
    fn empty_override_is_identity() {
        let base = base();
        assert!(ColorOverride::default().is_empty());
        assert_eq!(base.with_override(&ColorOverride::default()), base);
    }

    #[test]
    fn text_override_merges_per_field() {
        let base = base();
        let dark = ColorOverride {
            text: Some(TextOverride {
                primary: Some("#F9FAFB".to_string()),
                ..TextOverride::default()
            }),
            ..ColorOverride::default()
        };
        let merged = base.with_override(&dark);
        assert_eq!(merged.text.primary, "#F9FAFB");
        assert_eq!(merged.text.secondary, base.text.secondary);
        assert_eq!(merged.text.accent, base.text.accent);
        assert_eq!(merged.primary, base.primary);
    }

    #[test]
    fn empty_text_override_counts_as_empty() {
        let dark = ColorOverride {
            text: Some(TextOverride::default()),
            ..ColorOverride::default()
        };
        assert!(dark.is_empty());
    }

    #[test]
    fn top_level_override_replaces_only_named_fields() {
        let base = base();
        let dark = ColorOverride {
            background: Some("#0F172A".to_string()),
            shadow: Some("none".to_string()),
            ..ColorOverride::default()
        };
        let merged = base.with_override(&dark);
        for (field, value) in merged.entries() {
            match dark.get(field) {
                Some(expected) => assert_eq!(value, expected, "{field}"),
                None => assert_eq!(value, base.get(field), "{field}"),
            }
        }
    }

    #[test]
    fn css_names_flatten_text_fields() {
        let names: Vec<_> = ColorField::ALL.iter().map(|f| f.css_name()).collect();
        assert_eq!(
            names,
            [
                "primary",
                "secondary",
                "background",
                "surface",
                "text-primary",
                "text-secondary",
                "text-accent",
                "border",
                "success",
                "warning",
                "error",
                "shadow",
            ]
        );
    }

    #[test]
    fn override_rejects_unknown_keys() {
        let result: Result<ColorOverride, _> =
            serde_json::from_str(r##"{"primary": "#fff", "accentColor": "#000"}"##);
        assert!(result.is_err());

        let result: Result<ColorOverride, _> =
            serde_json::from_str(r##"{"text": {"muted": "#999"}}"##);
        assert!(result.is_err());
    }
}
