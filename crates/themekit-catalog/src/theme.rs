//! Catalog rows: theme identifiers, display metadata, and palettes.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{ColorOverride, ColorSet};

/// Identifier of a catalog theme, e.g. `professional-blue`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ThemeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ThemeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ThemeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ThemeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Grouping used by theme pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeCategory {
    Professional,
    Premium,
    Minimal,
    Tech,
    Nature,
    Vibrant,
}

impl ThemeCategory {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Premium => "Premium",
            Self::Minimal => "Minimal",
            Self::Tech => "Tech",
            Self::Nature => "Nature",
            Self::Vibrant => "Vibrant",
        }
    }

    pub const ALL: [Self; 6] = [
        Self::Professional,
        Self::Premium,
        Self::Minimal,
        Self::Tech,
        Self::Nature,
        Self::Vibrant,
    ];
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Presentation-only data. Never consulted when resolving colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub label: String,
    pub category: ThemeCategory,
    /// Icon name from the Lucide set.
    pub icon: String,
    pub description: String,
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub id: ThemeId,
    pub metadata: ThemeMetadata,
    /// Complete light-mode palette; the base for every resolution.
    pub light: ColorSet,
    /// Fields that change in dark mode. `None` means dark mode keeps the
    /// light palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ColorOverride>,
}

impl ThemeEntry {
    /// True when dark mode changes at least one color of this theme.
    pub fn has_dark_variant(&self) -> bool {
        self.dark.as_ref().is_some_and(|dark| !dark.is_empty())
    }
}
