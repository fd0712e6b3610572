//! The mutable selection and the snapshot derived from it.

use serde::{Deserialize, Serialize};
use themekit_catalog::{ColorSet, ThemeCatalog, ThemeId};

/// The user's choice: theme, mode, and font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub theme: ThemeId,
    pub dark_mode: bool,
    pub font: String,
}

impl Selection {
    /// The catalog's defaults in light mode.
    pub fn defaults(catalog: &ThemeCatalog) -> Self {
        Self {
            theme: catalog.default_theme_id().clone(),
            dark_mode: false,
            font: catalog.default_font_id().to_string(),
        }
    }
}

/// What consumers see after every change: the selection plus the resolved
/// colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSnapshot {
    pub theme: ThemeId,
    pub dark_mode: bool,
    pub font: String,
    pub colors: ColorSet,
}

impl EffectiveSnapshot {
    pub fn selection(&self) -> Selection {
        Selection {
            theme: self.theme.clone(),
            dark_mode: self.dark_mode,
            font: self.font.clone(),
        }
    }
}
