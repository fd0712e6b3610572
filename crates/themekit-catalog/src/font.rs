use serde::{Deserialize, Serialize};

/// A selectable font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontOption {
    /// Stable identifier persisted with the selection (`inter`, `mono`).
    pub id: String,
    /// Display label.
    pub label: String,
    /// CSS `font-family` stack applied when the font is active.
    pub family: String,
}

impl FontOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            family: family.into(),
        }
    }
}
