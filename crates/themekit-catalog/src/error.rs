//! Catalog error types.

use thiserror::Error;

use crate::color::ColorField;

/// Lookup failure for an identifier outside the catalog.
///
/// Returned by catalog lookups and by the store's mutators. The caller's
/// state is never affected by these errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {id}")]
    UnknownTheme { id: String },

    #[error("unknown font: {id}")]
    UnknownFont { id: String },
}

/// Structural problem found while building a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one theme and one font")]
    Empty,

    #[error("duplicate theme id: {id}")]
    DuplicateTheme { id: String },

    #[error("duplicate font id: {id}")]
    DuplicateFont { id: String },

    /// A light color, or a color named by a dark override, is blank.
    #[error("theme {theme} has an empty {mode} value for {field}")]
    EmptyColor {
        theme: String,
        mode: &'static str,
        field: ColorField,
    },

    #[error("default theme {id} is not in the catalog")]
    UnknownDefaultTheme { id: String },

    #[error("default font {id} is not in the catalog")]
    UnknownDefaultFont { id: String },
}

/// Result type alias for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;
