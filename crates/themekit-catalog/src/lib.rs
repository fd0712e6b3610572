//! Theme and font catalog.
//!
//! This crate is the closed universe of valid selections:
//!
//! - [`ThemeCatalog`] - themes in declaration order, fonts in display order,
//!   and the two defaults
//! - [`ColorSet`] / [`ColorOverride`] - a complete light palette and the
//!   statically typed partial record a theme uses for dark mode
//! - [`ThemeCatalog::builtin`] - the shipped catalog
//!
//! Catalogs are validated once at construction and are read-only afterwards.
//!
//! # Example
//!
//! ```
//! use themekit_catalog::ThemeCatalog;
//!
//! let catalog = ThemeCatalog::builtin();
//! let entry = catalog.theme("corporate-green").unwrap();
//! assert_eq!(entry.light.primary, "#059669");
//! assert!(catalog.theme("does-not-exist").is_err());
//! ```

mod builtin;
mod catalog;
mod color;
mod error;
mod font;
mod theme;

pub use builtin::{DEFAULT_FONT_ID, DEFAULT_THEME_ID};
pub use catalog::ThemeCatalog;
pub use color::{ColorField, ColorOverride, ColorSet, TextColors, TextOverride};
pub use error::{CatalogError, Result, ThemeError};
pub use font::FontOption;
pub use theme::{ThemeCategory, ThemeEntry, ThemeId, ThemeMetadata};
