//! Theme selection store.
//!
//! Owns the user's choice of theme, dark mode and font for one page
//! lifetime. It resolves the effective [`ColorSet`](themekit_catalog::ColorSet),
//! persists the selection through a [`SelectionStorage`] backend, and
//! notifies subscribed listeners after every change.
//!
//! # Example
//!
//! ```
//! use themekit_catalog::ThemeCatalog;
//! use themekit_store::{MemoryStorage, StoreBuilder};
//!
//! let builder = StoreBuilder::new(ThemeCatalog::builtin(), MemoryStorage::new());
//! builder.subscribe(|snapshot| println!("now using {}", snapshot.theme));
//! let store = builder.initialize();
//!
//! store.select_theme("tech-cyan").unwrap();
//! let snapshot = store.toggle_dark_mode();
//! assert!(snapshot.dark_mode);
//! assert_eq!(snapshot.colors.background, "#020617");
//! ```

mod listeners;
pub mod resolve;
pub mod selection;
pub mod storage;
mod store;
pub mod style;

pub use listeners::Subscription;
pub use resolve::resolve;
pub use selection::{EffectiveSnapshot, Selection};
pub use storage::{MemoryStorage, SelectionStorage, StorageError, TomlFileStorage};
pub use store::{StoreBuilder, ThemeStore, WeakThemeStore};
pub use style::StyleApplication;
