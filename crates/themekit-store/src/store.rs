//! The selection store.
//!
//! A [`ThemeStore`] is obtained only through [`StoreBuilder::initialize`],
//! so no mutator can run against an unloaded selection. The handle is a
//! cheap `Rc` clone meant to be passed to whatever composes the UI.
//!
//! A listener that needs to call back into the store should capture a
//! [`WeakThemeStore`] from [`ThemeStore::downgrade`]. Capturing a strong
//! `ThemeStore` forms a reference cycle through the listener registry and
//! keeps the store alive until that listener is unsubscribed.
//!
//! # Notification order
//!
//! A mutation updates the selection, persists it and returns the new
//! snapshot immediately. Delivery happens in rounds: each round calls every
//! listener once, in registration order. A mutation made by a listener
//! queues its round behind the one in progress, so rounds never interleave,
//! no listener is re-entered, and every round has run before the outermost
//! mutator returns.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use themekit_catalog::{FontOption, ThemeCatalog, ThemeEntry, ThemeError};

use crate::listeners::{Listeners, Subscription};
use crate::resolve::resolve;
use crate::selection::{EffectiveSnapshot, Selection};
use crate::storage::{
    self, DARK_MODE_KEY, FONT_KEY, SelectionStorage, THEME_KEY, decode_dark_mode,
};
use crate::style::StyleApplication;

/// Collects listeners that should see the very first snapshot, then builds
/// the store.
pub struct StoreBuilder {
    catalog: Arc<ThemeCatalog>,
    storage: Box<dyn SelectionStorage>,
    listeners: Listeners,
}

impl StoreBuilder {
    pub fn new(catalog: Arc<ThemeCatalog>, storage: impl SelectionStorage + 'static) -> Self {
        Self {
            catalog,
            storage: Box::new(storage),
            listeners: Listeners::default(),
        }
    }

    /// Register a listener before initialization. It receives the initial
    /// snapshot and every later one.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&EffectiveSnapshot) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Load the persisted selection and produce the ready store.
    ///
    /// Missing or invalid persisted values fall back to the catalog
    /// defaults, one field at a time. This never fails.
    pub fn initialize(self) -> ThemeStore {
        let loaded = load_selection(&self.catalog, self.storage.as_ref());
        let state = State::from_indices(
            &self.catalog,
            loaded.theme_index,
            loaded.font_index,
            loaded.dark_mode,
        );
        tracing::info!(
            theme = %state.snapshot.theme,
            dark_mode = state.snapshot.dark_mode,
            font = %state.snapshot.font,
            "theme store initialized"
        );

        let initial = state.snapshot.clone();
        let store = ThemeStore {
            shared: Rc::new(Shared {
                catalog: self.catalog,
                storage: RefCell::new(self.storage),
                state: RefCell::new(state),
                listeners: self.listeners,
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        };
        store.shared.deliver(initial);
        store
    }
}

impl fmt::Debug for StoreBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreBuilder")
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

/// Handle to the page-lifetime theme state.
#[derive(Clone)]
pub struct ThemeStore {
    shared: Rc<Shared>,
}

struct Shared {
    catalog: Arc<ThemeCatalog>,
    storage: RefCell<Box<dyn SelectionStorage>>,
    state: RefCell<State>,
    listeners: Listeners,
    pending: RefCell<VecDeque<EffectiveSnapshot>>,
    delivering: Cell<bool>,
}

/// Current selection with catalog positions resolved once.
struct State {
    theme_index: usize,
    font_index: usize,
    snapshot: EffectiveSnapshot,
}

impl State {
    /// Indices must be positions in `catalog`.
    fn from_indices(
        catalog: &ThemeCatalog,
        theme_index: usize,
        font_index: usize,
        dark_mode: bool,
    ) -> Self {
        let entry = &catalog.themes()[theme_index];
        let font = &catalog.fonts()[font_index];
        Self {
            theme_index,
            font_index,
            snapshot: EffectiveSnapshot {
                theme: entry.id.clone(),
                dark_mode,
                font: font.id.clone(),
                colors: resolve(entry, dark_mode),
            },
        }
    }
}

impl ThemeStore {
    /// Shorthand for a store with no listeners registered up front.
    pub fn initialize(
        catalog: Arc<ThemeCatalog>,
        storage: impl SelectionStorage + 'static,
    ) -> ThemeStore {
        StoreBuilder::new(catalog, storage).initialize()
    }

    /// Non-owning handle for listeners that call back into the store.
    pub fn downgrade(&self) -> WeakThemeStore {
        WeakThemeStore {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.shared.catalog
    }

    /// Themes for pickers, in catalog order.
    pub fn themes(&self) -> &[ThemeEntry] {
        self.shared.catalog.themes()
    }

    /// Fonts for pickers, in display order.
    pub fn fonts(&self) -> &[FontOption] {
        self.shared.catalog.fonts()
    }

    /// Current snapshot. Never mutates.
    pub fn snapshot(&self) -> EffectiveSnapshot {
        self.shared.state.borrow().snapshot.clone()
    }

    pub fn selection(&self) -> Selection {
        self.shared.state.borrow().snapshot.selection()
    }

    /// Catalog row of the selected theme.
    pub fn current_theme(&self) -> &ThemeEntry {
        let index = self.shared.state.borrow().theme_index;
        &self.shared.catalog.themes()[index]
    }

    /// Catalog row of the selected font.
    pub fn current_font(&self) -> &FontOption {
        let index = self.shared.state.borrow().font_index;
        &self.shared.catalog.fonts()[index]
    }

    /// CSS variables and dark flag for the current snapshot.
    pub fn style(&self) -> StyleApplication {
        StyleApplication::new(&self.snapshot(), &self.current_font().family)
    }

    /// Switch theme. Unknown ids leave everything untouched.
    pub fn select_theme(&self, id: &str) -> Result<EffectiveSnapshot, ThemeError> {
        let theme_index = self.shared.catalog.theme_index(id).ok_or_else(|| {
            tracing::warn!(theme = id, "rejected unknown theme");
            ThemeError::UnknownTheme { id: id.to_string() }
        })?;
        let (font_index, dark_mode) = self.current_parts();
        Ok(self.commit(theme_index, font_index, dark_mode))
    }

    /// Flip dark mode.
    pub fn toggle_dark_mode(&self) -> EffectiveSnapshot {
        let dark_mode = !self.shared.state.borrow().snapshot.dark_mode;
        self.set_dark_mode(dark_mode)
    }

    /// Set dark mode explicitly.
    pub fn set_dark_mode(&self, dark_mode: bool) -> EffectiveSnapshot {
        let theme_index = self.shared.state.borrow().theme_index;
        let (font_index, _) = self.current_parts();
        self.commit(theme_index, font_index, dark_mode)
    }

    /// Switch font. Unknown ids leave everything untouched.
    pub fn select_font(&self, id: &str) -> Result<EffectiveSnapshot, ThemeError> {
        let font_index = self.shared.catalog.font_index(id).ok_or_else(|| {
            tracing::warn!(font = id, "rejected unknown font");
            ThemeError::UnknownFont { id: id.to_string() }
        })?;
        let theme_index = self.shared.state.borrow().theme_index;
        let dark_mode = self.shared.state.borrow().snapshot.dark_mode;
        Ok(self.commit(theme_index, font_index, dark_mode))
    }

    /// Register a listener for every later snapshot.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&EffectiveSnapshot) + 'static,
    {
        self.shared.listeners.subscribe(listener)
    }

    fn current_parts(&self) -> (usize, bool) {
        let state = self.shared.state.borrow();
        (state.font_index, state.snapshot.dark_mode)
    }

    fn commit(&self, theme_index: usize, font_index: usize, dark_mode: bool) -> EffectiveSnapshot {
        let shared = &self.shared;
        let state = State::from_indices(&shared.catalog, theme_index, font_index, dark_mode);
        let snapshot = state.snapshot.clone();
        *shared.state.borrow_mut() = state;

        let persisted = storage::persist(&mut **shared.storage.borrow_mut(), &snapshot.selection());
        if let Err(e) = persisted {
            tracing::warn!(error = %e, "selection not persisted");
        }

        tracing::info!(
            theme = %snapshot.theme,
            dark_mode = snapshot.dark_mode,
            font = %snapshot.font,
            "theme selection changed"
        );
        shared.deliver(snapshot.clone());
        snapshot
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("snapshot", &self.shared.state.borrow().snapshot)
            .field("listeners", &self.shared.listeners)
            .finish_non_exhaustive()
    }
}

/// Weak counterpart of [`ThemeStore`]; does not keep the store alive.
#[derive(Clone, Debug)]
pub struct WeakThemeStore {
    shared: Weak<Shared>,
}

impl WeakThemeStore {
    /// The store, if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<ThemeStore> {
        self.shared.upgrade().map(|shared| ThemeStore { shared })
    }
}

impl Shared {
    /// Queue a round and, unless one is already running, drain the queue.
    fn deliver(&self, snapshot: EffectiveSnapshot) {
        self.pending.borrow_mut().push_back(snapshot);
        if self.delivering.replace(true) {
            return;
        }
        let _guard = DeliveryGuard(self);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(snapshot) = next else { break };
            self.listeners.notify(&snapshot);
        }
    }
}

/// Ends a delivery run even when a listener unwinds. Rounds still queued at
/// that point are dropped.
struct DeliveryGuard<'a>(&'a Shared);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        let dropped = std::mem::take(&mut *self.0.pending.borrow_mut()).len();
        if dropped > 0 {
            tracing::warn!(dropped, "listener panicked, discarding queued notifications");
        }
        self.0.delivering.set(false);
    }
}

/// Persisted selection resolved to catalog positions.
struct Loaded {
    theme_index: usize,
    font_index: usize,
    dark_mode: bool,
}

fn load_selection(catalog: &ThemeCatalog, storage: &dyn SelectionStorage) -> Loaded {
    let theme_index = read(storage, THEME_KEY)
        .and_then(|id| {
            let index = catalog.theme_index(&id);
            accept(index.is_some(), THEME_KEY, &id);
            index
        })
        .unwrap_or_else(|| catalog.default_theme_index());
    let dark_mode = read(storage, DARK_MODE_KEY)
        .and_then(|value| {
            let parsed = decode_dark_mode(&value);
            accept(parsed.is_some(), DARK_MODE_KEY, &value);
            parsed
        })
        .unwrap_or(false);
    let font_index = read(storage, FONT_KEY)
        .and_then(|id| {
            let index = catalog.font_index(&id);
            accept(index.is_some(), FONT_KEY, &id);
            index
        })
        .unwrap_or_else(|| catalog.default_font_index());

    Loaded {
        theme_index,
        font_index,
        dark_mode,
    }
}

/// Read one persisted entry, treating storage failures as absence.
fn read(storage: &dyn SelectionStorage, key: &str) -> Option<String> {
    match storage.load(key) {
        Ok(value) => {
            if value.is_none() {
                tracing::debug!(key, "no persisted value, using default");
            }
            value
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted value, using default");
            None
        }
    }
}

fn accept(valid: bool, key: &str, value: &str) -> bool {
    if !valid {
        tracing::warn!(key, value, "ignoring invalid persisted value");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn fresh() -> (ThemeStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = ThemeStore::initialize(ThemeCatalog::builtin(), storage.clone());
        (store, storage)
    }

    #[test]
    fn fresh_start_uses_defaults_without_writing() {
        let (store, storage) = fresh();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.theme, "professional-blue");
        assert!(!snapshot.dark_mode);
        assert_eq!(snapshot.font, "inter");
        assert!(storage.entries().is_empty());
    }

    #[test]
    fn invalid_fields_default_independently() {
        let storage = MemoryStorage::with_entries([
            (THEME_KEY, "neon-lime"),
            (DARK_MODE_KEY, "true"),
            (FONT_KEY, "mono"),
        ]);
        let store = ThemeStore::initialize(ThemeCatalog::builtin(), storage);
        let selection = store.selection();
        assert_eq!(selection.theme, "professional-blue");
        assert!(selection.dark_mode);
        assert_eq!(selection.font, "mono");
    }

    #[test]
    fn unparseable_dark_mode_defaults_to_light() {
        let storage = MemoryStorage::with_entries([(DARK_MODE_KEY, "yes")]);
        let store = ThemeStore::initialize(ThemeCatalog::builtin(), storage);
        assert!(!store.snapshot().dark_mode);
    }

    #[test]
    fn current_rows_track_selection() {
        let (store, _) = fresh();
        store.select_theme("luxury-gold").unwrap();
        store.select_font("serif").unwrap();
        assert_eq!(store.current_theme().metadata.label, "Luxury Gold");
        assert_eq!(store.current_font().label, "Serif");
        assert_eq!(
            store.style().get("font-family"),
            Some("Georgia, 'Times New Roman', serif")
        );
    }

    #[test]
    fn set_dark_mode_is_explicit() {
        let (store, storage) = fresh();
        assert!(store.set_dark_mode(true).dark_mode);
        assert!(store.set_dark_mode(true).dark_mode);
        assert_eq!(
            storage.entries().get(DARK_MODE_KEY).map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn debug_output_names_the_snapshot() {
        let (store, _) = fresh();
        let debug = format!("{store:?}");
        assert!(debug.contains("professional-blue"));
    }
}
