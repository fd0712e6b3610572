use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Result, SelectionStorage};

/// In-memory storage. Clones share the same entries, so a clone kept by the
/// caller sees what a store wrote and can seed the next store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with entries, as left by an earlier session.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        storage
    }

    /// Copy of the current entries.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl SelectionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let observer = MemoryStorage::new();
        let mut writer = observer.clone();
        writer.store("theme", "minimal-gray").unwrap();
        assert_eq!(
            observer.load("theme").unwrap().as_deref(),
            Some("minimal-gray")
        );
        assert_eq!(observer.load("font").unwrap(), None);
    }

    #[test]
    fn seeded_entries_are_visible() {
        let storage = MemoryStorage::with_entries([("darkMode", "true")]);
        assert_eq!(storage.load("darkMode").unwrap().as_deref(), Some("true"));
        storage.clear();
        assert!(storage.entries().is_empty());
    }
}
