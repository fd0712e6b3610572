//! Ordered listener registry with explicit unsubscribe tokens.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::selection::EffectiveSnapshot;

type Callback = Rc<RefCell<dyn FnMut(&EffectiveSnapshot)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Listeners in registration order.
#[derive(Clone, Default)]
pub(crate) struct Listeners {
    registry: Rc<RefCell<Registry>>,
}

impl Listeners {
    pub(crate) fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&EffectiveSnapshot) + 'static,
    {
        let callback: Callback = Rc::new(RefCell::new(listener));
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, callback));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Call every listener once, in registration order.
    ///
    /// Works from a copy of the registry so listeners may subscribe or
    /// unsubscribe while the round runs. A listener removed mid-round is
    /// skipped; one added mid-round waits for the next round.
    pub(crate) fn notify(&self, snapshot: &EffectiveSnapshot) {
        let round: Vec<(u64, Callback)> = self.registry.borrow().entries.clone();
        for (id, callback) in round {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            let mut callback = callback.borrow_mut();
            (&mut *callback)(snapshot);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping it keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the listener. Calling this again, or after the store is gone,
    /// does nothing.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_catalog::ThemeCatalog;

    fn snapshot() -> EffectiveSnapshot {
        let catalog = ThemeCatalog::builtin();
        let entry = &catalog.themes()[0];
        EffectiveSnapshot {
            theme: entry.id.clone(),
            dark_mode: false,
            font: "inter".to_string(),
            colors: entry.light.clone(),
        }
    }

    #[test]
    fn notifies_in_registration_order() {
        let listeners = Listeners::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            listeners.subscribe(move |_| log.borrow_mut().push(name));
        }
        listeners.notify(&snapshot());
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let listeners = Listeners::default();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let subscription = listeners.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(subscription.is_active());
        subscription.unsubscribe();
        subscription.unsubscribe();
        assert!(!subscription.is_active());
        assert_eq!(listeners.len(), 0);

        listeners.notify(&snapshot());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn listener_removed_mid_round_is_skipped() {
        let listeners = Listeners::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let first_log = Rc::clone(&log);
        let first_victim = Rc::clone(&victim);
        listeners.subscribe(move |_| {
            first_log.borrow_mut().push("first");
            if let Some(subscription) = first_victim.borrow().as_ref() {
                subscription.unsubscribe();
            }
        });
        let second_log = Rc::clone(&log);
        let second = listeners.subscribe(move |_| second_log.borrow_mut().push("second"));
        *victim.borrow_mut() = Some(second);

        listeners.notify(&snapshot());
        assert_eq!(*log.borrow(), ["first"]);
    }

    #[test]
    fn unsubscribe_after_registry_dropped_is_harmless() {
        let listeners = Listeners::default();
        let subscription = listeners.subscribe(|_| {});
        drop(listeners);
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }
}
