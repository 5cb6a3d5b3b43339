//! Change notification for a single game.
//!
//! Listeners are held as [`Weak`] references: the registry never keeps a
//! listener alive, and a listener dropped by its owner is skipped and pruned
//! on the next notification pass. Notification runs synchronously, in
//! registration order, on the caller's thread.
//!
//! Listeners receive `&GameState`, which only exposes queries. A listener
//! that panics unwinds straight through [`GameState::apply_move`]; the
//! registry does not catch it.

use std::fmt;
use std::rc::{Rc, Weak};

use super::state::GameState;

/// Something that wants to hear about every accepted move.
///
/// Callbacks take `&self`; listeners that keep state use interior
/// mutability.
pub trait BoardObserver {
    fn on_board_changed(&self, game: &GameState);
}

/// Ordered list of non-owning listener handles. Duplicates are allowed and
/// are notified once per registration.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Weak<dyn BoardObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<O: BoardObserver + 'static>(&mut self, observer: &Rc<O>) {
        let weak = Rc::downgrade(observer);
        self.observers.push(weak);
    }

    /// Listeners whose owner still holds them.
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|observer| observer.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget listeners whose owner has dropped them.
    pub(crate) fn prune(&mut self) {
        self.observers.retain(|observer| observer.strong_count() > 0);
    }

    pub(crate) fn notify_all(&self, game: &GameState) {
        tracing::trace!(listeners = self.observers.len(), "notifying observers");
        for observer in &self.observers {
            if let Some(observer) = observer.upgrade() {
                observer.on_board_changed(game);
            }
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Counter(Cell<usize>);

    impl BoardObserver for Counter {
        fn on_board_changed(&self, _game: &GameState) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_registry_holds_weak_handles() {
        let counter = Rc::new(Counter(Cell::new(0)));
        let mut registry = ObserverRegistry::new();
        assert!(registry.is_empty());

        registry.register(&counter);
        assert_eq!(registry.len(), 1);
        assert_eq!(Rc::strong_count(&counter), 1);

        registry.notify_all(&GameState::new());
        assert_eq!(counter.0.get(), 1);

        drop(counter);
        assert!(registry.is_empty());
        registry.prune();
        assert_eq!(registry.observers.len(), 0);
    }

    struct Tally(RefCell<Vec<&'static str>>);

    impl BoardObserver for Tally {
        fn on_board_changed(&self, _game: &GameState) {
            self.0.borrow_mut().push("tally");
        }
    }

    #[test]
    fn test_registry_accepts_mixed_listener_types() {
        let counter = Rc::new(Counter(Cell::new(0)));
        let tally = Rc::new(Tally(RefCell::new(Vec::new())));
        let mut registry = ObserverRegistry::new();
        registry.register(&counter);
        registry.register(&tally);
        registry.register(&counter);

        registry.notify_all(&GameState::new());
        assert_eq!(counter.0.get(), 2);
        assert_eq!(*tally.0.borrow(), vec!["tally"]);
        assert_eq!(format!("{registry:?}"), "ObserverRegistry { observers: 3 }");
    }
}
