use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use super::{CharacterInput, EventOutcome};

/// A receiver of character input events.
pub trait TextInputHandler {
    /// Handle a single text-entry event.
    fn on_text_entered(&mut self, event: CharacterInput) -> EventOutcome;
}

/// Routes text-entry events to registered handlers.
///
/// The router never owns its handlers: it holds weak references, so a
/// widget that is dropped simply stops receiving events. Dead registrations
/// are pruned on the next dispatch.
#[derive(Default)]
pub struct InputRouter {
    /// Registered handlers, in registration order.
    handlers: Vec<Weak<RefCell<dyn TextInputHandler>>>,
}

impl InputRouter {
    /// Construct an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. The router keeps only a weak reference.
    pub fn register<H>(&mut self, handler: &Rc<RefCell<H>>)
    where
        H: TextInputHandler + 'static,
    {
        let handler: Rc<RefCell<dyn TextInputHandler>> = handler.clone();
        self.handlers.push(Rc::downgrade(&handler));
    }

    /// Number of registrations whose handler is still alive.
    pub fn len(&self) -> usize {
        self.handlers
            .iter()
            .filter(|h| h.strong_count() > 0)
            .count()
    }

    /// True if no live handler is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver an event to live handlers in registration order, stopping at
    /// the first one that handles it.
    pub fn dispatch(&mut self, event: CharacterInput) -> EventOutcome {
        self.handlers.retain(|h| h.strong_count() > 0);
        for handler in &self.handlers {
            let Some(handler) = handler.upgrade() else {
                continue;
            };
            // A handler that is already borrowed is mid-dispatch; skip it
            // rather than panic.
            let Ok(mut handler) = handler.try_borrow_mut() else {
                tracing::debug!("text input handler busy, skipping");
                continue;
            };
            if handler.on_text_entered(event) == EventOutcome::Handle {
                return EventOutcome::Handle;
            }
        }
        EventOutcome::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every event it sees.
    struct Recorder {
        /// Characters received.
        seen: String,
        /// Outcome to report.
        outcome: EventOutcome,
    }

    impl TextInputHandler for Recorder {
        fn on_text_entered(&mut self, event: CharacterInput) -> EventOutcome {
            if let Some(c) = event.char() {
                self.seen.push(c);
            }
            self.outcome
        }
    }

    fn recorder(outcome: EventOutcome) -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder {
            seen: String::new(),
            outcome,
        }))
    }

    #[test]
    fn dispatch_stops_at_first_handler() {
        let first = recorder(EventOutcome::Handle);
        let second = recorder(EventOutcome::Handle);
        let mut router = InputRouter::new();
        router.register(&first);
        router.register(&second);

        assert_eq!(router.dispatch('a'.into()), EventOutcome::Handle);
        assert_eq!(first.borrow().seen, "a");
        assert_eq!(second.borrow().seen, "");
    }

    #[test]
    fn ignored_events_fall_through() {
        let first = recorder(EventOutcome::Ignore);
        let second = recorder(EventOutcome::Handle);
        let mut router = InputRouter::new();
        router.register(&first);
        router.register(&second);

        assert_eq!(router.dispatch('z'.into()), EventOutcome::Handle);
        assert_eq!(first.borrow().seen, "z");
        assert_eq!(second.borrow().seen, "z");
    }

    #[test]
    fn dropped_handlers_are_pruned() {
        let kept = recorder(EventOutcome::Ignore);
        let mut router = InputRouter::new();
        router.register(&kept);
        {
            let gone = recorder(EventOutcome::Handle);
            router.register(&gone);
            assert_eq!(router.len(), 2);
        }
        assert_eq!(router.len(), 1);
        assert_eq!(router.dispatch('q'.into()), EventOutcome::Ignore);
        assert_eq!(kept.borrow().seen, "q");

        drop(kept);
        assert!(router.is_empty());
        assert_eq!(router.dispatch('q'.into()), EventOutcome::Ignore);
    }
}
