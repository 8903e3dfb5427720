use crate::{DomainEvent, Error, EventHandler, EventKind};
use log::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-local registry of event handlers, keyed by event kind.
///
/// Handlers for a kind are kept in registration order and invoked
/// synchronously by [`notify`](Self::notify). Registering the same handler
/// twice is allowed; it then runs twice per event.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list of handlers for `kind`.
    pub fn register(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        debug!("Registering handler for {kind}");
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Removes the first registration of `handler` under `kind`.
    /// Handlers are matched by identity (same allocation), not by value.
    /// Does nothing if the handler isn't registered.
    pub fn unregister<H>(&mut self, kind: EventKind, handler: &Arc<H>)
    where
        H: EventHandler + ?Sized,
    {
        if let Some(handlers) = self.handlers.get_mut(&kind) {
            if let Some(index) = handlers.iter().position(|registered| {
                std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(handler))
            }) {
                handlers.remove(index);
                debug!("Unregistered handler for {kind}");
            }
        }
    }

    /// Removes every handler for every kind.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Delivers `event` to each handler registered for its kind, in
    /// registration order, on the calling thread.
    ///
    /// A handler error is returned as-is and the handlers after it do not run.
    pub fn notify(&self, event: &DomainEvent) -> Result<(), Error> {
        let kind = event.kind();

        let Some(handlers) = self.handlers.get(&kind) else {
            trace!("No handlers registered for {kind}");
            return Ok(());
        };

        debug!("Notifying {} handler(s) of {kind}", handlers.len());

        for handler in handlers {
            handler.handle(event)?;
        }

        Ok(())
    }

    /// The full registry, for inspecting what is registered.
    pub fn handlers(&self) -> &HashMap<EventKind, Vec<Arc<dyn EventHandler>>> {
        &self.handlers
    }

    /// Handlers registered for `kind`, in registration order.
    pub fn handlers_for(&self, kind: EventKind) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventErrorKind, EventPayload};
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every event it handles into a log shared between handlers,
    /// so tests can assert on call order across handlers.
    struct RecordingHandler {
        name: &'static str,
        calls: Arc<Mutex<Vec<(&'static str, EventKind)>>>,
    }

    impl RecordingHandler {
        fn new(name: &'static str, calls: &Arc<Mutex<Vec<(&'static str, EventKind)>>>) -> Arc<Self> {
            Arc::new(Self {
                name,
                calls: Arc::clone(calls),
            })
        }
    }

    impl EventHandler for RecordingHandler {
        fn handle(&self, event: &DomainEvent) -> Result<(), Error> {
            self.calls.lock().unwrap().push((self.name, event.kind()));
            Ok(())
        }
    }

    struct FailingHandler;

    impl EventHandler for FailingHandler {
        fn handle(&self, _event: &DomainEvent) -> Result<(), Error> {
            Err(Error::handler("mail server unreachable"))
        }
    }

    fn address_changed() -> DomainEvent {
        DomainEvent::new(EventPayload::CustomerChangeAddress {
            customer_id: "customer-1".to_string(),
            customer_name: "Customer 1".to_string(),
            address: json!({"street": "Street 1", "number": 21, "zip": "Zip 1", "city": "City 1"}),
        })
    }

    fn product_created() -> DomainEvent {
        DomainEvent::new(EventPayload::ProductCreated {
            product: json!({"id": "prod-123", "name": "Chocolate", "price": 5.0}),
        })
    }

    fn call_log() -> Arc<Mutex<Vec<(&'static str, EventKind)>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn register_adds_the_handler_under_its_kind() {
        let calls = call_log();
        let mut dispatcher = EventDispatcher::new();

        dispatcher.register(
            EventKind::CustomerChangeAddress,
            RecordingHandler::new("log", &calls),
        );

        assert!(dispatcher
            .handlers()
            .contains_key(&EventKind::CustomerChangeAddress));
        assert_eq!(dispatcher.handlers_for(EventKind::CustomerChangeAddress).len(), 1);
        assert!(dispatcher.handlers_for(EventKind::ProductCreated).is_empty());
    }

    #[test]
    fn notify_calls_the_registered_handler_once_with_the_event() {
        let calls = call_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            EventKind::CustomerChangeAddress,
            RecordingHandler::new("log", &calls),
        );

        dispatcher.notify(&address_changed()).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![("log", EventKind::CustomerChangeAddress)]
        );
    }

    #[test]
    fn notify_only_reaches_handlers_of_the_event_kind_in_registration_order() {
        let calls = call_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, RecordingHandler::new("first", &calls));
        dispatcher.register(
            EventKind::CustomerChangeAddress,
            RecordingHandler::new("address", &calls),
        );
        dispatcher.register(EventKind::ProductCreated, RecordingHandler::new("second", &calls));

        dispatcher.notify(&product_created()).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                ("first", EventKind::ProductCreated),
                ("second", EventKind::ProductCreated)
            ]
        );
    }

    #[test]
    fn notify_without_handlers_is_a_no_op() {
        let dispatcher = EventDispatcher::new();
        assert!(dispatcher.notify(&product_created()).is_ok());
    }

    #[test]
    fn duplicate_registrations_both_fire() {
        let calls = call_log();
        let handler = RecordingHandler::new("email", &calls);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, handler.clone());
        dispatcher.register(EventKind::ProductCreated, handler);

        dispatcher.notify(&product_created()).unwrap();

        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn unregister_removes_only_the_given_handler() {
        let calls = call_log();
        let kept = RecordingHandler::new("kept", &calls);
        let removed = RecordingHandler::new("removed", &calls);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, removed.clone());
        dispatcher.register(EventKind::ProductCreated, kept);

        dispatcher.unregister(EventKind::ProductCreated, &removed);
        dispatcher.notify(&product_created()).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![("kept", EventKind::ProductCreated)]
        );
    }

    #[test]
    fn unregister_removes_a_single_duplicate() {
        let calls = call_log();
        let handler = RecordingHandler::new("email", &calls);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, handler.clone());
        dispatcher.register(EventKind::ProductCreated, handler.clone());

        dispatcher.unregister(EventKind::ProductCreated, &handler);

        assert_eq!(dispatcher.handlers_for(EventKind::ProductCreated).len(), 1);
    }

    #[test]
    fn unregister_of_an_unknown_handler_is_a_no_op() {
        let calls = call_log();
        let registered = RecordingHandler::new("registered", &calls);
        let stranger = RecordingHandler::new("stranger", &calls);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, registered);

        dispatcher.unregister(EventKind::ProductCreated, &stranger);
        dispatcher.unregister(EventKind::CustomerCreated, &stranger);

        assert_eq!(dispatcher.handlers_for(EventKind::ProductCreated).len(), 1);
    }

    #[test]
    fn unregister_all_silences_every_kind() {
        let calls = call_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, RecordingHandler::new("email", &calls));
        dispatcher.register(
            EventKind::CustomerChangeAddress,
            RecordingHandler::new("log", &calls),
        );

        dispatcher.unregister_all();
        dispatcher.notify(&product_created()).unwrap();
        dispatcher.notify(&address_changed()).unwrap();

        assert!(dispatcher.handlers().is_empty());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn handler_error_propagates_and_stops_remaining_handlers() {
        let calls = call_log();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(EventKind::ProductCreated, RecordingHandler::new("before", &calls));
        dispatcher.register(EventKind::ProductCreated, Arc::new(FailingHandler));
        dispatcher.register(EventKind::ProductCreated, RecordingHandler::new("after", &calls));

        let err = dispatcher.notify(&product_created()).unwrap_err();

        assert_eq!(
            err.error_kind,
            EventErrorKind::Handler("mail server unreachable".to_string())
        );
        assert_eq!(
            *calls.lock().unwrap(),
            vec![("before", EventKind::ProductCreated)]
        );
    }
}
