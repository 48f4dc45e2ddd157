use std::any::{Any, TypeId};
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

/// Dashboard-wide event bus
///
/// Handlers are keyed by event type. Publishing from inside a handler
/// deadlocks; handlers should only record what they receive.
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Events raised while loading and rendering the dashboard
pub mod events {
    use super::Event;

    /// A table was fetched from the store
    #[derive(Debug, Clone)]
    pub struct TableLoaded {
        pub table: &'static str,
        pub rows: usize,
    }

    /// A table fetch failed
    #[derive(Debug, Clone)]
    pub struct TableLoadFailed {
        pub table: &'static str,
        pub error: String,
    }

    /// A card image was replaced by the default image
    #[derive(Debug, Clone)]
    pub struct AssetFallback {
        pub requested: String,
        pub reason: String,
    }

    /// The dashboard was pointed at a different database
    #[derive(Debug, Clone)]
    pub struct StoreChanged {
        pub database: String,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(TableLoaded, TableLoadFailed, AssetFallback, StoreChanged);
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        self.handlers
            .lock()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(handler);
    }

    /// Subscribe a closure that receives the concrete event
    pub fn subscribe_fn<E, F>(&self, mut f: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        self.subscribe::<E>(handler_from_fn(move |event: &dyn Event| {
            if let Some(event) = event.as_any().downcast_ref::<E>() {
                f(event);
            }
        }));
    }

    /// Publish an event
    pub fn publish<E: Event>(&self, event: E) {
        let mut handlers = self.handlers.lock();
        if let Some(event_handlers) = handlers.get_mut(&TypeId::of::<E>()) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::events::{AssetFallback, TableLoaded};
    use super::*;

    #[test]
    fn test_typed_subscription_only_sees_its_event() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        bus.subscribe_fn(move |event: &TableLoaded| sink.lock().push(event.rows));

        bus.publish(TableLoaded { table: "art_forms", rows: 3 });
        bus.publish(AssetFallback {
            requested: "missing.jpg".into(),
            reason: "not found".into(),
        });
        bus.publish(TableLoaded { table: "tourism_trends", rows: 24 });

        assert_eq!(*seen.lock(), vec![3, 24]);
    }
}
