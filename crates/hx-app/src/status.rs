//! Status bar message fed from the event bus

use std::sync::Arc;

use hx_core::events::events::{AssetFallback, StoreChanged, TableLoadFailed, TableLoaded};
use hx_core::EventBus;
use parking_lot::Mutex;

/// Last message worth showing in the status bar
#[derive(Clone, Default)]
pub struct StatusLine {
    message: Arc<Mutex<Option<String>>>,
}

impl StatusLine {
    /// Subscribe to every dashboard event on `bus`
    pub fn attach(bus: &EventBus) -> Self {
        let status = Self::default();

        let sink = status.clone();
        bus.subscribe_fn(move |e: &TableLoaded| {
            sink.set(format!("Loaded {} rows from {}", e.rows, e.table));
        });
        let sink = status.clone();
        bus.subscribe_fn(move |e: &TableLoadFailed| {
            sink.set(format!("Failed to load {}: {}", e.table, e.error));
        });
        let sink = status.clone();
        bus.subscribe_fn(move |e: &AssetFallback| {
            sink.set(format!("Image '{}' {}, showing default", e.requested, e.reason));
        });
        let sink = status.clone();
        bus.subscribe_fn(move |e: &StoreChanged| {
            sink.set(format!("Opened {}", e.database));
        });

        status
    }

    pub fn set(&self, message: impl Into<String>) {
        *self.message.lock() = Some(message.into());
    }

    pub fn current(&self) -> Option<String> {
        self.message.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_event_wins() {
        let bus = EventBus::new();
        let status = StatusLine::attach(&bus);
        assert_eq!(status.current(), None);

        bus.publish(TableLoaded {
            table: "art_forms",
            rows: 8,
        });
        assert_eq!(status.current().as_deref(), Some("Loaded 8 rows from art_forms"));

        bus.publish(TableLoadFailed {
            table: "tourism_trends",
            error: "no such table".into(),
        });
        assert_eq!(
            status.current().as_deref(),
            Some("Failed to load tourism_trends: no such table")
        );
    }
}
