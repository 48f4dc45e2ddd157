//! Dashboard sections for the heritage explorer

pub mod cards;
pub mod charts;
mod dashboard;
pub mod sections;

pub use dashboard::Dashboard;
pub use sections::{Section, TableSlot};

use std::sync::Arc;

use hx_core::{EventBus, HiddenGemsRule};
use hx_data::{AssetResolver, Catalog};

/// Context passed to sections during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// Store the sections read from
    pub catalog: Arc<Catalog>,

    pub assets: Arc<AssetResolver>,

    pub events: Arc<EventBus>,

    pub hidden_gems: HiddenGemsRule,

    /// Bumped whenever the catalog is reloaded or replaced; sections
    /// retry failed fetches once it changes
    pub generation: u64,
}

impl ViewerContext {
    /// Point the sections at a different catalog
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        self.generation += 1;
    }

    /// Drop cached tables so the next frame refetches them
    pub fn reload(&mut self) {
        self.catalog.reload();
        self.generation += 1;
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> (tempfile::TempDir, ViewerContext) {
    use hx_data::config::{AssetConfig, StoreConfig};
    use hx_data::InvalidationPolicy;

    let dir = tempfile::tempdir().unwrap();
    let store = StoreConfig {
        database: dir.path().join("heritage.db"),
        sample_database: dir.path().join("heritage_sample.db"),
        ..StoreConfig::default()
    };
    let assets = AssetConfig {
        directory: dir.path().join("images"),
        default_image: "default_art.jpg".into(),
    };
    let events = Arc::new(EventBus::new());
    let ctx = ViewerContext {
        catalog: Arc::new(Catalog::new(store, InvalidationPolicy::Never).with_events(events.clone())),
        assets: Arc::new(AssetResolver::new(&assets)),
        events,
        hidden_gems: HiddenGemsRule::default(),
        generation: 0,
    };
    (dir, ctx)
}
