//! Query layer: one memoized whole-table fetch per heritage table

use std::path::Path;
use std::sync::Arc;

use hx_core::events::events::{TableLoadFailed, TableLoaded};
use hx_core::{ArtForm, ArtisanProgram, Destination, EventBus, Initiative, Record, TourismRecord};
use tracing::{error, info};

use crate::cache::{InvalidationPolicy, QueryCache, QueryId};
use crate::config::{DashboardConfig, StoreConfig};
use crate::connection::ConnectionProvider;
use crate::rows::FromBatch;
use crate::schema::detect_schema;
use crate::sources::read_table;
use crate::Result;

/// The heritage store as seen by the dashboard
pub struct Catalog {
    store: StoreConfig,
    provider: ConnectionProvider,
    cache: QueryCache,
    events: Option<Arc<EventBus>>,
}

impl Catalog {
    pub fn new(store: StoreConfig, policy: InvalidationPolicy) -> Self {
        let mut provider = ConnectionProvider::new(&store.database);
        if let (Some(schema), Some(attach)) = (&store.schema, &store.attach) {
            provider = provider.with_attachment(schema.as_str(), attach);
        }
        Self {
            provider,
            store,
            cache: QueryCache::new(policy),
            events: None,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.store.clone(), config.cache.policy())
    }

    /// Publish load events on `bus`
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn database(&self) -> &Path {
        self.provider.path()
    }

    pub fn is_connected(&self) -> bool {
        self.provider.is_open()
    }

    pub fn art_forms(&self) -> Result<Arc<Vec<ArtForm>>> {
        self.fetch(QueryId::ArtForms)
    }

    pub fn destinations(&self) -> Result<Arc<Vec<Destination>>> {
        self.fetch(QueryId::Destinations)
    }

    pub fn tourism_trends(&self) -> Result<Arc<Vec<TourismRecord>>> {
        self.fetch(QueryId::TourismTrends)
    }

    pub fn initiatives(&self) -> Result<Arc<Vec<Initiative>>> {
        self.fetch(QueryId::Initiatives)
    }

    pub fn artisan_programs(&self) -> Result<Arc<Vec<ArtisanProgram>>> {
        self.fetch(QueryId::ArtisanPrograms)
    }

    /// Drop every memoized table; the next access refetches
    pub fn reload(&self) {
        self.cache.clear();
        info!("Cleared cached tables for {:?}", self.database());
    }

    pub fn cached_queries(&self) -> Vec<QueryId> {
        self.cache.cached_ids()
    }

    /// Close the store connection
    pub fn shutdown(&self) -> Result<()> {
        self.provider.close()
    }

    fn fetch<R: Record + FromBatch>(&self, id: QueryId) -> Result<Arc<Vec<R>>> {
        debug_assert_eq!(id.table(), R::TABLE);
        self.cache.get_or_try_insert_with(id, || {
            let result = self.read::<R>();
            match &result {
                Ok(rows) => {
                    info!("Loaded {} rows from {}", rows.len(), id);
                    self.publish(TableLoaded {
                        table: R::TABLE,
                        rows: rows.len(),
                    });
                }
                Err(e) => {
                    error!("Failed to load {}: {}", id, e);
                    self.publish(TableLoadFailed {
                        table: R::TABLE,
                        error: e.to_string(),
                    });
                }
            }
            result
        })
    }

    fn read<R: Record + FromBatch>(&self) -> Result<Vec<R>> {
        let table = self.store.qualified(R::TABLE);
        self.provider.with_connection(|conn| {
            let schema = detect_schema(conn, self.store.schema.as_deref(), R::TABLE)?;
            let batch = read_table(conn, &table, Arc::new(schema))?;
            R::from_batch(&table, &batch)
        })
    }

    fn publish<E: hx_core::events::Event>(&self, event: E) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::create_sample_database;
    use crate::DataError;
    use parking_lot::Mutex;
    use rusqlite::Connection;
    use std::path::PathBuf;

    fn sample_store() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heritage.db");
        create_sample_database(&path).unwrap();
        (dir, path)
    }

    fn catalog_for(path: &Path) -> Catalog {
        Catalog::new(
            StoreConfig {
                database: path.to_path_buf(),
                ..StoreConfig::default()
            },
            InvalidationPolicy::Never,
        )
    }

    #[test]
    fn test_fetches_every_table() {
        let (_dir, path) = sample_store();
        let catalog = catalog_for(&path);
        assert!(!catalog.is_connected());

        assert!(!catalog.art_forms().unwrap().is_empty());
        assert!(!catalog.destinations().unwrap().is_empty());
        assert!(!catalog.tourism_trends().unwrap().is_empty());
        assert!(!catalog.initiatives().unwrap().is_empty());
        assert!(!catalog.artisan_programs().unwrap().is_empty());
        assert!(catalog.is_connected());
        assert_eq!(catalog.cached_queries(), QueryId::ALL.to_vec());

        catalog.shutdown().unwrap();
        assert!(!catalog.is_connected());
    }

    #[test]
    fn test_fetches_are_memoized_until_reload() {
        let (_dir, path) = sample_store();
        let catalog = catalog_for(&path);

        let first = catalog.art_forms().unwrap();
        // Rows added behind the cache stay invisible until reload
        Connection::open(&path)
            .unwrap()
            .execute(
                "INSERT INTO art_forms (art_form, state, category, origin, materials, description, significance)
                 VALUES ('Pattachitra', 'Odisha', 'Painting', 'Puri', 'Cloth', 'Scroll painting', 'Temple lore')",
                [],
            )
            .unwrap();

        let second = catalog.art_forms().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        catalog.reload();
        assert!(catalog.cached_queries().is_empty());
        let third = catalog.art_forms().unwrap();
        assert_eq!(third.len(), first.len() + 1);
    }

    #[test]
    fn test_events_report_loads_and_failures() {
        let (_dir, path) = sample_store();
        Connection::open(&path)
            .unwrap()
            .execute_batch("DROP TABLE artisan_programs")
            .unwrap();

        let bus = Arc::new(EventBus::new());
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let failed = Arc::new(Mutex::new(Vec::new()));
        let sink = loaded.clone();
        bus.subscribe_fn(move |e: &TableLoaded| sink.lock().push(e.table));
        let sink = failed.clone();
        bus.subscribe_fn(move |e: &TableLoadFailed| sink.lock().push(e.table));

        let catalog = catalog_for(&path).with_events(bus);
        catalog.initiatives().unwrap();
        assert!(matches!(
            catalog.artisan_programs(),
            Err(DataError::SchemaDetection(_))
        ));

        assert_eq!(*loaded.lock(), vec!["government_initiatives"]);
        assert_eq!(*failed.lock(), vec!["artisan_programs"]);
        assert_eq!(catalog.cached_queries(), vec![QueryId::Initiatives]);
    }

    #[test]
    fn test_missing_column_aborts_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch(
                "CREATE TABLE tourism_trends (site_name TEXT, visitors INTEGER);
                 INSERT INTO tourism_trends VALUES ('Hampi', 100);",
            )
            .unwrap();

        let result = catalog_for(&path).tourism_trends();
        assert!(matches!(
            result,
            Err(DataError::MissingColumn { ref column, .. }) if column == "month"
        ));
    }

    #[test]
    fn test_schema_qualified_fetch_from_attached_store() {
        let (dir, curated) = sample_store();
        let main = dir.path().join("main.db");
        Connection::open(&main)
            .unwrap()
            .execute_batch("CREATE TABLE notes (text TEXT)")
            .unwrap();

        let catalog = Catalog::new(
            StoreConfig {
                database: main,
                schema: Some("curated".into()),
                attach: Some(curated.clone()),
                ..StoreConfig::default()
            },
            InvalidationPolicy::Never,
        );

        let direct = catalog_for(&curated);
        assert_eq!(*catalog.art_forms().unwrap(), *direct.art_forms().unwrap());
        assert_eq!(
            catalog.tourism_trends().unwrap().len(),
            direct.tourism_trends().unwrap().len()
        );
    }

    #[test]
    fn test_missing_database_fails_every_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_for(&dir.path().join("absent.db"));
        assert!(matches!(catalog.destinations(), Err(DataError::Connection { .. })));
        assert!(catalog.cached_queries().is_empty());
    }
}
