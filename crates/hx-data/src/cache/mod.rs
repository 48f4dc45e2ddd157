//! Query result caching
//!
//! Fetched tables are memoized by query identity. Entries live until the
//! invalidation policy expires them or the cache is cleared.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ahash::AHashMap;
use hx_core::{ArtForm, ArtisanProgram, Destination, Initiative, Record, TourismRecord};
use parking_lot::RwLock;
use tracing::debug;

/// Identity of a cached whole-table query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryId {
    ArtForms,
    Destinations,
    TourismTrends,
    Initiatives,
    ArtisanPrograms,
}

impl QueryId {
    pub const ALL: [QueryId; 5] = [
        QueryId::ArtForms,
        QueryId::Destinations,
        QueryId::TourismTrends,
        QueryId::Initiatives,
        QueryId::ArtisanPrograms,
    ];

    /// Unqualified table the query reads
    pub fn table(&self) -> &'static str {
        match self {
            QueryId::ArtForms => ArtForm::TABLE,
            QueryId::Destinations => Destination::TABLE,
            QueryId::TourismTrends => TourismRecord::TABLE,
            QueryId::Initiatives => Initiative::TABLE,
            QueryId::ArtisanPrograms => ArtisanProgram::TABLE,
        }
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// When cached results stop being served
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidationPolicy {
    /// Keep results until explicitly cleared
    #[default]
    Never,
    /// Refetch once a result is older than this
    MaxAge(Duration),
}

impl InvalidationPolicy {
    fn is_expired(&self, fetched_at: Instant) -> bool {
        match self {
            InvalidationPolicy::Never => false,
            InvalidationPolicy::MaxAge(max_age) => fetched_at.elapsed() >= *max_age,
        }
    }
}

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
}

/// Memoized query results keyed by [`QueryId`]
pub struct QueryCache {
    entries: RwLock<AHashMap<QueryId, CacheEntry>>,
    policy: InvalidationPolicy,
}

impl QueryCache {
    pub fn new(policy: InvalidationPolicy) -> Self {
        Self {
            entries: RwLock::new(AHashMap::new()),
            policy,
        }
    }

    pub fn policy(&self) -> InvalidationPolicy {
        self.policy
    }

    /// Cached value for `id`, unless missing, expired or of another type
    pub fn get<T: Send + Sync + 'static>(&self, id: QueryId) -> Option<Arc<T>> {
        let entries = self.entries.read();
        let entry = entries.get(&id)?;
        if self.policy.is_expired(entry.fetched_at) {
            return None;
        }
        entry.value.clone().downcast::<T>().ok()
    }

    pub fn put<T: Send + Sync + 'static>(&self, id: QueryId, value: Arc<T>) {
        self.entries.write().insert(
            id,
            CacheEntry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Serve `id` from the cache or run `fetch` and cache its result.
    /// Failed fetches are not cached.
    pub fn get_or_try_insert_with<T, E, F>(&self, id: QueryId, fetch: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get::<T>(id) {
            debug!("Cache hit for {}", id);
            return Ok(value);
        }
        let value = Arc::new(fetch()?);
        self.put(id, value.clone());
        Ok(value)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Ids with a live cached result, in declaration order
    pub fn cached_ids(&self) -> Vec<QueryId> {
        let entries = self.entries.read();
        let mut ids: Vec<QueryId> = entries
            .iter()
            .filter(|(_, entry)| !self.policy.is_expired(entry.fetched_at))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(InvalidationPolicy::Never)
    }
}
