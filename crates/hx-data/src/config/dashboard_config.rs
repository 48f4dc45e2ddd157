//! Dashboard configuration loaded from `heritage.json`

use std::path::{Path, PathBuf};
use std::time::Duration;

use hx_core::HiddenGemsRule;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cache::InvalidationPolicy;
use crate::Result;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "HERITAGE_CONFIG";

/// Environment variable overriding `store.database`
pub const DATABASE_ENV: &str = "HERITAGE_DB";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "heritage.json";

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub store: StoreConfig,
    pub assets: AssetConfig,
    pub cache: CacheConfig,
    pub hidden_gems: HiddenGemsRule,
}

/// Where the heritage store lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file
    pub database: PathBuf,

    /// Schema qualifier for table names (an attached database name)
    pub schema: Option<String>,

    /// Database file attached under `schema` when the store opens
    pub attach: Option<PathBuf>,

    /// Where "Create Sample Database" writes; never the store itself
    pub sample_database: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("data/heritage.db"),
            schema: None,
            attach: None,
            sample_database: PathBuf::from("data/heritage_sample.db"),
        }
    }
}

impl StoreConfig {
    /// Table name qualified with the configured schema
    pub fn qualified(&self, table: &str) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, table),
            None => table.to_string(),
        }
    }
}

/// Image asset lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub directory: PathBuf,

    /// File inside `directory` used whenever a named image is missing
    pub default_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("images"),
            default_image: "default_art.jpg".to_string(),
        }
    }
}

/// Query cache settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Expire cached tables after this many seconds; absent keeps them
    /// for the whole session
    pub max_age_secs: Option<u64>,
}

impl CacheConfig {
    pub fn policy(&self) -> InvalidationPolicy {
        match self.max_age_secs {
            Some(secs) => InvalidationPolicy::MaxAge(Duration::from_secs(secs)),
            None => InvalidationPolicy::Never,
        }
    }
}

impl DashboardConfig {
    /// Load from `HERITAGE_CONFIG` or `heritage.json`, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::load_from(&path)?;
        if let Some(database) = std::env::var_os(DATABASE_ENV) {
            config.store.database = PathBuf::from(database);
            info!("Database overridden by {}: {:?}", DATABASE_ENV, config.store.database);
        }
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = serde_json::from_str(&text)?;
                info!("Loaded configuration from {:?}", path);
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No configuration at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataError;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_from(&dir.path().join("heritage.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.cache.policy(), InvalidationPolicy::Never);
        assert_eq!(config.hidden_gems.visitor_threshold, 10_000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heritage.json");
        std::fs::write(
            &path,
            r#"{ "store": { "database": "/srv/heritage.db", "schema": "curated",
                            "attach": "/srv/curated.db" },
                 "cache": { "max_age_secs": 600 } }"#,
        )
        .unwrap();

        let config = DashboardConfig::load_from(&path).unwrap();
        assert_eq!(config.store.database, PathBuf::from("/srv/heritage.db"));
        assert_eq!(config.store.qualified("art_forms"), "curated.art_forms");
        assert_eq!(config.store.attach, Some(PathBuf::from("/srv/curated.db")));
        assert_eq!(config.store.sample_database, PathBuf::from("data/heritage_sample.db"));
        assert_eq!(config.assets.default_image, "default_art.jpg");
        assert_eq!(
            config.cache.policy(),
            InvalidationPolicy::MaxAge(Duration::from_secs(600))
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heritage.json");
        std::fs::write(&path, "{ store: ").unwrap();

        assert!(matches!(DashboardConfig::load_from(&path), Err(DataError::Config(_))));
    }
}
