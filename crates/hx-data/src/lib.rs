//! Data access for the heritage explorer

pub mod assets;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod connection;
pub mod rows;
pub mod sample;
pub mod schema;
pub mod sources;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use assets::{AssetLookup, AssetResolver, FallbackReason};
pub use cache::{InvalidationPolicy, QueryCache, QueryId};
pub use catalog::Catalog;
pub use config::DashboardConfig;
pub use connection::ConnectionProvider;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open database {path}: {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Schema detection error: {0}")]
    SchemaDetection(String),

    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Column '{table}.{column}' at row {row}: expected {expected}")]
    ColumnType {
        table: String,
        column: String,
        row: usize,
        expected: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Refusing to overwrite {path}: it is not a sample database")]
    NotSampleStore { path: String },
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Config(error.to_string())
    }
}

pub type Result<T, E = DataError> = std::result::Result<T, E>;
