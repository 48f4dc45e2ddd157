//! Schema detection for store tables

use arrow::datatypes::{DataType, Field, Schema};
use rusqlite::Connection;

use crate::{DataError, Result};

/// Arrow type for a declared SQLite column type, following SQLite's
/// type affinity rules
pub fn arrow_type_for(declared: &str) -> DataType {
    let declared = declared.to_uppercase();
    if declared == "BOOLEAN" || declared == "BOOL" {
        DataType::Boolean
    } else if declared.contains("INT") {
        DataType::Int64
    } else if declared.contains("CHAR") || declared.contains("CLOB") || declared.contains("TEXT") {
        DataType::Utf8
    } else if declared.contains("REAL")
        || declared.contains("FLOA")
        || declared.contains("DOUB")
        || declared.contains("NUMERIC")
        || declared.contains("DECIMAL")
    {
        DataType::Float64
    } else {
        // Untyped, BLOB and date columns are read as text
        DataType::Utf8
    }
}

/// Detect the schema of `table` from `PRAGMA table_info`.
///
/// Every field is nullable; required values are checked when rows are
/// converted to records.
pub fn detect_schema(conn: &Connection, schema: Option<&str>, table: &str) -> Result<Schema> {
    let query = match schema {
        Some(schema) => format!("PRAGMA {}.table_info({})", schema, table),
        None => format!("PRAGMA table_info({})", table),
    };
    let mut stmt = conn.prepare(&query)?;

    let columns = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(1)?, // column name
                row.get::<_, String>(2)?, // declared type
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    if columns.is_empty() {
        // table_info returns nothing for tables that do not exist
        return Err(DataError::SchemaDetection(format!(
            "Table '{}' does not exist or has no columns",
            table
        )));
    }

    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, declared)| Field::new(name, arrow_type_for(declared), true))
        .collect();
    Ok(Schema::new(fields))
}
