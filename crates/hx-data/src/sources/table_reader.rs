//! Whole-table reads from SQLite into Arrow

use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanBuilder, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use rusqlite::{types::ValueRef, Connection};

use crate::Result;

/// Column builder matching one schema field
enum ColumnBuilder {
    Int(Int64Builder),
    Float(Float64Builder),
    Bool(BooleanBuilder),
    Text(StringBuilder),
}

impl ColumnBuilder {
    fn for_type(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int64 => ColumnBuilder::Int(Int64Builder::new()),
            DataType::Float64 => ColumnBuilder::Float(Float64Builder::new()),
            DataType::Boolean => ColumnBuilder::Bool(BooleanBuilder::new()),
            _ => ColumnBuilder::Text(StringBuilder::new()),
        }
    }

    /// Append a value; values that cannot be represented become null
    fn append(&mut self, value: ValueRef<'_>) {
        match self {
            ColumnBuilder::Int(builder) => match value {
                ValueRef::Integer(i) => builder.append_value(i),
                ValueRef::Real(f) if f.fract() == 0.0 => builder.append_value(f as i64),
                ValueRef::Text(s) => builder.append_option(
                    std::str::from_utf8(s).ok().and_then(|t| t.trim().parse().ok()),
                ),
                _ => builder.append_null(),
            },
            ColumnBuilder::Float(builder) => match value {
                ValueRef::Real(f) => builder.append_value(f),
                ValueRef::Integer(i) => builder.append_value(i as f64),
                ValueRef::Text(s) => builder.append_option(
                    std::str::from_utf8(s).ok().and_then(|t| t.trim().parse().ok()),
                ),
                _ => builder.append_null(),
            },
            ColumnBuilder::Bool(builder) => match value {
                ValueRef::Integer(i) => builder.append_value(i != 0),
                _ => builder.append_null(),
            },
            ColumnBuilder::Text(builder) => match value {
                ValueRef::Text(s) => builder.append_value(String::from_utf8_lossy(s)),
                ValueRef::Integer(i) => builder.append_value(i.to_string()),
                ValueRef::Real(f) => builder.append_value(f.to_string()),
                ValueRef::Null | ValueRef::Blob(_) => builder.append_null(),
            },
        }
    }

    fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Int(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Float(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Bool(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Text(mut b) => Arc::new(b.finish()),
        }
    }
}

/// Read every row of `table` (already schema-qualified) in result-set
/// order. `schema` must list the table's columns in declaration order.
pub fn read_table(conn: &Connection, table: &str, schema: Arc<Schema>) -> Result<RecordBatch> {
    let query = format!("SELECT * FROM {}", table);
    let mut stmt = conn.prepare(&query)?;

    let mut builders: Vec<ColumnBuilder> = schema
        .fields()
        .iter()
        .map(|field| ColumnBuilder::for_type(field.data_type()))
        .collect();

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        for (col_idx, builder) in builders.iter_mut().enumerate() {
            builder.append(row.get_ref(col_idx)?);
        }
    }

    let arrays: Vec<ArrayRef> = builders.into_iter().map(ColumnBuilder::finish).collect();
    Ok(RecordBatch::try_new(schema, arrays)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::detect_schema;
    use arrow::array::{Array, Float64Array, Int64Array, StringArray};

    #[test]
    fn test_read_table_preserves_order_and_types() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE cultural_destinations (name TEXT, latitude REAL, annual_visitors INTEGER);
             INSERT INTO cultural_destinations VALUES ('Hampi', 15.33, 20000);
             INSERT INTO cultural_destinations VALUES ('Badami', 15.91, '500');
             INSERT INTO cultural_destinations VALUES (NULL, 16, 'many');",
        )
        .unwrap();

        let schema = Arc::new(detect_schema(&conn, None, "cultural_destinations").unwrap());
        let batch = read_table(&conn, "cultural_destinations", schema).unwrap();
        assert_eq!(batch.num_rows(), 3);

        let names = batch.column(0).as_any().downcast_ref::<StringArray>().unwrap();
        assert_eq!(names.value(0), "Hampi");
        assert!(names.is_null(2));

        let latitude = batch.column(1).as_any().downcast_ref::<Float64Array>().unwrap();
        assert_eq!(latitude.value(2), 16.0);

        let visitors = batch.column(2).as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!(visitors.value(1), 500);
        assert!(visitors.is_null(2));
    }
}
