//! Chart builders: rows plus column names in, chart specification out

pub mod geo;
pub mod line;

use hx_core::{CellValue, Columnar, Record};
use thiserror::Error;

pub use geo::{geo_scatter, show_geo_scatter, GeoColumns, GeoPoint, GeoScatterSpec, GeoSeries};
pub use line::{line_chart, show_line_chart, LineChartSpec, LinePoint};

/// Errors raised while building a chart specification
#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    #[error("Column '{column}' does not exist in {table}")]
    UnknownColumn { table: &'static str, column: String },

    #[error("Column '{column}' is not numeric at row {row}")]
    NotNumeric { column: String, row: usize },
}

/// Fail unless every column belongs to `R`
fn check_columns<R: Record>(columns: &[&str]) -> Result<(), ChartError> {
    for column in columns {
        if !R::COLUMNS.iter().any(|known| known == column) {
            return Err(ChartError::UnknownColumn {
                table: R::TABLE,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn numeric<R: Columnar>(row: &R, column: &str, index: usize) -> Result<f64, ChartError> {
    row.cell(column)
        .and_then(|cell| cell.as_f64())
        .ok_or_else(|| ChartError::NotNumeric {
            column: column.to_string(),
            row: index,
        })
}

fn text<R: Columnar>(row: &R, column: &str) -> String {
    row.cell(column).unwrap_or(CellValue::Null).to_text()
}
