//! Conversion of fetched batches into typed records
//!
//! This is where column presence and value types are checked. Text
//! columns accept any non-blob value and read NULL as empty text;
//! numeric columns must hold a number in every row.

use arrow::array::{Array, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use hx_core::{ArtForm, ArtisanProgram, Destination, Initiative, TourismRecord};

use crate::{DataError, Result};

/// Records that can be built from a whole-table batch
pub trait FromBatch: Sized {
    fn from_batch(table: &str, batch: &RecordBatch) -> Result<Vec<Self>>;
}

/// One named column of a batch
struct Column<'a> {
    table: &'a str,
    name: &'static str,
    array: &'a dyn Array,
}

impl<'a> Column<'a> {
    fn lookup(table: &'a str, batch: &'a RecordBatch, name: &'static str) -> Result<Self> {
        let array = batch
            .column_by_name(name)
            .ok_or_else(|| DataError::MissingColumn {
                table: table.to_string(),
                column: name.to_string(),
            })?;
        Ok(Self {
            table,
            name,
            array: array.as_ref(),
        })
    }

    fn type_error(&self, row: usize, expected: &'static str) -> DataError {
        DataError::ColumnType {
            table: self.table.to_string(),
            column: self.name.to_string(),
            row,
            expected,
        }
    }

    fn opt_text(&self, row: usize) -> Option<String> {
        if self.array.is_null(row) {
            return None;
        }
        let any = self.array.as_any();
        let text = if let Some(a) = any.downcast_ref::<StringArray>() {
            a.value(row).to_string()
        } else if let Some(a) = any.downcast_ref::<Int64Array>() {
            a.value(row).to_string()
        } else if let Some(a) = any.downcast_ref::<Float64Array>() {
            a.value(row).to_string()
        } else if let Some(a) = any.downcast_ref::<BooleanArray>() {
            a.value(row).to_string()
        } else {
            return None;
        };
        Some(text)
    }

    /// Optional text where empty strings count as absent
    fn non_empty(&self, row: usize) -> Option<String> {
        self.opt_text(row).filter(|s| !s.trim().is_empty())
    }

    fn text(&self, row: usize) -> String {
        self.opt_text(row).unwrap_or_default()
    }

    fn real(&self, row: usize) -> Result<f64> {
        if self.array.is_null(row) {
            return Err(self.type_error(row, "a number"));
        }
        let any = self.array.as_any();
        if let Some(a) = any.downcast_ref::<Float64Array>() {
            Ok(a.value(row))
        } else if let Some(a) = any.downcast_ref::<Int64Array>() {
            Ok(a.value(row) as f64)
        } else if let Some(a) = any.downcast_ref::<StringArray>() {
            a.value(row).trim().parse().map_err(|_| self.type_error(row, "a number"))
        } else {
            Err(self.type_error(row, "a number"))
        }
    }

    fn integer(&self, row: usize) -> Result<i64> {
        if self.array.is_null(row) {
            return Err(self.type_error(row, "an integer"));
        }
        let any = self.array.as_any();
        if let Some(a) = any.downcast_ref::<Int64Array>() {
            Ok(a.value(row))
        } else if let Some(a) = any.downcast_ref::<Float64Array>() {
            let value = a.value(row);
            if value.fract() == 0.0 {
                Ok(value as i64)
            } else {
                Err(self.type_error(row, "an integer"))
            }
        } else if let Some(a) = any.downcast_ref::<StringArray>() {
            a.value(row).trim().parse().map_err(|_| self.type_error(row, "an integer"))
        } else {
            Err(self.type_error(row, "an integer"))
        }
    }
}

impl FromBatch for ArtForm {
    fn from_batch(table: &str, batch: &RecordBatch) -> Result<Vec<Self>> {
        let art_form = Column::lookup(table, batch, "art_form")?;
        let state = Column::lookup(table, batch, "state")?;
        let category = Column::lookup(table, batch, "category")?;
        let origin = Column::lookup(table, batch, "origin")?;
        let materials = Column::lookup(table, batch, "materials")?;
        let description = Column::lookup(table, batch, "description")?;
        let significance = Column::lookup(table, batch, "significance")?;
        let image_path = Column::lookup(table, batch, "image_path")?;
        let video_url = Column::lookup(table, batch, "video_url")?;

        Ok((0..batch.num_rows())
            .map(|row| ArtForm {
                art_form: art_form.text(row),
                state: state.text(row),
                category: category.text(row),
                origin: origin.text(row),
                materials: materials.text(row),
                description: description.text(row),
                significance: significance.text(row),
                image_path: image_path.non_empty(row),
                video_url: video_url.non_empty(row),
            })
            .collect())
    }
}

impl FromBatch for Destination {
    fn from_batch(table: &str, batch: &RecordBatch) -> Result<Vec<Self>> {
        let name = Column::lookup(table, batch, "name")?;
        let state = Column::lookup(table, batch, "state")?;
        let category = Column::lookup(table, batch, "category")?;
        let latitude = Column::lookup(table, batch, "latitude")?;
        let longitude = Column::lookup(table, batch, "longitude")?;
        let annual_visitors = Column::lookup(table, batch, "annual_visitors")?;
        let significance = Column::lookup(table, batch, "significance")?;
        let unique_aspect = Column::lookup(table, batch, "unique_aspect")?;
        let best_season = Column::lookup(table, batch, "best_season")?;
        let image_path = Column::lookup(table, batch, "image_path")?;

        (0..batch.num_rows())
            .map(|row| {
                Ok(Destination {
                    name: name.text(row),
                    state: state.text(row),
                    category: category.text(row),
                    latitude: latitude.real(row)?,
                    longitude: longitude.real(row)?,
                    annual_visitors: annual_visitors.integer(row)?,
                    significance: significance.real(row)?,
                    unique_aspect: unique_aspect.text(row),
                    best_season: best_season.text(row),
                    image_path: image_path.non_empty(row),
                })
            })
            .collect()
    }
}

impl FromBatch for TourismRecord {
    fn from_batch(table: &str, batch: &RecordBatch) -> Result<Vec<Self>> {
        let site_name = Column::lookup(table, batch, "site_name")?;
        let month = Column::lookup(table, batch, "month")?;
        let visitor_count = Column::lookup(table, batch, "visitor_count")?;

        (0..batch.num_rows())
            .map(|row| {
                Ok(TourismRecord {
                    site_name: site_name.text(row),
                    month: month.text(row),
                    visitor_count: visitor_count.integer(row)?,
                })
            })
            .collect()
    }
}

impl FromBatch for Initiative {
    fn from_batch(table: &str, batch: &RecordBatch) -> Result<Vec<Self>> {
        let initiative_name = Column::lookup(table, batch, "initiative_name")?;
        let ministry = Column::lookup(table, batch, "ministry")?;
        let year_launched = Column::lookup(table, batch, "year_launched")?;
        let budget = Column::lookup(table, batch, "budget")?;
        let impact_description = Column::lookup(table, batch, "impact_description")?;

        (0..batch.num_rows())
            .map(|row| {
                Ok(Initiative {
                    initiative_name: initiative_name.text(row),
                    ministry: ministry.text(row),
                    year_launched: year_launched.integer(row)?,
                    budget: budget.real(row)?,
                    impact_description: impact_description.text(row),
                })
            })
            .collect()
    }
}

impl FromBatch for ArtisanProgram {
    fn from_batch(table: &str, batch: &RecordBatch) -> Result<Vec<Self>> {
        let program_name = Column::lookup(table, batch, "program_name")?;
        let organization = Column::lookup(table, batch, "organization")?;
        let art_forms_supported = Column::lookup(table, batch, "art_forms_supported")?;
        let participation_details = Column::lookup(table, batch, "participation_details")?;
        let website_url = Column::lookup(table, batch, "website_url")?;

        Ok((0..batch.num_rows())
            .map(|row| ArtisanProgram {
                program_name: program_name.text(row),
                organization: organization.text(row),
                art_forms_supported: art_forms_supported.text(row),
                participation_details: participation_details.text(row),
                website_url: website_url.non_empty(row),
            })
            .collect())
    }
}
