//! Typed records for the five heritage tables

/// A single cell value looked up by column name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Integer(i64),
    Real(f64),
    Null,
}

impl<'a> CellValue<'a> {
    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Real(f) => Some(*f),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Null => None,
        }
    }

    /// Display text of the cell
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => (*s).to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Real(f) => f.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

impl<'a> From<&'a Option<String>> for CellValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            Some(s) => CellValue::Text(s),
            None => CellValue::Null,
        }
    }
}

/// Access to record fields by their column name
pub trait Columnar {
    /// Look up a column; `None` when the record has no such column
    fn cell(&self, column: &str) -> Option<CellValue<'_>>;
}

/// A row type backed by one table of the heritage store
pub trait Record: Columnar + Clone + Send + Sync + 'static {
    /// Source table name
    const TABLE: &'static str;

    /// Columns the record is built from
    const COLUMNS: &'static [&'static str];
}

/// A traditional craft or performance practice
#[derive(Debug, Clone, PartialEq)]
pub struct ArtForm {
    pub art_form: String,
    pub state: String,
    pub category: String,
    pub origin: String,
    pub materials: String,
    pub description: String,
    pub significance: String,
    pub image_path: Option<String>,
    pub video_url: Option<String>,
}

/// A cultural site shown on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    pub state: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub annual_visitors: i64,
    pub significance: f64,
    pub unique_aspect: String,
    pub best_season: String,
    pub image_path: Option<String>,
}

/// Visitor count for one site in one month
#[derive(Debug, Clone, PartialEq)]
pub struct TourismRecord {
    pub site_name: String,
    pub month: String,
    pub visitor_count: i64,
}

/// A government programme for cultural preservation
#[derive(Debug, Clone, PartialEq)]
pub struct Initiative {
    pub initiative_name: String,
    pub ministry: String,
    pub year_launched: i64,
    pub budget: f64,
    pub impact_description: String,
}

/// An artisan support programme
#[derive(Debug, Clone, PartialEq)]
pub struct ArtisanProgram {
    pub program_name: String,
    pub organization: String,
    pub art_forms_supported: String,
    pub participation_details: String,
    pub website_url: Option<String>,
}

impl Columnar for ArtForm {
    fn cell(&self, column: &str) -> Option<CellValue<'_>> {
        Some(match column {
            "art_form" => CellValue::Text(&self.art_form),
            "state" => CellValue::Text(&self.state),
            "category" => CellValue::Text(&self.category),
            "origin" => CellValue::Text(&self.origin),
            "materials" => CellValue::Text(&self.materials),
            "description" => CellValue::Text(&self.description),
            "significance" => CellValue::Text(&self.significance),
            "image_path" => (&self.image_path).into(),
            "video_url" => (&self.video_url).into(),
            _ => return None,
        })
    }
}

impl Record for ArtForm {
    const TABLE: &'static str = "art_forms";
    const COLUMNS: &'static [&'static str] = &[
        "art_form", "state", "category", "origin", "materials",
        "description", "significance", "image_path", "video_url",
    ];
}

impl Columnar for Destination {
    fn cell(&self, column: &str) -> Option<CellValue<'_>> {
        Some(match column {
            "name" => CellValue::Text(&self.name),
            "state" => CellValue::Text(&self.state),
            "category" => CellValue::Text(&self.category),
            "latitude" => CellValue::Real(self.latitude),
            "longitude" => CellValue::Real(self.longitude),
            "annual_visitors" => CellValue::Integer(self.annual_visitors),
            "significance" => CellValue::Real(self.significance),
            "unique_aspect" => CellValue::Text(&self.unique_aspect),
            "best_season" => CellValue::Text(&self.best_season),
            "image_path" => (&self.image_path).into(),
            _ => return None,
        })
    }
}

impl Record for Destination {
    const TABLE: &'static str = "cultural_destinations";
    const COLUMNS: &'static [&'static str] = &[
        "name", "state", "category", "latitude", "longitude",
        "annual_visitors", "significance", "unique_aspect", "best_season", "image_path",
    ];
}

impl Columnar for TourismRecord {
    fn cell(&self, column: &str) -> Option<CellValue<'_>> {
        Some(match column {
            "site_name" => CellValue::Text(&self.site_name),
            "month" => CellValue::Text(&self.month),
            "visitor_count" => CellValue::Integer(self.visitor_count),
            _ => return None,
        })
    }
}

impl Record for TourismRecord {
    const TABLE: &'static str = "tourism_trends";
    const COLUMNS: &'static [&'static str] = &["site_name", "month", "visitor_count"];
}

impl Columnar for Initiative {
    fn cell(&self, column: &str) -> Option<CellValue<'_>> {
        Some(match column {
            "initiative_name" => CellValue::Text(&self.initiative_name),
            "ministry" => CellValue::Text(&self.ministry),
            "year_launched" => CellValue::Integer(self.year_launched),
            "budget" => CellValue::Real(self.budget),
            "impact_description" => CellValue::Text(&self.impact_description),
            _ => return None,
        })
    }
}

impl Record for Initiative {
    const TABLE: &'static str = "government_initiatives";
    const COLUMNS: &'static [&'static str] = &[
        "initiative_name", "ministry", "year_launched", "budget", "impact_description",
    ];
}

impl Columnar for ArtisanProgram {
    fn cell(&self, column: &str) -> Option<CellValue<'_>> {
        Some(match column {
            "program_name" => CellValue::Text(&self.program_name),
            "organization" => CellValue::Text(&self.organization),
            "art_forms_supported" => CellValue::Text(&self.art_forms_supported),
            "participation_details" => CellValue::Text(&self.participation_details),
            "website_url" => (&self.website_url).into(),
            _ => return None,
        })
    }
}

impl Record for ArtisanProgram {
    const TABLE: &'static str = "artisan_programs";
    const COLUMNS: &'static [&'static str] = &[
        "program_name", "organization", "art_forms_supported",
        "participation_details", "website_url",
    ];
}
