//! Core types for the heritage explorer
//!
//! This crate provides the typed records read from the heritage store,
//! the in-memory filters applied to them, and the shared dashboard state.

pub mod events;
pub mod filter;
pub mod format;
pub mod month;
pub mod records;
pub mod state;

// Re-export commonly used types
pub use events::EventBus;
pub use filter::{ArtFormFilter, HiddenGemsRule, Selection};
pub use month::MonthKey;
pub use records::{
    ArtForm, ArtisanProgram, CellValue, Columnar, Destination, Initiative, Record,
    TourismRecord,
};
pub use state::{DashboardSettings, Tab};
