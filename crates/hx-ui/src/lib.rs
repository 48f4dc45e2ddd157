//! User interface components for the heritage explorer
//!
//! This crate provides the egui-based shell around the dashboard tabs
//! and the small widgets the tabs share.

pub mod shell;
pub mod theme;
pub mod widget_utils;

pub use shell::{error_panel, footer, header, menu_bar, status_bar, MenuAction};
pub use theme::{apply_theme, Theme};
pub use widget_utils::{field_block, options_combo, selection_combo, widget_id};
