//! Small widgets shared by the dashboard tabs

use std::fmt::Display;

use egui::{ComboBox, RichText, Ui};
use hx_core::Selection;

/// Build a widget id from a base and a suffix
///
/// # Example
/// ```ignore
/// let id = widget_id("gallery", "state");
/// ```
pub fn widget_id(base: impl Display, suffix: impl Display) -> String {
    format!("{}_{}", base, suffix)
}

/// Labelled combo box listing "All" followed by `options`
pub fn selection_combo(
    ui: &mut Ui,
    id_source: &str,
    label: &str,
    selection: &mut Selection,
    options: &[String],
) {
    ui.label(label);
    ComboBox::from_id_source(id_source)
        .selected_text(selection.label().to_string())
        .width(ui.available_width().min(220.0))
        .show_ui(ui, |ui| {
            ui.selectable_value(selection, Selection::All, Selection::ALL_LABEL);
            for option in options {
                ui.selectable_value(selection, Selection::Only(option.clone()), option.as_str());
            }
        });
}

/// Labelled combo box without an "All" entry
pub fn options_combo(
    ui: &mut Ui,
    id_source: &str,
    label: &str,
    selected: &mut Option<String>,
    options: &[String],
) {
    ui.label(label);
    ComboBox::from_id_source(id_source)
        .selected_text(selected.clone().unwrap_or_default())
        .width(ui.available_width().min(320.0))
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(selected, Some(option.clone()), option.as_str());
            }
        });
}

/// "**Label**: value" lines of a card
pub fn field_block<'a>(ui: &mut Ui, fields: impl IntoIterator<Item = (&'a str, &'a str)>) {
    for (label, value) in fields {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(format!("{}:", label)).strong());
            ui.label(value);
        });
    }
}
