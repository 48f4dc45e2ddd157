use egui::{RichText, Ui};
use hx_core::{Destination, HiddenGemsRule, Tab};
use hx_ui::error_panel;

use super::{Derived, Section, TableSlot};
use crate::cards::{destination_card, report_fallbacks, Card};
use crate::charts::{geo_scatter, show_geo_scatter, ChartError, GeoColumns, GeoScatterSpec};
use crate::ViewerContext;

const MAP_COLUMNS: GeoColumns<'static> = GeoColumns {
    lat: "latitude",
    lon: "longitude",
    hover_name: "name",
    hover_data: &["state", "category", "annual_visitors"],
    color: Some("category"),
};

/// Map of all destinations and the hidden gems list
#[derive(Default)]
pub struct DestinationsSection {
    slot: TableSlot,
    map: Derived<Destination, (), Result<GeoScatterSpec, ChartError>>,
    gems: Derived<Destination, HiddenGemsRule, Vec<Card>>,
}

/// Cards for the lesser-known destinations
pub fn hidden_gem_cards(ctx: &ViewerContext, rows: &[Destination], rule: &HiddenGemsRule) -> Vec<Card> {
    rule.apply(rows)
        .into_iter()
        .map(|row| destination_card(row, &ctx.assets))
        .collect()
}

impl Section for DestinationsSection {
    fn tab(&self) -> Tab {
        Tab::Destinations
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Cultural Destinations Across India");
        ui.add_space(6.0);

        let rows = match self.slot.load(ctx.generation, || ctx.catalog.destinations()) {
            Ok(rows) => rows,
            Err(message) => {
                error_panel(ui, "Could not load destinations", &message);
                return;
            }
        };

        ui.label(RichText::new("Interactive Map of Cultural Hotspots").strong().size(18.0));
        match self.map.get_or_update(&rows, &(), |rows, _| geo_scatter(rows, &MAP_COLUMNS)) {
            Ok(spec) => show_geo_scatter(ui, "destinations_map", spec),
            Err(e) => error_panel(ui, "Could not draw the map", &e.to_string()),
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Hidden Gems - Lesser Known Cultural Sites").strong().size(18.0));
        ui.add_space(4.0);

        let cards = self.gems.get_or_update(&rows, &ctx.hidden_gems, |rows, rule| {
            let cards = hidden_gem_cards(ctx, rows, rule);
            report_fallbacks(ctx, &cards);
            cards
        });
        if cards.is_empty() {
            ui.label(RichText::new("No lesser-known sites in the current data.").italics());
        }
        for card in cards {
            card.show(ui);
            ui.separator();
        }
    }
}
