use egui::{RichText, Ui};
use hx_core::filter::{distinct_in_order, site_series};
use hx_core::{Initiative, Tab, TourismRecord};
use hx_ui::{error_panel, options_combo, widget_id};

use super::{Derived, Section, TableSlot};
use crate::cards::{initiative_card, Card};
use crate::charts::{line_chart, show_line_chart, ChartError, LineChartSpec};
use crate::ViewerContext;

/// Monthly visitors per site and government initiatives
#[derive(Default)]
pub struct InsightsSection {
    trends: TableSlot,
    initiatives: TableSlot,
    selected_site: Option<String>,
    sites: Derived<TourismRecord, (), Vec<String>>,
    chart: Derived<TourismRecord, String, Result<LineChartSpec, ChartError>>,
    cards: Derived<Initiative, (), Vec<Card>>,
}

/// Keep the current site when it still exists, otherwise the first one
fn resolve_site(selected: Option<String>, sites: &[String]) -> Option<String> {
    match selected {
        Some(site) if sites.contains(&site) => Some(site),
        _ => sites.first().cloned(),
    }
}

/// Visitor chart for one site, months in calendar order
pub fn site_chart(rows: &[TourismRecord], site: &str) -> Result<LineChartSpec, ChartError> {
    let series = site_series(rows, site);
    line_chart(
        series.iter().copied(),
        "month",
        "visitor_count",
        format!("Monthly Visitors to {}", site),
    )
}

impl InsightsSection {
    fn seasonality_ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.label(RichText::new("Seasonality of Cultural Tourism").strong().size(18.0));

        let rows = match self.trends.load(ctx.generation, || ctx.catalog.tourism_trends()) {
            Ok(rows) => rows,
            Err(message) => {
                error_panel(ui, "Could not load tourism trends", &message);
                return;
            }
        };

        let sites = self
            .sites
            .get_or_update(&rows, &(), |rows, _| distinct_in_order(rows, |r| r.site_name.as_str()));
        self.selected_site = resolve_site(self.selected_site.take(), sites);

        ui.horizontal(|ui| {
            options_combo(
                ui,
                &widget_id(Tab::Insights.title(), "site"),
                "Select a cultural site",
                &mut self.selected_site,
                sites,
            );
        });

        let Some(site) = self.selected_site.clone() else {
            ui.label(RichText::new("No tourism records available.").italics());
            return;
        };

        match self.chart.get_or_update(&rows, &site, |rows, site| site_chart(rows, site)) {
            Ok(spec) => show_line_chart(ui, "site_visitors", spec),
            Err(e) => error_panel(ui, "Could not draw the visitor chart", &e.to_string()),
        }
    }

    fn initiatives_ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.label(
            RichText::new("Government Initiatives for Cultural Preservation")
                .strong()
                .size(18.0),
        );
        ui.add_space(4.0);

        let rows = match self.initiatives.load(ctx.generation, || ctx.catalog.initiatives()) {
            Ok(rows) => rows,
            Err(message) => {
                error_panel(ui, "Could not load government initiatives", &message);
                return;
            }
        };

        let cards = self
            .cards
            .get_or_update(&rows, &(), |rows, _| rows.iter().map(initiative_card).collect());
        for card in cards {
            card.show(ui);
            ui.separator();
        }
    }
}

impl Section for InsightsSection {
    fn tab(&self) -> Tab {
        Tab::Insights
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Tourism Trends and Insights");
        ui.add_space(6.0);

        self.seasonality_ui(ctx, ui);
        ui.add_space(12.0);
        self.initiatives_ui(ctx, ui);
    }
}
