use egui::{RichText, Ui};
use hx_core::{ArtisanProgram, Tab};
use hx_ui::error_panel;

use super::{Derived, Section, TableSlot};
use crate::cards::{program_card, Card};
use crate::ViewerContext;

const DOS: &[&str] = &[
    "Respect local customs and traditions",
    "Purchase authentic handicrafts directly from artisans",
    "Follow photography guidelines at sacred sites",
    "Dress appropriately for cultural sites",
    "Learn basic local phrases",
];

const DONTS: &[&str] = &[
    "Don't touch artifacts or artworks without permission",
    "Avoid bargaining aggressively with local artisans",
    "Don't participate in exploitative cultural performances",
    "Avoid littering at heritage sites",
];

/// Visitor guidance and artisan support programs
#[derive(Default)]
pub struct ResponsibleSection {
    slot: TableSlot,
    cards: Derived<ArtisanProgram, (), Vec<Card>>,
}

fn bullet_list(ui: &mut Ui, heading: &str, items: &[&str]) {
    ui.label(RichText::new(heading).strong().size(16.0));
    for item in items {
        ui.label(format!("• {}", item));
    }
    ui.add_space(6.0);
}

impl Section for ResponsibleSection {
    fn tab(&self) -> Tab {
        Tab::Responsible
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Responsible Cultural Tourism");
        ui.add_space(6.0);

        ui.label(RichText::new("How to Be a Responsible Cultural Tourist").strong().size(18.0));
        ui.columns(2, |columns| {
            bullet_list(&mut columns[0], "Do's", DOS);
            bullet_list(&mut columns[1], "Don'ts", DONTS);
        });

        ui.add_space(12.0);
        ui.label(RichText::new("Supporting Artisan Communities").strong().size(18.0));
        ui.add_space(4.0);

        let rows = match self.slot.load(ctx.generation, || ctx.catalog.artisan_programs()) {
            Ok(rows) => rows,
            Err(message) => {
                error_panel(ui, "Could not load artisan programs", &message);
                return;
            }
        };

        let cards = self
            .cards
            .get_or_update(&rows, &(), |rows, _| rows.iter().map(program_card).collect());
        for card in cards {
            card.show(ui);
            ui.separator();
        }
    }
}
