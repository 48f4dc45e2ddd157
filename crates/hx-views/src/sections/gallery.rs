use egui::{CollapsingHeader, RichText, Ui};
use hx_core::filter::distinct_sorted;
use hx_core::{ArtForm, ArtFormFilter, Tab};
use hx_ui::{error_panel, selection_combo, widget_id};

use super::{Derived, Section, TableSlot};
use crate::cards::{art_form_card, report_fallbacks, Card};
use crate::ViewerContext;

/// Collapsing state follows the art form, not its position in the filtered list
fn header_id(card: &Card) -> String {
    widget_id("art_form", &card.title)
}

/// Art forms with state and category filters
#[derive(Default)]
pub struct GallerySection {
    slot: TableSlot,
    filter: ArtFormFilter,
    options: Derived<ArtForm, (), (Vec<String>, Vec<String>)>,
    cards: Derived<ArtForm, ArtFormFilter, Vec<Card>>,
}

impl Section for GallerySection {
    fn tab(&self) -> Tab {
        Tab::Gallery
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Traditional Art Forms of India");
        ui.add_space(6.0);

        let rows = match self.slot.load(ctx.generation, || ctx.catalog.art_forms()) {
            Ok(rows) => rows,
            Err(message) => {
                error_panel(ui, "Could not load art forms", &message);
                return;
            }
        };

        let (states, categories) = self.options.get_or_update(&rows, &(), |rows, _| {
            (
                distinct_sorted(rows, |r| r.state.as_str()),
                distinct_sorted(rows, |r| r.category.as_str()),
            )
        });

        let filter = &mut self.filter;
        let cards = &mut self.cards;
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(220.0);
                let id = Tab::Gallery.title();
                selection_combo(ui, &widget_id(id, "state"), "Filter by State", &mut filter.state, states);
                ui.add_space(4.0);
                selection_combo(
                    ui,
                    &widget_id(id, "category"),
                    "Filter by Category",
                    &mut filter.category,
                    categories,
                );
            });

            ui.separator();

            ui.vertical(|ui| {
                let cards = cards.get_or_update(&rows, filter, |rows, filter| {
                    let cards: Vec<Card> = filter
                        .apply(rows)
                        .into_iter()
                        .map(|row| art_form_card(row, &ctx.assets))
                        .collect();
                    report_fallbacks(ctx, &cards);
                    cards
                });

                if cards.is_empty() {
                    ui.label(RichText::new("No art forms match the selected filters.").italics());
                }
                for card in cards.iter() {
                    CollapsingHeader::new(RichText::new(&card.title).strong())
                        .id_source(header_id(card))
                        .show(ui, |ui| card.show_body(ui));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_context;
    use hx_core::filter::Selection;

    fn art_form(name: &str, state: &str, category: &str) -> ArtForm {
        ArtForm {
            art_form: name.into(),
            state: state.into(),
            category: category.into(),
            origin: String::new(),
            materials: String::new(),
            description: String::new(),
            significance: String::new(),
            image_path: None,
            video_url: None,
        }
    }

    fn header_ids(ctx: &ViewerContext, rows: &[ArtForm], filter: &ArtFormFilter) -> Vec<String> {
        filter
            .apply(rows)
            .into_iter()
            .map(|row| header_id(&art_form_card(row, &ctx.assets)))
            .collect()
    }

    #[test]
    fn test_header_id_survives_filter_changes() {
        let (_dir, ctx) = test_context();
        let rows = vec![
            art_form("Madhubani", "Bihar", "Painting"),
            art_form("Kathakali", "Kerala", "Dance"),
            art_form("Warli", "Maharashtra", "Painting"),
        ];

        let all = header_ids(&ctx, &rows, &ArtFormFilter::default());
        let paintings = header_ids(
            &ctx,
            &rows,
            &ArtFormFilter {
                category: Selection::Only("Painting".into()),
                ..ArtFormFilter::default()
            },
        );

        assert_eq!(all.len(), 3);
        assert_eq!(paintings, vec![all[0].clone(), all[2].clone()]);
        assert_eq!(paintings[1], "art_form_Warli - Maharashtra");
    }
}
