//! Cards: a heading, labelled text fields, an optional image and links

use egui::{RichText, Ui};
use hx_core::events::events::AssetFallback;
use hx_core::format::format_rupees;
use hx_core::{ArtForm, ArtisanProgram, Destination, Initiative};
use hx_data::{AssetLookup, AssetResolver};
use tracing::debug;

use crate::ViewerContext;

/// Where a card's image sits relative to its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    Beside,
    Below,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    pub lookup: AssetLookup,
    pub width: f32,
    pub placement: ImagePlacement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLink {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub fields: Vec<CardField>,
    pub image: Option<CardImage>,
    pub links: Vec<CardLink>,
}

fn field(label: &'static str, value: impl ToString) -> CardField {
    CardField {
        label,
        value: value.to_string(),
    }
}

fn link(label: &'static str, url: &Option<String>) -> Option<CardLink> {
    url.as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(|u| CardLink {
            label,
            url: u.to_string(),
        })
}

pub fn art_form_card(row: &ArtForm, assets: &AssetResolver) -> Card {
    Card {
        title: format!("{} - {}", row.art_form, row.state),
        fields: vec![
            field("Origin", &row.origin),
            field("Materials", &row.materials),
            field("Description", &row.description),
            field("Cultural Significance", &row.significance),
        ],
        image: Some(CardImage {
            lookup: assets.resolve(row.image_path.as_deref()),
            width: 200.0,
            placement: ImagePlacement::Beside,
        }),
        links: link("Watch video", &row.video_url).into_iter().collect(),
    }
}

pub fn destination_card(row: &Destination, assets: &AssetResolver) -> Card {
    Card {
        title: format!("{}, {}", row.name, row.state),
        fields: vec![
            field("Category", &row.category),
            field("Significance", row.significance),
            field("Why visit?", &row.unique_aspect),
            field("Best time to visit", &row.best_season),
        ],
        image: Some(CardImage {
            lookup: assets.resolve(row.image_path.as_deref()),
            width: 500.0,
            placement: ImagePlacement::Below,
        }),
        links: Vec::new(),
    }
}

pub fn initiative_card(row: &Initiative) -> Card {
    Card {
        title: row.initiative_name.clone(),
        fields: vec![
            field("Ministry", &row.ministry),
            field("Year launched", row.year_launched),
            field("Budget allocated", format_rupees(row.budget)),
            field("Impact", &row.impact_description),
        ],
        image: None,
        links: Vec::new(),
    }
}

pub fn program_card(row: &ArtisanProgram) -> Card {
    Card {
        title: row.program_name.clone(),
        fields: vec![
            field("Organization", &row.organization),
            field("Art forms supported", &row.art_forms_supported),
            field("How to participate", &row.participation_details),
        ],
        image: None,
        links: link("Learn more", &row.website_url).into_iter().collect(),
    }
}

/// Publish and log every card whose image fell back to the default
pub fn report_fallbacks(ctx: &ViewerContext, cards: &[Card]) -> usize {
    let mut count = 0;
    for card in cards {
        let Some(CardImage {
            lookup: AssetLookup::Fallback { requested, reason, .. },
            ..
        }) = &card.image
        else {
            continue;
        };

        let requested = requested.clone().unwrap_or_else(|| "<none>".to_string());
        debug!("Image for '{}' falls back to default: {} ({})", card.title, requested, reason);
        ctx.events.publish(AssetFallback {
            requested,
            reason: reason.to_string(),
        });
        count += 1;
    }
    count
}

impl Card {
    /// Heading followed by the body
    pub fn show(&self, ui: &mut Ui) {
        ui.label(RichText::new(&self.title).strong().size(18.0));
        self.show_body(ui);
        ui.add_space(8.0);
    }

    /// Everything below the heading; used inside collapsing headers
    pub fn show_body(&self, ui: &mut Ui) {
        match &self.image {
            Some(image) if image.placement == ImagePlacement::Beside => {
                ui.horizontal_top(|ui| {
                    show_image(ui, image);
                    ui.vertical(|ui| self.show_text(ui));
                });
            }
            Some(image) => {
                self.show_text(ui);
                show_image(ui, image);
            }
            None => self.show_text(ui),
        }
    }

    fn show_text(&self, ui: &mut Ui) {
        hx_ui::field_block(
            ui,
            self.fields.iter().map(|f| (f.label, f.value.as_str())),
        );
        for link in &self.links {
            ui.hyperlink_to(link.label, &link.url);
        }
    }
}

fn show_image(ui: &mut Ui, image: &CardImage) {
    ui.add(
        egui::Image::from_uri(image.lookup.uri())
            .max_width(image.width),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_data::config::AssetConfig;
    use hx_data::FallbackReason;

    fn resolver(dir: &std::path::Path) -> AssetResolver {
        AssetResolver::new(&AssetConfig {
            directory: dir.to_path_buf(),
            default_image: "default_art.jpg".into(),
        })
    }

    fn madhubani(image: Option<&str>, video: Option<&str>) -> ArtForm {
        ArtForm {
            art_form: "Madhubani".into(),
            state: "Bihar".into(),
            category: "Painting".into(),
            origin: "Mithila".into(),
            materials: "Natural dyes".into(),
            description: "Line paintings".into(),
            significance: "Ritual art".into(),
            image_path: image.map(str::to_string),
            video_url: video.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_image_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let card = art_form_card(&madhubani(Some("gone.jpg"), None), &resolver(dir.path()));

        assert_eq!(card.title, "Madhubani - Bihar");
        let image = card.image.unwrap();
        assert_eq!(image.width, 200.0);
        assert_eq!(image.lookup.path(), dir.path().join("default_art.jpg"));
        assert!(matches!(
            image.lookup,
            AssetLookup::Fallback { reason: FallbackReason::NotFound, .. }
        ));
        assert!(card.links.is_empty());
    }

    #[test]
    fn test_art_form_card_fields_and_video() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("madhubani.jpg"), b"jpeg").unwrap();
        let card = art_form_card(
            &madhubani(Some("madhubani.jpg"), Some("https://example.org/v")),
            &resolver(dir.path()),
        );

        let labels: Vec<_> = card.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Origin", "Materials", "Description", "Cultural Significance"]);
        assert!(!card.image.unwrap().lookup.is_fallback());
        assert_eq!(card.links[0].label, "Watch video");
    }

    #[test]
    fn test_destination_card_without_image_name() {
        let dir = tempfile::tempdir().unwrap();
        let row = Destination {
            name: "Badami".into(),
            state: "Karnataka".into(),
            category: "Cave Temple".into(),
            latitude: 15.9,
            longitude: 75.7,
            annual_visitors: 3000,
            significance: 8.5,
            unique_aspect: "Rock-cut caves".into(),
            best_season: "Winter".into(),
            image_path: None,
        };
        let card = destination_card(&row, &resolver(dir.path()));

        assert_eq!(card.title, "Badami, Karnataka");
        assert_eq!(card.fields[1].value, "8.5");
        let image = card.image.unwrap();
        assert_eq!(image.width, 500.0);
        assert!(matches!(
            image.lookup,
            AssetLookup::Fallback { requested: None, reason: FallbackReason::NoName, .. }
        ));
    }

    #[test]
    fn test_initiative_budget_is_grouped() {
        let card = initiative_card(&Initiative {
            initiative_name: "PRASHAD".into(),
            ministry: "Ministry of Tourism".into(),
            year_launched: 2015,
            budget: 5_000_000.0,
            impact_description: "Pilgrimage sites".into(),
        });
        assert_eq!(card.fields[1].value, "2015");
        assert_eq!(card.fields[2], field("Budget allocated", "₹5,000,000"));
    }

    #[test]
    fn test_program_link_only_when_present() {
        let mut program = ArtisanProgram {
            program_name: "Hunar Haat".into(),
            organization: "Ministry of Minority Affairs".into(),
            art_forms_supported: "All crafts".into(),
            participation_details: "Visit the fair".into(),
            website_url: Some("https://example.org".into()),
        };
        assert_eq!(program_card(&program).links[0].url, "https://example.org");

        program.website_url = Some("  ".into());
        assert!(program_card(&program).links.is_empty());
    }
}
