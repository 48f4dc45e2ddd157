use egui::{Context, RichText, TopBottomPanel, Ui};
use hx_core::DashboardSettings;

use crate::theme::{accent_color, error_color};

/// Menu actions the application has to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenDatabase,
    CreateSampleDatabase,
    ReloadData,
    ToggleDarkMode,
    Exit,
}

/// Render the main menu bar
pub fn menu_bar(ctx: &Context, settings: &DashboardSettings) -> Option<MenuAction> {
    let mut action = None;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Database...").clicked() {
                    action = Some(MenuAction::OpenDatabase);
                    ui.close_menu();
                }
                if ui.button("Create Sample Database").clicked() {
                    action = Some(MenuAction::CreateSampleDatabase);
                    ui.close_menu();
                }
                if ui.button("Reload Data").clicked() {
                    action = Some(MenuAction::ReloadData);
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    action = Some(MenuAction::Exit);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                let label = if settings.dark_mode { "Light Mode" } else { "Dark Mode" };
                if ui.button(label).clicked() {
                    action = Some(MenuAction::ToggleDarkMode);
                    ui.close_menu();
                }
            });
        });
    });

    action
}

/// Title and subtitle above the tabs
pub fn header(ui: &mut Ui) {
    ui.add_space(4.0);
    ui.heading(RichText::new("India's Living Cultural Heritage").color(accent_color()).size(28.0));
    ui.label(
        RichText::new("Explore Traditional Art Forms & Promote Responsible Cultural Tourism")
            .size(17.0),
    );
    ui.add_space(4.0);
}

/// Data sources and note below the tabs
pub fn footer(ctx: &Context) {
    TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Data Sources:").strong());
            ui.hyperlink_to("Data.gov.in", "https://www.data.gov.in");
            ui.label(", Ministry of Tourism, Archaeological Survey of India");
        });
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Note:").strong());
            ui.label("This application is for educational purposes to showcase India's cultural heritage.");
        });
    });
}

/// Status line with the store path and the last event
pub fn status_bar(ctx: &Context, database: &str, settings: &DashboardSettings) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.small(format!("Store: {}", database));
            if let Some(status) = &settings.status {
                ui.separator();
                let text = RichText::new(status).small();
                if status.starts_with("Failed") {
                    ui.label(text.color(error_color()));
                } else {
                    ui.label(text);
                }
            }
        });
    });
}

/// Inline replacement for a section that failed to load
pub fn error_panel(ui: &mut Ui, title: &str, message: &str) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, error_color()))
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong().color(error_color()));
            ui.label(message);
        });
}
