//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::{error, info, warn};

use hx_core::events::events::StoreChanged;
use hx_core::{DashboardSettings, EventBus};
use hx_data::config::StoreConfig;
use hx_data::{AssetResolver, Catalog, DashboardConfig};
use hx_ui::{MenuAction, Theme};
use hx_views::{Dashboard, ViewerContext};

mod status;

use status::StatusLine;

const SETTINGS_KEY: &str = "dashboard_settings";

/// Main application state
struct HeritageApp {
    config: DashboardConfig,

    /// The docked tabs
    dashboard: Dashboard,

    /// Context shared with every section
    viewer_context: ViewerContext,

    settings: DashboardSettings,

    status: StatusLine,
}

impl HeritageApp {
    fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings: DashboardSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default();
        hx_ui::apply_theme(&cc.egui_ctx, &Theme::new(settings.dark_mode));

        let events = Arc::new(EventBus::new());
        let status = StatusLine::attach(&events);

        let catalog = Catalog::from_config(&config).with_events(events.clone());
        let viewer_context = ViewerContext {
            catalog: Arc::new(catalog),
            assets: Arc::new(AssetResolver::new(&config.assets)),
            events,
            hidden_gems: config.hidden_gems,
            generation: 0,
        };

        Self {
            config,
            dashboard: Dashboard::new(),
            viewer_context,
            settings,
            status,
        }
    }

    /// Swap the sections over to the database at `path`
    fn open_store(&mut self, path: PathBuf) {
        self.close_store();

        // Databases picked at runtime are read unqualified
        let store = StoreConfig {
            database: path,
            schema: None,
            attach: None,
            sample_database: self.config.store.sample_database.clone(),
        };
        let catalog = Catalog::new(store, self.config.cache.policy())
            .with_events(self.viewer_context.events.clone());
        let database = catalog.database().display().to_string();

        info!("Switching store to {}", database);
        self.viewer_context.replace_catalog(Arc::new(catalog));
        self.viewer_context.events.publish(StoreChanged { database });
    }

    fn close_store(&self) {
        if let Err(e) = self.viewer_context.catalog.shutdown() {
            warn!("Failed to close store: {}", e);
        }
    }

    fn create_sample_store(&mut self) {
        let path = self.config.store.sample_database.clone();
        // The open read-only handle would keep the old tables
        self.close_store();

        match hx_data::sample::create_sample_database(&path) {
            Ok(()) => self.open_store(path),
            Err(e) => {
                error!("Failed to create sample database at {:?}: {}", path, e);
                self.status.set(format!("Failed to create sample database: {}", e));
            }
        }
    }

    fn handle_menu(&mut self, ctx: &Context, action: MenuAction) {
        match action {
            MenuAction::OpenDatabase => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("SQLite Database", &["db", "sqlite", "sqlite3"])
                    .pick_file()
                {
                    self.open_store(path);
                }
            }
            MenuAction::CreateSampleDatabase => self.create_sample_store(),
            MenuAction::ReloadData => {
                self.viewer_context.reload();
                self.status.set("Reloading data");
            }
            MenuAction::ToggleDarkMode => {
                self.settings.dark_mode = !self.settings.dark_mode;
                hx_ui::apply_theme(ctx, &Theme::new(self.settings.dark_mode));
            }
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

impl eframe::App for HeritageApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.settings.status = self.status.current();

        if let Some(action) = hx_ui::menu_bar(ctx, &self.settings) {
            self.handle_menu(ctx, action);
        }

        let database = self.viewer_context.catalog.database().display().to_string();
        hx_ui::status_bar(ctx, &database, &self.settings);
        hx_ui::footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            hx_ui::header(ui);
            ui.separator();
            self.dashboard.ui(ui, &self.viewer_context);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down");
        self.close_store();
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = DashboardConfig::load()?;
    info!(
        "Starting Heritage Explorer with store {:?}",
        config.store.database
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("India's Cultural Heritage Explorer"),
        default_theme: eframe::Theme::Light,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "India's Cultural Heritage Explorer",
        options,
        Box::new(move |cc| Box::new(HeritageApp::new(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
