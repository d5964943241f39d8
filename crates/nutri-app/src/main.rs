//! Main application entry point

use std::path::Path;
use anyhow::{Context as _, Result};
use eframe::egui::{self, Context, Ui};
use tracing::{debug, info, warn, error};

use nutri_data::{DashboardConfig, NutritionTable, CONFIG_FILE_NAME};
use nutri_data::schema::CHART_COLUMNS;
use nutri_ui::{NavigationPanel, Page, Theme};
use nutri_views::{AnalysisPage, HomePage, OverviewPage, ViewerContext};

mod router;

/// Main application state
struct DashboardApp {
    /// Read-only table and configuration shared by every page
    viewer_context: ViewerContext,

    /// Sidebar page selector
    navigation_panel: NavigationPanel,

    /// Page state
    pages: router::Pages,

    /// Shown at the bottom of the sidebar
    source_summary: String,
}

impl DashboardApp {
    fn new(cc: &eframe::CreationContext<'_>, viewer_context: ViewerContext) -> Self {
        nutri_ui::apply_theme(&cc.egui_ctx, &Theme::default());
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let table = &viewer_context.table;
        let source_summary = format!(
            "{} · {} rows × {} columns",
            table.source_name(),
            table.num_rows(),
            table.num_columns()
        );

        let pages = router::Pages {
            home: HomePage::new(&viewer_context.config.image_path),
            overview: OverviewPage::default(),
            analysis: AnalysisPage::new(&viewer_context.config),
        };

        Self {
            viewer_context,
            navigation_panel: NavigationPanel::new(),
            pages,
            source_summary,
        }
    }

    fn show_page(&mut self, page: Page, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.pages.show(page, &self.viewer_context, ui);
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let page = self.navigation_panel.show(ctx, &self.source_summary);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_page(page, ui);
        });
    }
}

/// Read the configuration and the dataset, and check the columns the charts need
fn load_viewer_context() -> Result<ViewerContext> {
    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to read configuration from {}", CONFIG_FILE_NAME))?;

    match config.to_json() {
        Ok(json) => debug!("Effective configuration: {}", json),
        Err(e) => warn!("Could not render configuration: {}", e),
    }

    info!("Loading {}", config.data_file_name());
    let table = NutritionTable::load(&config.data_path, &config.null_config)
        .with_context(|| format!("Failed to load dataset from {:?}", config.data_path))?;

    for issue in table.validate(CHART_COLUMNS) {
        warn!("Schema check: {}", issue);
    }

    Ok(ViewerContext::new(table, config))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting nutrition dashboard");

    let viewer_context = load_viewer_context().map_err(|e| {
        error!("{:#}", e);
        e
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Starbucks Nutrition Dashboard",
        options,
        Box::new(move |cc| {
            Box::new(DashboardApp::new(cc, viewer_context))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
