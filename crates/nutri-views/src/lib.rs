//! View system for the nutrition dashboard

mod chart_panel;
pub mod pages;
pub mod plots;
pub mod tables;

pub use chart_panel::{ChartPanel, show_data_error, PLOT_HEIGHT};
pub use pages::{AnalysisPage, HomePage, OverviewPage, OverviewTab};
pub use tables::{TableView, TableConfig};

use std::sync::Arc;
use nutri_data::{DashboardConfig, NutritionTable};

/// Context passed to views during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// The loaded table, read-only for the life of the process
    pub table: Arc<NutritionTable>,

    /// Dashboard configuration
    pub config: Arc<DashboardConfig>,
}

impl ViewerContext {
    pub fn new(table: NutritionTable, config: DashboardConfig) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }
}
