//! Exploratory data analysis page: four chart panels stacked top to bottom

use egui::Ui;
use nutri_data::DashboardConfig;
use nutri_data::schema::{BEVERAGE_CATEGORY, BEVERAGE_PREP, CAFFEINE, CALORIES, CHOLESTEROL, TOTAL_CARBS, TOTAL_FAT};

use crate::plots::{
    BarChartConfig, BarChartView, BoxPlotConfig, BoxPlotView, HistogramConfig, HistogramView,
    ScatterPlotConfig, ScatterPlotView,
};
use crate::{ChartPanel, ViewerContext};

pub const CLOSING_NOTE: &str =
    "Feel free to explore the data further! Use the sidebar to navigate between sections.";

pub struct AnalysisPage {
    panels: Vec<Box<dyn ChartPanel>>,
}

impl AnalysisPage {
    pub fn new(config: &DashboardConfig) -> Self {
        let mut panels: Vec<Box<dyn ChartPanel>> = Vec::new();

        panels.push(Box::new(HistogramView::new(
            "Distribution of Calories",
            "Calorie Distribution",
            HistogramConfig {
                column: CALORIES.to_string(),
                num_bins: config.histogram_bins,
                ..Default::default()
            },
        )));

        panels.push(Box::new(ScatterPlotView::new(
            "Relationship between Total Carbohydrates and Cholesterol",
            "Total Carbohydrates vs Cholesterol",
            ScatterPlotConfig {
                x_column: TOTAL_CARBS.to_string(),
                y_column: CHOLESTEROL.to_string(),
                color_column: BEVERAGE_CATEGORY.to_string(),
                legend_title: "Beverage Categories".to_string(),
                ..Default::default()
            },
        )));

        panels.push(Box::new(BoxPlotView::new(
            "Caffeine by Beverage Preparation",
            "Caffeine Distribution by Beverage Preparation",
            BoxPlotConfig {
                value_column: CAFFEINE.to_string(),
                category_column: BEVERAGE_PREP.to_string(),
                ..Default::default()
            },
        )));

        panels.push(Box::new(BarChartView::new(
            "Total Fat by Beverage Category",
            "Total Fat by Beverage Category",
            BarChartConfig {
                category_column: BEVERAGE_CATEGORY.to_string(),
                value_column: TOTAL_FAT.to_string(),
                bootstrap_samples: config.bootstrap_samples,
                bootstrap_seed: config.bootstrap_seed,
                ..Default::default()
            },
        )));

        Self { panels }
    }

    /// Subheaders of the panels in display order
    pub fn subheaders(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.subheader()).collect()
    }

    pub fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Exploratory Data Analysis (EDA)");
        ui.add_space(8.0);

        for panel in &mut self.panels {
            panel.show(ctx, ui);
        }

        ui.label(CLOSING_NOTE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_in_display_order() {
        let page = AnalysisPage::new(&DashboardConfig::default());
        assert_eq!(
            page.subheaders(),
            vec![
                "Distribution of Calories",
                "Relationship between Total Carbohydrates and Cholesterol",
                "Caffeine by Beverage Preparation",
                "Total Fat by Beverage Category",
            ]
        );
    }
}
