//! Scatter plot implementation

use egui::{Ui, Color32, RichText};
use egui_plot::{Plot, PlotPoints, Points, Legend, MarkerShape, Corner};
use indexmap::IndexSet;
use nutri_data::DataError;

use crate::{ChartPanel, ViewerContext};
use crate::chart_panel::{show_data_error, PLOT_HEIGHT};
use super::utils::colors::light_palette;

/// Configuration for scatter plot view
#[derive(Clone)]
pub struct ScatterPlotConfig {
    /// X-axis column
    pub x_column: String,

    /// Y-axis column
    pub y_column: String,

    /// Column whose values pick each point's color
    pub color_column: String,

    /// Title shown above the legend entries
    pub legend_title: String,

    /// Base point radius
    pub point_radius: f32,

    /// Marker shape
    pub marker_shape: MarkerShape,
}

impl Default for ScatterPlotConfig {
    fn default() -> Self {
        Self {
            x_column: String::new(),
            y_column: String::new(),
            color_column: String::new(),
            legend_title: String::new(),
            point_radius: 3.0,
            marker_shape: MarkerShape::Circle,
        }
    }
}

/// Scatter plot view
pub struct ScatterPlotView {
    subheader: String,
    title: String,
    pub config: ScatterPlotConfig,

    cached_data: Option<Result<ScatterData, DataError>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Index into `ScatterData::categories`
    pub category: usize,
}

/// Points grouped by category, with one palette entry per category
#[derive(Debug, Clone)]
pub struct ScatterData {
    /// Distinct categories in order of first appearance
    pub categories: Vec<String>,
    pub palette: Vec<Color32>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    /// Build points from row-aligned columns.
    ///
    /// Categories come from every row with a category, even rows whose x or y
    /// is missing. Points need all three values.
    pub fn compute(x: &[Option<f64>], y: &[Option<f64>], categories: &[Option<String>]) -> Self {
        let distinct: IndexSet<&str> = categories.iter().flatten().map(String::as_str).collect();

        let points = x.iter()
            .zip(y)
            .zip(categories)
            .filter_map(|((x, y), category)| {
                let category = distinct.get_index_of(category.as_deref()?)?;
                Some(ScatterPoint { x: (*x)?, y: (*y)?, category })
            })
            .collect();

        Self {
            palette: light_palette(distinct.len()),
            categories: distinct.into_iter().map(str::to_string).collect(),
            points,
        }
    }

    pub fn color_of(&self, point: &ScatterPoint) -> Color32 {
        self.palette[point.category]
    }

    /// Points of one category, ready for plotting
    pub fn series(&self, category: usize) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter(|p| p.category == category)
            .map(|p| [p.x, p.y])
            .collect()
    }
}

impl ScatterPlotView {
    /// Create a new scatter plot view
    pub fn new(subheader: impl Into<String>, title: impl Into<String>, config: ScatterPlotConfig) -> Self {
        Self {
            subheader: subheader.into(),
            title: title.into(),
            config,
            cached_data: None,
        }
    }

    fn fetch_plot_data(&self, ctx: &ViewerContext) -> Result<ScatterData, DataError> {
        tracing::info!(
            "Fetching scatter plot data - X: '{}', Y: '{}', Color: '{}'",
            self.config.x_column, self.config.y_column, self.config.color_column
        );

        let x = ctx.table.numeric_column(&self.config.x_column)?;
        let y = ctx.table.numeric_column(&self.config.y_column)?;
        let categories = ctx.table.text_column(&self.config.color_column)?;

        let data = ScatterData::compute(&x, &y, &categories);
        tracing::debug!("{} points across {} categories", data.points.len(), data.categories.len());
        Ok(data)
    }
}

impl ChartPanel for ScatterPlotView {
    fn subheader(&self) -> &str {
        &self.subheader
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        if self.cached_data.is_none() {
            self.cached_data = Some(self.fetch_plot_data(ctx));
        }

        let data = match &self.cached_data {
            Some(Ok(data)) => data,
            Some(Err(e)) => {
                show_data_error(ui, e);
                return;
            }
            None => return,
        };

        if !self.config.legend_title.is_empty() {
            ui.label(RichText::new(&self.config.legend_title).weak());
        }

        Plot::new(format!("scatter_{}_{}", self.config.x_column, self.config.y_column))
            .legend(Legend::default().position(Corner::RightTop))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(self.config.x_column.clone())
            .y_axis_label(self.config.y_column.clone())
            .show(ui, |plot_ui| {
                // One series per category so each gets a legend entry
                for (idx, category) in data.categories.iter().enumerate() {
                    let category_points = data.series(idx);
                    if category_points.is_empty() {
                        continue;
                    }

                    plot_ui.points(
                        Points::new(PlotPoints::new(category_points))
                            .color(data.palette[idx])
                            .radius(self.config.point_radius)
                            .shape(self.config.marker_shape)
                            .filled(true)
                            .name(category)
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, INCOMPLETE_CSV};
    use nutri_data::schema::{BEVERAGE_CATEGORY, CHOLESTEROL, TOTAL_CARBS};

    #[test]
    fn test_fetch_unaffected_by_other_broken_columns() {
        let ctx = context(INCOMPLETE_CSV);
        let view = ScatterPlotView::new("", "", ScatterPlotConfig {
            x_column: TOTAL_CARBS.to_string(),
            y_column: CHOLESTEROL.to_string(),
            color_column: BEVERAGE_CATEGORY.to_string(),
            ..Default::default()
        });

        let data = view.fetch_plot_data(&ctx).unwrap();
        assert_eq!(data.categories, vec!["Coffee", "Tazo® Tea Drinks"]);
        assert_eq!(data.points.len(), 3);
    }

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let x = vec![Some(1.0); 5];
        let y = vec![Some(2.0); 5];
        let cats = vec![s("Tea"), s("Coffee"), s("Tea"), s("Smoothies"), s("Coffee")];

        let data = ScatterData::compute(&x, &y, &cats);
        assert_eq!(data.categories, vec!["Tea", "Coffee", "Smoothies"]);
        assert_eq!(data.palette.len(), data.categories.len());
    }

    #[test]
    fn test_every_point_colored_by_its_category() {
        let x = vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0)];
        let y = vec![Some(0.0), Some(5.0), Some(10.0), Some(15.0)];
        let cats = vec![s("A"), s("B"), s("A"), s("C")];

        let data = ScatterData::compute(&x, &y, &cats);
        assert_eq!(data.points.len(), 4);
        for (point, cat) in data.points.iter().zip(&cats) {
            let expected = data.categories.iter().position(|c| Some(c) == cat.as_ref()).unwrap();
            assert_eq!(data.color_of(point), data.palette[expected]);
        }
        assert_eq!(data.series(0), vec![[10.0, 0.0], [30.0, 10.0]]);
    }

    #[test]
    fn test_rows_with_missing_values_are_skipped() {
        let x = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let y = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
        let cats = vec![s("A"), s("B"), None, s("A")];

        let data = ScatterData::compute(&x, &y, &cats);
        // "B" only appears on a row without x, but is still a distinct category
        assert_eq!(data.categories, vec!["A", "B"]);
        assert_eq!(data.palette.len(), 2);
        assert_eq!(data.points.len(), 2);
        assert!(data.series(1).is_empty());
    }
}
