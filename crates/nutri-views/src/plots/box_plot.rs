//! Box plot implementation for statistical data visualization

use std::cmp::Ordering;
use std::collections::BTreeMap;
use egui::{Ui, Color32, Stroke};
use egui_plot::{Plot, PlotPoints, Points, Line, Polygon, MarkerShape};
use nutri_data::DataError;

use crate::{ChartPanel, ViewerContext};
use crate::chart_panel::{show_data_error, PLOT_HEIGHT};
use super::utils::{category_tick_label, colors, BoxStats};

/// Outline color for boxes, which are filled from the light palette
const OUTLINE_COLOR: Color32 = Color32::from_rgb(60, 60, 60);

/// Configuration for box plot
#[derive(Debug, Clone)]
pub struct BoxPlotConfig {
    /// Value column to plot
    pub value_column: String,

    /// Grouping column, one box per distinct value
    pub category_column: String,

    /// Whether to show outliers
    pub show_outliers: bool,

    /// Box width
    pub box_width: f32,
}

impl Default for BoxPlotConfig {
    fn default() -> Self {
        Self {
            value_column: String::new(),
            category_column: String::new(),
            show_outliers: true,
            box_width: 0.6,
        }
    }
}

/// Box plot view
pub struct BoxPlotView {
    subheader: String,
    title: String,
    pub config: BoxPlotConfig,

    cached_data: Option<Result<BoxPlotData, DataError>>,
}

/// One category along the axis
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    /// `None` when the group has no values
    pub median: Option<f64>,
    pub stats: Option<BoxStats>,
}

/// Groups ordered by ascending median
#[derive(Debug, Clone)]
pub struct BoxPlotData {
    pub groups: Vec<BoxGroup>,
    pub palette: Vec<Color32>,
}

impl BoxPlotData {
    /// Group values by category and order the groups by their median.
    ///
    /// Groups start in ascending label order and are then stable-sorted by
    /// median, so equal medians keep label order. Groups without values go last.
    pub fn compute(categories: &[Option<String>], values: &[Option<f64>]) -> Self {
        let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for (category, value) in categories.iter().zip(values) {
            let Some(category) = category.as_deref() else { continue };
            let entry = grouped.entry(category).or_default();
            if let Some(value) = value {
                entry.push(*value);
            }
        }

        let mut groups: Vec<BoxGroup> = grouped
            .into_iter()
            .map(|(label, vals)| BoxGroup {
                label: label.to_string(),
                median: super::utils::median(&vals),
                stats: BoxStats::from_values(&vals),
            })
            .collect();

        groups.sort_by(|a, b| match (a.median, b.median) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Self {
            palette: colors::light_palette(groups.len()),
            groups,
        }
    }

    /// Category labels in axis order
    pub fn labels(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.label.clone()).collect()
    }
}

impl BoxPlotView {
    /// Create a new box plot view
    pub fn new(subheader: impl Into<String>, title: impl Into<String>, config: BoxPlotConfig) -> Self {
        Self {
            subheader: subheader.into(),
            title: title.into(),
            config,
            cached_data: None,
        }
    }

    fn fetch_data(&self, ctx: &ViewerContext) -> Result<BoxPlotData, DataError> {
        let categories = ctx.table.text_column(&self.config.category_column)?;
        let values = ctx.table.numeric_column(&self.config.value_column)?;

        let data = BoxPlotData::compute(&categories, &values);
        tracing::debug!("Box plot order by median: {:?}", data.labels());
        Ok(data)
    }

    fn draw_box(&self, plot_ui: &mut egui_plot::PlotUi, x: f64, stats: &BoxStats, fill: Color32) {
        let half_width = (self.config.box_width / 2.0) as f64;

        // Box (Q1 to Q3)
        let box_points = vec![
            [x - half_width, stats.q1],
            [x + half_width, stats.q1],
            [x + half_width, stats.q3],
            [x - half_width, stats.q3],
        ];
        plot_ui.polygon(
            Polygon::new(PlotPoints::new(box_points))
                .fill_color(fill)
                .stroke(Stroke::new(1.5, OUTLINE_COLOR))
        );

        // Median line
        plot_ui.line(
            Line::new(vec![[x - half_width, stats.median], [x + half_width, stats.median]])
                .color(OUTLINE_COLOR)
                .width(2.5)
        );

        // Whiskers
        plot_ui.line(
            Line::new(vec![[x, stats.q3], [x, stats.max]])
                .color(OUTLINE_COLOR)
                .width(1.5)
        );
        plot_ui.line(
            Line::new(vec![[x, stats.q1], [x, stats.min]])
                .color(OUTLINE_COLOR)
                .width(1.5)
        );

        // Whisker caps
        let cap_width = half_width * 0.5;
        plot_ui.line(
            Line::new(vec![[x - cap_width, stats.max], [x + cap_width, stats.max]])
                .color(OUTLINE_COLOR)
                .width(1.5)
        );
        plot_ui.line(
            Line::new(vec![[x - cap_width, stats.min], [x + cap_width, stats.min]])
                .color(OUTLINE_COLOR)
                .width(1.5)
        );

        if self.config.show_outliers && !stats.outliers.is_empty() {
            let outlier_points: Vec<[f64; 2]> = stats.outliers.iter()
                .map(|&y| [x, y])
                .collect();
            plot_ui.points(
                Points::new(outlier_points)
                    .color(OUTLINE_COLOR)
                    .radius(3.0)
                    .shape(MarkerShape::Diamond)
            );
        }
    }
}

impl ChartPanel for BoxPlotView {
    fn subheader(&self) -> &str {
        &self.subheader
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        if self.cached_data.is_none() {
            self.cached_data = Some(self.fetch_data(ctx));
        }

        let data = match &self.cached_data {
            Some(Ok(data)) => data,
            Some(Err(e)) => {
                show_data_error(ui, e);
                return;
            }
            None => return,
        };

        let labels = data.labels();
        Plot::new(format!("box_{}_{}", self.config.category_column, self.config.value_column))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(self.config.category_column.clone())
            .y_axis_label(self.config.value_column.clone())
            .x_axis_formatter(move |value, _max_chars, _range| category_tick_label(&labels, value))
            .show(ui, |plot_ui| {
                for (i, group) in data.groups.iter().enumerate() {
                    if let Some(stats) = &group.stats {
                        self.draw_box(plot_ui, i as f64, stats, data.palette[i]);
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, INCOMPLETE_CSV};
    use nutri_data::schema::{BEVERAGE_PREP, CAFFEINE};

    #[test]
    fn test_fetch_reports_missing_column() {
        let ctx = context(INCOMPLETE_CSV);
        let view = BoxPlotView::new("", "", BoxPlotConfig {
            value_column: CAFFEINE.to_string(),
            category_column: BEVERAGE_PREP.to_string(),
            ..Default::default()
        });

        let err = view.fetch_data(&ctx).unwrap_err();
        assert!(
            matches!(err, DataError::MissingColumn { ref column } if column == CAFFEINE),
            "{:?}", err
        );
    }

    fn rows(pairs: &[(&str, Option<f64>)]) -> (Vec<Option<String>>, Vec<Option<f64>>) {
        pairs.iter().map(|(c, v)| (Some(c.to_string()), *v)).unzip()
    }

    #[test]
    fn test_iced_before_hot() {
        let (cats, vals) = rows(&[
            ("Hot", Some(10.0)),
            ("Iced", Some(5.0)),
            ("Hot", Some(20.0)),
            ("Iced", Some(15.0)),
            ("Hot", Some(30.0)),
        ]);

        let data = BoxPlotData::compute(&cats, &vals);
        assert_eq!(data.labels(), vec!["Iced", "Hot"]);
        assert_eq!(data.groups[0].median, Some(10.0));
        assert_eq!(data.groups[1].median, Some(20.0));
        assert_eq!(data.palette.len(), 2);
    }

    #[test]
    fn test_order_is_non_decreasing_in_median() {
        let (cats, vals) = rows(&[
            ("Venti", Some(410.0)),
            ("Short", Some(175.0)),
            ("Grande", Some(330.0)),
            ("Tall", Some(260.0)),
            ("Solo", Some(75.0)),
            ("Doppio", Some(150.0)),
            ("Short", Some(75.0)),
            ("Grande", Some(150.0)),
        ]);

        let data = BoxPlotData::compute(&cats, &vals);
        let medians: Vec<f64> = data.groups.iter().map(|g| g.median.unwrap()).collect();
        assert!(medians.windows(2).all(|w| w[0] <= w[1]), "{:?}", medians);
        assert_eq!(data.groups.len(), 6);
    }

    #[test]
    fn test_ties_keep_label_order() {
        let (cats, vals) = rows(&[("b", Some(1.0)), ("a", Some(1.0)), ("c", Some(0.0))]);
        let data = BoxPlotData::compute(&cats, &vals);
        assert_eq!(data.labels(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_group_without_values_goes_last() {
        let (cats, vals) = rows(&[("Tea", None), ("Coffee", Some(100.0)), ("Tea", None)]);
        let data = BoxPlotData::compute(&cats, &vals);
        assert_eq!(data.labels(), vec!["Coffee", "Tea"]);
        assert!(data.groups[1].stats.is_none());
        assert_eq!(data.groups[1].median, None);
    }
}
