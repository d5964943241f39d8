//! Bar chart implementation

use egui::{Ui, Color32};
use egui_plot::{Plot, Bar, BarChart, Line};
use indexmap::IndexMap;
use nutri_data::DataError;

use crate::{ChartPanel, ViewerContext};
use crate::chart_panel::{show_data_error, PLOT_HEIGHT};
use super::utils::{category_tick_label, colors, stats};

/// Confidence level of the error bars
const CI_LEVEL: f64 = 0.95;

const ERROR_BAR_COLOR: Color32 = Color32::from_rgb(60, 60, 60);

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Category column (X-axis)
    pub category_column: String,

    /// Value column (Y-axis), averaged per category
    pub value_column: String,

    /// Bar width factor (0.0 to 1.0)
    pub bar_width: f32,

    /// Bootstrap resamples for the error bars, 0 disables them
    pub bootstrap_samples: usize,

    pub bootstrap_seed: u64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            category_column: String::new(),
            value_column: String::new(),
            bar_width: 0.8,
            bootstrap_samples: 1000,
            bootstrap_seed: 0,
        }
    }
}

/// Bar chart view
pub struct BarChartView {
    subheader: String,
    title: String,
    pub config: BarChartConfig,

    cached_data: Option<Result<BarData, DataError>>,
}

/// One bar per category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    /// Mean of the category's values, `None` when it has none
    pub mean: Option<f64>,
    pub ci: Option<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct BarData {
    /// Categories in order of first appearance
    pub bars: Vec<CategoryBar>,
    pub palette: Vec<Color32>,
}

impl BarData {
    /// Average values per category, keeping categories in first-appearance order
    pub fn compute(
        categories: &[Option<String>],
        values: &[Option<f64>],
        bootstrap_samples: usize,
        seed: u64,
    ) -> Self {
        let mut grouped: IndexMap<&str, Vec<f64>> = IndexMap::new();
        for (category, value) in categories.iter().zip(values) {
            let Some(category) = category.as_deref() else { continue };
            let entry = grouped.entry(category).or_default();
            if let Some(value) = value {
                entry.push(*value);
            }
        }

        let bars: Vec<CategoryBar> = grouped
            .into_iter()
            .map(|(label, vals)| CategoryBar {
                label: label.to_string(),
                mean: stats::mean(&vals),
                ci: if bootstrap_samples > 0 {
                    stats::bootstrap_mean_ci(&vals, bootstrap_samples, CI_LEVEL, seed)
                } else {
                    None
                },
            })
            .collect();

        Self {
            palette: colors::light_palette(bars.len()),
            bars,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|b| b.label.clone()).collect()
    }
}

impl BarChartView {
    /// Create a new bar chart view
    pub fn new(subheader: impl Into<String>, title: impl Into<String>, config: BarChartConfig) -> Self {
        Self {
            subheader: subheader.into(),
            title: title.into(),
            config,
            cached_data: None,
        }
    }

    fn fetch_data(&self, ctx: &ViewerContext) -> Result<BarData, DataError> {
        tracing::info!(
            "Fetching bar chart data - Category: '{}', Value: '{}'",
            self.config.category_column, self.config.value_column
        );

        let categories = ctx.table.text_column(&self.config.category_column)?;
        let values = ctx.table.numeric_column(&self.config.value_column)?;

        let data = BarData::compute(
            &categories,
            &values,
            self.config.bootstrap_samples,
            self.config.bootstrap_seed,
        );
        for bar in &data.bars {
            tracing::debug!("  {}: {:?}", bar.label, bar.mean);
        }
        Ok(data)
    }
}

impl ChartPanel for BarChartView {
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
        let bar_width = self.config.bar_width as f64;
        Plot::new(format!("bar_{}_{}", self.config.category_column, self.config.value_column))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(self.config.category_column.clone())
            .y_axis_label(self.config.value_column.clone())
            .x_axis_formatter(move |value, _max_chars, _range| category_tick_label(&labels, value))
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = data.bars
                    .iter()
                    .enumerate()
                    .filter_map(|(i, bar)| {
                        let mean = bar.mean?;
                        Some(
                            Bar::new(i as f64, mean)
                                .width(bar_width)
                                .name(&bar.label)
                                .fill(data.palette[i])
                        )
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).color(colors::GREEN));

                for (i, bar) in data.bars.iter().enumerate() {
                    if let Some((lo, hi)) = bar.ci {
                        let x = i as f64;
                        plot_ui.line(
                            Line::new(vec![[x, lo], [x, hi]])
                                .color(ERROR_BAR_COLOR)
                                .width(2.0)
                        );
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, INCOMPLETE_CSV};
    use nutri_data::schema::{BEVERAGE_CATEGORY, TOTAL_FAT};

    #[test]
    fn test_fetch_unaffected_by_other_broken_columns() {
        let ctx = context(INCOMPLETE_CSV);
        let view = BarChartView::new("", "", BarChartConfig {
            category_column: BEVERAGE_CATEGORY.to_string(),
            value_column: TOTAL_FAT.to_string(),
            bootstrap_samples: 100,
            ..Default::default()
        });

        let data = view.fetch_data(&ctx).unwrap();
        assert_eq!(data.labels(), vec!["Coffee", "Tazo® Tea Drinks"]);
        assert!((data.bars[0].mean.unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(data.bars[1].mean, Some(0.0));
    }

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_bars_follow_first_appearance_with_means() {
        let cats = vec![s("Smoothies"), s("Coffee"), s("Smoothies"), s("Tea"), s("Coffee")];
        let vals = vec![Some(2.0), Some(0.1), Some(4.0), Some(0.0), Some(0.3)];

        let data = BarData::compute(&cats, &vals, 0, 0);
        assert_eq!(data.labels(), vec!["Smoothies", "Coffee", "Tea"]);
        assert_eq!(data.bars[0].mean, Some(3.0));
        assert!((data.bars[1].mean.unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(data.bars[2].mean, Some(0.0));
        assert_eq!(data.palette.len(), 3);
        assert!(data.bars.iter().all(|b| b.ci.is_none()));
    }

    #[test]
    fn test_error_bars_bracket_means() {
        let cats = vec![s("A"), s("A"), s("A"), s("B")];
        let vals = vec![Some(1.0), Some(2.0), Some(6.0), Some(5.0)];

        let data = BarData::compute(&cats, &vals, 1000, 3);
        let (lo, hi) = data.bars[0].ci.unwrap();
        assert!(lo <= 3.0 && 3.0 <= hi);
        assert_eq!(data.bars[1].ci, Some((5.0, 5.0)));
    }

    #[test]
    fn test_category_without_values_keeps_its_slot() {
        let cats = vec![s("A"), s("B"), s("C")];
        let vals = vec![Some(1.0), None, Some(3.0)];

        let data = BarData::compute(&cats, &vals, 0, 0);
        assert_eq!(data.labels(), vec!["A", "B", "C"]);
        assert_eq!(data.bars[1].mean, None);
    }
}
