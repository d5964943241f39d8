//! Histogram implementation

use egui::{Ui, Color32};
use egui_plot::{Plot, Bar, BarChart, Line, PlotPoints, Legend};
use nutri_data::DataError;

use crate::{ChartPanel, ViewerContext};
use crate::chart_panel::{show_data_error, PLOT_HEIGHT};
use super::utils::{colors, stats};

/// Points sampled along the density curve
const DENSITY_POINTS: usize = 200;

/// Configuration for histogram view
#[derive(Clone)]
pub struct HistogramConfig {
    /// Column to create histogram from
    pub column: String,

    /// Number of bins
    pub num_bins: usize,

    /// Whether to show density curve
    pub show_density: bool,

    /// Bar color
    pub bar_color: Color32,

    /// Whether to show statistics
    pub show_stats: bool,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            column: String::new(),
            num_bins: 20,
            show_density: true,
            bar_color: colors::GREEN,
            show_stats: true,
        }
    }
}

/// Histogram view
pub struct HistogramView {
    subheader: String,
    title: String,
    pub config: HistogramConfig,

    cached_data: Option<Result<HistogramData, DataError>>,
}

/// Binned counts with an optional density overlay
#[derive(Debug, Clone)]
pub struct HistogramData {
    pub bins: Vec<Bin>,
    pub statistics: DataStatistics,
    /// Density curve scaled to counts so it overlays the bars
    pub density_curve: Option<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct DataStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl HistogramData {
    /// Bin values into `num_bins` equal-width bins over [min, max].
    ///
    /// The last bin is closed on the right. When every value is the same the
    /// range is widened to [v - 0.5, v + 0.5]. Non-finite values are skipped.
    /// Returns `None` when no values remain.
    pub fn compute(values: &[f64], num_bins: usize, with_density: bool) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let values = finite.as_slice();
        if values.is_empty() {
            return None;
        }
        let num_bins = num_bins.max(1);

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
        let bin_width = (hi - lo) / num_bins as f64;

        let mut counts = vec![0usize; num_bins];
        for &v in values {
            let idx = (((v - lo) / bin_width).floor() as usize).min(num_bins - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let start = lo + i as f64 * bin_width;
                Bin { start, end: start + bin_width, count }
            })
            .collect();

        let scale = values.len() as f64 * bin_width;
        let density_curve = if with_density {
            stats::gaussian_kde(values, min, max, DENSITY_POINTS)
                .map(|curve| curve.into_iter().map(|(x, y)| (x, y * scale)).collect())
        } else {
            None
        };

        let statistics = DataStatistics {
            mean: stats::mean(values).unwrap_or_default(),
            std_dev: stats::std_dev(values).unwrap_or_default(),
            min,
            max,
            count: values.len(),
        };

        Some(Self { bins, statistics, density_curve })
    }
}

impl HistogramView {
    /// Create a new histogram view
    pub fn new(subheader: impl Into<String>, title: impl Into<String>, config: HistogramConfig) -> Self {
        Self {
            subheader: subheader.into(),
            title: title.into(),
            config,
            cached_data: None,
        }
    }

    fn fetch_histogram_data(&self, ctx: &ViewerContext) -> Result<HistogramData, DataError> {
        let values: Vec<f64> = ctx.table
            .numeric_column(&self.config.column)?
            .into_iter()
            .flatten()
            .collect();

        tracing::debug!("Histogram over '{}' with {} values", self.config.column, values.len());

        HistogramData::compute(&values, self.config.num_bins, self.config.show_density)
            .ok_or_else(|| DataError::Empty(self.config.column.clone()))
    }
}

impl ChartPanel for HistogramView {
    fn subheader(&self) -> &str {
        &self.subheader
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        if self.cached_data.is_none() {
            self.cached_data = Some(self.fetch_histogram_data(ctx));
        }

        let data = match &self.cached_data {
            Some(Ok(data)) => data,
            Some(Err(e)) => {
                show_data_error(ui, e);
                return;
            }
            None => return,
        };

        if self.config.show_stats {
            ui.horizontal(|ui| {
                ui.label(format!("Count: {}", data.statistics.count));
                ui.separator();
                ui.label(format!("Mean: {:.2}", data.statistics.mean));
                ui.separator();
                ui.label(format!("Std Dev: {:.2}", data.statistics.std_dev));
                ui.separator();
                ui.label(format!("Min: {:.2}", data.statistics.min));
                ui.separator();
                ui.label(format!("Max: {:.2}", data.statistics.max));
            });
            ui.add_space(4.0);
        }

        let bar_color = self.config.bar_color;
        Plot::new(format!("histogram_{}", self.config.column))
            .legend(Legend::default())
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(self.config.column.clone())
            .y_axis_label("Count")
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = data.bins
                    .iter()
                    .map(|bin| {
                        Bar::new((bin.start + bin.end) / 2.0, bin.count as f64)
                            .width(bin.end - bin.start)
                            .fill(bar_color.linear_multiply(0.7))
                    })
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(bar_color)
                        .name(self.config.column.clone())
                );

                if let Some(curve) = &data.density_curve {
                    let points: Vec<[f64; 2]> = curve.iter().map(|&(x, y)| [x, y]).collect();
                    plot_ui.line(
                        Line::new(PlotPoints::new(points))
                            .color(colors::DENSITY_COLOR)
                            .width(2.0)
                            .name("Density")
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, INCOMPLETE_CSV};
    use nutri_data::schema::{BEVERAGE_CATEGORY, CALORIES};

    fn view(column: &str) -> HistogramView {
        HistogramView::new("", "", HistogramConfig { column: column.to_string(), ..Default::default() })
    }

    #[test]
    fn test_fetch_reports_column_without_values() {
        let ctx = context(INCOMPLETE_CSV);
        let err = view(CALORIES).fetch_histogram_data(&ctx).unwrap_err();
        assert!(matches!(err, DataError::Empty(ref column) if column == CALORIES), "{:?}", err);
    }

    #[test]
    fn test_fetch_rejects_text_column() {
        let ctx = context(INCOMPLETE_CSV);
        let err = view(BEVERAGE_CATEGORY).fetch_histogram_data(&ctx).unwrap_err();
        assert!(matches!(err, DataError::NotNumeric { .. }), "{:?}", err);
    }

    #[test]
    fn test_always_twenty_bins() {
        for n in [1usize, 2, 7, 500] {
            let values: Vec<f64> = (0..n).map(|i| (i * 37 % 410) as f64).collect();
            let data = HistogramData::compute(&values, 20, true).unwrap();
            assert_eq!(data.bins.len(), 20, "n = {}", n);
            assert_eq!(data.bins.iter().map(|b| b.count).sum::<usize>(), n);
        }
    }

    #[test]
    fn test_bins_cover_range_with_max_in_last_bin() {
        let data = HistogramData::compute(&[0.0, 10.0, 20.0], 20, false).unwrap();
        assert_eq!(data.bins[0].start, 0.0);
        assert_eq!(data.bins[19].end, 20.0);
        assert_eq!(data.bins[0].count, 1);
        assert_eq!(data.bins[10].count, 1);
        assert_eq!(data.bins[19].count, 1);
        assert!(data.density_curve.is_none());
    }

    #[test]
    fn test_constant_values_widen_range() {
        let data = HistogramData::compute(&[5.0, 5.0], 20, true).unwrap();
        assert_eq!(data.bins.len(), 20);
        assert_eq!(data.bins[0].start, 4.5);
        assert!((data.bins[19].end - 5.5).abs() < 1e-9);
        assert!(data.density_curve.is_none());
    }

    #[test]
    fn test_density_is_scaled_to_counts() {
        let values: Vec<f64> = (0..100).map(|i| (i % 10) as f64).collect();
        let data = HistogramData::compute(&values, 20, true).unwrap();
        let curve = data.density_curve.unwrap();
        let peak = curve.iter().map(|&(_, y)| y).fold(0.0, f64::max);
        // A density (not count) curve would peak well below 1
        assert!(peak > 1.0);
        assert_eq!(curve.first().unwrap().0, 0.0);
        assert_eq!(curve.last().unwrap().0, 9.0);
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let data = HistogramData::compute(&[10.0, f64::NAN, 30.0, f64::INFINITY], 20, true).unwrap();
        assert_eq!(data.statistics.count, 2);
        assert_eq!(data.statistics.mean, 20.0);
        assert_eq!(data.bins[0].count, 1);
        assert_eq!(data.bins[19].count, 1);
        assert_eq!(data.bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!(HistogramData::compute(&[f64::NAN], 20, true).is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(HistogramData::compute(&[], 20, true).is_none());
    }
}
