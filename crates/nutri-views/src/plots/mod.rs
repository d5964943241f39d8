//! Plot view implementations

pub mod bar;
pub mod box_plot;
pub mod histogram;
pub mod scatter;

// Utilities
pub mod utils;

// Re-exports
pub use bar::{BarChartView, BarChartConfig, BarData};
pub use box_plot::{BoxPlotView, BoxPlotConfig, BoxPlotData};
pub use histogram::{HistogramView, HistogramConfig, HistogramData};
pub use scatter::{ScatterPlotView, ScatterPlotConfig, ScatterData};
