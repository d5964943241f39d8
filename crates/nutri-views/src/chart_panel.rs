//! Chart panel abstraction - base trait for the analysis page panels

use egui::{RichText, Ui};
use nutri_data::DataError;

use crate::ViewerContext;

/// Height of every chart plot in points
pub const PLOT_HEIGHT: f32 = 320.0;

/// Base trait for the chart panels stacked on the analysis page
pub trait ChartPanel {
    /// Subheader shown above the panel
    fn subheader(&self) -> &str;

    /// Title drawn with the plot
    fn title(&self) -> &str;

    /// Draw the UI
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);

    /// Draw the subheader, the title, and then the panel body
    fn show(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading(self.subheader());
        ui.label(RichText::new(self.title()).strong());
        self.ui(ctx, ui);
        ui.add_space(16.0);
    }
}

/// Shown in place of a plot whose input could not be built from the table
pub fn show_data_error(ui: &mut Ui, error: &DataError) {
    let color = ui.visuals().error_fg_color;
    ui.colored_label(
        color,
        format!("Unable to draw this chart: {}", error),
    );
}
