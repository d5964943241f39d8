//! Maps the selected page to the view that draws it

use egui::Ui;
use nutri_ui::Page;
use nutri_views::{AnalysisPage, HomePage, OverviewPage, ViewerContext};

/// State of every page; only the selected one is drawn each frame
pub struct Pages {
    pub home: HomePage,
    pub overview: OverviewPage,
    pub analysis: AnalysisPage,
}

impl Pages {
    pub fn show(&mut self, page: Page, ctx: &ViewerContext, ui: &mut Ui) {
        match page {
            Page::Home => self.home.ui(ctx, ui),
            Page::Overview => self.overview.ui(ctx, ui),
            Page::ExploratoryDataAnalysis => self.analysis.ui(ctx, ui),
        }
    }
}
