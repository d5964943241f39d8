//! Sidebar page selector

use egui::{Context, RichText};

/// Pages of the dashboard. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Overview,
    ExploratoryDataAnalysis,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Overview, Page::ExploratoryDataAnalysis];

    /// Label shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Overview => "Overview",
            Page::ExploratoryDataAnalysis => "Exploratory Data Analysis",
        }
    }
}

/// Left sidebar holding the page selector
pub struct NavigationPanel {
    selected: Page,
    width: f32,
}

impl Default for NavigationPanel {
    fn default() -> Self {
        Self {
            selected: Page::default(),
            width: 220.0,
        }
    }
}

impl NavigationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Page {
        self.selected
    }

    pub fn select(&mut self, page: Page) {
        if page != self.selected {
            tracing::debug!("Page changed: {} -> {}", self.selected.label(), page.label());
            self.selected = page;
        }
    }

    /// Draw the sidebar and return the page to render this frame
    pub fn show(&mut self, ctx: &Context, source_summary: &str) -> Page {
        let mut selected = self.selected;

        egui::SidePanel::left("navigation_panel")
            .resizable(false)
            .exact_width(self.width)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label("Select a Page");
                egui::ComboBox::from_id_source("page_selector")
                    .selected_text(selected.label())
                    .width(self.width - 16.0)
                    .show_ui(ui, |ui| {
                        for page in Page::ALL {
                            ui.selectable_value(&mut selected, page, page.label());
                        }
                    });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(source_summary).small().weak());
                });
            });

        self.select(selected);
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_cover_closed_set() {
        let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Home", "Overview", "Exploratory Data Analysis"]);
    }

    #[test]
    fn test_starts_on_home() {
        let mut panel = NavigationPanel::new();
        assert_eq!(panel.selected(), Page::Home);
        panel.select(Page::Overview);
        assert_eq!(panel.selected(), Page::Overview);
    }
}
