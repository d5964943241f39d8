//! Data overview page: dictionary, column types and a sample of rows

use egui::Ui;
use nutri_data::schema::{
    BEVERAGE_CATEGORY, BEVERAGE_PREP, CALORIES, CHOLESTEROL, SATURATED_FAT, SODIUM, TOTAL_CARBS,
    TOTAL_FAT, TRANS_FAT,
};

use crate::tables::{column_types_ui, TableView};
use crate::ViewerContext;

/// Field descriptions shown on the dictionary tab
pub const DATA_DICTIONARY: &[(&str, &str)] = &[
    (BEVERAGE_CATEGORY, "classifies the type of beverage."),
    (BEVERAGE_PREP, "details the preparation method of the beverage."),
    (CALORIES, "lists the total caloric content of each beverage."),
    (TOTAL_FAT, "the number of fat grams per serving."),
    (TRANS_FAT, "the number of trans fat grams per serving."),
    (SATURATED_FAT, "the number of saturated fat grams per serving."),
    (SODIUM, "indicates the amount of sodium in each beverage."),
    (TOTAL_CARBS, "provides the total carbohydrate content."),
    (CHOLESTEROL, "lists the amount of cholesterol in each beverage."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverviewTab {
    #[default]
    DataDictionary,
    DataTypes,
    SampleData,
}

impl OverviewTab {
    pub const ALL: [OverviewTab; 3] = [
        OverviewTab::DataDictionary,
        OverviewTab::DataTypes,
        OverviewTab::SampleData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OverviewTab::DataDictionary => "Data Dictionary",
            OverviewTab::DataTypes => "Data Types",
            OverviewTab::SampleData => "Sample Data",
        }
    }
}

pub struct OverviewPage {
    pub selected_tab: OverviewTab,
    sample_table: TableView,
}

impl Default for OverviewPage {
    fn default() -> Self {
        Self {
            selected_tab: OverviewTab::default(),
            sample_table: TableView::new("sample_data"),
        }
    }
}

impl OverviewPage {
    pub fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Overview of the Data");
        ui.label("This dataset contains information about nutrition information for Starbucks menu items.");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for tab in OverviewTab::ALL {
                ui.selectable_value(&mut self.selected_tab, tab, tab.label());
            }
        });
        ui.separator();

        match self.selected_tab {
            OverviewTab::DataDictionary => {
                ui.strong("Data Dictionary:");
                for (field, description) in DATA_DICTIONARY {
                    ui.horizontal_wrapped(|ui| {
                        ui.label("•");
                        ui.code(*field);
                        ui.label(format!(": {}", description));
                    });
                }
            }
            OverviewTab::DataTypes => {
                ui.strong("Data Types:");
                column_types_ui(ui, &ctx.table.dtypes());
            }
            OverviewTab::SampleData => {
                ui.strong("Sample Data:");
                let sample = ctx.table.head(ctx.config.preview_rows);
                self.sample_table.ui(ui, &sample);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_start_on_dictionary() {
        assert_eq!(OverviewPage::default().selected_tab, OverviewTab::DataDictionary);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = OverviewTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Data Dictionary", "Data Types", "Sample Data"]);
    }

    #[test]
    fn test_dictionary_has_nine_entries() {
        assert_eq!(DATA_DICTIONARY.len(), 9);
    }
}
