//! Table view implementation

use egui::{Ui, RichText};
use egui_extras::{TableBuilder, Column};
use arrow::record_batch::RecordBatch;
use nutri_data::{ColumnType, cell_to_string, type_label};

/// Configuration for table views
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub show_row_numbers: bool,
    pub resizable_columns: bool,
    pub striped_rows: bool,
    /// Longer cell text is cut with an ellipsis
    pub max_cell_chars: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: true,
            resizable_columns: true,
            striped_rows: true,
            max_cell_chars: 50,
        }
    }
}

/// Displays a record batch in a tabular format
pub struct TableView {
    id: String,
    pub config: TableConfig,
}

impl TableView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: TableConfig::default(),
        }
    }

    pub fn ui(&self, ui: &mut Ui, data: &RecordBatch) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
        let schema = data.schema();

        ui.push_id(&self.id, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                let mut builder = TableBuilder::new(ui)
                    .striped(self.config.striped_rows)
                    .resizable(self.config.resizable_columns)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .min_scrolled_height(0.0)
                    .vscroll(false);

                if self.config.show_row_numbers {
                    builder = builder.column(Column::initial(40.0).at_least(30.0));
                }
                for _ in 0..data.num_columns() {
                    builder = builder.column(
                        Column::initial(150.0)
                            .at_least(80.0)
                            .at_most(400.0)
                            .clip(true)
                            .resizable(self.config.resizable_columns)
                    );
                }

                builder
                    .header(20.0, |mut header| {
                        if self.config.show_row_numbers {
                            header.col(|ui| {
                                ui.strong("#");
                            });
                        }
                        for field in schema.fields() {
                            header.col(|ui| {
                                ui.strong(field.name())
                                    .on_hover_text(format!("Type: {:?}", field.data_type()));
                            });
                        }
                    })
                    .body(|mut body| {
                        for row_index in 0..data.num_rows() {
                            body.row(text_height, |mut row| {
                                if self.config.show_row_numbers {
                                    row.col(|ui| {
                                        ui.label(row_index.to_string());
                                    });
                                }
                                for col_index in 0..data.num_columns() {
                                    row.col(|ui| {
                                        let value = cell_to_string(data, col_index, row_index);
                                        ui.label(truncate(&value, self.config.max_cell_chars))
                                            .on_hover_text(&value);
                                    });
                                }
                            });
                        }
                    });
            });
        });
    }
}

/// Shows the detected type of every column
pub fn column_types_ui(ui: &mut Ui, dtypes: &[ColumnType]) {
    if dtypes.is_empty() {
        ui.label(RichText::new("No columns").weak());
        return;
    }

    egui::Grid::new("column_types")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            ui.strong("Column");
            ui.strong("Type");
            ui.end_row();

            for column in dtypes {
                ui.label(&column.name);
                ui.monospace(type_label(&column.data_type))
                    .on_hover_text(format!("{:?}", column.data_type));
                ui.end_row();
            }
        });
}

/// Cut text to `max_chars` characters, marking the cut with an ellipsis
fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        let cut: String = value.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Coffee", 10), "Coffee");
        assert_eq!(truncate("Frappuccino® Blended Coffee", 6), "Frapp…");
        assert_eq!(truncate("Tazo®", 5), "Tazo®");
    }
}
