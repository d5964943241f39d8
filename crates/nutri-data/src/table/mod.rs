//! The in-memory nutrition table

use std::io::Read;
use std::path::Path;
use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::DataError;
use crate::config::NullConfig;
use crate::schema::{self, ColumnRequirement, ColumnType, SchemaIssue};
use crate::sources::CsvSource;

/// Read-only table of menu items, loaded once and shared by every page
#[derive(Debug, Clone)]
pub struct NutritionTable {
    source_name: String,
    batch: RecordBatch,
}

impl NutritionTable {
    /// Load a table from a CSV file
    pub fn load(path: &Path, null_config: &NullConfig) -> Result<Self, DataError> {
        let batch = CsvSource::new(null_config).read_path(path)?;
        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
            .to_string();

        tracing::info!(
            "Loaded {} rows and {} columns from {:?}",
            batch.num_rows(),
            batch.num_columns(),
            path
        );

        Ok(Self { source_name, batch })
    }

    /// Load a table from CSV data in memory
    pub fn from_reader<R: Read>(
        reader: R,
        source_name: impl Into<String>,
        null_config: &NullConfig,
    ) -> Result<Self, DataError> {
        let batch = CsvSource::new(null_config).read(reader)?;
        Ok(Self { source_name: source_name.into(), batch })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Detected type of every column, in file order
    pub fn dtypes(&self) -> Vec<ColumnType> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| ColumnType {
                name: f.name().clone(),
                data_type: f.data_type().clone(),
            })
            .collect()
    }

    /// First `n` rows, or every row when the table is shorter
    pub fn head(&self, n: usize) -> RecordBatch {
        self.batch.slice(0, n.min(self.batch.num_rows()))
    }

    /// Check that the columns the dashboard reads are present and typed as expected
    pub fn validate(&self, requirements: &[ColumnRequirement]) -> Vec<SchemaIssue> {
        schema::validate_schema(&self.batch.schema(), requirements)
    }

    /// Values of a numeric column, one entry per row.
    ///
    /// Non-finite values (`inf`, `NaN` spelled any way the null patterns miss)
    /// come back as `None`. A column with no values at all is accepted whatever
    /// its detected type.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DataError> {
        let column = self.column(name)?;

        if let Some(float_array) = column.as_any().downcast_ref::<Float64Array>() {
            Ok(float_array.iter().map(|v| v.filter(|v| v.is_finite())).collect())
        } else if let Some(int_array) = column.as_any().downcast_ref::<Int64Array>() {
            Ok(int_array.iter().map(|v| v.map(|v| v as f64)).collect())
        } else if column.null_count() == column.len() {
            Ok(vec![None; column.len()])
        } else {
            Err(DataError::NotNumeric {
                column: name.to_string(),
                data_type: column.data_type().clone(),
            })
        }
    }

    /// Values of a text column, one entry per row
    pub fn text_column(&self, name: &str) -> Result<Vec<Option<String>>, DataError> {
        let column = self.column(name)?;

        if let Some(str_array) = column.as_any().downcast_ref::<StringArray>() {
            return Ok(str_array.iter().map(|v| v.map(str::to_string)).collect());
        }

        // Numeric labels are still usable as categories
        (0..column.len())
            .map(|i| {
                if column.is_null(i) {
                    Ok(None)
                } else {
                    arrow::util::display::array_value_to_string(column, i)
                        .map(Some)
                        .map_err(DataError::from)
                }
            })
            .collect()
    }

    fn column(&self, name: &str) -> Result<&arrow::array::ArrayRef, DataError> {
        self.batch
            .column_by_name(name)
            .ok_or_else(|| DataError::MissingColumn { column: name.to_string() })
    }
}

/// Render one cell of a batch for display, with nulls shown as empty
pub fn cell_to_string(batch: &RecordBatch, col_idx: usize, row_idx: usize) -> String {
    let column = batch.column(col_idx);
    if column.is_null(row_idx) {
        return String::new();
    }
    arrow::util::display::array_value_to_string(column, row_idx).unwrap_or_default()
}

/// Short type name shown in the data types summary
pub fn type_label(data_type: &DataType) -> &'static str {
    match data_type {
        DataType::Int64 => "int64",
        DataType::Float64 => "float64",
        DataType::Utf8 => "text",
        _ => "other",
    }
}
