//! Data loading and access for the nutrition dashboard

pub mod config;
pub mod schema;
pub mod sources;
pub mod table;

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use config::{DashboardConfig, NullConfig, CONFIG_FILE_NAME};
pub use schema::{ColumnKind, ColumnRequirement, ColumnType, SchemaIssue};
pub use sources::CsvSource;
pub use table::{NutritionTable, cell_to_string, type_label};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(ArrowError),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Column '{column}' not found")]
    MissingColumn { column: String },

    #[error("Column '{column}' is not numeric (detected {data_type:?})")]
    NotNumeric { column: String, data_type: DataType },

    #[error("Column '{0}' has no values")]
    Empty(String),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<ArrowError> for DataError {
    fn from(error: ArrowError) -> Self {
        DataError::Arrow(error)
    }
}
