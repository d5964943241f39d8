use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use csv::ReaderBuilder;

use crate::DataError;
use crate::config::NullConfig;
use crate::schema::SchemaDetector;

/// Reads a whole CSV file into a single record batch
pub struct CsvSource<'a> {
    null_config: &'a NullConfig,
}

impl<'a> CsvSource<'a> {
    pub fn new(null_config: &'a NullConfig) -> Self {
        Self { null_config }
    }

    /// Read a CSV file from disk
    pub fn read_path(&self, path: &Path) -> Result<RecordBatch, DataError> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Read CSV data from any reader. The first record is the header.
    pub fn read<R: Read>(&self, reader: R) -> Result<RecordBatch, DataError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut row_data: Vec<Vec<String>> = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            row_data.push(record.iter().map(|s| s.to_string()).collect());
        }

        tracing::debug!("Read {} rows x {} columns", row_data.len(), headers.len());

        let detector = SchemaDetector::new(self.null_config);
        let fields = headers
            .iter()
            .enumerate()
            .map(|(col_idx, name)| {
                let data_type = detector.detect_column_type(
                    row_data.iter().filter_map(|row| row.get(col_idx).map(String::as_str)),
                );
                Field::new(name, data_type, true)
            })
            .collect::<Vec<_>>();
        let schema = Arc::new(Schema::new(fields));

        let columns = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(col_idx, field)| self.build_column(&row_data, col_idx, field.data_type()))
            .collect::<Vec<_>>();

        let options = RecordBatchOptions::new().with_row_count(Some(row_data.len()));
        RecordBatch::try_new_with_options(schema, columns, &options).map_err(|e| e.into())
    }

    /// Build an arrow array for one column
    fn build_column(&self, row_data: &[Vec<String>], col_idx: usize, data_type: &DataType) -> ArrayRef {
        let cells = row_data.iter().map(|row| {
            row.get(col_idx)
                .map(String::as_str)
                .filter(|value| !self.null_config.is_null(value))
        });

        match data_type {
            DataType::Int64 => {
                let mut builder = Int64Builder::with_capacity(row_data.len());
                for cell in cells {
                    builder.append_option(cell.and_then(|v| v.trim().parse::<i64>().ok()));
                }
                Arc::new(builder.finish())
            }
            DataType::Float64 => {
                let mut builder = Float64Builder::with_capacity(row_data.len());
                for cell in cells {
                    builder.append_option(cell.and_then(|v| v.trim().parse::<f64>().ok()));
                }
                Arc::new(builder.finish())
            }
            _ => {
                let mut builder = StringBuilder::new();
                for cell in cells {
                    builder.append_option(cell.map(str::trim));
                }
                Arc::new(builder.finish())
            }
        }
    }
}
