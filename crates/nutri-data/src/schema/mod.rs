//! Column names, type detection and schema validation for the nutrition table

use std::fmt;
use arrow::datatypes::{DataType, Schema};

use crate::config::NullConfig;

pub const BEVERAGE_CATEGORY: &str = "Beverage_category";
pub const BEVERAGE_PREP: &str = "Beverage_prep";
pub const CALORIES: &str = "Calories";
pub const TOTAL_FAT: &str = "Total Fat (g)";
pub const TRANS_FAT: &str = "Trans Fat (g)";
pub const SATURATED_FAT: &str = "Saturated Fat (g)";
pub const SODIUM: &str = "Sodium";
pub const TOTAL_CARBS: &str = "Total Carbohydrates (g)";
pub const CHOLESTEROL: &str = "Cholesterol (mg)";
pub const CAFFEINE: &str = "Caffeine (mg)";

/// Expected kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// A column the dashboard reads, and the kind of values it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRequirement {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// Columns read by the chart panels
pub const CHART_COLUMNS: &[ColumnRequirement] = &[
    ColumnRequirement { name: BEVERAGE_CATEGORY, kind: ColumnKind::Text },
    ColumnRequirement { name: BEVERAGE_PREP, kind: ColumnKind::Text },
    ColumnRequirement { name: CALORIES, kind: ColumnKind::Numeric },
    ColumnRequirement { name: TOTAL_FAT, kind: ColumnKind::Numeric },
    ColumnRequirement { name: TOTAL_CARBS, kind: ColumnKind::Numeric },
    ColumnRequirement { name: CHOLESTEROL, kind: ColumnKind::Numeric },
    ColumnRequirement { name: CAFFEINE, kind: ColumnKind::Numeric },
];

/// Problem found when validating a loaded schema
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    Missing { column: String },
    NotNumeric { column: String, data_type: DataType },
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::Missing { column } => write!(f, "column '{}' is missing", column),
            SchemaIssue::NotNumeric { column, data_type } => {
                write!(f, "column '{}' should be numeric but was detected as {:?}", column, data_type)
            }
        }
    }
}

/// Name and detected type of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    pub name: String,
    pub data_type: DataType,
}

/// Whether a detected type can feed a numeric chart
pub fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64
            | DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64
            | DataType::Float32 | DataType::Float64
    )
}

/// Check a schema against a set of column requirements.
///
/// Text requirements accept any type since every column can be displayed as a label.
pub fn validate_schema(schema: &Schema, requirements: &[ColumnRequirement]) -> Vec<SchemaIssue> {
    requirements
        .iter()
        .filter_map(|req| match schema.field_with_name(req.name) {
            Err(_) => Some(SchemaIssue::Missing { column: req.name.to_string() }),
            Ok(field) if req.kind == ColumnKind::Numeric && !is_numeric(field.data_type()) => {
                Some(SchemaIssue::NotNumeric {
                    column: req.name.to_string(),
                    data_type: field.data_type().clone(),
                })
            }
            Ok(_) => None,
        })
        .collect()
}

/// Detects column types from raw CSV values
pub struct SchemaDetector<'a> {
    null_config: &'a NullConfig,
}

impl<'a> SchemaDetector<'a> {
    pub fn new(null_config: &'a NullConfig) -> Self {
        Self { null_config }
    }

    /// Detect the type of one column from its raw values
    pub fn detect_column_type<'v>(&self, values: impl IntoIterator<Item = &'v str>) -> DataType {
        let mut seen = false;
        let mut is_int = true;
        let mut is_float = true;

        for value in values {
            if self.null_config.is_null(value) {
                continue;
            }
            seen = true;

            let value = value.trim();
            if is_int && value.parse::<i64>().is_err() {
                is_int = false;
            }
            if is_float && value.parse::<f64>().is_err() {
                is_float = false;
            }
            if !is_int && !is_float {
                break;
            }
        }

        if !seen {
            DataType::Utf8
        } else if is_int {
            DataType::Int64
        } else if is_float {
            DataType::Float64
        } else {
            DataType::Utf8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::Field;

    fn detect(values: &[&str]) -> DataType {
        let nulls = NullConfig::default();
        SchemaDetector::new(&nulls).detect_column_type(values.iter().copied())
    }

    #[test]
    fn test_detect_int_float_text() {
        assert_eq!(detect(&["1", "2", "30"]), DataType::Int64);
        assert_eq!(detect(&["1", "2.5", "30"]), DataType::Float64);
        assert_eq!(detect(&["Coffee", "1"]), DataType::Utf8);
    }

    #[test]
    fn test_detect_skips_nulls() {
        assert_eq!(detect(&["75", "Varies", "", "150"]), DataType::Int64);
        assert_eq!(detect(&["", "-"]), DataType::Utf8);
    }

    #[test]
    fn test_validate_schema_reports_missing_and_text() {
        let schema = Schema::new(vec![
            Field::new(BEVERAGE_CATEGORY, DataType::Utf8, true),
            Field::new(CALORIES, DataType::Utf8, true),
        ]);
        let requirements = [
            ColumnRequirement { name: BEVERAGE_CATEGORY, kind: ColumnKind::Text },
            ColumnRequirement { name: CALORIES, kind: ColumnKind::Numeric },
            ColumnRequirement { name: CAFFEINE, kind: ColumnKind::Numeric },
        ];

        let issues = validate_schema(&schema, &requirements);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0],
            SchemaIssue::NotNumeric { column: CALORIES.to_string(), data_type: DataType::Utf8 }
        );
        assert_eq!(issues[1], SchemaIssue::Missing { column: CAFFEINE.to_string() });
    }
}
