use std::path::PathBuf;

use arrow::datatypes::DataType;
use nutri_data::schema::{CAFFEINE, CALORIES, CHART_COLUMNS, TOTAL_FAT};
use nutri_data::{DashboardConfig, NullConfig, NutritionTable};

fn bundled_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(DashboardConfig::default().data_path)
}

#[test]
fn test_bundled_dataset_loads_and_validates() {
    let table = NutritionTable::load(&bundled_csv(), &NullConfig::default()).unwrap();

    assert_eq!(table.source_name(), "cleaned_starbucks.csv");
    assert_eq!(table.num_rows(), 43);
    assert!(table.validate(CHART_COLUMNS).is_empty());

    let dtypes = table.dtypes();
    let dtype_of = |name: &str| {
        dtypes.iter().find(|c| c.name == name).map(|c| c.data_type.clone())
    };
    assert_eq!(dtype_of(CALORIES), Some(DataType::Int64));
    assert_eq!(dtype_of(TOTAL_FAT), Some(DataType::Float64));
    assert_eq!(dtype_of(CAFFEINE), Some(DataType::Int64));
}

#[test]
fn test_loading_twice_gives_identical_summaries() {
    let nulls = NullConfig::default();
    let first = NutritionTable::load(&bundled_csv(), &nulls).unwrap();
    let second = NutritionTable::load(&bundled_csv(), &nulls).unwrap();

    assert_eq!(first.num_rows(), second.num_rows());
    assert_eq!(first.column_names(), second.column_names());
    assert_eq!(first.dtypes(), second.dtypes());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = NutritionTable::load(&PathBuf::from("no/such/file.csv"), &NullConfig::default()).unwrap_err();
    assert!(matches!(err, nutri_data::DataError::Io(_)));
}
