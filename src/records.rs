use polars::prelude::{DataType, Field, Schema};

pub const COL_SURVIVED: &str = "Survived";
pub const COL_PCLASS: &str = "Pclass";
pub const COL_SEX: &str = "Sex";
pub const COL_AGE: &str = "Age";
pub const COL_FARE: &str = "Fare";
pub const COL_EMBARKED: &str = "Embarked";
pub const COL_CABIN: &str = "Cabin";

/// Columns the statistical core consumes. Any other column in the CSV
/// passes through untouched.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_SURVIVED,
    COL_PCLASS,
    COL_SEX,
    COL_AGE,
    COL_FARE,
    COL_EMBARKED,
    COL_CABIN,
];

pub struct PassengerRecord {}

impl PassengerRecord {
    /// Dtype overrides for the CSV reader, covering the columns the
    /// tests consume. Remaining columns keep their inferred dtypes.
    pub fn raw_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new(COL_SURVIVED, DataType::Int64),
            Field::new(COL_PCLASS, DataType::Int64),
            Field::new(COL_SEX, DataType::Utf8),
            Field::new(COL_AGE, DataType::Float64),
            Field::new(COL_FARE, DataType::Float64),
            Field::new(COL_EMBARKED, DataType::Utf8),
            Field::new(COL_CABIN, DataType::Utf8),
        ])
    }
}
