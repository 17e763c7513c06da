use polars::prelude::PolarsError;
use thiserror::Error;

/// Everything that can go wrong while preparing the table or running
/// the tests. All variants indicate malformed or insufficient input
/// data; none is transient or retryable.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("missing required column {name:?}")]
    MissingColumn { name: String },
    #[error("column {name:?} has no non-missing values")]
    EmptyColumn { name: String },
    #[error("degenerate contingency table: {reason}")]
    DegenerateContingencyTable { reason: String },
    #[error("group {group:?} has {size} observation(s), at least 2 required")]
    InsufficientGroupSize { group: String, size: usize },
    #[error("no rows with {column:?} == {value}")]
    MissingClass { column: String, value: i64 },
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Distribution(#[from] statrs::StatsError),
}
