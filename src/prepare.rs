//! Dataset preparation: impute `Age` with the column median, impute
//! `Embarked` with the column mode, drop `Cabin`. Row count and row
//! order are preserved exactly; no other column is touched.

use std::collections::HashMap;

use polars::prelude::*;

use crate::error::StatsError;
use crate::records::{COL_AGE, COL_CABIN, COL_EMBARKED, REQUIRED_COLUMNS};

/// Most frequent non-null value; ties resolved in favour of the
/// lexicographically smallest value so repeated runs agree.
fn string_mode(column: &Utf8Chunked) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in column.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, _)| value.to_string())
}

/// Cleans a raw passenger table for the hypothesis tests.
///
/// The input is borrowed immutably; the returned table has no null
/// `Age` or `Embarked` entries and no `Cabin` column.
pub fn prepare(raw: &DataFrame) -> Result<DataFrame, StatsError> {
    let names = raw.get_column_names();
    for required in REQUIRED_COLUMNS {
        if !names.contains(&required) {
            return Err(StatsError::MissingColumn {
                name: required.to_string(),
            });
        }
    }

    let mut cleaned = raw.clone();
    cleaned.with_column(cleaned.column(COL_AGE)?.cast(&DataType::Float64)?)?;

    let age_filled = {
        let age = cleaned.column(COL_AGE)?;
        if age.null_count() == age.len() {
            return Err(StatsError::EmptyColumn {
                name: COL_AGE.to_string(),
            });
        }
        let median = age.median().ok_or_else(|| StatsError::EmptyColumn {
            name: COL_AGE.to_string(),
        })?;
        let filled: Float64Chunked = age
            .f64()?
            .into_iter()
            .map(|value| Some(value.unwrap_or(median)))
            .collect();
        let mut series = filled.into_series();
        series.rename(COL_AGE);
        series
    };
    cleaned.with_column(age_filled)?;

    let embarked_filled = {
        let embarked = cleaned.column(COL_EMBARKED)?.utf8()?;
        let mode = string_mode(embarked).ok_or_else(|| StatsError::EmptyColumn {
            name: COL_EMBARKED.to_string(),
        })?;
        let filled: Utf8Chunked = embarked
            .into_iter()
            .map(|value| Some(value.unwrap_or(mode.as_str())))
            .collect();
        let mut series = filled.into_series();
        series.rename(COL_EMBARKED);
        series
    };
    cleaned.with_column(embarked_filled)?;

    Ok(cleaned.drop(COL_CABIN)?)
}
