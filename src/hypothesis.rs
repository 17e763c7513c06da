//! Runs the three hypothesis tests against a cleaned passenger table
//! and assembles the results table. Group extraction is O(rows); the
//! statistics themselves live in [`crate::stats`].

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::*;

use crate::error::StatsError;
use crate::records::{COL_AGE, COL_FARE, COL_PCLASS, COL_SEX, COL_SURVIVED};
use crate::result::{TestName, TestResult};
use crate::stats;

/// The three ticket classes the ANOVA groups over.
pub const PASSENGER_CLASSES: [i64; 3] = [1, 2, 3];

fn check_group_size(group: &str, size: usize) -> Result<(), StatsError> {
    if size < 2 {
        return Err(StatsError::InsufficientGroupSize {
            group: group.to_string(),
            size,
        });
    }
    Ok(())
}

fn integer_column(df: &DataFrame, name: &str) -> Result<Series, StatsError> {
    Ok(df.column(name)?.cast(&DataType::Int64)?)
}

/// Chi-square test of independence between `Survived` and `Sex`.
///
/// Categories are the distinct observed values of each column, in
/// sorted order, so the contingency table is deterministic.
fn survival_by_sex(df: &DataFrame) -> Result<TestResult, StatsError> {
    let survived = integer_column(df, COL_SURVIVED)?;
    let survived = survived.i64()?;
    let sex = df.column(COL_SEX)?.utf8()?;

    let mut counts: BTreeMap<(i64, &str), u64> = BTreeMap::new();
    let mut survived_values: BTreeSet<i64> = BTreeSet::new();
    let mut sex_values: BTreeSet<&str> = BTreeSet::new();
    for (status, sex_value) in survived.into_iter().zip(sex.into_iter()) {
        if let (Some(status), Some(sex_value)) = (status, sex_value) {
            survived_values.insert(status);
            sex_values.insert(sex_value);
            *counts.entry((status, sex_value)).or_insert(0) += 1;
        }
    }
    if survived_values.len() < 2 {
        return Err(StatsError::DegenerateContingencyTable {
            reason: format!("{COL_SURVIVED:?} has fewer than 2 distinct values"),
        });
    }
    if sex_values.len() < 2 {
        return Err(StatsError::DegenerateContingencyTable {
            reason: format!("{COL_SEX:?} has fewer than 2 distinct values"),
        });
    }

    let observed: Vec<Vec<u64>> = survived_values
        .iter()
        .map(|status| {
            sex_values
                .iter()
                .map(|sex_value| counts.get(&(*status, *sex_value)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    let (statistic, p_value, _dof) = stats::pearson_chi_square(&observed)?;
    Ok(TestResult::new(
        TestName::ChiSquare,
        "Is survival associated with sex?",
        COL_SURVIVED,
        Some(COL_SEX),
        statistic,
        p_value,
    ))
}

/// Pooled two-sample t-test on `Age`, survivors vs non-survivors.
fn age_by_survival(df: &DataFrame) -> Result<TestResult, StatsError> {
    let survived = integer_column(df, COL_SURVIVED)?;
    let survived = survived.i64()?;
    let age = df.column(COL_AGE)?.f64()?;

    let mut survivor_ages = Vec::new();
    let mut other_ages = Vec::new();
    for (status, age_value) in survived.into_iter().zip(age.into_iter()) {
        match (status, age_value) {
            (Some(1), Some(value)) => survivor_ages.push(value),
            (Some(0), Some(value)) => other_ages.push(value),
            _ => {}
        }
    }
    check_group_size("Survived == 1", survivor_ages.len())?;
    check_group_size("Survived == 0", other_ages.len())?;

    let (statistic, p_value) = stats::pooled_t_test(&survivor_ages, &other_ages)?;
    Ok(TestResult::new(
        TestName::TTest,
        "Is mean age different between survivors and non-survivors?",
        COL_AGE,
        Some(COL_SURVIVED),
        statistic,
        p_value,
    ))
}

/// One-way ANOVA on `Fare` across the three ticket classes.
fn fare_by_class(df: &DataFrame) -> Result<TestResult, StatsError> {
    let pclass = integer_column(df, COL_PCLASS)?;
    let pclass = pclass.i64()?;
    let fare = df.column(COL_FARE)?.f64()?;

    let mut groups: [Vec<f64>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (class, fare_value) in pclass.into_iter().zip(fare.into_iter()) {
        if let (Some(class), Some(value)) = (class, fare_value) {
            if let Some(slot) = PASSENGER_CLASSES.iter().position(|k| *k == class) {
                groups[slot].push(value);
            }
        }
    }
    for (class, fares) in PASSENGER_CLASSES.iter().zip(&groups) {
        if fares.is_empty() {
            return Err(StatsError::MissingClass {
                column: COL_PCLASS.to_string(),
                value: *class,
            });
        }
        check_group_size(&format!("Pclass == {class}"), fares.len())?;
    }

    let slices: Vec<&[f64]> = groups.iter().map(Vec::as_slice).collect();
    let (statistic, p_value) = stats::one_way_anova(&slices)?;
    Ok(TestResult::new(
        TestName::Anova,
        "Does mean fare differ across passenger classes?",
        COL_FARE,
        Some(COL_PCLASS),
        statistic,
        p_value,
    ))
}

/// Runs all three tests against a cleaned table. Always exactly three
/// records, in fixed order: chi-square, t-test, ANOVA. The input is
/// never mutated and the output is deterministic.
pub fn run_tests(df: &DataFrame) -> Result<[TestResult; 3], StatsError> {
    Ok([
        survival_by_sex(df)?,
        age_by_survival(df)?,
        fare_by_class(df)?,
    ])
}
