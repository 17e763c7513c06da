//! Statistical tests over the Titanic passenger table.
//!
//! Two entry points, consumed leaf-first:
//!
//! - [`prepare`] cleans a raw table: median-imputes `Age`,
//!   mode-imputes `Embarked`, drops `Cabin`.
//! - [`run_tests`] runs a chi-square test of independence
//!   (`Survived` x `Sex`), a pooled two-sample t-test (`Age` by
//!   `Survived`) and a one-way ANOVA (`Fare` by `Pclass`) against the
//!   cleaned table, returning one [`TestResult`] per test in that
//!   fixed order.
//!
//! Both are pure: tables are borrowed immutably and results are
//! recomputed on every call.

pub mod error;
pub mod hypothesis;
pub mod prepare;
pub mod records;
pub mod result;
pub mod stats;

pub use error::StatsError;
pub use hypothesis::run_tests;
pub use prepare::prepare;
pub use result::{Conclusion, TestName, TestResult, SIGNIFICANCE_LEVEL};
