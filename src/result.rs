use std::fmt;

use serde::Serialize;

/// Fixed threshold below which a p-value counts as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestName {
    #[serde(rename = "Chi-Square")]
    ChiSquare,
    #[serde(rename = "T-Test")]
    TTest,
    #[serde(rename = "ANOVA")]
    Anova,
}

impl fmt::Display for TestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestName::ChiSquare => "Chi-Square",
            TestName::TTest => "T-Test",
            TestName::Anova => "ANOVA",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Conclusion {
    #[serde(rename = "Significant")]
    Significant,
    #[serde(rename = "Not Significant")]
    NotSignificant,
}

impl Conclusion {
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < SIGNIFICANCE_LEVEL {
            Conclusion::Significant
        } else {
            Conclusion::NotSignificant
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Conclusion::Significant => "Significant",
            Conclusion::NotSignificant => "Not Significant",
        };
        f.write_str(text)
    }
}

/// One row of the results table. Recomputed on every run, never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub test_name: TestName,
    pub research_question: String,
    pub variable_1: String,
    pub variable_2: Option<String>,
    pub statistic: f64,
    pub p_value: f64,
    pub conclusion: Conclusion,
}

impl TestResult {
    pub(crate) fn new(
        test_name: TestName,
        research_question: &str,
        variable_1: &str,
        variable_2: Option<&str>,
        statistic: f64,
        p_value: f64,
    ) -> Self {
        TestResult {
            test_name,
            research_question: research_question.to_string(),
            variable_1: variable_1.to_string(),
            variable_2: variable_2.map(str::to_string),
            statistic,
            p_value,
            conclusion: Conclusion::from_p_value(p_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conclusion_threshold_is_strict() {
        assert_eq!(Conclusion::from_p_value(0.049), Conclusion::Significant);
        assert_eq!(Conclusion::from_p_value(0.05), Conclusion::NotSignificant);
        assert_eq!(Conclusion::from_p_value(0.9), Conclusion::NotSignificant);
        assert_eq!(Conclusion::from_p_value(0.0), Conclusion::Significant);
    }

    #[test]
    fn display_labels_match_results_table() {
        assert_eq!(TestName::ChiSquare.to_string(), "Chi-Square");
        assert_eq!(TestName::TTest.to_string(), "T-Test");
        assert_eq!(TestName::Anova.to_string(), "ANOVA");
        assert_eq!(Conclusion::NotSignificant.to_string(), "Not Significant");
    }
}
