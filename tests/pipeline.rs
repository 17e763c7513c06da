use polars::df;
use polars::prelude::*;

use titanic_stats::{prepare, run_tests, Conclusion, TestName, SIGNIFICANCE_LEVEL};

fn raw_table() -> DataFrame {
    df!(
        "Survived" => [1i64, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0],
        "Pclass"   => [1i64, 1, 2, 2, 3, 3, 1, 1, 2, 2, 3, 3],
        "Sex"      => ["female", "female", "female", "male", "male", "male",
                       "female", "male", "male", "female", "female", "male"],
        "Age"      => [Some(22.0), Some(38.0), None, Some(35.0), Some(28.0), Some(54.0),
                       Some(4.0), None, Some(27.0), Some(14.0), Some(58.0), Some(20.0)],
        "Fare"     => [71.28, 83.16, 21.0, 26.0, 8.05, 7.92,
                       53.1, 51.86, 13.0, 30.07, 7.75, 8.66],
        "Embarked" => [Some("S"), Some("C"), Some("S"), None, Some("S"), Some("Q"),
                       Some("S"), Some("S"), Some("S"), Some("C"), None, Some("Q")],
        "Cabin"    => [Some("C85"), Some("C123"), None, None, None, Some("E46"),
                       None, Some("B42"), None, None, None, None],
    )
    .unwrap()
}

#[test]
fn prepare_leaves_no_gaps() {
    let cleaned = prepare(&raw_table()).unwrap();
    assert_eq!(cleaned.height(), 12);
    assert_eq!(cleaned.column("Age").unwrap().null_count(), 0);
    assert_eq!(cleaned.column("Embarked").unwrap().null_count(), 0);
    assert!(cleaned.column("Cabin").is_err());
}

#[test]
fn results_come_back_in_fixed_order() {
    let cleaned = prepare(&raw_table()).unwrap();
    let results = run_tests(&cleaned).unwrap();

    assert_eq!(results[0].test_name, TestName::ChiSquare);
    assert_eq!(results[1].test_name, TestName::TTest);
    assert_eq!(results[2].test_name, TestName::Anova);

    for result in &results {
        assert!(result.statistic.is_finite());
        assert!((0.0..=1.0).contains(&result.p_value));
        let expected = if result.p_value < SIGNIFICANCE_LEVEL {
            Conclusion::Significant
        } else {
            Conclusion::NotSignificant
        };
        assert_eq!(result.conclusion, expected);
    }
}

#[test]
fn reruns_are_identical() {
    let cleaned = prepare(&raw_table()).unwrap();
    let first = run_tests(&cleaned).unwrap();
    let second = run_tests(&cleaned).unwrap();
    assert_eq!(first, second);
}
