//! Closed-form test statistics over plain slices, with p-values from
//! the matching `statrs` reference distributions. The `DataFrame`
//! extraction lives in [`crate::hypothesis`]; everything here is pure
//! arithmetic.

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::StatsError;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Pearson chi-square test of independence over an observed
/// contingency matrix (no continuity correction). Returns
/// `(statistic, p_value, degrees_of_freedom)`.
pub fn pearson_chi_square(observed: &[Vec<u64>]) -> Result<(f64, f64, f64), StatsError> {
    let n_rows = observed.len();
    let n_cols = observed.first().map_or(0, Vec::len);
    if n_rows < 2 {
        return Err(StatsError::DegenerateContingencyTable {
            reason: "fewer than 2 row categories".to_string(),
        });
    }
    if n_cols < 2 {
        return Err(StatsError::DegenerateContingencyTable {
            reason: "fewer than 2 column categories".to_string(),
        });
    }

    let mut row_totals = vec![0u64; n_rows];
    let mut col_totals = vec![0u64; n_cols];
    for (i, row) in observed.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            row_totals[i] += count;
            col_totals[j] += count;
        }
    }
    if let Some(i) = row_totals.iter().position(|&t| t == 0) {
        return Err(StatsError::DegenerateContingencyTable {
            reason: format!("row {i} has zero total"),
        });
    }
    if let Some(j) = col_totals.iter().position(|&t| t == 0) {
        return Err(StatsError::DegenerateContingencyTable {
            reason: format!("column {j} has zero total"),
        });
    }

    let grand_total: u64 = row_totals.iter().sum();
    let mut statistic = 0.0;
    for (i, row) in observed.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            let expected = row_totals[i] as f64 * col_totals[j] as f64 / grand_total as f64;
            statistic += (count as f64 - expected).powi(2) / expected;
        }
    }

    let dof = ((n_rows - 1) * (n_cols - 1)) as f64;
    let distribution = ChiSquared::new(dof)?;
    let p_value = 1.0 - distribution.cdf(statistic);
    Ok((statistic, p_value, dof))
}

/// Independent two-sample t-test assuming equal variances (pooled
/// sample variance, `n1 + n2 - 2` degrees of freedom, two-sided
/// p-value). Returns `(statistic, p_value)`.
pub fn pooled_t_test(group_a: &[f64], group_b: &[f64]) -> Result<(f64, f64), StatsError> {
    for (label, group) in [("first", group_a), ("second", group_b)] {
        if group.len() < 2 {
            return Err(StatsError::InsufficientGroupSize {
                group: label.to_string(),
                size: group.len(),
            });
        }
    }

    let n1 = group_a.len() as f64;
    let n2 = group_b.len() as f64;
    let mean_a = mean(group_a);
    let mean_b = mean(group_b);
    let pooled_variance = ((n1 - 1.0) * sample_variance(group_a, mean_a)
        + (n2 - 1.0) * sample_variance(group_b, mean_b))
        / (n1 + n2 - 2.0);
    let standard_error = (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt();
    let statistic = (mean_a - mean_b) / standard_error;

    let dof = n1 + n2 - 2.0;
    let distribution = StudentsT::new(0.0, 1.0, dof)?;
    let p_value = 2.0 * (1.0 - distribution.cdf(statistic.abs()));
    Ok((statistic, p_value))
}

/// One-way ANOVA F-test across `k >= 2` groups via the between/within
/// sum-of-squares decomposition. Returns `(statistic, p_value)`.
pub fn one_way_anova(groups: &[&[f64]]) -> Result<(f64, f64), StatsError> {
    for (index, group) in groups.iter().enumerate() {
        if group.len() < 2 {
            return Err(StatsError::InsufficientGroupSize {
                group: format!("group {index}"),
                size: group.len(),
            });
        }
    }

    let k = groups.len() as f64;
    let n: usize = groups.iter().map(|g| g.len()).sum();
    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n as f64;

    let mut between_ss = 0.0;
    let mut within_ss = 0.0;
    for group in groups {
        let group_mean = mean(group);
        between_ss += group.len() as f64 * (group_mean - grand_mean).powi(2);
        within_ss += group.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    let df_between = k - 1.0;
    let df_within = n as f64 - k;
    let statistic = (between_ss / df_between) / (within_ss / df_within);

    let distribution = FisherSnedecor::new(df_between, df_within)?;
    let p_value = 1.0 - distribution.cdf(statistic);
    Ok((statistic, p_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn chi_square_perfect_association() {
        // survived=[1,1,0,0] x sex=[f,f,m,m]: all expected counts 1.0
        let observed = vec![vec![0, 2], vec![2, 0]];
        let (statistic, p_value, dof) = pearson_chi_square(&observed).unwrap();
        assert!((statistic - 4.0).abs() < EPS);
        assert!((dof - 1.0).abs() < EPS);
        // chi2 upper tail at 4.0 with 1 dof
        assert!((p_value - 0.045500263896).abs() < 1e-7);
    }

    #[test]
    fn chi_square_proportional_table_is_zero() {
        // observed == expected in every cell
        let observed = vec![vec![10, 20], vec![30, 60]];
        let (statistic, p_value, _) = pearson_chi_square(&observed).unwrap();
        assert!(statistic.abs() < EPS);
        assert!((p_value - 1.0).abs() < EPS);
    }

    #[test]
    fn chi_square_rejects_single_category() {
        let err = pearson_chi_square(&[vec![5, 5]]).unwrap_err();
        assert!(matches!(err, StatsError::DegenerateContingencyTable { .. }));
    }

    #[test]
    fn chi_square_rejects_zero_marginal() {
        let err = pearson_chi_square(&[vec![0, 0], vec![3, 4]]).unwrap_err();
        assert!(matches!(err, StatsError::DegenerateContingencyTable { .. }));
    }

    #[test]
    fn t_test_equal_means_is_zero() {
        let (statistic, p_value) = pooled_t_test(&[10.0, 20.0], &[5.0, 25.0]).unwrap();
        assert!(statistic.abs() < EPS);
        assert!((p_value - 1.0).abs() < EPS);
    }

    #[test]
    fn t_test_separated_groups() {
        // means 15 vs 35, pooled variance 50: t = -20 / sqrt(50) = -sqrt(8)
        let (statistic, p_value) = pooled_t_test(&[10.0, 20.0], &[30.0, 40.0]).unwrap();
        assert!((statistic + 8.0f64.sqrt()).abs() < EPS);
        assert!(statistic < 0.0);
        assert!(p_value > 0.0 && p_value < 1.0);
    }

    #[test]
    fn t_test_rejects_singleton_group() {
        let err = pooled_t_test(&[1.0], &[2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InsufficientGroupSize { size: 1, .. }
        ));
    }

    #[test]
    fn anova_identical_groups_is_zero() {
        let groups: [&[f64]; 3] = [&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]];
        let (statistic, p_value) = one_way_anova(&groups).unwrap();
        assert!(statistic.abs() < EPS);
        assert!((p_value - 1.0).abs() < EPS);
    }

    #[test]
    fn anova_separated_groups_is_significant() {
        let groups: [&[f64]; 3] = [&[1.0, 2.0], &[10.0, 11.0], &[20.0, 21.0]];
        let (statistic, p_value) = one_way_anova(&groups).unwrap();
        assert!(statistic > 1.0);
        assert!(p_value < 0.05);
    }

    #[test]
    fn anova_rejects_singleton_group() {
        let groups: [&[f64]; 3] = [&[1.0, 2.0], &[3.0], &[4.0, 5.0]];
        let err = one_way_anova(&groups).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InsufficientGroupSize { size: 1, .. }
        ));
    }
}
