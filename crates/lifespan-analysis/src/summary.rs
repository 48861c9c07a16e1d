//! Summary statistics of lifespans.
//!
//! All statistics are computed over `lived_days` except the mode, which is
//! computed over `lived_years` so that it groups meaningfully.
//!
//! # Weighted average
//!
//! The weighted average assigns every record the weight `1 / s²`, where `s` is the
//! sample standard deviation of `lived_days` across the whole dataset. Since all
//! weights are equal they cancel, and the weighted average is the arithmetic mean.
//! [`SummaryStats::mean`] and [`SummaryStats::weighted_average`] are computed from
//! the same values in the same order and therefore agree bit-for-bit.

use lifespan_stats::{descriptive::DescriptiveStats, mode, weighting::InverseVarianceMean};
use serde::Serialize;

use crate::{error::DomainError, record::LifespanRecord};

/// Summary statistics over a set of [`LifespanRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of records summarized
    pub count: usize,
    /// Mean of `lived_days`
    pub mean: f64,
    /// Median of `lived_days`
    pub median: f64,
    /// Longest `lived_days`
    pub max: i64,
    /// Shortest `lived_days`
    pub min: i64,
    /// Most frequent `lived_years` values, ascending, ties retained
    pub mode_years: Vec<i64>,
    /// Inverse-variance weighted mean of `lived_days`
    pub weighted_average: f64,
    /// Sample standard deviation of `lived_days`
    pub std_dev: Option<f64>,
    /// Weight shared by every record in the weighted average
    pub weight: Option<f64>,
}

/// Computes summary statistics over `records`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDataset`] if `records` is empty.
pub fn compute_summary(records: &[LifespanRecord]) -> Result<SummaryStats, DomainError> {
    let days = sorted_lived_days(records);
    let stats = DescriptiveStats::from_sorted(&days).ok_or(DomainError::EmptyDataset)?;
    let weighted = InverseVarianceMean::new(&days).ok_or(DomainError::EmptyDataset)?;

    let max = records.iter().map(|r| r.lived_days).max();
    let min = records.iter().map(|r| r.lived_days).min();
    let (Some(max), Some(min)) = (max, min) else {
        return Err(DomainError::EmptyDataset);
    };

    Ok(SummaryStats {
        count: stats.count,
        mean: stats.mean,
        median: stats.median,
        max,
        min,
        mode_years: mode::modes(records.iter().map(|r| r.lived_years)),
        weighted_average: weighted.value,
        std_dev: stats.std_dev,
        weight: weighted.weight,
    })
}

/// Computes the inverse-variance weighted average of `lived_days`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDataset`] if `records` is empty.
pub fn weighted_average(records: &[LifespanRecord]) -> Result<f64, DomainError> {
    let days = sorted_lived_days(records);
    InverseVarianceMean::new(&days)
        .map(|weighted| weighted.value)
        .ok_or(DomainError::EmptyDataset)
}

#[expect(clippy::cast_precision_loss)]
fn sorted_lived_days(records: &[LifespanRecord]) -> Vec<f64> {
    let mut days = records.iter().map(|r| r.lived_days as f64).collect::<Vec<_>>();
    days.sort_by(f64::total_cmp);
    days
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;
    use crate::record::{Record, compute_derived_fields};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    fn with_days(days: i64) -> LifespanRecord {
        let birth = reference() - chrono::Days::new(days.unsigned_abs());
        compute_derived_fields(
            Record {
                name: format!("{days}"),
                birth_date: birth,
                death_date: None,
            },
            reference(),
        )
    }

    /// A record whose `lived_years` is `years`.
    fn with_years(years: i64) -> LifespanRecord {
        // 365.25 * years + 100 stays within the same truncated year
        with_days(years * 365 + years / 4 + 100)
    }

    #[test]
    fn test_empty_dataset_is_domain_error() {
        assert_eq!(compute_summary(&[]), Err(DomainError::EmptyDataset));
        assert_eq!(weighted_average(&[]), Err(DomainError::EmptyDataset));
        assert_eq!(DomainError::EmptyDataset.to_string(), "empty dataset");
    }

    #[test]
    fn test_two_record_summary() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let records = vec![
            compute_derived_fields(
                Record {
                    name: "A".to_owned(),
                    birth_date: d(1900, 1, 1),
                    death_date: Some(d(1980, 1, 1)),
                },
                reference(),
            ),
            compute_derived_fields(
                Record {
                    name: "B".to_owned(),
                    birth_date: d(1920, 6, 15),
                    death_date: None,
                },
                reference(),
            ),
        ];
        let summary = compute_summary(&records).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.max, 29_219);
        assert_eq!(summary.min, 29_054);
        assert_eq!(summary.mean, 29_136.5);
        assert_eq!(summary.median, 29_136.5);
        assert_eq!(summary.mode_years, vec![79]);
        assert_eq!(summary.weighted_average, summary.mean);
    }

    #[test]
    fn test_single_mode() {
        let records = [90, 90, 61].map(with_years);
        let summary = compute_summary(&records).unwrap();
        assert_eq!(summary.mode_years, vec![90]);
    }

    #[test]
    fn test_tied_modes_are_ascending() {
        let records = [70, 70, 61, 61].map(with_years);
        let summary = compute_summary(&records).unwrap();
        assert_eq!(summary.mode_years, vec![61, 70]);
    }

    #[test]
    fn test_median_of_odd_count() {
        let records = [10, 30, 20].map(with_days);
        let summary = compute_summary(&records).unwrap();
        assert_eq!(summary.median, 20.0);
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.max, 30);
        assert_eq!(summary.min, 10);
    }

    #[test]
    fn test_weight_is_inverse_sample_variance() {
        let records = [10, 30, 20].map(with_days);
        let summary = compute_summary(&records).unwrap();
        // sample variance = (100 + 100 + 0) / 2
        assert_eq!(summary.std_dev, Some(10.0));
        assert_eq!(summary.weight, Some(0.01));
    }

    #[test]
    fn test_single_record_has_no_weight_but_an_average() {
        let records = [with_days(1_000)];
        let summary = compute_summary(&records).unwrap();
        assert_eq!(summary.std_dev, None);
        assert_eq!(summary.weight, None);
        assert_eq!(summary.weighted_average, 1_000.0);
    }

    proptest! {
        #[test]
        fn mean_equals_weighted_average_bitwise(
            days in prop::collection::vec(0_i64..40_000, 1..60)
        ) {
            let records = days.iter().copied().map(with_days).collect::<Vec<_>>();
            let summary = compute_summary(&records).unwrap();
            let weighted = weighted_average(&records).unwrap();
            prop_assert_eq!(summary.mean.to_bits(), summary.weighted_average.to_bits());
            prop_assert_eq!(summary.mean.to_bits(), weighted.to_bits());
        }
    }
}
