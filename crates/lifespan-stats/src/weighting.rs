//! Weighted averages.
//!
//! [`InverseVarianceMean`] weights every observation by `1 / s²`, where `s` is the
//! sample standard deviation of the whole dataset. The weight is therefore the same
//! for every observation and cancels out of `Σ(w·x) / Σw`: the result is the plain
//! arithmetic mean, computed by [`descriptive::mean`] so that it matches
//! [`DescriptiveStats::mean`](crate::descriptive::DescriptiveStats::mean) bit-for-bit
//! when given the same slice.

use crate::descriptive;

/// Weighted mean with a single inverse-variance weight shared by all observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseVarianceMean {
    /// The shared weight `1 / s²`.
    ///
    /// `None` when the sample standard deviation is undefined (fewer than two
    /// observations) or zero.
    pub weight: Option<f64>,
    /// The weighted mean.
    pub value: f64,
}

impl InverseVarianceMean {
    /// Computes the weighted mean of `values`.
    ///
    /// # Returns
    ///
    /// * `Some(InverseVarianceMean)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use lifespan_stats::weighting::InverseVarianceMean;
    /// let values = [1.0, 2.0, 3.0];
    /// let weighted = InverseVarianceMean::new(&values).unwrap();
    /// assert_eq!(weighted.value, 2.0);
    /// assert_eq!(weighted.weight, Some(1.0));
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let value = descriptive::mean(values)?;
        let weight = descriptive::sample_variance(values)
            .map(|variance| variance.recip())
            .filter(|w| w.is_finite());
        Some(Self { weight, value })
    }
}
