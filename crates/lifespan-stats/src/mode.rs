//! Mode of discrete datasets.
//!
//! Unlike a single-valued mode, every value tied for the highest frequency is
//! kept. The result is sorted ascending so that reports are stable across runs.

use crate::histogram::FrequencyTable;

/// Returns all values tied for the highest frequency, in ascending order.
///
/// An empty input yields an empty vector.
///
/// # Examples
///
/// ```
/// use lifespan_stats::mode::modes;
///
/// assert_eq!(modes([90, 90, 61]), vec![90]);
/// assert_eq!(modes([70, 70, 61, 61]), vec![61, 70]);
/// assert!(modes(Vec::<i64>::new()).is_empty());
/// ```
#[must_use]
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Ord + Copy,
    I: IntoIterator<Item = T>,
{
    FrequencyTable::new(values).most_frequent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_distinct_values_are_modes() {
        assert_eq!(modes([3, 1, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn test_tie_order_is_ascending_regardless_of_input_order() {
        assert_eq!(modes([70, 61, 70, 61]), vec![61, 70]);
        assert_eq!(modes([61, 70, 61, 70]), vec![61, 70]);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(modes([-1, -1, 4]), vec![-1]);
    }
}
