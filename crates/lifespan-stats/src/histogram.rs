use std::collections::BTreeMap;

/// Frequency distribution of a dataset over discrete values.
///
/// Each distinct value gets its own bin, ordered by ascending value. This is the
/// "value counts" view of a dataset and backs both histograms and the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T> {
    /// One bin per distinct value, sorted by value in ascending order.
    pub bins: Vec<FrequencyBin<T>>,
}

/// A single bin in a [`FrequencyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyBin<T> {
    /// The value counted by this bin.
    pub value: T,
    /// The number of occurrences of `value`.
    pub count: u64,
}

impl<T> FrequencyTable<T>
where
    T: Ord + Copy,
{
    /// Counts occurrences of each distinct value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lifespan_stats::histogram::{FrequencyBin, FrequencyTable};
    /// let table = FrequencyTable::new([67, 90, 67]);
    /// assert_eq!(
    ///     table.bins,
    ///     vec![
    ///         FrequencyBin { value: 67, count: 2 },
    ///         FrequencyBin { value: 90, count: 1 },
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counts = BTreeMap::<T, u64>::new();
        for value in values {
            *counts.entry(value).or_default() += 1;
        }
        let bins = counts
            .into_iter()
            .map(|(value, count)| FrequencyBin { value, count })
            .collect();
        Self { bins }
    }

    /// Returns `true` if no values were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of counted values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Highest count of any bin, `0` for an empty table.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Number of occurrences of `value`.
    #[must_use]
    pub fn count_of(&self, value: T) -> u64 {
        self.bins
            .binary_search_by(|bin| bin.value.cmp(&value))
            .map_or(0, |idx| self.bins[idx].count)
    }

    /// Smallest and largest counted values.
    #[must_use]
    pub fn value_range(&self) -> Option<(T, T)> {
        Some((self.bins.first()?.value, self.bins.last()?.value))
    }

    /// Values sharing the highest count, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lifespan_stats::histogram::FrequencyTable;
    /// let table = FrequencyTable::new([3, 1, 3, 1, 2]);
    /// assert_eq!(table.most_frequent(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn most_frequent(&self) -> Vec<T> {
        let max_count = self.max_count();
        self.bins
            .iter()
            .filter(|bin| bin.count == max_count)
            .map(|bin| bin.value)
            .collect()
    }
}
