//! Chart-ready aggregates.
//!
//! These types hold exactly the numbers a chart needs, independent of how the
//! chart is drawn:
//!
//! - [`StatisticsChartData`]: summary statistics as bars, with the mean as reference line
//! - [`AgeFrequencyData`]: number of records per `lived_years` value
//! - [`StatusCounts`]: living versus deceased records

use std::ops::RangeInclusive;

use lifespan_stats::histogram::FrequencyTable;

use crate::{
    dataset::Dataset,
    record::{DAYS_PER_YEAR, LifespanRecord},
    summary::SummaryStats,
};

/// A labelled bar in [`StatisticsChartData`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticBar {
    pub label: &'static str,
    /// Value in days
    pub value: f64,
}

/// Summary statistics rendered as a bar chart, values in days.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsChartData {
    /// Bars in display order: mean, median, max, min, weighted average, mode.
    pub bars: Vec<StatisticBar>,
    /// Height of the horizontal reference line (the mean).
    pub reference_line: f64,
}

impl StatisticsChartData {
    /// Builds the bars from `summary`.
    ///
    /// The mode is converted from years to days (`× 365.25`). When several
    /// modes are tied, the smallest is charted.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_summary(summary: &SummaryStats) -> Self {
        let mut bars = vec![
            StatisticBar {
                label: "mean",
                value: summary.mean,
            },
            StatisticBar {
                label: "median",
                value: summary.median,
            },
            StatisticBar {
                label: "max",
                value: summary.max as f64,
            },
            StatisticBar {
                label: "min",
                value: summary.min as f64,
            },
            StatisticBar {
                label: "weighted avg.",
                value: summary.weighted_average,
            },
        ];
        if let Some(&mode) = summary.mode_years.first() {
            bars.push(StatisticBar {
                label: "mode",
                value: mode as f64 * DAYS_PER_YEAR,
            });
        }
        Self {
            bars,
            reference_line: summary.mean,
        }
    }

    /// Largest bar or reference line value, `0.0` if there are no bars.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.value)
            .fold(self.reference_line.max(0.0), f64::max)
    }
}

/// Frequency of each `lived_years` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeFrequencyData {
    pub frequencies: FrequencyTable<i64>,
}

impl AgeFrequencyData {
    #[must_use]
    pub fn from_records(records: &[LifespanRecord]) -> Self {
        Self {
            frequencies: FrequencyTable::new(records.iter().map(|r| r.lived_years)),
        }
    }

    /// Integer ticks for the count axis, from zero to the highest frequency.
    #[must_use]
    pub fn count_ticks(&self) -> RangeInclusive<u64> {
        0..=self.frequencies.max_count()
    }
}

/// Number of living and deceased records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub living: usize,
    pub deceased: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn from_records(records: &[LifespanRecord]) -> Self {
        let living = records.iter().filter(|r| r.is_living()).count();
        Self {
            living,
            deceased: records.len() - living,
        }
    }
}

/// All chart aggregates of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub statistics: StatisticsChartData,
    pub age_frequency: AgeFrequencyData,
    pub status: StatusCounts,
}

impl ChartData {
    /// Builds all chart aggregates from `dataset` and its precomputed `summary`.
    #[must_use]
    pub fn new(dataset: &Dataset, summary: &SummaryStats) -> Self {
        Self {
            statistics: StatisticsChartData::from_summary(summary),
            age_frequency: AgeFrequencyData::from_records(dataset.records()),
            status: StatusCounts::from_records(dataset.records()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::record::Record;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        let record = |name: &str, birth, death| Record {
            name: name.to_owned(),
            birth_date: birth,
            death_date: death,
        };
        Dataset::new(
            vec![
                record("A", date(1900, 1, 1), Some(date(1980, 1, 1))),
                record("B", date(1920, 6, 15), None),
                record("C", date(1901, 1, 1), Some(date(1981, 1, 1))),
            ],
            date(2000, 1, 1),
        )
    }

    #[test]
    fn test_statistics_bars() {
        let dataset = dataset();
        let summary = dataset.summary().unwrap();
        let chart = StatisticsChartData::from_summary(&summary);
        let labels = chart.bars.iter().map(|b| b.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["mean", "median", "max", "min", "weighted avg.", "mode"]
        );
        assert_eq!(chart.reference_line, summary.mean);
        assert_eq!(chart.bars[5].value, 79.0 * 365.25);
        assert_eq!(chart.max_value(), 29_220.0);
    }

    #[test]
    fn test_mode_bar_uses_smallest_tied_mode() {
        let summary = SummaryStats {
            count: 4,
            mean: 1.0,
            median: 1.0,
            max: 2,
            min: 0,
            mode_years: vec![61, 70],
            weighted_average: 1.0,
            std_dev: None,
            weight: None,
        };
        let chart = StatisticsChartData::from_summary(&summary);
        assert_eq!(chart.bars.last().unwrap().value, 61.0 * 365.25);
    }

    #[test]
    fn test_age_frequency() {
        let dataset = dataset();
        let data = AgeFrequencyData::from_records(dataset.records());
        assert_eq!(data.frequencies.count_of(79), 2);
        assert_eq!(data.frequencies.count_of(80), 1);
        assert_eq!(data.count_ticks(), 0..=2);
    }

    #[test]
    fn test_status_counts() {
        let dataset = dataset();
        let status = StatusCounts::from_records(dataset.records());
        assert_eq!(
            status,
            StatusCounts {
                living: 1,
                deceased: 2
            }
        );
    }

    #[test]
    fn test_chart_data_from_dataset() {
        let dataset = dataset();
        let summary = dataset.summary().unwrap();
        let charts = ChartData::new(&dataset, &summary);
        assert_eq!(charts.statistics.reference_line, summary.mean);
        assert_eq!(charts.age_frequency.frequencies.total(), 3);
        assert_eq!(charts.status.living, 1);
    }
}
