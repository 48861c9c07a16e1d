//! Lifespan analysis over a dataset of birth and death dates
//!
//! This crate loads a small tabular dataset of people, computes how long each
//! person lived, and produces the rankings, summary statistics and chart
//! aggregates used by the `lifespan` report.
//!
//! # Overview
//!
//! The analysis is a single pass: load → derive → report.
//!
//! 1. **Load Records** ([`dataset::read_records`]): Parse CSV rows into [`record::Record`]s,
//!    dropping the trailing reference line of the published dataset
//! 2. **Derive Fields** ([`dataset::Dataset`]): Compute lived days, years and months for every
//!    record against an explicit reference date
//! 3. **Rank** ([`ranking::get_ranked`]): Top-n records by any derived field, stable on ties
//! 4. **Summarize** ([`summary::compute_summary`]): Mean, median, extrema, mode and the
//!    inverse-variance weighted average
//! 5. **Chart Data** ([`chart::ChartData`]): Aggregates for the statistics, age frequency and
//!    living/deceased charts
//!
//! The reference date is always a parameter, so every result is reproducible.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lifespan_analysis::{chart::ChartData, dataset::{self, Dataset}, ranking::RankKey};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let csv = r#"PRESIDENT,BIRTH DATE,DEATH DATE
//! A,"Jan 1, 1900","Jan 1, 1980"
//! B,"Jun 15, 1920",
//! "#;
//! let reference = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//! let dataset = Dataset::new(dataset::read_records(csv.as_bytes())?, reference);
//!
//! let longest = dataset.ranked(RankKey::LivedDays, false, 10);
//! assert_eq!(longest[0].name(), "A");
//! assert_eq!(longest[0].lived_days, 29_219);
//!
//! let summary = dataset.summary()?;
//! assert_eq!(summary.mean, 29_136.5);
//! assert_eq!(summary.mean.to_bits(), summary.weighted_average.to_bits());
//!
//! let charts = ChartData::new(&dataset, &summary);
//! assert_eq!(charts.status.living, 1);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod dataset;
pub mod error;
pub mod ranking;
pub mod record;
pub mod summary;
