//! Statistical utilities for the lifespan report.
//!
//! This crate provides the numeric building blocks used by `lifespan-analysis`:
//!
//! - **Descriptive statistics**: mean, median, extrema, sample variance and standard deviation
//! - **Frequency tables**: value counts over discrete values, used for histograms
//! - **Mode**: most frequent values with ties retained
//! - **Weighting**: inverse-variance weighted mean with a dataset-wide weight
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`histogram`]: Frequency tables over discrete values
//! - [`mode`]: Multi-modal mode computation
//! - [`weighting`]: Weighted averages
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use lifespan_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Counting frequencies
//!
//! ```
//! use lifespan_stats::histogram::FrequencyTable;
//!
//! let table = FrequencyTable::new([90, 61, 90]);
//! assert_eq!(table.count_of(90), 2);
//! assert_eq!(table.max_count(), 2);
//! ```
//!
//! ## Finding modes
//!
//! ```
//! use lifespan_stats::mode;
//!
//! assert_eq!(mode::modes([70, 70, 61, 61]), vec![61, 70]);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod mode;
pub mod weighting;
