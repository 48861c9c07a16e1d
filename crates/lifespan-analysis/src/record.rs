//! Person records and their derived lifespan fields.
//!
//! A [`Record`] is one row of input: a name, a birth date and an optional death
//! date (absent for people still living). [`compute_derived_fields`] turns it into
//! a [`LifespanRecord`] measured against an explicit reference date, so results
//! never depend on the wall clock.
//!
//! # Truncation
//!
//! Derived year and month counts truncate toward zero, they never round:
//!
//! ```
//! use chrono::NaiveDate;
//! use lifespan_analysis::record::{Record, compute_derived_fields};
//!
//! let record = Record {
//!     name: "A".to_owned(),
//!     birth_date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
//!     death_date: NaiveDate::from_ymd_opt(1980, 1, 1),
//! };
//! let reference = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//! let derived = compute_derived_fields(record, reference);
//!
//! assert_eq!(derived.lived_days, 29_219);
//! assert_eq!(derived.lived_years, 79); // 29219 / 365.25 = 79.997
//! assert_eq!(derived.lived_months, 2_434); // 29219 / 12 = 2434.92
//! ```

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

/// Average number of days in a year, accounting for leap years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Divisor applied to `lived_days` to obtain `lived_months`.
///
/// This is a plain `/ 12.0` on the day count and is kept as such for
/// compatibility with existing reports.
pub const MONTHS_DIVISOR: f64 = 12.0;

/// One person in the input dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the person
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date of death, `None` if the person is still living
    pub death_date: Option<NaiveDate>,
}

impl Record {
    /// Returns `true` if the record has no death date.
    #[must_use]
    pub fn is_living(&self) -> bool {
        self.death_date.is_none()
    }

    /// The date the lifespan is measured up to.
    #[must_use]
    pub fn end_date(&self, reference_date: NaiveDate) -> NaiveDate {
        self.death_date.unwrap_or(reference_date)
    }
}

/// A record together with its derived lifespan fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifespanRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Calendar year of birth
    pub birth_year: i32,
    /// Days between birth and death (or the reference date for living records)
    pub lived_days: i64,
    /// `lived_days / 365.25`, truncated toward zero
    pub lived_years: i64,
    /// `lived_days / 12.0`, truncated toward zero
    pub lived_months: i64,
}

impl LifespanRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    #[must_use]
    pub fn is_living(&self) -> bool {
        self.record.is_living()
    }
}

/// Computes the derived lifespan fields of `record`.
///
/// Living records are measured up to `reference_date`.
#[must_use]
pub fn compute_derived_fields(record: Record, reference_date: NaiveDate) -> LifespanRecord {
    let lived_days = record
        .end_date(reference_date)
        .signed_duration_since(record.birth_date)
        .num_days();
    LifespanRecord {
        birth_year: record.birth_date.year(),
        lived_days,
        lived_years: truncating_div(lived_days, DAYS_PER_YEAR),
        lived_months: truncating_div(lived_days, MONTHS_DIVISOR),
        record,
    }
}

#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn truncating_div(days: i64, divisor: f64) -> i64 {
    (days as f64 / divisor).trunc() as i64
}
