//! Dataset ingestion and the in-memory dataset snapshot.
//!
//! # Input Format
//!
//! The input is a CSV file with a header row. The following columns are used
//! (matched case-insensitively, surrounding whitespace ignored); any other
//! column is ignored:
//!
//! | column       | content                                      |
//! |--------------|----------------------------------------------|
//! | `PRESIDENT`  | name of the person (`NAME` is also accepted) |
//! | `BIRTH DATE` | date of birth, required                      |
//! | `DEATH DATE` | date of death, empty for living people       |
//!
//! Dates are accepted as `Feb 22, 1732`, `February 22, 1732`, `Feb 22 1732`,
//! `1732-02-22` or `2/22/1732` (see [`parse_date`]).
//!
//! The published dataset ends with a "References" line that is not a record.
//! A trailing row whose name starts with "Reference" or whose birth date is
//! empty is treated as such a footer and dropped.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lifespan_analysis::dataset::{self, Dataset};
//!
//! let csv = r#"PRESIDENT,BIRTH DATE,DEATH DATE
//! A,"Jan 1, 1900","Jan 1, 1980"
//! B,"Jun 15, 1920",
//! References: example.org,,
//! "#;
//! let records = dataset::read_records(csv.as_bytes())?;
//! assert_eq!(records.len(), 2);
//!
//! let reference = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//! let dataset = Dataset::new(records, reference);
//! assert_eq!(dataset.records()[1].lived_days, 29_054);
//! assert_eq!(dataset.living_count(), 1);
//! # Ok::<(), lifespan_analysis::error::InputError>(())
//! ```

use std::{io, path::Path};

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;

use crate::{
    error::{DomainError, InputError},
    ranking::{self, RankKey},
    record::{LifespanRecord, Record, compute_derived_fields},
    summary::{self, SummaryStats},
};

/// Accepted header names for the name column, in lookup order.
pub const NAME_COLUMNS: [&str; 2] = ["PRESIDENT", "NAME"];
pub const BIRTH_DATE_COLUMN: &str = "BIRTH DATE";
pub const DEATH_DATE_COLUMN: &str = "DEATH DATE";

// `%B` accepts both full and abbreviated month names when parsing.
const DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%B %d %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parses a date in any of the accepted input formats.
///
/// Abbreviations may carry a trailing period (`Aug. 4, 1961`), and `Sept` is
/// read as `Sep`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use lifespan_analysis::dataset::parse_date;
/// let expected = NaiveDate::from_ymd_opt(1732, 2, 22);
/// assert_eq!(parse_date("Feb 22, 1732"), expected);
/// assert_eq!(parse_date("February 22, 1732"), expected);
/// assert_eq!(parse_date("1732-02-22"), expected);
/// assert_eq!(parse_date("2/22/1732"), expected);
/// assert_eq!(parse_date("Sept. 15, 1857"), NaiveDate::from_ymd_opt(1857, 9, 15));
/// assert_eq!(parse_date("someday"), None);
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim().replace('.', "").replacen("Sept ", "Sep ", 1);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&text, format).ok())
}

/// Reads records from a CSV file.
pub fn read_records_from_path<P>(path: P) -> Result<Vec<Record>, InputError>
where
    P: AsRef<Path>,
{
    let reader = csv_reader_builder().from_path(path)?;
    read_records_from_csv(reader)
}

/// Reads records from CSV data.
pub fn read_records<R>(reader: R) -> Result<Vec<Record>, InputError>
where
    R: io::Read,
{
    read_records_from_csv(csv_reader_builder().from_reader(reader))
}

fn csv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).trim(csv::Trim::All);
    builder
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    birth_date: usize,
    death_date: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, InputError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column))
        };
        let name = NAME_COLUMNS
            .iter()
            .find_map(|column| find(column))
            .ok_or(InputError::MissingColumn {
                column: NAME_COLUMNS[0],
            })?;
        let birth_date = find(BIRTH_DATE_COLUMN).ok_or(InputError::MissingColumn {
            column: BIRTH_DATE_COLUMN,
        })?;
        let death_date = find(DEATH_DATE_COLUMN).ok_or(InputError::MissingColumn {
            column: DEATH_DATE_COLUMN,
        })?;
        Ok(Self {
            name,
            birth_date,
            death_date,
        })
    }

    fn field<'a>(row: &'a StringRecord, idx: usize) -> &'a str {
        row.get(idx).map_or("", str::trim)
    }

    fn is_footer(self, row: &StringRecord) -> bool {
        let name = Self::field(row, self.name);
        let is_reference = name
            .get(..9)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("reference"));
        is_reference || Self::field(row, self.birth_date).is_empty()
    }

    fn parse(self, row: &StringRecord) -> Result<Record, InputError> {
        let line = row.position().map_or(0, csv::Position::line);
        let name = Self::field(row, self.name).to_owned();

        let birth_text = Self::field(row, self.birth_date);
        if birth_text.is_empty() {
            return Err(InputError::MissingDate {
                line,
                name,
                column: BIRTH_DATE_COLUMN,
            });
        }
        let birth_date = parse_date(birth_text).ok_or_else(|| InputError::InvalidDate {
            line,
            name: name.clone(),
            column: BIRTH_DATE_COLUMN,
            value: birth_text.to_owned(),
        })?;

        let death_text = Self::field(row, self.death_date);
        let death_date = if death_text.is_empty() {
            None
        } else {
            let death_date = parse_date(death_text).ok_or_else(|| InputError::InvalidDate {
                line,
                name: name.clone(),
                column: DEATH_DATE_COLUMN,
                value: death_text.to_owned(),
            })?;
            if death_date <= birth_date {
                return Err(InputError::DeathBeforeBirth {
                    line,
                    name,
                    birth_date,
                    death_date,
                });
            }
            Some(death_date)
        };

        Ok(Record {
            name,
            birth_date,
            death_date,
        })
    }
}

fn read_records_from_csv<R>(mut reader: csv::Reader<R>) -> Result<Vec<Record>, InputError>
where
    R: io::Read,
{
    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    let mut rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    if rows.last().is_some_and(|row| columns.is_footer(row)) {
        rows.pop();
    }

    rows.iter().map(|row| columns.parse(row)).collect()
}

/// Immutable snapshot of the dataset with derived fields computed.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    reference_date: NaiveDate,
    records: Vec<LifespanRecord>,
}

impl Dataset {
    /// Computes derived fields for all `records`, measuring living records up
    /// to `reference_date`.
    #[must_use]
    pub fn new(records: Vec<Record>, reference_date: NaiveDate) -> Self {
        let records = records
            .into_iter()
            .map(|record| compute_derived_fields(record, reference_date))
            .collect();
        Self {
            reference_date,
            records,
        }
    }

    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Records in input order.
    #[must_use]
    pub fn records(&self) -> &[LifespanRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_living()).count()
    }

    #[must_use]
    pub fn deceased_count(&self) -> usize {
        self.len() - self.living_count()
    }

    /// See [`ranking::get_ranked`].
    #[must_use]
    pub fn ranked(&self, key: RankKey, ascending: bool, n: usize) -> Vec<LifespanRecord> {
        ranking::get_ranked(&self.records, key, ascending, n)
    }

    /// See [`summary::compute_summary`].
    pub fn summary(&self) -> Result<SummaryStats, DomainError> {
        summary::compute_summary(&self.records)
    }
}
