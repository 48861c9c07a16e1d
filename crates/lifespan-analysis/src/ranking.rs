//! Ranking records by a derived field.

use std::cmp::Ordering;

use crate::record::LifespanRecord;

/// Field used to order records in [`get_ranked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    LivedDays,
    LivedYears,
    LivedMonths,
    BirthYear,
    BirthDate,
    Name,
}

impl RankKey {
    fn compare(self, a: &LifespanRecord, b: &LifespanRecord) -> Ordering {
        match self {
            RankKey::LivedDays => a.lived_days.cmp(&b.lived_days),
            RankKey::LivedYears => a.lived_years.cmp(&b.lived_years),
            RankKey::LivedMonths => a.lived_months.cmp(&b.lived_months),
            RankKey::BirthYear => a.birth_year.cmp(&b.birth_year),
            RankKey::BirthDate => a.record.birth_date.cmp(&b.record.birth_date),
            RankKey::Name => a.record.name.cmp(&b.record.name),
        }
    }
}

/// Returns the first `n` records ordered by `key`.
///
/// The sort is stable in both directions: records with equal keys keep their
/// input order. If `n` exceeds the number of records, all records are returned.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use lifespan_analysis::{record::{Record, compute_derived_fields}, ranking::{RankKey, get_ranked}};
/// let reference = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let records = [("A", 1900), ("B", 1950), ("C", 1920)]
///     .into_iter()
///     .map(|(name, year)| Record {
///         name: name.to_owned(),
///         birth_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
///         death_date: None,
///     })
///     .map(|r| compute_derived_fields(r, reference))
///     .collect::<Vec<_>>();
///
/// let longest = get_ranked(&records, RankKey::LivedDays, false, 2);
/// let names = longest.iter().map(|r| r.name()).collect::<Vec<_>>();
/// assert_eq!(names, ["A", "C"]);
/// ```
#[must_use]
pub fn get_ranked(
    records: &[LifespanRecord],
    key: RankKey,
    ascending: bool,
    n: usize,
) -> Vec<LifespanRecord> {
    let mut sorted = records.iter().collect::<Vec<_>>();
    if ascending {
        sorted.sort_by(|a, b| key.compare(a, b));
    } else {
        sorted.sort_by(|a, b| key.compare(b, a));
    }
    sorted.into_iter().take(n).cloned().collect()
}
