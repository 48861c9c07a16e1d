use chrono::NaiveDate;

/// Errors raised while reading the input dataset.
///
/// Record-level variants carry the CSV line and the name of the offending record.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InputError {
    #[display("Failed to read CSV input")]
    Csv(#[error(source)] csv::Error),
    #[display("Missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[display("Line {line} ({name}): missing {column}")]
    MissingDate {
        line: u64,
        name: String,
        column: &'static str,
    },
    #[display("Line {line} ({name}): cannot parse {column} '{value}' as a date")]
    InvalidDate {
        line: u64,
        name: String,
        column: &'static str,
        value: String,
    },
    #[display("Line {line} ({name}): death date {death_date} is not after birth date {birth_date}")]
    DeathBeforeBirth {
        line: u64,
        name: String,
        birth_date: NaiveDate,
        death_date: NaiveDate,
    },
}

impl From<csv::Error> for InputError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Errors raised when a statistic is undefined for the given dataset.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    #[display("empty dataset")]
    EmptyDataset,
}
