//! Report tables
//!
//! Builds the ranked and statistics tables printed by the report command.

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS,
    presets::UTF8_FULL,
};
use lifespan_analysis::{record::LifespanRecord, summary::SummaryStats};

const DATE_FORMAT: &str = "%b %-d, %Y";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Table of ranked records with their lifespan in days.
///
/// Living records have an empty death date column.
pub(super) fn ranked_table(records: &[LifespanRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "PRESIDENT", "BIRTH DATE", "DEATH DATE", "lived_days"]);

    for (rank, record) in records.iter().enumerate() {
        let death_date = record
            .record
            .death_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(rank).set_alignment(CellAlignment::Right),
            Cell::new(record.name()),
            Cell::new(record.record.birth_date.format(DATE_FORMAT)),
            Cell::new(death_date),
            Cell::new(record.lived_days).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Table of summary statistics, one statistic per row.
pub(super) fn statistics_table(summary: &SummaryStats) -> Table {
    let modes = summary
        .mode_years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let rows = [
        ("mean", format!("{:.2}", summary.mean)),
        ("median", format!("{:.1}", summary.median)),
        ("max", summary.max.to_string()),
        ("min", summary.min.to_string()),
        ("mode(years)", format!("[{modes}]")),
        ("weighted avg.", format!("{:.2}", summary.weighted_average)),
    ];

    let mut table = new_table();
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
