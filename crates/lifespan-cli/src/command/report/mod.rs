//! Report command
//!
//! Loads the dataset, prints the longest and shortest lived tables and the
//! statistics table, and writes one chart file per chart kind.

mod table;

use std::{fs, path::PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use lifespan_analysis::{
    chart::ChartData,
    dataset::{self, Dataset},
    ranking::RankKey,
};

use crate::{command::InputArg, plot, util};

const DEFAULT_PLOT_DIR: &str = "plots";
const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Directory the charts are written to
    #[arg(long, default_value = DEFAULT_PLOT_DIR)]
    pub plot_dir: PathBuf,

    /// Date that lifespans of living people are measured up to (YYYY-MM-DD) [default: today]
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,

    /// Number of rows in the longest and shortest lived tables
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Also print the rendered charts
    #[arg(long)]
    pub show_charts: bool,

    /// Write the statistics as JSON to this path (`-` for stdout)
    #[arg(long)]
    pub summary_output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            input: InputArg::default(),
            plot_dir: PathBuf::from(DEFAULT_PLOT_DIR),
            reference_date: None,
            top: DEFAULT_TOP,
            show_charts: false,
            summary_output: None,
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    util::ensure_input(&arg.input)?;

    let reference_date = arg
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    log::info!("Measuring lifespans of living people up to {reference_date}");

    let records = dataset::read_records_from_path(&arg.input.input)
        .with_context(|| format!("Failed to load dataset: {}", arg.input.input.display()))?;
    let dataset = Dataset::new(records, reference_date);
    anyhow::ensure!(
        !dataset.is_empty(),
        "No records found in {}",
        arg.input.input.display()
    );
    log::info!(
        "Loaded {} records ({} living, {} deceased)",
        dataset.len(),
        dataset.living_count(),
        dataset.deceased_count()
    );

    let summary = dataset
        .summary()
        .context("Failed to compute statistics")?;

    let longest = dataset.ranked(RankKey::LivedDays, false, arg.top);
    let shortest = dataset.ranked(RankKey::LivedDays, true, arg.top);

    println!("Top {} longest lived presidents", arg.top);
    println!("{}", table::ranked_table(&longest));
    println!();

    println!("Top {} shortest lived presidents", arg.top);
    println!("{}", table::ranked_table(&shortest));
    println!();

    println!("Statistics");
    println!("{}", table::statistics_table(&summary));

    if let Some(path) = &arg.summary_output {
        util::save_json(&summary, path)?;
    }

    fs::create_dir_all(&arg.plot_dir)
        .with_context(|| format!("Failed to create directory: {}", arg.plot_dir.display()))?;

    let charts = ChartData::new(&dataset, &summary);
    for artifact in plot::render_all(&charts) {
        let path = artifact.save(&arg.plot_dir)?;
        log::info!("Chart saved to: {}", path.display());
        if arg.show_charts {
            println!();
            print!("{}", artifact.text());
        }
    }

    Ok(())
}
