use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{fetch::FetchArg, report::ReportArg};

mod fetch;
mod report;

pub(crate) const DEFAULT_INPUT_PATH: &str = "U.S. Presidents Birth and Death Information - Sheet1.csv";
pub(crate) const DEFAULT_INPUT_URL: &str = "https://raw.githubusercontent.com/senrabc/a_problem_with_presidents/main/U.S.%20Presidents%20Birth%20and%20Death%20Information%20-%20Sheet1.csv";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print ranked tables and statistics, and write charts
    Report(#[clap(flatten)] ReportArg),
    /// Download the input dataset
    Fetch(#[clap(flatten)] FetchArg),
}

/// Location of the input dataset.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InputArg {
    /// Path to the input CSV file, downloaded if missing
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
    /// URL the input CSV file is downloaded from
    #[arg(long, default_value = DEFAULT_INPUT_URL)]
    pub url: String,
    /// Never download, fail if the input file is missing
    #[arg(long)]
    pub offline: bool,
}

impl Default for InputArg {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            url: DEFAULT_INPUT_URL.to_owned(),
            offline: false,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args
        .mode
        .unwrap_or_else(|| Mode::Report(ReportArg::default()))
    {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Fetch(arg) => fetch::run(&arg)?,
    }
    Ok(())
}
