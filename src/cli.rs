//! Command-line surface: argument parsing, orchestration and exit codes

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use logtally_logs::{LevelFilter, LoadError, LoadErrorKind, count_by_level};

use crate::config::Config;
use crate::report::{self, Details, ReportFormat};

/// Logtally - count log records per level and list the ones you care about
#[derive(Parser, Debug, Default)]
#[command(name = "logtally")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log file with `DATE TIME LEVEL MESSAGE` lines
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// List records of this level (case-insensitive)
    #[arg(value_name = "LEVEL")]
    pub level: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Also list levels other than INFO, DEBUG, ERROR and WARNING
    #[arg(long)]
    pub all_levels: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Process exit codes
pub mod exit {
    pub const FAILURE: u8 = 1;
    pub const MISSING_PATH: u8 = 2;
    pub const FILE_ACCESS: u8 = 3;
    pub const ENCODING: u8 = 4;
}

/// Everything that stops a run
#[derive(Debug, Error)]
pub enum Failure {
    #[error("no log file given (usage: logtally <PATH> [LEVEL])")]
    MissingPath,

    #[error("{0:#}")]
    Config(anyhow::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingPath => exit::MISSING_PATH,
            Self::Load(e) => match e.kind() {
                LoadErrorKind::FileAccess => exit::FILE_ACCESS,
                LoadErrorKind::Encoding => exit::ENCODING,
            },
            Self::Config(_) | Self::Output(_) => exit::FAILURE,
        }
    }
}

/// Load the log named in `args`, then write counts and optional details
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), Failure> {
    // Checked before anything touches the filesystem.
    let path = args.path.as_deref().ok_or(Failure::MissingPath)?;

    let config = Config::load(args.config.as_deref()).map_err(Failure::Config)?;
    let format = args.format.unwrap_or(config.report.format);
    let show_extra = args.all_levels || config.report.show_extra_levels;

    let records = logtally_logs::load(path)?;
    let counts = count_by_level(&records);

    let filter = args.level.as_deref().map(LevelFilter::new);
    let matched = filter
        .as_ref()
        .map(|f| f.apply(&records))
        .unwrap_or_default();
    let details = filter.as_ref().map(|f| Details {
        level: f.level(),
        records: &matched,
    });

    info!(
        path = %path.display(),
        records = records.len(),
        matched = matched.len(),
        ?format,
        "analysis complete"
    );

    match format {
        ReportFormat::Table => {
            report::write_table(out, &counts, show_extra)?;
            if let Some(details) = &details {
                report::write_details(out, details)?;
            }
        }
        ReportFormat::Json => report::write_json(out, &counts, details.as_ref())?,
    }

    out.flush()?;
    Ok(())
}
