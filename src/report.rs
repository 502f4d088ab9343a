//! Rendering of level counts and detail listings

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use logtally_logs::{LevelCounts, LogRecord};

const LEVEL_COLUMN_WIDTH: usize = 16;

/// Output format for the report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Two-column text table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// Records selected by a level query
pub struct Details<'a> {
    /// Upper-cased query
    pub level: &'a str,
    pub records: &'a [LogRecord],
}

/// Write the count table: canonical levels first in fixed order, then any
/// other levels if `show_extra` is set
pub fn write_table(out: &mut impl Write, counts: &LevelCounts, show_extra: bool) -> io::Result<()> {
    writeln!(out, "{:<width$} | Count", "Level", width = LEVEL_COLUMN_WIDTH)?;
    writeln!(out, "{}|{}", "-".repeat(LEVEL_COLUMN_WIDTH + 1), "-".repeat(10))?;

    for (level, count) in counts.canonical() {
        writeln!(out, "{:<width$} | {}", level, count, width = LEVEL_COLUMN_WIDTH)?;
    }
    if show_extra {
        for (level, count) in counts.extra() {
            writeln!(out, "{:<width$} | {}", level, count, width = LEVEL_COLUMN_WIDTH)?;
        }
    }

    Ok(())
}

/// Write the labeled detail listing, one `date time - message` per record
pub fn write_details(out: &mut impl Write, details: &Details<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Log details for level '{}':", details.level)?;
    for record in details.records {
        writeln!(out, "{} {} - {}", record.date, record.time, record.message)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    counts: &'a LevelCounts,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [LogRecord]>,
}

/// Write counts and optional details as one JSON document
pub fn write_json(
    out: &mut impl Write,
    counts: &LevelCounts,
    details: Option<&Details<'_>>,
) -> io::Result<()> {
    let report = JsonReport {
        counts,
        total: counts.total(),
        level: details.map(|d| d.level),
        records: details.map(|d| d.records),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
