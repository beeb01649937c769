// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown extraction for benchmark result documents.
//!
//! The input is the `raw.md` written by the benchmark driver. Only three
//! regions matter:
//!
//! ```text
//! ## Timestamp
//! 2025-01-01 12:00:00 UTC
//!
//! | CPU Model | CPUs | Memory |
//! | --- | --- | --- |
//! | AMD EPYC 7763 | 4 | 16 GiB |
//!
//! ## Benchmarks of 1 Million Requests
//! | Name | Connections | ... 12 columns ... |
//! | --- | --- | ... |
//! | rust | 200 | 100% | ... |
//! ```
//!
//! The timestamp and hardware table are optional. The results section is
//! mandatory, and any numeric cell in it must parse.

use crate::error::{ReportError, Result};
use crate::result::{BenchmarkReport, BenchmarkRow, Hardware, COLUMN_COUNT, UNKNOWN_TIMESTAMP};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Header that introduces the results table.
pub const RESULTS_HEADER: &str = "## Benchmarks of 1 Million Requests";

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"## Timestamp\s*\n(.+)").expect("timestamp pattern is valid")
});

static HARDWARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\| CPU Model \|.*\n\| [-\s|]+\n\|(.+)\|").expect("hardware pattern is valid")
});

/// Outcome of parsing a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The parsed report.
    pub report: BenchmarkReport,
    /// Table lines skipped because they had fewer than [`COLUMN_COUNT`] cells.
    pub dropped_lines: usize,
}

/// Parse a document into a report, discarding the dropped-line count.
pub fn parse_document(text: &str) -> Result<BenchmarkReport> {
    extract(text).map(|extraction| extraction.report)
}

/// Parse a document into a report.
pub fn extract(text: &str) -> Result<Extraction> {
    let timestamp = extract_timestamp(text);
    let hardware = extract_hardware(text);
    let (results, dropped_lines) = extract_results(text)?;

    if dropped_lines > 0 {
        warn!(dropped_lines, "skipped short lines in results table");
    }

    Ok(Extraction {
        report: BenchmarkReport {
            timestamp,
            hardware,
            results,
        },
        dropped_lines,
    })
}

/// First non-empty line after `## Timestamp`, or [`UNKNOWN_TIMESTAMP`].
pub fn extract_timestamp(text: &str) -> String {
    match TIMESTAMP_RE.captures(text).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str().trim().to_string(),
        None => {
            debug!("no timestamp section");
            UNKNOWN_TIMESTAMP.to_string()
        }
    }
}

/// Data row under the `| CPU Model |` table, or all-empty fields.
pub fn extract_hardware(text: &str) -> Hardware {
    match HARDWARE_RE.captures(text).and_then(|caps| caps.get(1)) {
        Some(m) => {
            let cells: Vec<&str> = m.as_str().split('|').collect();
            Hardware::from_cells(&cells)
        }
        None => {
            debug!("no hardware table");
            Hardware::default()
        }
    }
}

/// Rows of the results table plus the number of short lines skipped.
pub fn extract_results(text: &str) -> Result<(Vec<BenchmarkRow>, usize)> {
    let start = text
        .find(RESULTS_HEADER)
        .map(|idx| idx + RESULTS_HEADER.len())
        .ok_or(ReportError::MissingSection(RESULTS_HEADER))?;
    let section = &text[start..];
    let section = match section.find(RESULTS_HEADER) {
        Some(end) => &section[..end],
        None => section,
    };

    // Line number of the header itself, then of the first line after trimming.
    let header_line = text[..start].matches('\n').count() + 1;
    let body = section.trim_start();
    let skipped_newlines = section[..section.len() - body.len()].matches('\n').count();
    let first_line = header_line + skipped_newlines;
    debug!(line = header_line, "found results section");

    let mut rows = Vec::new();
    let mut dropped = 0;

    // First two lines are the table header and separator.
    for (offset, raw) in body.trim_end().lines().enumerate().skip(2) {
        let lineno = first_line + offset;
        let line = raw.trim();
        if line.is_empty() || !line.starts_with('|') {
            continue;
        }

        let cells = split_cells(line);
        let Some(fixed) = cells
            .get(..COLUMN_COUNT)
            .and_then(|c| <&[&str; COLUMN_COUNT]>::try_from(c).ok())
        else {
            warn!(line = lineno, cells = cells.len(), "dropping short results line");
            dropped += 1;
            continue;
        };

        rows.push(BenchmarkRow::from_cells(lineno, fixed)?);
    }

    debug!(rows = rows.len(), dropped, "parsed results table");
    Ok((rows, dropped))
}

/// Split a `|`-bounded table line into trimmed interior cells.
///
/// The first and last pieces are discarded unconditionally, so a line missing
/// its closing `|` loses its last cell.
fn split_cells(line: &str) -> Vec<&str> {
    let pieces: Vec<&str> = line.split('|').collect();
    if pieces.len() < 2 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1]
        .iter()
        .map(|cell| cell.trim())
        .collect()
}
