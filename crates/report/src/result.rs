// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark report types.
//!
//! These are the records extracted from `raw.md` and embedded, as JSON, into
//! the generated page. Field names are part of the page's data contract.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};

/// Timestamp used when the document has no `## Timestamp` section.
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";

/// Number of cells a results table line must carry.
pub const COLUMN_COUNT: usize = 12;

/// Column names, in table order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "name",
    "connections",
    "success_rate",
    "test_seconds",
    "rps",
    "p50",
    "p99",
    "p999",
    "memory_mb",
    "cpu_time",
    "threads",
    "processes",
];

/// Full report: run metadata plus result rows in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Free-text run timestamp, verbatim from the document.
    pub timestamp: String,
    /// Machine the benchmarks ran on.
    pub hardware: Hardware,
    /// One row per implementation/connection-count pair.
    pub results: Vec<BenchmarkRow>,
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self {
            timestamp: UNKNOWN_TIMESTAMP.to_string(),
            hardware: Hardware::default(),
            results: Vec::new(),
        }
    }
}

impl BenchmarkReport {
    /// Rows measured at the given connection count, in document order.
    pub fn rows_at(&self, connections: u32) -> impl Iterator<Item = &BenchmarkRow> {
        self.results
            .iter()
            .filter(move |row| row.connections == connections)
    }
}

/// Hardware info table. Missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardware {
    /// CPU model name.
    pub cpu_model: String,
    /// Number of CPUs, as written.
    pub num_cpus: String,
    /// Total memory, as written.
    pub memory: String,
}

impl Hardware {
    /// Build from table cells, mapping the first three positionally.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cell = |i: usize| {
            cells
                .get(i)
                .map(|c| c.as_ref().trim().to_string())
                .unwrap_or_default()
        };
        Self {
            cpu_model: cell(0),
            num_cpus: cell(1),
            memory: cell(2),
        }
    }
}

/// A single measurement for one implementation at one concurrency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    /// Implementation tag, e.g. `rust`.
    pub name: String,
    /// Concurrent connections used by the load generator.
    pub connections: u32,
    /// Success rate, verbatim (usually with a `%` suffix).
    pub success_rate: String,
    /// Wall-clock test duration in seconds.
    pub test_seconds: f64,
    /// Requests per second.
    pub rps: f64,
    /// Median latency in milliseconds.
    pub p50: f64,
    /// 99th percentile latency in milliseconds.
    pub p99: f64,
    /// 99.9th percentile latency in milliseconds.
    pub p999: f64,
    /// Peak resident memory in MB.
    pub memory_mb: f64,
    /// CPU time, verbatim (may mix units, e.g. `3m2s`).
    pub cpu_time: String,
    /// OS thread count.
    pub threads: u32,
    /// OS process count.
    pub processes: u32,
}

impl BenchmarkRow {
    /// Build a row from exactly [`COLUMN_COUNT`] trimmed cells.
    ///
    /// `line` is the 1-based document line, used only for error reporting.
    pub fn from_cells(line: usize, cells: &[&str; COLUMN_COUNT]) -> Result<Self> {
        let int = |i: usize| parse_int(line, COLUMNS[i], cells[i]);
        let float = |i: usize| parse_float(line, COLUMNS[i], cells[i]);

        Ok(Self {
            name: cells[0].to_string(),
            connections: int(1)?,
            success_rate: cells[2].to_string(),
            test_seconds: float(3)?,
            rps: float(4)?,
            p50: float(5)?,
            p99: float(6)?,
            p999: float(7)?,
            memory_mb: float(8)?,
            cpu_time: cells[9].to_string(),
            threads: int(10)?,
            processes: int(11)?,
        })
    }
}

fn parse_int(line: usize, column: &'static str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|e| ReportError::InvalidCell {
        line,
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_float(line: usize, column: &'static str, value: &str) -> Result<f64> {
    let invalid = |reason: String| ReportError::InvalidCell {
        line,
        column,
        value: value.to_string(),
        reason,
    };

    let parsed = value.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    // NaN and infinities have no JSON representation.
    if !parsed.is_finite() {
        return Err(invalid("value is not finite".to_string()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUST_ROW: [&str; COLUMN_COUNT] = [
        "rust", "200", "100%", "12.3", "81234.5", "1.1", "5.2", "9.9", "45.6", "3m2s", "4", "1",
    ];

    #[test]
    fn test_row_from_cells_maps_positionally() {
        let row = BenchmarkRow::from_cells(7, &RUST_ROW).unwrap();
        assert_eq!(row.name, "rust");
        assert_eq!(row.connections, 200);
        assert_eq!(row.success_rate, "100%");
        assert_eq!(row.test_seconds, 12.3);
        assert_eq!(row.rps, 81234.5);
        assert_eq!(row.p50, 1.1);
        assert_eq!(row.p99, 5.2);
        assert_eq!(row.p999, 9.9);
        assert_eq!(row.memory_mb, 45.6);
        assert_eq!(row.cpu_time, "3m2s");
        assert_eq!(row.threads, 4);
        assert_eq!(row.processes, 1);
    }

    #[test]
    fn test_row_rejects_non_numeric_float_column() {
        let mut cells = RUST_ROW;
        cells[4] = "fast";

        match BenchmarkRow::from_cells(12, &cells) {
            Err(ReportError::InvalidCell {
                line,
                column,
                value,
                ..
            }) => {
                assert_eq!(line, 12);
                assert_eq!(column, "rps");
                assert_eq!(value, "fast");
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }

    #[test]
    fn test_row_rejects_fractional_integer_column() {
        let mut cells = RUST_ROW;
        cells[10] = "4.5";

        let err = BenchmarkRow::from_cells(3, &cells).unwrap_err();
        assert!(err.to_string().contains("`threads`"));
    }

    #[test]
    fn test_row_rejects_negative_connections() {
        let mut cells = RUST_ROW;
        cells[1] = "-200";

        let err = BenchmarkRow::from_cells(3, &cells).unwrap_err();
        assert!(err.to_string().contains("`connections`"));
    }

    #[test]
    fn test_row_rejects_non_finite_floats() {
        for bad in ["NaN", "inf", "-inf"] {
            let mut cells = RUST_ROW;
            cells[5] = bad;
            assert!(BenchmarkRow::from_cells(1, &cells).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn test_hardware_from_short_cells_defaults_to_empty() {
        let hw = Hardware::from_cells(&[" AMD EPYC 7763 ", "4"]);
        assert_eq!(hw.cpu_model, "AMD EPYC 7763");
        assert_eq!(hw.num_cpus, "4");
        assert_eq!(hw.memory, "");
    }

    #[test]
    fn test_default_report_uses_unknown_timestamp() {
        let report = BenchmarkReport::default();
        assert_eq!(report.timestamp, UNKNOWN_TIMESTAMP);
        assert_eq!(report.hardware, Hardware::default());
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_rows_at_filters_by_connections() {
        let mut report = BenchmarkReport::default();
        let first = BenchmarkRow::from_cells(1, &RUST_ROW).unwrap();
        let mut second = first.clone();
        second.connections = 400;
        report.results = vec![first, second];

        let at_400: Vec<_> = report.rows_at(400).collect();
        assert_eq!(at_400.len(), 1);
        assert_eq!(at_400[0].connections, 400);
    }

    #[test]
    fn test_report_json_field_order() {
        let report = BenchmarkReport::default();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"Unknown","hardware":{"cpu_model":"","num_cpus":"","memory":""},"results":[]}"#
        );
    }
}
