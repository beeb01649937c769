// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Filesystem access for the site generator.
//!
//! Paths are relative to the working directory, which is expected to be the
//! repository root.

use crate::error::{ReportError, Result};
use crate::result::BenchmarkReport;
use std::fs;
use std::path::{Path, PathBuf};

/// Benchmark driver output read by default.
pub const DEFAULT_INPUT: &str = "results/raw.md";

/// Directory the generated site is written to.
pub const SITE_DIR: &str = "_site";

/// Page file name inside [`SITE_DIR`].
pub const INDEX_FILE: &str = "index.html";

/// Default page path, `_site/index.html`.
pub fn default_output_path() -> PathBuf {
    Path::new(SITE_DIR).join(INDEX_FILE)
}

/// Read the whole input document.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, creating parent directories.
///
/// An existing file is replaced.
pub fn write_site(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

/// Pretty-printed JSON export of the report.
pub fn report_json(report: &BenchmarkReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serialize the report with [`report_json`] and write it to `path`.
///
/// Serialization happens before the file is touched.
pub fn write_report_json(path: impl AsRef<Path>, report: &BenchmarkReport) -> Result<()> {
    let json = report_json(report)?;
    write_site(path, &json)
}

/// Read a report previously written by [`write_report_json`].
pub fn read_report_json(path: impl AsRef<Path>) -> Result<BenchmarkReport> {
    let content = read_document(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Hardware;

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(), PathBuf::from("_site/index.html"));
    }

    #[test]
    fn test_write_site_creates_parent_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/site/index.html");

        write_site(&path, "first").unwrap();
        write_site(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.md");

        match read_document(&path) {
            Err(ReportError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_report_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let report = BenchmarkReport {
            timestamp: "2025-03-01".to_string(),
            hardware: Hardware {
                cpu_model: "Xeon".to_string(),
                num_cpus: "2".to_string(),
                memory: "7Gi".to_string(),
            },
            results: Vec::new(),
        };

        write_report_json(&path, &report).unwrap();
        assert_eq!(read_report_json(&path).unwrap(), report);
    }
}
