// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Static report generator for Million Hello Challenge benchmark results.
//!
//! Reads the Markdown results document written by the benchmark driver and
//! turns it into a single self-contained HTML page with charts.
//!
//! # Quick Start
//!
//! ```no_run
//! use million_hello_report::{generate_site, SiteConfig};
//!
//! let site = generate_site(&SiteConfig::default())?;
//! println!("Generated {}", site.output.display());
//! # Ok::<(), million_hello_report::ReportError>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - Report and row types
//! - [`markdown`] - Extraction from the Markdown document
//! - [`html`] - Template rendering
//! - [`io`] - Reading input and writing the site

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod html;
pub mod io;
pub mod markdown;
pub mod result;

pub use error::{ReportError, Result};
pub use markdown::Extraction;
pub use result::{BenchmarkReport, BenchmarkRow, Hardware};

use std::path::PathBuf;
use tracing::info;

/// Where to read the document and write the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Markdown results document.
    pub input: PathBuf,
    /// HTML page to write.
    pub output: PathBuf,
    /// Optional JSON export of the parsed report.
    pub json_output: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(io::DEFAULT_INPUT),
            output: io::default_output_path(),
            json_output: None,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// Path of the written page.
    pub output: PathBuf,
    /// Rows embedded in the page.
    pub rows: usize,
    /// Short table lines that were skipped.
    pub dropped_lines: usize,
}

/// Read and parse the configured input without writing anything.
pub fn load_report(config: &SiteConfig) -> Result<Extraction> {
    let text = io::read_document(&config.input)?;
    markdown::extract(&text)
}

/// Read, parse, render, and write the site.
///
/// Nothing is written unless parsing, rendering and JSON serialization all
/// succeed. The JSON export, when requested, is written before the page, so a
/// failed export leaves an existing page untouched.
pub fn generate_site(config: &SiteConfig) -> Result<GeneratedSite> {
    let extraction = load_report(config)?;
    let html = html::render_html(&extraction.report)?;
    let json = match &config.json_output {
        Some(path) => Some((path, io::report_json(&extraction.report)?)),
        None => None,
    };

    if let Some((json_path, json)) = &json {
        io::write_site(json_path, json)?;
        info!(path = %json_path.display(), "wrote report JSON");
    }

    io::write_site(&config.output, &html)?;
    info!(
        path = %config.output.display(),
        rows = extraction.report.results.len(),
        "wrote report"
    );

    Ok(GeneratedSite {
        output: config.output.clone(),
        rows: extraction.report.results.len(),
        dropped_lines: extraction.dropped_lines,
    })
}
