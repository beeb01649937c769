// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTML report rendering.
//!
//! The page is a static template with one placeholder that receives the
//! report as a JSON object literal. Everything else (meta bar, table, charts,
//! theme toggle) happens client side.

use crate::error::{ReportError, Result};
use crate::result::BenchmarkReport;

/// Token in the template replaced by the report JSON.
pub const PLACEHOLDER: &str = "__DATA_PLACEHOLDER__";

/// Page template, compiled into the binary.
pub const TEMPLATE: &str = include_str!("../templates/index.html");

/// Implementations charted, in legend order. Mirrors `LANG_ORDER` in the template.
pub const CHART_IMPLEMENTATIONS: [&str; 5] = ["rust", "go", "kotlin", "node", "python"];

/// Connection counts charted. Mirrors `CONN_LEVELS` in the template.
pub const CHART_CONNECTION_LEVELS: [u32; 3] = [200, 400, 800];

/// Render the report into the built-in template.
pub fn render_html(report: &BenchmarkReport) -> Result<String> {
    render_with_template(TEMPLATE, report)
}

/// Render the report into `template`, which must contain [`PLACEHOLDER`]
/// exactly once.
///
/// The JSON is inserted as-is. A cell containing `</script>` would end the
/// script element early; input documents are trusted.
pub fn render_with_template(template: &str, report: &BenchmarkReport) -> Result<String> {
    let (head, tail) = split_template(template)?;
    let json = serde_json::to_string(report)?;

    let mut html = String::with_capacity(head.len() + json.len() + tail.len());
    html.push_str(head);
    html.push_str(&json);
    html.push_str(tail);
    Ok(html)
}

/// Recover the embedded report from a page rendered with the built-in template.
pub fn read_embedded_report(html: &str) -> Result<BenchmarkReport> {
    let (head, tail) = split_template(TEMPLATE)?;
    let json = html
        .strip_prefix(head)
        .and_then(|rest| rest.strip_suffix(tail))
        .ok_or(ReportError::Placeholder { found: 0 })?;
    Ok(serde_json::from_str(json)?)
}

fn split_template(template: &str) -> Result<(&str, &str)> {
    let found = template.matches(PLACEHOLDER).count();
    if found != 1 {
        return Err(ReportError::Placeholder { found });
    }
    template
        .split_once(PLACEHOLDER)
        .ok_or(ReportError::Placeholder { found: 0 })
}
