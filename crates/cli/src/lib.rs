// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for the Million Hello Challenge report generator.
//!
//! Running `million-hello` with no subcommand reads `results/raw.md` and
//! writes `_site/index.html`.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

mod logging;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use million_hello_report::html::{CHART_CONNECTION_LEVELS, CHART_IMPLEMENTATIONS};
use million_hello_report::{io, BenchmarkReport, SiteConfig};
use std::path::PathBuf;
use tracing::debug;

/// Million Hello Challenge report generator.
#[derive(Parser, Debug)]
#[command(name = "million-hello")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: generate).
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the results document and write the HTML report.
    Generate(GenerateArgs),

    /// Parse the results document and print a summary without writing.
    Check {
        /// Markdown results document.
        #[arg(short, long, default_value = io::DEFAULT_INPUT)]
        input: PathBuf,
    },
}

/// Arguments for `generate`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Markdown results document.
    #[arg(short, long, default_value = io::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// HTML page to write (default: _site/index.html).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the parsed report as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(io::DEFAULT_INPUT),
            output: None,
            json: None,
        }
    }
}

impl From<GenerateArgs> for SiteConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            input: args.input,
            output: args.output.unwrap_or_else(io::default_output_path),
            json_output: args.json,
        }
    }
}

/// Parse arguments, set up logging, and run the selected command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    execute(cli)
}

/// Run an already-parsed command line.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => generate(GenerateArgs::default()),
        Some(Commands::Generate(args)) => generate(args),
        Some(Commands::Check { input }) => check(input),
    }
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = SiteConfig::from(args);
    debug!(?config, "generating site");
    let site = million_hello_report::generate_site(&config)
        .with_context(|| format!("could not generate report from {}", config.input.display()))?;

    println!("Generated {}", site.output.display());
    Ok(())
}

fn check(input: PathBuf) -> anyhow::Result<()> {
    let config = SiteConfig {
        input,
        ..SiteConfig::default()
    };
    debug!(input = %config.input.display(), "checking results document");
    let extraction = million_hello_report::load_report(&config)
        .with_context(|| format!("could not parse {}", config.input.display()))?;
    let report = &extraction.report;

    println!("{}", "Million Hello Challenge results".bold());
    println!("Timestamp: {}", report.timestamp);
    println!("CPU:       {}", report.hardware.cpu_model);
    println!("vCPUs:     {}", report.hardware.num_cpus);
    println!("Memory:    {}", report.hardware.memory);
    println!(
        "Rows:      {} ({} short lines dropped)",
        report.results.len(),
        extraction.dropped_lines
    );

    let missing = missing_chart_entries(report);
    if !missing.is_empty() {
        println!(
            "{} no data for {} (charted as 0)",
            "note:".yellow().bold(),
            missing.join(", ")
        );
    }

    Ok(())
}

/// `name@connections` pairs the charts expect but the report lacks.
fn missing_chart_entries(report: &BenchmarkReport) -> Vec<String> {
    let mut missing = Vec::new();
    for connections in CHART_CONNECTION_LEVELS {
        for name in CHART_IMPLEMENTATIONS {
            if !report.rows_at(connections).any(|row| row.name == name) {
                missing.push(format!("{}@{}", name, connections));
            }
        }
    }
    missing
}
