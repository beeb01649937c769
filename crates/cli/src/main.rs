// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Million Hello Challenge report generator entry point.

use colored::Colorize;

fn main() {
    if let Err(e) = million_hello_cli::run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
