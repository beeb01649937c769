// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count, or `off` when quiet.
pub(crate) fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. stdout stays reserved for command output.
pub(crate) fn init(verbose: u8, quiet: bool) {
    // Fails only if a subscriber is already installed, e.g. across tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_directive(verbose, quiet)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
