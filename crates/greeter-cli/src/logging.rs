//! Subscriber setup for the `greeter` binary.
//!
//! The library crates emit events through `tracing` and never install a
//! subscriber; this module is where one gets installed. Events go to
//! stderr, leaving stdout to the greeting alone.
//!
//! Without `RUST_LOG` the filter is built from the flags: `--quiet` gives
//! `error`, no flag gives `warn`, and each `-v` steps through `info`,
//! `debug` and `trace`.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the flag-derived filter lets through.
const WORKSPACE_TARGETS: [&str; 3] = ["greeter", "greeter_core", "greeter_adapters"];

/// Install the process-wide subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(args));
    let ansi = !args.no_color && io::stderr().is_terminal();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn default_filter(args: &GlobalArgs) -> EnvFilter {
    let level = derive_level(args);
    let directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    EnvFilter::new(directives.join(","))
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
