//! Flags that tune logging, colour and config lookup.
//!
//! Flattened into [`super::Cli`], so they can appear before or after `NAME`.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity counter. `RUST_LOG` takes precedence when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Raise the log level on stderr. The greeting itself always \
                     goes to stdout.
    (none)  - warnings and errors
    -v      - info
    -vv     - debug
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Errors only.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    /// Plain stderr, no ANSI escapes. Also set by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Overrides the per-user config location.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,
}
