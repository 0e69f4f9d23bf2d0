//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text and value parsing.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "greeter",
    bin_name = "greeter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greet a named person",
    long_about = "Prints \"Hello, NAME!\" on stdout. The name is validated \
                  before anything is written; invalid names exit with code 2.",
    after_help = "EXAMPLES:\n\
        \x20 greeter\n\
        \x20 greeter Alice\n\
        \x20 greeter -v --config ./greeter.toml Bob",
)]
pub struct Cli {
    /// Who to greet. Falls back to `defaults.name` from the config file.
    #[arg(value_name = "NAME", help = "Name of the person to greet")]
    pub name: Option<String>,

    /// Logging and configuration flags.
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_name() {
        let cli = Cli::try_parse_from(["greeter", "Alice"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn name_is_optional() {
        let cli = Cli::try_parse_from(["greeter"]).unwrap();
        assert!(cli.name.is_none());
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["greeter", "-vvv", "Bob"]).unwrap();
        assert_eq!(cli.global.verbose, 3);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["greeter", "-q", "-v"]).is_err());
    }

    #[test]
    fn empty_name_is_passed_through_for_domain_validation() {
        let cli = Cli::try_parse_from(["greeter", ""]).unwrap();
        assert_eq!(cli.name.as_deref(), Some(""));
    }
}
