//! CLI argument definitions.
//!
//! Settings themselves come from the environment only; flags here select
//! what to do with them, never their values.

use clap::{Args, Parser, Subcommand};

/// Inspect and check service settings loaded from the environment
#[derive(Parser, Debug)]
#[command(name = "settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the loaded settings
    Show(ShowArgs),

    /// Load all settings and report unconfigured connections
    Check,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the inventory service settings instead
    #[arg(long)]
    pub inventory: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from(["settings", "-v", "show", "--json"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Show(args) => {
                assert!(args.json);
                assert!(!args.inventory);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
