//! Settings CLI - application entry point
//!
//! Loads settings once, initializes tracing from the configured log level,
//! then hands the settings to the selected command.

mod args;
mod commands;

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{Cli, Commands};
use common::telemetry::log_filter;
use common::Settings;

fn main() {
    let cli = Cli::parse();

    // Verbose mode needs no settings, so logging can start before the load
    if cli.verbose {
        init_tracing(log_filter("", true).filter);
    }

    // Load configuration before anything else; a bad value stops the process
    let settings = match Settings::load() {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            if !cli.verbose {
                init_tracing(log_filter("", false).filter);
            }
            tracing::error!(variable = e.variable(), code = e.code(), "Configuration error: {}", e);
            process::exit(1);
        }
    };

    if !cli.verbose {
        let filter = log_filter(settings.log_level(), false);
        init_tracing(filter.filter);
        if filter.fallback {
            tracing::warn!(
                log_level = settings.log_level(),
                "Unusable log level, using {}",
                filter.directive
            );
        }
    }
    tracing::debug!("Configuration loaded");

    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, &settings),
        Commands::Check => commands::check::execute(&settings),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
