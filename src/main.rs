// Leakscan - PII detection and anonymization for free text
// Copyright (c) 2025 Leakscan Contributors
// Licensed under the MIT License

use clap::Parser;
use leakscan::cli::commands::EXIT_CONFIG_ERROR;
use leakscan::cli::{Cli, Commands};
use leakscan::config::{load_config, load_default_config, LeakscanConfig};
use leakscan::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => load_default_config(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Leakscan starting");

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            leakscan::log_error_with_context!(&e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &LeakscanConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Scan(args) => args.execute(config),
        Commands::Hits(args) => args.execute(config),
        Commands::Anonymize(args) => args.execute(config),
        Commands::Mask(args) => args.execute(config),
        Commands::ValidateConfig(args) => {
            let source = cli
                .config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string());
            args.execute(config, &source)
        }
    }
}
