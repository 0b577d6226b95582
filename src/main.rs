//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipstack_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and error formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipstack_lookup::initialization::init_logger_with;
use ipstack_lookup::{run_lookup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting IPSTACK_KEY_FILE without exporting it manually.
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let debug = config.debug;
    match run_lookup(config).await {
        Ok(report) => {
            print!("{}", report.rendered);
            log::debug!(
                "Lookup for {} returned {} field{}",
                report.address,
                report.field_count,
                if report.field_count == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            // Silent mode keeps the failure to its top-level message; debug
            // mode prints the whole error chain.
            if debug {
                eprintln!("ipstack_lookup error: {:?}", e);
            } else {
                eprintln!("ipstack_lookup error: {:#}", e);
            }
            process::exit(1);
        }
    }
}
