//! ipstack_lookup library: single-IP geodata lookup against the ipstack API.
//!
//! This library provides the validate → request → process pipeline behind the
//! `ipstack_lookup` CLI: it checks the access-key file and target address,
//! issues one HTTP GET against the ipstack endpoint, validates the shape of
//! the response, and renders it as plain text or a raw JSON dump.
//!
//! # Example
//!
//! ```no_run
//! use ipstack_lookup::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     address: "8.8.8.8".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! print!("{}", report.rendered);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod geodata;
pub mod initialization;
mod process;
mod validate;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorKind, InitializationError, LookupError};
pub use run::{run_lookup, LookupReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::config::Config;
    use crate::geodata::{request_geodata, GeodataResponse};
    use crate::initialization::init_client;
    use crate::process::process_response;
    use crate::validate::check_inputs;

    /// Result of a completed geodata lookup.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// The validated target address, in canonical textual form.
        pub address: String,
        /// Rendered output, ready to be written to stdout. Plain mode yields
        /// one `key: value` line per field; raw mode yields a single JSON
        /// object followed by a newline.
        pub rendered: String,
        /// Number of fields present in the response body.
        pub field_count: usize,
    }

    /// Runs a single geodata lookup with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the inputs,
    /// performs one GET against the configured endpoint, and validates and
    /// renders the response.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key file is missing, unreadable, or empty
    /// - The address is not a valid IPv4 or IPv6 literal
    /// - The HTTP request fails, or the response fails any of the shape
    ///   checks (status, content type, required fields)
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let ip = check_inputs(&config).context("Input validation failed")?;

        let client = init_client().context("Failed to initialize HTTP client")?;

        info!("Querying geodata for {}", ip);
        let response = request_geodata(&client, &config, ip)
            .await
            .context("Geodata request failed")?;
        debug!("Response received (status {})", response.status());

        let (rendered, field_count) = process_response(&response, config.debug, config.json)
            .context("Response processing failed")?;

        Ok(LookupReport {
            address: ip.to_string(),
            rendered,
            field_count,
        })
    }
}
