//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and programmatic configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_API_URL, DEFAULT_KEY_FILE};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Lookup configuration.
///
/// Parsed from the command line in the binary, but constructible directly
/// (with `Default`) when using the library.
///
/// # Examples
///
/// ```no_run
/// use ipstack_lookup::Config;
///
/// let config = Config {
///     address: "2001:4860:4860::8888".to_string(),
///     full_geodata: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ipstack_lookup",
    version,
    about = "Query the ipstack API for the geodata of an IP address"
)]
pub struct Config {
    /// The IP address to query ipstack for (IPv4 or IPv6 literal)
    pub address: String,

    /// Path to a file containing your ipstack access key
    #[arg(short, long, env = "IPSTACK_KEY_FILE", default_value = DEFAULT_KEY_FILE)]
    pub key_file: PathBuf,

    /// Endpoint base URL for ipstack (useful for a mirror/mock)
    #[arg(short, long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable verbose diagnostics; without it, failures surface only the
    /// top-level error message
    #[arg(short, long)]
    pub debug: bool,

    /// Print the raw JSON body instead of one `key: value` line per field
    #[arg(short, long)]
    pub json: bool,

    /// Request all available geodata instead of only longitude and latitude
    #[arg(short, long)]
    pub full_geodata: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: String::new(),
            key_file: PathBuf::from(DEFAULT_KEY_FILE),
            api_url: DEFAULT_API_URL.to_string(),
            debug: false,
            json: false,
            full_geodata: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
