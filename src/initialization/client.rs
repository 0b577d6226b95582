//! HTTP client initialization.

use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the geodata request.
///
/// The client is deliberately plain: no timeout override, no retry layer,
/// and the default redirect policy. Only the User-Agent is set, so the
/// request identifies this tool rather than a bare library default.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;
    Ok(client)
}
