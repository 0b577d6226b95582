//! Geodata requester: access-key handling, URL construction, and the single
//! GET against the ipstack endpoint.
//!
//! The requester performs no interpretation of the response; it hands the
//! captured status, content type, and body to the processor untouched.

mod response;

pub use response::{GeodataResponse, HttpGeodataResponse, StaticResponse};

use std::net::IpAddr;
use std::path::Path;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::config::{Config, LIMITED_FIELDS};
use crate::error_handling::LookupError;

/// Reads the access key from the given file.
///
/// The file's entire contents are used as-is; no trimming and no format
/// validation. The returned key must never appear in logs, debug echoes, or
/// error messages.
fn read_access_key(path: &Path) -> Result<String, LookupError> {
    std::fs::read_to_string(path).map_err(|source| LookupError::KeyFileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the query URL: `<endpoint><address>?access_key=<key>`, plus
/// `&fields=longitude,latitude` when `full_geodata` is false.
///
/// Query values are percent-encoded, so a key containing e.g. a trailing
/// newline still produces a well-formed URL.
pub fn build_query_url(
    api_url: &str,
    ip: IpAddr,
    access_key: &str,
    full_geodata: bool,
) -> Result<Url, LookupError> {
    let mut url = Url::parse(&format!("{api_url}{ip}"))
        .map_err(|_| LookupError::InvalidEndpoint(api_url.to_string()))?;

    url.query_pairs_mut().append_pair("access_key", access_key);
    if !full_geodata {
        url.query_pairs_mut().append_pair("fields", LIMITED_FIELDS);
    }

    Ok(url)
}

/// Issues the single GET against the configured endpoint.
///
/// No retry, no timeout override, and the client's default redirect policy.
/// The response body is drained eagerly; the raw status, content type, and
/// body text come back in an [`HttpGeodataResponse`] for the processor.
///
/// # Errors
///
/// - [`LookupError::KeyFileUnreadable`] if the key file cannot be read
/// - [`LookupError::InvalidEndpoint`] if the base URL does not parse
/// - [`LookupError::RequestFailed`] on connection or body-read failure
pub async fn request_geodata(
    client: &Client,
    config: &Config,
    ip: IpAddr,
) -> Result<HttpGeodataResponse, LookupError> {
    let access_key = read_access_key(&config.key_file)?;
    let url = build_query_url(&config.api_url, ip, &access_key, config.full_geodata)?;

    // The full URL carries the access key, so only the endpoint is logged.
    debug!("GET {} for address {}", config.api_url, ip);

    // reqwest errors embed the request URL, key included; strip it before
    // the error can reach any output path.
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::RequestFailed(e.without_url()))?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    let body = response
        .text()
        .await
        .map_err(|e| LookupError::RequestFailed(e.without_url()))?;

    Ok(HttpGeodataResponse {
        status,
        content_type,
        body,
    })
}
