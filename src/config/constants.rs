//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: the
//! access-key file location, the ipstack endpoint, and the field filter
//! applied when only coordinates are requested.

/// Default path to the file holding the ipstack access key.
///
/// Can be overridden via the `--key-file` flag or the `IPSTACK_KEY_FILE`
/// environment variable (a `.env` file is honored).
pub const DEFAULT_KEY_FILE: &str = "./credentials/.key";

/// Default ipstack endpoint base URL.
///
/// Overridable via `--api-url`, which is useful for pointing at a mirror or a
/// mock server in tests. The target address is appended directly to this
/// base, so it must end with a slash.
pub const DEFAULT_API_URL: &str = "http://api.ipstack.com/";

/// Field filter requested from the API when full geodata is not wanted.
///
/// ipstack applies this server side via the `fields` query parameter, so a
/// limited query returns only the coordinate pair.
pub const LIMITED_FIELDS: &str = "longitude,latitude";

/// Content type expected on a well-formed API response.
pub const EXPECTED_CONTENT_TYPE: &str = "application/json";
