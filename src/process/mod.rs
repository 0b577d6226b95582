//! Response processor: shape checks and rendering.
//!
//! Checks run strictly in order (status, content type, body shape, required
//! fields); the first failure aborts with the matching [`LookupError`]. A
//! response that passes is rendered either as one `key: value` line per field
//! or as a raw JSON dump, preserving the body's native key order.

use log::warn;
use serde_json::{Map, Value};

use crate::config::EXPECTED_CONTENT_TYPE;
use crate::error_handling::LookupError;
use crate::geodata::GeodataResponse;

/// Required coordinate fields, checked independently and in this order.
const REQUIRED_FIELDS: [&str; 2] = ["longitude", "latitude"];

/// Validates a geodata response and renders it for stdout.
///
/// Returns the rendered output together with the number of fields in the
/// body. In debug mode a content-type mismatch is logged and tolerated, and
/// the offending headers/body are echoed before a failure; in silent mode a
/// mismatch is fatal and nothing beyond the error surfaces.
///
/// # Errors
///
/// - [`LookupError::UpstreamStatus`] on any status other than 200
/// - [`LookupError::UnexpectedContentType`] on a non-JSON content type
///   (silent mode only)
/// - [`LookupError::MalformedBody`] when the body is not a JSON object
/// - [`LookupError::MissingField`] when `longitude` or `latitude` is absent
pub fn process_response<R: GeodataResponse>(
    response: &R,
    debug: bool,
    raw: bool,
) -> Result<(String, usize), LookupError> {
    let status = response.status();
    if status != 200 {
        return Err(LookupError::UpstreamStatus(status));
    }

    let content_type = response.content_type();
    let declares_json = content_type
        .map(|ct| ct.contains(EXPECTED_CONTENT_TYPE))
        .unwrap_or(false);
    if !declares_json {
        if debug {
            // Tolerant in debug mode; the body check below still applies.
            println!("Headers::");
            println!("{}", content_type.unwrap_or("<no content-type header>"));
            warn!(
                "Content type {:?} is not {}, parsing body anyway",
                content_type, EXPECTED_CONTENT_TYPE
            );
        } else {
            return Err(LookupError::UnexpectedContentType(
                content_type.map(String::from),
            ));
        }
    }

    // Deserializing straight into a map rejects arrays and bare scalars with
    // the same error path as unparseable text.
    let body: Map<String, Value> = match serde_json::from_str(response.body()) {
        Ok(body) => body,
        Err(e) => {
            if debug {
                println!("Body::");
                println!("{}", response.body());
            }
            return Err(LookupError::MalformedBody(e));
        }
    };

    for field in REQUIRED_FIELDS {
        if !body.contains_key(field) {
            if debug {
                println!("JSON::");
                println!("{}", Value::Object(body.clone()));
            }
            return Err(LookupError::MissingField(field));
        }
    }

    let field_count = body.len();
    let rendered = if raw {
        format!("{}\n", Value::Object(body))
    } else {
        render_plain(&body)
    };

    Ok((rendered, field_count))
}

/// Renders one `key: value` line per field, in the body's native key order.
///
/// Strings render unquoted; other scalars keep their JSON form.
fn render_plain(body: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (key, value) in body {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&rendered);
        out.push('\n');
    }
    out
}
