//! Error handling: error types and the failure taxonomy.
//!
//! All fallible paths in the pipeline surface a [`LookupError`]; the
//! [`ErrorKind`] taxonomy groups the variants into the categories a caller
//! (or an exit-status mapping) cares about.

mod types;

pub use types::{ErrorKind, InitializationError, LookupError};
