//! Error types for typson
//!
//! Encoding and decoding fail fast: the first problem found surfaces to the
//! caller and no partial output is produced.
//!
//! - **UnsupportedKind**: the encoder met a value outside the kind catalog
//!   (a host object with a class-instance shape, or a function while functions
//!   are neither ignored nor embedded)
//! - **MalformedEnvelope**: the decoder met a recognized tag whose payload has
//!   the wrong shape
//!
//! Both carry the access path from the root (`$.items[3].handler`) so a problem
//! deep inside a nested structure can be located.
//!
//! An *unknown* envelope tag is never an error. It decodes as a plain record,
//! which lets data written by a newer producer degrade gracefully.
//!
//! # Examples
//!
//! ```rust
//! use typson_core::{serialize, Error, Value};
//!
//! let value = Value::record([("handler", Value::function("() => {}"))]);
//! match serialize(&value) {
//!     Err(Error::UnsupportedKind { description, path }) => {
//!         assert_eq!(description, "Function");
//!         assert_eq!(path, "$.handler");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use crate::kind::Kind;
use thiserror::Error;

/// Result type for typson operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for typson operations
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A value whose kind is not in the catalog was encoded
    #[error("{description} can't be serialized (at {path})")]
    UnsupportedKind {
        /// Human-readable description of the offending value
        description: String,
        /// Access path from the root
        path: String,
    },

    /// A recognized envelope tag carried a payload of the wrong shape
    #[error("malformed {kind} envelope at {path}: {reason}")]
    MalformedEnvelope {
        /// Kind named by the envelope tag
        kind: Kind,
        /// What was wrong with the payload
        reason: String,
        /// Access path from the root
        path: String,
    },

    /// A value constructor rejected its input
    ///
    /// Raised by constructors such as `RegExp::new` and `DataView::new`. The
    /// decoder reports these as `MalformedEnvelope` instead.
    #[error("invalid {kind} value: {reason}")]
    InvalidValue { kind: Kind, reason: String },

    /// A function without a host callable was invoked
    #[error("function is not callable: {0}")]
    NotCallable(String),

    /// JSON text could not be produced or parsed
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    pub(crate) fn invalid(kind: Kind, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            kind,
            reason: reason.into(),
        }
    }

    /// Access path of the offending value, when the error carries one
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::UnsupportedKind { path, .. } | Error::MalformedEnvelope { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// Whether this is a payload-shape error for a recognized envelope
    pub fn is_malformed_envelope(&self) -> bool {
        matches!(self, Error::MalformedEnvelope { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
