//! Error types for Keyfront
//!
//! All failures surfaced by the facade are represented by the [`Error`] enum.
//! Errors are:
//! - **Structured**: each variant carries typed fields instead of a bare message
//! - **Comparable**: `Clone + PartialEq`, so tests can assert on exact variants
//! - **Passthrough**: driver and server errors are surfaced verbatim, never retried

use serde::{Deserialize, Serialize};

/// Result type alias for Keyfront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by every public Keyfront operation.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Connectivity | `Connection`, `Pool`, `Io` | Dial, auth, socket or checkout failure |
/// | Protocol | `Server` | Error reply from the store |
/// | Decoding | `WrongType`, `Serialization` | Reply or payload did not have the requested shape |
/// | Caller | `MissingIdentifier`, `InvalidConfig` | Misuse detected before reaching the store |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Connectivity ====================
    /// Dial, authentication, timeout or dropped connection
    #[error("connection error: {reason}")]
    Connection {
        /// Driver message
        reason: String,
    },

    /// The pool could not hand out a connection
    #[error("pool error: {reason}")]
    Pool {
        /// Pool message
        reason: String,
    },

    /// Local I/O failure (config files and the like)
    #[error("I/O error: {reason}")]
    Io {
        /// What failed and where
        reason: String,
    },

    // ==================== Protocol ====================
    /// Error reply from the store (malformed command, wrong arity, WRONGTYPE, ...)
    #[error("server error: {reason}")]
    Server {
        /// Leading error code of the reply (`ERR`, `WRONGTYPE`, ...)
        code: Option<String>,
        /// Full error text
        reason: String,
    },

    // ==================== Decoding ====================
    /// The reply could not be narrowed into the requested type
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Requested shape
        expected: String,
        /// Shape actually received
        actual: String,
    },

    /// Structured payload could not be encoded or decoded
    #[error("serialization error: {reason}")]
    Serialization {
        /// Encoder or decoder message
        reason: String,
    },

    // ==================== Caller ====================
    /// A structured operation needed a derived key but the object has no identifier
    #[error("missing identifier on {type_name}: pass an explicit key")]
    MissingIdentifier {
        /// Short name of the object's type
        type_name: String,
    },

    /// Construction-time configuration was rejected
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Which setting was rejected
        reason: String,
    },
}

impl Error {
    /// Shorthand for a decode mismatch
    pub fn wrong_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::WrongType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Whether the error originated from the network or the pool
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            Error::Connection { .. } | Error::Pool { .. } | Error::Io { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}
