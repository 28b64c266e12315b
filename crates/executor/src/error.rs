//! Error types for statement routing.
//!
//! All errors from [`Router`](crate::Router) calls are represented by the
//! [`Error`] enum. Every variant belongs to exactly one [`ErrorKind`]:
//!
//! | Kind | Variants | Description |
//! |------|----------|-------------|
//! | Validation | `MissingSql`, `MissingOperand`, `InvalidConfigKey`, `InvalidInput`, `Config` | Caller supplied bad input |
//! | Unsupported | `UnsupportedCommand`, `UnrecognizedStatement` | Statement is not routed here |
//! | Backend | `Backend` | The execution backend failed |
//!
//! An error aborts the remaining commands of the call. Commands that already
//! ran are not rolled back.

use serde::{Deserialize, Serialize};

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Missing SQL, missing operand, unknown configuration key, bad value
    Validation,
    /// `SELECT` or a statement the router does not recognize
    Unsupported,
    /// Failure surfaced by the execution backend
    Backend,
}

/// Statement routing errors.
///
/// # Example
///
/// ```
/// use tablegate_executor::{CaptureSink, Error, ErrorKind, MemoryEnvironment, Router};
///
/// let router = Router::new();
/// let env = MemoryEnvironment::new();
/// let err = router
///     .execute_sql("SET no.such.key = 1", &env, &CaptureSink::new())
///     .unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert!(matches!(err, Error::InvalidConfigKey { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation ====================
    /// No usable SQL text under the parameter key
    #[error("no SQL text found under parameter '{key}'")]
    MissingSql {
        /// Parameter key that was looked up
        key: String,
    },

    /// Command lacks a required operand
    #[error("{command} requires operand {index}")]
    MissingOperand {
        /// Command keyword form
        command: String,
        /// Zero-based index of the first missing operand
        index: usize,
    },

    /// `SET` named a key that no option source declares
    #[error("invalid configuration key: {key}")]
    InvalidConfigKey {
        /// The rejected key
        key: String,
    },

    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with it
        reason: String,
    },

    /// Router configuration could not be read or parsed
    #[error("configuration error: {reason}")]
    Config {
        /// Description
        reason: String,
    },

    // ==================== Unsupported ====================
    /// Recognized command the router refuses to run
    #[error("unsupported command {command}: {reason}")]
    UnsupportedCommand {
        /// Command keyword form
        command: String,
        /// Why it is refused
        reason: String,
    },

    /// Text that matched no known statement shape
    #[error("unrecognized statement: {statement}")]
    UnrecognizedStatement {
        /// The statement text
        statement: String,
    },

    // ==================== Backend ====================
    /// The execution backend failed
    #[error("backend error: {reason}")]
    Backend {
        /// Backend error message
        reason: String,
    },
}

impl Error {
    /// Which of the three error classes this belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingSql { .. }
            | Error::MissingOperand { .. }
            | Error::InvalidConfigKey { .. }
            | Error::InvalidInput { .. }
            | Error::Config { .. } => ErrorKind::Validation,
            Error::UnsupportedCommand { .. } | Error::UnrecognizedStatement { .. } => {
                ErrorKind::Unsupported
            }
            Error::Backend { .. } => ErrorKind::Backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            Error::MissingSql { key: "sql".into() }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::MissingOperand {
                command: "USE".into(),
                index: 0
            }
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::InvalidConfigKey { key: "x".into() }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::UnsupportedCommand {
                command: "SELECT".into(),
                reason: "r".into()
            }
            .kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(
            Error::UnrecognizedStatement {
                statement: "FOO".into()
            }
            .kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(
            Error::Backend { reason: "r".into() }.kind(),
            ErrorKind::Backend
        );
    }

    #[test]
    fn display() {
        let err = Error::MissingOperand {
            command: "USE CATALOG".into(),
            index: 0,
        };
        assert_eq!(err.to_string(), "USE CATALOG requires operand 0");
        let err = Error::InvalidConfigKey {
            key: "foo.bar".into(),
        };
        assert_eq!(err.to_string(), "invalid configuration key: foo.bar");
    }

    #[test]
    fn serializes_with_variant_tag() {
        let err = Error::MissingSql { key: "sql".into() };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"MissingSql": {"key": "sql"}}));
        let back: Error = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
