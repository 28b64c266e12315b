//! Error types for execution backends
//!
//! Every failure a `TableEnvironment` implementation can surface is an
//! [`EngineError`]. The router maps these into its own taxonomy; backends
//! never need to know about it.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for backend operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Error types for the table/catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Catalog does not exist
    #[error("catalog not found: {catalog}")]
    CatalogNotFound {
        /// Catalog name as given by the caller
        catalog: String,
    },

    /// Database does not exist in the current catalog
    #[error("database not found: {database}")]
    DatabaseNotFound {
        /// Database name as given by the caller
        database: String,
    },

    /// Table or view does not exist
    #[error("table not found: {table}")]
    TableNotFound {
        /// Table path as given by the caller
        table: String,
    },

    /// User-defined function does not exist
    #[error("function not found: {function}")]
    FunctionNotFound {
        /// Function name as given by the caller
        function: String,
    },

    /// Object already exists and the statement did not say IF NOT EXISTS
    #[error("{object} already exists: {name}")]
    AlreadyExists {
        /// Object kind ("catalog", "database", "table", ...)
        object: &'static str,
        /// Object name
        name: String,
    },

    /// Statement was recognized but is malformed
    #[error("invalid statement: {reason}")]
    InvalidStatement {
        /// What was wrong with it
        reason: String,
    },

    /// Statement is not something this backend can execute
    #[error("unsupported statement: {statement}")]
    UnsupportedStatement {
        /// The offending statement text
        statement: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidStatement`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidStatement {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`EngineError::Internal`].
    pub fn internal(reason: impl Into<String>) -> Self {
        EngineError::Internal {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = EngineError::TableNotFound {
            table: "orders".to_string(),
        };
        assert_eq!(err.to_string(), "table not found: orders");
    }

    #[test]
    fn test_error_display_already_exists() {
        let err = EngineError::AlreadyExists {
            object: "database",
            name: "db1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("database already exists"));
        assert!(msg.contains("db1"));
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(
            EngineError::invalid("bad"),
            EngineError::InvalidStatement {
                reason: "bad".to_string()
            }
        );
        assert!(EngineError::internal("boom").to_string().contains("boom"));
    }
}
