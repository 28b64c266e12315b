//! # Tablegate Executor
//!
//! The SQL statement router. It turns SQL text into classified commands and
//! dispatches each one to a [`TableEnvironment`]:
//! - [`Router`] - the single entry point
//! - [`OptionRegistry`] - configuration keys accepted by `SET`
//! - [`PatternClassifier`] - the default [`StatementClassifier`]
//! - [`OutputSink`] - where `SHOW` / `DESCRIBE` / `EXPLAIN` output goes
//!
//! ## Quick Start
//!
//! ```
//! use tablegate_executor::{CaptureSink, MemoryEnvironment, Router, TableEnvironment};
//!
//! let router = Router::new();
//! let env = MemoryEnvironment::new();
//! let sink = CaptureSink::new();
//!
//! router
//!     .execute_sql("CREATE DATABASE db1; USE db1; SHOW CURRENT DATABASE", &env, &sink)
//!     .unwrap();
//!
//! assert_eq!(env.current_database().unwrap(), "db1");
//! assert_eq!(sink.lines(), vec!["current database: db1"]);
//! ```
//!
//! ## Command Handling
//!
//! | Category | Commands | Behavior |
//! |----------|----------|----------|
//! | Introspective | `USE`, `SHOW *`, `DESC`, `EXPLAIN` | query the backend, output through the sink |
//! | Mutating | `INSERT`, `CREATE/DROP/ALTER *` | run under the router's mutation lock |
//! | Config | `SET`, `RESET` | validated against the option registry |
//! | Unsupported | `SELECT`, unrecognized text | rejected |

#![warn(missing_docs)]

mod config;
mod convert;
mod error;
mod executor;
mod lock;
mod params;
mod parser;
mod registry;
mod sink;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use config::{RouterConfig, CONFIG_FILE_NAME};
pub use error::{Error, ErrorKind};
pub use executor::Router;
pub use lock::{MutationGuard, MutationLock};
pub use params::Params;
pub use parser::{split_statements, PatternClassifier, StatementClassifier};
pub use registry::OptionRegistry;
pub use sink::{CaptureSink, OutputSink, StdoutSink};

// Re-export core and engine types so users don't need those crates directly
pub use tablegate_core::{
    Command, CommandCategory, CommandKind, ConfigOption, EngineError, OptionSource, OptionType,
    SqlDialect, StatementResult, TableSchema, BUILTIN_SOURCES, SQL_DIALECT_KEY,
};
pub use tablegate_engine::{ConfigStore, MemoryEnvironment, TableEnvironment};

/// Result type for router operations
pub type Result<T> = std::result::Result<T, Error>;
