//! Core types for Tablegate
//!
//! This crate defines the foundational types shared by the router and its
//! backends:
//! - Command / CommandKind: classified SQL statements
//! - SqlDialect, TableSchema, StatementResult: values exchanged with a backend
//! - ConfigOption / OptionSource: the static configuration option catalogs
//! - EngineError: failures surfaced by an execution backend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod options;
pub mod types;

pub use command::{Command, CommandCategory, CommandKind};
pub use error::{EngineError, EngineResult};
pub use options::{ConfigOption, OptionSource, OptionType, BUILTIN_SOURCES, SQL_DIALECT_KEY};
pub use types::{SchemaField, SqlDialect, StatementResult, TableSchema};
