//! Execution backends for Tablegate
//!
//! This crate defines what the router needs from a table/catalog engine:
//! - TableEnvironment: the execution-context contract
//! - ConfigStore: the context's concurrency-safe configuration map
//! - MemoryEnvironment: an in-memory backend implementing the contract
//!
//! The router never owns an environment. It borrows one per call, and every
//! mutation it makes is visible to later calls on the same environment.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config_store;
pub mod context;
pub mod memory;

pub use config_store::ConfigStore;
pub use context::TableEnvironment;
pub use memory::{MemoryEnvironment, DEFAULT_CATALOG, DEFAULT_DATABASE, UNNAMED_TABLE_PREFIX};
