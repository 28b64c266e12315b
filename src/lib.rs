//! Tablegate - SQL statement router for table/catalog backends
//!
//! Tablegate classifies SQL text into a fixed set of command kinds and
//! dispatches each command to a [`TableEnvironment`]. DDL-class commands are
//! serialized per router, `SET` keys are validated against a static option
//! registry, and introspective output goes to a caller-supplied
//! [`OutputSink`].
//!
//! # Quick Start
//!
//! ```
//! use tablegate::{CaptureSink, MemoryEnvironment, Params, Router};
//!
//! let router = Router::new();
//! let env = MemoryEnvironment::new();
//! let sink = CaptureSink::new();
//!
//! let params = Params::from_args(["--sql", "CREATE CATALOG lake; SHOW CATALOGS"]).unwrap();
//! router.execute(None, &params, &env, &sink).unwrap();
//!
//! assert_eq!(sink.lines(), vec!["catalogs: [default_catalog, lake]"]);
//! ```
//!
//! # Architecture
//!
//! All statements go through the [`Router`]. The execution backend is an
//! implementation of [`TableEnvironment`]; [`MemoryEnvironment`] is the
//! in-memory one shipped for tests and embedding.

// Re-export the public API from tablegate-executor
pub use tablegate_executor::*;
