//! Router End-to-End Tests
//!
//! Drives the public `tablegate` API with SQL scripts against the in-memory
//! environment.

#[path = "../common/mod.rs"]
mod common;

mod config_file;
mod scripts;
mod shared_router;
mod sinks;
