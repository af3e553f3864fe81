//! podlens tool host — library crate.
//!
//! Re-exports config loading and the tool registry so the binary and
//! external crates (e.g. `pl-e2e-tests`) share one dispatch path.

pub mod config;
pub mod registry;
