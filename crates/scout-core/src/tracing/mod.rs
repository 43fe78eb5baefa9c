//! Observability for Scout.
//! `tracing` crate with `EnvFilter`, per-subsystem log levels.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_filter};
