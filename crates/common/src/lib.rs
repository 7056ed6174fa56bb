//! Shared utilities for the PaaS CLI workspace.
//!
//! - [`telemetry`]: tracing subscriber setup and structured logging macros

pub mod telemetry;

pub use telemetry::init_tracing;
