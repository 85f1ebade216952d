//! Structured logging via `tracing`.
//!
//! Engine code emits `tracing` events and spans (`handle_event`, search
//! filtering, overlay transitions). This module installs the subscriber that
//! prints them.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
