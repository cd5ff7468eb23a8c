//! Logging utilities
//!
//! The registry emits `tracing` events; this module provides the level type used in
//! configuration and the subscriber setup for binaries.

mod init;
mod types;

pub use init::init_logging;
pub use types::LogLevel;
