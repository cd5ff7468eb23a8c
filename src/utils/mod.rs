//! Utility modules
//!
//! - **error**: Error type shared across the crate
//! - **logging**: Log level configuration and subscriber setup

pub mod error;
pub mod logging;

pub use error::{RankError, Result};
pub use logging::{LogLevel, init_logging};
