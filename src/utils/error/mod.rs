//! Error handling for the rank registry
//!
//! This module defines the error type shared by the registry, the builders and the
//! configuration loader.

mod helpers;
mod types;

pub use types::{RankError, Result};
