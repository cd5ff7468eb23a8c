//! Configuration data models

pub mod logging;
pub mod rank;

pub use logging::*;
pub use rank::*;
