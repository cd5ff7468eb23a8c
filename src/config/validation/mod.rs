//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `rank_validators`: Validators for the rank set and player assignments
//! - `tests`: Test suite for all validators

mod rank_validators;
mod trait_def;

pub use trait_def::Validate;
