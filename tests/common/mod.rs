//! Common test utilities for rank-manager

pub mod assertions;
pub mod fixtures;

pub use assertions::assert_registry_invariants;
pub use fixtures::RankFactory;
