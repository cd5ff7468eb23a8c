//! Rank hierarchy
//!
//! Ranks are ordered by level. Every rank inherits the effective permissions of all
//! lower-level ranks, adds its own grants and drops its own negations. The
//! [`RankManager`] owns the ranks, the player assignments and the recalculation that
//! keeps every rank's effective set current.

mod builder;
pub mod inheritance;
mod manager;
mod modification;
mod rank;

pub use builder::RankBuilder;
pub use manager::{DEFAULT_RANK_ID, RankManager};
pub use modification::{RankModification, RankModificationBuilder};
pub use rank::{Rank, RankSnapshot};
