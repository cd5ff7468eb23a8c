//! # rank-manager
//!
//! A permission hierarchy engine. Ranks are ordered by level; each rank grants and
//! negates permission strings explicitly and inherits everything from the ranks
//! below it. Players are assigned a single rank and permission checks resolve
//! against that rank's effective set.
//!
//! ```rust
//! use rank_manager::{DEFAULT_RANK_ID, Rank, RankManager, RankModification};
//!
//! # fn main() -> rank_manager::Result<()> {
//! let manager = RankManager::new([
//!     Rank::builder()
//!         .id(DEFAULT_RANK_ID)
//!         .level(0)
//!         .name("guest")
//!         .display_name("Guest")
//!         .chat_format("{player}: {message}")
//!         .permissions(["chat.send"])
//!         .build()?,
//!     Rank::builder()
//!         .id(1)
//!         .level(10)
//!         .name("moderator")
//!         .display_name("Moderator")
//!         .chat_format("[Mod] {player}: {message}")
//!         .permissions(["chat.mute"])
//!         .build()?,
//! ])?;
//!
//! manager.set_player("alice", 1)?;
//! assert!(manager.player_has_permission("alice", "chat.send"));
//!
//! manager.modify_rank(
//!     DEFAULT_RANK_ID,
//!     &RankModification::builder().removed_permissions(["chat.send"]).build(),
//! )?;
//! assert!(!manager.player_has_permission("alice", "chat.send"));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod ranks;
pub mod utils;

pub use config::Config;
pub use ranks::{
    DEFAULT_RANK_ID, Rank, RankBuilder, RankManager, RankModification, RankModificationBuilder,
    RankSnapshot,
};
pub use utils::error::{RankError, Result};
