//! Test fixtures and data factories

use rank_manager::{DEFAULT_RANK_ID, Rank, RankManager};

/// Factory for creating test ranks
pub struct RankFactory;

impl RankFactory {
    /// A rank with placeholder display fields and no permissions
    pub fn create(id: i32, level: i32) -> Rank {
        Self::with_permissions(id, level, &[], &[])
    }

    /// A rank with explicit grants and negations
    pub fn with_permissions(id: i32, level: i32, granted: &[&str], negated: &[&str]) -> Rank {
        Rank::builder()
            .id(id)
            .level(level)
            .name(format!("rank{}", id))
            .display_name(format!("Rank {}", id))
            .chat_format(format!("[{}] {{player}}: {{message}}", id))
            .permissions(granted.iter().copied())
            .negated_permissions(negated.iter().copied())
            .build()
            .expect("all required fields are set")
    }

    /// The three-rank hierarchy used throughout the suite: levels 2, 5 and 100
    pub fn sample_manager() -> RankManager {
        RankManager::new([
            Self::with_permissions(
                1,
                5,
                &["a.b.c", "a.*", "a.b", "a.b.c.d.e"],
                &["a.b.c.d", "a.b.c"],
            ),
            Self::with_permissions(DEFAULT_RANK_ID, 2, &["a"], &["a.b.c.d.e"]),
            Self::with_permissions(3, 100, &[], &["a.*"]),
        ])
        .expect("sample hierarchy is valid")
    }
}
