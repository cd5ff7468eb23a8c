//! Custom assertions for registry state

use rank_manager::{DEFAULT_RANK_ID, RankManager};
use std::collections::HashSet;

/// Check every invariant observable through the public API
pub fn assert_registry_invariants(manager: &RankManager, players: &[&str]) {
    let ranks = manager.ranks();

    let ids: HashSet<i32> = ranks.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), ranks.len(), "rank ids must be unique");
    assert!(ids.contains(&DEFAULT_RANK_ID), "default rank must exist");

    let levels: Vec<i32> = ranks.iter().map(|r| r.level()).collect();
    assert!(
        levels.windows(2).all(|w| w[0] < w[1]),
        "levels must be strictly ascending: {:?}",
        levels
    );

    for rank in &ranks {
        let indexed = manager.rank_by_id(rank.id()).expect("listed rank is indexed");
        assert_eq!(indexed.level(), rank.level());
    }

    for player in players {
        if let Some(rank) = manager.rank_by_player(player) {
            assert!(ids.contains(&rank.id()), "player {} has a dangling rank", player);
        }
    }

    let mut inherited: HashSet<String> = HashSet::new();
    for rank in &ranks {
        inherited.extend(rank.granted_permissions());
        for negated in rank.negated_permissions() {
            inherited.remove(&negated);
        }
        assert_eq!(
            rank.effective_permissions(),
            inherited,
            "effective permissions of rank {} are stale",
            rank.id()
        );
    }
}
