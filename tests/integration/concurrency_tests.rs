//! Concurrency integration tests
//!
//! Readers and writers share one registry across threads.

#[cfg(test)]
mod tests {
    use crate::common::{RankFactory, assert_registry_invariants};
    use rank_manager::{DEFAULT_RANK_ID, RankManager, RankModification};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_types_are_thread_safe() {
        assert_send_sync::<RankManager>();
        assert_send_sync::<rank_manager::Rank>();
    }

    /// Test that permission checks keep working while ranks are churned
    #[test]
    fn test_reads_during_mutations() {
        let manager = Arc::new(RankFactory::sample_manager());
        let stop = Arc::new(AtomicBool::new(false));
        let default_rank = manager.default_rank();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let manager = Arc::clone(&manager);
                let stop = Arc::clone(&stop);
                let default_rank = Arc::clone(&default_rank);
                thread::spawn(move || {
                    let mut checks = 0usize;
                    while !stop.load(Ordering::Relaxed) {
                        // the writer never changes its effective set
                        assert!(default_rank.has_permission("a"));
                        assert!(manager.player_has_permission("unassigned", "a"));
                        let _ = manager.ranks();
                        checks += 1;
                    }
                    checks
                })
            })
            .collect();

        let writer = {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for i in 0..200 {
                    let id = 1000 + i;
                    manager
                        .add_rank(RankFactory::with_permissions(id, 1000 + i, &["tmp"], &[]))
                        .unwrap();
                    manager.set_player(&format!("player{}", i), id).unwrap();
                    manager
                        .modify_rank(
                            id,
                            &RankModification::builder()
                                .added_negated_permissions(["a.b"])
                                .build(),
                        )
                        .unwrap();
                    if i % 2 == 0 {
                        manager.remove_rank(id).unwrap();
                    }
                }
            })
        };

        writer.join().unwrap();
        stop.store(true, Ordering::Relaxed);
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(manager.rank_count(), 3 + 100);
        assert_eq!(manager.rank_by_player("player0").unwrap().id(), DEFAULT_RANK_ID);
        assert_eq!(manager.rank_by_player("player1").unwrap().id(), 1001);

        let players: Vec<String> = (0..200).map(|i| format!("player{}", i)).collect();
        let players: Vec<&str> = players.iter().map(String::as_str).collect();
        assert_registry_invariants(&manager, &players);
    }

    /// Test that concurrent writers never break uniqueness
    #[test]
    fn test_concurrent_writers_keep_levels_unique() {
        let manager = Arc::new(RankFactory::sample_manager());

        let writers: Vec<_> = (0..8)
            .map(|t| {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    let mut added = 0i32;
                    for i in 0..50 {
                        // writers race for the same levels
                        let id = 10_000 + t * 100 + i;
                        if manager.add_rank(RankFactory::create(id, 200 + i)).is_ok() {
                            added += 1;
                        }
                    }
                    added
                })
            })
            .collect();

        let added: i32 = writers.into_iter().map(|w| w.join().unwrap()).sum();

        assert_eq!(added, 50);
        assert_eq!(manager.rank_count(), 3 + 50);
        assert_registry_invariants(&manager, &[]);
    }
}
