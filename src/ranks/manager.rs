//! Rank registry and permission recalculation

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::inheritance::{PermissionLayer, cumulative_permissions};
use super::modification::RankModification;
use super::rank::Rank;
use crate::config::{Config, Validate};
use crate::utils::error::{RankError, Result};

/// Id of the rank every unassigned player falls back to. It can never be removed.
pub const DEFAULT_RANK_ID: i32 = -2;

/// Registry of ranks and player assignments.
///
/// Every mutation holds the registry lock exclusively until the effective
/// permissions of all ranks have been recalculated, so a reader that takes the
/// lock after a mutation returns never sees a stale cache. Permission checks on a
/// [`Rank`] handle bypass the registry lock entirely.
#[derive(Debug)]
pub struct RankManager {
    registry: RwLock<RankRegistry>,
}

#[derive(Debug)]
struct RankRegistry {
    /// Ascending by level
    ranks_by_level: Vec<Arc<Rank>>,
    ranks_by_id: HashMap<i32, Arc<Rank>>,
    /// Player -> rank id
    players_ranks: HashMap<String, i32>,
}

impl RankRegistry {
    fn level_taken(&self, level: i32) -> bool {
        self.ranks_by_level.iter().any(|r| r.level() == level)
    }

    /// Insert keeping `ranks_by_level` sorted
    fn insert_sorted(&mut self, rank: Arc<Rank>) {
        let level = rank.level();
        let index = self
            .ranks_by_level
            .iter()
            .filter(|r| r.level() < level)
            .count();
        self.ranks_by_level.insert(index, rank);
    }

    fn default_rank(&self) -> Arc<Rank> {
        // The default rank is checked at construction and can never be removed
        Arc::clone(&self.ranks_by_id[&DEFAULT_RANK_ID])
    }

    fn rank_of_player(&self, player: &str) -> Option<Arc<Rank>> {
        self.players_ranks
            .get(player)
            .and_then(|id| self.ranks_by_id.get(id))
            .cloned()
    }

    fn recalculate(&self) {
        let layers: Vec<(Vec<String>, Vec<String>)> = self
            .ranks_by_level
            .iter()
            .map(|r| r.permission_layer())
            .collect();

        let effective = cumulative_permissions(
            layers
                .iter()
                .map(|(granted, negated)| PermissionLayer::new(granted, negated)),
        );

        for (rank, permissions) in self.ranks_by_level.iter().zip(effective) {
            rank.reset_effective_permissions(permissions);
        }

        debug!(
            "Recalculated effective permissions for {} ranks",
            self.ranks_by_level.len()
        );
    }
}

impl RankManager {
    /// Create a registry from an initial set of ranks.
    ///
    /// Fails if no rank carries [`DEFAULT_RANK_ID`] or if two ranks share an id or
    /// a level.
    pub fn new<I>(ranks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut ranks: Vec<Arc<Rank>> = ranks.into_iter().map(Arc::new).collect();

        if !ranks.iter().any(|r| r.id() == DEFAULT_RANK_ID) {
            warn!("Rejected rank set without a default rank");
            return Err(RankError::MissingDefaultRank(DEFAULT_RANK_ID));
        }

        let mut ranks_by_id = HashMap::with_capacity(ranks.len());
        let mut levels = HashSet::with_capacity(ranks.len());
        for rank in &ranks {
            if ranks_by_id.insert(rank.id(), Arc::clone(rank)).is_some() {
                return Err(RankError::DuplicateId(rank.id()));
            }
            if !levels.insert(rank.level()) {
                return Err(RankError::DuplicateLevel(rank.level()));
            }
        }

        ranks.sort_by_key(|r| r.level());

        let registry = RankRegistry {
            ranks_by_level: ranks,
            ranks_by_id,
            players_ranks: HashMap::new(),
        };
        registry.recalculate();

        info!(
            "Rank manager initialized with {} ranks",
            registry.ranks_by_level.len()
        );
        Ok(Self {
            registry: RwLock::new(registry),
        })
    }

    /// Create a registry from configuration, including initial player assignments
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(RankError::validation)?;

        let ranks = config
            .ranks
            .iter()
            .map(Rank::try_from)
            .collect::<Result<Vec<_>>>()?;

        let manager = Self::new(ranks)?;
        for (player, rank_id) in &config.players {
            manager.set_player(player, *rank_id)?;
        }

        Ok(manager)
    }

    /// Register a new rank and return a handle to it
    pub fn add_rank(&self, rank: Rank) -> Result<Arc<Rank>> {
        let mut registry = self.registry.write();

        if registry.ranks_by_id.contains_key(&rank.id()) {
            warn!("Rejected rank {}: id already exists", rank.id());
            return Err(RankError::DuplicateId(rank.id()));
        }
        if registry.level_taken(rank.level()) {
            warn!("Rejected rank {}: level {} already exists", rank.id(), rank.level());
            return Err(RankError::DuplicateLevel(rank.level()));
        }

        let rank = Arc::new(rank);
        registry.insert_sorted(Arc::clone(&rank));
        registry.ranks_by_id.insert(rank.id(), Arc::clone(&rank));
        registry.recalculate();

        debug!("Added rank {} at level {}", rank.id(), rank.level());
        Ok(rank)
    }

    /// Remove a rank; players holding it fall back to the default rank
    pub fn remove_rank(&self, rank_id: i32) -> Result<()> {
        let mut registry = self.registry.write();

        if !registry.ranks_by_id.contains_key(&rank_id) {
            warn!("Rejected removal of unknown rank {}", rank_id);
            return Err(RankError::UnknownRank(rank_id));
        }
        if rank_id == DEFAULT_RANK_ID {
            warn!("Rejected removal of the default rank");
            return Err(RankError::DefaultRankRemoval);
        }

        registry.ranks_by_level.retain(|r| r.id() != rank_id);
        registry.ranks_by_id.remove(&rank_id);

        let mut reassigned = 0usize;
        for assigned in registry.players_ranks.values_mut() {
            if *assigned == rank_id {
                *assigned = DEFAULT_RANK_ID;
                reassigned += 1;
            }
        }

        registry.recalculate();

        debug!(
            "Removed rank {}, {} players moved to the default rank",
            rank_id, reassigned
        );
        Ok(())
    }

    /// Apply a modification to a rank in place.
    ///
    /// Resubmitting the rank's current level is allowed; any other level already
    /// in use is rejected before the rank is touched.
    pub fn modify_rank(&self, rank_id: i32, modification: &RankModification) -> Result<()> {
        let mut registry = self.registry.write();

        let rank = registry
            .ranks_by_id
            .get(&rank_id)
            .cloned()
            .ok_or(RankError::UnknownRank(rank_id))?;

        if let Some(new_level) = modification.level() {
            if new_level != rank.level() && registry.level_taken(new_level) {
                warn!(
                    "Rejected modification of rank {}: level {} already exists",
                    rank_id, new_level
                );
                return Err(RankError::DuplicateLevel(new_level));
            }
        }

        rank.apply_modification(modification);

        registry.ranks_by_level.retain(|r| r.id() != rank_id);
        registry.insert_sorted(rank);
        registry.recalculate();

        debug!("Modified rank {}", rank_id);
        Ok(())
    }

    /// Assign a player to a rank, replacing any previous assignment
    pub fn set_player(&self, player: &str, rank_id: i32) -> Result<()> {
        let mut registry = self.registry.write();

        if !registry.ranks_by_id.contains_key(&rank_id) {
            warn!("Rejected assignment of {} to unknown rank {}", player, rank_id);
            return Err(RankError::UnknownRank(rank_id));
        }

        registry.players_ranks.insert(player.to_string(), rank_id);
        debug!("Assigned {} to rank {}", player, rank_id);
        Ok(())
    }

    /// Forget a player's assignment. Unknown players are ignored.
    pub fn remove_player(&self, player: &str) {
        let mut registry = self.registry.write();
        if registry.players_ranks.remove(player).is_some() {
            debug!("Removed rank assignment of {}", player);
        }
    }

    /// Rank explicitly assigned to a player
    pub fn rank_by_player(&self, player: &str) -> Option<Arc<Rank>> {
        self.registry.read().rank_of_player(player)
    }

    pub fn rank_by_id(&self, rank_id: i32) -> Option<Arc<Rank>> {
        self.registry.read().ranks_by_id.get(&rank_id).cloned()
    }

    /// All ranks, ascending by level
    pub fn ranks(&self) -> Vec<Arc<Rank>> {
        self.registry.read().ranks_by_level.clone()
    }

    pub fn default_rank(&self) -> Arc<Rank> {
        self.registry.read().default_rank()
    }

    pub fn rank_count(&self) -> usize {
        self.registry.read().ranks_by_level.len()
    }

    /// Players assigned to a rank, sorted by name
    pub fn players_with_rank(&self, rank_id: i32) -> Vec<String> {
        let registry = self.registry.read();
        let mut players: Vec<String> = registry
            .players_ranks
            .iter()
            .filter(|(_, id)| **id == rank_id)
            .map(|(player, _)| player.clone())
            .collect();
        players.sort();
        players
    }

    /// Check a permission for a player. Players without an assignment are
    /// checked against the default rank.
    pub fn player_has_permission(&self, player: &str, permission: &str) -> bool {
        let rank = {
            let registry = self.registry.read();
            registry
                .rank_of_player(player)
                .unwrap_or_else(|| registry.default_rank())
        };
        rank.has_permission(permission)
    }
}
