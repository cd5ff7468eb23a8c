//! A single rank and its effective-permission cache

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::builder::RankBuilder;
use super::modification::RankModification;

/// A named privilege level.
///
/// The id never changes. Everything else sits behind the rank's own lock, so
/// permission checks only contend with writes to this particular rank. Writes are
/// crate-private and only ever issued by the [`RankManager`](super::RankManager)
/// while it holds its registry lock.
#[derive(Debug)]
pub struct Rank {
    id: i32,
    state: RwLock<RankState>,
}

#[derive(Debug, Clone)]
pub(super) struct RankState {
    pub(super) level: i32,
    pub(super) name: String,
    pub(super) display_name: String,
    pub(super) chat_format: String,
    pub(super) granted_permissions: Vec<String>,
    pub(super) negated_permissions: Vec<String>,
    pub(super) effective_permissions: HashSet<String>,
}

/// Point-in-time copy of a rank, suitable for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSnapshot {
    pub id: i32,
    pub level: i32,
    pub name: String,
    pub display_name: String,
    pub chat_format: String,
    pub granted_permissions: Vec<String>,
    pub negated_permissions: Vec<String>,
    pub effective_permissions: BTreeSet<String>,
}

impl Rank {
    /// Start building a rank
    pub fn builder() -> RankBuilder {
        RankBuilder::default()
    }

    pub(super) fn from_state(id: i32, state: RankState) -> Self {
        Self {
            id,
            state: RwLock::new(state),
        }
    }

    /// Check the rank's effective permission set. Strings are compared exactly.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.state.read().effective_permissions.contains(permission)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn level(&self) -> i32 {
        self.state.read().level
    }

    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    pub fn display_name(&self) -> String {
        self.state.read().display_name.clone()
    }

    pub fn chat_format(&self) -> String {
        self.state.read().chat_format.clone()
    }

    /// Permissions granted explicitly on this rank
    pub fn granted_permissions(&self) -> Vec<String> {
        self.state.read().granted_permissions.clone()
    }

    /// Permissions negated explicitly on this rank
    pub fn negated_permissions(&self) -> Vec<String> {
        self.state.read().negated_permissions.clone()
    }

    /// Permissions the rank actually holds after inheritance
    pub fn effective_permissions(&self) -> HashSet<String> {
        self.state.read().effective_permissions.clone()
    }

    /// Copy every field under a single read lock
    pub fn snapshot(&self) -> RankSnapshot {
        let state = self.state.read();
        RankSnapshot {
            id: self.id,
            level: state.level,
            name: state.name.clone(),
            display_name: state.display_name.clone(),
            chat_format: state.chat_format.clone(),
            granted_permissions: state.granted_permissions.clone(),
            negated_permissions: state.negated_permissions.clone(),
            effective_permissions: state.effective_permissions.iter().cloned().collect(),
        }
    }

    /// Raw grant and negation lists, read together
    pub(super) fn permission_layer(&self) -> (Vec<String>, Vec<String>) {
        let state = self.state.read();
        (
            state.granted_permissions.clone(),
            state.negated_permissions.clone(),
        )
    }

    pub(super) fn apply_modification(&self, modification: &RankModification) {
        let mut state = self.state.write();

        if let Some(level) = modification.level() {
            state.level = level;
        }
        if let Some(name) = modification.name() {
            state.name = name.to_string();
        }
        if let Some(display_name) = modification.display_name() {
            state.display_name = display_name.to_string();
        }
        if let Some(chat_format) = modification.chat_format() {
            state.chat_format = chat_format.to_string();
        }

        let removed = modification.removed_permissions();
        state.granted_permissions.retain(|p| !removed.contains(p));
        state
            .granted_permissions
            .extend_from_slice(modification.added_permissions());

        let removed = modification.removed_negated_permissions();
        state.negated_permissions.retain(|p| !removed.contains(p));
        state
            .negated_permissions
            .extend_from_slice(modification.added_negated_permissions());
    }

    pub(super) fn reset_effective_permissions(&self, permissions: HashSet<String>) {
        self.state.write().effective_permissions = permissions;
    }
}
