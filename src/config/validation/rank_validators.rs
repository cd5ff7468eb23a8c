//! Rank set validators
//!
//! Mirrors the checks the registry performs at construction so that a bad
//! configuration is reported with a readable message before any rank is built.

use super::trait_def::Validate;
use crate::config::Config;
use crate::config::models::*;
use crate::ranks::DEFAULT_RANK_ID;
use std::collections::HashSet;
use tracing::debug;

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating rank configuration");

        if self.ranks.is_empty() {
            return Err("At least one rank must be configured".to_string());
        }

        if !self.ranks.iter().any(|r| r.id == DEFAULT_RANK_ID) {
            return Err(format!(
                "Ranks list does not contain a default rank (id {})",
                DEFAULT_RANK_ID
            ));
        }

        let mut ids = HashSet::new();
        let mut levels = HashSet::new();
        for rank in &self.ranks {
            if !ids.insert(rank.id) {
                return Err(format!("Duplicate rank id: {}", rank.id));
            }
            if !levels.insert(rank.level) {
                return Err(format!("Duplicate rank level: {}", rank.level));
            }
            rank.validate()?;
        }

        for (player, rank_id) in &self.players {
            if player.is_empty() {
                return Err("Player name cannot be empty".to_string());
            }
            if !ids.contains(rank_id) {
                return Err(format!(
                    "Player {} is assigned to unknown rank {}",
                    player, rank_id
                ));
            }
        }

        debug!("Rank configuration validation completed");
        Ok(())
    }
}

impl Validate for RankConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("Rank {} must have a name", self.id));
        }

        if let Some(permission) = self
            .permissions
            .iter()
            .chain(&self.negated_permissions)
            .find(|p| p.trim().is_empty())
        {
            return Err(format!(
                "Rank {} has a blank permission entry {:?}",
                self.id, permission
            ));
        }

        Ok(())
    }
}
