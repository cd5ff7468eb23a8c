//! Rank definitions

use crate::ranks::Rank;
use crate::utils::error::RankError;
use serde::{Deserialize, Serialize};

/// A rank as declared in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    pub id: i32,
    pub level: i32,
    pub name: String,
    pub display_name: String,
    pub chat_format: String,
    /// Explicitly granted permissions
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Explicitly negated permissions
    #[serde(default)]
    pub negated_permissions: Vec<String>,
}

impl TryFrom<&RankConfig> for Rank {
    type Error = RankError;

    fn try_from(config: &RankConfig) -> Result<Self, Self::Error> {
        Rank::builder()
            .id(config.id)
            .level(config.level)
            .name(&config.name)
            .display_name(&config.display_name)
            .chat_format(&config.chat_format)
            .permissions(&config.permissions)
            .negated_permissions(&config.negated_permissions)
            .build()
    }
}
