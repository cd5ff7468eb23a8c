//! Rank builder

use super::rank::{Rank, RankState};
use crate::utils::error::{RankError, Result};
use std::collections::HashSet;

/// Builder for [`Rank`].
///
/// `id`, `level`, `name`, `display_name` and `chat_format` are required; both
/// permission lists default to empty.
#[derive(Debug, Clone, Default)]
pub struct RankBuilder {
    id: Option<i32>,
    level: Option<i32>,
    name: Option<String>,
    display_name: Option<String>,
    chat_format: Option<String>,
    permissions: Vec<String>,
    negated_permissions: Vec<String>,
}

impl RankBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn chat_format(mut self, chat_format: impl Into<String>) -> Self {
        self.chat_format = Some(chat_format.into());
        self
    }

    /// Add explicitly granted permissions
    pub fn permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Add explicitly negated permissions
    pub fn negated_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negated_permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Build the rank, failing on the first missing required field
    pub fn build(self) -> Result<Rank> {
        let id = self.id.ok_or(RankError::MissingField("id"))?;
        let level = self.level.ok_or(RankError::MissingField("level"))?;
        let name = self.name.ok_or(RankError::MissingField("name"))?;
        let display_name = self
            .display_name
            .ok_or(RankError::MissingField("display_name"))?;
        let chat_format = self
            .chat_format
            .ok_or(RankError::MissingField("chat_format"))?;

        Ok(Rank::from_state(
            id,
            RankState {
                level,
                name,
                display_name,
                chat_format,
                granted_permissions: self.permissions,
                negated_permissions: self.negated_permissions,
                effective_permissions: HashSet::new(),
            },
        ))
    }
}
