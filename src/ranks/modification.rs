//! Rank modification deltas

/// A set of changes to apply to a single rank.
///
/// Optional fields left unset mean "no change". Permission lists are applied
/// removal first, so a string present in both the removed and the added list of
/// the same modification ends up added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankModification {
    level: Option<i32>,
    name: Option<String>,
    display_name: Option<String>,
    chat_format: Option<String>,
    added_permissions: Vec<String>,
    removed_permissions: Vec<String>,
    added_negated_permissions: Vec<String>,
    removed_negated_permissions: Vec<String>,
}

impl RankModification {
    /// Start building a modification
    pub fn builder() -> RankModificationBuilder {
        RankModificationBuilder::default()
    }

    pub fn level(&self) -> Option<i32> {
        self.level
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn chat_format(&self) -> Option<&str> {
        self.chat_format.as_deref()
    }

    pub fn added_permissions(&self) -> &[String] {
        &self.added_permissions
    }

    pub fn removed_permissions(&self) -> &[String] {
        &self.removed_permissions
    }

    pub fn added_negated_permissions(&self) -> &[String] {
        &self.added_negated_permissions
    }

    pub fn removed_negated_permissions(&self) -> &[String] {
        &self.removed_negated_permissions
    }
}

/// Builder for [`RankModification`]
#[derive(Debug, Clone, Default)]
pub struct RankModificationBuilder {
    inner: RankModification,
}

impl RankModificationBuilder {
    /// Move the rank to a new level
    pub fn level(mut self, level: i32) -> Self {
        self.inner.level = Some(level);
        self
    }

    /// Rename the rank
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    /// Change the display name
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.inner.display_name = Some(display_name.into());
        self
    }

    /// Change the chat format
    pub fn chat_format(mut self, chat_format: impl Into<String>) -> Self {
        self.inner.chat_format = Some(chat_format.into());
        self
    }

    /// Grant additional permissions
    pub fn added_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .added_permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Drop explicit grants
    pub fn removed_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .removed_permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Negate additional permissions
    pub fn added_negated_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .added_negated_permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Drop explicit negations
    pub fn removed_negated_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .removed_negated_permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Finish the modification
    pub fn build(self) -> RankModification {
        self.inner
    }
}
