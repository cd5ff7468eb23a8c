//! Helper functions for creating and classifying errors

use super::types::RankError;

impl RankError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error is a rejected caller request against the registry, as
    /// opposed to a configuration or IO failure. A rejected request never leaves
    /// a partial change behind.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            Self::MissingDefaultRank(_)
                | Self::DuplicateId(_)
                | Self::DuplicateLevel(_)
                | Self::UnknownRank(_)
                | Self::DefaultRankRemoval
                | Self::MissingField(_)
        )
    }
}
