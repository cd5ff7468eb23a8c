//! Error types for the rank registry

use thiserror::Error;

/// Result type alias for rank operations
pub type Result<T> = std::result::Result<T, RankError>;

/// Main error type for rank operations
#[derive(Error, Debug)]
pub enum RankError {
    /// The initial rank set has no rank carrying the default id
    #[error("Ranks list does not contain a default rank (id {0})")]
    MissingDefaultRank(i32),

    /// A rank with this id is already registered
    #[error("Rank with id {0} already exists")]
    DuplicateId(i32),

    /// A rank with this level is already registered
    #[error("Rank with level {0} already exists")]
    DuplicateLevel(i32),

    /// No rank is registered under this id
    #[error("Rank with id {0} does not exist")]
    UnknownRank(i32),

    /// The default rank can never be removed
    #[error("Cannot remove the default rank")]
    DefaultRankRemoval,

    /// A required builder field was never set
    #[error("Cannot build rank: field '{0}' is missing")]
    MissingField(&'static str),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration that parsed but breaks a registry rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
