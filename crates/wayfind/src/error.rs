use thiserror::Error;

/// Invalid [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("heap branch factor must be at least 2, got {0}")]
    BranchFactorTooSmall(usize),
    #[error("expansion limit must be positive")]
    ZeroExpansionLimit,
}

/// A string that does not name a [`Strategy`](crate::Strategy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy `{0}`")]
pub struct ParseStrategyError(pub String);
