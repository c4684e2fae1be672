use crate::error::ConfigError;
use crate::heap::BINARY;

/// Configuration for a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Children per frontier heap node. 2 gives a binary heap.
    pub branch_factor: usize,
    /// Stop after this many node expansions. `None` means no limit.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            branch_factor: BINARY,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn with_branch_factor(mut self, branch_factor: usize) -> Self {
        self.branch_factor = branch_factor;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Check that the configuration can drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.branch_factor < 2 {
            return Err(ConfigError::BranchFactorTooSmall(self.branch_factor));
        }
        if self.max_expansions == Some(0) {
            return Err(ConfigError::ZeroExpansionLimit);
        }
        Ok(())
    }
}
