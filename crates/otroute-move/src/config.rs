use serde::{Deserialize, Serialize};

/// How the engine locates an existing destination resource with a given identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// Always scan the destination resources in order.
    Linear,
    /// Always index the destination resources by identity digest.
    Indexed,
    /// Index only when the destination holds at least `index_threshold` resources.
    #[default]
    Auto,
}

/// Configuration for the move engine.
///
/// The lookup strategy changes only the cost of finding a destination
/// resource, never which resource is found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveConfig {
    /// Destination lookup strategy.
    pub lookup: LookupStrategy,
    /// Destination size at which `Auto` switches from scanning to indexing.
    pub index_threshold: usize,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            lookup: LookupStrategy::Auto,
            index_threshold: 64,
        }
    }
}

impl MoveConfig {
    /// A configuration that always scans.
    pub fn linear() -> Self {
        Self {
            lookup: LookupStrategy::Linear,
            ..Default::default()
        }
    }

    /// A configuration that always indexes.
    pub fn indexed() -> Self {
        Self {
            lookup: LookupStrategy::Indexed,
            ..Default::default()
        }
    }

    /// Whether a destination of `destination_len` resources should be indexed.
    pub fn should_index(&self, destination_len: usize) -> bool {
        match self.lookup {
            LookupStrategy::Linear => false,
            LookupStrategy::Indexed => true,
            LookupStrategy::Auto => destination_len >= self.index_threshold,
        }
    }
}
