//! Locating destination resources by identity.

use std::collections::HashMap;

use otroute_pdata::{Forest, ResourceDigest, ResourceNode};

use crate::config::MoveConfig;

/// Finds the first destination resource whose identity equals a candidate's.
///
/// Without an index this is a scan over the destination. With an index the
/// candidate's digest narrows the search to positions with the same digest,
/// which are then confirmed with full identity equality. Positions are kept in
/// ascending order, so both paths return the same (first) match.
pub(crate) struct DestinationLookup {
    index: Option<HashMap<ResourceDigest, Vec<usize>>>,
}

impl DestinationLookup {
    pub(crate) fn build<R>(config: &MoveConfig, destination: &Forest<R>) -> Self {
        if !config.should_index(destination.len()) {
            return Self { index: None };
        }
        let mut index: HashMap<ResourceDigest, Vec<usize>> = HashMap::new();
        for (position, node) in destination.iter().enumerate() {
            index.entry(node.digest()).or_default().push(position);
        }
        Self { index: Some(index) }
    }

    pub(crate) fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    pub(crate) fn find<R>(&self, destination: &Forest<R>, candidate: &ResourceNode<R>) -> Option<usize> {
        match &self.index {
            None => destination
                .iter()
                .position(|existing| existing.same_identity(candidate)),
            Some(index) => index
                .get(&candidate.digest())?
                .iter()
                .copied()
                .find(|&position| destination.resources[position].same_identity(candidate)),
        }
    }

    /// Record that `node` was appended to the destination at `position`.
    pub(crate) fn appended<R>(&mut self, position: usize, node: &ResourceNode<R>) {
        if let Some(index) = &mut self.index {
            index.entry(node.digest()).or_default().push(position);
        }
    }
}
