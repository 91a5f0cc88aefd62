//! Whole-resource moves.
//!
//! [`ResourceMover::move_resources_if`] partitions a source forest by a
//! resource predicate and splices every matching resource into the
//! destination, merging it into an existing resource of identical identity
//! when there is one.

use otroute_pdata::{Forest, ResourceNode};
use tracing::{debug, trace};

use crate::config::MoveConfig;
use crate::lookup::DestinationLookup;
use crate::predicate::ResourcePredicate;

/// Stateless move engine parameterized by a [`MoveConfig`].
///
/// `source` and `destination` are taken as two exclusive borrows, so a single
/// forest can never be passed as both.
#[derive(Clone, Debug, Default)]
pub struct ResourceMover {
    config: MoveConfig,
}

impl ResourceMover {
    pub fn new(config: MoveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    /// Move every resource of `source` for which `predicate` holds into `destination`.
    ///
    /// The predicate is evaluated once per source resource, in order, before
    /// anything is mutated; a panicking predicate leaves both forests intact.
    /// A matched resource whose identity equals an existing destination
    /// resource has its scopes appended after that resource's scopes;
    /// otherwise it is appended to the destination. Matched resources are
    /// removed from `source` and the rest keep their relative order.
    /// Records are moved, never cloned.
    pub fn move_resources_if<R, P>(
        &self,
        source: &mut Forest<R>,
        destination: &mut Forest<R>,
        predicate: P,
    ) where
        P: ResourcePredicate<R>,
    {
        let verdicts: Vec<bool> = source.iter().map(|node| predicate.matches(node)).collect();
        let matched = verdicts.iter().filter(|&&v| v).count();
        if matched == 0 {
            debug!(remaining = source.len(), "no resources matched");
            return;
        }

        let mut lookup = DestinationLookup::build(&self.config, destination);
        let mut merged = 0usize;
        let mut appended = 0usize;

        // Kept nodes are compacted in place; every verdict is already known.
        let mut verdicts = verdicts.into_iter();
        source.resources.retain_mut(|slot| {
            if !verdicts.next().unwrap_or(false) {
                return true;
            }
            let node = slot.take();
            match lookup.find(destination, &node) {
                Some(position) => {
                    trace!(
                        digest = %node.digest().short_hex(),
                        position,
                        scopes = node.scopes.len(),
                        "merging resource into destination"
                    );
                    merge_scopes(&mut destination.resources[position], node);
                    merged += 1;
                }
                None => {
                    lookup.appended(destination.len(), &node);
                    destination.push(node);
                    appended += 1;
                }
            }
            false
        });

        debug!(
            matched,
            merged,
            appended,
            remaining = source.len(),
            indexed = lookup.is_indexed(),
            "moved resources"
        );
    }
}

fn merge_scopes<R>(target: &mut ResourceNode<R>, incoming: ResourceNode<R>) {
    let mut scopes = incoming.scopes;
    target.scopes.append(&mut scopes);
}

/// [`ResourceMover::move_resources_if`] with the default configuration.
pub fn move_resources_if<R, P>(source: &mut Forest<R>, destination: &mut Forest<R>, predicate: P)
where
    P: ResourcePredicate<R>,
{
    ResourceMover::default().move_resources_if(source, destination, predicate);
}
