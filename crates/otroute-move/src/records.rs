//! Record-level moves.
//!
//! Individual records move with their context: the destination receives the
//! record under a resource of the same identity and a scope copied from the
//! record's source scope.

use otroute_pdata::{Forest, ScopeNode};
use tracing::debug;

use crate::lookup::DestinationLookup;
use crate::mover::ResourceMover;
use crate::predicate::RecordPredicate;

impl ResourceMover {
    /// Move every record of `source` for which `predicate` holds into `destination`.
    ///
    /// The predicate sees each `(resource, scope, record)` triple of the
    /// untouched source; all verdicts are computed before anything is mutated.
    /// For every source resource with at least one match, the destination
    /// resource of identical identity is reused or created (identity only),
    /// and each source scope with matches contributes one new destination
    /// scope holding the matched records in order. Scopes and resources that
    /// this call empties are removed from `source`; ones that were already
    /// empty are left alone.
    pub fn move_records_with_context_if<R, P>(
        &self,
        source: &mut Forest<R>,
        destination: &mut Forest<R>,
        predicate: P,
    ) where
        P: RecordPredicate<R>,
    {
        let verdicts: Vec<Vec<Vec<bool>>> = source
            .iter()
            .map(|node| {
                node.scopes
                    .iter()
                    .map(|scope| {
                        scope
                            .records
                            .iter()
                            .map(|record| predicate.matches(node, scope, record))
                            .collect()
                    })
                    .collect()
            })
            .collect();

        let matched: usize = verdicts
            .iter()
            .flatten()
            .map(|scope| scope.iter().filter(|&&v| v).count())
            .sum();
        if matched == 0 {
            debug!(remaining = source.record_count(), "no records matched");
            return;
        }

        let mut lookup = DestinationLookup::build(self.config(), destination);
        let mut created = 0usize;
        let mut pruned_scopes = 0usize;
        let mut pruned_resources = 0usize;

        let mut verdicts = verdicts.into_iter();
        source.resources.retain_mut(|node| {
            let scope_verdicts = verdicts.next().unwrap_or_default();
            if !scope_verdicts.iter().flatten().any(|&v| v) {
                return true;
            }

            let position = match lookup.find(destination, node) {
                Some(position) => position,
                None => {
                    let position = destination.len();
                    lookup.appended(position, node);
                    destination.push(node.empty_like());
                    created += 1;
                    position
                }
            };

            let mut scope_verdicts = scope_verdicts.into_iter();
            node.scopes.retain_mut(|scope| {
                let record_verdicts = scope_verdicts.next().unwrap_or_default();
                if !record_verdicts.iter().any(|&v| v) {
                    return true;
                }
                let moved = split_scope(scope, &record_verdicts);
                destination.resources[position].scopes.push(moved);
                if scope.records.is_empty() {
                    pruned_scopes += 1;
                    false
                } else {
                    true
                }
            });

            if node.scopes.is_empty() {
                pruned_resources += 1;
                false
            } else {
                true
            }
        });

        debug!(
            matched,
            created,
            pruned_scopes,
            pruned_resources,
            remaining = source.record_count(),
            indexed = lookup.is_indexed(),
            "moved records"
        );
    }
}

/// Detach the matched records of `scope` into a new scope of the same identity.
/// Unmatched records stay in `scope`, in order.
fn split_scope<R>(scope: &mut ScopeNode<R>, verdicts: &[bool]) -> ScopeNode<R> {
    let mut moved = scope.empty_like();
    let records = std::mem::take(&mut scope.records);
    for (record, &is_match) in records.into_iter().zip(verdicts) {
        if is_match {
            moved.records.push(record);
        } else {
            scope.records.push(record);
        }
    }
    moved
}

/// [`ResourceMover::move_records_with_context_if`] with the default configuration.
pub fn move_records_with_context_if<R, P>(
    source: &mut Forest<R>,
    destination: &mut Forest<R>,
    predicate: P,
) where
    P: RecordPredicate<R>,
{
    ResourceMover::default().move_records_with_context_if(source, destination, predicate);
}
