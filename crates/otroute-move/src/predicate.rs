//! Predicate capabilities consulted by the move engine.
//!
//! Predicates receive shared references only, so they cannot mutate the
//! forest being partitioned. Any `Fn` closure with the matching signature is a
//! predicate.

use otroute_pdata::{ResourceNode, ScopeNode};

/// Decides whether a whole resource node should move.
pub trait ResourcePredicate<R> {
    fn matches(&self, resource: &ResourceNode<R>) -> bool;
}

impl<R, F> ResourcePredicate<R> for F
where
    F: Fn(&ResourceNode<R>) -> bool,
{
    fn matches(&self, resource: &ResourceNode<R>) -> bool {
        self(resource)
    }
}

/// Decides whether a single record should move, given its resource and scope.
pub trait RecordPredicate<R> {
    fn matches(&self, resource: &ResourceNode<R>, scope: &ScopeNode<R>, record: &R) -> bool;
}

impl<R, F> RecordPredicate<R> for F
where
    F: Fn(&ResourceNode<R>, &ScopeNode<R>, &R) -> bool,
{
    fn matches(&self, resource: &ResourceNode<R>, scope: &ScopeNode<R>, record: &R) -> bool {
        self(resource, scope, record)
    }
}
