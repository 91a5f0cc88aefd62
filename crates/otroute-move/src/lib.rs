//! Partition-and-merge engine for telemetry forests.
//!
//! Moves resources (or individual records, with their resource and scope
//! context) from a source forest into a destination forest when a predicate
//! holds. A moved resource whose identity already exists in the destination is
//! merged into it by appending its scopes; otherwise it is appended as a new
//! resource. Both forests are mutated in place and records are never cloned.
//!
//! # Key Types
//!
//! - [`ResourceMover`] -- Engine carrying a [`MoveConfig`]
//! - [`move_resources_if`] / [`move_records_with_context_if`] -- Default-configured entry points
//! - [`ResourcePredicate`] / [`RecordPredicate`] -- Read-only predicate capabilities
//! - [`LookupStrategy`] -- Linear scan vs. digest-indexed destination lookup

pub mod config;
mod lookup;
pub mod mover;
pub mod predicate;
pub mod records;

pub use config::{LookupStrategy, MoveConfig};
pub use mover::{move_resources_if, ResourceMover};
pub use predicate::{RecordPredicate, ResourcePredicate};
pub use records::move_records_with_context_if;
