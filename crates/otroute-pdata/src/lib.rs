//! Telemetry data model for otroute.
//!
//! Telemetry batches are forests: resources own scopes, scopes own records.
//! This crate defines that structure once, generic over the record type, and
//! instantiates it for traces, logs, and metrics.
//!
//! # Key Types
//!
//! - [`Forest`] -- Ordered sequence of resource nodes (one batch)
//! - [`ResourceNode`] -- Resource identity plus its scope nodes
//! - [`ScopeNode`] -- Instrumentation scope plus its records
//! - [`AttributeMap`] / [`AnyValue`] -- Typed attribute sets, compared as sets
//! - [`ResourceDigest`] -- Canonical BLAKE3 digest of a resource identity
//! - [`Span`], [`LogRecord`], [`Metric`] -- Signal records

pub mod error;
pub mod forest;
pub mod identity;
pub mod ids;
pub mod signal;
pub mod value;

pub use error::{PdataError, PdataResult};
pub use forest::{Forest, InstrumentationScope, Resource, ResourceNode, ScopeNode};
pub use identity::ResourceDigest;
pub use ids::{SpanId, TraceId};
pub use signal::{
    LogRecord, Logs, Metric, Metrics, NumberDataPoint, NumberValue, ResourceLogs,
    ResourceMetrics, ResourceSpans, ScopeLogs, ScopeMetrics, ScopeSpans, Span, SpanKind, Traces,
};
pub use value::{AnyValue, AttributeMap};
