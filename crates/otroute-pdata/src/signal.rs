//! Record types for the three telemetry signals and their forest aliases.
//!
//! These records are leaves: the move engine never looks inside them.

use serde::{Deserialize, Serialize};

use crate::forest::{Forest, ResourceNode, ScopeNode};
use crate::ids::{SpanId, TraceId};
use crate::value::{AnyValue, AttributeMap};

// ---------------------------------------------------------------------------
// Traces
// ---------------------------------------------------------------------------

/// The role a span plays in a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    #[default]
    Unspecified,
    Internal,
    Server,
    Client,
    Producer,
    Consumer,
}

/// A single operation within a trace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Span {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    pub parent_span_id: Option<SpanId>,
    pub name: String,
    pub kind: SpanKind,
    pub start_time_unix_nano: u64,
    pub end_time_unix_nano: u64,
    pub attributes: AttributeMap,
}

pub type Traces = Forest<Span>;
pub type ResourceSpans = ResourceNode<Span>;
pub type ScopeSpans = ScopeNode<Span>;

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

/// A single log entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogRecord {
    pub time_unix_nano: u64,
    pub observed_time_unix_nano: u64,
    pub severity_number: i32,
    pub severity_text: String,
    pub body: AnyValue,
    pub attributes: AttributeMap,
    pub trace_id: Option<TraceId>,
    pub span_id: Option<SpanId>,
}

pub type Logs = Forest<LogRecord>;
pub type ResourceLogs = ResourceNode<LogRecord>;
pub type ScopeLogs = ScopeNode<LogRecord>;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// A numeric measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NumberValue {
    #[serde(rename = "asInt")]
    Int(i64),
    #[serde(rename = "asDouble")]
    Double(f64),
}

impl Default for NumberValue {
    fn default() -> Self {
        Self::Int(0)
    }
}

/// One point of a metric's time series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberDataPoint {
    pub start_time_unix_nano: u64,
    pub time_unix_nano: u64,
    pub value: NumberValue,
    pub attributes: AttributeMap,
}

/// A named metric with its data points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    pub description: String,
    pub unit: String,
    pub data_points: Vec<NumberDataPoint>,
}

pub type Metrics = Forest<Metric>;
pub type ResourceMetrics = ResourceNode<Metric>;
pub type ScopeMetrics = ScopeNode<Metric>;
