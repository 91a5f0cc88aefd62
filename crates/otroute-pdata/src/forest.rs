//! Resource / scope / record forests.
//!
//! A [`Forest`] is one telemetry batch: an ordered sequence of
//! [`ResourceNode`]s, each owning an ordered sequence of [`ScopeNode`]s, each
//! owning an ordered sequence of records. The record type is a parameter so
//! that traces, logs, and metrics share one structure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PdataError, PdataResult};
use crate::identity::ResourceDigest;
use crate::value::AttributeMap;

/// The entity producing telemetry, described by its attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub attributes: AttributeMap,
    pub dropped_attributes_count: u32,
}

impl Resource {
    pub fn new(attributes: AttributeMap) -> Self {
        Self {
            attributes,
            dropped_attributes_count: 0,
        }
    }
}

/// The instrumentation library that produced a group of records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstrumentationScope {
    pub name: String,
    pub version: String,
    pub attributes: AttributeMap,
    pub dropped_attributes_count: u32,
}

impl InstrumentationScope {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }
}

/// Records produced by one instrumentation scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeNode<R> {
    #[serde(default)]
    pub scope: InstrumentationScope,
    #[serde(default)]
    pub schema_url: String,
    #[serde(default = "Vec::new")]
    pub records: Vec<R>,
}

impl<R> ScopeNode<R> {
    pub fn new(scope: InstrumentationScope) -> Self {
        Self {
            scope,
            schema_url: String::new(),
            records: Vec::new(),
        }
    }

    /// Builder-style helper that replaces the records.
    pub fn with_records(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self
    }

    /// A scope node with the same scope and schema URL but no records.
    pub fn empty_like(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            schema_url: self.schema_url.clone(),
            records: Vec::new(),
        }
    }
}

/// A resource together with all of its scopes.
///
/// The resource identity is the pair (`resource.attributes`, `schema_url`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode<R> {
    #[serde(default)]
    pub resource: Resource,
    #[serde(default)]
    pub schema_url: String,
    #[serde(default = "Vec::new")]
    pub scopes: Vec<ScopeNode<R>>,
}

impl<R> ResourceNode<R> {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            schema_url: String::new(),
            scopes: Vec::new(),
        }
    }

    /// Builder-style helper that replaces the scopes.
    pub fn with_scopes(mut self, scopes: Vec<ScopeNode<R>>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Builder-style helper that sets the schema URL.
    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = schema_url.into();
        self
    }

    /// Returns `true` if both nodes have equal attributes and schema URL.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.schema_url == other.schema_url && self.resource.attributes == other.resource.attributes
    }

    /// Canonical digest of this node's identity.
    pub fn digest(&self) -> ResourceDigest {
        ResourceDigest::compute(&self.resource.attributes, &self.schema_url)
    }

    /// A resource node with the same resource and schema URL but no scopes.
    pub fn empty_like(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            schema_url: self.schema_url.clone(),
            scopes: Vec::new(),
        }
    }

    /// Move the node's contents out, leaving a default resource with no scopes.
    pub fn take(&mut self) -> Self {
        Self {
            resource: std::mem::take(&mut self.resource),
            schema_url: std::mem::take(&mut self.schema_url),
            scopes: std::mem::take(&mut self.scopes),
        }
    }

    /// Total number of records across all scopes.
    pub fn record_count(&self) -> usize {
        self.scopes.iter().map(|s| s.records.len()).sum()
    }
}

/// An ordered collection of resource nodes: one telemetry batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forest<R> {
    #[serde(default = "Vec::new")]
    pub resources: Vec<ResourceNode<R>>,
}

impl<R> Default for Forest<R> {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
        }
    }
}

impl<R> Forest<R> {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resource nodes.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn push(&mut self, node: ResourceNode<R>) {
        self.resources.push(node);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceNode<R>> {
        self.resources.iter()
    }

    /// Number of scope nodes across all resources.
    pub fn scope_count(&self) -> usize {
        self.resources.iter().map(|r| r.scopes.len()).sum()
    }

    /// Number of records across all resources and scopes.
    pub fn record_count(&self) -> usize {
        self.resources.iter().map(ResourceNode::record_count).sum()
    }
}

impl<R: DeserializeOwned> Forest<R> {
    /// Parse a forest from its JSON representation.
    pub fn from_json_str(s: &str) -> PdataResult<Self> {
        serde_json::from_str(s).map_err(|e| PdataError::Json(e.to_string()))
    }
}

impl<R: Serialize> Forest<R> {
    /// Render the forest as pretty-printed JSON.
    pub fn to_json_string(&self) -> PdataResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PdataError::Json(e.to_string()))
    }
}

impl<R> From<Vec<ResourceNode<R>>> for Forest<R> {
    fn from(resources: Vec<ResourceNode<R>>) -> Self {
        Self { resources }
    }
}

impl<'a, R> IntoIterator for &'a Forest<R> {
    type Item = &'a ResourceNode<R>;
    type IntoIter = std::slice::Iter<'a, ResourceNode<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}
