//! Typed attribute values and attribute maps.
//!
//! Attribute maps are compared as sets: two maps are equal when they hold the
//! same keys bound to equal values, regardless of insertion order.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed attribute value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AnyValue {
    #[serde(rename = "stringValue")]
    Str(String),
    #[serde(rename = "boolValue")]
    Bool(bool),
    #[serde(rename = "intValue")]
    Int(i64),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "bytesValue", with = "base64_bytes")]
    Bytes(Vec<u8>),
    #[serde(rename = "arrayValue")]
    Array(Vec<AnyValue>),
    #[serde(rename = "kvlistValue")]
    KvList(AttributeMap),
    #[default]
    #[serde(rename = "empty")]
    Empty,
}

impl AnyValue {
    /// Borrow the string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value as text.
    ///
    /// Strings are returned verbatim, bools and ints use their display form,
    /// doubles switch to exponent notation outside `[1e-6, 1e21)`, bytes are
    /// standard base64, and arrays and maps are rendered as JSON. `Empty`
    /// renders as the empty string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Double(d) => format_double(*d),
            Self::Bytes(bytes) => STANDARD.encode(bytes),
            Self::Array(_) | Self::KvList(_) => self.to_json().to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Convert into a plain JSON value. Non-finite doubles become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Double(d) => serde_json::Number::from_f64(*d)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Bytes(bytes) => Value::String(STANDARD.encode(bytes)),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::KvList(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
            Self::Empty => Value::Null,
        }
    }
}

/// Shortest round-trip form, with exponent notation (`1e+21`, `1.5e-07`) for
/// magnitudes below `1e-6` or at least `1e21`.
fn format_double(d: f64) -> String {
    if d.is_nan() {
        return "NaN".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let magnitude = d.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return d.to_string();
    }
    let formatted = format!("{d:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Bytes travel as a standard base64 string.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for AnyValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for AnyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AnyValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for AnyValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<Vec<AnyValue>> for AnyValue {
    fn from(items: Vec<AnyValue>) -> Self {
        Self::Array(items)
    }
}

impl From<AttributeMap> for AnyValue {
    fn from(map: AttributeMap) -> Self {
        Self::KvList(map)
    }
}

/// Mapping of attribute keys to typed values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, AnyValue>);

impl AttributeMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnyValue>) -> Option<AnyValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        self.0.get(key)
    }

    /// Look up a string value by key. Non-string values return `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnyValue::as_str)
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<AnyValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<AnyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_ignores_insertion_order() {
        let mut a = AttributeMap::new();
        a.insert("service.name", "checkout");
        a.insert("host.name", "node-1");

        let mut b = AttributeMap::new();
        b.insert("host.name", "node-1");
        b.insert("service.name", "checkout");

        assert_eq!(a, b);
    }

    #[test]
    fn typed_values_are_not_coerced() {
        let a: AttributeMap = [("port", AnyValue::Int(8080))].into_iter().collect();
        let b: AttributeMap = [("port", "8080")].into_iter().collect();
        assert_ne!(a, b);
    }

    #[test]
    fn get_str_only_matches_strings() {
        let attrs: AttributeMap = [
            ("resourceName", AnyValue::from("resourceA")),
            ("count", AnyValue::from(3i64)),
        ]
        .into_iter()
        .collect();

        assert_eq!(attrs.get_str("resourceName"), Some("resourceA"));
        assert_eq!(attrs.get_str("count"), None);
        assert_eq!(attrs.get_str("missing"), None);
    }

    #[test]
    fn insert_replaces_and_remove_returns_value() {
        let mut attrs = AttributeMap::new();
        assert!(attrs.insert("k", "v1").is_none());
        assert_eq!(attrs.insert("k", "v2"), Some(AnyValue::from("v1")));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.remove("k"), Some(AnyValue::from("v2")));
        assert!(attrs.is_empty());
        assert!(!attrs.contains_key("k"));
    }

    #[test]
    fn as_string_renders_scalars() {
        assert_eq!(AnyValue::from("x").as_string(), "x");
        assert_eq!(AnyValue::from(true).as_string(), "true");
        assert_eq!(AnyValue::from(42i64).as_string(), "42");
        assert_eq!(AnyValue::from(1.5).as_string(), "1.5");
        assert_eq!(AnyValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef]).as_string(), "3q2+7w==");
        assert_eq!(AnyValue::Empty.as_string(), "");
    }

    #[test]
    fn as_string_uses_exponent_outside_plain_range() {
        assert_eq!(AnyValue::from(1e21).as_string(), "1e+21");
        assert_eq!(AnyValue::from(1e-7).as_string(), "1e-07");
        assert_eq!(AnyValue::from(-1.5e-7).as_string(), "-1.5e-07");
        assert_eq!(AnyValue::from(1.25e300).as_string(), "1.25e+300");
        assert_eq!(AnyValue::from(1e20).as_string(), "100000000000000000000");
        assert_eq!(AnyValue::from(1e-6).as_string(), "0.000001");
        assert_eq!(AnyValue::from(0.0).as_string(), "0");
        assert_eq!(AnyValue::from(f64::INFINITY).as_string(), "+Inf");
        assert_eq!(AnyValue::from(f64::NAN).as_string(), "NaN");
    }

    #[test]
    fn as_string_renders_composites_as_json() {
        let array = AnyValue::Array(vec![AnyValue::from(1i64), AnyValue::from("two")]);
        assert_eq!(array.as_string(), r#"[1,"two"]"#);

        let map: AttributeMap = [("a", AnyValue::from(true))].into_iter().collect();
        assert_eq!(AnyValue::KvList(map).as_string(), r#"{"a":true}"#);
    }

    #[test]
    fn non_finite_double_becomes_null() {
        assert_eq!(AnyValue::Double(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn serde_uses_otlp_style_tags() {
        let attrs: AttributeMap = [("resourceName", "resourceA")].into_iter().collect();
        let encoded = serde_json::to_value(&attrs).unwrap();
        assert_eq!(encoded, json!({"resourceName": {"stringValue": "resourceA"}}));

        let decoded: AttributeMap = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, attrs);
    }

    #[test]
    fn bytes_serialize_as_base64_string() {
        let value = AnyValue::Bytes(vec![1, 2]);
        let encoded = serde_json::to_value(&value).unwrap();
        assert_eq!(encoded, json!({"bytesValue": "AQI="}));

        let decoded: AnyValue = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(value.to_json(), json!("AQI="));
    }

    #[test]
    fn malformed_base64_is_rejected() {
        let result = serde_json::from_value::<AnyValue>(json!({"bytesValue": "not base64!"}));
        assert!(result.is_err());
    }
}
