use std::fmt;

use crate::value::{AnyValue, AttributeMap};

const RESOURCE_DOMAIN: &str = "otroute-resource-v1";

/// Canonical digest of a resource identity (attributes plus schema URL).
///
/// The digest is a domain-separated BLAKE3 hash over a canonical encoding:
/// keys in sorted order, every value tagged with its type and length-prefixed.
/// Equal identities always produce equal digests. The converse is not relied
/// upon: callers confirm a digest hit with full value equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceDigest([u8; 32]);

impl ResourceDigest {
    /// Compute the digest of a resource identity.
    pub fn compute(attributes: &AttributeMap, schema_url: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(RESOURCE_DOMAIN.as_bytes());
        hasher.update(b":");
        write_str(&mut hasher, schema_url);
        write_map(&mut hasher, attributes);
        Self(*hasher.finalize().as_bytes())
    }

    /// First four bytes in hex, for log fields.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for ResourceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceDigest({})", self.short_hex())
    }
}

impl fmt::Display for ResourceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

fn write_len(hasher: &mut blake3::Hasher, len: usize) {
    hasher.update(&(len as u64).to_le_bytes());
}

fn write_str(hasher: &mut blake3::Hasher, s: &str) {
    write_len(hasher, s.len());
    hasher.update(s.as_bytes());
}

fn write_map(hasher: &mut blake3::Hasher, map: &AttributeMap) {
    write_len(hasher, map.len());
    for (key, value) in map.iter() {
        write_str(hasher, key);
        write_value(hasher, value);
    }
}

fn write_value(hasher: &mut blake3::Hasher, value: &AnyValue) {
    match value {
        AnyValue::Str(s) => {
            hasher.update(&[0]);
            write_str(hasher, s);
        }
        AnyValue::Bool(b) => {
            hasher.update(&[1, u8::from(*b)]);
        }
        AnyValue::Int(i) => {
            hasher.update(&[2]);
            hasher.update(&i.to_le_bytes());
        }
        AnyValue::Double(d) => {
            // 0.0 == -0.0, so both must hash alike.
            let bits = if *d == 0.0 { 0u64 } else { d.to_bits() };
            hasher.update(&[3]);
            hasher.update(&bits.to_le_bytes());
        }
        AnyValue::Bytes(bytes) => {
            hasher.update(&[4]);
            write_len(hasher, bytes.len());
            hasher.update(bytes);
        }
        AnyValue::Array(items) => {
            hasher.update(&[5]);
            write_len(hasher, items.len());
            for item in items {
                write_value(hasher, item);
            }
        }
        AnyValue::KvList(map) => {
            hasher.update(&[6]);
            write_map(hasher, map);
        }
        AnyValue::Empty => {
            hasher.update(&[7]);
        }
    }
}
