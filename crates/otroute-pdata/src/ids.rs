use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PdataError;

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], PdataError> {
    let bytes = hex::decode(s).map_err(|e| PdataError::InvalidIdHex(e.to_string()))?;
    if bytes.len() != N {
        return Err(PdataError::InvalidIdLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// 16-byte trace identifier, serialized as lowercase hex.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraceId([u8; 16]);

impl TraceId {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns `true` if every byte is zero (an invalid trace ID).
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; 16]
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 32-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, PdataError> {
        decode_fixed(s).map(Self)
    }
}

/// 8-byte span identifier, serialized as lowercase hex.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpanId([u8; 8]);

impl SpanId {
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Returns `true` if every byte is zero (an invalid span ID).
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; 8]
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 16-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, PdataError> {
        decode_fixed(s).map(Self)
    }
}

macro_rules! hex_id_impls {
    ($ty:ident) => {
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.to_hex())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = PdataError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::from_hex(&s)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.to_hex()
            }
        }
    };
}

hex_id_impls!(TraceId);
hex_id_impls!(SpanId);
