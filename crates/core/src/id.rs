//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Identifier of a post document.
///
/// Wraps a BSON ObjectId but is opaque to the rest of the application beyond
/// equality comparison and hex-string encoding. It serializes as its
/// 24-character hex string in every format, so the same entity shape serves
/// both the HTTP JSON boundary and the stored document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PostId(ObjectId);

impl PostId {
    /// Create a new identifier.
    ///
    /// Generated inside the store layer on insert. Prefer passing IDs
    /// explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl core::fmt::Display for PostId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl From<ObjectId> for PostId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<PostId> for ObjectId {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let oid = ObjectId::parse_str(s)
            .map_err(|e| DomainError::invalid_id(format!("PostId: {e}")))?;
        Ok(Self(oid))
    }
}

impl Serialize for PostId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse_str(&s).map(Self).map_err(serde::de::Error::custom)
    }
}
