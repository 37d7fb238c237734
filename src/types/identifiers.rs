//! Unique identifier types for the museum
//!
//! Exhibits and patrons are keyed by identity rather than by name, so two
//! exhibits that share a name are still distinct entries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an exhibit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExhibitId(pub Uuid);

impl ExhibitId {
    /// Create a new random exhibit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExhibitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExhibitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXH_{}", self.0.simple())
    }
}

impl Serialize for ExhibitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ExhibitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("EXH_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(ExhibitId(uuid))
    }
}

/// Unique identifier for a patron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatronId(pub Uuid);

impl PatronId {
    /// Create a new random patron ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PatronId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PATRON_{}", self.0.simple())
    }
}

impl Serialize for PatronId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PatronId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Raw UUIDs are accepted as well as prefixed ones
        let raw = s.strip_prefix("PATRON_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(PatronId(uuid))
    }
}
