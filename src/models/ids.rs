//! Strongly-typed transaction identifier
//!
//! A newtype over a v4 UUID so ids cannot be confused with other strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Identifier of a stored transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string, with or without the display prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
