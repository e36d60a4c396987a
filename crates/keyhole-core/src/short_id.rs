use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of characters in a short identifier.
pub const SHORT_ID_LEN: usize = 6;

/// Number of random bytes rendered into a short identifier.
pub const SHORT_ID_BYTES: usize = 3;

/// A validated short identifier for a stored URL.
///
/// Identifiers are exactly 6 lowercase hexadecimal characters, produced
/// by rendering 3 random bytes as hex. They function as the
/// public-facing lookup key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortId(String);

impl ShortId {
    /// Creates a `ShortId` by rendering the given bytes as lowercase hex.
    pub fn from_bytes(bytes: [u8; SHORT_ID_BYTES]) -> Self {
        Self(format!("{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2]))
    }

    /// Creates a new `ShortId` after validating the input.
    ///
    /// Valid identifiers are exactly [`SHORT_ID_LEN`] characters of
    /// lowercase hex (`[0-9a-f]`).
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), CoreError> {
        if id.len() != SHORT_ID_LEN {
            return Err(CoreError::InvalidShortId(format!(
                "length must be {}, got {}",
                SHORT_ID_LEN,
                id.len()
            )));
        }

        if !id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only lowercase hex characters: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortId").field(&self.0).finish()
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
