//! The device identifier — a caller-chosen natural key.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier for a [`Device`](crate::device::Device).
///
/// Unlike a generated surrogate key, the id is supplied by the caller and is
/// the record's sole natural key. Well-formedness (non-empty, no NUL bytes)
/// is checked by [`DeviceId::validate`] rather than at construction so that
/// decoded payloads can be inspected before being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check that the identifier can serve as a composite-key segment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDeviceId`] for the empty string and
    /// [`ValidationError::DeviceIdContainsNul`] when the id contains the
    /// key-segment delimiter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            return Err(ValidationError::EmptyDeviceId);
        }
        if self.0.contains('\0') {
            return Err(ValidationError::DeviceIdContainsNul);
        }
        Ok(())
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::new("sensor-1");
        let text = id.to_string();
        let parsed: DeviceId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = DeviceId::new("sensor-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""sensor-1""#);
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_accept_well_formed_id() {
        assert!(DeviceId::new("sensor-1").validate().is_ok());
    }

    #[test]
    fn should_reject_empty_id() {
        assert_eq!(
            DeviceId::new("").validate(),
            Err(ValidationError::EmptyDeviceId)
        );
    }

    #[test]
    fn should_reject_id_containing_nul() {
        assert_eq!(
            DeviceId::new("a\0b").validate(),
            Err(ValidationError::DeviceIdContainsNul)
        );
    }
}
