//! Device — one record per physical or logical device.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerHubError, ValidationError};
use crate::id::DeviceId;
use crate::time::{Timestamp, now};

/// A registered device and its latest measurements.
///
/// The `timestamp` records the time of the last write; the registry stamps
/// it on every add and update. When a payload arrives without one (the
/// common case for dispatch arguments), decoding fills in the current time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub humidity: f64,
    pub temperature: f64,
    #[serde(default = "now")]
    pub timestamp: Timestamp,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants on the payload.
    ///
    /// This is a pure predicate over the record's fields: it never consults
    /// the store, so a device that has never been registered validates just
    /// like one that has. Existence is checked separately by the registry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::Validation`] when the id is malformed, a
    /// measurement is not finite, or the humidity is out of range.
    pub fn validate(&self) -> Result<(), LedgerHubError> {
        self.id.validate()?;
        if !self.humidity.is_finite() {
            return Err(ValidationError::NonFiniteMeasurement { field: "humidity" }.into());
        }
        if !self.temperature.is_finite() {
            return Err(ValidationError::NonFiniteMeasurement {
                field: "temperature",
            }
            .into());
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(ValidationError::HumidityOutOfRange {
                value: self.humidity,
            }
            .into());
        }
        Ok(())
    }

    /// Return the same payload re-keyed under `id`.
    ///
    /// Only the identity changes; measurements and timestamp are preserved.
    #[must_use]
    pub fn with_id(self, id: DeviceId) -> Self {
        Self { id, ..self }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    humidity: Option<f64>,
    temperature: Option<f64>,
    timestamp: Option<Timestamp>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::Validation`] if any invariant fails.
    pub fn build(self) -> Result<Device, LedgerHubError> {
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            humidity: self.humidity.unwrap_or_default(),
            temperature: self.temperature.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_else(now),
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_device() {
        let device = Device::builder()
            .id("sensor-1")
            .humidity(50.0)
            .temperature(20.0)
            .build()
            .unwrap();
        assert_eq!(device.id.as_str(), "sensor-1");
        assert!((device.humidity - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_return_validation_error_when_id_is_missing() {
        let result = Device::builder().humidity(50.0).temperature(20.0).build();
        assert!(matches!(
            result,
            Err(LedgerHubError::Validation(ValidationError::EmptyDeviceId))
        ));
    }

    #[test]
    fn should_reject_non_finite_temperature() {
        let result = Device::builder()
            .id("sensor-1")
            .humidity(50.0)
            .temperature(f64::NAN)
            .build();
        assert!(matches!(
            result,
            Err(LedgerHubError::Validation(
                ValidationError::NonFiniteMeasurement {
                    field: "temperature"
                }
            ))
        ));
    }

    #[test]
    fn should_reject_humidity_above_full_scale() {
        let result = Device::builder()
            .id("sensor-1")
            .humidity(120.0)
            .temperature(20.0)
            .build();
        assert!(matches!(
            result,
            Err(LedgerHubError::Validation(
                ValidationError::HumidityOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn should_validate_device_that_was_never_registered() {
        // Validation is a pure predicate over the payload. A brand-new id
        // must pass; prior registration is a separate concern entirely.
        let device = Device::builder()
            .id("never-seen-before")
            .humidity(42.0)
            .temperature(18.5)
            .build()
            .unwrap();
        assert!(device.validate().is_ok());
    }

    #[test]
    fn should_preserve_payload_when_rekeyed() {
        let device = Device::builder()
            .id("old")
            .humidity(50.0)
            .temperature(20.0)
            .build()
            .unwrap();
        let ts = device.timestamp;
        let renamed = device.with_id(DeviceId::new("new"));
        assert_eq!(renamed.id.as_str(), "new");
        assert!((renamed.humidity - 50.0).abs() < f64::EPSILON);
        assert_eq!(renamed.timestamp, ts);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let device = Device::builder()
            .id("sensor-1")
            .humidity(50.0)
            .temperature(20.0)
            .build()
            .unwrap();
        let json = serde_json::to_string(&device).unwrap();
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, device.id);
        assert_eq!(parsed.timestamp, device.timestamp);
    }

    #[test]
    fn should_default_timestamp_when_decoding_bare_payload() {
        let parsed: Device =
            serde_json::from_str(r#"{"id":"1","humidity":50,"temperature":20}"#).unwrap();
        assert_eq!(parsed.id.as_str(), "1");
        assert!(parsed.validate().is_ok());
    }
}
