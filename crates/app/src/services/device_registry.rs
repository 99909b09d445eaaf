//! Device registry — use-cases for managing device records on the ledger.

use ledgerhub_domain::device::Device;
use ledgerhub_domain::error::{
    AlreadyExistsError, DecodeError, LedgerHubError, NotFoundError,
};
use ledgerhub_domain::id::DeviceId;
use ledgerhub_domain::key::{CompositeKey, KeyPrefix};
use ledgerhub_domain::time::now;

use crate::ports::{KeyedStore, ScanCursor};

/// Namespace tag under which every device record is keyed.
pub const DEVICE_NAMESPACE: &str = "Device";

const ENTITY: &str = "Device";

fn device_key(id: &DeviceId) -> CompositeKey {
    CompositeKey::new(DEVICE_NAMESPACE, &[id.as_str()])
}

fn encode_device(device: &Device) -> Result<Vec<u8>, LedgerHubError> {
    serde_json::to_vec(device).map_err(|source| {
        DecodeError {
            entity: ENTITY,
            source,
        }
        .into()
    })
}

fn decode_device(bytes: &[u8]) -> Result<Device, LedgerHubError> {
    serde_json::from_slice(bytes).map_err(|source| {
        DecodeError {
            entity: ENTITY,
            source,
        }
        .into()
    })
}

/// Application service owning all operations on device records.
///
/// Every operation runs within one transactional context supplied by the
/// store; the registry itself holds no locks and performs no retries.
pub struct DeviceRegistry<S> {
    store: S,
}

impl<S: KeyedStore + Sync> DeviceRegistry<S> {
    /// Create a registry backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether a record exists under `id`.
    ///
    /// True iff a non-empty value is present at the derived key. Store
    /// errors surface unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::Validation`] for a malformed id, or a
    /// storage error propagated from the store.
    #[tracing::instrument(skip(self), fields(device_id = %id))]
    pub async fn check_device(&self, id: &DeviceId) -> Result<bool, LedgerHubError> {
        id.validate()?;
        let value = self.store.get(device_key(id)).await?;
        Ok(matches!(value, Some(bytes) if !bytes.is_empty()))
    }

    /// Check the payload's domain invariants.
    ///
    /// A pure predicate over the record's fields — prior registration plays
    /// no part, so a brand-new device validates the same as a known one.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::Validation`] describing the violated
    /// constraint.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub fn validate_device(&self, device: &Device) -> Result<(), LedgerHubError> {
        device.validate()
    }

    /// Register a new device.
    ///
    /// Rejects malformed ids, then ids that already exist, then payloads
    /// that fail validation. On success exactly one new key is created and
    /// the stored timestamp is the time of this write.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::AlreadyExists`] when the id is taken,
    /// [`LedgerHubError::Validation`] when the payload is invalid, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub async fn add_device(&self, mut device: Device) -> Result<Device, LedgerHubError> {
        device.id.validate()?;
        if self.check_device(&device.id).await? {
            return Err(AlreadyExistsError {
                entity: ENTITY,
                id: device.id.into_string(),
            }
            .into());
        }
        self.validate_device(&device)?;
        device.timestamp = now();
        let bytes = encode_device(&device)?;
        self.store.put(device_key(&device.id), bytes).await?;
        Ok(device)
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::NotFound`] when the key is absent,
    /// [`LedgerHubError::Decode`] when the stored bytes do not parse, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self), fields(device_id = %id))]
    pub async fn get_device(&self, id: &DeviceId) -> Result<Device, LedgerHubError> {
        id.validate()?;
        let bytes = self.store.get(device_key(id)).await?.ok_or_else(|| {
            LedgerHubError::from(NotFoundError {
                entity: ENTITY,
                id: id.to_string(),
            })
        })?;
        decode_device(&bytes)
    }

    /// Overwrite an existing device record.
    ///
    /// The record must already exist; no new key is created. The stored
    /// timestamp is the time of this write.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::NotFound`] when the id is unknown,
    /// [`LedgerHubError::Validation`] when the payload is invalid, or a
    /// storage error from the store.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub async fn update_device(&self, mut device: Device) -> Result<Device, LedgerHubError> {
        device.id.validate()?;
        if !self.check_device(&device.id).await? {
            return Err(NotFoundError {
                entity: ENTITY,
                id: device.id.into_string(),
            }
            .into());
        }
        self.validate_device(&device)?;
        device.timestamp = now();
        let bytes = encode_device(&device)?;
        self.store.put(device_key(&device.id), bytes).await?;
        Ok(device)
    }

    /// List every device record, in store-iteration order.
    ///
    /// Fails fast on the first decode or iteration error, discarding any
    /// partial results. The scan cursor is dropped — and its resources
    /// released — on every exit path, including the early error returns.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::Decode`] for an unparseable record or a
    /// storage error from the scan.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<Device>, LedgerHubError> {
        let mut scan = self
            .store
            .scan_prefix(KeyPrefix::namespace(DEVICE_NAMESPACE))
            .await?;
        let mut devices = Vec::new();
        while let Some(entry) = scan.next_entry()? {
            devices.push(decode_device(&entry.value)?);
        }
        tracing::debug!(count = devices.len(), "devices listed");
        Ok(devices)
    }

    /// Move a record from `device_id` to `new_device_id`.
    ///
    /// An atomic rename: the payload is preserved (timestamp included) and
    /// only the identity changes. The new key is written and the old key
    /// deleted within the same invocation scope, so no later operation can
    /// observe both records — or neither.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::NotFound`] when the source is absent,
    /// [`LedgerHubError::AlreadyExists`] when the target id is taken, or a
    /// storage error from the store. A failed transfer leaves the store
    /// unchanged.
    #[tracing::instrument(
        skip(self),
        fields(device_id = %device_id, new_device_id = %new_device_id)
    )]
    pub async fn transfer_data(
        &self,
        device_id: &DeviceId,
        new_device_id: DeviceId,
    ) -> Result<(), LedgerHubError> {
        new_device_id.validate()?;
        let device = self.get_device(device_id).await?;
        if self.check_device(&new_device_id).await? {
            return Err(AlreadyExistsError {
                entity: ENTITY,
                id: new_device_id.into_string(),
            }
            .into());
        }
        let renamed = device.with_id(new_device_id);
        let bytes = encode_device(&renamed)?;
        self.store.put(device_key(&renamed.id), bytes).await?;
        self.store.delete(device_key(device_id)).await?;
        Ok(())
    }
}
