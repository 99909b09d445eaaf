//! Name-based command dispatch — the registry's inbound interface.
//!
//! The transport layer delivers an operation name plus a list of
//! JSON-encoded argument strings (one JSON value per element); the
//! dispatcher decodes them and calls the matching registry method. The
//! result payload is raw bytes: empty for mutations, a JSON array for
//! `ListDevice`.

use std::sync::Arc;

use ledgerhub_domain::device::Device;
use ledgerhub_domain::error::{ArgumentError, DecodeError, LedgerHubError, UnknownOperationError};
use ledgerhub_domain::id::DeviceId;

use crate::ports::KeyedStore;
use crate::services::DeviceRegistry;

/// A decoded invocation: operation name plus JSON-encoded arguments.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Operation name, e.g. `"AddDevice"`.
    pub function: String,
    /// One JSON-encoded value per argument.
    pub args: Vec<String>,
}

fn ensure_arity(
    operation: &'static str,
    expected: usize,
    args: &[String],
) -> Result<(), LedgerHubError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ArgumentError::WrongArity {
            operation,
            expected,
            given: args.len(),
        }
        .into())
    }
}

fn decode_arg<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    index: usize,
    args: &[String],
) -> Result<T, LedgerHubError> {
    serde_json::from_str(&args[index]).map_err(|source| {
        ArgumentError::InvalidJson {
            operation,
            index,
            source,
        }
        .into()
    })
}

/// Maps operation names onto [`DeviceRegistry`] calls.
///
/// The dispatcher is deliberately thin: it owns no invariants of its own
/// beyond argument shape, and every failure kind it produces or forwards is
/// a [`LedgerHubError`] the transport can render.
pub struct Dispatcher<S> {
    registry: Arc<DeviceRegistry<S>>,
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<S: KeyedStore + Send + Sync> Dispatcher<S> {
    /// Create a dispatcher over a shared registry.
    pub fn new(registry: Arc<DeviceRegistry<S>>) -> Self {
        Self { registry }
    }

    /// Execute one invocation, returning the result payload.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::UnknownOperation`] for an unrecognized
    /// name, [`LedgerHubError::MalformedArguments`] for arity or decoding
    /// failures, and otherwise whatever the registry operation returns.
    #[tracing::instrument(skip(self, invocation), fields(function = %invocation.function))]
    pub async fn dispatch(&self, invocation: Invocation) -> Result<Vec<u8>, LedgerHubError> {
        match invocation.function.as_str() {
            "AddDevice" => {
                ensure_arity("AddDevice", 1, &invocation.args)?;
                let device: Device = decode_arg("AddDevice", 0, &invocation.args)?;
                self.registry.add_device(device).await?;
                Ok(Vec::new())
            }
            "ListDevice" => {
                ensure_arity("ListDevice", 0, &invocation.args)?;
                let devices = self.registry.list_devices().await?;
                serde_json::to_vec(&devices).map_err(|source| {
                    DecodeError {
                        entity: "Device",
                        source,
                    }
                    .into()
                })
            }
            "UpdateDevice" => {
                ensure_arity("UpdateDevice", 1, &invocation.args)?;
                let device: Device = decode_arg("UpdateDevice", 0, &invocation.args)?;
                self.registry.update_device(device).await?;
                Ok(Vec::new())
            }
            "TransferData" => {
                ensure_arity("TransferData", 2, &invocation.args)?;
                let device_id: DeviceId = decode_arg("TransferData", 0, &invocation.args)?;
                let new_device_id: DeviceId = decode_arg("TransferData", 1, &invocation.args)?;
                self.registry.transfer_data(&device_id, new_device_id).await?;
                Ok(Vec::new())
            }
            _ => Err(UnknownOperationError {
                name: invocation.function,
            }
            .into()),
        }
    }
}
