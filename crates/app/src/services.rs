//! Application services — the use-case layer.

pub mod device_registry;

pub use device_registry::DeviceRegistry;
