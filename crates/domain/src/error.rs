//! Common error types used across the workspace.
//!
//! Each failure kind carries a typed source error and converts into
//! [`LedgerHubError`] via `#[from]`. Adapters wrap their native errors in
//! [`LedgerHubError::Storage`] through a crate-local error type.

/// Top-level error for all registry operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerHubError {
    /// A device payload failed a domain constraint.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A record with the same identity already exists.
    #[error("already exists")]
    AlreadyExists(#[from] AlreadyExistsError),

    /// Stored bytes could not be decoded into a record.
    #[error("decode failed")]
    Decode(#[from] DecodeError),

    /// The underlying store failed; the native error is preserved.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The dispatcher received an operation name it does not know.
    #[error("unknown operation")]
    UnknownOperation(#[from] UnknownOperationError),

    /// The dispatcher received arguments it could not decode.
    #[error("malformed arguments")]
    MalformedArguments(#[from] ArgumentError),
}

/// A record with the given identity was not found.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} was not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Device"`.
    pub entity: &'static str,
    /// The identity that was looked up.
    pub id: String,
}

/// A record with the given identity already exists.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} already exists")]
pub struct AlreadyExistsError {
    /// Entity kind, e.g. `"Device"`.
    pub entity: &'static str,
    /// The identity that collided.
    pub id: String,
}

/// Stored bytes did not parse as the expected entity.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode stored {entity}")]
pub struct DecodeError {
    /// Entity kind, e.g. `"Device"`.
    pub entity: &'static str,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// The dispatcher received an unrecognized operation name.
#[derive(Debug, thiserror::Error)]
#[error("unknown operation {name}")]
pub struct UnknownOperationError {
    /// The operation name as received.
    pub name: String,
}

/// Domain constraint violations on a device payload.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The device id is the record's natural key and must not be empty.
    #[error("device id must not be empty")]
    EmptyDeviceId,

    /// NUL delimits composite-key segments, so ids must not contain it.
    #[error("device id must not contain NUL bytes")]
    DeviceIdContainsNul,

    /// A measurement was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFiniteMeasurement {
        /// Which measurement failed, e.g. `"humidity"`.
        field: &'static str,
    },

    /// Relative humidity is a percentage.
    #[error("humidity {value} is outside the range 0..=100")]
    HumidityOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

/// Dispatch-argument failures: wrong arity or undecodable JSON.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    /// Not enough (or too many) arguments for the operation.
    #[error("{operation} expects {expected} argument(s), {given} given")]
    WrongArity {
        /// The operation being dispatched.
        operation: &'static str,
        /// How many arguments the operation takes.
        expected: usize,
        /// How many arrived.
        given: usize,
    },

    /// An argument was not valid JSON for its expected shape.
    #[error("{operation} argument {index} is not valid JSON")]
    InvalidJson {
        /// The operation being dispatched.
        operation: &'static str,
        /// Zero-based argument position.
        index: usize,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
