//! Composite keys — the ledger's addressing scheme.
//!
//! A composite key concatenates a namespace tag with one or more identifying
//! parts, each segment terminated by a NUL byte:
//!
//! ```text
//! 0x00 <namespace> 0x00 <part> 0x00 [<part> 0x00 ...]
//! ```
//!
//! The leading NUL keeps composite keys out of the range of plain keys; the
//! per-segment terminators make derivation collision-free for distinct parts
//! and let a namespace prefix match exactly the keys derived under it.
//!
//! Segments must not contain NUL. That invariant is enforced upstream
//! ([`DeviceId::validate`](crate::id::DeviceId::validate)) so derivation
//! itself stays infallible.

/// Delimiter terminating every key segment.
const DELIMITER: u8 = 0x00;

/// A fully-derived store key for one record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompositeKey(Vec<u8>);

impl CompositeKey {
    /// Derive the key for `parts` under `namespace`.
    #[must_use]
    pub fn new(namespace: &str, parts: &[&str]) -> Self {
        let mut bytes = Vec::with_capacity(
            2 + namespace.len() + parts.iter().map(|p| p.len() + 1).sum::<usize>(),
        );
        bytes.push(DELIMITER);
        bytes.extend_from_slice(namespace.as_bytes());
        bytes.push(DELIMITER);
        for part in parts {
            bytes.extend_from_slice(part.as_bytes());
            bytes.push(DELIMITER);
        }
        Self(bytes)
    }

    /// View the derived key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the key, returning the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// The common prefix of every key in a namespace, used for scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPrefix(Vec<u8>);

impl KeyPrefix {
    /// Build the prefix covering all keys derived under `namespace`.
    #[must_use]
    pub fn namespace(namespace: &str) -> Self {
        let mut bytes = Vec::with_capacity(2 + namespace.len());
        bytes.push(DELIMITER);
        bytes.extend_from_slice(namespace.as_bytes());
        bytes.push(DELIMITER);
        Self(bytes)
    }

    /// View the prefix bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether `key` was derived under this prefix's namespace.
    #[must_use]
    pub fn matches(&self, key: &[u8]) -> bool {
        key.starts_with(&self.0)
    }
}
