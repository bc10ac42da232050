//! Confdeck Core - Wire Types
//!
//! Pure data structures with no behavior. The client crate depends on this.
//! This crate contains ONLY data types - no I/O, no business logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// The server-persisted configuration: an opaque string-keyed mapping.
///
/// No schema is enforced client-side. The mapping is replaced wholesale on
/// every load and submitted wholesale on every save, never partially merged.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Wire-level wrapper around every response body.
///
/// `code == 0` means business success and `data` carries the payload.
/// Any other code means business failure and `msg` carries the
/// human-readable reason. Both `data` and `msg` may be absent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub msg: String,
}

impl<T> Envelope<T> {
    /// Whether this envelope reports business success.
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
