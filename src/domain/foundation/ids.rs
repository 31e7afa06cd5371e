//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single end-user conversation on the messaging transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Creates a ChatId from the transport's raw integer key.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ChatId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical location identifier issued by the hotel directory.
///
/// The remote API hands these out as opaque strings ("destinationId"),
/// so no numeric interpretation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_round_trips_raw_value() {
        let chat = ChatId::new(-1001234);
        assert_eq!(chat.as_i64(), -1001234);
        assert_eq!(chat.to_string(), "-1001234");
    }

    #[test]
    fn location_id_displays_raw_text() {
        let id = LocationId::new("1506246");
        assert_eq!(id.as_str(), "1506246");
        assert_eq!(format!("{}", id), "1506246");
    }

    #[test]
    fn location_id_serializes_transparently() {
        let id = LocationId::new("549499");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"549499\"");
    }
}
