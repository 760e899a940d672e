//! Issuance timestamps, as integer milliseconds since the Unix epoch.
//!
//! Integers only: the value is part of canonical signing input, which
//! rejects floats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochMillis(u64);

impl EpochMillis {
    /// The zero timestamp, used for "never happened" fields.
    pub const ZERO: EpochMillis = EpochMillis(0);

    pub fn now() -> Self {
        // Clamp pre-epoch clocks to zero.
        let ms = chrono::Utc::now().timestamp_millis();
        Self(u64::try_from(ms).unwrap_or(0))
    }

    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2023() {
        assert!(EpochMillis::now().as_millis() > 1_672_531_200_000);
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&EpochMillis::from_millis(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&EpochMillis::ZERO).unwrap(), "0");
    }
}
