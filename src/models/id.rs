//! Record identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new record ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Generator for collision-resistant record identifiers.
///
/// Ids combine a kind prefix, the current time and a session-monotonic
/// counter in base 36, and a random suffix. The counter makes ids generated
/// within one session pairwise distinct regardless of clock resolution; the
/// suffix guards across sessions. The prefix is a debugging aid only and
/// carries no semantic meaning.
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Generates an identifier with the given prefix.
    #[must_use]
    pub fn generate(&self, prefix: &str) -> RecordId {
        use rand::RngExt;

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let noise: String = rand::rng()
            .sample_iter(rand::distr::Alphanumeric)
            .take(6)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        RecordId::new(format!(
            "{prefix}_{}{}_{noise}",
            to_base36(millis),
            to_base36(u128::from(seq))
        ))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a value in lowercase base 36.
fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(char::from(DIGITS[(value % 36) as usize]));
        value /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_id_display_and_as_str() {
        let id = RecordId::new("c_abc123");
        assert_eq!(id.as_str(), "c_abc123");
        assert_eq!(id.to_string(), "c_abc123");
    }

    #[test]
    fn test_generated_ids_carry_prefix() {
        let ids = IdGenerator::new();
        let id = ids.generate("c");
        assert!(id.as_str().starts_with("c_"));
    }

    #[test]
    fn test_generated_ids_are_pairwise_distinct() {
        let ids = IdGenerator::new();
        let generated: HashSet<RecordId> = (0..500).map(|_| ids.generate("s")).collect();
        assert_eq!(generated.len(), 500);
    }

    #[test]
    fn test_base36_rendering() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_000), "rs");
    }
}
