use serde_json::Value;

use crate::kv::KvStore;
use crate::{Error, Result};

/// Storage key remembering that the gate was passed.
const ACCESS_KEY: &str = "ccoi_access";

/// Access code shipped with the companion when none is configured.
pub const DEFAULT_ACCESS_CODE: &str = "CCOI2026";

/// The shared-code entry gate.
///
/// One literal code for every attendee, remembered locally once entered.
/// This is a convenience gate, not a security boundary: no hashing, no
/// attempt limit, and the code sits in plain config.
#[derive(Debug, Clone)]
pub struct AccessGate {
    code: String,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODE)
    }
}

impl AccessGate {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Compare the entered code and remember success.
    pub fn unlock(&self, store: &mut dyn KvStore, entered: &str) -> Result<()> {
        if entered.trim() != self.code {
            return Err(Error::InvalidAccessCode);
        }
        store.set(ACCESS_KEY, Value::Bool(true))
    }

    /// Forget the remembered unlock.
    pub fn lock(&self, store: &mut dyn KvStore) -> Result<()> {
        store.remove(ACCESS_KEY)
    }

    pub fn is_unlocked(&self, store: &dyn KvStore) -> bool {
        matches!(store.get(ACCESS_KEY), Ok(Some(Value::Bool(true))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;

    #[test]
    fn test_unlock_with_correct_code() {
        let gate = AccessGate::default();
        let mut store = MemoryKvStore::new();

        assert!(!gate.is_unlocked(&store));
        gate.unlock(&mut store, "CCOI2026").unwrap();
        assert!(gate.is_unlocked(&store));
    }

    #[test]
    fn test_entered_code_is_trimmed() {
        let gate = AccessGate::default();
        let mut store = MemoryKvStore::new();
        gate.unlock(&mut store, "  CCOI2026  ").unwrap();
        assert!(gate.is_unlocked(&store));
    }

    #[test]
    fn test_wrong_code_rejected() {
        let gate = AccessGate::default();
        let mut store = MemoryKvStore::new();

        let err = gate.unlock(&mut store, "letmein").unwrap_err();
        assert!(matches!(err, Error::InvalidAccessCode));
        assert!(!gate.is_unlocked(&store));
    }

    #[test]
    fn test_lock_forgets_state() {
        let gate = AccessGate::new("SECRET");
        let mut store = MemoryKvStore::new();

        gate.unlock(&mut store, "SECRET").unwrap();
        gate.lock(&mut store).unwrap();
        assert!(!gate.is_unlocked(&store));
    }
}
