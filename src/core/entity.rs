//! Card instance identity with simple integer IDs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque identity of a single card instance
///
/// Two cards built from the same catalog template share a name but never an
/// id. Ids are handed out from a process-wide counter, so an id minted by
/// [`CardId::fresh`] is never reused for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        CardId(id)
    }

    /// Mint an id that no other live card carries
    pub fn fresh() -> Self {
        CardId(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = CardId::fresh();
        let b = CardId::fresh();
        let c = CardId::fresh();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(b.as_u32() > a.as_u32());
    }

    #[test]
    fn test_display() {
        assert_eq!(CardId::new(42).to_string(), "#42");
    }
}
