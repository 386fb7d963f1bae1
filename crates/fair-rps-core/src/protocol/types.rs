//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Pairs a round's announcement with its reveal
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_round_gets_its_own_id() {
        assert_ne!(RoundId::new(), RoundId::new());
    }

    #[test]
    fn test_round_id_serializes_as_plain_uuid() {
        let id = RoundId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: RoundId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<RoundId>("\"not-a-uuid\"").is_err());
    }
}
