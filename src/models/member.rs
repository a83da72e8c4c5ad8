use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SPLIT_WEIGHT, OWNER_SENTINEL_ID};

/// Identity of a settlement participant.
///
/// `Owner` is the project owner acting as an implicit participant without a
/// row of their own in the caller's member table. On the wire it maps to the
/// caller-facing sentinel id `-1`; real members keep their integer ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MemberId {
    Owner,
    Id(i64),
}

impl From<i64> for MemberId {
    fn from(raw: i64) -> Self {
        if raw == OWNER_SENTINEL_ID {
            MemberId::Owner
        } else {
            MemberId::Id(raw)
        }
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        match id {
            MemberId::Owner => OWNER_SENTINEL_ID,
            MemberId::Id(raw) => raw,
        }
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

/// A participant in one settlement computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
    /// Positive multiplier governing this member's proportional share of
    /// costs targeted at a group including them.
    pub split_weight: Decimal,
    /// Presentation flag only, not used in calculation.
    pub is_owner: bool,
}

impl Member {
    pub fn new(id: MemberId, display_name: impl Into<String>) -> Self {
        Member {
            id,
            display_name: display_name.into(),
            split_weight: DEFAULT_SPLIT_WEIGHT,
            is_owner: false,
        }
    }

    pub fn owner(id: MemberId, display_name: impl Into<String>) -> Self {
        Member {
            is_owner: true,
            ..Member::new(id, display_name)
        }
    }

    pub fn with_weight(mut self, split_weight: Decimal) -> Self {
        self.split_weight = split_weight;
        self
    }
}
