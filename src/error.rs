use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::MemberId;

/// Input validation failures. All of these are detected before aggregation
/// starts, so a computation either fails whole or returns a complete result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SettlementError {
    /// Member list contains the same id twice
    #[error("member id {0} appears more than once")]
    DuplicateMemberId(MemberId),

    /// A member's split weight is zero or negative, which would make
    /// proportional allocation undefined
    #[error("member {member_id} has non-positive split weight {split_weight}")]
    NonPositiveWeight {
        member_id: MemberId,
        split_weight: Decimal,
    },

    /// A movement carries a negative amount; sign is conveyed by its kind
    #[error("movement {index} has negative amount {amount}")]
    NegativeAmount { index: usize, amount: i64 },

    /// A movement's payer or target does not resolve to a supplied member
    #[error("movement {index} references unknown member {member_id}")]
    UnknownMemberReference { index: usize, member_id: MemberId },
}
