use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// Per-member settlement row: what they paid, what they owe, and the net.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberBalance {
    pub member_id: MemberId,
    pub display_name: String,
    pub split_weight: Decimal,
    pub is_owner: bool,
    pub total_paid: i64,
    pub share_amount: i64,
    /// `total_paid - share_amount`; positive = to be reimbursed,
    /// negative = owes money.
    pub balance: i64,
}

/// A suggested point-to-point payment. Amount is always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: i64,
}

/// Output of one settlement computation. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Sum of all members' share amounts, i.e. total allocated cost. Agrees
    /// with the raw movement total only when every movement targets the full
    /// member set.
    pub total_amount: i64,
    /// One row per input member, in input order.
    pub member_balances: Vec<MemberBalance>,
    pub transfers: Vec<Transfer>,
}
