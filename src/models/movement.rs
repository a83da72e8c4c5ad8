use serde::{Deserialize, Serialize};

use super::member::MemberId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Expense,
    /// Treated as a negative expense: it reduces the targets' owed share
    /// instead of increasing it.
    Income,
}

/// One recorded expense or income event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoneyMovement {
    /// Non-negative amount in currency minor units. Sign is carried by `kind`.
    pub amount: i64,
    pub kind: MovementKind,
    /// Who paid. `MemberId::Owner` covers records whose payer column was
    /// left empty, meaning the implicit project owner.
    pub payer: MemberId,
    /// Members who jointly owe this amount, proportionally to their split
    /// weight, in caller-determined order. Empty means only the payer's paid
    /// total is affected.
    pub targets: Vec<MemberId>,
}

impl MoneyMovement {
    pub fn expense(amount: i64, payer: MemberId, targets: Vec<MemberId>) -> Self {
        MoneyMovement {
            amount,
            kind: MovementKind::Expense,
            payer,
            targets,
        }
    }

    pub fn income(amount: i64, payer: MemberId, targets: Vec<MemberId>) -> Self {
        MoneyMovement {
            amount,
            kind: MovementKind::Income,
            payer,
            targets,
        }
    }

    /// Amount with the kind's sign applied: expenses count positive,
    /// income negative.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            MovementKind::Expense => self.amount,
            MovementKind::Income => -self.amount,
        }
    }
}
