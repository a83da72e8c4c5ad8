use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::allocation::allocate_proportional;
use crate::models::{Member, MemberId, MoneyMovement};

/// Raw paid/share accumulation for one member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregationRow {
    pub total_paid: i64,
    pub total_share: i64,
}

/// Per-member accumulator for the payment aggregation stage.
///
/// Rows are stored in member input order and seeded to zero for every member,
/// so members with no activity still come out with explicit zero entries.
/// Built fresh per computation; nothing is shared between calls.
pub struct BalanceLedger {
    rows: Vec<AggregationRow>,
    weights: Vec<Decimal>,
    index: HashMap<MemberId, usize>,
}

impl BalanceLedger {
    /// Assumes member ids were already checked for uniqueness.
    pub fn new(members: &[Member]) -> Self {
        let index = members
            .iter()
            .enumerate()
            .map(|(position, member)| (member.id, position))
            .collect();
        BalanceLedger {
            rows: vec![AggregationRow::default(); members.len()],
            weights: members.iter().map(|m| m.split_weight).collect(),
            index,
        }
    }

    /// Folds one movement into the ledger. Targets that do not resolve to a
    /// member are dropped from allocation; under the strict target policy
    /// validation has already guaranteed there are none.
    pub fn apply(&mut self, movement: &MoneyMovement) {
        let signed_amount = movement.signed_amount();

        if let Some(&payer_row) = self.index.get(&movement.payer) {
            self.rows[payer_row].total_paid += signed_amount;
        }

        let resolved: Vec<(MemberId, Decimal)> = movement
            .targets
            .iter()
            .filter_map(|target| {
                self.index
                    .get(target)
                    .map(|&row| (*target, self.weights[row]))
            })
            .collect();
        if resolved.len() < movement.targets.len() {
            debug!(
                "dropped {} unresolved target(s) from allocation",
                movement.targets.len() - resolved.len()
            );
        }

        for (target, share) in allocate_proportional(signed_amount, &resolved) {
            if let Some(&row) = self.index.get(&target) {
                self.rows[row].total_share += share;
            }
        }
    }

    /// Row for the member at `position` in the input member order.
    pub fn row(&self, position: usize) -> AggregationRow {
        self.rows.get(position).copied().unwrap_or_default()
    }
}
