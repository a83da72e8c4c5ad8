use std::collections::HashSet;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::aggregation::BalanceLedger;
use crate::error::SettlementError;
use crate::models::{Member, MemberBalance, MemberId, MoneyMovement, SettlementResult, Transfer};

/// How movement targets that do not resolve to a supplied member are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetPolicy {
    /// Reject the whole computation with `UnknownMemberReference`.
    #[default]
    Strict,
    /// Legacy compatibility: drop unresolved targets from allocation and
    /// keep going. Balances may then no longer sum to zero; flow reduction
    /// tolerates the leftover.
    SkipUnknown,
}

/// Weighted expense-split settlement engine.
///
/// Pure and synchronous: each call consumes plain member and movement data
/// and returns a fresh result. Holds only policy, no state, so one instance
/// can serve concurrent computations.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementService {
    target_policy: TargetPolicy,
}

impl SettlementService {
    pub fn new() -> Self {
        SettlementService::default()
    }

    pub fn with_target_policy(target_policy: TargetPolicy) -> Self {
        SettlementService { target_policy }
    }

    /// Computes per-member balances and a greedy transfer list that settles
    /// them.
    ///
    /// `members` must contain every member referenced by a movement,
    /// including a `MemberId::Owner` entry when movements are paid by the
    /// implicit owner. Validation runs before any aggregation; a malformed
    /// input never produces a partial result.
    pub fn compute_settlement(
        &self,
        members: &[Member],
        movements: &[MoneyMovement],
    ) -> Result<SettlementResult, SettlementError> {
        self.validate(members, movements)?;

        let mut ledger = BalanceLedger::new(members);
        for movement in movements {
            ledger.apply(movement);
        }

        let member_balances = derive_balances(members, &ledger);
        let total_amount = member_balances.iter().map(|b| b.share_amount).sum();
        let transfers = reduce_flows(&member_balances);

        debug!(
            "settled {} members over {} movements into {} transfers",
            members.len(),
            movements.len(),
            transfers.len()
        );

        Ok(SettlementResult {
            total_amount,
            member_balances,
            transfers,
        })
    }

    fn validate(
        &self,
        members: &[Member],
        movements: &[MoneyMovement],
    ) -> Result<(), SettlementError> {
        let mut known = HashSet::with_capacity(members.len());
        for member in members {
            if !known.insert(member.id) {
                warn!("rejecting input: duplicate member id {}", member.id);
                return Err(SettlementError::DuplicateMemberId(member.id));
            }
            if member.split_weight <= Decimal::ZERO {
                warn!(
                    "rejecting input: member {} has split weight {}",
                    member.id, member.split_weight
                );
                return Err(SettlementError::NonPositiveWeight {
                    member_id: member.id,
                    split_weight: member.split_weight,
                });
            }
        }

        for (index, movement) in movements.iter().enumerate() {
            if movement.amount < 0 {
                warn!(
                    "rejecting input: movement {} has negative amount {}",
                    index, movement.amount
                );
                return Err(SettlementError::NegativeAmount {
                    index,
                    amount: movement.amount,
                });
            }
            // A movement needs a resolvable payer in both policies; the
            // implicit-owner case is covered by MemberId::Owner, not by
            // skipping.
            if !known.contains(&movement.payer) {
                warn!(
                    "rejecting input: movement {} paid by unknown member {}",
                    index, movement.payer
                );
                return Err(SettlementError::UnknownMemberReference {
                    index,
                    member_id: movement.payer,
                });
            }
            for &target in &movement.targets {
                if !known.contains(&target) {
                    match self.target_policy {
                        TargetPolicy::Strict => {
                            warn!(
                                "rejecting input: movement {} targets unknown member {}",
                                index, target
                            );
                            return Err(SettlementError::UnknownMemberReference {
                                index,
                                member_id: target,
                            });
                        }
                        TargetPolicy::SkipUnknown => {
                            warn!(
                                "movement {} targets unknown member {}, skipping it during allocation",
                                index, target
                            );
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Balance derivation: one output row per input member, in input order.
/// Pure transform, never drops or adds members.
fn derive_balances(members: &[Member], ledger: &BalanceLedger) -> Vec<MemberBalance> {
    members
        .iter()
        .enumerate()
        .map(|(position, member)| {
            let row = ledger.row(position);
            MemberBalance {
                member_id: member.id,
                display_name: member.display_name.clone(),
                split_weight: member.split_weight,
                is_owner: member.is_owner,
                total_paid: row.total_paid,
                share_amount: row.total_share,
                balance: row.total_paid - row.total_share,
            }
        })
        .collect()
}

/// Flow reduction: greedy two-pointer matching of debtors against creditors
/// in encounter order. No sorting by magnitude, so the output is fully
/// determined by the member order of `balances`.
fn reduce_flows(balances: &[MemberBalance]) -> Vec<Transfer> {
    let mut creditors: Vec<(MemberId, i64)> = balances
        .iter()
        .filter(|b| b.balance > 0)
        .map(|b| (b.member_id, b.balance))
        .collect();
    let mut debtors: Vec<(MemberId, i64)> = balances
        .iter()
        .filter(|b| b.balance < 0)
        .map(|b| (b.member_id, b.balance))
        .collect();

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    // Credits and debits cancel out when every target resolved, so both
    // cursors normally exhaust together; a leftover on one side (legacy
    // skip mode) just ends the walk.
    while i < creditors.len() && j < debtors.len() {
        let amount = creditors[i].1.min(-debtors[j].1);
        if amount > 0 {
            transfers.push(Transfer {
                from: debtors[j].0,
                to: creditors[i].0,
                amount,
            });
            creditors[i].1 -= amount;
            debtors[j].1 += amount;
        }
        if creditors[i].1 <= 0 {
            i += 1;
        }
        if debtors[j].1 >= 0 {
            j += 1;
        }
    }

    transfers
}
