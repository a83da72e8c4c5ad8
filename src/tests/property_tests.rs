use std::collections::HashMap;

use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::allocation::allocate_proportional;
use crate::models::{Member, MemberId, MoneyMovement, MovementKind};
use crate::service::SettlementService;

/// Weights between 0.01 and 4.00 in cent steps, so totals stay exact.
fn weight() -> impl Strategy<Value = Decimal> {
    (1i64..=400).prop_map(|n| Decimal::new(n, 2))
}

fn inputs() -> impl Strategy<Value = (Vec<Member>, Vec<MoneyMovement>)> {
    (2usize..=6).prop_flat_map(|member_count| {
        let members = vec(weight(), member_count).prop_map(|weights| {
            weights
                .into_iter()
                .enumerate()
                .map(|(position, w)| {
                    Member::new(MemberId::Id(position as i64 + 1), format!("m{}", position + 1))
                        .with_weight(w)
                })
                .collect::<Vec<_>>()
        });
        let raw_movements = vec(
            (
                0..member_count,
                0i64..=1_000_000,
                any::<bool>(),
                vec(0..member_count, 1..=member_count),
            ),
            0..8,
        );
        (members, raw_movements).prop_map(|(members, raw)| {
            let movements = raw
                .into_iter()
                .map(|(payer, amount, is_income, mut target_positions)| {
                    target_positions.sort_unstable();
                    target_positions.dedup();
                    MoneyMovement {
                        amount,
                        kind: if is_income {
                            MovementKind::Income
                        } else {
                            MovementKind::Expense
                        },
                        payer: members[payer].id,
                        targets: target_positions.iter().map(|&p| members[p].id).collect(),
                    }
                })
                .collect::<Vec<_>>();
            (members, movements)
        })
    })
}

proptest! {
    /// With fully resolving targets, balances sum to zero and applying the
    /// emitted transfers drives every balance to exactly zero.
    #[test]
    fn balances_conserve_and_transfers_settle((members, movements) in inputs()) {
        let service = SettlementService::new();
        let result = service.compute_settlement(&members, &movements).unwrap();

        let total: i64 = result.member_balances.iter().map(|b| b.balance).sum();
        prop_assert_eq!(total, 0);

        let mut remaining: HashMap<MemberId, i64> = result
            .member_balances
            .iter()
            .map(|b| (b.member_id, b.balance))
            .collect();
        for transfer in &result.transfers {
            prop_assert!(transfer.amount > 0);
            *remaining.get_mut(&transfer.from).unwrap() += transfer.amount;
            *remaining.get_mut(&transfer.to).unwrap() -= transfer.amount;
        }
        for (member_id, balance) in remaining {
            prop_assert_eq!(balance, 0, "member {} not settled", member_id);
        }
    }

    #[test]
    fn transfer_count_is_bounded((members, movements) in inputs()) {
        let service = SettlementService::new();
        let result = service.compute_settlement(&members, &movements).unwrap();

        let creditors = result.member_balances.iter().filter(|b| b.balance > 0).count();
        let debtors = result.member_balances.iter().filter(|b| b.balance < 0).count();
        let bound = (creditors + debtors).saturating_sub(1);
        prop_assert!(result.transfers.len() <= bound);
    }

    #[test]
    fn recomputation_is_identical((members, movements) in inputs()) {
        let service = SettlementService::new();
        let first = service.compute_settlement(&members, &movements).unwrap();
        let second = service.compute_settlement(&members, &movements).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Allocated shares sum exactly to the input amount, whatever the
    /// per-target rounding did.
    #[test]
    fn allocation_is_exact(
        amount in -1_000_000i64..=1_000_000,
        weights in vec(weight(), 1..6),
    ) {
        let targets: Vec<(MemberId, Decimal)> = weights
            .into_iter()
            .enumerate()
            .map(|(position, w)| (MemberId::Id(position as i64), w))
            .collect();

        let shares = allocate_proportional(amount, &targets);
        prop_assert_eq!(shares.len(), targets.len());
        prop_assert_eq!(shares.iter().map(|(_, s)| s).sum::<i64>(), amount);
    }
}
