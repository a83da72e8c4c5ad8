use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::MemberId;

/// Splits `amount` across `targets` proportionally to their weights.
///
/// Every target except the last in input order gets
/// `round(amount * weight / total_weight)` with midpoints rounded away from
/// zero; the last target absorbs whatever remains, so the returned shares
/// always sum to `amount` exactly. Output order equals input order.
///
/// Returns an empty vec when there are no targets or the total weight is not
/// positive, in which case nothing is allocated.
pub fn allocate_proportional(amount: i64, targets: &[(MemberId, Decimal)]) -> Vec<(MemberId, i64)> {
    let total_weight: Decimal = targets.iter().map(|(_, weight)| *weight).sum();
    if targets.is_empty() || total_weight <= Decimal::ZERO {
        return Vec::new();
    }

    let mut shares = Vec::with_capacity(targets.len());
    let mut assigned: i64 = 0;
    for (position, (id, weight)) in targets.iter().enumerate() {
        let share = if position + 1 == targets.len() {
            amount - assigned
        } else {
            // |share| <= |amount|, so the conversion back to i64 cannot fail
            (Decimal::from(amount) * weight / total_weight)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(0)
        };
        assigned += share;
        shares.push((*id, share));
    }
    shares
}
