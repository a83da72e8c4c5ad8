use rust_decimal::Decimal;

/// Wire value standing in for `MemberId::Owner` when member ids are
/// serialized as plain integers. Callers that keep the project owner out of
/// the member table use `-1` for the owner's implicit row.
pub const OWNER_SENTINEL_ID: i64 = -1;

/// Split weight assigned to a member when the caller does not specify one.
/// A weight of 1 means an equal share.
pub const DEFAULT_SPLIT_WEIGHT: Decimal = Decimal::ONE;
