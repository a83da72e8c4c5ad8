pub mod member;
pub mod movement;
pub mod settlement;

pub use member::{Member, MemberId};
pub use movement::{MoneyMovement, MovementKind};
pub use settlement::{MemberBalance, SettlementResult, Transfer};
