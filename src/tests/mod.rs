mod property_tests;

use crate::models::{Member, MemberId};

pub fn member(id: i64, name: &str) -> Member {
    Member::new(MemberId::Id(id), name)
}

pub fn owner(name: &str) -> Member {
    Member::owner(MemberId::Owner, name)
}
