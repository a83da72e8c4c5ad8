pub mod aggregation;
pub mod allocation;
pub mod constants;
pub mod error;
pub mod models;
pub mod service;

pub use allocation::allocate_proportional;
pub use error::SettlementError;
pub use service::{SettlementService, TargetPolicy};

#[cfg(test)]
mod tests; // Include scenario and property tests
