//! Allocation logic for the estimate engine.
//!
//! This module contains the budget-to-expense-items core: per-diem rate
//! resolution from the event location, the rounding policies used for unit
//! rates, deterministic trip-length derivation from event identity, and the
//! budget allocator with its exact-reconciliation step.

mod allocator;
mod rate_table;
mod rounding;
mod trip_profile;

pub use allocator::{
    AllocatedItem, AllocationResult, BudgetRequest, DEFAULT_TRAVEL_DAYS, allocate_budget,
};
pub use rate_table::RateTable;
pub use rounding::{round_to_beautiful, round_up_to_10};
pub use trip_profile::derive_trip_days;
