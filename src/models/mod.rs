//! Core data models for the estimate engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod estimate;
mod event;

pub use audit::AuditStep;
pub use estimate::{Estimate, EstimateType, ExpenseCategory, LineItem};
pub use event::{Event, EventType, Trainer};
