//! Configuration loading and management for the estimate engine.
//!
//! This module provides the strongly-typed allocation parameters (per-diem
//! rate tiers, minimum-spend floors, trip defaults, approving authorities)
//! and functionality to load them from a YAML file. Built-in defaults carry
//! the values used by the club, so the engine is fully functional with no
//! configuration file present.
//!
//! # Example
//!
//! ```
//! use estimate_engine::config::AllocationConfig;
//!
//! let config = AllocationConfig::default();
//! assert_eq!(config.trip.travel_days, 2);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllocationConfig, ApprovalAuthorities, MinimumFloors, PerDiemRates, TripDefaults,
};
