//! Travel Expense Estimate Engine
//!
//! This crate provides the estimate-generation core for a children's sports
//! club calendar application: given an away event's planned budgets, it splits
//! each lump sum across Travel, Lodging, and Per-diem expense items according
//! to region-dependent per-diem rates and minimum-spend floors, then
//! reconciles the result so the line items sum back to the requested budget.

#![warn(missing_docs)]

pub mod allocation;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod storage;
