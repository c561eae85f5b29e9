//! Estimate and line item models.
//!
//! This module contains the [`Estimate`] header, its owned [`LineItem`]
//! entries, and the [`ExpenseCategory`] / [`EstimateType`] discriminants,
//! mirroring the records the desktop application persists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the expense category of a line item.
///
/// The allocator only ever emits Travel, Lodging, and Per-diem; Meals exists
/// for storage and display parity with manually edited estimates.
///
/// # Example
///
/// ```
/// use estimate_engine::models::ExpenseCategory;
///
/// assert_eq!(ExpenseCategory::Travel.to_string(), "Проезд");
/// assert_eq!(ExpenseCategory::PerDiem.to_string(), "Суточные");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Round-trip transport for the cohort.
    Travel,
    /// Accommodation over the trip days.
    Lodging,
    /// Daily subsistence allowance.
    PerDiem,
    /// Meals (never emitted by the allocator).
    Meals,
}

impl ExpenseCategory {
    /// The position of this category when listing an estimate's items.
    ///
    /// Travel first, then Per-diem, then Lodging, with Meals trailing.
    pub fn listing_rank(self) -> u8 {
        match self {
            ExpenseCategory::Travel => 1,
            ExpenseCategory::PerDiem => 2,
            ExpenseCategory::Lodging => 3,
            ExpenseCategory::Meals => 4,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseCategory::Travel => write!(f, "Проезд"),
            ExpenseCategory::Lodging => write!(f, "Проживание"),
            ExpenseCategory::PerDiem => write!(f, "Суточные"),
            ExpenseCategory::Meals => write!(f, "Питание"),
        }
    }
}

/// Represents which party an estimate covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateType {
    /// The children's cohort estimate.
    Children,
    /// A single trainer's trip estimate.
    Trainer,
}

impl std::fmt::Display for EstimateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateType::Children => write!(f, "ППО"),
            EstimateType::Trainer => write!(f, "УЭВП"),
        }
    }
}

/// A single expense line within an estimate.
///
/// Invariant: `total = people_count * days_count * rate`. The storage layer
/// recomputes the total on every mutation; it is never carried forward from
/// a stale value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier for this line item.
    pub id: Uuid,
    /// The estimate this item belongs to.
    pub estimate_id: Uuid,
    /// The expense category.
    pub category: ExpenseCategory,
    /// Free-text description (e.g., the route string for Travel).
    pub description: String,
    /// Number of people this line covers.
    pub people_count: u32,
    /// Number of days this line spans.
    pub days_count: u32,
    /// Rate in currency per person per day.
    pub rate: Decimal,
    /// Computed total: `people_count * days_count * rate`.
    pub total: Decimal,
}

impl LineItem {
    /// Recomputes the total from the item's own fields.
    pub fn computed_total(&self) -> Decimal {
        Decimal::from(self.people_count) * Decimal::from(self.days_count) * self.rate
    }
}

/// An estimate header owning an ordered set of line items.
///
/// Invariant: `total_amount` equals the sum of the owned items' totals,
/// maintained by the storage layer on every item mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Unique identifier for this estimate.
    pub id: Uuid,
    /// The event this estimate was generated for.
    pub event_id: i64,
    /// Which party the estimate covers.
    pub estimate_type: EstimateType,
    /// The trainer's name, for trainer estimates.
    pub trainer_name: Option<String>,
    /// The approving authority stamped on the printed document.
    pub approved_by: String,
    /// The destination, copied from the event location.
    pub place: String,
    /// Trip start date, when known.
    pub start_date: Option<NaiveDate>,
    /// Trip end date, when known.
    pub end_date: Option<NaiveDate>,
    /// Sum of the owned line items' totals.
    pub total_amount: Decimal,
}
