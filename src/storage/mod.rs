//! The persistence boundary of the estimate engine.
//!
//! The engine never talks to a database directly; it writes through the
//! narrow [`EstimateStore`] trait. The desktop application backs this trait
//! with its embedded database, while [`MemoryStore`] provides the in-process
//! reference implementation used by tests.
//!
//! The storage contract: an item's `total` is always recomputed as
//! `people_count * days_count * rate` on add/update, and the owning
//! estimate's `total_amount` is recomputed as the sum of its items' totals
//! on every item mutation. Deleting an estimate cascades to its items.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Estimate, EstimateType, Event, ExpenseCategory, LineItem};

/// The narrow persistence interface consumed by the estimate generator.
pub trait EstimateStore {
    /// Looks up an event by its identifier.
    fn get_event_by_id(&self, event_id: i64) -> EngineResult<Event>;

    /// Creates an estimate header and returns its identifier.
    #[allow(clippy::too_many_arguments)]
    fn create_estimate(
        &mut self,
        event_id: i64,
        estimate_type: EstimateType,
        trainer_name: Option<&str>,
        approved_by: &str,
        place: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Uuid>;

    /// Adds a line item to an estimate.
    ///
    /// The stored `total` is recomputed from the given fields, and the
    /// owning estimate's `total_amount` is refreshed.
    fn add_estimate_item(
        &mut self,
        estimate_id: Uuid,
        category: ExpenseCategory,
        description: &str,
        people_count: u32,
        days_count: u32,
        rate: Decimal,
    ) -> EngineResult<Uuid>;

    /// Updates a line item in place, under the same recomputation contract
    /// as [`EstimateStore::add_estimate_item`].
    fn update_estimate_item(
        &mut self,
        item_id: Uuid,
        category: ExpenseCategory,
        description: &str,
        people_count: u32,
        days_count: u32,
        rate: Decimal,
    ) -> EngineResult<()>;

    /// Deletes a line item and refreshes the owning estimate's total.
    fn delete_estimate_item(&mut self, item_id: Uuid) -> EngineResult<()>;

    /// Looks up an estimate header by its identifier.
    fn get_estimate(&self, estimate_id: Uuid) -> EngineResult<Estimate>;

    /// Returns an estimate's items in listing order
    /// (Travel, Per-diem, Lodging, Meals).
    fn get_estimate_items(&self, estimate_id: Uuid) -> EngineResult<Vec<LineItem>>;

    /// Returns all estimates generated for an event.
    fn get_estimates_by_event(&self, event_id: i64) -> EngineResult<Vec<Estimate>>;

    /// Deletes an estimate, cascading to its line items.
    fn delete_estimate(&mut self, estimate_id: Uuid) -> EngineResult<()>;
}
