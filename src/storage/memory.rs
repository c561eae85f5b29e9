//! In-memory reference implementation of the storage boundary.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Estimate, EstimateType, Event, ExpenseCategory, LineItem};

use super::EstimateStore;

/// HashMap-backed [`EstimateStore`] implementation.
///
/// Serves as the reference implementation of the recomputation contract and
/// as the store used throughout the test suite. Line items are kept in
/// insertion order; listings sort by category rank with insertion order
/// preserved within a rank.
///
/// # Example
///
/// ```
/// use estimate_engine::models::{EstimateType, ExpenseCategory};
/// use estimate_engine::storage::{EstimateStore, MemoryStore};
/// use rust_decimal::Decimal;
///
/// let mut store = MemoryStore::new();
/// let id = store
///     .create_estimate(1, EstimateType::Children, None, "", "г. Тюмень", None, None)
///     .unwrap();
/// store
///     .add_estimate_item(id, ExpenseCategory::Travel, "", 12, 2, Decimal::from(300))
///     .unwrap();
/// assert_eq!(store.get_estimate(id).unwrap().total_amount, Decimal::from(7200));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: HashMap<i64, Event>,
    estimates: HashMap<Uuid, Estimate>,
    items: Vec<LineItem>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an event.
    pub fn put_event(&mut self, event: Event) {
        self.events.insert(event.id, event);
    }

    /// Refreshes an estimate's `total_amount` from its items.
    fn refresh_estimate_total(&mut self, estimate_id: Uuid) {
        let total: Decimal = self
            .items
            .iter()
            .filter(|i| i.estimate_id == estimate_id)
            .map(|i| i.total)
            .sum();
        if let Some(estimate) = self.estimates.get_mut(&estimate_id) {
            estimate.total_amount = total;
        }
    }
}

impl EstimateStore for MemoryStore {
    fn get_event_by_id(&self, event_id: i64) -> EngineResult<Event> {
        self.events
            .get(&event_id)
            .cloned()
            .ok_or(EngineError::EventNotFound { event_id })
    }

    fn create_estimate(
        &mut self,
        event_id: i64,
        estimate_type: EstimateType,
        trainer_name: Option<&str>,
        approved_by: &str,
        place: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Uuid> {
        let id = Uuid::new_v4();
        let estimate = Estimate {
            id,
            event_id,
            estimate_type,
            trainer_name: trainer_name.map(str::to_string),
            approved_by: approved_by.to_string(),
            place: place.to_string(),
            start_date,
            end_date,
            total_amount: Decimal::ZERO,
        };
        debug!(estimate_id = %id, event_id, %estimate_type, "created estimate");
        self.estimates.insert(id, estimate);
        Ok(id)
    }

    fn add_estimate_item(
        &mut self,
        estimate_id: Uuid,
        category: ExpenseCategory,
        description: &str,
        people_count: u32,
        days_count: u32,
        rate: Decimal,
    ) -> EngineResult<Uuid> {
        if !self.estimates.contains_key(&estimate_id) {
            return Err(EngineError::EstimateNotFound { estimate_id });
        }

        let mut item = LineItem {
            id: Uuid::new_v4(),
            estimate_id,
            category,
            description: description.to_string(),
            people_count,
            days_count,
            rate,
            total: Decimal::ZERO,
        };
        item.total = item.computed_total();
        let item_id = item.id;

        debug!(estimate_id = %estimate_id, item_id = %item_id, %category, total = %item.total, "added estimate item");
        self.items.push(item);
        self.refresh_estimate_total(estimate_id);
        Ok(item_id)
    }

    fn update_estimate_item(
        &mut self,
        item_id: Uuid,
        category: ExpenseCategory,
        description: &str,
        people_count: u32,
        days_count: u32,
        rate: Decimal,
    ) -> EngineResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(EngineError::ItemNotFound { item_id })?;

        item.category = category;
        item.description = description.to_string();
        item.people_count = people_count;
        item.days_count = days_count;
        item.rate = rate;
        item.total = item.computed_total();

        let estimate_id = item.estimate_id;
        self.refresh_estimate_total(estimate_id);
        Ok(())
    }

    fn delete_estimate_item(&mut self, item_id: Uuid) -> EngineResult<()> {
        let position = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(EngineError::ItemNotFound { item_id })?;

        let estimate_id = self.items.remove(position).estimate_id;
        self.refresh_estimate_total(estimate_id);
        Ok(())
    }

    fn get_estimate(&self, estimate_id: Uuid) -> EngineResult<Estimate> {
        self.estimates
            .get(&estimate_id)
            .cloned()
            .ok_or(EngineError::EstimateNotFound { estimate_id })
    }

    fn get_estimate_items(&self, estimate_id: Uuid) -> EngineResult<Vec<LineItem>> {
        if !self.estimates.contains_key(&estimate_id) {
            return Err(EngineError::EstimateNotFound { estimate_id });
        }

        let mut items: Vec<LineItem> = self
            .items
            .iter()
            .filter(|i| i.estimate_id == estimate_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.category.listing_rank());
        Ok(items)
    }

    fn get_estimates_by_event(&self, event_id: i64) -> EngineResult<Vec<Estimate>> {
        let mut estimates: Vec<Estimate> = self
            .estimates
            .values()
            .filter(|e| e.event_id == event_id)
            .cloned()
            .collect();
        estimates.sort_by(|a, b| {
            (a.estimate_type as u8, &a.trainer_name).cmp(&(b.estimate_type as u8, &b.trainer_name))
        });
        Ok(estimates)
    }

    fn delete_estimate(&mut self, estimate_id: Uuid) -> EngineResult<()> {
        self.estimates
            .remove(&estimate_id)
            .ok_or(EngineError::EstimateNotFound { estimate_id })?;
        self.items.retain(|i| i.estimate_id != estimate_id);
        debug!(estimate_id = %estimate_id, "deleted estimate and its items");
        Ok(())
    }
}
