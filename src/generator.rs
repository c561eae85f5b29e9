//! Automatic estimate generation for away events.
//!
//! The [`EstimateGenerator`] orchestrates the budget allocator per event:
//! one estimate for the children's cohort and one per assigned trainer, each
//! persisted through the storage boundary. Re-running generation for an
//! event replaces all of its prior estimates wholesale.

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::allocation::{AllocationResult, BudgetRequest, RateTable, allocate_budget, derive_trip_days};
use crate::config::AllocationConfig;
use crate::error::EngineResult;
use crate::models::{EstimateType, Event, Trainer};
use crate::storage::EstimateStore;

/// Generates travel expense estimates for away events.
///
/// Holds the allocation configuration and the rate table derived from it.
/// The generator itself is stateless beyond configuration; all persistence
/// goes through the [`EstimateStore`] passed to each call.
///
/// # Example
///
/// ```
/// use estimate_engine::generator::EstimateGenerator;
/// use estimate_engine::models::{Event, EventType};
/// use estimate_engine::storage::MemoryStore;
/// use rust_decimal::Decimal;
///
/// let generator = EstimateGenerator::default();
/// let mut store = MemoryStore::new();
///
/// let event = Event {
///     id: 1,
///     year: 2025,
///     sport: "Лыжные гонки".to_string(),
///     event_type: EventType::Away,
///     name: "Первенство области".to_string(),
///     location: "г. Тюмень".to_string(),
///     month: "Февраль".to_string(),
///     children_budget: Decimal::from(100_000),
///     trainers_count: 0,
///     trainers_budget: Decimal::ZERO,
///     trainers: vec![],
/// };
///
/// let (children_id, trainer_ids) = generator
///     .auto_generate_estimates(&mut store, &event)
///     .unwrap();
/// assert!(children_id.is_some());
/// assert!(trainer_ids.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EstimateGenerator {
    config: AllocationConfig,
    rate_table: RateTable,
}

impl EstimateGenerator {
    /// Creates a generator from an allocation configuration.
    pub fn new(config: AllocationConfig) -> Self {
        let rate_table = RateTable::from_config(&config.rates);
        Self { config, rate_table }
    }

    /// Returns the generator's configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Generates all estimates for an event, replacing any prior ones.
    ///
    /// Returns `(None, [])` without side effects for non-away events. For
    /// away events, all previously generated estimates for the event are
    /// deleted first (cascading to their line items), then one children's
    /// cohort estimate and one estimate per trainer share are created. The
    /// children's header is created even when the children's budget is
    /// non-positive; it simply owns no items in that case.
    ///
    /// Persistence failures propagate to the caller; there is no retry and
    /// no rollback of already-written estimates.
    pub fn auto_generate_estimates<S: EstimateStore>(
        &self,
        store: &mut S,
        event: &Event,
    ) -> EngineResult<(Option<Uuid>, Vec<Uuid>)> {
        if !event.is_away() {
            return Ok((None, Vec::new()));
        }

        // Full replace: regeneration never merges with prior estimates.
        for existing in store.get_estimates_by_event(event.id)? {
            store.delete_estimate(existing.id)?;
        }

        let daily_rate = self.rate_table.daily_rate(&event.location);
        let trip_days = derive_trip_days(event, &self.config.trip);

        let children_id = self.generate_children_estimate(store, event, trip_days, daily_rate)?;

        let mut trainer_ids = Vec::new();
        for trainer in event.trainer_shares() {
            let id =
                self.generate_trainer_estimate(store, event, &trainer, trip_days, daily_rate)?;
            trainer_ids.push(id);
        }

        info!(
            event_id = event.id,
            location = %event.location,
            trip_days,
            daily_rate = %daily_rate,
            trainer_estimates = trainer_ids.len(),
            "generated estimates"
        );

        Ok((Some(children_id), trainer_ids))
    }

    /// Convenience wrapper that loads the event from the store first.
    pub fn auto_generate_for_event_id<S: EstimateStore>(
        &self,
        store: &mut S,
        event_id: i64,
    ) -> EngineResult<(Option<Uuid>, Vec<Uuid>)> {
        let event = store.get_event_by_id(event_id)?;
        self.auto_generate_estimates(store, &event)
    }

    fn generate_children_estimate<S: EstimateStore>(
        &self,
        store: &mut S,
        event: &Event,
        trip_days: u32,
        daily_rate: Decimal,
    ) -> EngineResult<Uuid> {
        let estimate_id = store.create_estimate(
            event.id,
            EstimateType::Children,
            None,
            &self.config.approvals.children,
            &event.location,
            None,
            None,
        )?;

        let request = BudgetRequest {
            total_budget: event.children_budget,
            headcount: self.config.trip.children_headcount,
            trip_days,
            travel_days: self.config.trip.travel_days,
            daily_rate,
        };
        let result = allocate_budget(&request, &self.config.floors, &event.location);
        self.persist_items(store, estimate_id, &result)?;

        Ok(estimate_id)
    }

    fn generate_trainer_estimate<S: EstimateStore>(
        &self,
        store: &mut S,
        event: &Event,
        trainer: &Trainer,
        trip_days: u32,
        daily_rate: Decimal,
    ) -> EngineResult<Uuid> {
        let estimate_id = store.create_estimate(
            event.id,
            EstimateType::Trainer,
            Some(&trainer.name),
            &self.config.approvals.trainer,
            &event.location,
            None,
            None,
        )?;

        let request = BudgetRequest {
            total_budget: trainer.budget,
            headcount: 1,
            trip_days,
            travel_days: self.config.trip.travel_days,
            daily_rate,
        };
        let result = allocate_budget(&request, &self.config.floors, &event.location);
        self.persist_items(store, estimate_id, &result)?;

        Ok(estimate_id)
    }

    fn persist_items<S: EstimateStore>(
        &self,
        store: &mut S,
        estimate_id: Uuid,
        result: &AllocationResult,
    ) -> EngineResult<()> {
        for item in &result.items {
            store.add_estimate_item(
                estimate_id,
                item.category,
                &item.description,
                item.people_count,
                item.days_count,
                item.rate,
            )?;
        }
        Ok(())
    }
}

impl Default for EstimateGenerator {
    fn default() -> Self {
        Self::new(AllocationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, ExpenseCategory};
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn away_event() -> Event {
        Event {
            id: 10,
            year: 2025,
            sport: "Бокс".to_string(),
            event_type: EventType::Away,
            name: "Открытый ринг".to_string(),
            location: "г. Екатеринбург".to_string(),
            month: "Апрель".to_string(),
            children_budget: dec("100000"),
            trainers_count: 2,
            trainers_budget: dec("40000"),
            trainers: Vec::new(),
        }
    }

    #[test]
    fn test_internal_event_is_skipped_without_side_effects() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let mut event = away_event();
        event.event_type = EventType::Internal;

        let (children_id, trainer_ids) =
            generator.auto_generate_estimates(&mut store, &event).unwrap();
        assert!(children_id.is_none());
        assert!(trainer_ids.is_empty());
        assert!(store.get_estimates_by_event(event.id).unwrap().is_empty());
    }

    #[test]
    fn test_away_event_gets_children_and_trainer_estimates() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let event = away_event();

        let (children_id, trainer_ids) =
            generator.auto_generate_estimates(&mut store, &event).unwrap();

        let children_id = children_id.unwrap();
        assert_eq!(trainer_ids.len(), 2);

        let children = store.get_estimate(children_id).unwrap();
        assert_eq!(children.estimate_type, EstimateType::Children);
        assert!(children.trainer_name.is_none());

        for id in &trainer_ids {
            let estimate = store.get_estimate(*id).unwrap();
            assert_eq!(estimate.estimate_type, EstimateType::Trainer);
            assert!(estimate.trainer_name.is_some());
        }
    }

    #[test]
    fn test_generated_totals_match_budgets_within_rounding() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let event = away_event();

        let (children_id, trainer_ids) =
            generator.auto_generate_estimates(&mut store, &event).unwrap();

        let trip = &generator.config().trip;
        let person_days =
            Decimal::from(trip.children_headcount) * Decimal::from(trip.trip_days_max);
        let bound = person_days * dec("0.005");

        let children = store.get_estimate(children_id.unwrap()).unwrap();
        let drift = (children.total_amount - event.children_budget).abs();
        assert!(drift <= bound, "children drift {} exceeds {}", drift, bound);

        for id in trainer_ids {
            let estimate = store.get_estimate(id).unwrap();
            let drift = (estimate.total_amount - dec("20000")).abs();
            let trainer_bound = Decimal::from(trip.trip_days_max) * dec("0.005");
            assert!(
                drift <= trainer_bound,
                "trainer drift {} exceeds {}",
                drift,
                trainer_bound
            );
        }
    }

    #[test]
    fn test_zero_children_budget_creates_empty_header() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let mut event = away_event();
        event.children_budget = Decimal::ZERO;
        event.trainers_count = 0;
        event.trainers_budget = Decimal::ZERO;

        let (children_id, trainer_ids) =
            generator.auto_generate_estimates(&mut store, &event).unwrap();
        assert!(trainer_ids.is_empty());

        let children_id = children_id.unwrap();
        assert!(store.get_estimate_items(children_id).unwrap().is_empty());
        assert_eq!(
            store.get_estimate(children_id).unwrap().total_amount,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_regeneration_replaces_prior_estimates() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let event = away_event();

        let (first_children, first_trainers) =
            generator.auto_generate_estimates(&mut store, &event).unwrap();
        let (second_children, second_trainers) =
            generator.auto_generate_estimates(&mut store, &event).unwrap();

        // Old estimates are gone, replaced by fresh ones.
        assert!(store.get_estimate(first_children.unwrap()).is_err());
        for id in first_trainers {
            assert!(store.get_estimate(id).is_err());
        }

        let remaining = store.get_estimates_by_event(event.id).unwrap();
        assert_eq!(remaining.len(), 1 + second_trainers.len());
        assert!(store.get_estimate(second_children.unwrap()).is_ok());
    }

    #[test]
    fn test_elevated_region_uses_elevated_per_diem_rate() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let mut event = away_event();
        event.location = "г. Москва".to_string();
        // Large enough that per-diem always survives the feasibility check.
        event.children_budget = dec("500000");

        let (children_id, _) = generator.auto_generate_estimates(&mut store, &event).unwrap();
        let items = store.get_estimate_items(children_id.unwrap()).unwrap();
        let per_diem = items
            .iter()
            .find(|i| i.category == ExpenseCategory::PerDiem)
            .expect("per-diem item expected");
        assert_eq!(per_diem.rate, dec("700"));
    }

    #[test]
    fn test_explicit_trainer_list_budgets_are_used() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let mut event = away_event();
        event.trainers = vec![
            Trainer {
                name: "Петров П.П.".to_string(),
                budget: dec("30000"),
            },
            Trainer {
                name: "Сидоров С.С.".to_string(),
                budget: Decimal::ZERO,
            },
        ];

        let (_, trainer_ids) = generator.auto_generate_estimates(&mut store, &event).unwrap();
        assert_eq!(trainer_ids.len(), 2);

        let first = store.get_estimate(trainer_ids[0]).unwrap();
        assert_eq!(first.trainer_name.as_deref(), Some("Петров П.П."));
        assert!(first.total_amount > Decimal::ZERO);

        // A zero-budget trainer still gets a header, but no items.
        let second = store.get_estimate(trainer_ids[1]).unwrap();
        assert_eq!(second.total_amount, Decimal::ZERO);
        assert!(store.get_estimate_items(trainer_ids[1]).unwrap().is_empty());
    }

    #[test]
    fn test_generate_for_event_id_loads_event_from_store() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let event = away_event();
        store.put_event(event.clone());

        let (children_id, trainer_ids) = generator
            .auto_generate_for_event_id(&mut store, event.id)
            .unwrap();
        assert!(children_id.is_some());
        assert_eq!(trainer_ids.len(), 2);
    }

    #[test]
    fn test_generate_for_missing_event_id_fails() {
        let generator = EstimateGenerator::default();
        let mut store = MemoryStore::new();
        let result = generator.auto_generate_for_event_id(&mut store, 404);
        assert!(result.is_err());
    }
}
