//! The budget allocator.
//!
//! This module partitions a lump-sum trip budget into Travel, Lodging, and
//! Per-diem expense items honoring minimum-spend floors, then reconciles the
//! result so the item totals sum back to the requested budget. The rounding
//! drift introduced by deriving money unit rates is absorbed entirely by the
//! Lodging item; that asymmetry is deliberate and matches the printed
//! documents the club signs off on.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::MinimumFloors;
use crate::models::{AuditStep, ExpenseCategory};

/// Number of travel days for a round trip (outbound and return).
pub const DEFAULT_TRAVEL_DAYS: u32 = 2;

/// Input to the budget allocator.
///
/// One request covers either the children's cohort or a single trainer; the
/// caller resolves `daily_rate` from the event location beforehand.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRequest {
    /// The lump sum to be fully allocated. Non-negative.
    pub total_budget: Decimal,
    /// Number of people the budget covers. At least 1 for a non-empty result.
    pub headcount: u32,
    /// Number of days the per-diem and lodging items span.
    pub trip_days: u32,
    /// Number of travel days for the round trip.
    pub travel_days: u32,
    /// Per-diem rate in currency per person per day.
    pub daily_rate: Decimal,
}

impl BudgetRequest {
    /// Creates a request with the standard round-trip travel day count.
    pub fn new(total_budget: Decimal, headcount: u32, trip_days: u32, daily_rate: Decimal) -> Self {
        Self {
            total_budget,
            headcount,
            trip_days,
            travel_days: DEFAULT_TRAVEL_DAYS,
            daily_rate,
        }
    }
}

/// A single expense item produced by the allocator, before persistence.
///
/// The storage layer assigns identifiers and recomputes the stored total;
/// [`AllocatedItem::total`] exists so callers can verify conservation before
/// writing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocatedItem {
    /// The expense category.
    pub category: ExpenseCategory,
    /// Free-text description (route string, rate note, or empty).
    pub description: String,
    /// Number of people this item covers.
    pub people_count: u32,
    /// Number of days this item spans.
    pub days_count: u32,
    /// Unit rate in currency per person per day.
    pub rate: Decimal,
}

impl AllocatedItem {
    /// The item's total: `people_count * days_count * rate`.
    pub fn total(&self) -> Decimal {
        Decimal::from(self.people_count) * Decimal::from(self.days_count) * self.rate
    }
}

/// The result of allocating one budget, including the audit trail.
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// The emitted items in display order: Travel, Per-diem (if kept), Lodging.
    pub items: Vec<AllocatedItem>,
    /// The audit steps recording each allocation decision.
    pub audit_steps: Vec<AuditStep>,
}

impl AllocationResult {
    /// Sum of the emitted items' totals.
    pub fn allocated_total(&self) -> Decimal {
        self.items.iter().map(AllocatedItem::total).sum()
    }
}

/// Allocates a lump-sum budget across Travel, Lodging, and Per-diem items.
///
/// The algorithm:
///
/// 1. A non-positive budget or a zero headcount produces no items — the
///    degenerate empty-estimate case, not an error.
/// 2. Minimum floors are computed as per-category totals:
///    lodging floor = `lodging_per_person * headcount`, travel floor =
///    `travel_per_person_day * headcount * travel_days`.
/// 3. Per-diem is priced at `headcount * trip_days * daily_rate` and dropped
///    entirely if the floors plus per-diem exceed the budget.
/// 4. The remainder is split 50/50 between Travel and Lodging (lodging by
///    subtraction, so the two always sum to the remainder exactly), each side
///    then re-checked against its floor: whichever is short is pinned to its
///    floor and the other absorbs the rest.
/// 5. The Travel rate is the travel share divided over person-travel-days,
///    rounded to cents; Per-diem keeps the definitional daily rate unrounded.
/// 6. Lodging is recomputed as the residual `budget - travel - per_diem`
///    using the *post-rounding* travel total, so all rounding drift lands in
///    the Lodging item.
///
/// The emitted totals sum to the budget exactly whenever the residual
/// division lands on whole cents; otherwise the error is below half a cent
/// per person-day on the Lodging item. The function is total over its
/// documented domain and never fails.
///
/// # Arguments
///
/// * `request` - The budget, headcount, trip shape, and per-diem rate
/// * `floors` - The configured minimum-spend floors
/// * `location` - The destination, used for the Travel route description
///
/// # Example
///
/// ```
/// use estimate_engine::allocation::{BudgetRequest, allocate_budget};
/// use estimate_engine::config::MinimumFloors;
/// use rust_decimal::Decimal;
///
/// let request = BudgetRequest::new(Decimal::from(103_200), 12, 5, Decimal::from(500));
/// let result = allocate_budget(&request, &MinimumFloors::default(), "г. Тюмень");
///
/// assert_eq!(result.items.len(), 3);
/// assert_eq!(result.allocated_total(), Decimal::from(103_200));
/// ```
pub fn allocate_budget(
    request: &BudgetRequest,
    floors: &MinimumFloors,
    location: &str,
) -> AllocationResult {
    let mut audit_steps = Vec::new();

    if request.total_budget <= Decimal::ZERO || request.headcount == 0 {
        audit_steps.push(AuditStep {
            step_number: 1,
            rule_id: "empty_budget".to_string(),
            rule_name: "Empty Budget".to_string(),
            input: serde_json::json!({
                "total_budget": request.total_budget.to_string(),
                "headcount": request.headcount,
            }),
            output: serde_json::json!({ "items_emitted": 0 }),
            reasoning: "Budget is non-positive or headcount is zero; estimate header only"
                .to_string(),
        });
        return AllocationResult {
            items: Vec::new(),
            audit_steps,
        };
    }

    let headcount = Decimal::from(request.headcount);
    let trip_days = Decimal::from(request.trip_days);
    let travel_days = Decimal::from(request.travel_days);

    let min_lodging = floors.lodging_per_person * headcount;
    let min_travel = floors.travel_per_person_day * headcount * travel_days;

    // Per-diem is all-or-nothing: it survives only if both floors still fit
    // beside it. A zero daily rate never emits an item.
    let per_diem_full = headcount * trip_days * request.daily_rate;
    let use_per_diem = per_diem_full > Decimal::ZERO
        && min_lodging + min_travel + per_diem_full <= request.total_budget;
    let per_diem_total = if use_per_diem {
        per_diem_full
    } else {
        Decimal::ZERO
    };

    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "per_diem_feasibility".to_string(),
        rule_name: "Per-diem Feasibility".to_string(),
        input: serde_json::json!({
            "total_budget": request.total_budget.to_string(),
            "min_lodging": min_lodging.to_string(),
            "min_travel": min_travel.to_string(),
            "per_diem_full": per_diem_full.to_string(),
        }),
        output: serde_json::json!({ "use_per_diem": use_per_diem }),
        reasoning: if use_per_diem {
            "Floors plus per-diem fit within the budget; per-diem kept".to_string()
        } else {
            "Floors plus per-diem exceed the budget (or the rate is zero); per-diem dropped"
                .to_string()
        },
    });

    let remaining = request.total_budget - per_diem_total;

    let (travel_total, lodging_total) = if remaining >= min_lodging + min_travel {
        // 50/50 split; lodging by subtraction so the halves sum exactly.
        let mut travel = remaining / Decimal::from(2);
        let mut lodging = remaining - travel;

        if travel < min_travel {
            travel = min_travel;
            lodging = remaining - travel;
        } else if lodging < min_lodging {
            lodging = min_lodging;
            travel = remaining - lodging;
        }
        (travel, lodging)
    } else {
        // Both floors cannot be met from the remainder. This only happens
        // once per-diem has been dropped; travel is capped at 40% of the
        // budget so lodging still receives the larger share.
        let travel = if use_per_diem {
            min_travel
        } else {
            min_travel.min(request.total_budget * Decimal::new(4, 1))
        };
        (travel, remaining - travel)
    };

    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "travel_lodging_split".to_string(),
        rule_name: "Travel/Lodging Split".to_string(),
        input: serde_json::json!({
            "remaining": remaining.to_string(),
            "min_lodging": min_lodging.to_string(),
            "min_travel": min_travel.to_string(),
        }),
        output: serde_json::json!({
            "travel_total": travel_total.to_string(),
            "lodging_total": lodging_total.to_string(),
        }),
        reasoning: if remaining >= min_lodging + min_travel {
            "Remainder split 50/50 between travel and lodging, floors re-checked".to_string()
        } else {
            "Remainder below combined floors; travel pinned, lodging absorbs the rest".to_string()
        },
    });

    let mut items = Vec::with_capacity(3);

    let travel_rate = round_money(travel_total / (headcount * travel_days));
    items.push(AllocatedItem {
        category: ExpenseCategory::Travel,
        description: format!("маршрут: {}", location),
        people_count: request.headcount,
        days_count: request.travel_days,
        rate: travel_rate,
    });
    let actual_travel = travel_rate * headcount * travel_days;

    let actual_per_diem = if use_per_diem {
        items.push(AllocatedItem {
            category: ExpenseCategory::PerDiem,
            description: format!("по территории ({} руб/день)", request.daily_rate),
            people_count: request.headcount,
            days_count: request.trip_days,
            rate: request.daily_rate,
        });
        request.daily_rate * headcount * trip_days
    } else {
        Decimal::ZERO
    };

    // Exact reconciliation: lodging takes whatever is left of the budget
    // after the post-rounding travel and per-diem totals.
    let lodging_corrected = request.total_budget - actual_travel - actual_per_diem;
    let lodging_rate = round_money(lodging_corrected / (headcount * trip_days));
    items.push(AllocatedItem {
        category: ExpenseCategory::Lodging,
        description: String::new(),
        people_count: request.headcount,
        days_count: request.trip_days,
        rate: lodging_rate,
    });

    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "exact_reconciliation".to_string(),
        rule_name: "Exact Reconciliation".to_string(),
        input: serde_json::json!({
            "actual_travel": actual_travel.to_string(),
            "actual_per_diem": actual_per_diem.to_string(),
        }),
        output: serde_json::json!({
            "lodging_corrected": lodging_corrected.to_string(),
            "lodging_rate": lodging_rate.to_string(),
        }),
        reasoning: "Lodging recomputed as the budget residual; rounding drift absorbed here"
            .to_string(),
    });

    AllocationResult { items, audit_steps }
}

/// Rounds a derived unit rate to cents, midpoints away from zero.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
