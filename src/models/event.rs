//! Event model and related types.
//!
//! This module defines the calendar [`Event`] consumed by the estimate
//! generator, together with the [`EventType`] discriminant and the typed
//! [`Trainer`] record that replaces the free-form trainer blobs of the
//! desktop application's storage layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the kind of calendar event.
///
/// Only away events are eligible for estimate generation; internal events
/// carry budgets but never produce travel estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An event hosted at the club's own facilities.
    Internal,
    /// A competition elsewhere, requiring travel.
    Away,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Internal => write!(f, "Внутреннее"),
            EventType::Away => write!(f, "Выездное"),
        }
    }
}

/// A trainer assigned to an event, with that trainer's own budget share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    /// The trainer's display name.
    pub name: String,
    /// The budget allocated to this trainer's trip.
    pub budget: Decimal,
}

/// A calendar event as consumed by the estimate generator.
///
/// The engine never mutates events; it reads the planned budgets, the
/// location (for per-diem rate resolution), and the trainer assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: i64,
    /// The calendar year the event belongs to.
    pub year: i32,
    /// The sport discipline (free text).
    pub sport: String,
    /// Whether the event is internal or away.
    pub event_type: EventType,
    /// The event's display name.
    pub name: String,
    /// The event location (free text, matched against the region list).
    pub location: String,
    /// The planned month (free text, as entered in the calendar).
    pub month: String,
    /// Planned lump-sum budget for the children's cohort.
    pub children_budget: Decimal,
    /// Number of trainers assigned when no explicit trainer list exists.
    pub trainers_count: u32,
    /// Planned lump-sum budget covering all trainers.
    pub trainers_budget: Decimal,
    /// Explicit trainer assignments with per-trainer budgets.
    #[serde(default)]
    pub trainers: Vec<Trainer>,
}

impl Event {
    /// Returns true if this is an away event.
    pub fn is_away(&self) -> bool {
        self.event_type == EventType::Away
    }

    /// Returns the per-trainer budget shares for this event.
    ///
    /// When an explicit trainer list exists it is used as-is. Otherwise, if
    /// the event carries a trainer count and a combined trainer budget, the
    /// budget is split into equal shares under synthesized names
    /// ("тренер 1", "тренер 2", ...).
    pub fn trainer_shares(&self) -> Vec<Trainer> {
        if !self.trainers.is_empty() {
            return self.trainers.clone();
        }

        if self.trainers_count == 0 {
            return Vec::new();
        }

        let share = self.trainers_budget / Decimal::from(self.trainers_count);
        (1..=self.trainers_count)
            .map(|i| Trainer {
                name: format!("тренер {}", i),
                budget: share,
            })
            .collect()
    }
}
