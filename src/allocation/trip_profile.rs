//! Deterministic trip-length derivation from event identity.
//!
//! Generated estimates must come out identical on every run for the same
//! event, so the trip length is derived from a stable hash of the event's
//! name, location, and id rather than drawn at random. The hash is FNV-1a,
//! which is stable across runs, platforms, and compiler versions; the
//! specific numeric outputs are an implementation detail, not a contract.

use crate::config::TripDefaults;
use crate::models::Event;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64-bit hash over a byte string.
fn fnv1a_64(input: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derives the trip length in days for an event.
///
/// The result always lies within the configured `trip_days_min..=trip_days_max`
/// range and is a pure function of the event's name, location, and id: the
/// same event yields the same trip length on every invocation.
///
/// # Example
///
/// ```
/// use estimate_engine::allocation::derive_trip_days;
/// use estimate_engine::config::TripDefaults;
/// use estimate_engine::models::{Event, EventType};
/// use rust_decimal::Decimal;
///
/// let event = Event {
///     id: 1,
///     year: 2025,
///     sport: "Хоккей".to_string(),
///     event_type: EventType::Away,
///     name: "Турнир".to_string(),
///     location: "г. Тюмень".to_string(),
///     month: "Май".to_string(),
///     children_budget: Decimal::from(50_000),
///     trainers_count: 0,
///     trainers_budget: Decimal::ZERO,
///     trainers: vec![],
/// };
///
/// let trip = TripDefaults::default();
/// let days = derive_trip_days(&event, &trip);
/// assert!((trip.trip_days_min..=trip.trip_days_max).contains(&days));
/// assert_eq!(days, derive_trip_days(&event, &trip));
/// ```
pub fn derive_trip_days(event: &Event, trip: &TripDefaults) -> u32 {
    let (min, max) = if trip.trip_days_min <= trip.trip_days_max {
        (trip.trip_days_min, trip.trip_days_max)
    } else {
        (trip.trip_days_max, trip.trip_days_min)
    };

    let key = format!("{}_{}_{}", event.name, event.location, event.id);
    let hash_val = (fnv1a_64(&key) % 100) as u32;

    let range = max - min + 1;
    min + hash_val % range
}
