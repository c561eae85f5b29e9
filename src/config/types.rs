//! Configuration types for estimate allocation.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files. Every structure implements
//! [`Default`] with the values the club actually uses, so a missing or
//! partial configuration file never leaves a parameter undefined.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The built-in list of elevated-rate region name fragments.
///
/// A location whose name contains any of these fragments (case-insensitive)
/// receives the elevated per-diem rate. The list covers the northern/remote
/// autonomous districts and the two capital regions.
const ELEVATED_REGIONS: &[&str] = &[
    "ЯНАО",
    "Ямало-Ненецкий",
    "Ямал",
    "ХМАО",
    "Ханты-Мансийск",
    "Югра",
    "Москва",
    "Московская",
    "Подмосковье",
    "Санкт-Петербург",
    "СПб",
    "Питер",
    "Ленинградская",
];

/// Per-diem rate tiers.
///
/// Two tiers exist: an elevated rate for locations matching the
/// `elevated_regions` fragment list, and a default rate for everywhere else.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerDiemRates {
    /// The per-diem rate for locations outside the elevated-region list.
    pub default_rate: Decimal,
    /// The per-diem rate for locations in the elevated-region list.
    pub elevated_rate: Decimal,
    /// Region name fragments that select the elevated rate.
    pub elevated_regions: Vec<String>,
}

impl Default for PerDiemRates {
    fn default() -> Self {
        Self {
            default_rate: Decimal::from(500),
            elevated_rate: Decimal::from(700),
            elevated_regions: ELEVATED_REGIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Minimum-spend floors for the allocated categories.
///
/// Floors are per-category totals: they scale with headcount (and, for
/// travel, with the round-trip day count) before being compared against the
/// budget split.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MinimumFloors {
    /// Minimum lodging spend per person over the whole trip.
    pub lodging_per_person: Decimal,
    /// Minimum travel spend per person per travel day.
    pub travel_per_person_day: Decimal,
}

impl Default for MinimumFloors {
    fn default() -> Self {
        Self {
            lodging_per_person: Decimal::from(1000),
            travel_per_person_day: Decimal::from(300),
        }
    }
}

/// Trip-shape defaults used when deriving a budget request from an event.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TripDefaults {
    /// Number of travel days for the round trip. Fixed at 2 in practice.
    pub travel_days: u32,
    /// Default headcount for the children's cohort.
    pub children_headcount: u32,
    /// Lower bound of the derived trip length, inclusive.
    pub trip_days_min: u32,
    /// Upper bound of the derived trip length, inclusive.
    pub trip_days_max: u32,
}

impl Default for TripDefaults {
    fn default() -> Self {
        Self {
            travel_days: 2,
            children_headcount: 12,
            trip_days_min: 3,
            trip_days_max: 7,
        }
    }
}

/// Approving-authority strings stamped onto generated estimate headers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApprovalAuthorities {
    /// Authority approving children's cohort estimates.
    pub children: String,
    /// Authority approving trainer estimates.
    pub trainer: String,
}

impl Default for ApprovalAuthorities {
    fn default() -> Self {
        Self {
            children: "Председатель ППО Газпром добыча Ямбург профсоюз".to_string(),
            trainer: "Зам. начальника ф УЭВП по СОиКМР".to_string(),
        }
    }
}

/// The complete allocation configuration.
///
/// Aggregates all tunable parameters of the estimate engine. Deserialized
/// from a single YAML file by [`super::ConfigLoader`]; any omitted section
/// falls back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Per-diem rate tiers and the elevated-region list.
    pub rates: PerDiemRates,
    /// Minimum-spend floors for travel and lodging.
    pub floors: MinimumFloors,
    /// Trip-shape defaults (travel days, headcount, trip-length range).
    pub trip: TripDefaults,
    /// Approving-authority strings for estimate headers.
    pub approvals: ApprovalAuthorities,
}
