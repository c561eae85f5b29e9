//! Per-diem rate resolution from event locations.
//!
//! This module provides the [`RateTable`] that maps a free-text location
//! string to a daily per-diem rate. Two tiers exist: an elevated rate for
//! locations in the northern/remote districts and the two capital regions,
//! and a default rate for everywhere else.

use rust_decimal::Decimal;

use crate::config::PerDiemRates;

/// Maps free-text locations to daily per-diem rates.
///
/// Matching is a case-insensitive substring check against a fixed list of
/// region name fragments; the first matching fragment wins. Unmatched or
/// empty locations silently receive the default rate, so the lookup has no
/// error conditions.
///
/// # Example
///
/// ```
/// use estimate_engine::allocation::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// assert_eq!(table.daily_rate("г. Москва"), Decimal::from(700));
/// assert_eq!(table.daily_rate("г. Тюмень"), Decimal::from(500));
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    default_rate: Decimal,
    elevated_rate: Decimal,
    // Uppercased once at construction so each lookup only folds the input.
    fragments: Vec<String>,
}

impl RateTable {
    /// Builds a rate table from the configured rate tiers.
    pub fn from_config(rates: &PerDiemRates) -> Self {
        Self {
            default_rate: rates.default_rate,
            elevated_rate: rates.elevated_rate,
            fragments: rates
                .elevated_regions
                .iter()
                .map(|r| r.to_uppercase())
                .collect(),
        }
    }

    /// Resolves the daily per-diem rate for a location.
    ///
    /// Returns the elevated rate if any elevated-region fragment occurs in
    /// the location (ignoring case), otherwise the default rate.
    pub fn daily_rate(&self, location: &str) -> Decimal {
        let location_upper = location.to_uppercase();

        for fragment in &self.fragments {
            if location_upper.contains(fragment.as_str()) {
                return self.elevated_rate;
            }
        }

        self.default_rate
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::from_config(&PerDiemRates::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elevated() -> Decimal {
        Decimal::from(700)
    }

    fn default_rate() -> Decimal {
        Decimal::from(500)
    }

    #[test]
    fn test_moscow_gets_elevated_rate() {
        let table = RateTable::default();
        assert_eq!(table.daily_rate("г. Москва"), elevated());
    }

    #[test]
    fn test_tyumen_gets_default_rate() {
        let table = RateTable::default();
        assert_eq!(table.daily_rate("г. Тюмень"), default_rate());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let table = RateTable::default();
        assert_eq!(table.daily_rate("МОСКВА"), elevated());
        assert_eq!(table.daily_rate("санкт-петербург"), elevated());
    }

    #[test]
    fn test_fragment_matches_inside_longer_string() {
        let table = RateTable::default();
        assert_eq!(table.daily_rate("п. Пангоды, ЯНАО"), elevated());
        assert_eq!(table.daily_rate("Ленинградская область"), elevated());
    }

    #[test]
    fn test_empty_location_gets_default_rate() {
        let table = RateTable::default();
        assert_eq!(table.daily_rate(""), default_rate());
    }

    #[test]
    fn test_custom_config_rates() {
        let rates = PerDiemRates {
            default_rate: Decimal::from(400),
            elevated_rate: Decimal::from(900),
            elevated_regions: vec!["Норильск".to_string()],
        };
        let table = RateTable::from_config(&rates);
        assert_eq!(table.daily_rate("г. Норильск"), Decimal::from(900));
        assert_eq!(table.daily_rate("г. Москва"), Decimal::from(400));
    }
}
