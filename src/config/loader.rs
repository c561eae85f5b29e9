//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the allocation
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AllocationConfig;

/// Loads and provides access to the allocation configuration.
///
/// The `ConfigLoader` reads a single YAML configuration file and exposes the
/// parsed [`AllocationConfig`]. Constructing a loader via [`Default`] yields
/// the built-in configuration with no file I/O.
///
/// # File Structure
///
/// ```text
/// rates:
///   default_rate: 500
///   elevated_rate: 700
///   elevated_regions: ["ЯНАО", "Москва", ...]
/// floors:
///   lodging_per_person: 1000
///   travel_per_person_day: 300
/// trip:
///   travel_days: 2
///   children_headcount: 12
///   trip_days_min: 3
///   trip_days_max: 7
/// approvals:
///   children: "..."
///   trainer: "..."
/// ```
///
/// Every section is optional; omitted sections fall back to their defaults.
///
/// # Example
///
/// ```no_run
/// use estimate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/allocation.yaml").unwrap();
/// println!("Default per-diem rate: {}", loader.config().rates.default_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AllocationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/allocation.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml(path.as_ref())?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml(path: &Path) -> EngineResult<AllocationConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying allocation configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AllocationConfig {
        self.config
    }
}
