//! Tunable defaults: sphere depth, estimator tolerance, minimum peak
//! matches, result cap, and the shift-store root directory, loadable from
//! a TOML document the same way a DREIDING ruleset is.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::hose::DEFAULT_MAX_SPHERES;
use crate::nucleus::DEFAULT_NUCLEUS;

/// The full set of tunables this crate exposes, with every field defaulted
/// so a caller only needs to override what they care about.
///
/// # Examples
///
/// ```
/// use nmrhose::config::Config;
///
/// let cfg = Config::from_toml_str("tolerance = 1.5\nresult_cap = 10").unwrap();
/// assert_eq!(cfg.tolerance, 1.5);
/// assert_eq!(cfg.result_cap, 10);
/// assert_eq!(cfg.max_spheres, 4); // untouched fields keep their default
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HOSE sphere depth.
    pub max_spheres: usize,
    /// Per-peak ppm tolerance for the reverse estimator.
    pub tolerance: f64,
    /// Minimum matched peaks for an estimator candidate to survive.
    pub min_matches: usize,
    /// Maximum number of estimator results returned.
    pub result_cap: usize,
    /// Default target nucleus string for lookup and estimation.
    pub nucleus: String,
    /// Root directory the shift store's chunk artifacts are read from.
    pub store_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_spheres: DEFAULT_MAX_SPHERES,
            tolerance: 2.0,
            min_matches: 1,
            result_cap: 50,
            nucleus: DEFAULT_NUCLEUS.to_string(),
            store_root: PathBuf::from("data/shifts"),
        }
    }
}

impl Config {
    /// Parses a TOML document, defaulting any field it leaves unspecified.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML document from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
