//! The shift-store payload types: one entry per HOSE key, one chunk per
//! 256-way shard of the key space.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-solvent observed-shift statistics, all in ppm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolventStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    #[serde(rename = "cnt")]
    pub count: u64,
}

/// Everything stored for one HOSE key: its nucleus, a reference SMILES, and
/// one [`SolventStats`] submap per solvent the reference dataset observed it
/// in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEntry {
    #[serde(rename = "n")]
    pub nucleus: String,
    #[serde(rename = "s")]
    pub smiles: String,
    #[serde(flatten)]
    pub solvents: HashMap<String, SolventStats>,
}

impl ShiftEntry {
    /// The weighted-average shift across every solvent:
    /// `round10(Σ avg·count / Σ count)`, or `0.0` when every count is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use nmrhose::store::{ShiftEntry, SolventStats};
    ///
    /// let mut solvents = HashMap::new();
    /// solvents.insert("A".to_string(), SolventStats { min: 9.0, max: 11.0, avg: 10.0, count: 3 });
    /// solvents.insert("B".to_string(), SolventStats { min: 19.0, max: 21.0, avg: 20.0, count: 7 });
    /// let entry = ShiftEntry { nucleus: "C".to_string(), smiles: "CC".to_string(), solvents };
    /// assert_eq!(entry.weighted_avg(), 17.0);
    /// ```
    pub fn weighted_avg(&self) -> f64 {
        let (sum, count) = self
            .solvents
            .values()
            .fold((0.0, 0u64), |(sum, count), s| (sum + s.avg * s.count as f64, count + s.count));
        if count == 0 {
            return 0.0;
        }
        round10(sum / count as f64)
    }
}

/// `round(10*x)/10`.
pub(crate) fn round10(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// `round(1000*x)/1000`.
pub(crate) fn round1000(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// A mapping from HOSE string to shift entry: one 256th of the full store.
pub type Chunk = HashMap<String, ShiftEntry>;
