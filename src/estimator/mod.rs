//! Reverse estimator: a peak list in, ranked candidate structures out.

use std::collections::HashMap;
use std::str::FromStr;

use rayon::prelude::*;

use crate::core::error::Error;
use crate::core::Element;
use crate::nucleus::strip_mass_number;
use crate::store::{round1000, ChunkStore};

const FULL_SCAN_PARALLEL_THRESHOLD: usize = 4096;

/// Tunable parameters of one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateParams {
    pub peaks: Vec<f64>,
    pub tolerance: f64,
    pub min_matches: usize,
    pub nucleus: String,
    pub result_cap: usize,
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self {
            peaks: Vec::new(),
            tolerance: 2.0,
            min_matches: 1,
            nucleus: crate::nucleus::DEFAULT_NUCLEUS.to_string(),
            result_cap: 50,
        }
    }
}

/// One ranked candidate structure.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateResult {
    pub smiles: String,
    pub hose: String,
    pub matched: usize,
    pub cumulative_error: f64,
    pub score: f64,
}

#[derive(Debug, Clone)]
struct Accumulator {
    hose: String,
    matched_peaks: Vec<bool>,
    cumulative_error: f64,
}

/// Scores every candidate SMILES in `store` against `params.peaks`, returning
/// the top `params.result_cap` ranked by descending score.
pub fn estimate(store: &ChunkStore, params: &EstimateParams) -> Result<Vec<EstimateResult>, Error> {
    let Ok(target) = Element::from_str(strip_mass_number(&params.nucleus)) else {
        return Ok(Vec::new());
    };
    let target_nucleus = target.to_string();

    let entries = store.snapshot()?;
    log::info!("estimator scanning {} stored entries", entries.len());

    let accumulate = |mut acc: HashMap<String, Accumulator>, (_, key, entry): (u16, String, crate::store::ShiftEntry)| {
        if entry.nucleus != target_nucleus {
            return acc;
        }
        let shift = entry.weighted_avg();
        for (i, &peak) in params.peaks.iter().enumerate() {
            let err = (shift - peak).abs();
            if err > params.tolerance {
                continue;
            }
            let slot = acc.entry(entry.smiles.clone()).or_insert_with(|| Accumulator {
                hose: key.clone(),
                matched_peaks: vec![false; params.peaks.len()],
                cumulative_error: 0.0,
            });
            if !slot.matched_peaks[i] {
                slot.matched_peaks[i] = true;
                slot.cumulative_error += err;
            }
        }
        acc
    };

    let by_smiles: HashMap<String, Accumulator> = if entries.len() >= FULL_SCAN_PARALLEL_THRESHOLD {
        entries
            .into_par_iter()
            .fold(HashMap::new, accumulate)
            .reduce(HashMap::new, |mut a, b| {
                for (smiles, acc) in b {
                    a.entry(smiles)
                        .and_modify(|existing| merge_accumulators(existing, &acc))
                        .or_insert(acc);
                }
                a
            })
    } else {
        entries.into_iter().fold(HashMap::new(), accumulate)
    };

    let peak_count = params.peaks.len().max(1);
    let mut results: Vec<EstimateResult> = by_smiles
        .into_iter()
        .filter_map(|(smiles, acc)| {
            let matched = acc.matched_peaks.iter().filter(|&&hit| hit).count();
            if matched < params.min_matches {
                return None;
            }
            let coverage = matched as f64 / peak_count as f64;
            let mean_error_ratio = (acc.cumulative_error / matched as f64) / params.tolerance;
            let score = round1000(coverage * (1.0 - mean_error_ratio));
            Some(EstimateResult {
                smiles,
                hose: acc.hose,
                matched,
                cumulative_error: acc.cumulative_error,
                score,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.matched.cmp(&a.matched))
    });
    results.truncate(params.result_cap);

    Ok(results)
}

fn merge_accumulators(into: &mut Accumulator, other: &Accumulator) {
    for (i, &hit) in other.matched_peaks.iter().enumerate() {
        if hit && !into.matched_peaks[i] {
            into.matched_peaks[i] = true;
        }
    }
    into.cumulative_error += other.cumulative_error;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Chunk, InMemoryChunkLoader, ShiftEntry, SolventStats};
    use std::collections::HashMap as StdHashMap;

    fn entry(smiles: &str, avg: f64) -> ShiftEntry {
        let mut solvents = StdHashMap::new();
        solvents.insert("CDCl3".to_string(), SolventStats { min: avg, max: avg, avg, count: 1 });
        ShiftEntry { nucleus: "C".to_string(), smiles: smiles.to_string(), solvents }
    }

    fn store_with(entries: &[(&str, &str, f64)]) -> ChunkStore {
        let mut loader = InMemoryChunkLoader::new();
        let mut by_chunk: StdHashMap<u16, Chunk> = StdHashMap::new();
        for &(key, smiles, avg) in entries {
            let idx = crate::store::chunk_index_of(key);
            by_chunk.entry(idx).or_default().insert(key.to_string(), entry(smiles, avg));
        }
        for (idx, chunk) in by_chunk {
            loader = loader.with_chunk(idx, chunk);
        }
        ChunkStore::new(loader)
    }

    #[test]
    fn matches_within_tolerance_and_scores_descending() {
        let store = store_with(&[
            ("keyA1", "CCO", 14.0),
            ("keyA2", "CCO", 23.0),
            ("keyB1", "CCC", 14.0),
        ]);
        let params = EstimateParams {
            peaks: vec![14.0, 23.0],
            tolerance: 2.0,
            min_matches: 2,
            nucleus: "13C".to_string(),
            result_cap: 50,
        };
        let results = estimate(&store, &params).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].smiles, "CCO");
        assert_eq!(results[0].matched, 2);
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn entries_below_min_matches_are_excluded() {
        let store = store_with(&[("keyB1", "CCC", 14.0)]);
        let params = EstimateParams {
            peaks: vec![14.0, 23.0],
            tolerance: 2.0,
            min_matches: 2,
            nucleus: "13C".to_string(),
            result_cap: 50,
        };
        assert!(estimate(&store, &params).unwrap().is_empty());
    }

    #[test]
    fn result_cap_truncates_output() {
        let store = store_with(&[
            ("keyA", "CCO", 14.0),
            ("keyB", "CCC", 14.1),
            ("keyC", "CCN", 13.9),
        ]);
        let params = EstimateParams {
            peaks: vec![14.0],
            tolerance: 2.0,
            min_matches: 1,
            nucleus: "13C".to_string(),
            result_cap: 2,
        };
        assert_eq!(estimate(&store, &params).unwrap().len(), 2);
    }

    #[test]
    fn unrecognized_nucleus_yields_empty_results_not_an_error() {
        let store = store_with(&[("keyA", "CCO", 14.0)]);
        let params = EstimateParams { nucleus: "99Zz".to_string(), peaks: vec![14.0], ..EstimateParams::default() };
        assert!(estimate(&store, &params).unwrap().is_empty());
    }

    #[test]
    fn a_peak_matched_by_multiple_hose_keys_counts_once() {
        let store = store_with(&[("keyA1", "CCO", 14.0), ("keyA2", "CCO", 14.2)]);
        let params = EstimateParams { peaks: vec![14.0], tolerance: 2.0, min_matches: 1, nucleus: "13C".to_string(), result_cap: 50 };
        let results = estimate(&store, &params).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matched, 1);
    }
}
