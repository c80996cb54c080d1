//! Forward lookup: SMILES in, per-atom shifts out, with progressive HOSE
//! truncation when the exact key misses.

use std::str::FromStr;

use crate::core::error::Error;
use crate::core::Element;
use crate::hose::hose;
use crate::molecule::{from_smiles, MoleculeGraph};
use crate::nucleus::strip_mass_number;
use crate::store::ChunkStore;

const MAX_TRUNCATION_ITERATIONS: usize = 8;

/// One matched atom: which atom, the HOSE key that actually hit (possibly a
/// truncated or H-stripped variant of the one generated for the atom), the
/// resolved shift, and the reference structure it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub atom: usize,
    pub element: Element,
    pub hose: String,
    pub shift: f64,
    pub smiles: String,
}

/// Predicts shifts for every `nucleus`-matching atom of `smiles`.
///
/// Atoms with no hit anywhere in the fallback sequence are silently omitted
/// — a miss is a normal outcome, not an error.
pub fn predict_shifts(
    store: &ChunkStore,
    smiles: &str,
    nucleus: &str,
    max_spheres: usize,
) -> Result<Vec<LookupResult>, Error> {
    let mol = from_smiles(smiles)?;
    mol.ensure_derived_tables();

    let Ok(target) = Element::from_str(strip_mass_number(nucleus)) else {
        return Ok(Vec::new());
    };

    let candidates: Vec<(usize, String)> = (0..mol.atom_count())
        .filter(|&atom| mol.element(atom) == target)
        .map(|atom| (atom, hose(&mol, atom, max_spheres)))
        .collect();

    let keys: Vec<String> = candidates.iter().map(|(_, key)| key.clone()).collect();
    store.preload(&keys)?;

    let mut results = Vec::new();
    for (atom, key) in candidates {
        if let Some((matched_key, entry)) = resolve_with_fallback(store, &key)? {
            log::debug!("atom {atom} resolved via key {matched_key}");
            results.push(LookupResult {
                atom,
                element: target,
                hose: matched_key,
                shift: entry.weighted_avg(),
                smiles: entry.smiles,
            });
        } else {
            log::debug!("atom {atom} exhausted the fallback sequence with no hit");
        }
    }

    Ok(results)
}

fn resolve_with_fallback(
    store: &ChunkStore,
    generated_key: &str,
) -> Result<Option<(String, crate::store::ShiftEntry)>, Error> {
    if let Some(entry) = store.query_exact(generated_key)? {
        return Ok(Some((generated_key.to_string(), entry)));
    }

    let mut key = generated_key.to_string();
    for _ in 0..MAX_TRUNCATION_ITERATIONS {
        let Some(split_at) = rightmost_delimiter(&key) else {
            break;
        };
        if split_at == 0 {
            break;
        }

        let with_delimiter = &key[..=split_at];
        if let Some(entry) = store.query_exact(with_delimiter)? {
            return Ok(Some((with_delimiter.to_string(), entry)));
        }

        let without_delimiter = key[..split_at].to_string();
        if let Some(entry) = store.query_exact(&without_delimiter)? {
            return Ok(Some((without_delimiter, entry)));
        }

        key = without_delimiter;
    }

    let stripped = key.trim_start_matches('H');
    if stripped.len() != key.len() {
        if let Some(entry) = store.query_exact(stripped)? {
            return Ok(Some((stripped.to_string(), entry)));
        }
    }

    Ok(None)
}

/// The rightmost byte index of any of `/`, `(`, `)` in `key`. All three are
/// single-byte ASCII, so byte and character indices agree.
fn rightmost_delimiter(key: &str) -> Option<usize> {
    ['/', '(', ')'].iter().filter_map(|&d| key.rfind(d)).max()
}
