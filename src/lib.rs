#![doc = include_str!("../README.md")]

pub mod config;
pub mod core;
pub mod estimator;
pub mod hose;
pub mod labeling;
pub mod lookup;
pub mod molecule;
pub mod nucleus;
pub mod store;

pub use crate::core::error::{ConfigError, Error, MoleculeError, StoreError};
pub use crate::core::{BondOrder, Element};

use crate::config::Config;
use crate::molecule::{from_smiles, MoleculeGraph};
use crate::store::ChunkStore;

/// Parses `smiles` and predicts shifts for every atom of `nucleus` using
/// `config`'s sphere depth, wiring together C1, C3, C4, and C5 the way a
/// typical caller would.
///
/// A thinner convenience over [`lookup::predict_shifts`] for callers who
/// just want "SMILES + nucleus + store → shifts" without assembling the
/// pipeline themselves.
pub fn predict_shifts(
    store: &ChunkStore,
    smiles: &str,
    nucleus: &str,
    config: &Config,
) -> Result<Vec<lookup::LookupResult>, Error> {
    lookup::predict_shifts(store, smiles, nucleus, config.max_spheres)
}

/// Runs the reverse estimator (C6) over `store` with `config`'s tunables.
pub fn estimate(
    store: &ChunkStore,
    params: &estimator::EstimateParams,
) -> Result<Vec<estimator::EstimateResult>, Error> {
    estimator::estimate(store, params)
}

/// Generates the canonical HOSE code for one atom of a parsed SMILES string,
/// at `config`'s sphere depth.
pub fn hose_for_smiles(smiles: &str, atom: usize, config: &Config) -> Result<String, MoleculeError> {
    let mol = from_smiles(smiles)?;
    mol.ensure_derived_tables();
    Ok(hose::hose(&mol, atom, config.max_spheres))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Chunk, InMemoryChunkLoader, ShiftEntry, SolventStats};
    use std::collections::HashMap;

    #[test]
    fn hose_for_smiles_matches_the_reference_benzene_vector() {
        let cfg = Config::default();
        let hose = hose_for_smiles("c1ccccc1", 0, &cfg).unwrap();
        assert_eq!(hose, "H*C*C(H,H,*C,*C/H,H,*C,*&/H*&)");
    }

    #[test]
    fn top_level_predict_shifts_round_trips_through_the_store() {
        let cfg = Config::default();
        let key = hose_for_smiles("CCC", 0, &cfg).unwrap();
        let mut solvents = HashMap::new();
        solvents.insert("CDCl3".to_string(), SolventStats { min: 14.0, max: 14.0, avg: 14.0, count: 1 });
        let entry = ShiftEntry { nucleus: "C".to_string(), smiles: "CCC".to_string(), solvents };
        let mut chunk = Chunk::new();
        let idx = crate::store::chunk_index_of(&key);
        chunk.insert(key, entry);
        let loader = InMemoryChunkLoader::new().with_chunk(idx, chunk);
        let store = ChunkStore::new(loader);

        let results = predict_shifts(&store, "CCC", "13C", &cfg).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.shift == 14.0));
    }
}
