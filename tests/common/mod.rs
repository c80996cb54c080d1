//! Shared integration-test harness: small molecules built directly through
//! `Molecule`'s builder (bypassing `yowl`) so the HOSE-generator scenarios —
//! the correctness-critical ones — don't depend on the exact shape of a
//! third-party parser's output, plus mock shift-store helpers for C5/C6.

use std::collections::HashMap;

use nmrhose::core::{BondOrder, Element};
use nmrhose::molecule::Molecule;
use nmrhose::store::{Chunk, ChunkStore, InMemoryChunkLoader, ShiftEntry, SolventStats};

/// Benzene: a six-membered aromatic ring, one implicit H per ring atom.
pub fn benzene() -> Molecule {
    let mut mol = Molecule::new();
    let ring: Vec<usize> = (0..6).map(|_| mol.add_atom(Element::C, 0, 1)).collect();
    for i in 0..6 {
        mol.add_bond(ring[i], ring[(i + 1) % 6], BondOrder::Single, true);
    }
    mol
}

/// Toluene: a methyl-substituted benzene ring. Atom 0 is the methyl carbon,
/// atom 1 is the ipso ring carbon, atoms 2..=6 complete the ring in order.
pub fn toluene() -> Molecule {
    let mut mol = Molecule::new();
    let methyl = mol.add_atom(Element::C, 0, 3);
    let ring: Vec<usize> = std::iter::once(mol.add_atom(Element::C, 0, 0))
        .chain((0..5).map(|_| mol.add_atom(Element::C, 0, 1)))
        .collect();
    mol.add_bond(methyl, ring[0], BondOrder::Single, false);
    for i in 0..6 {
        mol.add_bond(ring[i], ring[(i + 1) % 6], BondOrder::Single, true);
    }
    mol
}

/// Linear propane: `C0-C1-C2`, terminal carbons symmetric.
pub fn propane() -> Molecule {
    let mut mol = Molecule::new();
    let c1 = mol.add_atom(Element::C, 0, 3);
    let c2 = mol.add_atom(Element::C, 0, 2);
    let c3 = mol.add_atom(Element::C, 0, 3);
    mol.add_bond(c1, c2, BondOrder::Single, false);
    mol.add_bond(c2, c3, BondOrder::Single, false);
    mol
}

/// Cyclohexane: a six-membered saturated carbocycle.
pub fn cyclohexane() -> Molecule {
    let mut mol = Molecule::new();
    let ring: Vec<usize> = (0..6).map(|_| mol.add_atom(Element::C, 0, 2)).collect();
    for i in 0..6 {
        mol.add_bond(ring[i], ring[(i + 1) % 6], BondOrder::Single, false);
    }
    mol
}

/// Builds a shift-store entry with a single solvent's `{min, max, avg, cnt}`.
pub fn entry(smiles: &str, avg: f64, count: u64) -> ShiftEntry {
    let mut solvents = HashMap::new();
    solvents.insert("CDCl3".to_string(), SolventStats { min: avg, max: avg, avg, count });
    ShiftEntry { nucleus: "C".to_string(), smiles: smiles.to_string(), solvents }
}

/// Assembles an in-memory `ChunkStore` from `(hose key, smiles, avg shift)`
/// triples, sharding each entry into its real chunk via `chunk_index_of`.
pub fn mock_store(entries: &[(&str, &str, f64)]) -> ChunkStore {
    let mut by_chunk: HashMap<u16, Chunk> = HashMap::new();
    for &(key, smiles, avg) in entries {
        let idx = nmrhose::store::chunk_index_of(key);
        by_chunk.entry(idx).or_default().insert(key.to_string(), entry(smiles, avg, 1));
    }
    let mut loader = InMemoryChunkLoader::new();
    for (idx, chunk) in by_chunk {
        loader = loader.with_chunk(idx, chunk);
    }
    ChunkStore::new(loader)
}
