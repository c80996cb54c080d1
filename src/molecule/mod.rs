//! The molecule adapter.
//!
//! This module presents the minimal capability surface the canonical labeler
//! and HOSE generator consume — [`MoleculeGraph`] — and a concrete
//! implementation, [`Molecule`], that can either be built directly (for tests
//! and for callers who already have connectivity data) or parsed from a SMILES
//! string through the `yowl` crate, the external cheminformatics collaborator.
//!
//! `yowl` parses SMILES syntax and resolves aromaticity (a lowercase atom
//! symbol *is* the aromaticity perception result) but, being a minimal reader,
//! does not itself compute implicit hydrogen counts for non-bracket atoms or
//! topological symmetry classes. Both are filled in here; see
//! [`implicit_hydrogens`] and [`Molecule::ensure_derived_tables`].

mod implicit_h;
mod smiles;

pub use implicit_h::implicit_hydrogens;
pub use smiles::from_smiles;

use crate::core::{BondOrder, Element};
use crate::labeling;
use std::sync::OnceLock;

/// Capability surface a molecular graph must expose to the canonical labeler
/// and the HOSE generator.
///
/// No implementor may mutate its own graph state through this trait; it is a
/// read-only view.
pub trait MoleculeGraph {
    /// Number of atoms in the molecule, indexed `0..atom_count()`.
    fn atom_count(&self) -> usize;

    /// The `(neighbor_atom_index, bond_index)` pairs incident to `atom`.
    fn neighbors(&self, atom: usize) -> &[(usize, usize)];

    /// Nominal bond order of `bond`, independent of aromaticity.
    fn bond_order(&self, bond: usize) -> BondOrder;

    /// Whether `bond` is aromatic. When `true` this supersedes `bond_order`
    /// for HOSE scoring and symbol emission.
    fn is_aromatic(&self, bond: usize) -> bool;

    /// Element of `atom`.
    fn element(&self, atom: usize) -> Element;

    /// Formal charge of `atom`.
    fn charge(&self, atom: usize) -> i32;

    /// Implicit hydrogen count of `atom`.
    fn implicit_h(&self, atom: usize) -> u32;

    /// Topological symmetry class of `atom`: atoms with the same rank are
    /// equivalent under the canonical-labeling invariant refinement.
    fn symmetry_rank(&self, atom: usize) -> u32;

    /// Idempotent hook that triggers derived-table computation
    /// (symmetry ranks). Implementations that compute everything eagerly may
    /// make this a no-op.
    fn ensure_derived_tables(&self);
}

/// One atom's static record: element, formal charge, and hydrogen count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomRecord {
    pub element: Element,
    pub charge: i32,
    pub implicit_h: u32,
}

/// One bond's static record: nominal order plus the aromatic override flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRecord {
    pub order: BondOrder,
    pub aromatic: bool,
}

/// A molecular connectivity graph: the concrete type every pipeline stage
/// operates on.
///
/// Can be built incrementally with [`Molecule::new`]/[`Molecule::add_atom`]/
/// [`Molecule::add_bond`] (the path taken by tests and by any caller handing
/// in connectivity they already derived some other way), or parsed from
/// SMILES with [`from_smiles`].
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<AtomRecord>,
    bonds: Vec<BondRecord>,
    adjacency: Vec<Vec<(usize, usize)>>,
    symmetry_ranks: OnceLock<Vec<u32>>,
}

impl Default for Molecule {
    fn default() -> Self {
        Self::new()
    }
}

impl Molecule {
    /// Creates an empty molecule.
    pub fn new() -> Self {
        Self {
            atoms: Vec::new(),
            bonds: Vec::new(),
            adjacency: Vec::new(),
            symmetry_ranks: OnceLock::new(),
        }
    }

    /// Adds an atom, returning its index.
    pub fn add_atom(&mut self, element: Element, charge: i32, implicit_h: u32) -> usize {
        let id = self.atoms.len();
        self.atoms.push(AtomRecord {
            element,
            charge,
            implicit_h,
        });
        self.adjacency.push(Vec::new());
        id
    }

    /// Overwrites the implicit hydrogen count of an already-added atom.
    ///
    /// Used by [`from_smiles`] to fill in valence-derived counts once a
    /// bracket-free atom's full bond list is known.
    pub(crate) fn set_implicit_h(&mut self, atom: usize, implicit_h: u32) {
        self.atoms[atom].implicit_h = implicit_h;
    }

    /// Adds a bond between two existing atoms, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if either atom index is out of bounds or the atoms are equal —
    /// callers of this low-level builder are expected to hand in
    /// already-validated connectivity (SMILES parsing validates this for
    /// [`from_smiles`]).
    pub fn add_bond(&mut self, a: usize, b: usize, order: BondOrder, aromatic: bool) -> usize {
        assert!(a != b, "atom {a} cannot bond to itself");
        assert!(
            a < self.atoms.len() && b < self.atoms.len(),
            "bond references an atom outside the molecule"
        );
        let id = self.bonds.len();
        self.bonds.push(BondRecord { order, aromatic });
        self.adjacency[a].push((b, id));
        self.adjacency[b].push((a, id));
        id
    }
}

impl MoleculeGraph for Molecule {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn neighbors(&self, atom: usize) -> &[(usize, usize)] {
        &self.adjacency[atom]
    }

    fn bond_order(&self, bond: usize) -> BondOrder {
        self.bonds[bond].order
    }

    fn is_aromatic(&self, bond: usize) -> bool {
        self.bonds[bond].aromatic
    }

    fn element(&self, atom: usize) -> Element {
        self.atoms[atom].element
    }

    fn charge(&self, atom: usize) -> i32 {
        self.atoms[atom].charge
    }

    fn implicit_h(&self, atom: usize) -> u32 {
        self.atoms[atom].implicit_h
    }

    fn symmetry_rank(&self, atom: usize) -> u32 {
        self.ensure_derived_tables();
        self.symmetry_ranks.get().expect("just initialized")[atom]
    }

    fn ensure_derived_tables(&self) {
        if self.symmetry_ranks.get().is_some() {
            return;
        }
        let ranks = labeling::symmetry_classes(self);
        let _ = self.symmetry_ranks.set(ranks);
    }
}
