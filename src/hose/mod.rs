//! The HOSE generator — the largest and most carefully-specified module in
//! this crate. Byte-exact compatibility with the nmrshiftdb2/CDK reference
//! format is the entire point; nothing here is free to diverge for
//! elegance.
//!
//! The algorithm runs in two passes over a transient, per-call tree
//! ([`tree::Tree`]): Pass 1 ([`tree::build_spheres`]) builds `max_spheres`
//! ordered sphere lists by breadth-first expansion from the center atom,
//! without any ring-closure awareness. Pass 2 ([`cascade::run`]) runs a
//! six-step scoring/sorting cascade over the whole tree, and finally
//! ([`emit::run`]) walks the cascaded order to produce the output string,
//! where ring closures are detected for the first time via an incrementally
//! grown `visited` set.

mod cascade;
mod emit;
mod tables;
mod tree;

pub(crate) use tables::element_rank;

use crate::labeling;
use crate::molecule::MoleculeGraph;

/// The reference sphere depth used everywhere outside of deliberate testing.
pub const DEFAULT_MAX_SPHERES: usize = 4;

/// Generates the canonical HOSE code for `atom` in `mol`, out to
/// `max_spheres` spheres.
///
/// Pure and deterministic: calling this twice for the same atom of the same
/// molecule (including after parsing an alternative SMILES for an isomorphic
/// graph) yields byte-identical output. Requires `mol.ensure_derived_tables()`
/// to have been called at least once (directly, or implicitly via any
/// `MoleculeGraph` accessor that does so internally).
///
/// # Examples
///
/// ```
/// use nmrhose::molecule::{from_smiles, MoleculeGraph};
/// use nmrhose::hose::hose;
///
/// let mol = from_smiles("c1ccccc1").unwrap();
/// mol.ensure_derived_tables();
/// assert_eq!(hose(&mol, 0, 4), "H*C*C(H,H,*C,*C/H,H,*C,*&/H*&)");
/// ```
pub fn hose<M: MoleculeGraph>(mol: &M, atom: usize, max_spheres: usize) -> String {
    mol.ensure_derived_tables();
    let labels = labeling::canonical_labels(mol);

    let mut tree = tree::build_spheres(mol, atom, max_spheres, &labels);
    cascade::run(mol, &mut tree, atom);
    emit::run(mol, &mut tree, atom)
}

/// [`hose`] at the reference sphere depth ([`DEFAULT_MAX_SPHERES`]).
pub fn hose_default<M: MoleculeGraph>(mol: &M, atom: usize) -> String {
    hose(mol, atom, DEFAULT_MAX_SPHERES)
}
