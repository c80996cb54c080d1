//! SMILES parsing via the `yowl` crate, the external cheminformatics
//! collaborator this crate delegates syntax parsing and aromaticity
//! perception to.
//!
//! `yowl::read::read` drives a [`yowl::graph::Builder`] that, once built,
//! yields a flat `Vec<Atom>` where each atom carries its own adjacency list
//! (bonds back to already-visited atoms and forward to not-yet-visited
//! ones — the list is symmetric once the whole molecule has been read). This
//! module is the single, narrow seam between that representation and our own
//! [`Molecule`]; if a future `yowl` release reshapes its feature types, only
//! this file should need to change.

use crate::core::error::MoleculeError;
use crate::core::{BondOrder, Element};
use crate::molecule::{implicit_hydrogens, Molecule};

use yowl::feature::{Aliphatic, Aromatic, AtomKind, BondKind};
use yowl::graph::{Atom, Builder};
use yowl::read::read;

/// Parses a SMILES string into a [`Molecule`].
///
/// Implicit hydrogen counts for unbracketed organic-subset atoms are filled
/// in afterwards via [`implicit_hydrogens`]; bracket atoms keep whatever
/// count was written explicitly.
///
/// # Errors
///
/// Returns [`MoleculeError::InvalidSmiles`] if `yowl` rejects the input,
/// either while reading syntax or while resolving the read events into a
/// concrete atom/bond graph.
pub fn from_smiles(smiles: &str) -> Result<Molecule, MoleculeError> {
    let mut builder = Builder::default();
    read(smiles, &mut builder, None).map_err(|err| MoleculeError::InvalidSmiles {
        smiles: smiles.to_owned(),
        message: format!("{err:?}"),
    })?;
    let atoms = builder.build().map_err(|err| MoleculeError::InvalidSmiles {
        smiles: smiles.to_owned(),
        message: format!("{err:?}"),
    })?;

    Ok(build_molecule(&atoms))
}

fn build_molecule(atoms: &[Atom]) -> Molecule {
    let mut molecule = Molecule::new();

    for atom in atoms {
        let (element, charge, explicit_h) = decode_atom_kind(&atom.kind);
        molecule.add_atom(element, charge, explicit_h.unwrap_or(0));
    }

    for (i, atom) in atoms.iter().enumerate() {
        for bond in &atom.bonds {
            let j = bond.tid;
            if j <= i {
                // Each bond is listed from both endpoints; add it once, when
                // we reach the higher-indexed side.
                continue;
            }
            let aromatic =
                bond_is_aromatic(&bond.kind, &atoms[i].kind, &atoms[j].kind);
            let order = decode_bond_order(&bond.kind);
            molecule.add_bond(i, j, order, aromatic);
        }
    }

    for (i, atom) in atoms.iter().enumerate() {
        if matches!(atom.kind, AtomKind::Bracket(_)) {
            continue; // explicit hydrogen count already installed above
        }
        let element = molecule.element(i);
        let bond_info: Vec<(u32, bool)> = molecule
            .neighbors(i)
            .iter()
            .map(|&(_, bond_idx)| {
                (molecule.bond_order(bond_idx) as u32, molecule.is_aromatic(bond_idx))
            })
            .collect();
        let h = implicit_hydrogens(element, &bond_info);
        molecule.set_implicit_h(i, h);
    }

    molecule
}

/// Decodes a `yowl` atom kind into `(element, formal charge, explicit H
/// count)`. The hydrogen count is `Some` only for bracket atoms, where it was
/// written explicitly; `None` signals "compute it from valence".
fn decode_atom_kind(kind: &AtomKind) -> (Element, i32, Option<u32>) {
    match kind {
        AtomKind::Star => (Element::C, 0, Some(0)),
        AtomKind::Aliphatic(a) => (aliphatic_element(*a), 0, None),
        AtomKind::Aromatic(a) => (aromatic_element(*a), 0, None),
        AtomKind::Bracket(bracket) => {
            let element = match &bracket.symbol {
                yowl::feature::BracketSymbol::Star => Element::C,
                yowl::feature::BracketSymbol::Aliphatic(a) => aliphatic_element(*a),
                yowl::feature::BracketSymbol::Aromatic(a) => aromatic_element(*a),
            };
            let charge = bracket.charge.unwrap_or(0) as i32;
            let hcount = bracket.hcount.unwrap_or(0) as u32;
            (element, charge, Some(hcount))
        }
    }
}

fn aliphatic_element(a: Aliphatic) -> Element {
    match a {
        Aliphatic::B => Element::B,
        Aliphatic::C => Element::C,
        Aliphatic::N => Element::N,
        Aliphatic::O => Element::O,
        Aliphatic::P => Element::P,
        Aliphatic::S => Element::S,
        Aliphatic::F => Element::F,
        Aliphatic::Cl => Element::Cl,
        Aliphatic::Br => Element::Br,
        Aliphatic::I => Element::I,
    }
}

fn aromatic_element(a: Aromatic) -> Element {
    match a {
        Aromatic::B => Element::B,
        Aromatic::C => Element::C,
        Aromatic::N => Element::N,
        Aromatic::O => Element::O,
        Aromatic::P => Element::P,
        Aromatic::S => Element::S,
        Aromatic::As => Element::As,
        Aromatic::Se => Element::Se,
        Aromatic::Si => Element::Si,
        Aromatic::Te => Element::Te,
    }
}

fn decode_bond_order(kind: &BondKind) -> BondOrder {
    match kind {
        BondKind::Double => BondOrder::Double,
        BondKind::Triple => BondOrder::Triple,
        _ => BondOrder::Single,
    }
}

/// A bond is aromatic if it was written with the explicit `:` symbol, or if
/// it is elided (no symbol) between two atoms that were both written in
/// lowercase (aromatic) form.
fn bond_is_aromatic(kind: &BondKind, left: &AtomKind, right: &AtomKind) -> bool {
    match kind {
        BondKind::Aromatic => true,
        BondKind::Elided => atom_kind_is_aromatic(left) && atom_kind_is_aromatic(right),
        _ => false,
    }
}

fn atom_kind_is_aromatic(kind: &AtomKind) -> bool {
    match kind {
        AtomKind::Aromatic(_) => true,
        AtomKind::Bracket(bracket) => {
            matches!(bracket.symbol, yowl::feature::BracketSymbol::Aromatic(_))
        }
        _ => false,
    }
}
