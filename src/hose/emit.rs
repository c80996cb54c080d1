//! Pass 2 step 7: walking the fully-cascaded tree to produce the output
//! string.
//!
//! Emission tracks its *own* `visited` set, grown one real atom at a time as
//! nodes are actually emitted — unlike the sphere-batched set scoring uses in
//! `src/hose/cascade.rs`. The two sets can disagree within a single sphere:
//! two branches converging on the same atom in the same sphere both score as
//! fresh atoms (batched), but the second one to be *emitted* (now that the
//! sphere is in its final sorted order) is a ring closure.

use std::collections::HashSet;

use crate::hose::tables::{bond_symbol, bremser_symbol, charge_suffix, delimiter_at};
use crate::hose::tree::{NodeKind, Tree};
use crate::molecule::MoleculeGraph;

pub(super) fn run<M: MoleculeGraph>(mol: &M, tree: &mut Tree, center: usize) -> String {
    let mut out = String::new();
    let mut visited: HashSet<usize> = HashSet::new();
    visited.insert(center);

    let max_spheres = tree.spheres.len();
    emit_sphere(mol, tree, 0, &mut visited, &mut out);
    for s in 1..max_spheres {
        out.push(delimiter_at(s - 1));
        emit_sphere(mol, tree, s, &mut visited, &mut out);
    }
    out.push(delimiter_at(max_spheres.saturating_sub(1)));

    out
}

fn emit_sphere<M: MoleculeGraph>(
    mol: &M,
    tree: &mut Tree,
    sphere_index: usize,
    visited: &mut HashSet<usize>,
    out: &mut String,
) {
    let sphere = tree.spheres[sphere_index].clone();
    if sphere.is_empty() {
        return;
    }

    let mut current_branch = tree.arena[sphere[0]].parent_atom_idx;

    for (i, &nid) in sphere.iter().enumerate() {
        let parent_stopper = tree.arena[nid]
            .parent
            .map(|pid| tree.arena[pid].stopper)
            .unwrap_or(false);

        if parent_stopper {
            tree.arena[nid].stopper = true;
            continue;
        }

        let parent_atom_idx = tree.arena[nid].parent_atom_idx;
        if i > 0 && parent_atom_idx != current_branch {
            out.push(',');
            current_branch = parent_atom_idx;
        }

        let bond_type = tree.arena[nid].bond_type;
        match tree.arena[nid].kind {
            NodeKind::Comma => {
                // Contributes no token; its presence already drove the
                // sibling-group comma above.
            }
            NodeKind::Hydrogen => {
                out.push_str(bond_symbol(bond_type));
                out.push('H');
            }
            NodeKind::Atom(atom_idx) => {
                out.push_str(bond_symbol(bond_type));
                if visited.contains(&atom_idx) {
                    out.push('&');
                    out.push_str(&charge_suffix(mol.charge(atom_idx)));
                    tree.arena[nid].stopper = true;
                } else {
                    out.push_str(&bremser_symbol(mol.element(atom_idx)));
                    out.push_str(&charge_suffix(mol.charge(atom_idx)));
                }
                visited.insert(atom_idx);
            }
        }
    }
}
