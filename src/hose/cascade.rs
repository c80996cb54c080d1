//! Pass 2 steps 1-6: the degree-accumulation, scoring, and stringscore
//! build/propagate/rebuild cascade that turns the raw sphere lists from
//! Pass 1 into the order emission (`src/hose/emit.rs`) walks.

use std::collections::HashSet;

use crate::hose::tables::{bond_rank, element_rank, zeropad6, COMMA_RANK, HYDROGEN_RANK, RING_CLOSURE_RANK};
use crate::hose::tree::{NodeKind, Tree};
use crate::molecule::MoleculeGraph;

/// Runs the full six-step cascade in place over `tree`.
pub(super) fn run<M: MoleculeGraph>(mol: &M, tree: &mut Tree, center: usize) {
    accumulate_degrees(tree);
    score_and_sort(mol, tree, center);
    merge_ranking_and_resort(tree);
    build_stringscores_forward(tree);
    propagate_stringscores_backward(tree);
    build_stringscores_forward(tree);
}

/// Step 1: for each sphere from the outermost toward sphere 0, add every
/// node's own `degree` into its parent's `ranking`.
fn accumulate_degrees(tree: &mut Tree) {
    for s in (0..tree.spheres.len()).rev() {
        for i in 0..tree.spheres[s].len() {
            let nid = tree.spheres[s][i];
            let degree = tree.arena[nid].degree;
            if let Some(pid) = tree.arena[nid].parent {
                tree.arena[pid].ranking += degree as i64;
            }
        }
    }
}

/// Step 2: score every node (element/ring-closure rank plus bond rank),
/// using a sphere-batched `visited` set so siblings scored in the same
/// sphere never see each other as ring closures, then stable-sort each
/// sphere descending by its own score (rendered as a zero-padded string, the
/// same representation later steps build on).
fn score_and_sort<M: MoleculeGraph>(mol: &M, tree: &mut Tree, center: usize) {
    let mut visited: HashSet<usize> = HashSet::new();
    visited.insert(center);

    for s in 0..tree.spheres.len() {
        let mut newly_visited = Vec::new();
        for i in 0..tree.spheres[s].len() {
            let nid = tree.spheres[s][i];
            let node = &mut tree.arena[nid];
            let element_or_ring_rank = match node.kind {
                NodeKind::Atom(atom_idx) => {
                    if visited.contains(&atom_idx) {
                        RING_CLOSURE_RANK
                    } else {
                        newly_visited.push(atom_idx);
                        element_rank(mol.element(atom_idx))
                    }
                }
                NodeKind::Hydrogen => HYDROGEN_RANK,
                NodeKind::Comma => COMMA_RANK,
            };
            node.score = element_or_ring_rank + bond_rank(node.bond_type);
            node.stringscore = zeropad6(node.score);
        }
        visited.extend(newly_visited);
        resort(tree, s);
    }
}

fn resort(tree: &mut Tree, sphere_index: usize) {
    let arena = &tree.arena;
    tree.spheres[sphere_index].sort_by(|&a, &b| arena[b].stringscore.cmp(&arena[a].stringscore));
}

/// Step 3: fold the degree-derived `ranking` into `score`, rebuild each
/// node's own-value stringscore from the new total, and re-sort.
fn merge_ranking_and_resort(tree: &mut Tree) {
    for s in 0..tree.spheres.len() {
        for i in 0..tree.spheres[s].len() {
            let nid = tree.spheres[s][i];
            let node = &mut tree.arena[nid];
            node.score += node.ranking;
            node.stringscore = zeropad6(node.score);
        }
        resort(tree, s);
    }
}

/// Steps 4 and 6 share this routine: rebuild each node's stringscore as its
/// parent's stringscore (empty for sphere-0 nodes, whose parent is the
/// synthetic center) concatenated with its own zero-padded score, sphere by
/// sphere from the center outward, re-sorting each sphere as it's rebuilt.
fn build_stringscores_forward(tree: &mut Tree) {
    for s in 0..tree.spheres.len() {
        for i in 0..tree.spheres[s].len() {
            let nid = tree.spheres[s][i];
            let own = zeropad6(tree.arena[nid].score);
            let parent_prefix = match tree.arena[nid].parent {
                Some(pid) => tree.arena[pid].stringscore.clone(),
                None => String::new(),
            };
            tree.arena[nid].stringscore = parent_prefix + &own;
        }
        resort(tree, s);
    }
}

/// Step 5: from the outermost sphere inward, overwrite each node's parent's
/// stringscore with its own (last writer among siblings, in the sphere's
/// current sorted order, wins), then re-sort the parent sphere.
fn propagate_stringscores_backward(tree: &mut Tree) {
    for s in (1..tree.spheres.len()).rev() {
        for i in 0..tree.spheres[s].len() {
            let nid = tree.spheres[s][i];
            let own_stringscore = tree.arena[nid].stringscore.clone();
            if let Some(pid) = tree.arena[nid].parent {
                tree.arena[pid].stringscore = own_stringscore;
            }
        }
        resort(tree, s - 1);
    }
}
