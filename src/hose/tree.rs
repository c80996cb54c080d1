//! The transient per-call tree: node representation, arena, and Pass 1
//! (sphere construction).
//!
//! Per the re-architecture called for over the source's co-mingled
//! real/sentinel node list, a node is a small tagged enum rather than one
//! struct with unused fields depending on variant.

use crate::hose::tables::BOND_SINGLE;
use crate::molecule::MoleculeGraph;

pub(super) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NodeKind {
    /// A real atom, identified by its index in the molecule.
    Atom(usize),
    /// An implicit-hydrogen pseudo-atom; contributes the literal `H` token.
    Hydrogen,
    /// The leaf sentinel marking a terminal atom with no further spheres.
    Comma,
}

/// One node of the transient per-call HOSE tree.
///
/// `ranking`, `score`, and `stringscore` start at their zero values at
/// construction and are filled in by the Pass 2 cascade (`src/hose/cascade.rs`);
/// `stopper` is touched only during emission (`src/hose/emit.rs`).
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) kind: NodeKind,
    /// Bond-type discriminant to `parent` (see `tables::BOND_*`).
    pub(super) bond_type: i32,
    pub(super) parent: Option<NodeId>,
    /// Atom index of the parent node — always a real atom, since only real
    /// atoms ever have children. Used for sibling-group pruning and for the
    /// comma-insertion rule during emission.
    pub(super) parent_atom_idx: usize,
    /// Molecular connectivity count (heavy neighbors + implicit H) of this
    /// node's own atom; zero for sentinel nodes.
    pub(super) degree: u32,
    pub(super) ranking: i64,
    pub(super) score: i64,
    pub(super) stringscore: String,
    pub(super) stopper: bool,
}

impl Node {
    fn new(kind: NodeKind, bond_type: i32, parent: Option<NodeId>, parent_atom_idx: usize, degree: u32) -> Self {
        Node {
            kind,
            bond_type,
            parent,
            parent_atom_idx,
            degree,
            ranking: 0,
            score: 0,
            stringscore: String::new(),
            stopper: false,
        }
    }
}

/// The full per-call tree: a flat node arena plus the ordered sphere lists.
pub(super) struct Tree {
    pub(super) arena: Vec<Node>,
    pub(super) spheres: Vec<Vec<NodeId>>,
}

fn degree_of<M: MoleculeGraph>(mol: &M, atom: usize) -> u32 {
    mol.neighbors(atom).len() as u32 + mol.implicit_h(atom)
}

fn bond_type_between<M: MoleculeGraph>(mol: &M, bond: usize) -> i32 {
    if mol.is_aromatic(bond) {
        crate::hose::tables::BOND_AROMATIC
    } else {
        mol.bond_order(bond) as i32
    }
}

/// Builds the `max_spheres` sphere lists rooted at `center`, sorting each
/// sphere ascending by canonical label once constructed (sentinel and
/// hydrogen nodes sort after every real atom, regardless of the numeric
/// labeling — this ordering is scaffolding only; Pass 2 fully re-sorts
/// before anything is emitted).
pub(super) fn build_spheres<M: MoleculeGraph>(
    mol: &M,
    center: usize,
    max_spheres: usize,
    labels: &[u64],
) -> Tree {
    let mut arena = Vec::new();
    let mut spheres: Vec<Vec<NodeId>> = Vec::with_capacity(max_spheres);

    // Sphere 0: direct neighbors of `center`, then its own implicit H.
    let mut sphere0 = Vec::new();
    for &(neighbor, bond) in mol.neighbors(center) {
        let bond_type = bond_type_between(mol, bond);
        let id = arena.len();
        arena.push(Node::new(
            NodeKind::Atom(neighbor),
            bond_type,
            None,
            center,
            degree_of(mol, neighbor),
        ));
        sphere0.push(id);
    }
    for _ in 0..mol.implicit_h(center) {
        let id = arena.len();
        arena.push(Node::new(NodeKind::Hydrogen, BOND_SINGLE, None, center, 0));
        sphere0.push(id);
    }
    sort_sphere(&mut sphere0, &arena, labels);
    spheres.push(sphere0);

    for _s in 1..max_spheres {
        let prev = spheres.last().expect("just pushed sphere 0");
        let mut sphere = Vec::new();
        for &pid in prev {
            let (atom_idx, parent_for_children) = match arena[pid].kind {
                NodeKind::Atom(idx) => (idx, pid),
                _ => continue, // H and comma sentinels never expand further
            };
            let came_from = arena[pid].parent_atom_idx;
            let heavy_neighbors = mol.neighbors(atom_idx);
            let impl_h = mol.implicit_h(atom_idx);

            if heavy_neighbors.len() == 1 && impl_h == 0 {
                let id = arena.len();
                arena.push(Node::new(
                    NodeKind::Comma,
                    crate::hose::tables::BOND_COMMA,
                    Some(parent_for_children),
                    atom_idx,
                    0,
                ));
                sphere.push(id);
                continue;
            }

            for &(neighbor, bond) in heavy_neighbors {
                if neighbor == came_from {
                    continue;
                }
                let bond_type = bond_type_between(mol, bond);
                let id = arena.len();
                arena.push(Node::new(
                    NodeKind::Atom(neighbor),
                    bond_type,
                    Some(parent_for_children),
                    atom_idx,
                    degree_of(mol, neighbor),
                ));
                sphere.push(id);
            }
            for _ in 0..impl_h {
                let id = arena.len();
                arena.push(Node::new(
                    NodeKind::Hydrogen,
                    BOND_SINGLE,
                    Some(parent_for_children),
                    atom_idx,
                    0,
                ));
                sphere.push(id);
            }
        }
        sort_sphere(&mut sphere, &arena, labels);
        spheres.push(sphere);
    }

    Tree { arena, spheres }
}

fn sort_sphere(sphere: &mut [NodeId], arena: &[Node], labels: &[u64]) {
    sphere.sort_by_key(|&id| match arena[id].kind {
        NodeKind::Atom(idx) => labels[idx],
        NodeKind::Hydrogen | NodeKind::Comma => u64::MAX,
    });
}
