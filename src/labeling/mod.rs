//! The canonical labeler.
//!
//! Implements Weininger invariant refinement with prime-product partition
//! refinement: atoms are assigned an initial invariant from local structural
//! properties, then repeatedly re-ranked by the product of their neighbors'
//! assigned primes until the partition stops refining (an "invariant
//! partition"), at which point a single tie is broken and refinement resumes,
//! until either every atom has a distinct label or 100 rounds have passed.
//!
//! The resulting labels are consumed only by [`crate::hose`] to order
//! neighbor expansion — they are never emitted into a HOSE string themselves.

mod primes;

use crate::molecule::MoleculeGraph;
use primes::PRIMES;

/// Computes canonical labels for every atom in `mol`.
///
/// Labels are not guaranteed to be a dense `1..=N` range, nor guaranteed
/// fully distinct: failing to terminate within 100 rounds degrades
/// gracefully to "best-effort" labels that still impose *a* deterministic
/// order, just not necessarily one that separates every pair of
/// topologically inequivalent atoms.
///
/// # Examples
///
/// ```
/// use nmrhose::molecule::Molecule;
/// use nmrhose::{labeling, Element, BondOrder};
///
/// // Ethane: the two carbons are related by the molecule's own symmetry,
/// // so they must receive the same label.
/// let mut mol = Molecule::new();
/// let c1 = mol.add_atom(Element::C, 0, 3);
/// let c2 = mol.add_atom(Element::C, 0, 3);
/// mol.add_bond(c1, c2, BondOrder::Single, false);
///
/// let labels = labeling::canonical_labels(&mol);
/// assert_eq!(labels[c1], labels[c2]);
/// ```
pub fn canonical_labels<M: MoleculeGraph>(mol: &M) -> Vec<u64> {
    refine(mol, true)
        .into_iter()
        .map(|v| v.min(u64::MAX as u128) as u64)
        .collect()
}

/// Computes the topological symmetry classes used as `[crate::molecule]`'s
/// `symmetry_rank`: the invariant partition reached *before* any artificial
/// tie-breaking, so atoms in the same class are genuinely, not just
/// arbitrarily, equivalent.
pub(crate) fn symmetry_classes<M: MoleculeGraph>(mol: &M) -> Vec<u32> {
    refine(mol, false)
        .into_iter()
        .map(|v| v.min(u32::MAX as u128) as u32)
        .collect()
}

/// Shared refinement loop. When `break_ties` is `false`, returns as soon as
/// the partition stops refining (the raw equivalence classes); when `true`,
/// keeps breaking ties and refining until the partition is fully resolved or
/// 100 rounds have elapsed.
fn refine<M: MoleculeGraph>(mol: &M, break_ties: bool) -> Vec<u128> {
    let n = mol.atom_count();
    if n == 0 {
        return Vec::new();
    }

    let mut curr: Vec<u128> = (0..n).map(|i| initial_invariant(mol, i)).collect();
    let mut last: Vec<u128> = vec![0; n];
    let mut prime: Vec<u64> = vec![PRIMES[0]; n];
    rerank(&mut curr, &last, &mut prime);

    for _round in 0..100 {
        let new_curr: Vec<u128> = (0..n)
            .map(|i| {
                mol.neighbors(i)
                    .iter()
                    .fold(1u128, |acc, &(j, _bond)| acc.saturating_mul(prime[j] as u128))
            })
            .collect();
        last.copy_from_slice(&curr);
        curr = new_curr;
        rerank(&mut curr, &last, &mut prime);

        let max_curr = *curr.iter().max().unwrap();
        let is_invariant = curr.iter().zip(last.iter()).all(|(c, l)| c == l) || max_curr as usize == n;

        if !is_invariant {
            continue;
        }
        if max_curr as usize == n {
            break;
        }
        if !break_ties {
            break;
        }
        if !break_one_tie(&mut curr) {
            // Every remaining atom is distinct, or no adjacent tie could be
            // located (shouldn't happen given `max_curr < n`); stop here
            // with the best-effort partition we have.
            break;
        }
    }

    curr
}

/// Doubles every label, then decrements the lowest-original-index atom that
/// is tied (after doubling) with its predecessor in ascending sorted order.
/// Returns `false` if no tie was found to break.
fn break_one_tie(curr: &mut [u128]) -> bool {
    for c in curr.iter_mut() {
        *c *= 2;
    }

    let n = curr.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| curr[a].cmp(&curr[b]).then(a.cmp(&b)));

    let mut tied_atoms: Vec<usize> = Vec::new();
    for pos in 1..n {
        let (prev, here) = (order[pos - 1], order[pos]);
        if curr[prev] == curr[here] {
            tied_atoms.push(here);
        }
    }

    match tied_atoms.into_iter().min() {
        Some(i) => {
            curr[i] -= 1;
            true
        }
        None => false,
    }
}

/// Re-ranks atoms by `(last, curr)` ascending — sort ascending by `curr`,
/// then stable-sort ascending by `last`, which is exactly a two-key sort
/// with `last` primary — assigns dense group ranks `1..=k`, and reassigns
/// each atom's prime from the first 200 primes (clamped for pathological
/// atom counts beyond that).
fn rerank(curr: &mut [u128], last: &[u128], prime: &mut [u64]) {
    let n = curr.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| curr[a].cmp(&curr[b]));
    order.sort_by(|&a, &b| last[a].cmp(&last[b]));

    let mut rank: u64 = 0;
    let mut prev_key: Option<(u128, u128)> = None;
    let mut new_curr = vec![0u128; n];
    for &idx in &order {
        let key = (last[idx], curr[idx]);
        if prev_key != Some(key) {
            rank += 1;
            prev_key = Some(key);
        }
        new_curr[idx] = rank as u128;
    }

    for i in 0..n {
        curr[i] = new_curr[i];
        let prime_index = (curr[i] as usize).saturating_sub(1).min(PRIMES.len() - 1);
        prime[i] = PRIMES[prime_index];
    }
}

/// The initial per-atom invariant: a fixed-width lexical concatenation of
/// total connections, heavy connections, atomic number, charge sign,
/// absolute charge, and implicit hydrogen count.
fn initial_invariant<M: MoleculeGraph>(mol: &M, atom: usize) -> u128 {
    let heavy_connections = mol.neighbors(atom).len() as u64;
    let implicit_h = mol.implicit_h(atom) as u64;
    let total_connections = heavy_connections + implicit_h;
    let atomic_number = mol.element(atom).atomic_number() as u64;
    let charge = mol.charge(atom);
    let sign = u64::from(charge < 0);
    let abs_charge = charge.unsigned_abs() as u64;

    format!(
        "{total_connections:02}{heavy_connections:02}{atomic_number:03}{sign:01}{abs_charge:02}{implicit_h:02}"
    )
    .parse()
    .expect("fixed-width digit string always parses")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BondOrder, Element};
    use crate::molecule::Molecule;

    #[test]
    fn benzene_ring_atoms_all_share_one_label() {
        let mut mol = Molecule::new();
        let ring: Vec<usize> = (0..6).map(|_| mol.add_atom(Element::C, 0, 1)).collect();
        for i in 0..6 {
            mol.add_bond(ring[i], ring[(i + 1) % 6], BondOrder::Single, true);
        }

        let labels = canonical_labels(&mol);
        let first = labels[ring[0]];
        assert!(ring.iter().all(|&a| labels[a] == first));
    }

    #[test]
    fn toluene_ring_positions_pair_up_symmetrically() {
        // Cc1ccccc1: methyl-bearing carbon (ipso) is unique; ortho pair
        // (ring atoms adjacent to ipso) share a label, as do the meta pair.
        let mut mol = Molecule::new();
        let methyl = mol.add_atom(Element::C, 0, 3);
        let ring: Vec<usize> = (0..6).map(|_| mol.add_atom(Element::C, 0, 1)).collect();
        mol.add_bond(methyl, ring[0], BondOrder::Single, false);
        for i in 0..6 {
            mol.add_bond(ring[i], ring[(i + 1) % 6], BondOrder::Single, true);
        }
        // ring[0] is bonded to methyl so it has one fewer implicit H.
        let labels = canonical_labels(&mol);

        assert_eq!(labels[ring[1]], labels[ring[5]]); // ortho
        assert_eq!(labels[ring[2]], labels[ring[4]]); // meta
        assert_ne!(labels[ring[0]], labels[ring[3]]); // ipso vs. para
    }

    #[test]
    fn linear_propane_carbons_are_all_distinguishable_by_position() {
        let mut mol = Molecule::new();
        let c1 = mol.add_atom(Element::C, 0, 3);
        let c2 = mol.add_atom(Element::C, 0, 2);
        let c3 = mol.add_atom(Element::C, 0, 3);
        mol.add_bond(c1, c2, BondOrder::Single, false);
        mol.add_bond(c2, c3, BondOrder::Single, false);

        let labels = canonical_labels(&mol);
        assert_eq!(labels[c1], labels[c3]); // symmetric ends
        assert_ne!(labels[c1], labels[c2]);
    }

    #[test]
    fn symmetry_classes_match_canonical_label_equalities() {
        let mut mol = Molecule::new();
        let ring: Vec<usize> = (0..6).map(|_| mol.add_atom(Element::C, 0, 1)).collect();
        for i in 0..6 {
            mol.add_bond(ring[i], ring[(i + 1) % 6], BondOrder::Single, true);
        }
        let classes = symmetry_classes(&mol);
        assert!(ring.iter().all(|&a| classes[a] == classes[ring[0]]));
    }
}
