//! Implicit hydrogen suppression for unbracketed organic-subset atoms.
//!
//! `yowl` (like every minimal SMILES reader) only resolves hydrogen counts
//! for bracket atoms, where the count is written explicitly. For the
//! unbracketed "organic subset" (`B, C, N, O, P, S, F, Cl, Br, I` and their
//! aromatic lowercase forms) the count must be *inferred* from the normal
//! valence table, following the algorithm in the OpenSMILES specification
//! §3.2.2 ("Implicit Hydrogens").
//!
//! The one subtlety worth documenting: an aromatic atom's bonds cannot be
//! individually assigned Kekulé single/double character without running a
//! full Kekulization pass (out of scope — that's exactly the kind of
//! chemistry delegated to the external cheminformatics library). The
//! standard shortcut, and the reason OpenSMILES requires
//! pyrrole-type heteroatoms to be written with an explicit bracket
//! (`[nH]`, `[se]`, …) rather than bare lowercase, is that an *unbracketed*
//! aromatic atom is always assumed to carry one formal double bond into the
//! ring. That lets us add a flat "+1" to the bond-order sum once per
//! aromatic atom (not once per aromatic bond) without Kekulizing anything.

use crate::core::Element;

/// Normal valences for the organic-subset elements, smallest first.
/// `None` for elements outside the subset — implicit H for those is always 0
/// for our purposes (brackets are mandatory for them in well-formed SMILES).
fn normal_valences(element: Element) -> &'static [u32] {
    match element {
        Element::B => &[3],
        Element::C => &[4],
        Element::N => &[3, 5],
        Element::O => &[2],
        Element::P => &[3, 5],
        Element::S => &[2, 4, 6],
        Element::F | Element::Cl | Element::Br | Element::I => &[1],
        _ => &[],
    }
}

/// Computes the implicit hydrogen count for an unbracketed atom.
///
/// `bonds` is the sequence of `(order_as_u32, aromatic)` pairs for every bond
/// incident to the atom (aromatic bonds' nominal order is irrelevant and may
/// be any value; only `aromatic` is consulted for them).
///
/// # Examples
///
/// ```
/// use nmrhose::Element;
/// use nmrhose::molecule::implicit_hydrogens;
///
/// // Benzene ring carbon: two aromatic ring bonds, one implicit H.
/// assert_eq!(implicit_hydrogens(Element::C, &[(0, true), (0, true)]), 1);
///
/// // Methane carbon: no bonds at all, four implicit H.
/// assert_eq!(implicit_hydrogens(Element::C, &[]), 4);
/// ```
pub fn implicit_hydrogens(element: Element, bonds: &[(u32, bool)]) -> u32 {
    let valences = normal_valences(element);
    if valences.is_empty() {
        return 0;
    }

    let aromatic_count = bonds.iter().filter(|(_, aromatic)| *aromatic).count() as u32;
    let nonaromatic_sum: u32 = bonds
        .iter()
        .filter(|(_, aromatic)| !*aromatic)
        .map(|(order, _)| *order)
        .sum();
    let used = nonaromatic_sum + aromatic_count + if aromatic_count > 0 { 1 } else { 0 };

    let normal = valences
        .iter()
        .copied()
        .find(|v| *v >= used)
        .unwrap_or(*valences.last().unwrap());

    normal.saturating_sub(used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliphatic_methyl_group_gets_three_hydrogens() {
        assert_eq!(implicit_hydrogens(Element::C, &[(1, false)]), 3);
    }

    #[test]
    fn carbonyl_carbon_gets_no_hydrogen_when_fully_substituted() {
        // C(=O)(C)(C): double bond + two single bonds, used = 4.
        let bonds = [(2, false), (1, false), (1, false)];
        assert_eq!(implicit_hydrogens(Element::C, &bonds), 0);
    }

    #[test]
    fn pyridine_style_aromatic_nitrogen_has_no_hydrogen() {
        // Two aromatic ring bonds, default "formal double bond" assumption
        // brings used valence to 3, matching N's normal valence exactly.
        let bonds = [(0, true), (0, true)];
        assert_eq!(implicit_hydrogens(Element::N, &bonds), 0);
    }

    #[test]
    fn aromatic_fusion_carbon_has_no_hydrogen() {
        // Naphthalene-style bridgehead: three aromatic ring bonds.
        let bonds = [(0, true), (0, true), (0, true)];
        assert_eq!(implicit_hydrogens(Element::C, &bonds), 0);
    }

    #[test]
    fn element_outside_organic_subset_has_no_implicit_hydrogen() {
        assert_eq!(implicit_hydrogens(Element::Fe, &[(1, false)]), 0);
    }
}
