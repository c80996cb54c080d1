//! Core types shared across the whole crate: chemical elements and bond orders.
//!
//! These are the smallest building blocks the HOSE generator, canonical labeler,
//! and shift store all agree on. Nothing here is specific to any one pipeline
//! stage.

use std::fmt;
use std::str::FromStr;

pub mod error;

/// A chemical element, represented by its atomic number.
///
/// The discriminant of each variant *is* its atomic number, so `element as u32`
/// is always the correct atomic number — this doubles as the monotonic
/// "atomic mass" proxy the HOSE element-rank table falls back to for elements
/// outside its explicit table (see [`crate::hose::element_rank`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    La,
    Ce,
    Pr,
    Nd,
    Pm,
    Sm,
    Eu,
    Gd,
    Tb,
    Dy,
    Ho,
    Er,
    Tm,
    Yb,
    Lu,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
    Bi,
    Po,
    At,
    Rn,
}

/// Error returned when a string is not a recognized element symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseElementError {
    invalid_string: String,
}

impl fmt::Display for ParseElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized element symbol: '{}'", self.invalid_string)
    }
}
impl std::error::Error for ParseElementError {}

impl Element {
    /// Returns the atomic number of this element.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmrhose::Element;
    ///
    /// assert_eq!(Element::C.atomic_number(), 6);
    /// ```
    pub fn atomic_number(self) -> u32 {
        self as u8 as u32
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses an element from its standard one- or two-letter symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use nmrhose::Element;
    ///
    /// assert_eq!(Element::from_str("Cl").unwrap(), Element::Cl);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Element::*;
        Ok(match s {
            "H" => H,
            "He" => He,
            "Li" => Li,
            "Be" => Be,
            "B" => B,
            "C" => C,
            "N" => N,
            "O" => O,
            "F" => F,
            "Ne" => Ne,
            "Na" => Na,
            "Mg" => Mg,
            "Al" => Al,
            "Si" => Si,
            "P" => P,
            "S" => S,
            "Cl" => Cl,
            "Ar" => Ar,
            "K" => K,
            "Ca" => Ca,
            "Sc" => Sc,
            "Ti" => Ti,
            "V" => V,
            "Cr" => Cr,
            "Mn" => Mn,
            "Fe" => Fe,
            "Co" => Co,
            "Ni" => Ni,
            "Cu" => Cu,
            "Zn" => Zn,
            "Ga" => Ga,
            "Ge" => Ge,
            "As" => As,
            "Se" => Se,
            "Br" => Br,
            "Kr" => Kr,
            "Rb" => Rb,
            "Sr" => Sr,
            "Y" => Y,
            "Zr" => Zr,
            "Nb" => Nb,
            "Mo" => Mo,
            "Tc" => Tc,
            "Ru" => Ru,
            "Rh" => Rh,
            "Pd" => Pd,
            "Ag" => Ag,
            "Cd" => Cd,
            "In" => In,
            "Sn" => Sn,
            "Sb" => Sb,
            "Te" => Te,
            "I" => I,
            "Xe" => Xe,
            "Cs" => Cs,
            "Ba" => Ba,
            "La" => La,
            "Ce" => Ce,
            "Pr" => Pr,
            "Nd" => Nd,
            "Pm" => Pm,
            "Sm" => Sm,
            "Eu" => Eu,
            "Gd" => Gd,
            "Tb" => Tb,
            "Dy" => Dy,
            "Ho" => Ho,
            "Er" => Er,
            "Tm" => Tm,
            "Yb" => Yb,
            "Lu" => Lu,
            "Hf" => Hf,
            "Ta" => Ta,
            "W" => W,
            "Re" => Re,
            "Os" => Os,
            "Ir" => Ir,
            "Pt" => Pt,
            "Au" => Au,
            "Hg" => Hg,
            "Tl" => Tl,
            "Pb" => Pb,
            "Bi" => Bi,
            "Po" => Po,
            "At" => At,
            "Rn" => Rn,
            _ => {
                return Err(ParseElementError {
                    invalid_string: s.to_owned(),
                });
            }
        })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The nominal order of a chemical bond, independent of aromaticity.
///
/// Aromaticity is tracked separately (see `Bond::aromatic` in
/// [`crate::molecule`]) because, per the reference HOSE semantics, an
/// aromatic flag *supersedes* the nominal order for scoring and symbol
/// emission rather than replacing it as a fourth bond-order value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondOrder {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BondOrder::Single => "single",
            BondOrder::Double => "double",
            BondOrder::Triple => "triple",
        };
        write!(f, "{}", s)
    }
}
