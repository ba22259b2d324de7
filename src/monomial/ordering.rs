//! Monomial orders: strict total orders compatible with multiplication.

use std::cmp::Ordering as CmpOrd;

use super::Monomial;

/// A rule comparing two monomials.
///
/// Implementations must be *admissible*: the identity monomial precedes
/// every other monomial, and `a < b` implies `a·c < b·c` for any `c`. The
/// built-in rules satisfy this; user-defined rules must as well, since the
/// arithmetic kernels rely on it to keep term sequences sorted without
/// re-sorting.
pub trait MonomialOrder: core::fmt::Debug + Clone + Eq {
    fn cmp<M: Monomial>(a: &M, b: &M) -> CmpOrd;
}

/// Lexicographic: ascending variable index, first differing exponent
/// decides, the higher exponent is the greater monomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lex;

impl MonomialOrder for Lex {
    fn cmp<M: Monomial>(a: &M, b: &M) -> CmpOrd {
        a.cmp_lex(b)
    }
}

/// Total degree first, ties broken lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegLex;

impl MonomialOrder for DegLex {
    fn cmp<M: Monomial>(a: &M, b: &M) -> CmpOrd {
        a.cmp_deg(b).then_with(|| a.cmp_lex(b))
    }
}

/// Total degree first, ties broken reverse-lexicographically: exponents are
/// compared from the highest variable index down, and the monomial with the
/// smaller exponent at the first difference is the greater one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegRevLex;

impl MonomialOrder for DegRevLex {
    fn cmp<M: Monomial>(a: &M, b: &M) -> CmpOrd {
        a.cmp_deg(b).then_with(|| a.cmp_revlex(b))
    }
}
