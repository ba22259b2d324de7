//! Promotion: computing a common enclosing ring for two operands and
//! converting values into it.
//!
//! The rule table, in order of preference:
//!
//! 1. Same monomial representation and order: promote the coefficient rings
//!    into their common super-ring ([`Promote`], [`lift_coefficients`]).
//! 2. Differing named variable sets: the common ring is the ring over the
//!    sorted union of the names under the degree-reverse-lexicographic
//!    order ([`union_ring`], [`change_ring`], [`widen_exponents`]).
//! 3. A named ring combined with a numbered ring: the numbered ring becomes
//!    the outer ring and the named ring its coefficient ring
//!    ([`promote_tower`]).
//! 4. A scalar combined with a polynomial: the scalar embeds as a constant
//!    polynomial ([`Polynomial::constant`]).
//!
//! Binary operators require both operands in one ring already; these
//! conversions are the explicit promotion step performed first. Conversion
//! preserves values: a projected monomial keeps every nonzero exponent, and
//! a direction that would lose one fails instead.

use std::collections::BTreeSet;

use num_traits::{FromPrimitive, ToPrimitive, Zero};
use rug::{Integer, Rational};

use crate::coefficient::Coefficient;
use crate::error::{Error, Result};
use crate::monomial::ordering::{DegRevLex, MonomialOrder};
use crate::monomial::{DenseMonomial, Exponent, Monomial, SparseMonomial};
use crate::polynomial::{Polynomial, Term};
use crate::ring::PolyRing;

/// Embedding of a coefficient ring into a larger one, preserving sums and
/// products.
pub trait Promote<Target> {
    fn promote(self) -> Target;
}

impl Promote<i64> for i32 {
    fn promote(self) -> i64 {
        self.into()
    }
}

impl Promote<Integer> for i32 {
    fn promote(self) -> Integer {
        Integer::from(self)
    }
}

impl Promote<Integer> for i64 {
    fn promote(self) -> Integer {
        Integer::from(self)
    }
}

impl Promote<Rational> for i32 {
    fn promote(self) -> Rational {
        Rational::from(self)
    }
}

impl Promote<Rational> for i64 {
    fn promote(self) -> Rational {
        Rational::from(self)
    }
}

impl Promote<Rational> for Integer {
    fn promote(self) -> Rational {
        Rational::from(self)
    }
}

/// Rule 1: per-coefficient promotion into the common super-ring. Monomials
/// are untouched, so the term order carries over.
pub fn lift_coefficients<O, M, C1, C2>(p: Polynomial<O, M, C1>) -> Polynomial<O, M, C2>
where
    O: MonomialOrder,
    M: Monomial,
    C1: Coefficient + Promote<C2>,
    C2: Coefficient,
{
    p.map_coefficients(Promote::promote)
}

/// Rule 2: the common ring of two named rings, over the sorted union of
/// their variable names.
pub fn union_ring<O1, O2, E, C>(
    a: &PolyRing<O1, DenseMonomial<E>, C>,
    b: &PolyRing<O2, DenseMonomial<E>, C>,
) -> PolyRing<DegRevLex, DenseMonomial<E>, C>
where
    O1: MonomialOrder,
    O2: MonomialOrder,
    E: Exponent,
    C: Coefficient,
{
    let names: BTreeSet<&String> = a.names().iter().chain(b.names().iter()).collect();
    PolyRing::from_names(names.into_iter().cloned().collect())
}

/// Projects a polynomial of `src` into `dst`, matching variables by name.
/// Missing target variables read as exponent zero; a source variable with a
/// nonzero exponent and no home in `dst` makes the conversion fail.
pub fn change_ring<O1, O2, E, C>(
    src: &PolyRing<O1, DenseMonomial<E>, C>,
    dst: &PolyRing<O2, DenseMonomial<E>, C>,
    p: &Polynomial<O1, DenseMonomial<E>, C>,
) -> Result<Polynomial<O2, DenseMonomial<E>, C>>
where
    O1: MonomialOrder,
    O2: MonomialOrder,
    E: Exponent,
    C: Coefficient,
{
    let positions: Vec<Option<usize>> = src
        .names()
        .iter()
        .map(|name| dst.names().iter().position(|d| d == name))
        .collect();
    let dst_arity = dst.arity();

    let mut terms = Vec::with_capacity(p.nterms());
    for t in p.terms() {
        let mut exponents = vec![E::zero(); dst_arity];
        for (i, position) in positions.iter().enumerate() {
            let e = t.monomial().exponent(i);
            if e.is_zero() {
                continue;
            }
            match position {
                Some(j) => exponents[*j] = e,
                None => {
                    return Err(Error::IncompatibleVariables(src.names()[i].clone()));
                }
            }
        }
        let monomial = DenseMonomial::construct(|j| exponents[j].clone(), dst_arity);
        terms.push(Term::new(t.coefficient().clone(), monomial));
    }

    Ok(Polynomial::from_unsorted_terms(terms))
}

/// Rule 2, exponent half: rebuilds a polynomial over a wider exponent
/// scalar (or another monomial layout) without changing its order. Picking
/// a narrower target is a programming error.
pub fn widen_exponents<O, M1, M2, C>(p: &Polynomial<O, M1, C>) -> Polynomial<O, M2, C>
where
    O: MonomialOrder,
    M1: Monomial,
    M2: Monomial,
    C: Coefficient,
{
    let terms = p
        .terms()
        .iter()
        .map(|t| {
            let m = t.monomial();
            let monomial = M2::construct(
                |i| {
                    let e = m.exponent(i).to_i64().expect("exponent fits in 64 bits");
                    <M2::Exp as FromPrimitive>::from_i64(e)
                        .expect("exponent fits the wider target type")
                },
                m.num_variables(),
            );
            Term::new(t.coefficient().clone(), monomial)
        })
        .collect();
    Polynomial::from_unsorted_terms(terms)
}

/// Embeds a polynomial as a constant coefficient of an outer ring.
pub fn tower_constant<OT, MT, O, M, C>(
    p: Polynomial<O, M, C>,
) -> Polynomial<OT, MT, Polynomial<O, M, C>>
where
    OT: MonomialOrder,
    MT: Monomial,
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    Polynomial::constant(p)
}

/// Lifts the scalar coefficients of an outer-ring polynomial into an inner
/// polynomial ring.
pub fn tower_lift<OT, MT, O, M, C>(
    q: Polynomial<OT, MT, C>,
) -> Polynomial<OT, MT, Polynomial<O, M, C>>
where
    OT: MonomialOrder,
    MT: Monomial,
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    q.map_coefficients(Polynomial::constant)
}

/// Rule 3: brings a named-ring polynomial and a numbered-ring polynomial
/// into their common tower, with the numbered ring outside.
#[allow(clippy::type_complexity)]
pub fn promote_tower<OT, ET, O, E, C>(
    named: Polynomial<O, DenseMonomial<E>, C>,
    numbered: Polynomial<OT, SparseMonomial<ET>, C>,
) -> (
    Polynomial<OT, SparseMonomial<ET>, Polynomial<O, DenseMonomial<E>, C>>,
    Polynomial<OT, SparseMonomial<ET>, Polynomial<O, DenseMonomial<E>, C>>,
)
where
    OT: MonomialOrder,
    ET: Exponent,
    O: MonomialOrder,
    E: Exponent,
    C: Coefficient,
{
    (tower_constant(named), tower_lift(numbered))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering as CmpOrd;

    use super::*;
    use crate::monomial::ordering::Lex;

    type ZRing = PolyRing<Lex, DenseMonomial<i16>, i64>;
    type ZPoly = Polynomial<Lex, DenseMonomial<i16>, i64>;

    #[test]
    fn scalar_promotions_preserve_value() {
        assert_eq!(Promote::<i64>::promote(7i32), 7i64);
        assert_eq!(Promote::<Integer>::promote(-3i64), Integer::from(-3));
        assert_eq!(
            Promote::<Rational>::promote(Integer::from(9)),
            Rational::from(9)
        );
    }

    #[test]
    fn coefficient_lift_keeps_the_terms() {
        let (_, gens) = ZRing::new(&["x", "y"]).unwrap();
        let [x, y] = <[ZPoly; 2]>::try_from(gens).unwrap();
        let p = x.clone() * x.clone() - y.clone() * 3 + 1;

        let lifted: Polynomial<Lex, DenseMonomial<i16>, Rational> =
            lift_coefficients(p.clone());
        assert_eq!(lifted.nterms(), p.nterms());
        for (a, b) in p.terms().iter().zip(lifted.terms()) {
            assert_eq!(a.monomial(), b.monomial());
            assert_eq!(&Rational::from(*a.coefficient()), b.coefficient());
        }
    }

    #[test]
    fn union_ring_sorts_the_name_union() {
        let (a, _) = ZRing::new(&["x", "z"]).unwrap();
        let (b, _) = ZRing::new(&["y", "z"]).unwrap();
        let joined = union_ring(&a, &b);
        assert_eq!(joined.names(), ["x", "y", "z"]);

        // Nested sets collapse onto the larger one.
        let (big, _) = ZRing::new(&["u", "v", "w"]).unwrap();
        let (small, _) = ZRing::new(&["v"]).unwrap();
        assert_eq!(union_ring(&big, &small).names(), ["u", "v", "w"]);

        // Disjoint sets concatenate in sorted order.
        let (p, _) = ZRing::new(&["b"]).unwrap();
        let (q, _) = ZRing::new(&["a"]).unwrap();
        assert_eq!(union_ring(&p, &q).names(), ["a", "b"]);
    }

    #[test]
    fn conversion_matches_variables_by_name() {
        let (src, gens) = ZRing::new(&["x", "z"]).unwrap();
        let [x, z] = <[ZPoly; 2]>::try_from(gens).unwrap();
        let (other, _) = ZRing::new(&["y", "z"]).unwrap();
        let dst = union_ring(&src, &other);

        let p = x.clone() * x.clone() + z.clone() * 5;
        let converted = change_ring(&src, &dst, &p).unwrap();

        assert_eq!(converted.nterms(), 2);
        let x_pos = dst.names().iter().position(|n| n == "x").unwrap();
        let z_pos = dst.names().iter().position(|n| n == "z").unwrap();
        let y_pos = dst.names().iter().position(|n| n == "y").unwrap();
        for t in converted.terms() {
            assert_eq!(t.monomial().exponent(y_pos as usize), 0);
        }
        let lead = converted.leading_term_with::<Lex>().unwrap();
        assert_eq!(lead.monomial().exponent(x_pos), 2);
        assert_eq!(converted.terms()[0].monomial().exponent(z_pos), 1);

        // The result is sorted under the target ring's order.
        for pair in converted.terms().windows(2) {
            assert_eq!(
                DegRevLex::cmp(pair[0].monomial(), pair[1].monomial()),
                CmpOrd::Less
            );
        }
    }

    #[test]
    fn lossy_conversion_fails() {
        let (src, gens) = ZRing::new(&["x", "y"]).unwrap();
        let [x, y] = <[ZPoly; 2]>::try_from(gens).unwrap();
        let (dst, _) = ZRing::new(&["x"]).unwrap();

        // x alone converts: y never occurs with a nonzero exponent.
        let fine = change_ring(&src, &dst, &(x.clone() + 1)).unwrap();
        assert_eq!(fine.nterms(), 2);

        let lossy = change_ring(&src, &dst, &(x + y));
        assert_eq!(
            lossy,
            Err(Error::IncompatibleVariables("y".to_owned()))
        );
    }

    #[test]
    fn exponent_widening_preserves_the_polynomial() {
        let (_, gens) = ZRing::new(&["x", "y"]).unwrap();
        let [x, y] = <[ZPoly; 2]>::try_from(gens).unwrap();
        let p = x.clone() * x.clone() * y.clone() + y.clone() * 7;

        let wide: Polynomial<Lex, DenseMonomial<i64>, i64> = widen_exponents(&p);
        assert_eq!(wide.nterms(), p.nterms());
        for (a, b) in p.terms().iter().zip(wide.terms()) {
            for i in 0..2 {
                assert_eq!(i64::from(a.monomial().exponent(i)), b.monomial().exponent(i));
            }
        }

        // The sparse layout is reachable the same way.
        let sparse: Polynomial<Lex, SparseMonomial<i16>, i64> = widen_exponents(&p);
        assert_eq!(sparse.nterms(), p.nterms());
    }

    #[test]
    fn tower_promotion_supports_mixed_arithmetic() {
        type Outer = Polynomial<DegRevLex, SparseMonomial<i16>, ZPoly>;

        let (_, gens) = ZRing::new(&["a", "b"]).unwrap();
        let [a, _b] = <[ZPoly; 2]>::try_from(gens).unwrap();
        let numbered = PolyRing::<DegRevLex, SparseMonomial<i16>, i64>::numbered("t");
        let t0 = numbered.generator(0);

        let named_p = a.clone() * a.clone() + 1;
        let numbered_q = t0.clone() * t0.clone() + t0.clone() * 3;

        let (tp, tq): (Outer, Outer) = promote_tower(named_p.clone(), numbered_q);

        // The named polynomial became a constant coefficient.
        assert!(tp.is_constant());
        assert_eq!(tp.leading_coefficient(), Some(&named_p));

        // The lifted numbered polynomial kept its shape, coefficients now
        // living in the inner ring.
        assert_eq!(tq.nterms(), 2);

        let sum = tp.clone() + tq.clone();
        assert_eq!(sum.clone() - tp.clone(), tq);

        // Scalar embedding (rule 4) composes with the tower.
        let five = Outer::constant(ZPoly::constant(5));
        let scaled = tp * five;
        assert_eq!(
            scaled.leading_coefficient(),
            Some(&named_p.scale(&5))
        );
    }
}
