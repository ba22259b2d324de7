//! Polynomials as sorted term sequences.
//!
//! A polynomial owns a vector of terms kept strictly ascending under the
//! ring's monomial order, with unique monomials and no zero coefficients;
//! the zero polynomial is the empty sequence and the leading term is the
//! last element. Every operation re-establishes these invariants before
//! returning.

pub mod content;
pub mod division;
pub mod multiplication;
pub mod power;

use std::cmp::Ordering as CmpOrd;
use std::fmt::Write;
use std::marker::PhantomData;

use itertools::Itertools;
use num_traits::{One, ToPrimitive, Zero};

use crate::coefficient::Coefficient;
use crate::monomial::{ordering::MonomialOrder, Monomial};

/// A monomial paired with its coefficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term<M, C> {
    coefficient: C,
    monomial: M,
}

impl<M, C> Term<M, C> {
    pub fn new(coefficient: C, monomial: M) -> Self {
        Term {
            coefficient,
            monomial,
        }
    }

    pub fn coefficient(&self) -> &C {
        &self.coefficient
    }

    pub fn monomial(&self) -> &M {
        &self.monomial
    }

    pub fn into_parts(self) -> (C, M) {
        (self.coefficient, self.monomial)
    }
}

impl<M: Monomial, C: Coefficient> Term<M, C> {
    fn multiply(&self, other: &Self) -> Self {
        let mut coefficient = self.coefficient.clone();
        coefficient *= &other.coefficient;
        Term {
            coefficient,
            monomial: self.monomial.mul(&other.monomial),
        }
    }
}

/// A polynomial over the ring identified by the order `O`, the monomial
/// representation `M` and the coefficient ring `C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<O, M, C> {
    // Strictly ascending under O; the leading term is last.
    terms: Vec<Term<M, C>>,
    ordering: PhantomData<O>,
}

impl<O, M, C> Default for Polynomial<O, M, C> {
    fn default() -> Self {
        Polynomial {
            terms: Vec::new(),
            ordering: PhantomData,
        }
    }
}

impl<O, M, C> Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    /// The constant polynomial, which is zero exactly when `value` is.
    pub fn constant(value: C) -> Self {
        if value.is_zero() {
            return Self::zero();
        }
        Polynomial {
            terms: vec![Term {
                coefficient: value,
                monomial: M::one(),
            }],
            ordering: PhantomData,
        }
    }

    /// The single-term polynomial `coefficient · monomial`.
    pub fn from_monomial(monomial: M, coefficient: C) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }
        Polynomial {
            terms: vec![Term {
                coefficient,
                monomial,
            }],
            ordering: PhantomData,
        }
    }

    /// Builds a polynomial from terms the caller asserts to be strictly
    /// ascending under `O`, unique and nonzero. The invariants are checked;
    /// a violation is a programming error and aborts.
    pub fn from_sorted_terms(terms: Vec<Term<M, C>>) -> Self {
        for pair in terms.windows(2) {
            assert!(
                O::cmp(&pair[0].monomial, &pair[1].monomial) == CmpOrd::Less,
                "term sequence is not strictly ascending under the ring order"
            );
        }
        assert!(
            terms.iter().all(|t| !t.coefficient.is_zero()),
            "term sequence contains a zero coefficient"
        );
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }

    /// Builds a polynomial from arbitrary summands: sorts under `O`,
    /// coalesces equal monomials and drops cancelled coefficients.
    pub fn from_unsorted_terms(mut terms: Vec<Term<M, C>>) -> Self {
        terms.sort_by(|a, b| O::cmp(&a.monomial, &b.monomial));
        let terms = terms
            .into_iter()
            .coalesce(|mut a, b| {
                if a.monomial == b.monomial {
                    a.coefficient += b.coefficient;
                    Ok(a)
                } else {
                    Err((a, b))
                }
            })
            .filter(|t| !t.coefficient.is_zero())
            .collect();
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }

    pub fn terms(&self) -> &[Term<M, C>] {
        &self.terms
    }

    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    pub fn is_constant(&self) -> bool {
        match self.terms.as_slice() {
            [] => true,
            [t] => t.monomial.is_one(),
            _ => false,
        }
    }

    /// The greatest term under the ring's own order.
    pub fn leading_term(&self) -> Option<&Term<M, C>> {
        self.terms.last()
    }

    pub fn leading_monomial(&self) -> Option<&M> {
        self.terms.last().map(|t| &t.monomial)
    }

    pub fn leading_coefficient(&self) -> Option<&C> {
        self.terms.last().map(|t| &t.coefficient)
    }

    /// The polynomial minus its leading term.
    pub fn tail(&self) -> Self {
        let mut terms = self.terms.clone();
        terms.pop();
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }

    /// The terms re-sorted ascending under an alternate order.
    pub fn terms_with<O2: MonomialOrder>(&self) -> Vec<Term<M, C>> {
        let mut terms = self.terms.clone();
        terms.sort_by(|a, b| O2::cmp(&a.monomial, &b.monomial));
        terms
    }

    /// The greatest term under an alternate order.
    pub fn leading_term_with<O2: MonomialOrder>(&self) -> Option<&Term<M, C>> {
        self.terms
            .iter()
            .max_by(|a, b| O2::cmp(&a.monomial, &b.monomial))
    }

    /// Applies `f` to every coefficient. Monomials are untouched, so the
    /// term sequence stays sorted; images that vanish are dropped.
    pub fn map_coefficients<C2: Coefficient>(
        self,
        mut f: impl FnMut(C) -> C2,
    ) -> Polynomial<O, M, C2> {
        let terms = self
            .terms
            .into_iter()
            .filter_map(|t| {
                let coefficient = f(t.coefficient);
                (!coefficient.is_zero()).then(|| Term {
                    coefficient,
                    monomial: t.monomial,
                })
            })
            .collect();
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&self, factor: &C) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|t| {
                let mut coefficient = t.coefficient.clone();
                coefficient *= factor;
                (!coefficient.is_zero()).then(|| Term {
                    coefficient,
                    monomial: t.monomial.clone(),
                })
            })
            .collect();
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }

    /// Multiplies by a single term. Multiplicativity of the order keeps the
    /// sequence sorted, so no re-sort happens; coefficients that vanish in
    /// rings with zero divisors are dropped.
    pub fn mul_term(&self, factor: &Term<M, C>) -> Self {
        if factor.coefficient.is_zero() {
            return Self::zero();
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|t| {
                let product = t.multiply(factor);
                (!product.coefficient.is_zero()).then_some(product)
            })
            .collect();
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }

    /// Partial derivative with respect to the variable at `var`.
    pub fn derivative(&self, var: usize) -> Self {
        let terms: Vec<_> = self
            .terms
            .iter()
            .filter_map(|t| {
                let e = t.monomial.exponent(var);
                if e.is_zero() {
                    return None;
                }
                let steps = e.to_usize().expect("stored exponents are non-negative");
                let coefficient = t.coefficient.mul_usize(steps);
                if coefficient.is_zero() {
                    return None;
                }
                let monomial = M::construct(
                    |i| {
                        let mut exp = t.monomial.exponent(i);
                        if i == var {
                            exp -= &<M::Exp as One>::one();
                        }
                        exp
                    },
                    t.monomial.num_variables(),
                );
                Some(Term {
                    coefficient,
                    monomial,
                })
            })
            .collect();
        // Most orders survive a single-variable step down, but not all, so
        // the result is re-sorted unconditionally.
        Self::from_unsorted_terms(terms)
    }
}

impl<O, M, C> Zero for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<O, M, C> One for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    fn one() -> Self {
        Self::constant(C::one())
    }
}

impl<O, M, C> std::ops::Add for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + rhs.terms.len());
        crate::ordered_ops::sum(
            self.terms.into_iter(),
            rhs.terms.into_iter(),
            |a, b| O::cmp(&a.monomial, &b.monomial),
            |mut a, b| {
                a.coefficient += b.coefficient;
                (!a.coefficient.is_zero()).then_some(a)
            },
            &mut terms,
        );
        Polynomial {
            terms,
            ordering: PhantomData,
        }
    }
}

impl<O, M, C> std::ops::Neg for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn neg(mut self) -> Self {
        for term in self.terms.iter_mut() {
            let value = std::mem::replace(&mut term.coefficient, C::zero());
            term.coefficient -= value;
        }
        self
    }
}

impl<O, M, C> std::ops::Sub for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<O, M, C> std::ops::AddAssign for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::take(self);
        *self = lhs + rhs;
    }
}

impl<O, M, C> std::ops::SubAssign for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    fn sub_assign(&mut self, rhs: Self) {
        let lhs = std::mem::take(self);
        *self = lhs - rhs;
    }
}

impl<O, M, C> std::ops::Add<C> for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn add(mut self, rhs: C) -> Self {
        if rhs.is_zero() {
            return self;
        }
        // The constant term, when present, is the smallest and sits first.
        match self.terms.first_mut() {
            Some(t) if t.monomial.is_one() => {
                t.coefficient += rhs;
                if t.coefficient.is_zero() {
                    self.terms.remove(0);
                }
            }
            _ => self.terms.insert(
                0,
                Term {
                    coefficient: rhs,
                    monomial: M::one(),
                },
            ),
        }
        self
    }
}

impl<O, M, C> std::ops::Sub<C> for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn sub(self, rhs: C) -> Self {
        let mut negated = C::zero();
        negated -= rhs;
        self + negated
    }
}

impl<M, C> std::fmt::Display for Term<M, C>
where
    M: Monomial,
    C: Coefficient + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.coefficient.is_one() || self.monomial.is_one() {
            write!(f, "{}", self.coefficient)?;
        }
        for i in 0..self.monomial.num_variables() {
            let e = self.monomial.exponent(i);
            if e.is_zero() {
                continue;
            }
            write!(f, "x{}", i)?;
            if !e.is_one() {
                write!(f, "^{}", e)?;
            }
        }
        Ok(())
    }
}

impl<O, M, C> std::fmt::Display for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Printed leading term first.
        let mut iter = self.terms.iter().rev();
        match iter.next() {
            None => {
                f.write_char('0')?;
                return Ok(());
            }
            Some(t) => {
                write!(f, "{}", t)?;
            }
        }

        for t in iter {
            write!(f, " + {}", t)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::{ordering::DegRevLex, DenseMonomial};

    pub type SmallPoly = Polynomial<DegRevLex, DenseMonomial<i16>, i32>;

    pub fn variables<const N: usize>() -> [SmallPoly; N] {
        std::array::from_fn(|j| {
            Polynomial::from_monomial(DenseMonomial::variable(j, N), 1)
        })
    }

    pub fn assert_invariants(p: &SmallPoly) {
        for pair in p.terms().windows(2) {
            assert_eq!(
                DegRevLex::cmp(pair[0].monomial(), pair[1].monomial()),
                CmpOrd::Less,
                "terms out of order in {}",
                p
            );
        }
        assert!(
            p.terms().iter().all(|t| !t.coefficient().is_zero()),
            "zero coefficient survived in {}",
            p
        );
    }

    #[test]
    fn addition_and_subtraction_ordering() {
        let [x, y, z] = variables::<3>();
        let a = x.clone() + y.clone() + z.clone() + 42;
        let b = y.clone() + 42 + z + x;

        assert_eq!(a, b);

        let c = a.clone() + b;
        assert_invariants(&c);
        assert_eq!(c.nterms(), 4);

        // The constant term comes first, the variables after it.
        assert_eq!(c.terms()[0].coefficient(), &84);
        assert!(c.terms()[0].monomial().is_one());
        for t in &c.terms()[1..] {
            assert_eq!(t.coefficient(), &2);
            assert_eq!(t.monomial().total_degree(), 1);
        }

        // The inverse operation must yield the original polynomial.
        let d = c - a.clone();
        assert_eq!(a, d);
    }

    #[test]
    fn sum_is_commutative_and_associative() {
        let [x, y, z] = variables::<3>();
        let p = x.clone() * x.clone() + y.clone() - 7;
        let q = y.clone() * z.clone() + x.clone();
        let r = z.clone() * z.clone() - y.clone();

        assert_eq!(p.clone() + q.clone(), q.clone() + p.clone());
        assert_eq!(
            (p.clone() + q.clone()) + r.clone(),
            p.clone() + (q + r)
        );
        assert_eq!(p.clone() + SmallPoly::zero(), p);
    }

    #[test]
    fn subtraction_cancels_completely() {
        let [x, y] = variables::<2>();
        let p = x.clone() * y.clone() + x * 3 - y + 1;
        let difference = p.clone() - p;
        assert!(difference.is_zero());
        assert_eq!(difference.nterms(), 0);
    }

    #[test]
    fn constant_addition_folds_into_the_constant_term() {
        let [x] = variables::<1>();
        let p = x.clone() + 5;
        let q = p.clone() - 5;
        assert_eq!(q, x);

        let r = SmallPoly::zero() + 3;
        assert!(r.is_constant());
        assert!((r - 3).is_zero());
    }

    #[test]
    fn leading_and_tail_accessors() {
        let [x, y] = variables::<2>();
        let p = x.clone() * x.clone() + y.clone() + 1;
        let lead = p.leading_term().unwrap();
        assert_eq!(lead.monomial(), x.clone().mul_term(&x.terms()[0]).terms()[0].monomial());
        assert_eq!(p.tail(), y + 1);
        assert!(SmallPoly::zero().leading_term().is_none());
        assert!(SmallPoly::zero().tail().is_zero());
    }

    #[test]
    fn alternate_order_leading_term() {
        use crate::monomial::ordering::Lex;

        let [x, y] = variables::<2>();
        // Under degrevlex y^3 leads; under lex x leads.
        let p = x.clone() + y.clone() * y.clone() * y.clone();
        assert_eq!(
            p.leading_monomial().unwrap().total_degree(),
            3
        );
        let lex_lead = p.leading_term_with::<Lex>().unwrap();
        assert_eq!(lex_lead.monomial().exponent(0), 1);

        let relisted = p.terms_with::<Lex>();
        assert_eq!(relisted.len(), 2);
        assert_eq!(relisted.last().unwrap().monomial().exponent(0), 1);
    }

    #[test]
    fn derivative_satisfies_the_product_rule() {
        let [x, y] = variables::<2>();
        let f = x.clone() * x.clone() * y.clone() + x.clone() * 3 - y.clone();
        let g = x.clone() * y.clone() + y.clone() * y.clone() + 1;

        for var in 0..2 {
            let left = (f.clone() * g.clone()).derivative(var);
            let right = f.derivative(var) * g.clone() + f.clone() * g.derivative(var);
            assert_eq!(left, right);
            assert_invariants(&left);
        }

        // d/dx of a polynomial without x vanishes.
        assert!(y.derivative(0).is_zero());
    }

    #[test]
    fn map_coefficients_drops_vanishing_images() {
        let [x, y] = variables::<2>();
        let p = x.clone() * 4 + y.clone() * 3 + 2;
        let reduced = p.map_coefficients(|c| c % 2);
        assert_eq!(reduced, y);
    }

    #[test]
    fn unsorted_construction_coalesces() {
        let [x, y] = variables::<2>();
        let m = |p: &SmallPoly| p.terms()[0].clone();
        let terms = vec![m(&x), m(&y), m(&x), m(&y), m(&x)];
        let p = SmallPoly::from_unsorted_terms(terms);
        assert_eq!(p, x.scale(&3) + y.scale(&2));
        assert_invariants(&p);
    }

    #[test]
    #[should_panic(expected = "not strictly ascending")]
    fn sorted_construction_rejects_disorder() {
        let [x, y] = variables::<2>();
        let terms = vec![x.terms()[0].clone(), y.terms()[0].clone()];
        // x > y under degrevlex, so this sequence is descending.
        let _ = SmallPoly::from_sorted_terms(terms);
    }

    #[test]
    fn display_prints_leading_first() {
        let [x, y] = variables::<2>();
        let p = x.clone() * x.clone() + y.clone() * 2 + 1;
        assert_eq!(p.to_string(), "x0^2 + 2x1 + 1");
        assert_eq!(SmallPoly::zero().to_string(), "0");
    }
}
