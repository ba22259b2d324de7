//! Exponentiation by multinomial expansion.
//!
//! `p^n` enumerates every composition `(i_1, …, i_k)` of `n` over the `k`
//! terms of `p`, contributing `multinomial(n; i_1, …, i_k) · Π t_j^{i_j}`.
//! The number of summands is `C(n + k - 1, k - 1)`, computed up front so the
//! buffer is allocated exactly once; multinomials are computed in
//! arbitrary-precision integers and injected into the coefficient ring,
//! which fails cleanly when the ring is too narrow.

use num_traits::{One, Zero};
use rug::{Complete, Integer};

use super::{Polynomial, Term};
use crate::coefficient::Coefficient;
use crate::error::{Error, Result};
use crate::monomial::{ordering::MonomialOrder, Monomial};

impl<O, M, C> Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    /// `self` raised to a non-negative integer power.
    pub fn pow(&self, exponent: usize) -> Result<Self> {
        if exponent == 0 {
            return Ok(Self::one());
        }
        if exponent == 1 {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let k = self.terms.len();
        let n = u32::try_from(exponent).map_err(|_| Error::CoefficientOverflow)?;

        let summands = Integer::from(exponent + k - 1).binomial((k - 1) as u32);
        let capacity = summands.to_usize().ok_or(Error::CoefficientOverflow)?;
        let mut terms = Vec::with_capacity(capacity);

        let n_factorial = Integer::factorial(n).complete();

        // Odometer enumeration of the compositions of `exponent` into k
        // non-negative parts, starting from (n, 0, …, 0).
        let mut composition = vec![0usize; k];
        composition[0] = exponent;

        loop {
            let mut denominator = Integer::from(1);
            for &part in &composition {
                if part > 1 {
                    denominator *= Integer::factorial(part as u32).complete();
                }
            }
            let multinomial = n_factorial.clone() / denominator;

            let mut coefficient =
                C::try_from_integer(&multinomial).ok_or(Error::CoefficientOverflow)?;
            let mut monomial = M::one();
            for (t, &part) in self.terms.iter().zip(&composition) {
                if part == 0 {
                    continue;
                }
                let power = num_traits::pow(t.coefficient.clone(), part);
                coefficient *= &power;
                monomial = monomial.mul(&t.monomial.pow(part));
            }
            if !coefficient.is_zero() {
                terms.push(Term {
                    coefficient,
                    monomial,
                });
            }

            if composition[k - 1] == exponent {
                break;
            }
            let i = composition[..k - 1]
                .iter()
                .position(|&part| part != 0)
                .expect("odometer has a nonzero digit before the last");
            let moved = composition[i];
            composition[i] = 0;
            composition[0] = moved - 1;
            composition[i + 1] += 1;
        }

        debug_assert!(terms.len() <= capacity);
        Ok(Self::from_unsorted_terms(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{assert_invariants, variables, SmallPoly};
    use super::*;

    #[test]
    fn trivial_exponents() {
        let [x, y] = variables::<2>();
        let p = x.clone() * y.clone() - 1;

        assert_eq!(p.pow(0).unwrap(), SmallPoly::one());
        assert_eq!(p.pow(1).unwrap(), p);
        assert!(SmallPoly::zero().pow(7).unwrap().is_zero());
        assert_eq!(SmallPoly::zero().pow(0).unwrap(), SmallPoly::one());
    }

    #[test]
    fn binomial_cube() {
        let [x, y] = variables::<2>();
        let p = (x.clone() + y.clone()).pow(3).unwrap();

        assert_eq!(p.nterms(), 4);
        assert_invariants(&p);

        let expected = x.clone() * x.clone() * x.clone()
            + x.clone() * x.clone() * y.clone() * 3
            + x.clone() * y.clone() * y.clone() * 3
            + y.clone() * y.clone() * y.clone();
        assert_eq!(p, expected);
    }

    #[test]
    fn power_law_of_exponents() {
        let [x, y] = variables::<2>();
        let p = x.clone() * y.clone() + x.clone() - 2;

        let combined = p.pow(5).unwrap();
        let split = p.pow(2).unwrap() * p.pow(3).unwrap();
        assert_eq!(combined, split);
        assert_invariants(&combined);
    }

    #[test]
    fn repeated_multiplication_agrees() {
        let [x, y, z] = variables::<3>();
        let p = x.clone() + y.clone() * z.clone() - z.clone() * 3;

        let mut by_products = SmallPoly::one();
        for _ in 0..4 {
            by_products = by_products * p.clone();
        }
        assert_eq!(p.pow(4).unwrap(), by_products);
    }

    #[test]
    fn collapsing_terms_coalesce() {
        let [x] = variables::<1>();
        // (x + 1)^2: the two mixed compositions collapse onto the monomial x.
        let p = (x.clone() + 1).pow(2).unwrap();
        assert_eq!(p, x.clone() * x.clone() + x.clone() * 2 + 1);
    }

    #[test]
    fn narrow_coefficient_ring_overflows() {
        let [x] = variables::<1>();
        // Central binomial coefficients of (x + 1)^40 exceed i32.
        let result = (x + 1).pow(40);
        assert_eq!(result, Err(Error::CoefficientOverflow));
    }

    #[test]
    fn multinomial_signs_and_cancellation() {
        let [x, y] = variables::<2>();
        let p = (x.clone() - y.clone()).pow(2).unwrap();
        assert_eq!(
            p,
            x.clone() * x.clone() - x.clone() * y.clone() * 2 + y.clone() * y.clone()
        );

        // (x - y)(x + y) squared via pow matches the product of squares.
        let q = ((x.clone() - y.clone()) * (x.clone() + y.clone())).pow(2).unwrap();
        assert_eq!(
            q,
            (x.clone() - y.clone()).pow(2).unwrap() * (x + y).pow(2).unwrap()
        );
    }
}
