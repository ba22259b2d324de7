//! Coefficient-level operations: content, primitive part and explicit
//! scalar division.

use std::marker::PhantomData;

use num_traits::Zero;
use rug::{Complete, Integer, Rational};

use super::{Polynomial, Term};
use crate::coefficient::{Coefficient, GcdCoefficient};
use crate::error::{Error, Result};
use crate::monomial::{ordering::MonomialOrder, Monomial};

impl<O, M, C> Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    /// Divides every coefficient by `divisor`, failing if any coefficient
    /// does not divide exactly.
    pub fn div_coefficients_exact(&self, divisor: &C) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut terms = Vec::with_capacity(self.terms.len());
        for t in &self.terms {
            let coefficient = t
                .coefficient
                .try_divide(divisor)
                .ok_or(Error::NotDivisible)?;
            if !coefficient.is_zero() {
                terms.push(Term {
                    coefficient,
                    monomial: t.monomial.clone(),
                });
            }
        }
        Ok(Polynomial {
            terms,
            ordering: PhantomData,
        })
    }

    /// Divides every coefficient by `divisor`, silently dropping the terms
    /// whose coefficient does not divide exactly. The loss is the point:
    /// callers opt in by reaching for this name instead of
    /// [`div_coefficients_exact`](Self::div_coefficients_exact).
    pub fn div_coefficients_dropping(&self, divisor: &C) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|t| {
                let coefficient = t.coefficient.try_divide(divisor)?;
                (!coefficient.is_zero()).then(|| Term {
                    coefficient,
                    monomial: t.monomial.clone(),
                })
            })
            .collect();
        Ok(Polynomial {
            terms,
            ordering: PhantomData,
        })
    }
}

impl<O, M, C> Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: GcdCoefficient,
{
    /// The gcd of all coefficients; zero for the zero polynomial.
    pub fn content(&self) -> C {
        self.terms
            .iter()
            .fold(C::zero(), |acc, t| acc.gcd(&t.coefficient))
    }

    /// `self` divided by its content.
    pub fn primitive_part(&self) -> Self {
        let content = self.content();
        if content.is_zero() {
            return Self::zero();
        }
        self.div_coefficients_exact(&content)
            .expect("the content divides every coefficient")
    }
}

impl<O, M> Polynomial<O, M, Rational>
where
    O: MonomialOrder,
    M: Monomial,
{
    /// Clears denominators: returns `(integral, denominator)` with
    /// `denominator · self = integral` and `denominator` the least common
    /// multiple of the coefficient denominators.
    pub fn integral_fraction(&self) -> (Polynomial<O, M, Integer>, Integer) {
        let mut denominator = Integer::from(1);
        for t in &self.terms {
            denominator = denominator.lcm(t.coefficient.denom());
        }
        let terms = self
            .terms
            .iter()
            .map(|t| {
                let scaled = (&t.coefficient * &denominator).complete();
                debug_assert!(scaled.is_integer());
                Term {
                    coefficient: scaled.into_numer_denom().0,
                    monomial: t.monomial.clone(),
                }
            })
            .collect();
        (
            Polynomial {
                terms,
                ordering: PhantomData,
            },
            denominator,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{variables, SmallPoly};
    use super::*;
    use crate::monomial::ordering::DegRevLex;
    use crate::monomial::DenseMonomial;

    #[test]
    fn content_is_the_coefficient_gcd() {
        let [x, y] = variables::<2>();
        let p = x.clone() * 6 + y.clone() * 10 - 4;
        assert_eq!(p.content(), 2);
        assert_eq!(SmallPoly::zero().content(), 0);
        assert_eq!(SmallPoly::constant(-7).content(), 7);
    }

    #[test]
    fn primitive_part_strips_the_content() {
        let [x, y] = variables::<2>();
        let p = x.clone() * 6 + y.clone() * 10 - 4;
        let primitive = p.primitive_part();
        assert_eq!(primitive, x * 3 + y * 5 - 2);
        assert_eq!(primitive.content(), 1);
        assert!(SmallPoly::zero().primitive_part().is_zero());
    }

    #[test]
    fn exact_scalar_division() {
        let [x] = variables::<1>();
        let p = x.clone() * 6 + 4;
        assert_eq!(p.div_coefficients_exact(&2).unwrap(), x.clone() * 3 + 2);
        assert_eq!(p.div_coefficients_exact(&4), Err(Error::NotDivisible));
        assert_eq!(p.div_coefficients_exact(&0), Err(Error::DivisionByZero));
    }

    #[test]
    fn dropping_scalar_division_loses_terms_by_request() {
        let [x] = variables::<1>();
        let p = x.clone() * 2 + 3;
        assert_eq!(p.div_coefficients_dropping(&2).unwrap(), x);
        assert_eq!(p.div_coefficients_dropping(&0), Err(Error::DivisionByZero));
    }

    #[test]
    fn integral_fraction_clears_denominators() {
        type QPoly = Polynomial<DegRevLex, DenseMonomial<i16>, Rational>;

        let x: QPoly =
            Polynomial::from_monomial(DenseMonomial::variable(0, 2), Rational::from(1));
        let y: QPoly =
            Polynomial::from_monomial(DenseMonomial::variable(1, 2), Rational::from(1));

        let p = x.scale(&Rational::from((3, 4))) + y.scale(&Rational::from((5, 6)));
        let (integral, denominator) = p.integral_fraction();

        assert_eq!(denominator, Integer::from(12));
        let relifted = integral.map_coefficients(Rational::from);
        assert_eq!(relifted, p.scale(&Rational::from(&denominator)));

        let (zero_integral, one) = QPoly::zero().integral_fraction();
        assert!(zero_integral.is_zero());
        assert_eq!(one, Integer::from(1));
    }
}
