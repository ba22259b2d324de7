//! Polynomial long division with respect to one divisor or a family.
//!
//! The single-divisor operations perform one reduction step; the family
//! operations iterate reduction steps, restarting at the first divisor after
//! every success, until nothing reduces. Each returned factor vector
//! satisfies `f = Σ factors[j] · divisors[j] + remainder`.

use std::marker::PhantomData;

use num_traits::Zero;

use super::{Polynomial, Term};
use crate::coefficient::Coefficient;
use crate::error::{Error, Result};
use crate::monomial::{ordering::MonomialOrder, Monomial};

/// Which terms of the dividend a reduction step may eliminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Only the leading term.
    Lead,
    /// The greatest term divisible by the divisor's leading term.
    Full,
}

impl<O, M, C> Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    /// One reduction step of `self` by `divisor`. Returns the elimination
    /// factor and the reduced polynomial, or `None` when nothing reduces.
    ///
    /// A term only reduces if its monomial is divisible by the divisor's
    /// leading monomial *and* its coefficient divides exactly; a term
    /// failing the coefficient test is skipped like any other.
    fn division_step(&self, divisor: &Self, mode: Mode) -> Result<Option<(Term<M, C>, Self)>> {
        let lead = divisor.terms.last().ok_or(Error::DivisionByZero)?;

        let len = self.terms.len();
        let first = match mode {
            Mode::Full => 0,
            Mode::Lead => len.saturating_sub(1),
        };

        for k in (first..len).rev() {
            let t = &self.terms[k];
            let monomial = match t.monomial.try_divide(&lead.monomial) {
                Some(m) => m,
                None => continue,
            };
            let coefficient = match t.coefficient.try_divide(&lead.coefficient) {
                Some(c) => c,
                None => continue,
            };
            let factor = Term {
                coefficient,
                monomial,
            };

            // self - factor·divisor: the term at k is eliminated, and the
            // divisor's shifted tail lands strictly below it, so it merges
            // into the smaller part while everything above k is untouched.
            let negated_tail = divisor.terms[..divisor.terms.len() - 1]
                .iter()
                .filter_map(|d| {
                    let mut product = factor.multiply(d);
                    if product.coefficient.is_zero() {
                        return None;
                    }
                    let value = std::mem::replace(&mut product.coefficient, C::zero());
                    product.coefficient -= value;
                    Some(product)
                });

            let mut terms = Vec::with_capacity(len - 1 + divisor.terms.len() - 1);
            crate::ordered_ops::sum(
                self.terms[..k].iter().cloned(),
                negated_tail,
                |a, b| O::cmp(&a.monomial, &b.monomial),
                |mut a, b| {
                    a.coefficient += b.coefficient;
                    (!a.coefficient.is_zero()).then_some(a)
                },
                &mut terms,
            );
            terms.extend_from_slice(&self.terms[k + 1..]);

            let reduced = Polynomial {
                terms,
                ordering: PhantomData,
            };
            return Ok(Some((factor, reduced)));
        }

        Ok(None)
    }

    fn single_div_rem(&self, divisor: &Self, mode: Mode) -> Result<(Self, Self)> {
        match self.division_step(divisor, mode)? {
            Some((factor, reduced)) => Ok((
                Polynomial {
                    terms: vec![factor],
                    ordering: PhantomData,
                },
                reduced,
            )),
            None => Ok((Self::zero(), self.clone())),
        }
    }

    /// Quotient and remainder of one reduction step against the divisor's
    /// leading term: if it divides the leading term of `self`, the quotient
    /// is that single factor and the remainder is `self - factor · divisor`;
    /// otherwise the quotient is zero and the remainder is `self`.
    pub fn lead_div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.single_div_rem(divisor, Mode::Lead)
    }

    /// Quotient and remainder of one reduction step against the greatest
    /// reducible term of `self`, scanning down from the leading term.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.single_div_rem(divisor, Mode::Full)
    }

    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        Ok(self.div_rem(divisor)?.1)
    }

    pub fn div(&self, divisor: &Self) -> Result<Self> {
        Ok(self.div_rem(divisor)?.0)
    }

    pub fn lead_rem(&self, divisor: &Self) -> Result<Self> {
        Ok(self.lead_div_rem(divisor)?.1)
    }

    pub fn lead_div(&self, divisor: &Self) -> Result<Self> {
        Ok(self.lead_div_rem(divisor)?.0)
    }

    fn reduce_by(&self, divisors: &[Self], mode: Mode) -> Result<(Vec<Self>, Self)> {
        let mut factors = vec![Self::zero(); divisors.len()];
        let mut reduced = self.clone();

        let mut i = 0;
        while i < divisors.len() && !reduced.is_zero() {
            if divisors[i].is_zero() {
                i += 1;
                continue;
            }
            match reduced.division_step(&divisors[i], mode)? {
                Some((factor, next)) => {
                    factors[i] += Polynomial {
                        terms: vec![factor],
                        ordering: PhantomData,
                    };
                    reduced = next;
                    // Restart at the first divisor: on exit no divisor's
                    // leading term may divide the remainder, and the term
                    // multiset shrinks under the order, so this terminates.
                    i = 0;
                }
                None => i += 1,
            }
        }

        Ok((factors, reduced))
    }

    /// Repeated reduction of `self` by a family of divisors, where each step
    /// may eliminate any reducible term. On return, no monomial of the
    /// remainder is divisible (with dividing coefficient) by the leading
    /// term of any nonzero divisor, and
    /// `self = Σ factors[j] · divisors[j] + remainder`.
    pub fn div_rem_multi(&self, divisors: &[Self]) -> Result<(Vec<Self>, Self)> {
        self.reduce_by(divisors, Mode::Full)
    }

    /// Repeated reduction of the leading term only. On return the leading
    /// term of the remainder is not divisible by any divisor's leading term;
    /// smaller terms are left alone.
    pub fn lead_div_rem_multi(&self, divisors: &[Self]) -> Result<(Vec<Self>, Self)> {
        self.reduce_by(divisors, Mode::Lead)
    }

    pub fn rem_multi(&self, divisors: &[Self]) -> Result<Self> {
        Ok(self.div_rem_multi(divisors)?.1)
    }

    pub fn div_multi(&self, divisors: &[Self]) -> Result<Vec<Self>> {
        Ok(self.div_rem_multi(divisors)?.0)
    }

    pub fn lead_rem_multi(&self, divisors: &[Self]) -> Result<Self> {
        Ok(self.lead_div_rem_multi(divisors)?.1)
    }

    pub fn lead_div_multi(&self, divisors: &[Self]) -> Result<Vec<Self>> {
        Ok(self.lead_div_rem_multi(divisors)?.0)
    }
}
