//! Sparse monomial representation: only variables with a nonzero exponent
//! are stored, so the variable set is unbounded.

use std::cmp::Ordering as CmpOrd;

use itertools::{EitherOrBoth, Itertools};
use num_traits::{One, Zero};

use super::{add_exponents, DenseMonomial, Exponent, Monomial};
use crate::error::{Error, Result};
use crate::ordered_ops;

/// One variable and its positive exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VariablePower<E> {
    index: usize,
    power: E,
}

/// Exponent container keyed by variable index, sorted ascending.
///
/// Zero exponents are never stored, so the derived equality is exponent-wise
/// equality. Indices beyond the stored maximum read as exponent zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMonomial<E> {
    product: Vec<VariablePower<E>>,
    total_degree: E,
}

impl<E: Exponent> SparseMonomial<E> {
    /// The monomial consisting of the single variable `var`.
    pub fn variable(var: usize) -> Self {
        Self {
            product: vec![VariablePower {
                index: var,
                power: E::one(),
            }],
            total_degree: E::one(),
        }
    }

    /// The unbounded sequence of single-variable monomials, lazily produced.
    pub fn generators() -> impl Iterator<Item = Self> {
        (0..).map(Self::variable)
    }

    /// Lossless projection onto a dense monomial of arity `nvars`. Fails if
    /// any stored exponent lies at an index outside the dense arity.
    pub fn to_dense(&self, nvars: usize) -> Result<DenseMonomial<E>> {
        if let Some(last) = self.product.last() {
            if last.index >= nvars {
                return Err(Error::IncompatibleVariables(format!("x{}", last.index)));
            }
        }
        Ok(DenseMonomial::construct(|i| self.exponent(i), nvars))
    }
}

impl<E: Exponent> Monomial for SparseMonomial<E> {
    type Exp = E;

    fn exponent(&self, var: usize) -> E {
        match self.product.binary_search_by(|v| v.index.cmp(&var)) {
            Ok(pos) => self.product[pos].power.clone(),
            Err(_) => E::zero(),
        }
    }

    fn num_variables(&self) -> usize {
        self.product.last().map(|v| v.index + 1).unwrap_or(0)
    }

    fn construct(mut exponents: impl FnMut(usize) -> E, nvars: usize) -> Self {
        let mut total_degree = E::zero();
        let product = (0..nvars)
            .filter_map(|index| {
                let power = exponents(index);
                if power.is_zero() {
                    None
                } else {
                    total_degree = add_exponents(&total_degree, &power);
                    Some(VariablePower { index, power })
                }
            })
            .collect();
        Self {
            product,
            total_degree,
        }
    }

    fn total_degree(&self) -> E {
        self.total_degree.clone()
    }

    fn is_one(&self) -> bool {
        self.product.is_empty()
    }

    fn mul(&self, other: &Self) -> Self {
        let mut product = Vec::with_capacity(self.product.len() + other.product.len());
        ordered_ops::sum(
            self.product.iter().cloned(),
            other.product.iter().cloned(),
            |a, b| a.index.cmp(&b.index),
            |mut a, b| {
                a.power = add_exponents(&a.power, &b.power);
                Some(a)
            },
            &mut product,
        );
        let total_degree = add_exponents(&self.total_degree, &other.total_degree);
        Self {
            product,
            total_degree,
        }
    }

    fn lcm(&self, other: &Self) -> Self {
        let mut product = Vec::with_capacity(self.product.len().max(other.product.len()));
        ordered_ops::sum(
            self.product.iter().cloned(),
            other.product.iter().cloned(),
            |a, b| a.index.cmp(&b.index),
            |a, b| Some(if b.power > a.power { b } else { a }),
            &mut product,
        );
        let mut total_degree = E::zero();
        for v in &product {
            total_degree = add_exponents(&total_degree, &v.power);
        }
        Self {
            product,
            total_degree,
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        let mut product = Vec::with_capacity(self.product.len().min(other.product.len()));
        ordered_ops::intersection(
            self.product.iter().cloned(),
            other.product.iter().cloned(),
            |a, b| a.index.cmp(&b.index),
            |a, b| Some(if b.power < a.power { b } else { a }),
            &mut product,
        );
        let mut total_degree = E::zero();
        for v in &product {
            total_degree = add_exponents(&total_degree, &v.power);
        }
        Self {
            product,
            total_degree,
        }
    }

    fn divides(&self, other: &Self) -> bool {
        let mut iter = other.product.iter();
        for var in &self.product {
            match iter.find(|v| v.index >= var.index) {
                Some(found) if found.index == var.index && var.power <= found.power => (),
                _ => return false,
            }
        }
        true
    }

    fn try_divide(&self, divisor: &Self) -> Option<Self> {
        let mut quotient = self.clone();
        let mut iter = quotient.product.iter_mut();
        for var in &divisor.product {
            let found = iter.find(|v| v.index == var.index)?;
            if found.power < var.power {
                return None;
            }
            found.power -= &var.power;
            quotient.total_degree -= &var.power;
        }
        drop(iter);
        quotient.product.retain(|v| !v.power.is_zero());
        Some(quotient)
    }

    fn cmp_lex(&self, other: &Self) -> CmpOrd {
        for pair in self.product.iter().zip_longest(other.product.iter()) {
            match pair {
                EitherOrBoth::Both(a, b) => {
                    if a.index != b.index {
                        // The smaller index carries a positive exponent the
                        // other monomial lacks at that position.
                        return if a.index < b.index {
                            CmpOrd::Greater
                        } else {
                            CmpOrd::Less
                        };
                    }
                    match a.power.cmp(&b.power) {
                        CmpOrd::Equal => (),
                        decided => return decided,
                    }
                }
                EitherOrBoth::Left(_) => return CmpOrd::Greater,
                EitherOrBoth::Right(_) => return CmpOrd::Less,
            }
        }
        CmpOrd::Equal
    }

    fn cmp_revlex(&self, other: &Self) -> CmpOrd {
        for pair in self
            .product
            .iter()
            .rev()
            .zip_longest(other.product.iter().rev())
        {
            match pair {
                EitherOrBoth::Both(a, b) => {
                    if a.index != b.index {
                        // The higher index carries a positive exponent where
                        // the other monomial has zero, and the smaller
                        // exponent at the highest differing index wins.
                        return if a.index > b.index {
                            CmpOrd::Less
                        } else {
                            CmpOrd::Greater
                        };
                    }
                    if a.power != b.power {
                        return b.power.cmp(&a.power);
                    }
                }
                EitherOrBoth::Left(_) => return CmpOrd::Less,
                EitherOrBoth::Right(_) => return CmpOrd::Greater,
            }
        }
        CmpOrd::Equal
    }
}
