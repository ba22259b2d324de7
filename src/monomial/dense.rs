//! Dense monomial representation: one exponent slot per ring variable.

use num_traits::{One, Zero};

use super::{add_exponents, Exponent, Monomial};

/// Exponent vector with a fixed arity and a cached total degree.
///
/// Variables are identified by their position. Rings guarantee that all
/// monomials they hand out share one arity; equality nevertheless compares
/// exponent-wise so that the arity-zero identity monomial equals any
/// all-zero vector.
#[derive(Debug, Clone)]
pub struct DenseMonomial<E> {
    exponents: Vec<E>,
    total_degree: E,
}

impl<E: Exponent> DenseMonomial<E> {
    /// The monomial consisting of the single variable `var` in a ring of
    /// `nvars` variables.
    pub fn variable(var: usize, nvars: usize) -> Self {
        assert!(var < nvars, "variable index beyond the ring arity");
        Self::construct(|i| if i == var { E::one() } else { E::zero() }, nvars)
    }
}

impl<E: Exponent> PartialEq for DenseMonomial<E> {
    fn eq(&self, other: &Self) -> bool {
        let nvars = self.exponents.len().max(other.exponents.len());
        (0..nvars).all(|i| self.exponent(i) == other.exponent(i))
    }
}

impl<E: Exponent> Eq for DenseMonomial<E> {}

impl<E: Exponent> Monomial for DenseMonomial<E> {
    type Exp = E;

    fn exponent(&self, var: usize) -> E {
        self.exponents.get(var).cloned().unwrap_or_else(E::zero)
    }

    fn num_variables(&self) -> usize {
        self.exponents.len()
    }

    fn construct(mut exponents: impl FnMut(usize) -> E, nvars: usize) -> Self {
        let exponents: Vec<E> = (0..nvars).map(&mut exponents).collect();
        let mut total_degree = E::zero();
        for e in &exponents {
            total_degree = add_exponents(&total_degree, e);
        }
        Self {
            exponents,
            total_degree,
        }
    }

    fn total_degree(&self) -> E {
        self.total_degree.clone()
    }

    fn is_one(&self) -> bool {
        self.total_degree.is_zero()
    }
}
