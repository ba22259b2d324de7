//! The coefficient ring abstraction and its built-in instances.
//!
//! A polynomial is generic over any commutative ring implementing
//! [`Coefficient`]; besides the usual ring operations the trait carries the
//! capabilities the arithmetic kernels need: exact division testing and
//! injection of arbitrary-precision integers.

use num_traits::Zero;
use rug::{Complete, Integer, Rational};

use crate::monomial::{ordering::MonomialOrder, Monomial};
use crate::polynomial::Polynomial;

/// Element of a commutative coefficient ring.
pub trait Coefficient:
    core::fmt::Debug
    + PartialEq
    + Clone
    + std::ops::AddAssign
    + std::ops::SubAssign
    + for<'a> std::ops::MulAssign<&'a Self>
    + num_traits::Zero
    + num_traits::One
{
    /// Exact division. `None` when `divisor` is zero or the quotient does
    /// not exist in this ring. Fields always divide by nonzero elements;
    /// integer rings divide only when the remainder vanishes.
    ///
    /// This returns an `Option` rather than an error because the division
    /// engine probes divisibility on its hot path and a failure is the
    /// common, non-exceptional outcome.
    fn try_divide(&self, divisor: &Self) -> Option<Self>;

    /// Injects an exactly-computed integer into this ring. `None` when the
    /// value cannot be represented, which callers report as overflow.
    fn try_from_integer(value: &Integer) -> Option<Self>;

    /// `self` summed `n` times. Every ring supports this through
    /// double-and-add; instances with native small-integer multiplication
    /// may override it.
    fn mul_usize(&self, mut n: usize) -> Self {
        let mut result = Self::zero();
        let mut base = self.clone();
        loop {
            if n & 1 == 1 {
                result += base.clone();
            }
            n >>= 1;
            if n == 0 {
                break;
            }
            let doubled = base.clone();
            base += doubled;
        }
        result
    }
}

/// Coefficient rings with a greatest common divisor, enabling the content
/// operation on polynomials.
pub trait GcdCoefficient: Coefficient {
    fn gcd(&self, other: &Self) -> Self;
}

macro_rules! impl_coefficient_for_int {
    ($t:ty, $to:ident) => {
        impl Coefficient for $t {
            fn try_divide(&self, divisor: &Self) -> Option<Self> {
                if *divisor == 0 || self % divisor != 0 {
                    None
                } else {
                    Some(self / divisor)
                }
            }

            fn try_from_integer(value: &Integer) -> Option<Self> {
                value.$to()
            }
        }

        impl GcdCoefficient for $t {
            fn gcd(&self, other: &Self) -> Self {
                let (mut a, mut b) = (*self, *other);
                while b != 0 {
                    let t = a % b;
                    a = b;
                    b = t;
                }
                a.abs()
            }
        }
    };
}

impl_coefficient_for_int!(i32, to_i32);
impl_coefficient_for_int!(i64, to_i64);

impl Coefficient for Integer {
    fn try_divide(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() || !self.is_divisible(divisor) {
            None
        } else {
            Some(self.div_exact_ref(divisor).complete())
        }
    }

    fn try_from_integer(value: &Integer) -> Option<Self> {
        Some(value.clone())
    }

    fn mul_usize(&self, n: usize) -> Self {
        (self * n as u64).complete()
    }
}

impl GcdCoefficient for Integer {
    fn gcd(&self, other: &Self) -> Self {
        self.gcd_ref(other).complete()
    }
}

impl Coefficient for Rational {
    fn try_divide(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            None
        } else {
            Some((self / divisor).complete())
        }
    }

    fn try_from_integer(value: &Integer) -> Option<Self> {
        Some(Rational::from(value))
    }
}

/// A polynomial ring is itself a coefficient ring, so rings can be stacked
/// into towers (an outer ring whose coefficients are polynomials of an
/// inner ring).
impl<O, M, C> Coefficient for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    fn try_divide(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let (mut factors, remainder) = self
            .div_rem_multi(std::slice::from_ref(divisor))
            .expect("divisor checked nonzero");
        if remainder.is_zero() {
            Some(factors.swap_remove(0))
        } else {
            None
        }
    }

    fn try_from_integer(value: &Integer) -> Option<Self> {
        C::try_from_integer(value).map(Self::constant)
    }
}
