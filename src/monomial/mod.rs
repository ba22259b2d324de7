//! Monomials: exponent vectors over a set of variables.
//!
//! Two representations implement the same capability set: a dense one with a
//! fixed number of variables and a sparse one that is unbounded. All of the
//! monomial algebra (product, lcm, gcd, divisibility) is written once against
//! the capability set; representations override individual operations where
//! their layout allows a faster walk.

pub mod dense;
pub mod ordering;
pub mod sparse;

pub use dense::DenseMonomial;
pub use sparse::SparseMonomial;

use std::cmp::Ordering as CmpOrd;

use num_traits::{CheckedAdd, CheckedMul, FromPrimitive, ToPrimitive, Zero};

/// Scalar type of a single exponent.
///
/// Exponents stored in a monomial are always non-negative, but the scalar
/// itself may be a signed type; the default ring exponent is `i16`.
pub trait Exponent:
    Eq
    + Ord
    + Clone
    + core::fmt::Debug
    + core::fmt::Display
    + for<'a> std::ops::AddAssign<&'a Self>
    + for<'a> std::ops::SubAssign<&'a Self>
    + CheckedAdd
    + CheckedMul
    + FromPrimitive
    + ToPrimitive
    + num_traits::Zero
    + num_traits::One
{
}

impl Exponent for u8 {}
impl Exponent for u16 {}
impl Exponent for u32 {}
impl Exponent for u64 {}
impl Exponent for usize {}
impl Exponent for i16 {}
impl Exponent for i32 {}
impl Exponent for i64 {}

/// Exponent addition that treats overflow of a narrow exponent type as a
/// fatal consistency break instead of wrapping silently.
pub(crate) fn add_exponents<E: Exponent>(a: &E, b: &E) -> E {
    a.checked_add(b)
        .expect("exponent overflow in monomial arithmetic")
}

/// An exponent vector, abstracted over its storage layout.
///
/// `exponent` never fails: variables a representation does not store read as
/// zero. The identity monomial has every exponent zero, equality is
/// exponent-wise, and the product is exponent-wise addition.
pub trait Monomial: Sized + Eq + Clone + core::fmt::Debug {
    type Exp: Exponent;

    /// Exponent of the variable at `var` (0-based).
    fn exponent(&self, var: usize) -> Self::Exp;

    /// Number of variables: the fixed arity for a dense representation, one
    /// past the highest stored variable for a sparse one.
    fn num_variables(&self) -> usize;

    /// Builds the monomial whose exponent at `i` is `exponents(i)` for
    /// `i < nvars`.
    fn construct(exponents: impl FnMut(usize) -> Self::Exp, nvars: usize) -> Self;

    /// The identity monomial.
    fn one() -> Self {
        Self::construct(|_| Zero::zero(), 0)
    }

    fn is_one(&self) -> bool {
        self.total_degree().is_zero()
    }

    /// Sum of all exponents.
    fn total_degree(&self) -> Self::Exp {
        let mut total = Self::Exp::zero();
        for i in 0..self.num_variables() {
            total = add_exponents(&total, &self.exponent(i));
        }
        total
    }

    /// Exponent-wise sum of `self` and `other`.
    fn mul(&self, other: &Self) -> Self {
        let nvars = self.num_variables().max(other.num_variables());
        Self::construct(
            |i| add_exponents(&self.exponent(i), &other.exponent(i)),
            nvars,
        )
    }

    /// `self` multiplied by itself `power` times.
    fn pow(&self, power: usize) -> Self {
        let factor =
            Self::Exp::from_usize(power).expect("monomial power fits the exponent type");
        Self::construct(
            |i| {
                self.exponent(i)
                    .checked_mul(&factor)
                    .expect("exponent overflow in monomial arithmetic")
            },
            self.num_variables(),
        )
    }

    /// Exponent-wise maximum.
    fn lcm(&self, other: &Self) -> Self {
        let nvars = self.num_variables().max(other.num_variables());
        Self::construct(|i| self.exponent(i).max(other.exponent(i)), nvars)
    }

    /// Exponent-wise minimum.
    fn gcd(&self, other: &Self) -> Self {
        let nvars = self.num_variables().max(other.num_variables());
        Self::construct(|i| self.exponent(i).min(other.exponent(i)), nvars)
    }

    /// Whether `self` divides `other`, i.e. no exponent of `self` exceeds
    /// the matching exponent of `other`.
    fn divides(&self, other: &Self) -> bool {
        (0..self.num_variables()).all(|i| self.exponent(i) <= other.exponent(i))
    }

    /// `self / divisor` when `divisor` divides `self`.
    fn try_divide(&self, divisor: &Self) -> Option<Self> {
        if !divisor.divides(self) {
            return None;
        }
        Some(Self::construct(
            |i| {
                let mut e = self.exponent(i);
                e -= &divisor.exponent(i);
                e
            },
            self.num_variables(),
        ))
    }

    /// The pair `(lcm/self, lcm/other)`, each multiplier being the factor
    /// that takes its argument to the least common multiple.
    fn lcm_multipliers(&self, other: &Self) -> (Self, Self) {
        let lcm = self.lcm(other);
        let nvars = lcm.num_variables();
        let to_self = Self::construct(
            |i| {
                let mut e = lcm.exponent(i);
                e -= &self.exponent(i);
                e
            },
            nvars,
        );
        let to_other = Self::construct(
            |i| {
                let mut e = lcm.exponent(i);
                e -= &other.exponent(i);
                e
            },
            nvars,
        );
        (to_self, to_other)
    }

    /// Comparison primitive for the lexicographic rule: ascending variable
    /// index, first differing exponent decides, larger exponent wins.
    fn cmp_lex(&self, other: &Self) -> CmpOrd {
        let nvars = self.num_variables().max(other.num_variables());
        for i in 0..nvars {
            match self.exponent(i).cmp(&other.exponent(i)) {
                CmpOrd::Equal => (),
                decided => return decided,
            }
        }
        CmpOrd::Equal
    }

    /// Comparison primitive for total degree.
    fn cmp_deg(&self, other: &Self) -> CmpOrd {
        self.total_degree().cmp(&other.total_degree())
    }

    /// Comparison primitive for the reverse-lexicographic tie-break:
    /// descending variable index, and at the first difference the monomial
    /// with the *smaller* exponent is the greater one.
    fn cmp_revlex(&self, other: &Self) -> CmpOrd {
        let nvars = self.num_variables().max(other.num_variables());
        for i in (0..nvars).rev() {
            let (a, b) = (self.exponent(i), other.exponent(i));
            if a != b {
                return b.cmp(&a);
            }
        }
        CmpOrd::Equal
    }
}
