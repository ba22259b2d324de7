//! Polynomial product by an ordered walk of the summand grid.
//!
//! The summands of `a · b` form a grid (row = term of `a`, column = term of
//! `b`) whose rows and columns are ascending under the ring order, because
//! the order is multiplicative. A *minimal corner* is a cell whose row and
//! column predecessors have both been emitted; the next summand in order is
//! always at some minimal corner. Walking the grid through a min-heap of
//! corners therefore produces the result already sorted, fusing the usual
//! sort and coalesce passes and letting coefficients accumulate in place.

use std::cmp::{Ordering as CmpOrd, Reverse};
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use num_traits::Zero;

use super::{Polynomial, Term};
use crate::coefficient::Coefficient;
use crate::monomial::{ordering::MonomialOrder, Monomial};

struct Corner<O, M> {
    monomial: M,
    row: usize,
    col: usize,
    ordering: PhantomData<O>,
}

impl<O, M> Corner<O, M> {
    fn new(monomial: M, row: usize, col: usize) -> Self {
        Corner {
            monomial,
            row,
            col,
            ordering: PhantomData,
        }
    }
}

impl<O: MonomialOrder, M: Monomial> PartialEq for Corner<O, M> {
    fn eq(&self, other: &Self) -> bool {
        self.monomial == other.monomial
    }
}

impl<O: MonomialOrder, M: Monomial> Eq for Corner<O, M> {}

impl<O: MonomialOrder, M: Monomial> PartialOrd for Corner<O, M> {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrd> {
        Some(self.cmp(other))
    }
}

impl<O: MonomialOrder, M: Monomial> Ord for Corner<O, M> {
    fn cmp(&self, other: &Self) -> CmpOrd {
        O::cmp(&self.monomial, &other.monomial)
    }
}

impl<O, M, C> std::ops::Mul for &Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Polynomial<O, M, C>;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (&self.terms, &rhs.terms);
        if a.is_empty() || b.is_empty() {
            return Polynomial::zero();
        }

        // The minimal corners form a staircase touching each row and column
        // at most once, so the heap never holds more than min(|a|, |b|)
        // entries and the output never more than |a|·|b| terms. Both are
        // allocated once.
        let bound = a.len().min(b.len());
        let mut output: Vec<Term<M, C>> = Vec::with_capacity(a.len() * b.len());
        let mut done_in_row = vec![0usize; a.len()];
        let mut done_in_col = vec![0usize; b.len()];

        let mut corners = BinaryHeap::with_capacity(bound);
        corners.push(Reverse(Corner::<O, M>::new(
            a[0].monomial.mul(&b[0].monomial),
            0,
            0,
        )));

        while let Some(Reverse(corner)) = corners.pop() {
            let Corner {
                monomial, row, col, ..
            } = corner;

            let mut coefficient = a[row].coefficient.clone();
            coefficient *= &b[col].coefficient;
            match output.last_mut() {
                Some(last) if last.monomial == monomial => last.coefficient += coefficient,
                _ => output.push(Term {
                    coefficient,
                    monomial,
                }),
            }

            done_in_row[row] += 1;
            done_in_col[col] += 1;

            // (row, col + 1) becomes minimal once column col + 1 has
            // completed every cell above it.
            if col + 1 < b.len() && (row == 0 || done_in_col[col + 1] == row) {
                corners.push(Reverse(Corner::new(
                    a[row].monomial.mul(&b[col + 1].monomial),
                    row,
                    col + 1,
                )));
            }
            // Symmetrically for (row + 1, col).
            if row + 1 < a.len() && (col == 0 || done_in_row[row + 1] == col) {
                corners.push(Reverse(Corner::new(
                    a[row + 1].monomial.mul(&b[col].monomial),
                    row + 1,
                    col,
                )));
            }

            debug_assert!(corners.len() <= bound);
        }

        // Cancellation can leave zero coefficients behind.
        output.retain(|t| !t.coefficient.is_zero());

        Polynomial {
            terms: output,
            ordering: PhantomData,
        }
    }
}

impl<O, M, C> std::ops::Mul for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<O, M, C> std::ops::Mul<C> for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    type Output = Self;

    fn mul(self, rhs: C) -> Self {
        self.scale(&rhs)
    }
}

impl<O, M, C> std::ops::MulAssign<&Polynomial<O, M, C>> for Polynomial<O, M, C>
where
    O: MonomialOrder,
    M: Monomial,
    C: Coefficient,
{
    fn mul_assign(&mut self, rhs: &Self) {
        *self = &*self * rhs;
    }
}
