//! Merge kernels over sequences sorted by a caller-provided comparison.
//! Used to sum two polynomials and to combine the variable lists of two
//! sparse monomials.

use std::cmp::Ordering;

/// Union merge of two ordered sequences into `output`.
///
/// Elements comparing equal are combined with `op`; a `None` result drops the
/// pair (a cancelled coefficient, for instance). Both inputs must be strictly
/// ascending under `cmp`, and then so is the output.
pub fn sum<T>(
    mut a_iter: impl Iterator<Item = T>,
    mut b_iter: impl Iterator<Item = T>,
    cmp: impl Fn(&T, &T) -> Ordering,
    op: impl Fn(T, T) -> Option<T>,
    output: &mut Vec<T>,
) {
    let mut a = a_iter.next();
    let mut b = b_iter.next();

    loop {
        match (a, b) {
            (Some(va), Some(vb)) => match cmp(&va, &vb) {
                Ordering::Equal => {
                    if let Some(r) = op(va, vb) {
                        output.push(r);
                    }
                    a = a_iter.next();
                    b = b_iter.next();
                }
                Ordering::Less => {
                    output.push(va);
                    a = a_iter.next();
                    b = Some(vb);
                }
                Ordering::Greater => {
                    output.push(vb);
                    a = Some(va);
                    b = b_iter.next();
                }
            },
            (None, Some(b)) => {
                output.push(b);
                output.extend(b_iter);
                break;
            }
            (Some(a), None) => {
                output.push(a);
                output.extend(a_iter);
                break;
            }
            (None, None) => {
                break;
            }
        }
    }
}

/// Intersection merge: only elements present in both sequences survive,
/// combined with `op`. Inputs must be strictly ascending under `cmp`.
pub fn intersection<T>(
    mut a_iter: impl Iterator<Item = T>,
    mut b_iter: impl Iterator<Item = T>,
    cmp: impl Fn(&T, &T) -> Ordering,
    op: impl Fn(T, T) -> Option<T>,
    output: &mut Vec<T>,
) {
    let mut a = a_iter.next();
    let mut b = b_iter.next();

    while let (Some(va), Some(vb)) = (a, b) {
        match cmp(&va, &vb) {
            Ordering::Equal => {
                if let Some(r) = op(va, vb) {
                    output.push(r);
                }
                a = a_iter.next();
                b = b_iter.next();
            }
            Ordering::Less => {
                a = a_iter.next();
                b = Some(vb);
            }
            Ordering::Greater => {
                a = Some(va);
                b = b_iter.next();
            }
        }
    }
}
