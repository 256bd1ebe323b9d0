//! Symmetric and alternating groups.

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::algebra::element::{InvFn, OpFn};
use crate::algebra::error::{GroupError, GroupResult};
use crate::structures::group::Group;
use crate::structures::perm::Permutation;

pub(crate) fn permutation_ops() -> (OpFn<Permutation>, InvFn<Permutation>) {
    (
        Rc::new(|a: &Permutation, b: &Permutation| a.compose(b)),
        Rc::new(|a: &Permutation| a.inverse()),
    )
}

/// The symmetric group on `degree` points: all `degree!` permutations,
/// generated from a transposition and a full cycle by the closure engine.
///
/// # Errors
///
/// [`GroupError::InvalidParameter`] when `degree` is zero.
///
/// # Example
///
/// ```
/// use gruppe::symmetric;
///
/// let s3 = symmetric(3).unwrap();
/// assert_eq!(s3.order(), 6);
/// assert!(!s3.is_abelian());
/// ```
pub fn symmetric(degree: usize) -> GroupResult<Group<Permutation>> {
    if degree == 0 {
        return Err(GroupError::InvalidParameter {
            name: "degree",
            value: 0,
        });
    }
    let mut generators = Vec::new();
    if degree >= 2 {
        generators.push(Permutation::transposition(degree, 0, 1)?);
        let full_cycle: Vec<usize> = (0..degree).collect();
        generators.push(Permutation::from_cycle(degree, &full_cycle)?);
    }
    let (op, inv) = permutation_ops();
    Ok(Group::generate(
        generators,
        Permutation::identity(degree),
        op,
        inv,
    ))
}

/// The alternating group on `degree` points: the even permutations,
/// generated from the 3-cycles `(0 1 k)`. Trivial below degree 3.
///
/// # Example
///
/// ```
/// use gruppe::alternating;
///
/// let a4 = alternating(4).unwrap();
/// assert_eq!(a4.order(), 12);
/// ```
pub fn alternating(degree: usize) -> GroupResult<Group<Permutation>> {
    if degree == 0 {
        return Err(GroupError::InvalidParameter {
            name: "degree",
            value: 0,
        });
    }
    let mut generators = Vec::new();
    for k in 2..degree {
        generators.push(Permutation::from_cycle(degree, &[0, 1, k])?);
    }
    let (op, inv) = permutation_ops();
    Ok(Group::generate(
        generators,
        Permutation::identity(degree),
        op,
        inv,
    ))
}
