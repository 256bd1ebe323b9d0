//! Direct products of groups.

use alloc::collections::BTreeSet;
use alloc::rc::Rc;

use itertools::Itertools;

use crate::algebra::element::Element;
use crate::structures::group::Group;

/// The direct product `A x B`: pairs under the componentwise operation.
///
/// The element set is the cartesian product of the factors' sets, which
/// is closed under the componentwise operation by construction, so no
/// closure sweep is run. The factors' operation closures are shared, not
/// copied.
///
/// # Example
///
/// ```
/// use gruppe::{cyclic, direct_product};
///
/// // The Klein four-group as C2 x C2.
/// let c2 = cyclic(2).unwrap();
/// let klein = direct_product(&c2, &c2);
/// assert_eq!(klein.order(), 4);
/// assert!(klein.is_abelian());
/// assert!(!klein.is_cyclic());
/// ```
pub fn direct_product<A: Element, B: Element>(left: &Group<A>, right: &Group<B>) -> Group<(A, B)> {
    let elements: BTreeSet<(A, B)> = left
        .elements()
        .iter()
        .cartesian_product(right.elements().iter())
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect();
    let identity = (left.identity().clone(), right.identity().clone());

    let left_op = left.op_fn();
    let right_op = right.op_fn();
    let op = Rc::new(move |x: &(A, B), y: &(A, B)| (left_op(&x.0, &y.0), right_op(&x.1, &y.1)));

    let left_inv = left.inv_fn();
    let right_inv = right.inv_fn();
    let inv = Rc::new(move |x: &(A, B)| (left_inv(&x.0), right_inv(&x.1)));

    Group::from_parts(elements, identity, op, inv)
}
