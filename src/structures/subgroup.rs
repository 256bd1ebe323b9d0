//! Verified subgroups.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::algebra::element::Element;
use crate::algebra::error::{GroupError, GroupResult};
use crate::structures::closure;
use crate::structures::coset::{quotient_group, QuotientGroup};
use crate::structures::group::Group;

/// A group whose element set is a verified subset of a parent group,
/// sharing the parent's operation and inverse closures.
///
/// Construction checks the subgroup invariants (subset, identity,
/// closure, inverses) and fails fast on violation; a `Subgroup` value is
/// therefore always an actual subgroup, and downstream constructions
/// (quotients, analyzers) rely on that.
///
/// # Example
///
/// ```
/// use gruppe::{cyclic, Subgroup};
///
/// let c6 = cyclic(6).unwrap();
/// let h = Subgroup::generated(&c6, [3]).unwrap();
/// assert_eq!(h.order(), 2);
/// assert_eq!(h.index().unwrap(), 3);
/// ```
#[derive(Clone)]
pub struct Subgroup<E: Element> {
    parent: Group<E>,
    group: Group<E>,
}

impl<E: Element> Subgroup<E> {
    /// Builds a subgroup from an explicit element set, verifying every
    /// subgroup invariant.
    ///
    /// # Errors
    ///
    /// [`GroupError::NotSubset`] for elements outside the parent,
    /// [`GroupError::MissingIdentity`], [`GroupError::InverseMissing`] or
    /// [`GroupError::NotClosed`] when the set is not a subgroup.
    pub fn new(parent: &Group<E>, elements: BTreeSet<E>) -> GroupResult<Self> {
        if !elements.is_subset(parent.elements()) {
            return Err(GroupError::NotSubset);
        }
        if !elements.contains(parent.identity()) {
            return Err(GroupError::MissingIdentity);
        }
        for a in &elements {
            if !elements.contains(&parent.inverse(a)) {
                return Err(GroupError::InverseMissing);
            }
            for b in &elements {
                if !elements.contains(&parent.op(a, b)) {
                    return Err(GroupError::NotClosed);
                }
            }
        }
        Ok(Self::from_closed_set(parent, elements))
    }

    /// The subgroup generated by `generators` inside `parent`, produced
    /// by the closure engine. An empty generator set yields the trivial
    /// subgroup.
    ///
    /// # Errors
    ///
    /// [`GroupError::NotSubset`] when a generator is not a parent
    /// element.
    pub fn generated<I>(parent: &Group<E>, generators: I) -> GroupResult<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let generators: Vec<E> = generators.into_iter().collect();
        if generators.iter().any(|g| !parent.contains(g)) {
            return Err(GroupError::NotSubset);
        }
        let op = parent.op_fn();
        let inv = parent.inv_fn();
        let elements = closure::generate(generators, parent.identity(), &*op, &*inv);
        Ok(Self::from_closed_set(parent, elements))
    }

    /// The trivial subgroup `{identity}`.
    pub fn trivial(parent: &Group<E>) -> Self {
        let mut elements = BTreeSet::new();
        elements.insert(parent.identity().clone());
        Self::from_closed_set(parent, elements)
    }

    /// The whole parent group as its own subgroup.
    pub fn full(parent: &Group<E>) -> Self {
        Self::from_closed_set(parent, parent.elements().clone())
    }

    /// Wraps a set already known to be closed (closure-engine output or a
    /// set that passed validation).
    pub(crate) fn from_closed_set(parent: &Group<E>, elements: BTreeSet<E>) -> Self {
        let group = Group::from_parts(
            elements,
            parent.identity().clone(),
            parent.op_fn(),
            parent.inv_fn(),
        );
        Subgroup {
            parent: parent.clone(),
            group,
        }
    }

    /// The subgroup viewed as a group in its own right.
    pub fn group(&self) -> &Group<E> {
        &self.group
    }

    /// The parent group.
    pub fn parent(&self) -> &Group<E> {
        &self.parent
    }

    /// The subgroup's element set.
    pub fn elements(&self) -> &BTreeSet<E> {
        self.group.elements()
    }

    /// Number of elements.
    pub fn order(&self) -> usize {
        self.group.order()
    }

    /// Whether `e` belongs to the subgroup.
    pub fn contains(&self, e: &E) -> bool {
        self.group.contains(e)
    }

    /// The index `|G| / |H|`.
    ///
    /// # Errors
    ///
    /// [`GroupError::IndexUndefined`] when the subgroup order does not
    /// divide the parent order. Lagrange's theorem rules this out for
    /// values built by this crate; the check guards the arithmetic
    /// anyway.
    pub fn index(&self) -> GroupResult<usize> {
        let parent_order = self.parent.order();
        let subgroup_order = self.order();
        if parent_order % subgroup_order != 0 {
            return Err(GroupError::IndexUndefined {
                parent_order,
                subgroup_order,
            });
        }
        Ok(parent_order / subgroup_order)
    }

    /// Whether this is the one-element subgroup.
    pub fn is_trivial(&self) -> bool {
        self.order() == 1
    }

    /// Whether this is the whole parent group.
    pub fn is_full(&self) -> bool {
        self.order() == self.parent.order()
    }

    /// Whether the subgroup is invariant under conjugation by every
    /// parent element. See [`crate::analysis::structure::is_normal`].
    pub fn is_normal(&self) -> bool {
        crate::analysis::structure::is_normal(self)
    }

    /// The quotient of the parent by this subgroup.
    ///
    /// # Errors
    ///
    /// [`GroupError::NotNormal`] when the subgroup is not normal.
    pub fn quotient(&self) -> GroupResult<QuotientGroup<E>> {
        quotient_group(self)
    }
}

impl<E: Element> fmt::Debug for Subgroup<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subgroup")
            .field("order", &self.order())
            .field("parent_order", &self.parent.order())
            .field("elements", self.elements())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::cyclic::cyclic;
    use crate::structures::symmetric::symmetric;

    #[test]
    fn verified_construction_accepts_subgroup() {
        let c6 = cyclic(6).unwrap();
        let h = Subgroup::new(&c6, [0u64, 2, 4].into_iter().collect()).unwrap();
        assert_eq!(h.order(), 3);
        assert_eq!(h.index().unwrap(), 2);
    }

    #[test]
    fn rejects_foreign_elements() {
        let c6 = cyclic(6).unwrap();
        let err = Subgroup::new(&c6, [0u64, 7].into_iter().collect()).unwrap_err();
        assert_eq!(err, GroupError::NotSubset);
    }

    #[test]
    fn rejects_missing_identity() {
        let c6 = cyclic(6).unwrap();
        let err = Subgroup::new(&c6, [2u64, 4].into_iter().collect()).unwrap_err();
        assert_eq!(err, GroupError::MissingIdentity);
    }

    #[test]
    fn rejects_missing_inverse() {
        let c6 = cyclic(6).unwrap();
        let err = Subgroup::new(&c6, [0u64, 2].into_iter().collect()).unwrap_err();
        assert_eq!(err, GroupError::InverseMissing);
    }

    #[test]
    fn rejects_open_set() {
        // {0, 1, 5} is inverse-closed but 1 + 1 = 2 escapes it.
        let c6 = cyclic(6).unwrap();
        let err = Subgroup::new(&c6, [0u64, 1, 5].into_iter().collect()).unwrap_err();
        assert_eq!(err, GroupError::NotClosed);
    }

    #[test]
    fn generated_subgroup_of_cyclic() {
        let c6 = cyclic(6).unwrap();
        let h = Subgroup::generated(&c6, [2]).unwrap();
        assert_eq!(
            h.elements().iter().copied().collect::<Vec<_>>(),
            alloc::vec![0, 2, 4]
        );
    }

    #[test]
    fn generated_rejects_foreign_generator() {
        let c6 = cyclic(6).unwrap();
        assert_eq!(
            Subgroup::generated(&c6, [9]).unwrap_err(),
            GroupError::NotSubset
        );
    }

    #[test]
    fn empty_generators_give_trivial_subgroup() {
        let s3 = symmetric(3).unwrap();
        let h = Subgroup::generated(&s3, []).unwrap();
        assert!(h.is_trivial());
        assert_eq!(h.index().unwrap(), 6);
    }

    #[test]
    fn full_and_trivial_flags() {
        let c4 = cyclic(4).unwrap();
        assert!(Subgroup::full(&c4).is_full());
        assert!(Subgroup::trivial(&c4).is_trivial());
        assert!(!Subgroup::full(&c4).is_trivial());
    }

    #[test]
    fn lagrange_for_generated_subgroups() {
        let s3 = symmetric(3).unwrap();
        for p in s3.iter() {
            let h = Subgroup::generated(&s3, [p.clone()]).unwrap();
            assert_eq!(s3.order() % h.order(), 0);
        }
    }
}
