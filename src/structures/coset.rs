//! Cosets and quotient groups.

use alloc::collections::BTreeSet;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::algebra::element::Element;
use crate::algebra::error::{GroupError, GroupResult};
use crate::analysis::structure::is_normal;
use crate::structures::group::Group;
use crate::structures::subgroup::Subgroup;

/// A coset `gH` (or `Hg`): a representative together with the
/// materialized element set.
///
/// Two cosets are the same coset exactly when their element sets are
/// equal, regardless of which representative happened to build them, so
/// equality, ordering and hashing are defined over the element set only.
/// Comparing two cosets is O(|subgroup|).
///
/// # Example
///
/// ```
/// use gruppe::{cyclic, Coset, Subgroup};
///
/// let c6 = cyclic(6).unwrap();
/// let h = Subgroup::generated(&c6, [3]).unwrap();
/// let a = Coset::left(&h, &1).unwrap();
/// let b = Coset::left(&h, &4).unwrap();
/// assert_eq!(a, b);
/// assert_ne!(a.representative(), b.representative());
/// ```
#[derive(Clone)]
pub struct Coset<E: Element> {
    representative: E,
    elements: BTreeSet<E>,
}

impl<E: Element> Coset<E> {
    /// The left coset `representative · H`.
    ///
    /// # Errors
    ///
    /// [`GroupError::NotSubset`] when the representative is not a parent
    /// element.
    pub fn left(subgroup: &Subgroup<E>, representative: &E) -> GroupResult<Self> {
        let parent = subgroup.parent();
        if !parent.contains(representative) {
            return Err(GroupError::NotSubset);
        }
        let elements = subgroup
            .elements()
            .iter()
            .map(|h| parent.op(representative, h))
            .collect();
        Ok(Coset {
            representative: representative.clone(),
            elements,
        })
    }

    /// The right coset `H · representative`.
    ///
    /// # Errors
    ///
    /// [`GroupError::NotSubset`] when the representative is not a parent
    /// element.
    pub fn right(subgroup: &Subgroup<E>, representative: &E) -> GroupResult<Self> {
        let parent = subgroup.parent();
        if !parent.contains(representative) {
            return Err(GroupError::NotSubset);
        }
        let elements = subgroup
            .elements()
            .iter()
            .map(|h| parent.op(h, representative))
            .collect();
        Ok(Coset {
            representative: representative.clone(),
            elements,
        })
    }

    pub(crate) fn from_parts(representative: E, elements: BTreeSet<E>) -> Self {
        Coset {
            representative,
            elements,
        }
    }

    /// The representative this coset was built from. Not part of the
    /// coset's identity.
    pub fn representative(&self) -> &E {
        &self.representative
    }

    /// The materialized element set.
    pub fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }

    /// Number of elements; equals the subgroup's order.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Cosets are never empty, but the container convention applies.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `e` lies in this coset.
    pub fn contains(&self, e: &E) -> bool {
        self.elements.contains(e)
    }
}

impl<E: Element> PartialEq for Coset<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Element> Eq for Coset<E> {}

impl<E: Element> PartialOrd for Coset<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Element> Ord for Coset<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elements.cmp(&other.elements)
    }
}

impl<E: Element + Hash> Hash for Coset<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<E: Element> fmt::Debug for Coset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coset")
            .field("representative", &self.representative)
            .field("elements", &self.elements)
            .finish()
    }
}

/// All distinct left cosets of `subgroup` in its parent.
///
/// Parent elements are visited in canonical order; a coset is kept only
/// if its element set has not been produced before, so equal cosets
/// collapse no matter which representative came first.
pub fn left_cosets<E: Element>(subgroup: &Subgroup<E>) -> Vec<Coset<E>> {
    cosets_with(subgroup, |parent, g, h| parent.op(g, h))
}

/// All distinct right cosets of `subgroup` in its parent.
pub fn right_cosets<E: Element>(subgroup: &Subgroup<E>) -> Vec<Coset<E>> {
    cosets_with(subgroup, |parent, g, h| parent.op(h, g))
}

fn cosets_with<E: Element>(
    subgroup: &Subgroup<E>,
    side: impl Fn(&Group<E>, &E, &E) -> E,
) -> Vec<Coset<E>> {
    let parent = subgroup.parent();
    let mut seen: BTreeSet<BTreeSet<E>> = BTreeSet::new();
    let mut cosets = Vec::new();
    for g in parent.iter() {
        let elements: BTreeSet<E> = subgroup
            .elements()
            .iter()
            .map(|h| side(parent, g, h))
            .collect();
        if seen.insert(elements.clone()) {
            cosets.push(Coset::from_parts(g.clone(), elements));
        }
    }
    cosets
}

/// A quotient group: a [`Group`] whose elements are cosets.
pub type QuotientGroup<E> = Group<Coset<E>>;

/// The quotient `G / H` of a parent group by a normal subgroup.
///
/// Normality is validated first: without it the coset operation
/// `(g₁H)(g₂H) = (g₁g₂)H` would depend on the chosen representatives and
/// be ill-defined. The quotient's identity is the subgroup itself, the
/// coset of the parent identity.
///
/// # Errors
///
/// [`GroupError::NotNormal`] when `subgroup` is not normal in its
/// parent.
///
/// # Example
///
/// ```
/// use gruppe::{cyclic, quotient_group, Subgroup};
///
/// let c6 = cyclic(6).unwrap();
/// let h = Subgroup::generated(&c6, [3]).unwrap();
/// let q = quotient_group(&h).unwrap();
/// assert_eq!(q.order(), 3);
/// ```
pub fn quotient_group<E: Element>(subgroup: &Subgroup<E>) -> GroupResult<QuotientGroup<E>> {
    if !is_normal(subgroup) {
        return Err(GroupError::NotNormal);
    }
    let parent = subgroup.parent();
    let cosets: BTreeSet<Coset<E>> = left_cosets(subgroup).into_iter().collect();

    let sub_elements = subgroup.elements().clone();
    let parent_op = parent.op_fn();
    let coset_of = move |rep: E| -> Coset<E> {
        let elements = sub_elements.iter().map(|h| parent_op(&rep, h)).collect();
        Coset::from_parts(rep, elements)
    };

    let op_coset_of = coset_of.clone();
    let op_parent_op = parent.op_fn();
    let op = Rc::new(move |a: &Coset<E>, b: &Coset<E>| {
        op_coset_of(op_parent_op(a.representative(), b.representative()))
    });

    let inv_coset_of = coset_of.clone();
    let parent_inv = parent.inv_fn();
    let inv = Rc::new(move |a: &Coset<E>| inv_coset_of(parent_inv(a.representative())));

    let identity = coset_of(parent.identity().clone());
    Ok(Group::from_parts(cosets, identity, op, inv))
}
