//! Homomorphisms between finite groups and their analysis.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::algebra::element::{Element, MapFn};
use crate::algebra::error::{GroupError, GroupResult};
use crate::analysis::structure::close_in_parent;
use crate::structures::cayley::cayley_representation;
use crate::structures::coset::{quotient_group, Coset};
use crate::structures::cyclic::cyclic;
use crate::structures::group::Group;
use crate::structures::perm::Permutation;
use crate::structures::subgroup::Subgroup;
use crate::structures::symmetric::symmetric;

/// A map between two groups.
///
/// Nothing is verified at construction: whether the map actually
/// preserves the operation is a property to check with
/// [`Homomorphism::is_homomorphism`], not an invariant of the value.
///
/// # Example
///
/// ```
/// use gruppe::analysis::homomorphism::sign_homomorphism;
///
/// let sign = sign_homomorphism(3).unwrap();
/// assert!(sign.is_homomorphism());
/// assert_eq!(sign.kernel().order(), 3);
/// assert_eq!(sign.image().order(), 2);
/// ```
#[derive(Clone)]
pub struct Homomorphism<A: Element, B: Element> {
    source: Group<A>,
    target: Group<B>,
    map: MapFn<A, B>,
}

impl<A: Element, B: Element> Homomorphism<A, B> {
    /// Wraps a map between two groups.
    pub fn new(source: Group<A>, target: Group<B>, map: MapFn<A, B>) -> Self {
        Homomorphism {
            source,
            target,
            map,
        }
    }

    /// The domain group.
    pub fn source(&self) -> &Group<A> {
        &self.source
    }

    /// The codomain group.
    pub fn target(&self) -> &Group<B> {
        &self.target
    }

    /// Applies the underlying map.
    pub fn apply(&self, a: &A) -> B {
        (self.map)(a)
    }

    /// Shared handle on the underlying map closure.
    pub fn map_fn(&self) -> MapFn<A, B> {
        self.map.clone()
    }

    /// Whether the map preserves the identity and the operation over
    /// every pair of source elements. O(|source|²).
    pub fn is_homomorphism(&self) -> bool {
        if self.apply(self.source.identity()) != *self.target.identity() {
            return false;
        }
        self.source.iter().all(|a| {
            self.source.iter().all(|b| {
                self.apply(&self.source.op(a, b)) == self.target.op(&self.apply(a), &self.apply(b))
            })
        })
    }

    /// The kernel: the preimage of the target identity, as a subgroup of
    /// the source.
    ///
    /// The preimage is already closed for a valid homomorphism; it is
    /// still run through the closure engine, like every other derived
    /// subgroup in this crate.
    pub fn kernel(&self) -> Subgroup<A> {
        let preimage: Vec<A> = self
            .source
            .iter()
            .filter(|&a| self.apply(a) == *self.target.identity())
            .cloned()
            .collect();
        close_in_parent(&self.source, preimage)
    }

    /// The image: the range of the map, as a subgroup of the target.
    pub fn image(&self) -> Subgroup<B> {
        let range: Vec<B> = self.source.iter().map(|a| self.apply(a)).collect();
        close_in_parent(&self.target, range)
    }

    /// A homomorphism is injective exactly when its kernel is trivial.
    pub fn is_injective(&self) -> bool {
        self.kernel().is_trivial()
    }

    /// A homomorphism is surjective exactly when its image is the whole
    /// target.
    pub fn is_surjective(&self) -> bool {
        self.image().order() == self.target.order()
    }

    /// Bijective and operation-preserving in one word.
    pub fn is_isomorphism(&self) -> bool {
        self.is_injective() && self.is_surjective()
    }

    /// Checks `|source| / |kernel| == |image|` and returns the common
    /// value.
    ///
    /// # Errors
    ///
    /// [`GroupError::InconsistentOrders`] when the arithmetic does not
    /// hold. That never follows from caller input; it would mean the
    /// kernel or image computation itself is defective.
    pub fn first_isomorphism_theorem(&self) -> GroupResult<usize> {
        let source = self.source.order();
        let kernel = self.kernel().order();
        let image = self.image().order();
        if source % kernel != 0 || source / kernel != image {
            return Err(GroupError::InconsistentOrders {
                source,
                kernel,
                image,
            });
        }
        Ok(image)
    }

    /// The composite `next ∘ self`: apply `self` first, then `next`.
    ///
    /// # Errors
    ///
    /// [`GroupError::CompositionMismatch`] unless `self`'s target and
    /// `next`'s source share an element set (operations are closures and
    /// are not comparable; the element-set check is the documented
    /// contract).
    pub fn compose<C: Element>(&self, next: &Homomorphism<B, C>) -> GroupResult<Homomorphism<A, C>> {
        if !self.target.has_same_elements(&next.source) {
            return Err(GroupError::CompositionMismatch);
        }
        let first = self.map.clone();
        let second = next.map.clone();
        Ok(Homomorphism::new(
            self.source.clone(),
            next.target.clone(),
            Rc::new(move |a: &A| second(&first(a))),
        ))
    }
}

impl<A: Element> Homomorphism<A, A> {
    /// The identity endomorphism of a group.
    pub fn identity(group: &Group<A>) -> Self {
        Homomorphism::new(group.clone(), group.clone(), Rc::new(|a: &A| a.clone()))
    }
}

impl<A: Element, B: Element> fmt::Debug for Homomorphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Homomorphism")
            .field("source_order", &self.source.order())
            .field("target_order", &self.target.order())
            .finish_non_exhaustive()
    }
}

/// The sign (parity) homomorphism from the symmetric group on `degree`
/// points to the cyclic group of order two: even permutations map to 0,
/// odd ones to 1.
///
/// # Errors
///
/// [`GroupError::InvalidParameter`] for a zero degree.
pub fn sign_homomorphism(degree: usize) -> GroupResult<Homomorphism<Permutation, u64>> {
    let source = symmetric(degree)?;
    let target = cyclic(2)?;
    Ok(Homomorphism::new(
        source,
        target,
        Rc::new(|p: &Permutation| u64::from(!p.is_even())),
    ))
}

/// The natural projection `g -> gH` onto the quotient by a normal
/// subgroup. Its kernel is the subgroup itself.
///
/// # Errors
///
/// [`GroupError::NotNormal`] when `subgroup` is not normal in its
/// parent.
pub fn natural_projection<E: Element>(
    subgroup: &Subgroup<E>,
) -> GroupResult<Homomorphism<E, Coset<E>>> {
    let target = quotient_group(subgroup)?;
    let parent = subgroup.parent().clone();
    let sub_elements = subgroup.elements().clone();
    let parent_op = parent.op_fn();
    let map = Rc::new(move |g: &E| {
        let elements: BTreeSet<E> = sub_elements.iter().map(|h| parent_op(g, h)).collect();
        Coset::from_parts(g.clone(), elements)
    });
    Ok(Homomorphism::new(parent, target, map))
}

/// The left-regular embedding of a group into its Cayley representation
/// (Cayley's theorem). Always an isomorphism onto the image.
pub fn cayley_embedding<E: Element>(group: &Group<E>) -> Homomorphism<E, Permutation> {
    let target = cayley_representation(group);
    let enumeration: Vec<E> = group.iter().cloned().collect();
    let index: BTreeMap<E, usize> = enumeration
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, e)| (e, i))
        .collect();
    let source = group.clone();
    let acting = group.clone();
    let map = Rc::new(move |g: &E| {
        let images: Vec<usize> = enumeration
            .iter()
            .map(|e| index[&acting.op(g, e)])
            .collect();
        Permutation::from_images_unchecked(images)
    });
    Homomorphism::new(source, target, map)
}
