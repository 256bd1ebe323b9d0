use alloc::collections::BTreeSet;
use core::fmt;

use crate::algebra::element::{Element, InvFn, OpFn};
use crate::algebra::error::{GroupError, GroupResult};
use crate::structures::closure;
use crate::utils::lcm;

/// A finite group: an immutable element set together with its operation,
/// identity and inverse function.
///
/// The element set is materialized eagerly at construction and never
/// changes afterwards, so a `Group` can be read from any number of
/// analysis passes without synchronization. The operation and inverse are
/// shared closures ([`OpFn`], [`InvFn`]) chosen by whichever construction
/// built the group; derived constructions (subgroups, quotients, Cayley
/// representations) share them via `Rc`.
///
/// Elements are kept in a `BTreeSet`, so iteration order is the canonical
/// `Ord` order of the element type. The Cayley representation fixes its
/// enumeration from that order.
///
/// # Example
///
/// ```
/// use gruppe::cyclic;
///
/// let c6 = cyclic(6).unwrap();
/// assert_eq!(c6.order(), 6);
/// assert_eq!(c6.op(&2, &5), 1);
/// assert_eq!(c6.inverse(&2), 4);
/// ```
#[derive(Clone)]
pub struct Group<E: Element> {
    elements: BTreeSet<E>,
    identity: E,
    op: OpFn<E>,
    inv: InvFn<E>,
}

impl<E: Element> Group<E> {
    /// Builds a group by closing `generators` under `op`.
    ///
    /// Runs the closure engine: the generators and their inverses seed a
    /// breadth-first sweep that stops once no new element appears. An
    /// empty generator set produces the trivial group `{identity}`.
    pub fn generate<I>(generators: I, identity: E, op: OpFn<E>, inv: InvFn<E>) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let elements = closure::generate(generators, &identity, &*op, &*inv);
        Group {
            elements,
            identity,
            op,
            inv,
        }
    }

    /// Builds a group from an already-complete element set.
    ///
    /// Verifies that `identity` is a member, that the set is closed under
    /// `op`, and that every element's inverse is a member. The check is
    /// O(n²); constructions whose sets are closed by construction use the
    /// unchecked internal path instead.
    ///
    /// # Errors
    ///
    /// [`GroupError::MissingIdentity`], [`GroupError::NotClosed`] or
    /// [`GroupError::InverseMissing`] when the corresponding structural
    /// invariant fails.
    pub fn from_elements(
        elements: BTreeSet<E>,
        identity: E,
        op: OpFn<E>,
        inv: InvFn<E>,
    ) -> GroupResult<Self> {
        if !elements.contains(&identity) {
            return Err(GroupError::MissingIdentity);
        }
        for a in &elements {
            if !elements.contains(&inv(a)) {
                return Err(GroupError::InverseMissing);
            }
            for b in &elements {
                if !elements.contains(&op(a, b)) {
                    return Err(GroupError::NotClosed);
                }
            }
        }
        Ok(Group {
            elements,
            identity,
            op,
            inv,
        })
    }

    /// Unchecked constructor for sets that are closed by construction
    /// (direct products, quotients, Cayley representations, verified
    /// subgroups).
    pub(crate) fn from_parts(
        elements: BTreeSet<E>,
        identity: E,
        op: OpFn<E>,
        inv: InvFn<E>,
    ) -> Self {
        Group {
            elements,
            identity,
            op,
            inv,
        }
    }

    /// The element set, in canonical order.
    pub fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }

    /// Iterates the elements in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    /// The identity element.
    pub fn identity(&self) -> &E {
        &self.identity
    }

    /// Number of elements.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Whether `e` belongs to this group.
    pub fn contains(&self, e: &E) -> bool {
        self.elements.contains(e)
    }

    /// Applies the group operation.
    pub fn op(&self, a: &E, b: &E) -> E {
        (self.op)(a, b)
    }

    /// The inverse of `e` with respect to this group's operation.
    ///
    /// The inverse is a function of the pair (group, element): the same
    /// underlying value may belong to structurally different groups with
    /// different inverses.
    pub fn inverse(&self, e: &E) -> E {
        (self.inv)(e)
    }

    /// Shared handle on the operation closure, for constructions that
    /// reuse this group's operation (subgroups, quotients).
    pub fn op_fn(&self) -> OpFn<E> {
        self.op.clone()
    }

    /// Shared handle on the inverse closure.
    pub fn inv_fn(&self) -> InvFn<E> {
        self.inv.clone()
    }

    /// `e` raised to a non-negative power, by square-and-multiply.
    pub fn power(&self, e: &E, exp: u64) -> E {
        let mut base = e.clone();
        let mut result = self.identity.clone();

        let mut k = exp;
        while k > 0 {
            if k & 1 == 1 {
                result = self.op(&result, &base);
            }
            base = self.op(&base, &base);
            k >>= 1;
        }
        result
    }

    /// The least `k >= 1` with `e^k = identity`.
    ///
    /// Terminates for every member of a finite group; calling it with an
    /// element outside the group is a caller bug and may not terminate.
    pub fn element_order(&self, e: &E) -> usize {
        let mut acc = e.clone();
        let mut k = 1;
        while acc != self.identity {
            acc = self.op(&acc, e);
            k += 1;
        }
        k
    }

    /// Whether every pair of elements commutes.
    pub fn is_abelian(&self) -> bool {
        self.elements
            .iter()
            .all(|a| self.elements.iter().all(|b| self.op(a, b) == self.op(b, a)))
    }

    /// Whether some single element generates the whole group.
    pub fn is_cyclic(&self) -> bool {
        let n = self.order();
        self.elements.iter().any(|e| self.element_order(e) == n)
    }

    /// The exponent of the group: the least common multiple of all element
    /// orders.
    pub fn exponent(&self) -> u64 {
        self.elements
            .iter()
            .fold(1, |acc, e| lcm(acc, self.element_order(e) as u64))
    }

    /// Whether `other` has exactly the same element set and identity.
    ///
    /// Operations are closures and are deliberately not comparable; this
    /// element-set comparison is what homomorphism composition checks.
    /// O(n) set comparison.
    pub fn has_same_elements(&self, other: &Group<E>) -> bool {
        self.identity == other.identity && self.elements == other.elements
    }

    /// A uniformly random element.
    ///
    /// O(n) walk; the element set has no random access.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> E {
        let idx = rng.gen_range(0..self.elements.len());
        for (i, e) in self.elements.iter().enumerate() {
            if i == idx {
                return e.clone();
            }
        }
        self.identity.clone()
    }
}

impl<E: Element> fmt::Debug for Group<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("order", &self.order())
            .field("identity", &self.identity)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
