//! Structural analyzers: normality, normalizer and centralizer,
//! conjugacy classes, center, commutator subgroup.
//!
//! Every function reads its input group immutably and returns a freshly
//! constructed value.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::algebra::element::Element;
use crate::structures::closure;
use crate::structures::group::Group;
use crate::structures::subgroup::Subgroup;

/// `x · g · x⁻¹`.
fn conjugate<E: Element>(group: &Group<E>, x: &E, g: &E) -> E {
    group.op(&group.op(x, g), &group.inverse(x))
}

/// The image of the subgroup under conjugation by `x`.
fn conjugated_set<E: Element>(subgroup: &Subgroup<E>, x: &E) -> BTreeSet<E> {
    let parent = subgroup.parent();
    subgroup
        .elements()
        .iter()
        .map(|h| conjugate(parent, x, h))
        .collect()
}

/// Closes a filtered element set through the closure engine and wraps it
/// as a subgroup of `parent`.
///
/// The analyzers below filter parent elements by a predicate; each
/// filtered set is provably a subgroup already, but membership filtering
/// alone does not establish that, so the result is re-closed.
pub(crate) fn close_in_parent<E, I>(parent: &Group<E>, seed: I) -> Subgroup<E>
where
    E: Element,
    I: IntoIterator<Item = E>,
{
    let op = parent.op_fn();
    let inv = parent.inv_fn();
    let elements = closure::generate(seed, parent.identity(), &*op, &*inv);
    Subgroup::from_closed_set(parent, elements)
}

/// Whether conjugation by every parent element maps the subgroup onto
/// itself (set equality, not elementwise fixing).
pub fn is_normal<E: Element>(subgroup: &Subgroup<E>) -> bool {
    let parent = subgroup.parent();
    parent
        .iter()
        .all(|x| conjugated_set(subgroup, x) == *subgroup.elements())
}

/// The normalizer: parent elements whose conjugation fixes the subgroup
/// as a set. Always contains the subgroup itself.
pub fn normalizer<E: Element>(subgroup: &Subgroup<E>) -> Subgroup<E> {
    let parent = subgroup.parent();
    let fixing: Vec<E> = parent
        .iter()
        .filter(|&x| conjugated_set(subgroup, x) == *subgroup.elements())
        .cloned()
        .collect();
    close_in_parent(parent, fixing)
}

/// The centralizer: parent elements commuting with every subgroup
/// element.
pub fn centralizer<E: Element>(subgroup: &Subgroup<E>) -> Subgroup<E> {
    let parent = subgroup.parent();
    let commuting: Vec<E> = parent
        .iter()
        .filter(|&x| {
            subgroup
                .elements()
                .iter()
                .all(|h| parent.op(x, h) == parent.op(h, x))
        })
        .cloned()
        .collect();
    close_in_parent(parent, commuting)
}

/// One orbit of the conjugation relation `g ~ xgx⁻¹`.
///
/// Classes partition the parent's element set; every class size divides
/// the group order (orbit-stabilizer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugacyClass<E: Element> {
    representative: E,
    elements: BTreeSet<E>,
}

impl<E: Element> ConjugacyClass<E> {
    /// The element whose orbit this class is.
    pub fn representative(&self) -> &E {
        &self.representative
    }

    /// The class members.
    pub fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.elements.len()
    }
}

/// The conjugacy classes of `group`, in canonical order of their
/// representatives. The identity's singleton class comes first.
///
/// Each round picks the least unclassified element, computes its full
/// conjugation orbit, and removes the orbit from the pool.
pub fn conjugacy_classes<E: Element>(group: &Group<E>) -> Vec<ConjugacyClass<E>> {
    let mut pool: BTreeSet<E> = group.elements().clone();
    let mut classes = Vec::new();
    while let Some(representative) = pool.iter().next().cloned() {
        let elements: BTreeSet<E> = group
            .iter()
            .map(|x| conjugate(group, x, &representative))
            .collect();
        for member in &elements {
            pool.remove(member);
        }
        classes.push(ConjugacyClass {
            representative,
            elements,
        });
    }
    classes
}

/// Class sizes in class order. The sizes sum to the group order.
pub fn class_equation<E: Element>(group: &Group<E>) -> Vec<usize> {
    conjugacy_classes(group)
        .iter()
        .map(ConjugacyClass::size)
        .collect()
}

/// The center: elements commuting with the whole group. Equivalently,
/// the union of the singleton conjugacy classes.
pub fn center<E: Element>(group: &Group<E>) -> Subgroup<E> {
    let central: Vec<E> = group
        .iter()
        .filter(|&x| group.iter().all(|y| group.op(x, y) == group.op(y, x)))
        .cloned()
        .collect();
    close_in_parent(group, central)
}

/// The commutator subgroup: the closure of all `a⁻¹b⁻¹ab`.
pub fn commutator_subgroup<E: Element>(group: &Group<E>) -> Subgroup<E> {
    let mut commutators: BTreeSet<E> = BTreeSet::new();
    for a in group.iter() {
        for b in group.iter() {
            let inverses = group.op(&group.inverse(a), &group.inverse(b));
            commutators.insert(group.op(&inverses, &group.op(a, b)));
        }
    }
    close_in_parent(group, commutators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::cyclic::cyclic;
    use crate::structures::dihedral::dihedral;
    use crate::structures::perm::Permutation;
    use crate::structures::symmetric::{alternating, symmetric};

    #[test]
    fn alternating_is_normal_in_symmetric() {
        let s3 = symmetric(3).unwrap();
        let a3 = Subgroup::new(&s3, alternating(3).unwrap().elements().clone()).unwrap();
        assert!(is_normal(&a3));
    }

    #[test]
    fn transposition_subgroup_is_not_normal() {
        let s3 = symmetric(3).unwrap();
        let swap = Permutation::transposition(3, 0, 1).unwrap();
        let h = Subgroup::generated(&s3, [swap]).unwrap();
        assert!(!is_normal(&h));
    }

    #[test]
    fn every_subgroup_of_an_abelian_group_is_normal() {
        let c12 = cyclic(12).unwrap();
        for g in c12.iter() {
            let h = Subgroup::generated(&c12, [*g]).unwrap();
            assert!(is_normal(&h));
        }
    }

    #[test]
    fn normalizer_of_non_normal_subgroup_is_itself() {
        let s3 = symmetric(3).unwrap();
        let swap = Permutation::transposition(3, 0, 1).unwrap();
        let h = Subgroup::generated(&s3, [swap]).unwrap();
        let n = normalizer(&h);
        assert_eq!(n.elements(), h.elements());
    }

    #[test]
    fn normalizer_of_normal_subgroup_is_the_parent() {
        let s3 = symmetric(3).unwrap();
        let a3 = Subgroup::new(&s3, alternating(3).unwrap().elements().clone()).unwrap();
        assert_eq!(normalizer(&a3).order(), 6);
    }

    #[test]
    fn centralizer_in_abelian_group_is_everything() {
        let c8 = cyclic(8).unwrap();
        let h = Subgroup::generated(&c8, [2]).unwrap();
        assert_eq!(centralizer(&h).order(), 8);
    }

    #[test]
    fn symmetric_three_has_three_classes() {
        let s3 = symmetric(3).unwrap();
        let classes = conjugacy_classes(&s3);
        assert_eq!(classes.len(), 3);
        let mut sizes: Vec<usize> = classes.iter().map(ConjugacyClass::size).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, alloc::vec![1, 2, 3]);
    }

    #[test]
    fn classes_partition_the_group() {
        let d4 = dihedral(4).unwrap();
        let classes = conjugacy_classes(&d4);
        let mut total = 0;
        let mut union: BTreeSet<_> = BTreeSet::new();
        for class in &classes {
            total += class.size();
            union.extend(class.elements().iter().cloned());
            assert!(class.elements().contains(class.representative()));
        }
        assert_eq!(total, d4.order());
        assert_eq!(union, *d4.elements());
    }

    #[test]
    fn identity_class_comes_first() {
        let s3 = symmetric(3).unwrap();
        let classes = conjugacy_classes(&s3);
        assert_eq!(classes[0].representative(), s3.identity());
        assert_eq!(classes[0].size(), 1);
    }

    #[test]
    fn class_equation_sums_to_order() {
        for group in [dihedral(4).unwrap(), dihedral(5).unwrap()] {
            let sizes = class_equation(&group);
            assert_eq!(sizes.iter().sum::<usize>(), group.order());
        }
    }

    #[test]
    fn center_of_square_symmetries() {
        let d4 = dihedral(4).unwrap();
        let z = center(&d4);
        assert_eq!(z.order(), 2);
        assert!(z.contains(d4.identity()));
        let half_turn = d4
            .iter()
            .find(|e| !e.is_reflection() && e.rotation() == 2)
            .cloned();
        assert!(half_turn.map(|e| z.contains(&e)).unwrap_or(false));
    }

    #[test]
    fn center_of_abelian_group_is_the_whole_group() {
        let c9 = cyclic(9).unwrap();
        assert_eq!(center(&c9).order(), 9);
    }

    #[test]
    fn commutator_subgroup_of_symmetric_three() {
        let s3 = symmetric(3).unwrap();
        let derived = commutator_subgroup(&s3);
        assert_eq!(derived.order(), 3);
        assert!(derived.elements().iter().all(Permutation::is_even));
    }

    #[test]
    fn commutator_subgroup_of_abelian_group_is_trivial() {
        let c6 = cyclic(6).unwrap();
        assert!(commutator_subgroup(&c6).is_trivial());
    }
}
