//! Left-regular permutation representations (Cayley's theorem).

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::algebra::element::Element;
use crate::structures::group::Group;
use crate::structures::perm::Permutation;
use crate::structures::symmetric::permutation_ops;

/// The image of a group under its left-regular action: for each element
/// `g`, the permutation `i -> index(g · eᵢ)` over the group's canonical
/// enumeration `e₀ < e₁ < ...`, fixed once here and reused for every
/// mapping.
///
/// The resulting permutation group under composition is isomorphic to
/// the source (Cayley's theorem): the action is bijective and
/// operation-preserving by construction, so no runtime re-verification
/// is performed. [`crate::analysis::homomorphism::cayley_embedding`]
/// packages the same action as an explicit homomorphism.
///
/// # Example
///
/// ```
/// use gruppe::{cayley_representation, dihedral};
///
/// let d4 = dihedral(4).unwrap();
/// let image = cayley_representation(&d4);
/// assert_eq!(image.order(), d4.order());
/// ```
pub fn cayley_representation<E: Element>(group: &Group<E>) -> Group<Permutation> {
    let enumeration: Vec<&E> = group.iter().collect();
    let index: BTreeMap<&E, usize> = enumeration
        .iter()
        .enumerate()
        .map(|(i, e)| (*e, i))
        .collect();

    let permutations: BTreeSet<Permutation> = enumeration
        .iter()
        .map(|&g| {
            let images: Vec<usize> = enumeration
                .iter()
                .map(|&e| index[&group.op(g, e)])
                .collect();
            Permutation::from_images_unchecked(images)
        })
        .collect();

    let (op, inv) = permutation_ops();
    Group::from_parts(
        permutations,
        Permutation::identity(group.order()),
        op,
        inv,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::cyclic::cyclic;
    use crate::structures::dihedral::dihedral;
    use crate::structures::symmetric::symmetric;

    #[test]
    fn representation_preserves_order() {
        let c6 = cyclic(6).unwrap();
        assert_eq!(cayley_representation(&c6).order(), 6);
        let s3 = symmetric(3).unwrap();
        assert_eq!(cayley_representation(&s3).order(), 6);
        let d4 = dihedral(4).unwrap();
        assert_eq!(cayley_representation(&d4).order(), 8);
    }

    #[test]
    fn identity_maps_to_identity_permutation() {
        let c4 = cyclic(4).unwrap();
        let image = cayley_representation(&c4);
        assert!(image.contains(&Permutation::identity(4)));
        assert_eq!(*image.identity(), Permutation::identity(4));
    }

    #[test]
    fn cyclic_representation_is_cyclic() {
        let c5 = cyclic(5).unwrap();
        let image = cayley_representation(&c5);
        assert!(image.is_cyclic());
        assert_eq!(image.exponent(), 5);
    }

    #[test]
    fn trivial_group_maps_to_degree_one_identity() {
        let c1 = cyclic(1).unwrap();
        let image = cayley_representation(&c1);
        assert_eq!(image.order(), 1);
        assert_eq!(*image.identity(), Permutation::identity(1));
    }

    #[test]
    fn operation_is_preserved() {
        let d3 = dihedral(3).unwrap();
        let enumeration: alloc::vec::Vec<_> = d3.iter().cloned().collect();
        let image = cayley_representation(&d3);
        let perm_of = |g: &crate::structures::dihedral::DihedralElement| {
            let images: alloc::vec::Vec<usize> = enumeration
                .iter()
                .map(|e| {
                    enumeration
                        .iter()
                        .position(|x| *x == d3.op(g, e))
                        .unwrap()
                })
                .collect();
            Permutation::new(images).unwrap()
        };
        for a in d3.iter() {
            for b in d3.iter() {
                let product = perm_of(&d3.op(a, b));
                assert_eq!(product, perm_of(a).compose(&perm_of(b)));
                assert!(image.contains(&product));
            }
        }
    }
}
