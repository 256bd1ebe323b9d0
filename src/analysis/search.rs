//! Subgroup enumeration.
//!
//! Two interchangeable algorithms produce the same answer on small
//! groups: a brute-force subset sweep that is exponential but fully
//! rigorous, and a generator-driven sweep that closes every small
//! combination of elements. Both are bounded by explicit, caller-passed
//! [`SearchLimits`]; there is no global configuration.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use itertools::Itertools;

use crate::algebra::element::Element;
use crate::algebra::error::{GroupError, GroupResult};
use crate::analysis::structure::is_normal;
use crate::structures::closure;
use crate::structures::group::Group;
use crate::structures::subgroup::Subgroup;

/// Size ceilings for the exhaustive searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Largest group order [`all_subgroups`] (and everything built on
    /// it) will accept.
    pub max_order: usize,
    /// Largest group order [`all_subgroups_brute_force`] will accept;
    /// the subset sweep is exponential in it.
    pub brute_force_max: usize,
    /// Orders up to this threshold get generator seeds of up to four
    /// elements; larger groups are capped at two.
    pub small_threshold: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_order: 1024,
            brute_force_max: 20,
            small_threshold: 24,
        }
    }
}

/// All subgroups found by the generator-driven sweep, sorted by order.
///
/// Every combination of up to `k` elements is closed through the closure
/// engine and deduplicated by element-set equality; `k` is 4 for groups
/// of order at most `limits.small_threshold` and 2 above it. The trivial
/// subgroup and the full group are always included.
///
/// Every subgroup is generated by some subset of its own elements, so
/// the sweep misses nothing that is generated by `k` or fewer elements.
/// Subgroups that need larger minimal generating sets can be missed on
/// groups above the threshold; that incompleteness is deliberate, and
/// [`all_subgroups_brute_force`] is the rigorous fallback on small
/// groups.
///
/// # Errors
///
/// [`GroupError::SizeLimit`] when the group order exceeds
/// `limits.max_order`.
pub fn all_subgroups<E: Element>(
    group: &Group<E>,
    limits: &SearchLimits,
) -> GroupResult<Vec<Subgroup<E>>> {
    let order = group.order();
    if order > limits.max_order {
        return Err(GroupError::SizeLimit {
            order,
            limit: limits.max_order,
        });
    }
    let seed_cap = if order <= limits.small_threshold { 4 } else { 2 };
    let cap = seed_cap.min(order);

    let op = group.op_fn();
    let inv = group.inv_fn();
    let elements: Vec<E> = group.iter().cloned().collect();

    let mut seen: BTreeSet<BTreeSet<E>> = BTreeSet::new();
    let mut subgroups: Vec<Subgroup<E>> = Vec::new();

    let trivial = Subgroup::trivial(group);
    seen.insert(trivial.elements().clone());
    subgroups.push(trivial);
    if seen.insert(group.elements().clone()) {
        subgroups.push(Subgroup::full(group));
    }

    for size in 1..=cap {
        for combination in elements.iter().cloned().combinations(size) {
            let closed = closure::generate(combination, group.identity(), &*op, &*inv);
            if seen.insert(closed.clone()) {
                subgroups.push(Subgroup::from_closed_set(group, closed));
            }
        }
    }

    sort_by_order(&mut subgroups);
    Ok(subgroups)
}

/// All subgroups, by testing every subset of the element set.
///
/// Correct for every finite group but exponential: subsets not
/// containing the identity or whose size does not divide the group
/// order (Lagrange) are skipped, every other subset is tested for
/// closure and inverse closure.
///
/// # Errors
///
/// [`GroupError::SizeLimit`] when the group order exceeds
/// `limits.brute_force_max`.
pub fn all_subgroups_brute_force<E: Element>(
    group: &Group<E>,
    limits: &SearchLimits,
) -> GroupResult<Vec<Subgroup<E>>> {
    let order = group.order();
    if order > limits.brute_force_max {
        return Err(GroupError::SizeLimit {
            order,
            limit: limits.brute_force_max,
        });
    }
    let elements: Vec<E> = group.iter().cloned().collect();
    let identity_bit = match elements.iter().position(|e| e == group.identity()) {
        Some(i) => i,
        None => return Err(GroupError::MissingIdentity),
    };

    let mut subgroups = Vec::new();
    for mask in 1u64..(1u64 << order) {
        if mask & (1u64 << identity_bit) == 0 {
            continue;
        }
        let size = mask.count_ones() as usize;
        if order % size != 0 {
            continue;
        }
        let subset: BTreeSet<E> = elements
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << i) != 0)
            .map(|(_, e)| e.clone())
            .collect();
        if is_subgroup_set(group, &subset) {
            subgroups.push(Subgroup::from_closed_set(group, subset));
        }
    }

    sort_by_order(&mut subgroups);
    Ok(subgroups)
}

fn is_subgroup_set<E: Element>(group: &Group<E>, set: &BTreeSet<E>) -> bool {
    set.iter().all(|a| {
        set.contains(&group.inverse(a)) && set.iter().all(|b| set.contains(&group.op(a, b)))
    })
}

fn sort_by_order<E: Element>(subgroups: &mut [Subgroup<E>]) {
    subgroups.sort_by(|a, b| {
        a.order()
            .cmp(&b.order())
            .then_with(|| a.elements().cmp(b.elements()))
    });
}

/// The maximal subgroups: proper subgroups with nothing strictly
/// between them and the whole group.
///
/// Enumerates all subgroups, discards the full group, and drops every
/// candidate strictly contained in a larger proper subgroup.
///
/// # Errors
///
/// Propagates [`GroupError::SizeLimit`] from [`all_subgroups`].
pub fn maximal_subgroups<E: Element>(
    group: &Group<E>,
    limits: &SearchLimits,
) -> GroupResult<Vec<Subgroup<E>>> {
    let proper: Vec<Subgroup<E>> = all_subgroups(group, limits)?
        .into_iter()
        .filter(|h| !h.is_full())
        .collect();
    Ok(proper
        .iter()
        .filter(|m| {
            !proper
                .iter()
                .any(|k| k.order() > m.order() && m.elements().is_subset(k.elements()))
        })
        .cloned()
        .collect())
}

/// The Frattini subgroup: the intersection of all maximal subgroups,
/// or the trivial subgroup when there are none.
///
/// # Errors
///
/// Propagates [`GroupError::SizeLimit`] from [`all_subgroups`].
pub fn frattini_subgroup<E: Element>(
    group: &Group<E>,
    limits: &SearchLimits,
) -> GroupResult<Subgroup<E>> {
    let maximal = maximal_subgroups(group, limits)?;
    let first = match maximal.first() {
        Some(m) => m,
        None => return Ok(Subgroup::trivial(group)),
    };
    let mut intersection: BTreeSet<E> = first.elements().clone();
    for m in &maximal[1..] {
        intersection = intersection
            .intersection(m.elements())
            .cloned()
            .collect();
    }
    // an intersection of subgroups is a subgroup; re-verify anyway
    Subgroup::new(group, intersection)
}

/// Whether `group` has no normal subgroup besides itself and the
/// trivial one. The trivial group is not considered simple.
///
/// # Errors
///
/// Propagates [`GroupError::SizeLimit`] from [`all_subgroups`].
pub fn is_simple<E: Element>(group: &Group<E>, limits: &SearchLimits) -> GroupResult<bool> {
    if group.order() == 1 {
        return Ok(false);
    }
    let all = all_subgroups(group, limits)?;
    Ok(all
        .iter()
        .filter(|h| !h.is_trivial() && !h.is_full())
        .all(|h| !is_normal(h)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::cyclic::cyclic;
    use crate::structures::dihedral::dihedral;
    use crate::structures::symmetric::{alternating, symmetric};

    fn element_sets<E: Element>(subgroups: &[Subgroup<E>]) -> BTreeSet<BTreeSet<E>> {
        subgroups.iter().map(|h| h.elements().clone()).collect()
    }

    #[test]
    fn cyclic_six_has_four_subgroups() {
        let c6 = cyclic(6).unwrap();
        let all = all_subgroups(&c6, &SearchLimits::default()).unwrap();
        let orders: Vec<usize> = all.iter().map(Subgroup::order).collect();
        assert_eq!(orders, alloc::vec![1, 2, 3, 6]);
    }

    #[test]
    fn both_algorithms_agree_on_small_groups() {
        let limits = SearchLimits::default();
        let c6 = cyclic(6).unwrap();
        assert_eq!(
            element_sets(&all_subgroups(&c6, &limits).unwrap()),
            element_sets(&all_subgroups_brute_force(&c6, &limits).unwrap())
        );
        let s3 = symmetric(3).unwrap();
        assert_eq!(
            element_sets(&all_subgroups(&s3, &limits).unwrap()),
            element_sets(&all_subgroups_brute_force(&s3, &limits).unwrap())
        );
        let d4 = dihedral(4).unwrap();
        assert_eq!(
            element_sets(&all_subgroups(&d4, &limits).unwrap()),
            element_sets(&all_subgroups_brute_force(&d4, &limits).unwrap())
        );
    }

    #[test]
    fn symmetric_three_has_six_subgroups() {
        let s3 = symmetric(3).unwrap();
        let all = all_subgroups(&s3, &SearchLimits::default()).unwrap();
        assert_eq!(all.len(), 6);
        let mut orders: Vec<usize> = all.iter().map(Subgroup::order).collect();
        orders.sort_unstable();
        assert_eq!(orders, alloc::vec![1, 2, 2, 2, 3, 6]);
    }

    #[test]
    fn dihedral_four_has_ten_subgroups() {
        let d4 = dihedral(4).unwrap();
        let all = all_subgroups(&d4, &SearchLimits::default()).unwrap();
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn lagrange_holds_for_every_search_result() {
        let limits = SearchLimits::default();
        for group in [symmetric(4).unwrap(), alternating(4).unwrap()] {
            for h in all_subgroups(&group, &limits).unwrap() {
                assert_eq!(group.order() % h.order(), 0);
            }
        }
    }

    #[test]
    fn search_respects_the_order_ceiling() {
        let tight = SearchLimits {
            max_order: 5,
            ..SearchLimits::default()
        };
        let c6 = cyclic(6).unwrap();
        assert_eq!(
            all_subgroups(&c6, &tight).unwrap_err(),
            GroupError::SizeLimit { order: 6, limit: 5 }
        );
    }

    #[test]
    fn brute_force_rejects_large_groups() {
        let s4 = symmetric(4).unwrap();
        assert!(matches!(
            all_subgroups_brute_force(&s4, &SearchLimits::default()),
            Err(GroupError::SizeLimit { order: 24, .. })
        ));
    }

    #[test]
    fn maximal_subgroups_of_cyclic_twelve() {
        let c12 = cyclic(12).unwrap();
        let maximal = maximal_subgroups(&c12, &SearchLimits::default()).unwrap();
        let mut orders: Vec<usize> = maximal.iter().map(Subgroup::order).collect();
        orders.sort_unstable();
        assert_eq!(orders, alloc::vec![4, 6]);
    }

    #[test]
    fn frattini_of_cyclic_twelve_has_order_two() {
        let c12 = cyclic(12).unwrap();
        let frattini = frattini_subgroup(&c12, &SearchLimits::default()).unwrap();
        assert_eq!(frattini.order(), 2);
        assert!(frattini.contains(&6));
    }

    #[test]
    fn frattini_of_prime_order_group_is_trivial() {
        let c7 = cyclic(7).unwrap();
        let frattini = frattini_subgroup(&c7, &SearchLimits::default()).unwrap();
        assert!(frattini.is_trivial());
    }

    #[test]
    fn frattini_of_symmetric_three_is_trivial() {
        let s3 = symmetric(3).unwrap();
        let frattini = frattini_subgroup(&s3, &SearchLimits::default()).unwrap();
        assert!(frattini.is_trivial());
    }

    #[test]
    fn simplicity() {
        let limits = SearchLimits::default();
        assert!(is_simple(&cyclic(5).unwrap(), &limits).unwrap());
        assert!(!is_simple(&cyclic(6).unwrap(), &limits).unwrap());
        assert!(!is_simple(&symmetric(3).unwrap(), &limits).unwrap());
        assert!(!is_simple(&alternating(4).unwrap(), &limits).unwrap());
        assert!(!is_simple(&cyclic(1).unwrap(), &limits).unwrap());
    }
}
