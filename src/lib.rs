#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algebra;
pub mod analysis;
pub mod structures;
pub mod utils;

pub use algebra::element::{Element, InvFn, MapFn, OpFn};
pub use algebra::error::{GroupError, GroupResult};

pub use analysis::homomorphism::{
    cayley_embedding, natural_projection, sign_homomorphism, Homomorphism,
};
pub use analysis::search::{
    all_subgroups, all_subgroups_brute_force, frattini_subgroup, is_simple, maximal_subgroups,
    SearchLimits,
};
pub use analysis::structure::{
    center, centralizer, class_equation, commutator_subgroup, conjugacy_classes, is_normal,
    normalizer, ConjugacyClass,
};
pub use analysis::verify::{verify, Verification};

pub use structures::cayley::cayley_representation;
pub use structures::coset::{left_cosets, quotient_group, right_cosets, Coset, QuotientGroup};
pub use structures::cyclic::cyclic;
pub use structures::dihedral::{dihedral, DihedralElement};
pub use structures::group::Group;
pub use structures::perm::{Permutation, PermutationError};
pub use structures::product::direct_product;
pub use structures::subgroup::Subgroup;
pub use structures::symmetric::{alternating, symmetric};

pub use utils::{factorial, gcd, lcm};
