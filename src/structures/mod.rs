//! Concrete group values and constructions: the `Group` type itself, the
//! closure engine that materializes element sets, the standard group
//! families, and the derived constructions (subgroups, cosets and
//! quotients, Cayley representations).

pub mod cayley;
pub mod closure;
pub mod coset;
pub mod cyclic;
pub mod dihedral;
pub mod group;
pub mod perm;
pub mod product;
pub mod subgroup;
pub mod symmetric;
