//! Derived computations over already-constructed groups: subgroup
//! search, structural analyzers, homomorphism analysis and the axiom
//! verifier. Everything here reads its inputs immutably and returns
//! fresh values.

pub mod homomorphism;
pub mod search;
pub mod structure;
pub mod verify;
