//! Algebraic vocabulary shared by the whole crate: the element contract,
//! the shared-closure operation aliases and the error taxonomy.

pub mod element;
pub mod error;
