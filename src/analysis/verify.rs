//! Exhaustive group-axiom verification.
//!
//! Intended for test harnesses: the associativity sweep is O(n³) and is
//! never run on a hot path by this crate itself.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::algebra::element::Element;
use crate::structures::group::Group;

/// The outcome of [`verify`]: a (possibly empty) list of axiom
/// violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    violations: Vec<String>,
}

impl Verification {
    /// Whether every axiom held.
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable descriptions of every violated axiom instance.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// Exhaustively checks the group axioms on `group`: identity behavior,
/// closure, two-sided inverses, and associativity over every triple.
///
/// A group built by this crate's constructions always passes; the
/// verifier exists to vet hand-assembled groups and to catch defects in
/// custom operation closures.
///
/// # Example
///
/// ```
/// use gruppe::{cyclic, verify};
///
/// let c6 = cyclic(6).unwrap();
/// let report = verify(&c6);
/// assert!(report.ok());
/// assert!(report.violations().is_empty());
/// ```
pub fn verify<E: Element>(group: &Group<E>) -> Verification {
    let mut violations = Vec::new();
    let identity = group.identity();

    if !group.contains(identity) {
        violations.push(format!(
            "identity {:?} is not in the element set",
            identity
        ));
    }

    for a in group.iter() {
        if group.op(identity, a) != *a || group.op(a, identity) != *a {
            violations.push(format!("identity does not fix {:?}", a));
        }
        let inverse = group.inverse(a);
        if !group.contains(&inverse) {
            violations.push(format!(
                "inverse {:?} of {:?} is not in the element set",
                inverse, a
            ));
        } else if group.op(a, &inverse) != *identity || group.op(&inverse, a) != *identity {
            violations.push(format!(
                "{:?} and {:?} are not two-sided inverses",
                a, inverse
            ));
        }
    }

    for a in group.iter() {
        for b in group.iter() {
            if !group.contains(&group.op(a, b)) {
                violations.push(format!(
                    "product of {:?} and {:?} escapes the element set",
                    a, b
                ));
            }
        }
    }

    for a in group.iter() {
        for b in group.iter() {
            for c in group.iter() {
                let left = group.op(&group.op(a, b), c);
                let right = group.op(a, &group.op(b, c));
                if left != right {
                    violations.push(format!(
                        "associativity fails on ({:?}, {:?}, {:?})",
                        a, b, c
                    ));
                }
            }
        }
    }

    Verification { violations }
}
