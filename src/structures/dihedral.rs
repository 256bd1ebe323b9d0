//! The dihedral group of polygon symmetries.

use alloc::rc::Rc;
use core::fmt;

use crate::algebra::error::{GroupError, GroupResult};
use crate::structures::group::Group;

/// A symmetry of a regular polygon, in the normal form `s^f · r^k`:
/// an optional reflection followed by a rotation.
///
/// The element does not know the polygon's side count; composition and
/// inversion are defined by the group built with [`dihedral`]. Ordering
/// lists all rotations before all reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DihedralElement {
    reflected: bool,
    rotation: u64,
}

impl DihedralElement {
    /// Number of rotation steps, `0..sides`.
    pub fn rotation(&self) -> u64 {
        self.rotation
    }

    /// Whether the symmetry includes the reflection.
    pub fn is_reflection(&self) -> bool {
        self.reflected
    }
}

impl fmt::Display for DihedralElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.reflected, self.rotation) {
            (false, 0) => write!(f, "e"),
            (false, k) => write!(f, "r{}", k),
            (true, 0) => write!(f, "s"),
            (true, k) => write!(f, "sr{}", k),
        }
    }
}

/// The dihedral group of a regular polygon with `sides` vertices:
/// `sides` rotations and `sides` reflections, order `2 * sides`.
///
/// Generated from the unit rotation `r` and the reflection `s` by the
/// closure engine, using the relation `r^k · s = s · r^(-k)`.
///
/// # Errors
///
/// [`GroupError::InvalidParameter`] when `sides` is zero.
///
/// # Example
///
/// ```
/// use gruppe::dihedral;
///
/// let d4 = dihedral(4).unwrap();
/// assert_eq!(d4.order(), 8);
/// assert!(!d4.is_abelian());
/// ```
pub fn dihedral(sides: u64) -> GroupResult<Group<DihedralElement>> {
    if sides == 0 {
        return Err(GroupError::InvalidParameter {
            name: "sides",
            value: 0,
        });
    }
    let n = sides;
    let op = Rc::new(move |a: &DihedralElement, b: &DihedralElement| {
        if b.reflected {
            // s^f r^k · s r^m = s^(f+1) r^(m-k)
            DihedralElement {
                reflected: !a.reflected,
                rotation: (n + b.rotation - a.rotation) % n,
            }
        } else {
            DihedralElement {
                reflected: a.reflected,
                rotation: (a.rotation + b.rotation) % n,
            }
        }
    });
    let inv = Rc::new(move |e: &DihedralElement| {
        if e.reflected {
            // reflections are involutions
            *e
        } else {
            DihedralElement {
                reflected: false,
                rotation: (n - e.rotation) % n,
            }
        }
    });
    let unit_rotation = DihedralElement {
        reflected: false,
        rotation: 1 % n,
    };
    let reflection = DihedralElement {
        reflected: true,
        rotation: 0,
    };
    let identity = DihedralElement {
        reflected: false,
        rotation: 0,
    };
    Ok(Group::generate(
        [unit_rotation, reflection],
        identity,
        op,
        inv,
    ))
}
