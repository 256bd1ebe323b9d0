use core::fmt;

use crate::structures::perm::PermutationError;

/// Errors reported by group construction and analysis.
///
/// Every variant is fatal for the operation that produced it: nothing in
/// this crate retries or repairs a violated invariant. Exact discrete
/// mathematics has no use for partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// A construction parameter (modulus, degree, side count) was outside
    /// its valid range.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// An element set claimed to be a subgroup does not contain the
    /// parent's identity.
    MissingIdentity,
    /// An element set is not closed under the group operation.
    NotClosed,
    /// An element set does not contain the inverse of one of its members.
    InverseMissing,
    /// A claimed subgroup contains elements outside its parent group.
    NotSubset,
    /// Quotient construction was attempted over a subgroup that is not
    /// normal in its parent; the coset operation would be ill-defined.
    NotNormal,
    /// The index `|G| / |H|` was requested for a subgroup whose order does
    /// not divide the parent's.
    IndexUndefined {
        /// Order of the parent group.
        parent_order: usize,
        /// Order of the subgroup.
        subgroup_order: usize,
    },
    /// An exhaustive search was requested on a group above the configured
    /// size ceiling.
    SizeLimit {
        /// Order of the group the search was asked about.
        order: usize,
        /// The configured ceiling.
        limit: usize,
    },
    /// Two homomorphisms were composed but the target of the first does
    /// not share an element set with the source of the second.
    CompositionMismatch,
    /// `|source| / |kernel| != |image|` for a valid homomorphism. This
    /// cannot arise from caller input; it indicates a defect in the kernel
    /// or image computation itself.
    InconsistentOrders {
        /// Order of the homomorphism's source group.
        source: usize,
        /// Order of the computed kernel.
        kernel: usize,
        /// Order of the computed image.
        image: usize,
    },
    /// An invalid permutation mapping was supplied.
    Permutation(PermutationError),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::InvalidParameter { name, value } => {
                write!(f, "invalid {}: {}", name, value)
            }
            GroupError::MissingIdentity => write!(f, "element set does not contain the identity"),
            GroupError::NotClosed => write!(f, "element set is not closed under the operation"),
            GroupError::InverseMissing => {
                write!(f, "element set does not contain all of its inverses")
            }
            GroupError::NotSubset => write!(f, "element set is not a subset of the parent group"),
            GroupError::NotNormal => write!(f, "subgroup is not normal in its parent"),
            GroupError::IndexUndefined {
                parent_order,
                subgroup_order,
            } => write!(
                f,
                "subgroup order {} does not divide parent order {}",
                subgroup_order, parent_order
            ),
            GroupError::SizeLimit { order, limit } => write!(
                f,
                "group of order {} exceeds the search ceiling of {}",
                order, limit
            ),
            GroupError::CompositionMismatch => {
                write!(f, "homomorphisms do not compose: target and source differ")
            }
            GroupError::InconsistentOrders {
                source,
                kernel,
                image,
            } => write!(
                f,
                "kernel/image orders are inconsistent: |source| = {}, |kernel| = {}, |image| = {}",
                source, kernel, image
            ),
            GroupError::Permutation(e) => write!(f, "invalid permutation: {}", e),
        }
    }
}

impl From<PermutationError> for GroupError {
    fn from(e: PermutationError) -> Self {
        GroupError::Permutation(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GroupError {}

/// Result alias used throughout the crate.
pub type GroupResult<T> = Result<T, GroupError>;
