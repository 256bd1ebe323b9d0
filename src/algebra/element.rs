use alloc::rc::Rc;
use core::fmt::Debug;

/// Marker trait for values usable as group elements.
///
/// Elements are opaque, immutable and equality-comparable. The `Ord` bound
/// gives every element domain a canonical enumeration order, which the rest
/// of the crate relies on for deterministic iteration and for structural
/// set equality (subgroup deduplication, coset identity).
///
/// An element never carries a reference to the group it belongs to; the
/// inverse of an element is always computed through the group it is used
/// with (see [`crate::Group::inverse`]). Elements are owned values
/// (`'static`): operation closures capture them and outlive any borrow.
pub trait Element: Clone + Ord + Debug + 'static {}

impl<T: Clone + Ord + Debug + 'static> Element for T {}

/// Shared binary operation over a fixed element domain.
///
/// The function must be pure, total and closed: for `a`, `b` in the domain,
/// `op(a, b)` is also in the domain. Associativity is assumed, not checked
/// per call; [`crate::analysis::verify::verify`] checks it exhaustively.
pub type OpFn<E> = Rc<dyn Fn(&E, &E) -> E>;

/// Shared inverse function over a fixed element domain.
pub type InvFn<E> = Rc<dyn Fn(&E) -> E>;

/// Shared element mapping between two domains, as carried by
/// [`crate::Homomorphism`].
pub type MapFn<A, B> = Rc<dyn Fn(&A) -> B>;
