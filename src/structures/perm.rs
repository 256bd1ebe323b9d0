//! Validated permutations of `{0..n-1}`.
//!
//! `Permutation` is the element type of the symmetric and alternating
//! groups and of every Cayley representation. A mapping with a duplicate
//! or out-of-range image is rejected at construction.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Error type for permutation validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationError {
    /// An image is not a point of `{0..degree-1}`.
    ImageOutOfRange {
        /// Position of the offending image.
        index: usize,
        /// The rejected image value.
        value: usize,
        /// Number of points the mapping claims to permute.
        degree: usize,
    },
    /// The same image appears twice, so the mapping is not a bijection.
    DuplicateImage {
        /// The repeated image value.
        value: usize,
    },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermutationError::ImageOutOfRange {
                index,
                value,
                degree,
            } => write!(
                f,
                "image {} at position {} is outside 0..{}",
                value, index, degree
            ),
            PermutationError::DuplicateImage { value } => {
                write!(f, "image {} appears more than once", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PermutationError {}

/// A bijection on `{0..n-1}`, stored as its image vector.
///
/// `images[i]` is the point that `i` maps to. Composition is right to
/// left (function composition), so composing the images of two group
/// elements under a left action matches the group operation.
///
/// Ordering and hashing derive from the image vector, which gives
/// permutations the canonical enumeration order the rest of the crate
/// expects of elements.
///
/// # Example
///
/// ```
/// use gruppe::Permutation;
///
/// let swap = Permutation::new(vec![1, 0, 2]).unwrap();
/// let cycle = Permutation::new(vec![1, 2, 0]).unwrap();
/// assert_eq!(swap.apply(0), 1);
/// assert_eq!(swap.compose(&cycle), Permutation::new(vec![0, 2, 1]).unwrap());
/// assert_eq!(swap.inverse(), swap);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    /// Creates a permutation from its image vector.
    ///
    /// # Errors
    ///
    /// [`PermutationError::ImageOutOfRange`] if an image is not below the
    /// degree, [`PermutationError::DuplicateImage`] if the mapping is not
    /// injective.
    pub fn new(images: Vec<usize>) -> Result<Self, PermutationError> {
        let degree = images.len();
        let mut seen = vec![false; degree];
        for (index, &value) in images.iter().enumerate() {
            if value >= degree {
                return Err(PermutationError::ImageOutOfRange {
                    index,
                    value,
                    degree,
                });
            }
            if seen[value] {
                return Err(PermutationError::DuplicateImage { value });
            }
            seen[value] = true;
        }
        Ok(Permutation { images })
    }

    /// Constructor for images known to be a bijection (left-regular
    /// action tables, internal generator sets).
    pub(crate) fn from_images_unchecked(images: Vec<usize>) -> Self {
        Permutation { images }
    }

    /// The identity on `degree` points.
    pub fn identity(degree: usize) -> Self {
        Permutation {
            images: (0..degree).collect(),
        }
    }

    /// The permutation cycling `cycle[0] -> cycle[1] -> ... -> cycle[0]`
    /// and fixing every other point.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range or repeated cycle entries.
    pub fn from_cycle(degree: usize, cycle: &[usize]) -> Result<Self, PermutationError> {
        let mut seen = vec![false; degree];
        for (index, &value) in cycle.iter().enumerate() {
            if value >= degree {
                return Err(PermutationError::ImageOutOfRange {
                    index,
                    value,
                    degree,
                });
            }
            if seen[value] {
                return Err(PermutationError::DuplicateImage { value });
            }
            seen[value] = true;
        }
        let mut images: Vec<usize> = (0..degree).collect();
        for (index, &value) in cycle.iter().enumerate() {
            images[value] = cycle[(index + 1) % cycle.len()];
        }
        Ok(Permutation { images })
    }

    /// The transposition swapping `a` and `b`.
    ///
    /// # Errors
    ///
    /// Rejects points outside `0..degree` and `a == b` (a transposition
    /// moves two distinct points).
    pub fn transposition(degree: usize, a: usize, b: usize) -> Result<Self, PermutationError> {
        if a == b {
            return Err(PermutationError::DuplicateImage { value: a });
        }
        Permutation::from_cycle(degree, &[a, b])
    }

    /// Number of points.
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// The image of `point`. Panics if `point` is out of range.
    pub fn apply(&self, point: usize) -> usize {
        self.images[point]
    }

    /// Function composition: the permutation applying `other` first,
    /// then `self`. Both operands must have the same degree.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        assert_eq!(
            self.degree(),
            other.degree(),
            "composed permutations must have the same degree"
        );
        Permutation {
            images: other.images.iter().map(|&p| self.images[p]).collect(),
        }
    }

    /// The inverse bijection.
    pub fn inverse(&self) -> Permutation {
        let mut images = vec![0; self.images.len()];
        for (point, &image) in self.images.iter().enumerate() {
            images[image] = point;
        }
        Permutation { images }
    }

    /// Whether the permutation is a product of an even number of
    /// transpositions. Computed from the cycle decomposition: a
    /// permutation of `n` points with `c` cycles has parity `n - c`.
    pub fn is_even(&self) -> bool {
        let n = self.images.len();
        let mut visited = vec![false; n];
        let mut cycles = 0;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut point = start;
            while !visited[point] {
                visited[point] = true;
                point = self.images[point];
            }
        }
        (n - cycles) % 2 == 0
    }
}

/// Cycle notation on 1-based points, fixed points omitted; the identity
/// prints as `()`.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.images.len();
        let mut visited = vec![false; n];
        let mut wrote = false;
        for start in 0..n {
            if visited[start] || self.images[start] == start {
                visited[start] = true;
                continue;
            }
            write!(f, "({}", start + 1)?;
            visited[start] = true;
            let mut point = self.images[start];
            while point != start {
                write!(f, " {}", point + 1)?;
                visited[point] = true;
                point = self.images[point];
            }
            write!(f, ")")?;
            wrote = true;
        }
        if !wrote {
            write!(f, "()")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Permutation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.images.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Permutation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let images = Vec::<usize>::deserialize(deserializer)?;
        Permutation::new(images).map_err(serde::de::Error::custom)
    }
}
