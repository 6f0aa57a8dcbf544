//! Semigroup and monoid structure of sets under union.
//!
//! A semigroup is a type with an associative binary operation; a monoid is a
//! semigroup with an identity element. [`Set`] is a monoid where `combine`
//! is union and `empty` is the empty set.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))   // associativity
//! Set::empty().combine(a) == a                           // left identity
//! a.combine(Set::empty()) == a                           // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sets::algebra::{Monoid, Semigroup};
//! use sets::{Set, set};
//!
//! let combined = set![1, 2].combine(set![2, 3]);
//! assert_eq!(combined, set![1, 2, 3]);
//!
//! let all: Set<i32> = Set::combine_all(vec![set![1], set![2], set![3]]);
//! assert_eq!(all, set![1, 2, 3]);
//! ```

use std::hash::{BuildHasher, Hash};

use crate::Set;

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all values in an iterator with [`combine`](Self::combine).
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns the identity for empty iterators, see
    /// [`Monoid::combine_all`].
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    #[must_use]
    fn empty() -> Self;

    /// Combines all values in an iterator, starting from [`empty`](Self::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: Eq + Hash, S: BuildHasher> Semigroup for Set<T, S> {
    /// Union of two owned sets. Elements of the smaller set move into the
    /// larger one, so nothing is cloned.
    fn combine(mut self, mut other: Self) -> Self {
        if self.len() < other.len() {
            std::mem::swap(&mut self, &mut other);
        }
        self.extend(other);
        self
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> Monoid for Set<T, S> {
    fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Tests
// =============================================================================
