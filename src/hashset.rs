//! Mutable hash set with set algebra.
//!
//! This module provides [`Set`], an unordered collection of unique elements
//! backed by a `HashMap<T, ()>`.
//!
//! # Overview
//!
//! Mutating operations ([`insert`](Set::insert), [`insert_all`](Set::insert_all),
//! [`delete`](Set::delete), [`merge`](Set::merge)) change the receiver in place
//! and return it for chaining. Algebra operations ([`union`](Set::union),
//! [`intersection`](Set::intersection), [`difference`](Set::difference))
//! never touch either operand and always return a new, independent set.
//!
//! - O(1) expected `contains`, `insert`, `delete`
//! - O(1) `len` and `is_empty`
//! - O(n + m) `union`, O(min(n, m)) `intersection`, O(n) `difference`
//!
//! # Examples
//!
//! ```rust
//! use sets::{Set, set};
//!
//! let mut set = set!["a", "b"];
//! set.insert("c").insert("d");
//!
//! assert!(set.contains(&"c"));
//! assert_eq!(set.len(), 4);
//!
//! // Pure algebra leaves both operands untouched
//! let other = set!["a", "e"];
//! let union = set.union(&other);
//! assert_eq!(union.len(), 5);
//! assert_eq!(set.len(), 4);
//! ```
//!
//! # Absent and Empty Sets
//!
//! [`Set::default`] is the zero value of the type. It does not allocate and
//! behaves exactly like a set built with [`Set::new`] for every read.
//!
//! ```rust
//! use sets::Set;
//!
//! let absent: Set<String> = Set::default();
//! let empty: Set<String> = Set::new();
//!
//! assert!(!absent.contains("anything"));
//! assert_eq!(absent.len(), 0);
//! assert_eq!(absent, empty);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Sub, SubAssign};

use crate::hasher::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// `Set` maps each element to a unit presence marker, so every element is
/// stored exactly once. Iteration order is unspecified; use
/// [`sorted_list`](crate::sorted_list) for a deterministic order.
///
/// The hash builder `S` defaults to [`DefaultHashBuilder`], which is chosen
/// by the crate's hash features.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `contains`             | O(1) expected     |
/// | `insert`               | O(1) expected     |
/// | `insert_contains`      | O(1) expected     |
/// | `delete`               | O(1) expected     |
/// | `len`                  | O(1)              |
/// | `is_empty`             | O(1)              |
/// | `union`                | O(n + m)          |
/// | `merge`                | O(m)              |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `superset_of`          | O(m)              |
///
/// # Shared Handles
///
/// Mutation goes through `&mut Set`. Several holders that need to observe
/// the same mutable set share it through `Rc<RefCell<Set<T>>>`, or through a
/// lock such as `Mutex<Set<T>>` across threads. `Set` itself does no locking.
///
/// # Examples
///
/// ```rust
/// use sets::Set;
///
/// let set: Set<i32> = [1, 2, 2, 3].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashMap<T, (), S>,
}

static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<String>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which hashes elements with `hasher`.
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements, hashing with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let set = set!["a", "b", "a"];
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// Equivalent to `self.len() == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let mut set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the elements in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let set = set![1, 2, 3];
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.inner.keys(),
        }
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }
}

// =============================================================================
// Membership and Mutation
// =============================================================================

impl<T: Eq + Hash, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let set: Set<String> = ["hello".to_string()].into_iter().collect();
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Returns `true` if every given element is in the set.
    ///
    /// Vacuously `true` when no elements are given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let set = set![1, 2, 3];
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// ```
    #[must_use]
    pub fn contains_all<'a, Q, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Returns `true` if at least one given element is in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let set = set![1, 2, 3];
    /// assert!(set.contains_any(&[4, 3]));
    /// assert!(!set.contains_any(&[4, 5]));
    /// ```
    #[must_use]
    pub fn contains_any<'a, Q, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        elements.into_iter().any(|element| self.contains(element))
    }

    /// Inserts an element, doing nothing if it is already present.
    ///
    /// Returns the receiver so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert(1).insert(2).insert(1);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> &mut Self {
        self.inner.insert(element, ());
        self
    }

    /// Inserts every element of `elements`.
    ///
    /// Duplicates, whether within `elements` or already in the set, are
    /// absorbed silently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set!["a1", "a2"];
    /// set.insert_all(["a1", "a3", "a3"]);
    /// assert_eq!(set, set!["a1", "a2", "a3"]);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> &mut Self {
        self.extend(elements);
        self
    }

    /// Inserts an element and reports whether it was already present.
    ///
    /// Returns `true` if the element was in the set before this call (the
    /// call changed nothing), `false` if it was newly added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(!set.insert_contains("k1"));
    /// assert!(set.insert_contains("k1"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert_contains(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_some()
    }

    /// Removes an element if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set![1, 2];
    /// set.delete(&1).delete(&3);
    /// assert_eq!(set, set![2]);
    /// ```
    pub fn delete<Q>(&mut self, element: &Q) -> &mut Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element);
        self
    }

    /// Removes every given element that is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set![1, 2, 3, 4];
    /// set.delete_all(&[1, 3, 5]);
    /// assert_eq!(set, set![2, 4]);
    /// ```
    pub fn delete_all<'a, Q, I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        for element in elements {
            self.inner.remove(element);
        }
        self
    }

    /// Retains only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// Every set is a superset of the empty set, including the empty set
    /// itself.
    ///
    /// # Complexity
    ///
    /// O(m) where m = `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::{Set, set};
    ///
    /// let superset = set!["a", "b", "c", "d"];
    /// assert!(superset.superset_of(&set!["a", "b"]));
    /// assert!(!set!["a", "b"].superset_of(&superset));
    ///
    /// let empty: Set<&str> = Set::new();
    /// assert!(empty.superset_of(&Set::new()));
    /// ```
    #[must_use]
    pub fn superset_of(&self, other: &Self) -> bool {
        other.subset_of(self)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn subset_of(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// assert!(set![1, 2].is_disjoint(&set![3, 4]));
    /// assert!(!set![1, 2].is_disjoint(&set![2, 3]));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Iterate over the smaller set
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        !smaller.iter().any(|element| larger.contains(element))
    }

    /// Removes every element of `other` from `self`, in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// set.difference_in_place(&set![2, 4]);
    /// assert_eq!(set, set![1, 3]);
    /// ```
    pub fn difference_in_place(&mut self, other: &Self) -> &mut Self {
        if other.len() < self.len() {
            for element in other {
                self.inner.remove(element);
            }
        } else {
            self.retain(|element| !other.contains(element));
        }
        self
    }

    /// Keeps only the elements that are also in `other`, in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// set.intersect_in_place(&set![2, 3, 4]);
    /// assert_eq!(set, set![2, 3]);
    /// ```
    pub fn intersect_in_place(&mut self, other: &Self) -> &mut Self {
        self.retain(|element| other.contains(element));
        self
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T: Eq + Hash + Clone, S: BuildHasher> Set<T, S> {
    /// Adds every element of `other` to `self`, in place.
    ///
    /// The element content afterwards equals `self.union(other)`, but unlike
    /// [`union`](Self::union) this mutates and returns the receiver. `other`
    /// is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(m) where m = `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let mut set = set!["a1", "a2"];
    /// let other = set!["a3", "a4"];
    ///
    /// set.merge(&other);
    /// assert_eq!(set, set!["a1", "a2", "a3", "a4"]);
    /// assert_eq!(other.len(), 2);
    /// ```
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        for element in other {
            if !self.inner.contains_key(element) {
                self.inner.insert(element.clone(), ());
            }
        }
        self
    }

    /// Returns the elements present only in `self` and only in `other`.
    ///
    /// The first vector holds elements of `self` missing from `other`, the
    /// second holds elements of `other` missing from `self`. Order within
    /// each vector is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let (left, right) = set![1, 2].diff(&set![2, 3]);
    /// assert_eq!(left, vec![1]);
    /// assert_eq!(right, vec![3]);
    /// ```
    #[must_use]
    pub fn diff(&self, other: &Self) -> (Vec<T>, Vec<T>) {
        let only_in = |source: &Self, excluded: &Self| -> Vec<T> {
            source
                .iter()
                .filter(|element| !excluded.contains(*element))
                .cloned()
                .collect()
        };
        (only_in(self, other), only_in(other, self))
    }

    /// Returns every element as a vector in unspecified order.
    #[must_use]
    pub fn unsorted_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Set<T, S> {
    /// Creates an empty set that shares `self`'s hash builder.
    fn empty_like(&self, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, self.inner.hasher().clone())
    }

    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set. Neither
    /// operand is modified.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let set_a = set!["a", "b", "c", "d"];
    /// let set_b = set!["a", "b", "e"];
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union, set!["a", "b", "c", "d", "e"]);
    /// assert_eq!(union, set_b.union(&set_a));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = self.empty_like(self.len() + other.len());
        result.extend(larger.iter().cloned());
        result.merge(smaller);
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let intersection = set!["a", "b", "d"].intersection(&set!["a", "b", "c"]);
    /// assert_eq!(intersection, set!["a", "b"]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = self.empty_like(smaller.len());
        for element in smaller {
            if larger.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in `other`.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let difference = set!["a", "b", "c", "d"].difference(&set!["a", "b", "e"]);
    /// assert_eq!(difference, set!["c", "d"]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.empty_like(self.len());
        for element in self {
            if !other.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set;
    ///
    /// let symmetric = set![1, 2, 3].symmetric_difference(&set![2, 3, 4]);
    /// assert_eq!(symmetric, set![1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        // (A - B) ∪ (B - A)
        let mut result = self.difference(other);
        for element in other {
            if !self.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(elements);
        set
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: Eq + Hash + Copy + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S1, S2> PartialEq<Set<T, S2>> for Set<T, S1>
where
    T: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &Set<T, S2>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitOr<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns `self.union(other)`.
    fn bitor(self, other: &Set<T, S>) -> Set<T, S> {
        self.union(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitAnd<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns `self.intersection(other)`.
    fn bitand(self, other: &Set<T, S>) -> Set<T, S> {
        self.intersection(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Sub<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns `self.difference(other)`.
    fn sub(self, other: &Set<T, S>) -> Set<T, S> {
        self.difference(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitXor<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns `self.symmetric_difference(other)`.
    fn bitxor(self, other: &Set<T, S>) -> Set<T, S> {
        self.symmetric_difference(other)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher> BitOrAssign<&Set<T, S>> for Set<T, S> {
    fn bitor_assign(&mut self, other: &Self) {
        self.merge(other);
    }
}

impl<T: Eq + Hash, S: BuildHasher> BitAndAssign<&Set<T, S>> for Set<T, S> {
    fn bitand_assign(&mut self, other: &Self) {
        self.intersect_in_place(other);
    }
}

impl<T: Eq + Hash, S: BuildHasher> SubAssign<&Set<T, S>> for Set<T, S> {
    fn sub_assign(&mut self, other: &Self) {
        self.difference_in_place(other);
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for Set<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> SetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

/// Upper bound on capacity pre-allocated from an untrusted size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOCATED_ELEMENTS);
        let mut set = Set::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
