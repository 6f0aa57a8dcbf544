//! Deterministic sorted enumeration of a [`Set`].
//!
//! [`Set`] itself only needs `Eq + Hash`. Ordering is a separate capability,
//! so the functions here are free functions with an extra `Ord` bound and
//! sets of non-orderable elements remain fully usable without them.
//!
//! ```compile_fail
//! use sets::{Set, sorted_list};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Unordered(u8);
//!
//! let set: Set<Unordered> = [Unordered(1)].into_iter().collect();
//! let _ = sorted_list(&set);
//! ```

use crate::Set;

/// Returns every element of `set` in strictly ascending order.
///
/// The result depends only on the set's contents, never on insertion order,
/// and is empty for an empty set.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```rust
/// use sets::{Set, set, sorted_list};
///
/// let forward = set!["a1", "a2", "a3"];
/// let backward = set!["a3", "a2", "a1"];
///
/// assert_eq!(sorted_list(&forward), vec!["a1", "a2", "a3"]);
/// assert_eq!(sorted_list(&forward), sorted_list(&backward));
///
/// let empty: Set<&str> = Set::new();
/// assert!(sorted_list(&empty).is_empty());
/// ```
#[must_use]
pub fn sorted_list<T, S>(set: &Set<T, S>) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut list: Vec<T> = set.iter().cloned().collect();
    // Elements are unique, so an unstable sort is deterministic
    list.sort_unstable();
    list
}

/// Consumes `set` and returns its elements in strictly ascending order.
///
/// Same ordering as [`sorted_list`] without cloning the elements.
///
/// # Examples
///
/// ```rust
/// use sets::{set, into_sorted_list};
///
/// let set = set![3, 1, 2];
/// assert_eq!(into_sorted_list(set), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn into_sorted_list<T, S>(set: Set<T, S>) -> Vec<T>
where
    T: Ord,
{
    let mut list: Vec<T> = set.into_iter().collect();
    list.sort_unstable();
    list
}

/// Returns every element of `set` in strictly ascending order, sorting in
/// parallel.
///
/// Produces exactly the same sequence as [`sorted_list`].
///
/// # Examples
///
/// ```rust
/// use sets::{Set, par_sorted_list, sorted_list};
///
/// let set: Set<u32> = (0..10_000).rev().collect();
/// assert_eq!(par_sorted_list(&set), sorted_list(&set));
/// ```
#[cfg(feature = "rayon")]
#[must_use]
pub fn par_sorted_list<T, S>(set: &Set<T, S>) -> Vec<T>
where
    T: Ord + Clone + Send,
{
    use rayon::slice::ParallelSliceMut;

    let mut list: Vec<T> = set.iter().cloned().collect();
    list.par_sort_unstable();
    list
}

// =============================================================================
// Tests
// =============================================================================
