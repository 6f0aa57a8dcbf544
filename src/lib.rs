//! # sets
//!
//! A generic, unordered set with membership testing, in-place mutation,
//! the standard set algebra and deterministic sorted enumeration.
//!
//! ## Overview
//!
//! - **[`Set`]**: unique elements of any `Eq + Hash` type, backed by a hash map
//!   to a unit marker
//! - **Algebra**: [`union`](Set::union), [`intersection`](Set::intersection),
//!   [`difference`](Set::difference) return new sets and never modify their
//!   operands; [`merge`](Set::merge) is the in-place union
//! - **Sorted enumeration**: [`sorted_list`] for `Ord` element types
//! - **Map-of-sets helpers**: [`keyed`]
//! - **Algebraic structure**: [`algebra::Semigroup`] and [`algebra::Monoid`]
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`] as a sequence
//! - `rayon`: parallel [`par_sorted_list`]
//! - `fxhash`: `rustc_hash::FxBuildHasher` as [`DefaultHashBuilder`]
//! - `ahash`: `ahash::RandomState` as [`DefaultHashBuilder`]
//! - `full`: `serde` and `rayon`
//!
//! ## Example
//!
//! ```rust
//! use sets::{set, sorted_list};
//!
//! let mut seen = set!["a", "b", "c", "d"];
//! assert!(!seen.insert_contains("e"));
//! assert!(seen.insert_contains("e"));
//!
//! let other = set!["a", "b", "x"];
//! assert_eq!(sorted_list(&seen.difference(&other)), vec!["c", "d", "e"]);
//! assert_eq!(sorted_list(&seen.intersection(&other)), vec!["a", "b"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sets::prelude::*;
///
/// let set: Set<u8> = set![1, 2];
/// assert_eq!(sorted_list(&set), vec![1, 2]);
/// ```
pub mod prelude {
    pub use crate::algebra::{Monoid, Semigroup};
    pub use crate::set;
    pub use crate::{DefaultHashBuilder, Set, into_sorted_list, sorted_list};

    #[cfg(feature = "rayon")]
    pub use crate::par_sorted_list;
}

#[macro_use]
mod macros;

pub mod algebra;
mod hasher;
mod hashset;
pub mod keyed;
mod sorted;

pub use hasher::DefaultHashBuilder;
pub use hashset::{IntoIter, Iter, Set};
pub use sorted::{into_sorted_list, sorted_list};

#[cfg(feature = "rayon")]
pub use sorted::par_sorted_list;
