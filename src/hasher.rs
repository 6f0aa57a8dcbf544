//! Hash builder selection.
//!
//! [`Set`](crate::Set) is generic over its [`BuildHasher`](std::hash::BuildHasher),
//! and this module decides which one is used when none is named explicitly.
//!
//! | Feature  | `DefaultHashBuilder`                      |
//! |----------|-------------------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState` |
//! | `ahash`  | `ahash::RandomState`                      |
//! | `fxhash` | `rustc_hash::FxBuildHasher`               |
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` wins.

// =============================================================================
// Default Hash Builder Type Alias
// =============================================================================

/// The hash builder used by [`Set`](crate::Set) when no other is given.
///
/// With the `fxhash` feature enabled, this is `rustc_hash::FxBuildHasher`,
/// a fast non-randomized hasher suited to trusted keys.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by [`Set`](crate::Set) when no other is given.
///
/// With the `ahash` feature enabled, this is `ahash::RandomState`.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by [`Set`](crate::Set) when no other is given.
///
/// Without any hash feature this is the standard library's `RandomState`,
/// which is resistant to HashDoS.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// Tests
// =============================================================================
