//! Helpers for maps whose values are sets.
//!
//! An index such as "service name to endpoints" is naturally a
//! `HashMap<K, Set<T>>`. These helpers keep such a map free of empty sets:
//! [`insert_or_new`] creates the set on first use and
//! [`delete_cleanup_last`] drops the key once its set becomes empty.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use sets::Set;
//! use sets::keyed::{delete_cleanup_last, insert_or_new};
//!
//! let mut index: HashMap<&str, Set<u16>> = HashMap::new();
//! insert_or_new(&mut index, "web", 80);
//! insert_or_new(&mut index, "web", 443);
//! assert_eq!(index["web"].len(), 2);
//!
//! delete_cleanup_last(&mut index, "web", &80);
//! delete_cleanup_last(&mut index, "web", &443);
//! assert!(!index.contains_key("web"));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::Set;

/// Inserts `element` into the set stored under `key`, creating that set if
/// the key is absent.
pub fn insert_or_new<K, T, S, M>(map: &mut HashMap<K, Set<T, S>, M>, key: K, element: T)
where
    K: Eq + Hash,
    T: Eq + Hash,
    S: BuildHasher + Default,
    M: BuildHasher,
{
    map.entry(key).or_default().insert(element);
}

/// Removes `element` from the set stored under `key`.
///
/// If that leaves the set empty, `key` is removed from `map`. Does nothing
/// when `key` is absent.
pub fn delete_cleanup_last<K, KQ, T, TQ, S, M>(
    map: &mut HashMap<K, Set<T, S>, M>,
    key: &KQ,
    element: &TQ,
) where
    K: Eq + Hash + Borrow<KQ>,
    KQ: Eq + Hash + ?Sized,
    T: Eq + Hash + Borrow<TQ>,
    TQ: Eq + Hash + ?Sized,
    S: BuildHasher,
    M: BuildHasher,
{
    let now_empty = match map.get_mut(key) {
        Some(set) => set.delete(element).is_empty(),
        None => return,
    };
    if now_empty {
        map.remove(key);
    }
}

// =============================================================================
// Tests
// =============================================================================
