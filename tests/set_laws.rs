//! Property-based tests for Set laws.
//!
//! These tests verify that Set satisfies the algebraic properties expected
//! of a set data structure.

use proptest::prelude::*;
use sets::{Set, into_sorted_list, sorted_list};
use std::collections::BTreeSet;

// =============================================================================
// Construction Law
// Description: len equals the number of distinct input values
// =============================================================================

proptest! {
    #[test]
    fn prop_len_counts_distinct_values(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let distinct: BTreeSet<i32> = elements.iter().copied().collect();
        let set: Set<i32> = elements.into_iter().collect();

        prop_assert_eq!(set.len(), distinct.len());
        prop_assert_eq!(set.is_empty(), distinct.is_empty());
    }
}

// =============================================================================
// Union Commutativity Law
// Description: A ∪ B = B ∪ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(set_a.union(&set_b), set_b.union(&set_a));
    }
}

// =============================================================================
// Union Contents Law
// Description: x ∈ A ∪ B ⇔ x ∈ A ∨ x ∈ B
// =============================================================================

proptest! {
    #[test]
    fn prop_union_contents_law(
        elements_a in prop::collection::vec(0..50_i32, 0..30),
        elements_b in prop::collection::vec(0..50_i32, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let union = set_a.union(&set_b);

        for candidate in 0..50 {
            prop_assert_eq!(
                union.contains(&candidate),
                set_a.contains(&candidate) || set_b.contains(&candidate)
            );
        }
    }
}

// =============================================================================
// Intersection Subset Law
// Description: A ∩ B ⊆ A and A ∩ B ⊆ B
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_subset_law(
        elements_a in prop::collection::vec(0..40_i32, 0..30),
        elements_b in prop::collection::vec(0..40_i32, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let intersection = set_a.intersection(&set_b);

        for element in &intersection {
            prop_assert!(set_a.contains(element));
            prop_assert!(set_b.contains(element));
        }
        prop_assert!(set_a.superset_of(&intersection));
        prop_assert!(set_b.superset_of(&intersection));
    }
}

// =============================================================================
// Difference Partition Law
// Description: (A - B) ∩ B = ∅ and (A - B) ∪ (A ∩ B) = A
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_partition_law(
        elements_a in prop::collection::vec(0..40_i32, 0..30),
        elements_b in prop::collection::vec(0..40_i32, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let difference = set_a.difference(&set_b);

        for element in &difference {
            prop_assert!(!set_b.contains(element));
        }
        prop_assert_eq!(difference.union(&set_a.intersection(&set_b)), set_a);
    }
}

// =============================================================================
// Difference In Place Law
// Description: in-place difference agrees with the pure operation
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_in_place_agrees(
        elements_a in prop::collection::vec(0..40_i32, 0..30),
        elements_b in prop::collection::vec(0..40_i32, 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        let mut in_place = set_a.clone();
        in_place.difference_in_place(&set_b);

        prop_assert_eq!(in_place, set_a.difference(&set_b));
    }
}

// =============================================================================
// Superset Empty Law
// Description: every set is a superset of ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_superset_of_empty_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: Set<i32> = elements.into_iter().collect();

        prop_assert!(set.superset_of(&Set::new()));
        prop_assert!(set.superset_of(&Set::default()));
        prop_assert!(set.superset_of(&set));
    }
}

// =============================================================================
// Equality Laws
// Description: reflexive, symmetric, and false for different lengths
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_laws(
        elements_a in prop::collection::vec(0..20_i32, 0..20),
        elements_b in prop::collection::vec(0..20_i32, 0..20)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(&set_a, &set_a.clone());
        prop_assert_eq!(set_a == set_b, set_b == set_a);
        if set_a.len() != set_b.len() {
            prop_assert_ne!(set_a, set_b);
        }
    }
}

// =============================================================================
// Merge Law
// Description: merge produces the same content as union
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_matches_union(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        let union = set_a.union(&set_b);
        let mut merged = set_a;
        merged.merge(&set_b);

        prop_assert_eq!(merged, union);
    }
}

// =============================================================================
// InsertContains Law
// Description: false on first insert, true afterwards, length unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        key: i32,
        repeats in 1..5_usize
    ) {
        let mut set: Set<i32> = elements.into_iter().filter(|element| *element != key).collect();

        prop_assert!(!set.insert_contains(key));
        let length = set.len();
        for _ in 0..repeats {
            prop_assert!(set.insert_contains(key));
            prop_assert_eq!(set.len(), length);
        }
    }
}

// =============================================================================
// Sorted Enumeration Law
// Description: same content gives the same strictly ascending sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_list_is_order_independent(elements in prop::collection::vec(any::<i16>(), 0..60)) {
        let forward: Set<i16> = elements.iter().copied().collect();
        let backward: Set<i16> = elements.iter().rev().copied().collect();

        let sorted = sorted_list(&forward);

        prop_assert_eq!(&sorted, &sorted_list(&backward));
        prop_assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(sorted, into_sorted_list(backward));
    }
}
