//! Tests for sharing one Set between several holders.
//!
//! `Set` has no internal locking. These tests exercise the two external
//! arrangements it is meant to be used with: a single-thread shared handle
//! and a lock shared across threads.

use parking_lot::Mutex;
use rstest::rstest;
use sets::{Set, sorted_list};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_shared_handle_observes_mutation() {
    let owner = Rc::new(RefCell::new(Set::new()));
    let observer = Rc::clone(&owner);

    owner.borrow_mut().insert("a").insert("b");

    assert!(observer.borrow().contains(&"a"));
    assert_eq!(observer.borrow().len(), 2);

    observer.borrow_mut().delete(&"a");
    assert!(!owner.borrow().contains(&"a"));
}

#[rstest]
fn test_reads_do_not_mutate_shared_set() {
    let shared = Rc::new(RefCell::new(Set::from([1, 2, 3])));
    let other = Set::from([3, 4]);

    let union = shared.borrow().union(&other);
    let intersection = shared.borrow().intersection(&other);

    assert_eq!(union.len(), 4);
    assert_eq!(intersection.len(), 1);
    assert_eq!(*shared.borrow(), Set::from([1, 2, 3]));
}

#[rstest]
fn test_locked_set_across_threads() {
    const THREADS: u32 = 8;
    const PER_THREAD: u32 = 250;

    let shared = Arc::new(Mutex::new(Set::new()));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_index| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for offset in 0..PER_THREAD {
                    shared.lock().insert(thread_index * PER_THREAD + offset);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let set = shared.lock();
    assert_eq!(set.len(), (THREADS * PER_THREAD) as usize);
    assert_eq!(sorted_list(&*set).first(), Some(&0));
}

#[rstest]
fn test_insert_contains_under_lock_reports_single_winner() {
    let shared = Arc::new(Mutex::new(Set::new()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.lock().insert_contains("key"))
        })
        .collect();

    let newly_added = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .filter(|already_present| !already_present)
        .count();

    assert_eq!(newly_added, 1);
}
