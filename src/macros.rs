//! Construction macro.

/// Creates a [`Set`](crate::Set) containing the distinct given elements.
///
/// `set![]` yields an empty set, which needs the element type from context.
///
/// # Examples
///
/// ```rust
/// use sets::{Set, set};
///
/// let set = set!["a", "b", "c", "a"];
/// assert_eq!(set.len(), 3);
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::Set<_>>::from([$($element),+])
    };
}
