//! Insertion of a separator between the elements of a slice or an iterator.
//!
//! The eager functions ([`intersperse`], [`intersperse_with`]) build a new `Vec` from a slice,
//! while the [`IntersperseExt`] adapters lazily intersperse any iterator, including infinite ones.

mod fallible;
mod lazy;

pub use fallible::TryIntersperse;
pub use lazy::Intersperse;

use derive_more::Display;

/// The algorithm used by [`intersperse_with`] to build its result. All strategies produce the
/// same output; [`intersperse`] always uses [`EagerStrategy::Direct`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display)]
pub enum EagerStrategy {
    /// Allocates the exact output size and only places separators in front of non-first elements.
    #[default]
    #[display("direct")]
    Direct,
    /// Pushes a separator after every element and pops the last one.
    #[display("trailing")]
    Trailing,
    /// Collects the lazy [`Intersperse`] adapter.
    #[display("lazy")]
    Lazy,
}

/// Number of elements in the result of interspersing `n` elements.
pub const fn interspersed_len(n: usize) -> usize {
    n.saturating_mul(2).saturating_sub(1)
}

/// Returns a new vector with a clone of `separator` between each pair of adjacent elements of
/// `items`. Nothing is added before the first or after the last element.
///
/// ```
/// use toolbox_collections::intersperse;
///
/// assert_eq!(intersperse(&[0, 1, 2], 42), [0, 42, 1, 42, 2]);
/// assert_eq!(intersperse(&[0], 42), [0]);
/// assert!(intersperse(&[], 42).is_empty());
/// ```
pub fn intersperse<T: Clone>(items: &[T], separator: T) -> Vec<T> {
    intersperse_direct(items, separator)
}

/// Same as [`intersperse`] with an explicit strategy.
pub fn intersperse_with<T: Clone>(items: &[T], separator: T, strategy: EagerStrategy) -> Vec<T> {
    match strategy {
        EagerStrategy::Direct => intersperse_direct(items, separator),
        EagerStrategy::Trailing => intersperse_trailing(items, separator),
        EagerStrategy::Lazy => items.iter().cloned().interspersed(separator).collect(),
    }
}

fn intersperse_direct<T: Clone>(items: &[T], separator: T) -> Vec<T> {
    let mut out = Vec::with_capacity(interspersed_len(items.len()));
    if let Some((first, rest)) = items.split_first() {
        out.push(first.clone());
        for item in rest {
            out.push(separator.clone());
            out.push(item.clone());
        }
    }
    out
}

fn intersperse_trailing<T: Clone>(items: &[T], separator: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len().saturating_mul(2));
    for item in items {
        out.push(item.clone());
        out.push(separator.clone());
    }
    out.pop();
    out
}

/// Extension trait providing the lazy intersperse adapters on every iterator.
pub trait IntersperseExt: Iterator {
    /// Lazily yields a clone of `separator` between each pair of adjacent elements.
    ///
    /// Note that the first element is pulled from `self` when the adapter is created.
    fn interspersed(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Lazily yields `Ok(separator)` between adjacent `Ok` elements and stops after the first `Err`.
    fn try_interspersed<T, E>(self, separator: T) -> TryIntersperse<Self, T>
    where
        Self: Sized + Iterator<Item = Result<T, E>>,
        T: Clone,
    {
        TryIntersperse::new(self, separator)
    }
}

impl<I: Iterator> IntersperseExt for I {}
