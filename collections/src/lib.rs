//! Interspersing a separator between the elements of slices and iterators.
//!
//! ```
//! use toolbox_collections::{intersperse, IntersperseExt};
//!
//! assert_eq!(intersperse(&["a", "b", "c"], ","), ["a", ",", "b", ",", "c"]);
//!
//! let first: Vec<u32> = (1..).interspersed(0).take(5).collect();
//! assert_eq!(first, [1, 0, 2, 0, 3]);
//! ```

pub mod display;
pub mod intersperse;

pub use intersperse::{intersperse, intersperse_with, EagerStrategy, Intersperse, IntersperseExt, TryIntersperse};
