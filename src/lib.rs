//! # Tiebreak
//!
//! `tiebreak` is a tiny functional library for building and composing the
//! comparison functions you hand to a sort routine.
//!
//! Start from the natural order of a type (or any custom ordering function)
//! and derive new comparators from it: reverse the direction, compare through
//! an extracted key, push a matched subset of values to either end, or chain
//! secondary tie-breaks. Every derivation is a pure transformation returning
//! an independent new [`Comparator`]; nothing is ever mutated, and every
//! comparator is `Send + Sync` and cheap to clone.
//!
//! ## Key Features
//!
//! - **Composable**: Five derivation operations ([`reverse`](Comparator::reverse),
//!   [`map`](Comparator::map), [`append`](Comparator::append_by),
//!   [`prepend`](Comparator::prepend_by), [`then`](Comparator::then)) that
//!   chain indefinitely.
//! - **Key extraction**: [`on`] builds a comparator from a key function, the
//!   "sort objects by a field" workhorse.
//! - **Pluggable collation**: [`locale`] wraps any host [`Collation`]
//!   provider into a string comparator; no collation algorithm is
//!   reimplemented here.
//! - **Zero ceremony**: A [`Comparator`] works anywhere a
//!   `Fn(&T, &T) -> Ordering` does, via [`compare`](Comparator::compare),
//!   [`as_fn`](Comparator::as_fn), or the built-in
//!   [`sort`](Comparator::sort).
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use tiebreak::ordered;
//!
//! let mut data = vec![3, 1, 2];
//! ordered().sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3]);
//!
//! ordered().reverse().sort(&mut data);
//! assert_eq!(data, vec![3, 2, 1]);
//! ```
//!
//! ### Composing
//!
//! Sort people by age, oldest first, alphabetically within an age group, and
//! with anyone of unknown age at the end:
//!
//! ```rust
//! use tiebreak::on;
//!
//! struct Person {
//!     name: &'static str,
//!     age: Option<u32>,
//! }
//!
//! let cmp = on(|p: &Person| p.age)
//!     .reverse()
//!     .then(on(|p: &Person| p.name).as_fn())
//!     .append_by(
//!         |p: &Person| p.age.is_none(),
//!         |a: &Person, b: &Person| a.name.cmp(b.name),
//!     );
//!
//! let mut people = vec![
//!     Person { name: "Ada", age: Some(36) },
//!     Person { name: "Zed", age: None },
//!     Person { name: "Bob", age: Some(41) },
//!     Person { name: "Eve", age: Some(41) },
//! ];
//! cmp.sort(&mut people);
//!
//! let names: Vec<_> = people.iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["Bob", "Eve", "Ada", "Zed"]);
//! ```
//!
//! ## Contract
//!
//! A comparator must induce a consistent order: antisymmetric, and ideally
//! transitive. The library trusts caller-supplied functions and never
//! verifies them; a non-deterministic or effectful key function yields a
//! logically incorrect ordering, not a crash. Incomparable values under the
//! default ordering (such as NaN) compare as equal rather than erroring.

pub mod combine;
pub mod core;

pub use combine::{Comparator, locale, on, ordered};
pub use core::{Collation, default_compare};

pub mod prelude {
    pub use crate::combine::{Comparator, locale, on, ordered};
    pub use crate::core::{Collation, default_compare};
}
