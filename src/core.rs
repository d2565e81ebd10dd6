//! Core contracts for comparator construction.
//!
//! This module defines:
//! - [`default_compare`]: The default total-order comparison used whenever no
//!   custom comparator is supplied.
//! - [`Collation`]: The pluggable locale-aware string ordering capability
//!   consumed by [`locale`](crate::combine::locale).

use std::cmp::Ordering;

/// Compares two values using their natural partial order.
///
/// Returns `Less` if `a < b`, `Greater` if `a > b`, and `Equal` otherwise.
/// Values that are mutually incomparable (for example `f64::NAN` against
/// anything) fall through to `Equal`: they carry no ordering preference and
/// are treated as equal for sorting purposes, not as an error.
///
/// This is the comparison every handler-less combinator method
/// (e.g. [`append`](crate::Comparator::append),
/// [`then_ordered`](crate::Comparator::then_ordered)) delegates to.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use tiebreak::default_compare;
///
/// assert_eq!(default_compare(&1, &2), Ordering::Less);
/// assert_eq!(default_compare(&2, &1), Ordering::Greater);
/// assert_eq!(default_compare(&1, &1), Ordering::Equal);
///
/// // Incomparable values order as Equal.
/// assert_eq!(default_compare(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn default_compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Locale-aware string ordering, supplied by the host platform.
///
/// Language-sensitive collation (case folding, accent weighting, script
/// ordering) is not reimplemented here. Instead, any collation provider with
/// a single string-comparison entry point plugs in through this trait, and
/// [`locale`](crate::combine::locale) wraps it into a full comparator.
/// Invalid locale configuration fails according to the provider's own rules;
/// this crate does not intercept it.
///
/// A blanket implementation covers plain closures, so an ICU binding's
/// comparison function (or a test stub) can be passed directly:
///
/// ```
/// use std::cmp::Ordering;
/// use tiebreak::{locale, Collation};
///
/// // A stand-in for a real collation provider: case-insensitive ASCII.
/// let caseless = |a: &str, b: &str| {
///     a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
/// };
/// assert_eq!(caseless.compare_strings("Apple", "apple"), Ordering::Equal);
///
/// let cmp = locale::<&str, _>(caseless);
/// let mut names = vec!["beta", "Alpha", "gamma"];
/// cmp.sort(&mut names);
/// assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
/// ```
pub trait Collation {
    /// Orders two strings according to the collation's rules.
    fn compare_strings(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collation for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare_strings(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}
