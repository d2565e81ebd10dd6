//! Comparator construction and derivation.
//!
//! This module implements the combinator algebra:
//! - Constructors: [`ordered`], [`on`], [`locale`], and [`Comparator::new`].
//! - Derivations: [`reverse`](Comparator::reverse), [`map`](Comparator::map),
//!   [`then`](Comparator::then), [`append`](Comparator::append), and
//!   [`prepend`](Comparator::prepend).
//!
//! Every derivation is a pure transformation: it clones a reference-counted
//! handle to the source comparator and returns an independent new comparator.
//! Sources are never mutated or invalidated.

use crate::core::{Collation, default_compare};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A composable comparison function over values of type `T`.
///
/// A `Comparator<T>` wraps a `Fn(&T, &T) -> Ordering` and exposes derivation
/// methods that build new comparators from it. It is the explicit value-type
/// rendering of "a sort callback you can keep transforming": reverse the
/// direction, compare through an extracted key, push a matched subset to one
/// end, or chain a tie-break.
///
/// Cloning is cheap (a reference-count bump), and the wrapped function is
/// `Send + Sync`, so a comparator can be shared freely across threads. No
/// method writes any state.
///
/// # Examples
///
/// ```
/// use tiebreak::{on, ordered};
///
/// struct Task {
///     priority: u8,
///     name: &'static str,
/// }
///
/// // Highest priority first, name as tie-break.
/// let cmp = on(|t: &Task| t.priority)
///     .reverse()
///     .then(on(|t: &Task| t.name).as_fn());
///
/// let mut tasks = vec![
///     Task { priority: 1, name: "sweep" },
///     Task { priority: 3, name: "ship" },
///     Task { priority: 3, name: "review" },
/// ];
/// cmp.sort(&mut tasks);
///
/// let names: Vec<_> = tasks.iter().map(|t| t.name).collect();
/// assert_eq!(names, vec!["review", "ship", "sweep"]);
/// ```
pub struct Comparator<T> {
    func: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

/// Builds a comparator from the natural order of `T`.
///
/// This is the entry point for the common case: values that already know how
/// to order themselves. Incomparable pairs (e.g. NaN) compare as equal, per
/// [`default_compare`].
///
/// # Examples
///
/// ```
/// use tiebreak::ordered;
///
/// let mut data = vec![3, 1, 2];
/// ordered().sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn ordered<T: PartialOrd + 'static>() -> Comparator<T> {
    Comparator::new(default_compare)
}

/// Builds a comparator that orders values by an extracted key.
///
/// The key function runs on both arguments and the keys are compared with
/// [`default_compare`]. Shorthand for `ordered().map(key)`; a field
/// projection closure (`|x| x.field`) covers the sort-by-field case.
///
/// # Examples
///
/// ```
/// use tiebreak::on;
///
/// let mut words = vec!["pear", "fig", "banana"];
/// on(|w: &&str| w.len()).sort(&mut words);
/// assert_eq!(words, vec!["fig", "pear", "banana"]);
/// ```
pub fn on<T, K, F>(key: F) -> Comparator<T>
where
    T: 'static,
    K: PartialOrd + 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    ordered::<K>().map(key)
}

/// Builds a string comparator from a locale-aware [`Collation`] provider.
///
/// Every comparison is delegated to the provider; this crate performs no
/// collation of its own. The comparator is generic over anything that derefs
/// to `str`, so it sorts `String`, `&str`, and `Cow<str>` collections alike.
///
/// # Examples
///
/// ```
/// use tiebreak::locale;
///
/// // Stand-in for a host collation facility.
/// let caseless = |a: &str, b: &str| {
///     a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
/// };
///
/// let mut names = vec!["banana".to_string(), "Apple".to_string()];
/// locale(caseless).sort(&mut names);
/// assert_eq!(names, vec!["Apple", "banana"]);
/// ```
pub fn locale<S, C>(collation: C) -> Comparator<S>
where
    S: AsRef<str> + 'static,
    C: Collation + Send + Sync + 'static,
{
    Comparator::new(move |a: &S, b: &S| collation.compare_strings(a.as_ref(), b.as_ref()))
}

impl<T: 'static> Comparator<T> {
    /// Wraps an arbitrary ordering function into a comparator.
    ///
    /// The function must induce a consistent order (antisymmetric, ideally
    /// transitive) for the derived comparators to behave sensibly; this is
    /// trusted, not verified.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::Comparator;
    ///
    /// let by_abs = Comparator::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    ///
    /// let mut data = vec![-3, 1, 2];
    /// by_abs.sort(&mut data);
    /// assert_eq!(data, vec![1, 2, -3]);
    /// ```
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Comparator {
            func: Arc::new(func),
        }
    }

    /// Invokes the comparator directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use tiebreak::ordered;
    ///
    /// assert_eq!(ordered().compare(&1, &2), Ordering::Less);
    /// ```
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.func)(a, b)
    }

    /// Returns a plain closure view of this comparator.
    ///
    /// Useful for APIs that take an ordering function rather than a
    /// `Comparator` (`slice::sort_by`, `Iterator::max_by`) and for passing a
    /// comparator as the handler of another derivation. The closure holds a
    /// reference-counted handle; the source comparator stays usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::ordered;
    ///
    /// let desc = ordered::<u32>().reverse();
    /// let top = [3u32, 9, 4].iter().min_by(|a, b| desc.as_fn()(a, b));
    /// assert_eq!(top, Some(&9));
    /// ```
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + Send + Sync + 'static {
        let func = Arc::clone(&self.func);
        move |a, b| func(a, b)
    }

    /// Derives a comparator with the opposite ordering.
    ///
    /// Equivalent to swapping the operands: where this comparator returns
    /// `Less` the reversed one returns `Greater` and vice versa; `Equal`
    /// stays `Equal`. Reversing twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::ordered;
    ///
    /// let mut data = vec![3, 1, 2];
    /// ordered().reverse().sort(&mut data);
    /// assert_eq!(data, vec![3, 2, 1]);
    /// ```
    pub fn reverse(&self) -> Self {
        let inner = Arc::clone(&self.func);
        Comparator::new(move |a, b| inner(b, a))
    }

    /// Derives a comparator over a new domain `U` by comparing transformed
    /// values.
    ///
    /// The transform is applied to both arguments before delegating to this
    /// comparator. It must be total, deterministic, and side-effect-free for
    /// the result to be a valid ordering; this is not enforced.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::ordered;
    ///
    /// // Order strings by length using the numeric comparator.
    /// let by_len = ordered::<usize>().map(|s: &&str| s.len());
    ///
    /// let mut words = vec!["pear", "fig", "banana"];
    /// by_len.sort(&mut words);
    /// assert_eq!(words, vec!["fig", "pear", "banana"]);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Comparator<U>
    where
        U: 'static,
        F: Fn(&U) -> T + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.func);
        Comparator::new(move |a: &U, b: &U| inner(&transform(a), &transform(b)))
    }

    /// Derives a comparator that consults `tie_break` when this one reports
    /// `Equal`.
    ///
    /// A non-`Equal` result from this comparator is decisive and the handler
    /// is never evaluated. Chainable indefinitely for "sort by X, then by Y,
    /// then by Z" orderings.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::on;
    ///
    /// let cmp = on(|p: &(u8, u8)| p.0).then(on(|p: &(u8, u8)| p.1).as_fn());
    ///
    /// let mut pairs = vec![(1, 2), (0, 9), (1, 1)];
    /// cmp.sort(&mut pairs);
    /// assert_eq!(pairs, vec![(0, 9), (1, 1), (1, 2)]);
    /// ```
    pub fn then<F>(&self, tie_break: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.func);
        Comparator::new(move |a, b| match inner(a, b) {
            Ordering::Equal => tie_break(a, b),
            decided => decided,
        })
    }

    /// Like [`then`](Comparator::then), with the natural order of `T` as the
    /// tie-break.
    pub fn then_ordered(&self) -> Self
    where
        T: PartialOrd,
    {
        self.then(default_compare)
    }

    /// Derives a comparator that sorts values matching `predicate` after all
    /// others, resolving order within the matching group via `handler`.
    ///
    /// The tie-break table:
    ///
    /// | `predicate(a)` | `predicate(b)` | result          |
    /// |----------------|----------------|-----------------|
    /// | yes            | yes            | `handler(a, b)` |
    /// | yes            | no             | `Greater`       |
    /// | no             | yes            | `Less`          |
    /// | no             | no             | this comparator |
    pub fn append_by<P, F>(&self, predicate: P, handler: F) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.func);
        Comparator::new(move |a, b| match (predicate(a), predicate(b)) {
            (true, true) => handler(a, b),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => inner(a, b),
        })
    }

    /// Like [`append_by`](Comparator::append_by), with the natural order of
    /// `T` resolving the matching group.
    ///
    /// The typical use is pushing special or sentinel values to the end of a
    /// sort without disturbing the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::ordered;
    ///
    /// let mut data = vec![Some(1), None, Some(2)];
    /// ordered().append(|x: &Option<i32>| x.is_none()).sort(&mut data);
    /// assert_eq!(data, vec![Some(1), Some(2), None]);
    /// ```
    pub fn append<P>(&self, predicate: P) -> Self
    where
        T: PartialOrd,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.append_by(predicate, default_compare)
    }

    /// Derives a comparator that sorts values matching `predicate` before all
    /// others, resolving order within the matching group via `handler`.
    ///
    /// Mirror image of [`append_by`](Comparator::append_by):
    ///
    /// | `predicate(a)` | `predicate(b)` | result          |
    /// |----------------|----------------|-----------------|
    /// | yes            | yes            | `handler(a, b)` |
    /// | yes            | no             | `Less`          |
    /// | no             | yes            | `Greater`       |
    /// | no             | no             | this comparator |
    pub fn prepend_by<P, F>(&self, predicate: P, handler: F) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.func);
        Comparator::new(move |a, b| match (predicate(a), predicate(b)) {
            (true, true) => handler(a, b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => inner(a, b),
        })
    }

    /// Like [`prepend_by`](Comparator::prepend_by), with the natural order of
    /// `T` resolving the matching group.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::ordered;
    ///
    /// let mut data = vec![4, 7, 2, 9];
    /// ordered().prepend(|x: &i32| x % 2 == 0).sort(&mut data);
    /// assert_eq!(data, vec![2, 4, 7, 9]);
    /// ```
    pub fn prepend<P>(&self, predicate: P) -> Self
    where
        T: PartialOrd,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.prepend_by(predicate, default_compare)
    }

    /// Sorts a slice in place using this comparator.
    ///
    /// The sort is stable: values the comparator reports as equal keep their
    /// relative order.
    pub fn sort(&self, data: &mut [T]) {
        data.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns the greater of two values under this comparator, preferring
    /// `a` on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiebreak::on;
    ///
    /// let longest = on(|w: &&str| w.len());
    /// assert_eq!(longest.max(&"fig", &"pear"), &"pear");
    /// assert_eq!(longest.max(&"plum", &"pear"), &"plum");
    /// ```
    pub fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(a, b) == Ordering::Less { b } else { a }
    }

    /// Returns the lesser of two values under this comparator, preferring
    /// `a` on ties.
    pub fn min<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(a, b) == Ordering::Greater {
            b
        } else {
            a
        }
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Comparator {
            func: Arc::clone(&self.func),
        }
    }
}

impl<T: PartialOrd + 'static> Default for Comparator<T> {
    fn default() -> Self {
        ordered()
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
