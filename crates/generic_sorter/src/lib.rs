//! Comparator-driven in-place sorting over any contiguous source.
//!
//! Two algorithms are provided: a Hoare-partition quicksort (unstable) and a
//! top-down merge sort (stable). Every entry point accepts anything that
//! implements [`AsView`] (arrays, slices, `Vec`, `Box<[T]>`, `VecDeque`, and
//! `SmallVec` behind the `smallvec` feature) and sorts it in place.
//!
//! ```
//! let mut data = [9, 5, 7, 4, 12];
//! generic_sorter::quicksort(&mut data);
//! assert_eq!(data, [4, 5, 7, 9, 12]);
//!
//! let mut words = vec!["WoAh", "woah", "apple"];
//! generic_sorter::mergesort_case_insensitive(&mut words);
//! assert_eq!(words, ["apple", "WoAh", "woah"]);
//! ```

mod algorithms;
mod compare;
mod element;
mod error;
mod view;

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

pub use compare::{Comparator, case_insensitive_less, natural_less};
pub use element::{ALL_KINDS, Element, ElementKind, kind_name, sort_elements};
pub use error::SortError;
pub use view::{AsView, View};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    Quicksort,
    Mergesort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] = [SortAlgorithm::Quicksort, SortAlgorithm::Mergesort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Quicksort => "quicksort",
        SortAlgorithm::Mergesort => "mergesort",
    }
}

/// Whether equal-ranked elements are guaranteed to keep their input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::Mergesort)
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quicksort" | "quick" => Ok(SortAlgorithm::Quicksort),
            "mergesort" | "merge" => Ok(SortAlgorithm::Mergesort),
            _ => Err(SortError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OrderingMode {
    Natural,
    CaseInsensitive,
}

pub fn ordering_name(ordering: OrderingMode) -> &'static str {
    match ordering {
        OrderingMode::Natural => "natural",
        OrderingMode::CaseInsensitive => "case-insensitive",
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ordering_name(*self))
    }
}

pub fn supports_kind(ordering: OrderingMode, kind: ElementKind) -> bool {
    !matches!(
        (ordering, kind),
        (
            OrderingMode::CaseInsensitive,
            ElementKind::Int | ElementKind::Char
        )
    )
}

/// Sorts `source` in place with `algo`, ordering by the strict weak order `less`.
///
/// An empty source is reported through the log and left alone. If `less` is
/// not a strict weak order the resulting order is unspecified, but the call
/// still returns and the contents remain a permutation of the input.
pub fn sort_by<S, F>(algo: SortAlgorithm, source: &mut S, less: F)
where
    S: AsView + ?Sized,
    S::Elem: Clone,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    let view = source.as_view();
    if view.is_empty() {
        info!("{}: data set is empty, nothing to sort", algorithm_name(algo));
        return;
    }
    debug!("{}: sorting {} elements", algorithm_name(algo), view.len());

    let mut cmp = Comparator::new(less);
    match algo {
        SortAlgorithm::Quicksort => algorithms::quicksort::sort(view, &mut cmp),
        SortAlgorithm::Mergesort => algorithms::mergesort::sort(view, &mut cmp),
    }
}

pub fn sort<S>(algo: SortAlgorithm, source: &mut S)
where
    S: AsView + ?Sized,
    S::Elem: Ord + Clone,
{
    sort_by(algo, source, natural_less::<S::Elem>);
}

pub fn sort_case_insensitive<S>(algo: SortAlgorithm, source: &mut S)
where
    S: AsView + ?Sized,
    S::Elem: AsRef<str> + Clone,
{
    sort_by(algo, source, case_insensitive_less::<S::Elem>);
}

/// Unstable partition-exchange sort in natural order.
pub fn quicksort<S>(source: &mut S)
where
    S: AsView + ?Sized,
    S::Elem: Ord + Clone,
{
    sort(SortAlgorithm::Quicksort, source);
}

pub fn quicksort_by<S, F>(source: &mut S, less: F)
where
    S: AsView + ?Sized,
    S::Elem: Clone,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    sort_by(SortAlgorithm::Quicksort, source, less);
}

pub fn quicksort_case_insensitive<S>(source: &mut S)
where
    S: AsView + ?Sized,
    S::Elem: AsRef<str> + Clone,
{
    sort_case_insensitive(SortAlgorithm::Quicksort, source);
}

/// Stable merge sort in natural order.
pub fn mergesort<S>(source: &mut S)
where
    S: AsView + ?Sized,
    S::Elem: Ord + Clone,
{
    sort(SortAlgorithm::Mergesort, source);
}

pub fn mergesort_by<S, F>(source: &mut S, less: F)
where
    S: AsView + ?Sized,
    S::Elem: Clone,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    sort_by(SortAlgorithm::Mergesort, source, less);
}

pub fn mergesort_case_insensitive<S>(source: &mut S)
where
    S: AsView + ?Sized,
    S::Elem: AsRef<str> + Clone,
{
    sort_case_insensitive(SortAlgorithm::Mergesort, source);
}
