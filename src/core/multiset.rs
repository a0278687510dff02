//! Immutable, naturally-ordered multiset.
//!
//! Cards in a hand, tickets in an offer, and cards spent on a route are all
//! counted rather than sequenced, so they live in a `Multiset`. Iteration is
//! always in ascending element order, which also fixes the wire order.
//!
//! A `Multiset` is never mutated once built. Accumulate with
//! `MultisetBuilder`, then freeze with `build()`; every combinator
//! (`union`, `difference`, ...) returns a new value sharing structure with
//! the old one through `im::OrdMap`.

use std::collections::BTreeMap;
use std::fmt;

use im::OrdMap;
use serde::{Deserialize, Serialize};

/// Immutable multiset with elements in ascending order.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiset<T: Ord + Clone> {
    counts: OrdMap<T, usize>,
    size: usize,
}

impl<T: Ord + Clone> Multiset<T> {
    /// The empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: OrdMap::new(),
            size: 0,
        }
    }

    /// Start accumulating a new multiset.
    #[must_use]
    pub fn builder() -> MultisetBuilder<T> {
        MultisetBuilder::new()
    }

    /// A multiset holding `n` copies of `element`.
    #[must_use]
    pub fn of_n(n: usize, element: T) -> Self {
        let mut builder = MultisetBuilder::new();
        builder.add_n(n, element);
        builder.build()
    }

    /// Total number of elements, counting repetitions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the multiset holds no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// How many copies of `element` are present.
    #[must_use]
    pub fn count(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Check if at least one copy of `element` is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.counts.contains_key(element)
    }

    /// Check if `other` is a sub-multiset of this one.
    #[must_use]
    pub fn contains_all(&self, other: &Multiset<T>) -> bool {
        other.counts.iter().all(|(e, &n)| self.count(e) >= n)
    }

    /// Union with repetitions (counts are added).
    #[must_use]
    pub fn union(&self, other: &Multiset<T>) -> Self {
        let mut counts = self.counts.clone();
        for (element, &n) in other.counts.iter() {
            *counts.entry(element.clone()).or_insert(0) += n;
        }
        Self {
            counts,
            size: self.size + other.size,
        }
    }

    /// Remove `other` from this multiset.
    ///
    /// Counts saturate at zero: removing an element that is not present is a
    /// no-op for that element.
    #[must_use]
    pub fn difference(&self, other: &Multiset<T>) -> Self {
        let mut counts = self.counts.clone();
        let mut size = self.size;
        for (element, &n) in other.counts.iter() {
            if let Some(&present) = counts.get(element) {
                let removed = present.min(n);
                size -= removed;
                if present == removed {
                    counts.remove(element);
                } else {
                    counts.insert(element.clone(), present - removed);
                }
            }
        }
        Self { counts, size }
    }

    /// Keep only the elements accepted by `predicate`, with their counts.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        let mut builder = MultisetBuilder::new();
        for (element, &n) in self.counts.iter() {
            if predicate(element) {
                builder.add_n(n, element.clone());
            }
        }
        builder.build()
    }

    /// Iterate over every element, repetitions included, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts
            .iter()
            .flat_map(|(e, &n)| std::iter::repeat(e).take(n))
    }

    /// Iterate over `(element, count)` pairs in ascending order.
    pub fn counts(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(e, &n)| (e, n))
    }

    /// Iterate over distinct elements in ascending order.
    pub fn distinct(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts.keys()
    }

    /// The `index`-th element in ascending order, counting repetitions.
    ///
    /// Panics if `index >= size()`.
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        assert!(index < self.size, "Index {} out of range for multiset of size {}", index, self.size);
        let mut remaining = index;
        for (element, &n) in self.counts.iter() {
            if remaining < n {
                return element;
            }
            remaining -= n;
        }
        unreachable!("size is the sum of all counts")
    }

    /// Collect every element, repetitions included, in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Every distinct sub-multiset holding exactly `n` elements.
    ///
    /// Sub-multisets are produced in lexicographic order of their counts,
    /// favouring the smallest elements first.
    #[must_use]
    pub fn subsets_of_size(&self, n: usize) -> Vec<Multiset<T>> {
        let entries: Vec<(T, usize)> = self.counts.iter().map(|(e, &c)| (e.clone(), c)).collect();
        let mut out = Vec::new();
        let mut current = MultisetBuilder::new();
        collect_subsets(&entries, n, &mut current, &mut out);
        out
    }
}

fn collect_subsets<T: Ord + Clone>(
    entries: &[(T, usize)],
    remaining: usize,
    current: &mut MultisetBuilder<T>,
    out: &mut Vec<Multiset<T>>,
) {
    if remaining == 0 {
        out.push(current.clone().build());
        return;
    }
    let Some(((element, available), rest)) = entries.split_first() else {
        return;
    };
    let rest_capacity: usize = rest.iter().map(|(_, c)| c).sum();
    for taken in (0..=(*available).min(remaining)).rev() {
        if remaining - taken > rest_capacity {
            break;
        }
        let mut next = current.clone();
        next.add_n(taken, element.clone());
        collect_subsets(rest, remaining - taken, &mut next, out);
    }
}

impl<T: Ord + Clone> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = MultisetBuilder::new();
        for element in iter {
            builder.add(element);
        }
        builder.build()
    }
}

impl<T: Ord + Clone + fmt::Debug> fmt::Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.counts.iter().map(|(e, n)| DebugCount(e, *n)))
            .finish()
    }
}

struct DebugCount<'a, T>(&'a T, usize);

impl<T: fmt::Debug> fmt::Debug for DebugCount<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1 == 1 {
            write!(f, "{:?}", self.0)
        } else {
            write!(f, "{}×{:?}", self.1, self.0)
        }
    }
}

/// Mutable accumulator producing a frozen `Multiset`.
#[derive(Clone, Debug)]
pub struct MultisetBuilder<T: Ord + Clone> {
    counts: BTreeMap<T, usize>,
    size: usize,
}

impl<T: Ord + Clone> MultisetBuilder<T> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            size: 0,
        }
    }

    /// Add one copy of `element`.
    pub fn add(&mut self, element: T) -> &mut Self {
        self.add_n(1, element)
    }

    /// Add `n` copies of `element`.
    pub fn add_n(&mut self, n: usize, element: T) -> &mut Self {
        if n > 0 {
            *self.counts.entry(element).or_insert(0) += n;
            self.size += n;
        }
        self
    }

    /// Add every element of `other`.
    pub fn add_all(&mut self, other: &Multiset<T>) -> &mut Self {
        for (element, n) in other.counts() {
            self.add_n(n, element.clone());
        }
        self
    }

    /// Number of elements accumulated so far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Freeze the accumulated elements.
    #[must_use]
    pub fn build(self) -> Multiset<T> {
        Multiset {
            counts: self.counts.into_iter().collect(),
            size: self.size,
        }
    }
}

impl<T: Ord + Clone> Default for MultisetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
