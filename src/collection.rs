//! A growable, 0-indexed ordered collection.
//!
//! `OrderedCollection<T>` mirrors the standard dynamic array API: insertion
//! and removal at both ends, range splicing and slicing with negative
//! offsets, search, transformation, folding, and stable in-place sorting.
//! The length is always the length of the backing `Vec`, so slots stay
//! contiguous after every operation.

use std::cmp::Ordering;
use std::ops::Index;

use crate::element::Element;
use crate::error::CollectionError;
use crate::position::Position;
use crate::sort::merge_sort;

/// Build an `OrderedCollection` from a list of initial values.
///
/// ```
/// use facsimile::collection;
///
/// let items = collection![1, 2, 3];
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[0], 1);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::OrderedCollection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::OrderedCollection::from_vec(vec![$($item),+])
    };
}

/// A mutable ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> OrderedCollection<T> {
    /// Create an empty collection.
    pub fn new() -> OrderedCollection<T> {
        return OrderedCollection { items: Vec::new() };
    }

    pub fn from_vec(items: Vec<T>) -> OrderedCollection<T> {
        return OrderedCollection { items };
    }

    pub fn into_vec(self) -> Vec<T> {
        return self.items;
    }

    pub fn len(&self) -> usize {
        return self.items.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        return self.items.get(index);
    }

    pub fn as_slice(&self) -> &[T] {
        return &self.items;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        return self.items.iter();
    }

    // -------------------------------------------------------------------------
    // Insertion and removal
    // -------------------------------------------------------------------------

    /// Append each item in order. Returns the new length.
    pub fn push(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        self.items.extend(items);
        return self.items.len();
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        return self.items.pop();
    }

    /// Remove and return the first element, moving the rest down by one.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        return Some(self.items.remove(0));
    }

    /// Prepend the items, keeping their relative order. Returns the new length.
    pub fn unshift(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        let _ = self.items.splice(0..0, items);
        return self.items.len();
    }

    /// Remove `delete_count` elements starting at `start` and insert `items`
    /// in their place. Returns the removed elements.
    ///
    /// - `start`: negative counts back from the end, clamped to `0..=len`.
    /// - `delete_count`: `Omitted` removes everything from `start`; negative
    ///   or non-numeric removes nothing; larger than what remains removes
    ///   what remains.
    pub fn splice(
        &mut self,
        start: impl Into<Position>,
        delete_count: impl Into<Position>,
        items: impl IntoIterator<Item = T>,
    ) -> OrderedCollection<T> {
        let len = self.items.len();
        let start = start.into().relative_to(len);
        let available = len - start;
        let delete_count = match delete_count.into() {
            Position::Omitted => available,
            Position::NotANumber => 0,
            Position::At(n) => (n.max(0) as u64).min(available as u64) as usize,
        };
        log::trace!("splice: len={} start={} delete_count={}", len, start, delete_count);

        let removed: Vec<T> = self.items.splice(start..start + delete_count, items).collect();
        return OrderedCollection::from_vec(removed);
    }

    /// Reverse the elements in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        return self;
    }

    // -------------------------------------------------------------------------
    // Iteration and transformation
    // -------------------------------------------------------------------------

    /// Call `f(element, index, collection)` for each element in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (i, item) in self.items.iter().enumerate() {
            f(item, i, self);
        }
    }

    /// A new collection holding `f(element, index, collection)` per element.
    pub fn map<U, F>(&self, mut f: F) -> OrderedCollection<U>
    where
        F: FnMut(&T, usize, &Self) -> U,
    {
        let mut mapped = Vec::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            mapped.push(f(item, i, self));
        }
        return OrderedCollection::from_vec(mapped);
    }

    /// The first element for which `f` returns true. Stops at the first match.
    pub fn find<F>(&self, mut f: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        for (i, item) in self.items.iter().enumerate() {
            if f(item, i, self) {
                return Some(item);
            }
        }
        return None;
    }

    /// Left fold seeded with `init`. Visits every element, starting at index 0.
    pub fn reduce_with<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize, &Self) -> A,
    {
        let mut acc = init;
        for (i, item) in self.items.iter().enumerate() {
            acc = f(acc, item, i, self);
        }
        return acc;
    }

    /// Sort in place with a caller comparator. The sort is stable.
    pub fn sort_by<F>(&mut self, mut cmp: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        log::trace!("sort_by: len={}", self.items.len());
        let items = std::mem::take(&mut self.items);
        self.items = merge_sort(items, &mut cmp);
        return self;
    }
}

impl<T: PartialEq> OrderedCollection<T> {
    /// Index of the first element equal to `value`, searching from `from`.
    ///
    /// A negative `from` counts back from the end (clamped to 0); a `from`
    /// at or past the end finds nothing.
    pub fn index_of(&self, value: &T, from: impl Into<Position>) -> Option<usize> {
        let start = from.into().relative_to(self.items.len());
        return self.items[start..]
            .iter()
            .position(|item| item == value)
            .map(|offset| start + offset);
    }

    /// Whether `value` occurs at or after `from`.
    pub fn includes(&self, value: &T, from: impl Into<Position>) -> bool {
        return self.index_of(value, from).is_some();
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Copy out the elements in `[start, end)`.
    ///
    /// Negative bounds count back from the end. An omitted `end` means the
    /// length; a non-numeric one means 0. The source is never modified.
    pub fn slice(&self, start: impl Into<Position>, end: impl Into<Position>) -> OrderedCollection<T> {
        let len = self.items.len();
        let start = start.into().relative_to(len);
        let end = match end.into() {
            Position::Omitted => len,
            other => other.relative_to(len),
        };
        if start >= end {
            return OrderedCollection::new();
        }
        return OrderedCollection::from_vec(self.items[start..end].to_vec());
    }

    /// A new collection with the elements for which `f` returns true.
    pub fn filter<F>(&self, mut f: F) -> OrderedCollection<T>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        let mut kept = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if f(item, i, self) {
                kept.push(item.clone());
            }
        }
        return OrderedCollection::from_vec(kept);
    }

    /// Left fold seeded with the first element, visiting from index 1.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::InvalidOperation` when the collection is
    /// empty, since there is nothing to seed the accumulator with.
    pub fn reduce<F>(&self, mut f: F) -> Result<T, CollectionError>
    where
        F: FnMut(T, &T, usize, &Self) -> T,
    {
        let Some(first) = self.items.first() else {
            log::debug!("reduce called on an empty collection without a seed");
            return Err(CollectionError::InvalidOperation(
                "reduce of empty collection with no initial value",
            ));
        };

        let mut acc = first.clone();
        for (i, item) in self.items.iter().enumerate().skip(1) {
            acc = f(acc, item, i, self);
        }
        return Ok(acc);
    }
}

impl<T: Element> OrderedCollection<T> {
    /// Concatenate the string form of every element with `separator`
    /// (default `","`) between them. Absent and null elements render empty.
    pub fn join(&self, separator: Option<&str>) -> String {
        let separator = separator.unwrap_or(",");
        let mut joined = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                joined.push_str(separator);
            }
            if item.is_absent() || item.is_null() {
                continue;
            }
            joined.push_str(&item.render());
        }
        return joined;
    }

    /// Sort in place by string representation, lexicographically.
    ///
    /// Absent elements go last, in their original order.
    pub fn sort(&mut self) -> &mut Self {
        return self.sort_by(default_compare);
    }
}

fn default_compare<T: Element>(a: &T, b: &T) -> Ordering {
    return match (a.is_absent(), b.is_absent()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // UTF-16 code unit order, as the standard comparator uses.
        (false, false) => {
            let (a, b) = (a.render(), b.render());
            a.encode_utf16().cmp(b.encode_utf16())
        }
    };
}

impl<T> Index<usize> for OrderedCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        return &self.items[index];
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> OrderedCollection<T> {
        return OrderedCollection::from_vec(items);
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> OrderedCollection<T> {
        return OrderedCollection::from_vec(iter.into_iter().collect());
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.items.into_iter();
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.items.iter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn macro_builds_in_order() {
        let items = collection!["a", "b", "c"];
        assert_eq!(items.as_slice(), &["a", "b", "c"]);
        let empty: OrderedCollection<i32> = collection![];
        assert!(empty.is_empty());
    }

    #[test]
    fn unshift_on_empty() {
        let mut items: OrderedCollection<i32> = OrderedCollection::new();
        assert_eq!(items.unshift([1, 2, 3]), 3);
        assert_eq!(items, collection![1, 2, 3]);
    }

    #[test]
    fn splice_non_numeric_delete_count_removes_nothing() {
        let mut items = collection!["a", "b", "c"];
        let removed = items.splice(1, f64::NAN, ["x"]);
        assert!(removed.is_empty());
        assert_eq!(items, collection!["a", "x", "b", "c"]);
    }

    #[test]
    fn splice_negative_delete_count_removes_nothing() {
        let mut items = collection![1, 2, 3];
        let removed = items.splice(0, -5, []);
        assert!(removed.is_empty());
        assert_eq!(items, collection![1, 2, 3]);
    }

    #[test]
    fn slice_non_numeric_end_is_zero() {
        let items = collection![1, 2, 3];
        assert!(items.slice(0, f64::NAN).is_empty());
    }

    #[test]
    fn default_compare_puts_absent_last() {
        let mut items = collection![Value::Undefined, Value::from("b"), Value::Null, Value::from("a")];
        items.sort();
        assert_eq!(items, collection![Value::from("a"), Value::from("b"), Value::Null, Value::Undefined]);
    }

    #[test]
    fn reduce_error_message() {
        let empty: OrderedCollection<i32> = collection![];
        let err = empty.reduce(|a, b, _, _| a + b).unwrap_err();
        assert_eq!(err.to_string(), "invalid operation: reduce of empty collection with no initial value");
    }
}
