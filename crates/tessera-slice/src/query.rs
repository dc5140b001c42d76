// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Query Operations
//!
//! Operations that read an `ArraySlice` without modifying it. Results are
//! returned as freshly allocated vectors or scalars.
//!
//! Callbacks receive the current elements, the element position and the
//! element value, in that order: `(&[T], usize, T)`. The reducers append
//! the accumulator as a fourth argument.

use crate::slice::ArraySlice;
use num_traits::PrimInt;
use tessera_core::utils::index::{normalize_from_index, normalize_range};

impl<T> ArraySlice<T>
where
    T: PrimInt,
{
    /// Returns a new vector holding the elements of `self` followed by the
    /// elements of every slice in `others`. Neither input is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![1, 2]);
    /// assert_eq!(s.concat(&[&[3], &[], &[4, 5]]), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn concat(&self, others: &[&[T]]) -> Vec<T> {
        let total_len = others
            .iter()
            .fold(self.len(), |acc, other| acc + other.len());
        let mut out = Vec::with_capacity(total_len);
        out.extend_from_slice(self.as_slice());
        for other in others {
            out.extend_from_slice(other);
        }
        out
    }

    /// Tests whether every element passes `predicate`.
    ///
    /// Returns `true` for an empty slice, whatever the predicate.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&[T], usize, T) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .all(|(k, &v)| predicate(items, k, v))
    }

    /// Tests whether at least one element passes `predicate`.
    ///
    /// Returns `false` for an empty slice, whatever the predicate.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&[T], usize, T) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .any(|(k, &v)| predicate(items, k, v))
    }

    /// Returns the elements that pass `predicate`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![5, 6, 7, 8]);
    /// assert_eq!(s.filter(|_, k, _| k % 2 == 1), vec![6, 8]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&[T], usize, T) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .filter(|&(k, &v)| predicate(items, k, v))
            .map(|(_, &v)| v)
            .collect()
    }

    /// Returns the position and value of the first element that passes
    /// `predicate`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![1, 4, 9, 16]);
    /// assert_eq!(s.find(|_, _, v| v > 5), Some((2, 9)));
    /// assert_eq!(s.find(|_, _, v| v > 50), None);
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Option<(usize, T)>
    where
        F: FnMut(&[T], usize, T) -> bool,
    {
        let items = self.as_slice();
        items
            .iter()
            .copied()
            .enumerate()
            .find(|&(k, v)| predicate(items, k, v))
    }

    /// Returns a vector holding the result of `f` applied to every element.
    pub fn map<F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&[T], usize, T) -> T,
    {
        let items = self.as_slice();
        items
            .iter()
            .enumerate()
            .map(|(k, &v)| f(items, k, v))
            .collect()
    }

    /// Determines whether `value` occurs at or after `from_index`.
    ///
    /// `from_index` defaults to `0`; a negative value counts from the end.
    #[inline]
    pub fn includes(&self, value: T, from_index: Option<isize>) -> bool {
        self.index_of(value, from_index).is_some()
    }

    /// Returns the first position at or after `from_index` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![7, 3, 7, 3]);
    /// assert_eq!(s.index_of(3, None), Some(1));
    /// assert_eq!(s.index_of(3, Some(2)), Some(3));
    /// assert_eq!(s.index_of(7, Some(-1)), None);
    /// ```
    pub fn index_of(&self, value: T, from_index: Option<isize>) -> Option<usize> {
        let from = normalize_from_index(self.len(), from_index);
        self.as_slice()[from..]
            .iter()
            .position(|&v| v == value)
            .map(|k| k + from)
    }

    /// Returns the last position holding `value`, searching backwards from
    /// the end down to `from_index` (inclusive).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![7, 3, 7, 3]);
    /// assert_eq!(s.last_index_of(7, None), Some(2));
    /// assert_eq!(s.last_index_of(7, Some(3)), None);
    /// ```
    pub fn last_index_of(&self, value: T, from_index: Option<isize>) -> Option<usize> {
        let from = normalize_from_index(self.len(), from_index);
        self.as_slice()[from..]
            .iter()
            .rposition(|&v| v == value)
            .map(|k| k + from)
    }

    /// Folds the elements from left to right into a single value.
    ///
    /// `f` receives `(current, index, value, accumulator)` and returns the
    /// next accumulator. Without `initial`, the first element seeds the
    /// accumulator and is not visited. An empty slice yields `initial`, or
    /// zero if none was given; a supplied `initial` is never replaced by
    /// zero, unlike reducers that return zero for every empty input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![1, 2, 3, 4]);
    /// assert_eq!(s.reduce(|_, _, v, acc| acc + v, None), 10);
    /// assert_eq!(s.reduce(|_, _, v, acc| acc * v, Some(2)), 48);
    /// assert_eq!(Int64Slice::default().reduce(|_, _, v, acc| acc + v, Some(5)), 5);
    /// ```
    pub fn reduce<F>(&self, mut f: F, initial: Option<T>) -> T
    where
        F: FnMut(&[T], usize, T, T) -> T,
    {
        let items = self.as_slice();
        let (mut acc, start) = match (initial, items.first()) {
            (Some(initial), _) => (initial, 0),
            (None, Some(&first)) => (first, 1),
            (None, None) => return T::zero(),
        };
        for (k, &v) in items.iter().enumerate().skip(start) {
            acc = f(items, k, v, acc);
        }
        acc
    }

    /// Folds the elements from right to left into a single value.
    ///
    /// Mirrors [`reduce`](Self::reduce): without `initial`, the last element
    /// seeds the accumulator and is not visited. An empty slice yields
    /// `initial`, or zero if none was given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![1, 2, 3]);
    /// // ((3 * 10) + 2) * 10 + 1
    /// assert_eq!(s.reduce_right(|_, _, v, acc| acc * 10 + v, None), 321);
    /// ```
    pub fn reduce_right<F>(&self, mut f: F, initial: Option<T>) -> T
    where
        F: FnMut(&[T], usize, T, T) -> T,
    {
        let items = self.as_slice();
        let (mut acc, end) = match (initial, items.last()) {
            (Some(initial), _) => (initial, items.len()),
            (None, Some(&last)) => (last, items.len() - 1),
            (None, None) => return T::zero(),
        };
        for k in (0..end).rev() {
            acc = f(items, k, items[k], acc);
        }
        acc
    }

    /// Returns a copy of the elements in the half-open range `[begin, end)`.
    ///
    /// Negative bounds count from the end; `end` defaults to the length.
    /// An empty or inverted range yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![0, 1, 2, 3, 4]);
    /// assert_eq!(s.slice(1, Some(3)), vec![1, 2]);
    /// assert_eq!(s.slice(-2, None), vec![3, 4]);
    /// assert_eq!(s.slice(3, Some(1)), Vec::<i64>::new());
    /// ```
    pub fn slice(&self, begin: isize, end: Option<isize>) -> Vec<T> {
        normalize_range(self.len(), begin, end)
            .map_or_else(Vec::new, |range| self.as_slice()[range].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use crate::slice::Int64Slice;

    fn sample() -> Int64Slice {
        Int64Slice::from(vec![10, 20, 30, 20, 10])
    }

    #[test]
    fn test_concat() {
        let s = Int64Slice::from(vec![1]);
        assert_eq!(s.concat(&[]), vec![1]);
        assert_eq!(s.concat(&[&[2, 3], &[4]]), vec![1, 2, 3, 4]);
        assert_eq!(Int64Slice::default().concat(&[&[5]]), vec![5]);
        assert_eq!(s.as_slice(), &[1]);
    }

    #[test]
    fn test_every_and_some() {
        let s = sample();
        assert!(s.every(|_, _, v| v >= 10));
        assert!(!s.every(|_, _, v| v > 10));
        assert!(s.some(|_, _, v| v == 30));
        assert!(!s.some(|_, _, v| v == 40));
    }

    #[test]
    fn test_every_and_some_on_empty() {
        let empty = Int64Slice::default();
        assert!(empty.every(|_, _, _| false));
        assert!(!empty.some(|_, _, _| true));
    }

    #[test]
    fn test_callbacks_see_current_slice_and_index() {
        let s = sample();
        assert!(s.every(|curr, k, v| curr[k] == v && curr.len() == 5));
    }

    #[test]
    fn test_filter() {
        let s = sample();
        assert_eq!(s.filter(|_, _, v| v == 20), vec![20, 20]);
        assert_eq!(s.filter(|_, k, _| k >= 3), vec![20, 10]);
        assert!(s.filter(|_, _, _| false).is_empty());
    }

    #[test]
    fn test_find() {
        let s = sample();
        assert_eq!(s.find(|_, _, v| v == 20), Some((1, 20)));
        assert_eq!(s.find(|_, k, _| k == 4), Some((4, 10)));
        assert_eq!(s.find(|_, _, v| v < 0), None);
        assert_eq!(Int64Slice::default().find(|_, _, _| true), None);
    }

    #[test]
    fn test_map() {
        let s = sample();
        assert_eq!(s.map(|_, k, v| v + k as i64), vec![10, 21, 32, 23, 14]);
        assert!(Int64Slice::default().map(|_, _, v| v).is_empty());
    }

    #[test]
    fn test_index_of() {
        let s = sample();
        assert_eq!(s.index_of(20, None), Some(1));
        assert_eq!(s.index_of(20, Some(2)), Some(3));
        assert_eq!(s.index_of(10, Some(-1)), Some(4));
        assert_eq!(s.index_of(10, Some(-100)), Some(0));
        assert_eq!(s.index_of(10, Some(5)), None);
        assert_eq!(s.index_of(99, None), None);
    }

    #[test]
    fn test_last_index_of() {
        let s = sample();
        assert_eq!(s.last_index_of(20, None), Some(3));
        assert_eq!(s.last_index_of(10, None), Some(4));
        assert_eq!(s.last_index_of(30, Some(2)), Some(2));
        assert_eq!(s.last_index_of(30, Some(3)), None);
        assert_eq!(s.last_index_of(20, Some(-2)), Some(3));
        assert_eq!(Int64Slice::default().last_index_of(1, None), None);
    }

    #[test]
    fn test_includes() {
        let s = sample();
        assert!(s.includes(30, None));
        assert!(!s.includes(30, Some(3)));
        assert!(!s.includes(31, None));
    }

    #[test]
    fn test_reduce() {
        let s = sample();
        assert_eq!(s.reduce(|_, _, v, acc| acc + v, None), 90);
        assert_eq!(s.reduce(|_, _, v, acc| acc + v, Some(10)), 100);

        let mut visited = Vec::new();
        s.reduce(
            |_, k, _, acc| {
                visited.push(k);
                acc
            },
            None,
        );
        assert_eq!(visited, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reduce_right() {
        let s = Int64Slice::from(vec![1, 2, 3]);
        assert_eq!(s.reduce_right(|_, _, v, acc| acc - v, None), 0);
        assert_eq!(s.reduce_right(|_, _, v, acc| acc * 10 + v, Some(0)), 321);

        let mut visited = Vec::new();
        s.reduce_right(
            |_, k, _, acc| {
                visited.push(k);
                acc
            },
            None,
        );
        assert_eq!(visited, vec![1, 0]);
    }

    #[test]
    fn test_reduce_on_empty_and_single() {
        let empty = Int64Slice::default();
        assert_eq!(empty.reduce(|_, _, v, acc| acc + v, None), 0);
        assert_eq!(empty.reduce(|_, _, v, acc| acc + v, Some(7)), 7);
        assert_eq!(empty.reduce_right(|_, _, v, acc| acc + v, None), 0);
        assert_eq!(empty.reduce_right(|_, _, v, acc| acc + v, Some(7)), 7);

        let single = Int64Slice::from(vec![42]);
        assert_eq!(single.reduce(|_, _, _, _| unreachable!(), None), 42);
        assert_eq!(single.reduce_right(|_, _, _, _| unreachable!(), None), 42);
    }

    #[test]
    fn test_slice() {
        let s = Int64Slice::from(vec![0, 1, 2, 3, 4]);
        assert_eq!(s.slice(0, None), vec![0, 1, 2, 3, 4]);
        assert_eq!(s.slice(2, None), vec![2, 3, 4]);
        assert_eq!(s.slice(1, Some(4)), vec![1, 2, 3]);
        assert_eq!(s.slice(-3, Some(-1)), vec![2, 3]);
        assert_eq!(s.slice(-100, Some(2)), vec![0, 1]);
        assert_eq!(s.slice(2, Some(100)), vec![2, 3, 4]);
        assert!(s.slice(5, None).is_empty());
        assert!(s.slice(3, Some(3)).is_empty());
        assert!(Int64Slice::default().slice(0, None).is_empty());
    }

    #[test]
    fn test_slice_returns_copy() {
        let mut s = Int64Slice::from(vec![1, 2, 3]);
        let part = s.slice(0, Some(2));
        s[0] = 100;
        assert_eq!(part, vec![1, 2]);
    }
}
