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

//! # In-Place Operations
//!
//! Operations that modify an `ArraySlice`. Those that change the length
//! report the new length (or the removed elements, for `splice`), so calls
//! can be chained into conditions without a separate `len()` query.
//!
//! Membership-driven operations (`distinct`, `push_once`, `unshift_once`,
//! `remove_one`, `remove_all`) use an `FxHashSet` and keep the relative
//! order of the surviving elements.

use crate::slice::ArraySlice;
use num_traits::PrimInt;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use tessera_core::utils::index::{normalize_index, normalize_range};

impl<T> ArraySlice<T>
where
    T: PrimInt,
{
    /// Copies the elements of `[start, end)` to position `target`, in place.
    ///
    /// All three positions accept negative values counting from the end;
    /// `end` defaults to the length. The copy is truncated at the end of
    /// the slice, so the length never changes. A `target` at or past the
    /// end is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![1, 2, 3, 4, 5]);
    /// s.copy_within(0, 3, None);
    /// assert_eq!(s.as_slice(), &[4, 5, 3, 4, 5]);
    ///
    /// let mut s = Int64Slice::from(vec![1, 2, 3, 4, 5]);
    /// s.copy_within(-2, 0, None);
    /// assert_eq!(s.as_slice(), &[1, 2, 3, 1, 2]);
    /// ```
    pub fn copy_within(&mut self, target: isize, start: isize, end: Option<isize>) {
        let len = self.len();
        let target = normalize_index(len, target, true);
        if target == len {
            return;
        }
        let Some(range) = normalize_range(len, start, end) else {
            return;
        };
        let count = range.len().min(len - target);
        self.as_mut_slice()
            .copy_within(range.start..range.start + count, target);
    }

    /// Sets every element of `[start, end)` to `value`.
    ///
    /// Negative bounds count from the end; `end` defaults to the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![0; 5]);
    /// s.fill(7, -3, Some(-1));
    /// assert_eq!(s.as_slice(), &[0, 0, 7, 7, 0]);
    /// ```
    pub fn fill(&mut self, value: T, start: isize, end: Option<isize>) {
        if let Some(range) = normalize_range(self.len(), start, end) {
            self.as_mut_slice()[range].fill(value);
        }
    }

    /// Reverses the order of the elements, in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Removes and returns the last element, or `None` if the slice is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items_mut().pop()
    }

    /// Removes and returns the first element, or `None` if the slice is empty.
    #[inline]
    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.items_mut().remove(0))
    }

    /// Appends `items` to the end and returns the new length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![1]);
    /// assert_eq!(s.push([2, 3]), 3);
    /// ```
    pub fn push<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.items_mut().extend(items);
        self.len()
    }

    /// Prepends `items`, keeping their order, and returns the new length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![3]);
    /// assert_eq!(s.unshift([1, 2]), 3);
    /// assert_eq!(s.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn unshift<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let items_vec = self.items_mut();
        let tail = std::mem::take(items_vec);
        items_vec.extend(items);
        items_vec.extend(tail);
        self.len()
    }

    /// Removes `delete_count` elements starting at `start`, inserts `items`
    /// in their place, and returns the removed elements.
    ///
    /// `start` accepts negative values counting from the end and is clamped
    /// to the length. A negative `delete_count` removes nothing; one larger
    /// than the remaining length removes everything from `start` onwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![1, 2, 3, 4, 5]);
    /// let removed = s.splice(1, 2, [8, 9, 10]);
    /// assert_eq!(removed, vec![2, 3]);
    /// assert_eq!(s.as_slice(), &[1, 8, 9, 10, 4, 5]);
    ///
    /// s.splice(-1, 0, [0]);
    /// assert_eq!(s.as_slice(), &[1, 8, 9, 10, 4, 0, 5]);
    /// ```
    pub fn splice<I>(&mut self, start: isize, delete_count: isize, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len();
        let start = normalize_index(len, start, true);
        let delete_count = usize::try_from(delete_count)
            .unwrap_or(0)
            .min(len - start);
        log::trace!(
            "splice: removing {} element(s) at position {} of {}",
            delete_count,
            start,
            len
        );
        self.items_mut()
            .splice(start..start + delete_count, items)
            .collect()
    }
}

impl<T> ArraySlice<T>
where
    T: PrimInt + Hash,
{
    /// Appends the `items` that are not yet present and returns the new
    /// length. Duplicates within `items` are appended once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![1, 2]);
    /// assert_eq!(s.push_once([2, 3, 3, 4]), 4);
    /// assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn push_once<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut seen: FxHashSet<T> = self.iter().copied().collect();
        let fresh: Vec<T> = items.into_iter().filter(|&v| seen.insert(v)).collect();
        self.push(fresh)
    }

    /// Prepends the `items` that are not yet present, keeping their order,
    /// and returns the new length. Duplicates within `items` are prepended
    /// once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![3, 4]);
    /// assert_eq!(s.unshift_once([1, 4, 2, 1]), 4);
    /// assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn unshift_once<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut seen: FxHashSet<T> = self.iter().copied().collect();
        let fresh: Vec<T> = items.into_iter().filter(|&v| seen.insert(v)).collect();
        self.unshift(fresh)
    }

    /// Removes repeated elements, keeping the first occurrence of each, and
    /// returns the new length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(s.distinct(), 3);
    /// assert_eq!(s.as_slice(), &[3, 1, 2]);
    /// ```
    pub fn distinct(&mut self) -> usize {
        let mut seen = FxHashSet::with_capacity_and_hasher(self.len(), Default::default());
        self.items_mut().retain(|&v| seen.insert(v));
        self.len()
    }

    /// Removes the first occurrence of each distinct value in `items` and
    /// returns the new length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![1, 2, 1, 2, 3]);
    /// assert_eq!(s.remove_one([1, 1, 3]), 3);
    /// assert_eq!(s.as_slice(), &[2, 1, 2]);
    /// ```
    pub fn remove_one<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut handled = FxHashSet::default();
        for value in items {
            if !handled.insert(value) {
                continue;
            }
            if let Some(position) = self.iter().position(|&v| v == value) {
                self.items_mut().remove(position);
            }
        }
        self.len()
    }

    /// Removes every occurrence of each value in `items` and returns the
    /// new length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![1, 2, 1, 2, 3]);
    /// assert_eq!(s.remove_all([1, 3]), 2);
    /// assert_eq!(s.as_slice(), &[2, 2]);
    /// ```
    pub fn remove_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let targets: FxHashSet<T> = items.into_iter().collect();
        if !targets.is_empty() {
            self.items_mut().retain(|v| !targets.contains(v));
        }
        self.len()
    }
}
