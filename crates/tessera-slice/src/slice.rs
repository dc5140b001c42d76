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

//! # Array Slice
//!
//! The owned container at the heart of Tessera. `ArraySlice<T>` is a thin
//! wrapper around `Vec<T>`: it adds no invariants of its own, and every
//! operation that changes its length takes `&mut self`.
//!
//! `Int64Slice` is the canonical instantiation for signed 64-bit integers.

use num_traits::PrimInt;
use std::ops::{Index, IndexMut};

/// An owned, ordered, mutable sequence of primitive integers.
///
/// # Examples
///
/// ```rust
/// # use tessera_slice::ArraySlice;
/// let mut s = ArraySlice::new(vec![5_i32, 2, 8]);
/// s.push([1]);
/// s.sort();
/// assert_eq!(s.as_slice(), &[1, 2, 5, 8]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArraySlice<T> {
    items: Vec<T>,
}

/// A slice of signed 64-bit integers.
pub type Int64Slice = ArraySlice<i64>;

impl<T> ArraySlice<T> {
    /// Creates a new `ArraySlice` taking ownership of `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::new(vec![1, 2, 3]);
    /// assert_eq!(s.len(), 3);
    /// ```
    #[inline]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Creates an empty `ArraySlice` with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the slice holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a shared slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Consumes the slice, returning the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Swaps the elements at positions `m` and `n`.
    ///
    /// # Panics
    ///
    /// Panics if `m` or `n` is out of bounds.
    #[inline]
    pub fn swap(&mut self, m: usize, n: usize) {
        self.items.swap(m, n);
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T> ArraySlice<T>
where
    T: PrimInt,
{
    /// Returns an independent copy of the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![1, 2]);
    /// let mut c = s.copy();
    /// c[0] = 9;
    /// assert_eq!(s.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn copy(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Reports whether the element at `m` should sort before the element at `n`.
    ///
    /// # Panics
    ///
    /// Panics if `m` or `n` is out of bounds.
    #[inline]
    pub fn less(&self, m: usize, n: usize) -> bool {
        self.items[m] < self.items[n]
    }

    /// Sorts the elements in ascending order, in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let mut s = Int64Slice::from(vec![3, -1, 2]);
    /// s.sort();
    /// assert_eq!(s.as_slice(), &[-1, 2, 3]);
    /// ```
    #[inline]
    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }
}

impl<T> std::fmt::Debug for ArraySlice<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> std::fmt::Display for ArraySlice<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T> From<Vec<T>> for ArraySlice<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<&[T]> for ArraySlice<T>
where
    T: Clone,
{
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for ArraySlice<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(Vec::from(items))
    }
}

impl<T> From<ArraySlice<T>> for Vec<T> {
    fn from(slice: ArraySlice<T>) -> Self {
        slice.items
    }
}

impl<T> FromIterator<T> for ArraySlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for ArraySlice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ArraySlice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArraySlice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for ArraySlice<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsMut<[T]> for ArraySlice<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> Index<usize> for ArraySlice<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for ArraySlice<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}
