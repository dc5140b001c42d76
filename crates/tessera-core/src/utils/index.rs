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

//! # Index Normalization
//!
//! JavaScript-style bounds semantics for signed indices. Every range-taking
//! operation of a Tessera container funnels its arguments through these
//! helpers, so the rules live in exactly one place:
//!
//! - A negative index counts from the end: `-1` is the last element.
//!   Indices that would land before the start are clamped to `0`.
//! - An index at or past the end is clamped to `len` (when the end position
//!   is admissible, e.g. as an exclusive bound) or to `len - 1`.
//! - A range `[start, end)` is empty when the sequence is empty, when the
//!   start lands on `len`, or when the end does not lie past the start.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_core::utils::index::{normalize_index, normalize_range};
//!
//! assert_eq!(normalize_index(5, -2, true), 3);
//! assert_eq!(normalize_index(5, 9, true), 5);
//! assert_eq!(normalize_index(5, 9, false), 4);
//!
//! assert_eq!(normalize_range(5, 1, Some(-1)), Some(1..4));
//! assert_eq!(normalize_range(5, 3, Some(2)), None);
//! ```

use std::ops::Range;

/// Maps a signed `index` onto a position within a sequence of length `len`.
///
/// Negative indices count back from `len` and are clamped at `0`. Indices at
/// or beyond `len` become `len` if `allow_len` is set, and `len - 1`
/// otherwise (`0` for an empty sequence).
///
/// # Examples
///
/// ```rust
/// # use tessera_core::utils::index::normalize_index;
/// assert_eq!(normalize_index(4, -1, true), 3);
/// assert_eq!(normalize_index(4, -10, true), 0);
/// assert_eq!(normalize_index(4, 4, true), 4);
/// assert_eq!(normalize_index(4, 4, false), 3);
/// ```
#[inline]
pub fn normalize_index(len: usize, index: isize, allow_len: bool) -> usize {
    if index < 0 {
        return len.saturating_sub(index.unsigned_abs());
    }
    let index = index.unsigned_abs();
    if index < len {
        index
    } else if allow_len {
        len
    } else {
        len.saturating_sub(1)
    }
}

/// Normalizes the half-open range `[start, end)` against a sequence of
/// length `len`.
///
/// `end` defaults to `len`. Returns `None` if the normalized range selects
/// no elements.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::utils::index::normalize_range;
/// assert_eq!(normalize_range(6, 2, None), Some(2..6));
/// assert_eq!(normalize_range(6, -3, None), Some(3..6));
/// assert_eq!(normalize_range(6, 0, Some(-4)), Some(0..2));
/// assert_eq!(normalize_range(6, 6, None), None);
/// assert_eq!(normalize_range(0, 0, None), None);
/// ```
#[inline]
pub fn normalize_range(len: usize, start: isize, end: Option<isize>) -> Option<Range<usize>> {
    if len == 0 {
        return None;
    }
    let start = normalize_index(len, start, true);
    if start == len {
        return None;
    }
    let end = end.map_or(len, |end| normalize_index(len, end, true));
    (end > start).then_some(start..end)
}

/// Normalizes an optional search start position, defaulting to `0`.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::utils::index::normalize_from_index;
/// assert_eq!(normalize_from_index(5, None), 0);
/// assert_eq!(normalize_from_index(5, Some(-2)), 3);
/// assert_eq!(normalize_from_index(5, Some(7)), 5);
/// ```
#[inline]
pub fn normalize_from_index(len: usize, from_index: Option<isize>) -> usize {
    from_index.map_or(0, |index| normalize_index(len, index, true))
}
