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

//! # Tessera Slice
//!
//! JavaScript-style array operations over an owned sequence of primitive
//! integers. `ArraySlice<T>` wraps a `Vec<T>` and offers the familiar
//! `map`, `filter`, `reduce`, `splice`, `slice`, `fill`, `copy_within` and
//! friends, together with range-checked conversions into other integer
//! types.
//!
//! ## Modules
//!
//! - `slice`: The `ArraySlice<T>` container, construction, element access,
//!   and the ordering primitives (`len`, `less`, `swap`, `sort`).
//! - `query`: Non-mutating operations returning new vectors or scalars
//!   (`concat`, `every`, `some`, `filter`, `find`, `map`, `index_of`,
//!   `reduce`, `slice`, ...).
//! - `mutate`: In-place operations (`push`, `pop`, `shift`, `unshift`,
//!   `splice`, `fill`, `copy_within`, `reverse`, `distinct`, `remove_*`).
//! - `convert`: String and floating point renderings, and checked
//!   narrowing into every other primitive integer type.
//!
//! ## Index Semantics
//!
//! Range-taking operations accept signed `isize` bounds. Negative values
//! count from the end and out-of-range values are clamped, following the
//! rules in `tessera_core::utils::index`.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_slice::Int64Slice;
//!
//! let mut s = Int64Slice::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(s.slice(-3, None), vec![9, 2, 6]);
//!
//! s.distinct();
//! assert_eq!(s.as_slice(), &[3, 1, 4, 5, 9, 2, 6]);
//!
//! let evens = s.filter(|_, _, v| v % 2 == 0);
//! assert_eq!(evens, vec![4, 2, 6]);
//!
//! assert!(s.to_i8s().is_ok());
//! ```

pub mod convert;
pub mod mutate;
pub mod query;
pub mod slice;

pub use slice::{ArraySlice, Int64Slice};
pub use tessera_core::num::narrow::NarrowingError;
