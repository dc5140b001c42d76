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

//! # Tessera Core
//!
//! Foundational numerics and bounds arithmetic for the Tessera slice
//! ecosystem. This crate holds the small, reusable pieces that every
//! element-typed container needs, so that the containers themselves can
//! stay focused on their operations.
//!
//! ## Modules
//!
//! - `num`: Checked narrowing between primitive integer types
//!   (`CheckedNarrow`), reporting `NarrowingError::Overflow` or
//!   `NarrowingError::NegativeValue` instead of silently truncating.
//! - `utils`: Index normalization helpers implementing JavaScript-style
//!   bounds semantics (negative indices count from the end, half-open
//!   ranges are clamped to the sequence length).
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod utils;
