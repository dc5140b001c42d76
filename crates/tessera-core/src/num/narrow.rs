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

//! # Checked Narrowing
//!
//! Converting an integer into a type with a smaller (or differently signed)
//! range must not truncate silently. `CheckedNarrow` performs the conversion
//! and distinguishes the two ways it can fail:
//!
//! - `NarrowingError::NegativeValue`: a negative value was converted into an
//!   unsigned type. This check takes precedence over the range check.
//! - `NarrowingError::Overflow`: the value lies outside the representable
//!   range of the target type.
//!
//! The pointer-sized targets `isize` and `usize` are checked against the
//! width of the target platform (`POINTER_WIDTH`), so an `i64` that fits on a
//! 64-bit build may overflow on a 32-bit one.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_core::num::narrow::{CheckedNarrow, NarrowingError};
//!
//! assert_eq!(127_i64.checked_narrow::<i8>(), Ok(127_i8));
//! assert_eq!(128_i64.checked_narrow::<i8>(), Err(NarrowingError::Overflow));
//! assert_eq!((-1_i64).checked_narrow::<u64>(), Err(NarrowingError::NegativeValue));
//! ```

use num_traits::{NumCast, PrimInt};

/// The width, in bits, of `isize` and `usize` on the target platform.
pub const POINTER_WIDTH: u32 = usize::BITS;

/// Returns `true` if `isize`/`usize` are 64 bits wide on the target platform.
#[inline(always)]
pub const fn is_64bit_platform() -> bool {
    POINTER_WIDTH == 64
}

/// The error type for failed narrowing conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrowingError {
    /// The target type cannot represent the value.
    Overflow,
    /// A negative value cannot be converted into an unsigned type.
    NegativeValue,
}

impl std::fmt::Display for NarrowingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow => write!(f, "Value overflows the target integer type"),
            Self::NegativeValue => {
                write!(f, "Negative value cannot be converted to an unsigned type")
            }
        }
    }
}

impl std::error::Error for NarrowingError {}

/// A trait for primitive integers that can be converted into another
/// primitive integer type with range checking.
///
/// The trait is implemented for every type implementing `PrimInt`, which
/// covers `i8` through `i128`, `u8` through `u128`, `isize` and `usize`.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::narrow::{CheckedNarrow, NarrowingError};
/// assert_eq!(255_i64.checked_narrow::<u8>(), Ok(255_u8));
/// assert_eq!(256_i64.checked_narrow::<u8>(), Err(NarrowingError::Overflow));
/// assert_eq!((-1_i32).checked_narrow::<u8>(), Err(NarrowingError::NegativeValue));
/// ```
pub trait CheckedNarrow: PrimInt {
    /// Converts `self` into `U`, failing if `U` cannot represent the value.
    fn checked_narrow<U>(self) -> Result<U, NarrowingError>
    where
        U: PrimInt;
}

impl<T> CheckedNarrow for T
where
    T: PrimInt,
{
    #[inline]
    fn checked_narrow<U>(self) -> Result<U, NarrowingError>
    where
        U: PrimInt,
    {
        if self < T::zero() && U::min_value() == U::zero() {
            return Err(NarrowingError::NegativeValue);
        }
        <U as NumCast>::from(self).ok_or(NarrowingError::Overflow)
    }
}
