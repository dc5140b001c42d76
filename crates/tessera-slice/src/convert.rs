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

//! # Conversions
//!
//! Renders an `ArraySlice` as strings or floating point values, and narrows
//! it into any other primitive integer type.
//!
//! Narrowing is all-or-nothing: the first element that the target type
//! cannot represent aborts the conversion with a `NarrowingError` and no
//! partial output is produced. Failures are reported at `debug` level
//! through the `log` facade, including the position of the offending
//! element.

use crate::slice::ArraySlice;
use num_traits::{AsPrimitive, PrimInt};
use tessera_core::num::narrow::{CheckedNarrow, NarrowingError};

macro_rules! narrowing_conversion {
    ($method:ident, $t:ty) => {
        #[doc = concat!("Converts every element to `", stringify!($t), "`.")]
        ///
        /// # Errors
        ///
        /// Returns `NarrowingError::NegativeValue` for a negative element when the
        /// target is unsigned, and `NarrowingError::Overflow` for an element outside
        /// the target range.
        #[inline]
        pub fn $method(&self) -> Result<Vec<$t>, NarrowingError> {
            self.narrow::<$t>()
        }
    };
}

impl<T> ArraySlice<T>
where
    T: PrimInt,
{
    /// Converts every element to `U`, failing on the first element that `U`
    /// cannot represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::{Int64Slice, NarrowingError};
    /// let s = Int64Slice::from(vec![1, 300]);
    /// assert_eq!(s.narrow::<u16>(), Ok(vec![1, 300]));
    /// assert_eq!(s.narrow::<u8>(), Err(NarrowingError::Overflow));
    /// ```
    pub fn narrow<U>(&self) -> Result<Vec<U>, NarrowingError>
    where
        U: PrimInt,
    {
        self.iter()
            .enumerate()
            .map(|(index, &value)| {
                value.checked_narrow::<U>().inspect_err(|err| {
                    log::debug!(
                        "narrowing element {} of {} into {} failed: {}",
                        index,
                        self.len(),
                        std::any::type_name::<U>(),
                        err
                    );
                })
            })
            .collect()
    }

    narrowing_conversion!(to_i8s, i8);
    narrowing_conversion!(to_i16s, i16);
    narrowing_conversion!(to_i32s, i32);
    narrowing_conversion!(to_i64s, i64);
    narrowing_conversion!(to_isizes, isize);

    narrowing_conversion!(to_u8s, u8);
    narrowing_conversion!(to_u16s, u16);
    narrowing_conversion!(to_u32s, u32);
    narrowing_conversion!(to_u64s, u64);
    narrowing_conversion!(to_usizes, usize);
}

impl<T> ArraySlice<T>
where
    T: PrimInt + std::fmt::Display,
{
    /// Renders every element in base 10.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_slice::Int64Slice;
    /// let s = Int64Slice::from(vec![-7, 0, 42]);
    /// assert_eq!(s.to_strings(), vec!["-7", "0", "42"]);
    /// ```
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|v| v.to_string()).collect()
    }
}

impl<T> ArraySlice<T>
where
    T: PrimInt + AsPrimitive<f32>,
{
    /// Converts every element to `f32`, rounding to the nearest representable value.
    pub fn to_f32s(&self) -> Vec<f32> {
        self.iter()
            .map(|&v| <T as AsPrimitive<f32>>::as_(v))
            .collect()
    }
}

impl<T> ArraySlice<T>
where
    T: PrimInt + AsPrimitive<f64>,
{
    /// Converts every element to `f64`, rounding to the nearest representable value.
    pub fn to_f64s(&self) -> Vec<f64> {
        self.iter()
            .map(|&v| <T as AsPrimitive<f64>>::as_(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::slice::{ArraySlice, Int64Slice};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;
    use tessera_core::num::narrow::{NarrowingError, is_64bit_platform};

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    // Records are kept per thread so parallel tests do not see each other.
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            CAPTURED.with(|c| {
                c.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("logger installed once");
            log::set_max_level(LevelFilter::Trace);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
        let result = f();
        let records = CAPTURED.with(|c| c.borrow_mut().drain(..).collect());
        (result, records)
    }

    #[test]
    fn test_failed_narrowing_is_logged() {
        let s = Int64Slice::from(vec![1, 2, 300]);
        let (result, records) = capture_logs(|| s.to_u8s());
        assert_eq!(result, Err(NarrowingError::Overflow));
        assert_eq!(records.len(), 1);

        let (level, message) = &records[0];
        assert_eq!(*level, Level::Debug);
        assert!(message.contains("element 2 of 3"), "{message}");
        assert!(message.contains("u8"), "{message}");
        assert!(message.contains("overflows"), "{message}");
    }

    #[test]
    fn test_successful_narrowing_is_silent() {
        let s = Int64Slice::from(vec![1, 2, 3]);
        let (result, records) = capture_logs(|| s.to_u8s());
        assert_eq!(result, Ok(vec![1, 2, 3]));
        assert!(records.is_empty());
    }

    #[test]
    fn test_to_strings() {
        let s = Int64Slice::from(vec![i64::MIN, -1, 0, i64::MAX]);
        assert_eq!(
            s.to_strings(),
            vec![
                "-9223372036854775808",
                "-1",
                "0",
                "9223372036854775807"
            ]
        );
        assert!(Int64Slice::default().to_strings().is_empty());
    }

    #[test]
    fn test_to_floats() {
        let s = Int64Slice::from(vec![-3, 0, 1 << 20]);
        assert_eq!(s.to_f32s(), vec![-3.0_f32, 0.0, 1_048_576.0]);
        assert_eq!(s.to_f64s(), vec![-3.0_f64, 0.0, 1_048_576.0]);
    }

    #[test]
    fn test_to_f64s_rounds_large_values() {
        let s = Int64Slice::from(vec![i64::MAX]);
        assert_eq!(s.to_f64s(), vec![9_223_372_036_854_775_807_f64]);
    }

    #[test]
    fn test_to_i64s_is_identity() {
        let s = Int64Slice::from(vec![i64::MIN, 0, i64::MAX]);
        assert_eq!(s.to_i64s(), Ok(vec![i64::MIN, 0, i64::MAX]));
    }

    #[test]
    fn test_signed_boundaries() {
        let ok = Int64Slice::from(vec![i8::MIN.into(), 0, i8::MAX.into()]);
        assert_eq!(ok.to_i8s(), Ok(vec![i8::MIN, 0, i8::MAX]));

        let over = Int64Slice::from(vec![0, i64::from(i8::MAX) + 1]);
        assert_eq!(over.to_i8s(), Err(NarrowingError::Overflow));
        let under = Int64Slice::from(vec![i64::from(i8::MIN) - 1]);
        assert_eq!(under.to_i8s(), Err(NarrowingError::Overflow));

        let ok = Int64Slice::from(vec![i16::MIN.into(), i16::MAX.into()]);
        assert_eq!(ok.to_i16s(), Ok(vec![i16::MIN, i16::MAX]));
        let over = Int64Slice::from(vec![i64::from(i16::MAX) + 1]);
        assert_eq!(over.to_i16s(), Err(NarrowingError::Overflow));

        let ok = Int64Slice::from(vec![i32::MIN.into(), i32::MAX.into()]);
        assert_eq!(ok.to_i32s(), Ok(vec![i32::MIN, i32::MAX]));
        let under = Int64Slice::from(vec![i64::from(i32::MIN) - 1]);
        assert_eq!(under.to_i32s(), Err(NarrowingError::Overflow));
    }

    #[test]
    fn test_unsigned_boundaries() {
        let ok = Int64Slice::from(vec![0, u8::MAX.into()]);
        assert_eq!(ok.to_u8s(), Ok(vec![0, u8::MAX]));
        let over = Int64Slice::from(vec![i64::from(u8::MAX) + 1]);
        assert_eq!(over.to_u8s(), Err(NarrowingError::Overflow));

        let ok = Int64Slice::from(vec![u16::MAX.into()]);
        assert_eq!(ok.to_u16s(), Ok(vec![u16::MAX]));
        let over = Int64Slice::from(vec![i64::from(u16::MAX) + 1]);
        assert_eq!(over.to_u16s(), Err(NarrowingError::Overflow));

        let ok = Int64Slice::from(vec![u32::MAX.into()]);
        assert_eq!(ok.to_u32s(), Ok(vec![u32::MAX]));
        let over = Int64Slice::from(vec![i64::from(u32::MAX) + 1]);
        assert_eq!(over.to_u32s(), Err(NarrowingError::Overflow));

        let ok = Int64Slice::from(vec![0, i64::MAX]);
        assert_eq!(ok.to_u64s(), Ok(vec![0, i64::MAX as u64]));
    }

    #[test]
    fn test_negative_into_unsigned() {
        let s = Int64Slice::from(vec![1, -1]);
        assert_eq!(s.to_u8s(), Err(NarrowingError::NegativeValue));
        assert_eq!(s.to_u16s(), Err(NarrowingError::NegativeValue));
        assert_eq!(s.to_u32s(), Err(NarrowingError::NegativeValue));
        assert_eq!(s.to_u64s(), Err(NarrowingError::NegativeValue));
        assert_eq!(s.to_usizes(), Err(NarrowingError::NegativeValue));
    }

    #[test]
    fn test_first_failure_wins() {
        let s = Int64Slice::from(vec![1000, -1]);
        assert_eq!(s.to_u8s(), Err(NarrowingError::Overflow));
        let s = Int64Slice::from(vec![-1, 1000]);
        assert_eq!(s.to_u8s(), Err(NarrowingError::NegativeValue));
    }

    #[test]
    fn test_pointer_sized() {
        let s = Int64Slice::from(vec![-5, 5]);
        assert_eq!(s.to_isizes(), Ok(vec![-5, 5]));

        let big = Int64Slice::from(vec![i64::from(u32::MAX) + 1]);
        if is_64bit_platform() {
            assert_eq!(big.to_isizes(), Ok(vec![(i64::from(u32::MAX) + 1) as isize]));
            assert_eq!(big.to_usizes(), Ok(vec![(i64::from(u32::MAX) + 1) as usize]));
        } else {
            assert_eq!(big.to_isizes(), Err(NarrowingError::Overflow));
            assert_eq!(big.to_usizes(), Err(NarrowingError::Overflow));
        }
    }

    #[test]
    fn test_round_trip_through_wider_type() {
        let s = Int64Slice::from(vec![i64::MIN, -1, 0, 1, i64::MAX]);
        let wide: ArraySlice<i128> = s.narrow::<i128>().unwrap().into();
        assert_eq!(wide.to_i64s(), Ok(s.into_vec()));

        let small = ArraySlice::from(vec![i8::MIN, 0, i8::MAX]);
        let widened: Int64Slice = small.to_i64s().unwrap().into();
        assert_eq!(widened.to_i8s(), Ok(small.into_vec()));
    }

    #[test]
    fn test_empty_conversions() {
        let empty = Int64Slice::default();
        assert_eq!(empty.to_u8s(), Ok(Vec::new()));
        assert_eq!(empty.to_i8s(), Ok(Vec::new()));
        assert!(empty.to_f32s().is_empty());
    }
}
