//! Error type for the HT16K33 driver.
//!
//! Range violations are detected locally and reported before any bus I/O is
//! attempted, so a rejected request never leaves the device in a
//! half-updated state. Bus failures are wrapped unchanged; recovery policy
//! (retry, reset, give up) belongs to the caller.

/// Errors returned by [`Ht16k33`](crate::Ht16k33) operations.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The underlying bus reported an error during a transaction.
    I2c(E),
    /// Blink rate outside the supported range 0 to 3.
    BlinkRateOutOfRange(u8),
    /// Brightness outside the supported range 0 to 15.
    BrightnessOutOfRange(u8),
    /// X coordinate at or beyond the display width.
    PixelXOutOfRange {
        /// The rejected coordinate.
        x: usize,
        /// The display width; valid coordinates are `0..width`.
        width: usize,
    },
    /// Y coordinate at or beyond the display height.
    PixelYOutOfRange {
        /// The rejected coordinate.
        y: usize,
        /// The display height; valid coordinates are `0..height`.
        height: usize,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "i2c bus error: {e:?}"),
            Self::BlinkRateOutOfRange(rate) => {
                write!(f, "blink rate out of range: {rate} (valid range: 0-3)")
            }
            Self::BrightnessOutOfRange(level) => {
                write!(f, "brightness out of range: {level} (valid range: 0-15)")
            }
            Self::PixelXOutOfRange { x, width } => {
                write!(f, "x value out of range: {x} (valid range: 0-{})", width - 1)
            }
            Self::PixelYOutOfRange { y, height } => {
                write!(f, "y value out of range: {y} (valid range: 0-{})", height - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    type TestError = Error<embedded_hal::i2c::ErrorKind>;

    #[test]
    fn test_display_names_the_valid_range() {
        assert_eq!(
            TestError::BlinkRateOutOfRange(4).to_string(),
            "blink rate out of range: 4 (valid range: 0-3)"
        );
        assert_eq!(
            TestError::BrightnessOutOfRange(16).to_string(),
            "brightness out of range: 16 (valid range: 0-15)"
        );
        assert_eq!(
            TestError::PixelXOutOfRange { x: 16, width: 16 }.to_string(),
            "x value out of range: 16 (valid range: 0-15)"
        );
        assert_eq!(
            TestError::PixelYOutOfRange { y: 8, height: 8 }.to_string(),
            "y value out of range: 8 (valid range: 0-7)"
        );
    }

    #[test]
    fn test_display_wraps_bus_error() {
        let e = TestError::I2c(embedded_hal::i2c::ErrorKind::Other);
        assert!(e.to_string().starts_with("i2c bus error"));
    }

    #[test]
    fn test_equality_and_copy() {
        let e = TestError::BlinkRateOutOfRange(4);
        let e2 = e;
        assert_eq!(e, e2);
        assert_ne!(e, TestError::BrightnessOutOfRange(4));
        assert_ne!(
            TestError::PixelXOutOfRange { x: 16, width: 16 },
            TestError::PixelYOutOfRange { y: 16, height: 16 }
        );
    }
}
