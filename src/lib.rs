//! I2C driver for HT16K33-based LED matrix displays.
//!
//! ## How the HT16K33 drives an LED matrix
//!
//! The HT16K33 is a memory-mapped LED controller: it scans up to 16 row
//! outputs against 8 common lines and continuously refreshes the LEDs from a
//! 16-byte display RAM. The chip itself has no notion of x/y coordinates;
//! this driver imposes the conventional layout below, where each pair of
//! bytes covers one 16-pixel-wide logical row.
//!
//! ```text
//!          R = ROW  C = COL  RAM address shown in []
//! --x
//! |     R0 R1 R2 R3 R4 R5 R6 R7 : R8 R9 R10 R11 R12 R13 R14 R15
//! y  C0         [0x00]          :           [0x01]
//!    C1         [0x02]          :           [0x03]
//!    C2         [0x04]          :           [0x05]
//!    C3         [0x06]          :           [0x07]
//!    C4         [0x08]          :           [0x09]
//!    C5         [0x0A]          :           [0x0B]
//!    C6         [0x0C]          :           [0x0D]
//!    C7         [0x0E]          :           [0x0F]
//! ```
//!
//! Within a byte, bit `x % 8` selects the pixel. Turning on the LED at
//! (x, y) = (11, 5) means setting bit D3 of address `0x0B`.
//!
//! ## Driver model
//!
//! [`Ht16k33`] keeps an in-memory mirror of the display RAM and pushes it to
//! the chip as one 17-byte I2C write: a leading `0x00` selects the
//! display-data register, followed by the 16 data bytes. With auto-write
//! enabled (the default) every pixel mutation or fill is followed by a full
//! [`show`](matrix::Ht16k33::show); with it disabled, mutations stay local
//! until `show` is called. Blink rate and brightness are single-byte command
//! writes and are validated before any bus traffic.
//!
//! The bus is consumed through the blocking [`embedded_hal::i2c::I2c`] trait.
//! Each `write` call is one exclusive, atomic bus transaction; bus failures
//! surface as [`Error::I2c`] and are never retried here.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ht16k33_matrix::{Ht16k33, DEFAULT_ADDRESS};
//! # use embedded_hal_mock::eh1::i2c::Mock;
//! # let i2c = Mock::new(&[]);
//!
//! // `i2c` is any embedded-hal 1.0 I2C bus from your HAL.
//! let mut display = Ht16k33::new(i2c, DEFAULT_ADDRESS).unwrap();
//! display.set_auto_write(false);
//! display.set_pixel(11, 5, true).unwrap();
//! display.set_brightness(8).unwrap();
//! display.show().unwrap();
//! ```
//!
//! ## Drawing with embedded-graphics
//!
//! `Ht16k33` implements [`embedded_graphics::draw_target::DrawTarget`] with
//! [`BinaryColor`](embedded_graphics::pixelcolor::BinaryColor) pixels.
//! Drawing only mutates the in-memory buffer regardless of the auto-write
//! setting; call `show` once per frame to present it.
//!
//! ## Available Feature Flags
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the driver and error types so they can be
//! emitted with the `defmt` logging framework. No functional changes; purely
//! adds trait impls.
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
mod graphics;
pub mod matrix;

pub use error::Error;
pub use matrix::Ht16k33;

/// Default 7-bit I2C address of an HT16K33 with all address pins open.
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Computes the display-RAM byte address holding pixel (`x`, `y`).
///
/// Each logical row occupies two consecutive bytes: the left 8 pixels live
/// in the even byte, the right 8 in the odd one.
#[must_use]
pub const fn pixel_address(x: usize, y: usize) -> usize {
    2 * y + x / 8
}

/// Computes the bit mask selecting pixel `x` within its display-RAM byte.
#[must_use]
pub const fn pixel_mask(x: usize) -> u8 {
    1 << (x % 8)
}
