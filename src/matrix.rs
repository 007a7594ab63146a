//! Driver core for the HT16K33 LED matrix controller.
//!
//! The driver mirrors the chip's 16-byte display RAM in a local buffer and
//! synchronizes it with one 17-byte I2C write (register-address prefix plus
//! data). Pixel coordinates are translated with the crate-level
//! [`pixel_address`]/[`pixel_mask`] helpers; command registers (oscillator,
//! blink, brightness) are driven with single-byte writes.
//!
//! # Synchronization
//! With auto-write enabled every mutation ([`set_pixel`](Ht16k33::set_pixel),
//! [`fill`](Ht16k33::fill)) is followed by a full frame write. With it
//! disabled, [`show`](Ht16k33::show) is the single point where the buffer
//! reaches the hardware. Either way the chip only ever sees whole frames;
//! there is no partial-row transmission.

use embedded_hal::i2c::I2c;

use crate::error::Error;
use crate::{pixel_address, pixel_mask};

// System-setup command turning the internal oscillator on.
const OSCILLATOR_ON: u8 = 0x21;
// Display-setup command base, ORed with the display-on bit and the 2-bit
// blink rate shifted left by one.
const BLINK_CMD: u8 = 0x80;
const BLINK_DISPLAY_ON: u8 = 0x01;
// Dimming command base, ORed with the 4-bit brightness level.
const BRIGHTNESS_CMD: u8 = 0xE0;

const BLINK_RATE_MAX: u8 = 3;
const BRIGHTNESS_MAX: u8 = 15;

// Address of the display-data register; always buffer byte 0.
const DISPLAY_DATA_REGISTER: u8 = 0x00;
// Register-address prefix plus 16 bytes of display RAM.
const BUFFER_LEN: usize = 17;
const DATA_LEN: usize = BUFFER_LEN - 1;

/// Driver for an HT16K33 LED matrix, generic over the logical display size.
///
/// `WIDTH`/`HEIGHT` default to the full 16x8 matrix the chip can scan;
/// smaller panels wired to a subset of the outputs use the same RAM layout,
/// so the only difference is the accepted coordinate range. Sizes beyond
/// 16x8 do not fit the display RAM and fail to compile.
///
/// # Example
/// ```rust,no_run
/// use ht16k33_matrix::{Ht16k33, DEFAULT_ADDRESS};
/// # use embedded_hal_mock::eh1::i2c::Mock;
/// # let i2c = Mock::new(&[]);
///
/// let mut display = Ht16k33::new(i2c, DEFAULT_ADDRESS).unwrap();
/// display.set_pixel(3, 2, true).unwrap();
/// ```
pub struct Ht16k33<I2C, const WIDTH: usize = 16, const HEIGHT: usize = 8> {
    i2c: I2C,
    address: u8,
    buffer: [u8; BUFFER_LEN],
    auto_write: bool,
    blink_rate: u8,
    brightness: u8,
}

impl<I2C> Ht16k33<I2C, 16, 8>
where
    I2C: I2c,
{
    /// Creates a 16x8 driver with auto-write enabled and initializes the
    /// device: clears the display, starts the oscillator, sets blink rate 0
    /// and full brightness.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] if any of the initialization writes fails.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        Self::with_size(i2c, address, true)
    }

    /// Creates a 16x8 driver with explicit auto-write behavior.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] if any of the initialization writes fails.
    pub fn with_auto_write(
        i2c: I2C,
        address: u8,
        auto_write: bool,
    ) -> Result<Self, Error<I2C::Error>> {
        Self::with_size(i2c, address, auto_write)
    }
}

impl<I2C, const WIDTH: usize, const HEIGHT: usize> Ht16k33<I2C, WIDTH, HEIGHT>
where
    I2C: I2c,
{
    /// Creates a driver for a `WIDTH` x `HEIGHT` panel and initializes the
    /// device.
    ///
    /// The size is part of the type: `Ht16k33::<_, 8, 8>::with_size(...)`.
    /// Initialization performs one clear-fill (synced to the device when
    /// `auto_write` is set), then enables the oscillator, sets blink rate 0
    /// and brightness 15, each as its own bus transaction.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] if any of the initialization writes fails.
    pub fn with_size(
        i2c: I2C,
        address: u8,
        auto_write: bool,
    ) -> Result<Self, Error<I2C::Error>> {
        const {
            assert!(WIDTH > 0 && WIDTH <= 16, "display RAM is 16 pixels wide");
            assert!(HEIGHT > 0 && HEIGHT <= 8, "display RAM is 8 pixels tall");
        }
        let mut display = Self {
            i2c,
            address,
            buffer: [0; BUFFER_LEN],
            auto_write,
            blink_rate: 0,
            brightness: 0,
        };
        display.buffer[0] = DISPLAY_DATA_REGISTER;
        display.fill(false)?;
        display.write_command(OSCILLATOR_ON)?;
        display.set_blink_rate(0)?;
        display.set_brightness(BRIGHTNESS_MAX)?;
        Ok(display)
    }

    /// Reads the pixel at (`x`, `y`) from the local buffer.
    ///
    /// # Errors
    /// Returns a range error if `x` or `y` is outside the display; `x` is
    /// checked first.
    pub fn pixel(&self, x: usize, y: usize) -> Result<bool, Error<I2C::Error>> {
        let (addr, mask) = Self::pixel_location(x, y)?;
        Ok(self.buffer_byte(addr) & mask != 0)
    }

    /// Sets or clears the pixel at (`x`, `y`).
    ///
    /// With auto-write enabled the whole frame is written to the device
    /// afterwards.
    ///
    /// # Errors
    /// Returns a range error if `x` or `y` is outside the display (`x` is
    /// checked first), or [`Error::I2c`] if the auto-write sync fails.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> Result<(), Error<I2C::Error>> {
        let (addr, mask) = Self::pixel_location(x, y)?;
        let byte = self.buffer_byte(addr);
        self.set_buffer_byte(addr, if on { byte | mask } else { byte & !mask });
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Fills the whole display, leaving the register-address prefix
    /// untouched.
    ///
    /// With auto-write enabled the frame is written to the device
    /// afterwards.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] if the auto-write sync fails.
    pub fn fill(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        let fill = if on { 0xFF } else { 0x00 };
        for i in 0..DATA_LEN {
            self.set_buffer_byte(i, fill);
        }
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Writes the full 17-byte buffer to the device in one transaction.
    ///
    /// This is the single point of hardware synchronization; with auto-write
    /// disabled, mutations are not visible until this is called.
    ///
    /// # Errors
    /// Returns [`Error::I2c`] if the bus write fails.
    pub fn show(&mut self) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &self.buffer)
            .map_err(Error::I2c)
    }

    /// Sets the blink rate. Valid values are 0 (steady) through 3.
    ///
    /// The cached rate is only updated once the command write succeeds.
    ///
    /// # Errors
    /// Returns [`Error::BlinkRateOutOfRange`] for rates above 3 before any
    /// bus I/O, or [`Error::I2c`] if the command write fails.
    pub fn set_blink_rate(&mut self, rate: u8) -> Result<(), Error<I2C::Error>> {
        if rate > BLINK_RATE_MAX {
            return Err(Error::BlinkRateOutOfRange(rate));
        }
        let rate = rate & 0x03;
        self.write_command(BLINK_CMD | BLINK_DISPLAY_ON | (rate << 1))?;
        self.blink_rate = rate;
        Ok(())
    }

    /// Sets the brightness. Valid values are 0 (dimmest) through 15.
    ///
    /// The cached level is only updated once the command write succeeds.
    ///
    /// # Errors
    /// Returns [`Error::BrightnessOutOfRange`] for levels above 15 before
    /// any bus I/O, or [`Error::I2c`] if the command write fails.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error<I2C::Error>> {
        if level > BRIGHTNESS_MAX {
            return Err(Error::BrightnessOutOfRange(level));
        }
        let level = level & 0x0F;
        self.write_command(BRIGHTNESS_CMD | level)?;
        self.brightness = level;
        Ok(())
    }

    fn write_command(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[command])
            .map_err(Error::I2c)
    }

    fn pixel_location(x: usize, y: usize) -> Result<(usize, u8), Error<I2C::Error>> {
        if x >= WIDTH {
            return Err(Error::PixelXOutOfRange { x, width: WIDTH });
        }
        if y >= HEIGHT {
            return Err(Error::PixelYOutOfRange { y, height: HEIGHT });
        }
        Ok((pixel_address(x, y), pixel_mask(x)))
    }
}

impl<I2C, const WIDTH: usize, const HEIGHT: usize> Ht16k33<I2C, WIDTH, HEIGHT> {
    /// Returns whether mutations sync to the device automatically.
    #[must_use]
    pub const fn auto_write(&self) -> bool {
        self.auto_write
    }

    /// Enables or disables automatic synchronization. No bus I/O.
    pub fn set_auto_write(&mut self, auto_write: bool) {
        self.auto_write = auto_write;
    }

    /// Returns the display size as (width, height).
    #[must_use]
    pub const fn size(&self) -> (usize, usize) {
        (WIDTH, HEIGHT)
    }

    /// Returns the cached blink rate, the last value accepted by the device.
    #[must_use]
    pub const fn blink_rate(&self) -> u8 {
        self.blink_rate
    }

    /// Returns the cached brightness, the last value accepted by the device.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Reads display-RAM data byte `index` (0 to 15).
    ///
    /// The register-address prefix is accounted for here, so extensions
    /// layering bargraph or segment peripherals on the chip family can
    /// address RAM bytes without re-deriving the buffer layout.
    ///
    /// # Panics
    /// Panics if `index` is 16 or above.
    #[must_use]
    pub const fn buffer_byte(&self, index: usize) -> u8 {
        self.buffer[index + 1]
    }

    /// Writes display-RAM data byte `index` (0 to 15). No bus I/O.
    ///
    /// # Panics
    /// Panics if `index` is 16 or above.
    pub fn set_buffer_byte(&mut self, index: usize, value: u8) {
        self.buffer[index + 1] = value;
    }

    /// Destroys the driver and releases the bus.
    #[must_use]
    pub fn release(self) -> I2C {
        self.i2c
    }

    // Buffer-only pixel write for DrawTarget; out-of-bounds pixels are
    // ignored and nothing is synced.
    pub(crate) fn set_pixel_internal(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let addr = pixel_address(x, y);
        let mask = pixel_mask(x);
        let byte = self.buffer_byte(addr);
        self.set_buffer_byte(addr, if on { byte | mask } else { byte & !mask });
    }
}

impl<I2C, const WIDTH: usize, const HEIGHT: usize> core::fmt::Debug
    for Ht16k33<I2C, WIDTH, HEIGHT>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ht16k33")
            .field("address", &self.address)
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("auto_write", &self.auto_write)
            .field("blink_rate", &self.blink_rate)
            .field("brightness", &self.brightness)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<I2C, const WIDTH: usize, const HEIGHT: usize> defmt::Format
    for Ht16k33<I2C, WIDTH, HEIGHT>
{
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Ht16k33<{}, {}> address: {} auto_write: {} blink_rate: {} brightness: {}",
            WIDTH,
            HEIGHT,
            self.address,
            self.auto_write,
            self.blink_rate,
            self.brightness
        );
    }
}
