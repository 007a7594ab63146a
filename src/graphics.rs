//! embedded-graphics integration for [`Ht16k33`].
//!
//! Drawing mutates the local frame buffer only; pixels outside the display
//! are ignored per the `DrawTarget` contract and nothing is synced to the
//! device, regardless of the auto-write setting. Call
//! [`show`](Ht16k33::show) once per frame to present what was drawn.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{OriginDimensions, Size};
use embedded_graphics::Pixel;

use crate::matrix::Ht16k33;

impl<I2C, const WIDTH: usize, const HEIGHT: usize> OriginDimensions
    for Ht16k33<I2C, WIDTH, HEIGHT>
{
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C, const WIDTH: usize, const HEIGHT: usize> DrawTarget for Ht16k33<I2C, WIDTH, HEIGHT> {
    type Color = BinaryColor;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel_internal(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}
