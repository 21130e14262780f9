//! In-memory RGB565 frame for the 240x240 panel.
//!
//! Pixels are stored big-endian, row-major, in the order the ST7789 expects
//! after a full-screen `RAMWR`, so a finished frame is sent as one transfer.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use station_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Bytes in one frame (115,200).
pub const FRAME_BYTES: usize = WIDTH * HEIGHT * 2;

#[inline]
fn to_wire(color: Rgb565) -> [u8; 2] { RawU16::from(color).into_inner().to_be_bytes() }

/// Drawing surface over a borrowed frame buffer.
pub struct Frame<'a> {
    bytes: &'a mut [u8; FRAME_BYTES],
}

impl<'a> Frame<'a> {
    pub fn new(bytes: &'a mut [u8; FRAME_BYTES]) -> Self { Self { bytes } }

    /// Raw frame, ready to send to the panel.
    pub fn as_bytes(&self) -> &[u8] { self.bytes.as_slice() }

    /// Color at `point`, or `None` outside the panel.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        let at = offset(point)?;
        let raw = u16::from_be_bytes([self.bytes[at], self.bytes[at + 1]]);
        Some(RawU16::new(raw).into())
    }

    fn fill_span(
        &mut self,
        start: usize,
        pixels: usize,
        color: Rgb565,
    ) {
        let wire = to_wire(color);
        for px in self.bytes[start..start + pixels * 2].chunks_exact_mut(2) {
            px.copy_from_slice(&wire);
        }
    }
}

/// Byte offset of `point`, if it lies on the panel.
fn offset(point: Point) -> Option<usize> {
    let x = usize::try_from(point.x).ok().filter(|&x| x < WIDTH)?;
    let y = usize::try_from(point.y).ok().filter(|&y| y < HEIGHT)?;
    Some((y * WIDTH + x) * 2)
}

impl OriginDimensions for Frame<'_> {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Frame<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(at) = offset(point) {
                self.bytes[at..at + 2].copy_from_slice(&to_wire(color));
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        let Some(bottom_right) = visible.bottom_right() else {
            return Ok(());
        };
        let width = visible.size.width as usize;
        for y in visible.top_left.y..=bottom_right.y {
            if let Some(start) = offset(Point::new(visible.top_left.x, y)) {
                self.fill_span(start, width, color);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.fill_span(0, WIDTH * HEIGHT, color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_common::colors::{BLACK, RED, WHITE};

    fn with_frame(test: impl FnOnce(&mut Frame<'_>)) {
        let mut bytes = Box::new([0u8; FRAME_BYTES]);
        let mut frame = Frame::new(&mut bytes);
        test(&mut frame);
    }

    #[test]
    fn test_clear_writes_big_endian() {
        with_frame(|frame| {
            frame.clear(RED).ok();
            // Pure red is 0xF800
            assert_eq!(&frame.as_bytes()[..4], &[0xF8, 0x00, 0xF8, 0x00]);
            assert_eq!(frame.pixel(Point::new(239, 239)), Some(RED));
        });
    }

    #[test]
    fn test_pixels_outside_are_dropped() {
        with_frame(|frame| {
            Pixel(Point::new(-1, 0), WHITE).draw(frame).ok();
            Pixel(Point::new(240, 10), WHITE).draw(frame).ok();
            Pixel(Point::new(3, 2), WHITE).draw(frame).ok();

            assert_eq!(frame.as_bytes().iter().filter(|&&b| b != 0).count(), 2);
            assert_eq!(frame.pixel(Point::new(3, 2)), Some(WHITE));
            assert_eq!(frame.pixel(Point::new(240, 10)), None);
        });
    }

    #[test]
    fn test_fill_solid_is_clipped() {
        with_frame(|frame| {
            frame.clear(BLACK).ok();
            frame
                .fill_solid(&Rectangle::new(Point::new(230, 230), Size::new(20, 20)), WHITE)
                .ok();

            assert_eq!(frame.pixel(Point::new(229, 229)), Some(BLACK));
            assert_eq!(frame.pixel(Point::new(230, 230)), Some(WHITE));
            assert_eq!(frame.pixel(Point::new(239, 239)), Some(WHITE));
            assert_eq!(frame.pixel(Point::new(239, 229)), Some(BLACK));
        });
    }

    #[test]
    fn test_fill_solid_fully_outside() {
        with_frame(|frame| {
            frame
                .fill_solid(&Rectangle::new(Point::new(300, 0), Size::new(10, 10)), WHITE)
                .ok();
            assert!(frame.as_bytes().iter().all(|&b| b == 0));
        });
    }
}
