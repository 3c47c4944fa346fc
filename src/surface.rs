//! Addressable pixel surface.
//!
//! Animations draw into a [`PixelSurface`] and call `flush` when a frame is
//! complete. [`FrameSurface`] is the stock implementation: it buffers one
//! frame and hands it to an [`OutputDriver`] with brightness applied.

use crate::OutputDriver;
use crate::color::Rgb;
use crate::error::SurfaceError;

/// Indexed color surface with brightness scaling and explicit flush
pub trait PixelSurface {
    /// Number of physical pixels
    fn pixel_count(&self) -> usize;

    /// Set a single pixel. Indices outside `0..pixel_count()` are rejected.
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SurfaceError>;

    /// Turn every pixel off (takes effect on the next flush)
    fn clear(&mut self);

    /// Set the global output brightness
    fn set_brightness(&mut self, level: u8);

    /// Push the buffered frame to the hardware
    fn flush(&mut self);

    /// Paint every pixel with one color
    fn fill(&mut self, color: Rgb) -> Result<(), SurfaceError> {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color)?;
        }
        Ok(())
    }
}

/// Frame-buffered surface over an [`OutputDriver`]
pub struct FrameSurface<D: OutputDriver, const N: usize> {
    driver: D,
    frame: [Rgb; N],
    output: [Rgb; N],
    brightness: u8,
}

impl<D: OutputDriver, const N: usize> FrameSurface<D, N> {
    pub const fn new(driver: D, brightness: u8) -> Self {
        Self {
            driver,
            frame: [Rgb::new(0, 0, 0); N],
            output: [Rgb::new(0, 0, 0); N],
            brightness,
        }
    }

    /// Buffered frame, before brightness scaling
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const N: usize> PixelSurface for FrameSurface<D, N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SurfaceError> {
        let pixel = self
            .frame
            .get_mut(index)
            .ok_or(SurfaceError::OutOfRange { index, count: N })?;
        *pixel = color;
        Ok(())
    }

    fn clear(&mut self) {
        self.frame = [Rgb::default(); N];
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn flush(&mut self) {
        let scaled = smart_leds::brightness(self.frame.iter().copied(), self.brightness);
        for (out, color) in self.output.iter_mut().zip(scaled) {
            *out = color;
        }
        self.driver.write(&self.output);
    }
}
