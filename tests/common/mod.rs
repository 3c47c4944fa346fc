#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use myrtio_presence_ring::{OutputDriver, PixelSurface, Rgb, SurfaceError};

/// In-memory surface that counts flushes and clears
pub(crate) struct RecordingSurface<const N: usize> {
    pub(crate) frame: [Rgb; N],
    pub(crate) flushed: [Rgb; N],
    pub(crate) flushes: usize,
    pub(crate) clears: usize,
    pub(crate) brightness: u8,
}

impl<const N: usize> RecordingSurface<N> {
    pub(crate) fn new() -> Self {
        Self {
            frame: [Rgb::default(); N],
            flushed: [Rgb::default(); N],
            flushes: 0,
            clears: 0,
            brightness: 0,
        }
    }
}

impl<const N: usize> PixelSurface for RecordingSurface<N> {
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
        self.clears += 1;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn flush(&mut self) {
        self.flushed = self.frame;
        self.flushes += 1;
    }
}

/// Driver that keeps the last written frame
#[derive(Default)]
pub(crate) struct CaptureDriver {
    pub(crate) written: Vec<Rgb>,
    pub(crate) writes: usize,
}

impl OutputDriver for CaptureDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.written = colors.to_vec();
        self.writes += 1;
    }
}

/// Input pin driven from the test through shared cells
#[derive(Clone, Default)]
pub(crate) struct FakePin {
    pub(crate) high: Rc<Cell<bool>>,
    pub(crate) failing: Rc<Cell<bool>>,
}

impl ErrorType for FakePin {
    type Error = ErrorKind;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.failing.get() {
            return Err(ErrorKind::Other);
        }
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
