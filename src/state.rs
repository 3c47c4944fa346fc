//! Shared device state.
//!
//! One [`DeviceState`] is owned by the control loop and lent to every render
//! call. Setters validate their input; rejected values never land here.

use crate::color::Rgb;
use crate::config::DeviceConfig;
use crate::error::CommandError;

pub const MIN_TAIL_LENGTH: u8 = 1;
pub const MAX_TAIL_LENGTH: u8 = 12;
pub const MIN_STEP_INTERVAL_MS: u16 = 1;
pub const MIN_STROBE_PERIOD_MS: u16 = 10;

/// One entry of a per-pixel batch update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelUpdate {
    pub position: usize,
    pub color: Rgb,
}

/// Device settings and per-pixel targets
///
/// `N` is the physical pixel count.
#[derive(Debug, Clone)]
pub struct DeviceState<const N: usize> {
    power: bool,
    brightness: u8,
    primary: Rgb,
    secondary: Rgb,
    animation: &'static str,
    step_interval_ms: u16,
    tail_length: u8,
    strobe_period_ms: u16,
    pixels: [Rgb; N],
    pixel_version: u32,
}

/// Read-only snapshot for status queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceStatus {
    pub power: bool,
    pub brightness: u8,
    pub animation: &'static str,
    pub color: Rgb,
    pub step_interval_ms: u16,
    pub tail_length: u8,
    pub strobe_period_ms: u16,
    pub pixel_version: u32,
}

impl<const N: usize> DeviceState<N> {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            power: config.power,
            brightness: config.brightness,
            primary: config.color,
            secondary: config.secondary_color,
            animation: "",
            step_interval_ms: config.step_interval_ms.max(MIN_STEP_INTERVAL_MS),
            tail_length: config.tail_length.clamp(MIN_TAIL_LENGTH, MAX_TAIL_LENGTH),
            strobe_period_ms: config.strobe_period_ms.max(MIN_STROBE_PERIOD_MS),
            pixels: [Rgb::default(); N],
            pixel_version: 1,
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn primary(&self) -> Rgb {
        self.primary
    }

    pub const fn secondary(&self) -> Rgb {
        self.secondary
    }

    /// Name of the active animation, empty before the first activation
    pub const fn animation(&self) -> &'static str {
        self.animation
    }

    pub const fn step_interval_ms(&self) -> u16 {
        self.step_interval_ms
    }

    pub const fn tail_length(&self) -> u8 {
        self.tail_length
    }

    pub const fn strobe_period_ms(&self) -> u16 {
        self.strobe_period_ms
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Bumped on every pixel array mutation
    pub const fn pixel_version(&self) -> u32 {
        self.pixel_version
    }

    pub const fn status(&self) -> DeviceStatus {
        DeviceStatus {
            power: self.power,
            brightness: self.brightness,
            animation: self.animation,
            color: self.primary,
            step_interval_ms: self.step_interval_ms,
            tail_length: self.tail_length,
            strobe_period_ms: self.strobe_period_ms,
            pixel_version: self.pixel_version,
        }
    }

    pub fn set_power(&mut self, on: bool) {
        self.power = on;
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    pub fn set_primary(&mut self, color: Rgb) {
        self.primary = color;
    }

    pub fn set_secondary(&mut self, color: Rgb) {
        self.secondary = color;
    }

    pub(crate) fn set_animation(&mut self, name: &'static str) {
        self.animation = name;
    }

    pub fn set_step_interval(&mut self, interval_ms: u16) -> Result<(), CommandError> {
        if interval_ms < MIN_STEP_INTERVAL_MS {
            return Err(CommandError::StepInterval(i32::from(interval_ms)));
        }
        self.step_interval_ms = interval_ms;
        Ok(())
    }

    pub fn set_tail_length(&mut self, length: u8) -> Result<(), CommandError> {
        if !(MIN_TAIL_LENGTH..=MAX_TAIL_LENGTH).contains(&length) {
            return Err(CommandError::TailLength(i32::from(length)));
        }
        self.tail_length = length;
        Ok(())
    }

    pub fn set_strobe_period(&mut self, period_ms: u16) -> Result<(), CommandError> {
        if period_ms < MIN_STROBE_PERIOD_MS {
            return Err(CommandError::StrobePeriod(i32::from(period_ms)));
        }
        self.strobe_period_ms = period_ms;
        Ok(())
    }

    /// Set one pixel target and bump the version
    pub fn set_pixel(&mut self, position: usize, color: Rgb) -> Result<(), CommandError> {
        let pixel = self
            .pixels
            .get_mut(position)
            .ok_or(CommandError::PixelIndex {
                index: position,
                count: N,
            })?;
        *pixel = color;
        self.bump_version();
        Ok(())
    }

    /// Apply a batch of pixel targets with a single version bump
    ///
    /// Out-of-range entries are skipped. Returns the number applied, or
    /// [`CommandError::EmptyPixelBatch`] if nothing was valid.
    pub fn set_pixels(&mut self, updates: &[PixelUpdate]) -> Result<usize, CommandError> {
        let mut applied = 0;
        for update in updates {
            if let Some(pixel) = self.pixels.get_mut(update.position) {
                *pixel = update.color;
                applied += 1;
            }
        }
        if applied == 0 {
            return Err(CommandError::EmptyPixelBatch);
        }
        self.bump_version();
        Ok(applied)
    }

    /// Clear every pixel target and light only `positions` with `color`
    ///
    /// Positions outside the strip are skipped. Always bumps the version once.
    pub(crate) fn stamp_pixels(&mut self, positions: &[usize], color: Rgb) {
        self.pixels = [Rgb::default(); N];
        for &position in positions {
            if let Some(pixel) = self.pixels.get_mut(position) {
                *pixel = color;
            }
        }
        self.bump_version();
    }

    /// Fill every pixel target with `color`
    pub(crate) fn fill_pixels(&mut self, color: Rgb) {
        self.pixels = [color; N];
        self.bump_version();
    }

    fn bump_version(&mut self) {
        self.pixel_version = self.pixel_version.wrapping_add(1);
    }
}
