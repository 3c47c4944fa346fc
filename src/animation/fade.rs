//! Breathing effect
//!
//! Ramps brightness up and down in steps of [`FADE_STEP`] and scales the
//! primary color with it. One step per shared step interval.

use super::{Animation, step_due};
use crate::Millis;
use crate::color::scale_color;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

pub const FADE_STEP: u8 = 5;

#[derive(Debug, Clone)]
pub struct FadeAnimation {
    level: u8,
    rising: bool,
    last_step: Option<Millis>,
}

impl FadeAnimation {
    pub const fn new() -> Self {
        Self {
            level: 0,
            rising: true,
            last_step: None,
        }
    }

    /// Current ramp level (0-255)
    pub const fn level(&self) -> u8 {
        self.level
    }

    fn advance(&mut self) {
        if self.rising {
            self.level = self.level.saturating_add(FADE_STEP);
            if self.level == u8::MAX {
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(FADE_STEP);
            if self.level == 0 {
                self.rising = true;
            }
        }
    }
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for FadeAnimation {
    fn name(&self) -> &'static str {
        super::ANIMATION_NAME_FADE
    }

    fn enter<const N: usize>(&mut self, _state: &DeviceState<N>) {
        *self = Self::new();
    }

    fn render<S: PixelSurface, const N: usize>(
        &mut self,
        now: Millis,
        state: &DeviceState<N>,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        if !step_due(self.last_step, now, Millis::from(state.step_interval_ms())) {
            return Ok(());
        }
        self.last_step = Some(now);
        self.advance();

        let color = scale_color(state.primary(), f32::from(self.level) / 255.0);
        surface.fill(color)?;
        surface.flush();
        Ok(())
    }
}
