//! Whole-strip strobe
//!
//! Toggles between the primary color and off every half of the strobe
//! period, never faster than [`MIN_HALF_PERIOD_MS`]. Runs on its own clock,
//! independent of the step interval.

use super::{Animation, step_due};
use crate::Millis;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

/// Shortest time the strip stays in one strobe phase
pub const MIN_HALF_PERIOD_MS: Millis = 50;

#[derive(Debug, Clone)]
pub struct StrobeAnimation {
    lit: bool,
    last_toggle: Option<Millis>,
}

impl StrobeAnimation {
    pub const fn new() -> Self {
        Self {
            lit: false,
            last_toggle: None,
        }
    }

    pub const fn is_lit(&self) -> bool {
        self.lit
    }
}

impl Default for StrobeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for StrobeAnimation {
    fn name(&self) -> &'static str {
        super::ANIMATION_NAME_STROBE
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
        let half_period = Millis::from(state.strobe_period_ms() / 2).max(MIN_HALF_PERIOD_MS);
        if !step_due(self.last_toggle, now, half_period) {
            return Ok(());
        }
        self.last_toggle = Some(now);

        self.lit = !self.lit;
        if self.lit {
            surface.fill(state.primary())?;
        } else {
            surface.clear();
        }
        surface.flush();
        Ok(())
    }
}
