//! Single pixel chasing around the strip

use super::{Animation, step_due};
use crate::Millis;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

#[derive(Debug, Clone)]
pub struct SpinAnimation {
    position: usize,
    last_step: Option<Millis>,
}

impl SpinAnimation {
    pub const fn new() -> Self {
        Self {
            position: 0,
            last_step: None,
        }
    }
}

impl Default for SpinAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for SpinAnimation {
    fn name(&self) -> &'static str {
        super::ANIMATION_NAME_SPIN
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
        let count = surface.pixel_count();
        if count == 0 || !step_due(self.last_step, now, Millis::from(state.step_interval_ms())) {
            return Ok(());
        }
        self.last_step = Some(now);

        surface.clear();
        surface.set_pixel(self.position % count, state.primary())?;
        surface.flush();

        self.position = (self.position + 1) % count;
        Ok(())
    }
}
