//! Solid color fill
//!
//! Paints the primary color once per activation and then idles, so the
//! strip is not re-flushed every tick.

use super::Animation;
use crate::Millis;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

#[derive(Debug, Clone)]
pub struct SolidAnimation {
    dirty: bool,
}

impl SolidAnimation {
    pub const fn new() -> Self {
        Self { dirty: true }
    }
}

impl Default for SolidAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for SolidAnimation {
    fn name(&self) -> &'static str {
        super::ANIMATION_NAME_SOLID
    }

    fn enter<const N: usize>(&mut self, _state: &DeviceState<N>) {
        self.dirty = true;
    }

    fn render<S: PixelSurface, const N: usize>(
        &mut self,
        _now: Millis,
        state: &DeviceState<N>,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        if !self.dirty {
            return Ok(());
        }
        surface.fill(state.primary())?;
        surface.flush();
        self.dirty = false;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }
}
