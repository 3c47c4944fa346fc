//! Direct per-pixel mode
//!
//! Copies the state's pixel targets to the surface, but only when the
//! pixel version moved since the last copy. The version counter is the only
//! staleness check; there is no time gating and no array diffing.

use super::Animation;
use crate::Millis;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

#[derive(Debug, Clone)]
pub struct PixelsAnimation {
    rendered_version: Option<u32>,
}

impl PixelsAnimation {
    pub const fn new() -> Self {
        Self {
            rendered_version: None,
        }
    }
}

impl Default for PixelsAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for PixelsAnimation {
    fn name(&self) -> &'static str {
        super::ANIMATION_NAME_PIXELS
    }

    fn enter<const N: usize>(&mut self, _state: &DeviceState<N>) {
        self.rendered_version = None;
    }

    fn render<S: PixelSurface, const N: usize>(
        &mut self,
        _now: Millis,
        state: &DeviceState<N>,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        let version = state.pixel_version();
        if self.rendered_version == Some(version) {
            return Ok(());
        }

        for (index, color) in state.pixels().iter().take(surface.pixel_count()).enumerate() {
            surface.set_pixel(index, *color)?;
        }
        surface.flush();
        self.rendered_version = Some(version);
        Ok(())
    }

    fn invalidate(&mut self) {
        self.rendered_version = None;
    }
}
