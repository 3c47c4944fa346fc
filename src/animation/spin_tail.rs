//! Spinning head with a linearly fading tail
//!
//! The tail is `tail_length` pixels long including the head, clamped to the
//! strip length. Offset `t` behind the head is scaled by `1 - t / tail`.

use super::{Animation, step_due};
use crate::Millis;
use crate::color::scale_color;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

#[derive(Debug, Clone)]
pub struct SpinTailAnimation {
    head: usize,
    last_step: Option<Millis>,
}

impl SpinTailAnimation {
    pub const fn new() -> Self {
        Self {
            head: 0,
            last_step: None,
        }
    }
}

impl Default for SpinTailAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for SpinTailAnimation {
    fn name(&self) -> &'static str {
        super::ANIMATION_NAME_SPIN_TAIL
    }

    fn enter<const N: usize>(&mut self, _state: &DeviceState<N>) {
        *self = Self::new();
    }

    #[allow(clippy::cast_precision_loss)]
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

        let tail = usize::from(state.tail_length()).min(count);
        let head = self.head % count;

        surface.clear();
        for offset in 0..tail {
            let index = (head + count - offset) % count;
            let factor = 1.0 - offset as f32 / tail as f32;
            surface.set_pixel(index, scale_color(state.primary(), factor))?;
        }
        surface.flush();

        self.head = (head + 1) % count;
        Ok(())
    }
}
