//! Animation strategies with compile-time known variants
//!
//! All strategies live in [`AnimationSlot`] so the scheduler can hold them
//! without heap allocation. Each strategy implements [`Animation`] and keeps
//! its own phase, which is reset on `enter`.

mod fade;
mod pixels;
mod solid;
mod spin;
mod spin_tail;
mod strobe;

pub use fade::{FADE_STEP, FadeAnimation};
pub use pixels::PixelsAnimation;
pub use solid::SolidAnimation;
pub use spin::SpinAnimation;
pub use spin_tail::SpinTailAnimation;
pub use strobe::{MIN_HALF_PERIOD_MS, StrobeAnimation};

use crate::Millis;
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

const ANIMATION_NAME_FADE: &str = "fade";
const ANIMATION_NAME_SPIN: &str = "spin";
const ANIMATION_NAME_SPIN_TAIL: &str = "spinTail";
const ANIMATION_NAME_STROBE: &str = "strobe";
const ANIMATION_NAME_SOLID: &str = "solid";
const ANIMATION_NAME_PIXELS: &str = "pixels";

/// Capability set shared by every animation strategy
pub trait Animation {
    /// Registry key, matched case-insensitively
    fn name(&self) -> &'static str;

    /// Called when this animation becomes active
    fn enter<const N: usize>(&mut self, _state: &DeviceState<N>) {}

    /// Called when switching away from this animation
    fn exit(&mut self) {}

    /// Called every tick while active; must never block
    fn render<S: PixelSurface, const N: usize>(
        &mut self,
        now: Millis,
        state: &DeviceState<N>,
        surface: &mut S,
    ) -> Result<(), SurfaceError>;

    /// Force the next render to repaint
    fn invalidate(&mut self) {}
}

/// Known animations, in registration order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationId {
    Fade,
    Spin,
    SpinTail,
    Strobe,
    Solid,
    Pixels,
}

impl AnimationId {
    pub const ALL: [Self; 6] = [
        Self::Fade,
        Self::Spin,
        Self::SpinTail,
        Self::Strobe,
        Self::Solid,
        Self::Pixels,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fade => ANIMATION_NAME_FADE,
            Self::Spin => ANIMATION_NAME_SPIN,
            Self::SpinTail => ANIMATION_NAME_SPIN_TAIL,
            Self::Strobe => ANIMATION_NAME_STROBE,
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Pixels => ANIMATION_NAME_PIXELS,
        }
    }

    /// Case-insensitive lookup by name
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
    }

    pub const fn to_slot(self) -> AnimationSlot {
        match self {
            Self::Fade => AnimationSlot::Fade(FadeAnimation::new()),
            Self::Spin => AnimationSlot::Spin(SpinAnimation::new()),
            Self::SpinTail => AnimationSlot::SpinTail(SpinTailAnimation::new()),
            Self::Strobe => AnimationSlot::Strobe(StrobeAnimation::new()),
            Self::Solid => AnimationSlot::Solid(SolidAnimation::new()),
            Self::Pixels => AnimationSlot::Pixels(PixelsAnimation::new()),
        }
    }
}

/// Animation slot - enum containing all possible strategies
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Triangle-wave brightness ramp
    Fade(FadeAnimation),
    /// Single lit pixel walking around the strip
    Spin(SpinAnimation),
    /// Walking pixel with a fading comet tail
    SpinTail(SpinTailAnimation),
    /// Whole strip toggling on and off
    Strobe(StrobeAnimation),
    /// Whole strip in the primary color, painted once
    Solid(SolidAnimation),
    /// Per-pixel targets copied from the device state
    Pixels(PixelsAnimation),
}

impl AnimationSlot {
    pub const fn id(&self) -> AnimationId {
        match self {
            Self::Fade(_) => AnimationId::Fade,
            Self::Spin(_) => AnimationId::Spin,
            Self::SpinTail(_) => AnimationId::SpinTail,
            Self::Strobe(_) => AnimationId::Strobe,
            Self::Solid(_) => AnimationId::Solid,
            Self::Pixels(_) => AnimationId::Pixels,
        }
    }
}

impl Animation for AnimationSlot {
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    fn enter<const N: usize>(&mut self, state: &DeviceState<N>) {
        match self {
            Self::Fade(animation) => animation.enter(state),
            Self::Spin(animation) => animation.enter(state),
            Self::SpinTail(animation) => animation.enter(state),
            Self::Strobe(animation) => animation.enter(state),
            Self::Solid(animation) => animation.enter(state),
            Self::Pixels(animation) => animation.enter(state),
        }
    }

    fn exit(&mut self) {
        match self {
            Self::Fade(animation) => animation.exit(),
            Self::Spin(animation) => animation.exit(),
            Self::SpinTail(animation) => animation.exit(),
            Self::Strobe(animation) => animation.exit(),
            Self::Solid(animation) => animation.exit(),
            Self::Pixels(animation) => animation.exit(),
        }
    }

    fn render<S: PixelSurface, const N: usize>(
        &mut self,
        now: Millis,
        state: &DeviceState<N>,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        match self {
            Self::Fade(animation) => animation.render(now, state, surface),
            Self::Spin(animation) => animation.render(now, state, surface),
            Self::SpinTail(animation) => animation.render(now, state, surface),
            Self::Strobe(animation) => animation.render(now, state, surface),
            Self::Solid(animation) => animation.render(now, state, surface),
            Self::Pixels(animation) => animation.render(now, state, surface),
        }
    }

    fn invalidate(&mut self) {
        match self {
            Self::Fade(animation) => animation.invalidate(),
            Self::Spin(animation) => animation.invalidate(),
            Self::SpinTail(animation) => animation.invalidate(),
            Self::Strobe(animation) => animation.invalidate(),
            Self::Solid(animation) => animation.invalidate(),
            Self::Pixels(animation) => animation.invalidate(),
        }
    }
}

/// Returns true once `interval` has passed since `last`, or if there is no
/// previous step yet
pub(crate) const fn step_due(last: Option<Millis>, now: Millis, interval: Millis) -> bool {
    match last {
        Some(last) => now.wrapping_sub(last) >= interval,
        None => true,
    }
}
