//! Animation registry with a single active slot.
//!
//! Switching always runs the outgoing `exit` before the incoming `enter`,
//! and nothing renders in between.

use heapless::Vec;

use crate::Millis;
use crate::animation::{Animation, AnimationId, AnimationSlot};
use crate::error::SurfaceError;
use crate::state::DeviceState;
use crate::surface::PixelSurface;

/// Registry capacity used by [`Animations`]
pub const ANIMATION_CAPACITY: usize = AnimationId::ALL.len();

/// Scheduler holding every built-in strategy
pub type Animations = AnimationScheduler<AnimationSlot, ANIMATION_CAPACITY>;

/// Ordered set of animations with at most one active
#[derive(Debug)]
pub struct AnimationScheduler<A: Animation, const CAP: usize> {
    animations: Vec<A, CAP>,
    active: Option<usize>,
}

impl<A: Animation, const CAP: usize> AnimationScheduler<A, CAP> {
    pub const fn new() -> Self {
        Self {
            animations: Vec::new(),
            active: None,
        }
    }

    /// Register an animation
    ///
    /// Returns the animation back if the registry is full.
    pub fn add(&mut self, animation: A) -> Result<(), A> {
        self.animations.push(animation)
    }

    /// Activate the animation whose name matches, ignoring ASCII case
    ///
    /// Unknown names leave the current animation untouched and return false.
    pub fn set_active<const N: usize>(&mut self, name: &str, state: &DeviceState<N>) -> bool {
        let Some(index) = self
            .animations
            .iter()
            .position(|animation| animation.name().eq_ignore_ascii_case(name))
        else {
            return false;
        };
        self.switch_to(index, state);
        true
    }

    /// Activate the next animation, wrapping to the first
    ///
    /// With nothing active yet this activates the first one.
    pub fn advance_to_next<const N: usize>(&mut self, state: &DeviceState<N>) {
        if self.animations.is_empty() {
            return;
        }
        let next = self
            .active
            .map_or(0, |index| (index + 1) % self.animations.len());
        self.switch_to(next, state);
    }

    /// Render the active animation, if any
    pub fn render<S: PixelSurface, const N: usize>(
        &mut self,
        now: Millis,
        state: &DeviceState<N>,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        match self.active_mut() {
            Some(animation) => animation.render(now, state, surface),
            None => Ok(()),
        }
    }

    /// Force the active animation to repaint on its next render
    pub fn invalidate(&mut self) {
        if let Some(animation) = self.active_mut() {
            animation.invalidate();
        }
    }

    /// Name of the active animation
    pub fn current_name(&self) -> Option<&'static str> {
        self.active
            .and_then(|index| self.animations.get(index))
            .map(Animation::name)
    }

    /// Names of every registered animation, in registration order
    pub fn list_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.animations.iter().map(Animation::name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    fn active_mut(&mut self) -> Option<&mut A> {
        let index = self.active?;
        self.animations.get_mut(index)
    }

    fn switch_to<const N: usize>(&mut self, index: usize, state: &DeviceState<N>) {
        if let Some(outgoing) = self.active_mut() {
            outgoing.exit();
        }
        self.active = Some(index);
        if let Some(incoming) = self.animations.get_mut(index) {
            incoming.enter(state);
        }
    }
}

impl<A: Animation, const CAP: usize> Default for AnimationScheduler<A, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl Animations {
    /// Scheduler with every built-in animation registered
    pub fn with_builtin() -> Self {
        Self {
            animations: AnimationId::ALL.into_iter().map(AnimationId::to_slot).collect(),
            active: None,
        }
    }
}
