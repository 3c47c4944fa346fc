//! Top-level control loop.
//!
//! One [`ControlLoop`] owns the device state, the animation registry, the
//! button and the pixel surface. Each [`tick`](ControlLoop::tick) runs, in
//! order: button, queued commands, pending presence, the settle timer, and
//! finally the active animation. State is only mutated inside `tick`, so
//! button and presence updates never interleave.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationId;
use crate::button::{ButtonEvent, ButtonInput};
use crate::color::Rgb;
use crate::command::{Command, CommandReceiver, PresenceSignal};
use crate::config::DeviceConfig;
use crate::effect::{PresenceLayout, resolve};
use crate::error::{CommandError, SetupError};
use crate::presence::Presence;
use crate::scheduler::Animations;
use crate::state::{DeviceState, DeviceStatus};
use crate::surface::PixelSurface;
use crate::{Millis, millis};

/// Armed second phase of a two-phase effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTimer {
    pub started: Millis,
    pub duration: Millis,
    pub then: AnimationId,
}

impl SettleTimer {
    pub const fn is_due(&self, now: Millis) -> bool {
        now.wrapping_sub(self.started) >= self.duration
    }
}

/// Result of a tick
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Event the button produced this tick
    pub button: ButtonEvent,
    /// The deadline for the next tick
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Device orchestrator
pub struct ControlLoop<'a, S: PixelSurface, P: InputPin, const N: usize> {
    // External dependencies and configuration
    surface: S,
    button: ButtonInput<P>,
    commands: CommandReceiver<'a>,
    presence: &'a PresenceSignal,
    layout: PresenceLayout,
    settle_after: Duration,
    color_presets: &'static [Rgb],
    tick_interval: Duration,

    // Internal state
    state: DeviceState<N>,
    animations: Animations,
    last_presence: Presence,
    settle: Option<SettleTimer>,
    lit: bool,
    preset_index: usize,
    next_tick: Instant,
}

impl<'a, S: PixelSurface, P: InputPin, const N: usize> ControlLoop<'a, S, P, N> {
    /// Wire the loop together and activate the configured animation
    pub fn new(
        mut surface: S,
        button: ButtonInput<P>,
        commands: CommandReceiver<'a>,
        presence: &'a PresenceSignal,
        config: &DeviceConfig,
    ) -> Result<Self, SetupError> {
        if surface.pixel_count() != N {
            return Err(SetupError::PixelCountMismatch {
                surface: surface.pixel_count(),
                state: N,
            });
        }

        let state = DeviceState::new(config);
        surface.set_brightness(state.brightness());
        surface.clear();
        surface.flush();

        let mut control = Self {
            surface,
            button,
            commands,
            presence,
            layout: config.layout,
            settle_after: config.settle_duration,
            color_presets: config.color_presets,
            tick_interval: config.tick_interval,
            lit: state.power(),
            state,
            animations: Animations::with_builtin(),
            last_presence: Presence::Unknown,
            settle: None,
            preset_index: 0,
            next_tick: Instant::from_millis(0),
        };
        control.select(config.animation);
        Ok(control)
    }

    /// Run one cooperative step; never blocks
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let now_ms = millis(now);

        let button = self.button.update(now_ms);
        if let Some(command) = Command::from_button(button) {
            #[cfg(feature = "esp32-log")]
            println!("[button] {:?} -> {:?}", button, command);
            self.submit(command);
        }

        while let Some(command) = self.commands.try_receive() {
            self.submit(command);
        }

        if let Some(presence) = self.presence.take() {
            self.apply_presence(presence, now_ms);
        }

        self.process_settle(now_ms);
        self.render(now_ms);

        self.pace(now, button)
    }

    /// Apply a command immediately
    ///
    /// Rejected commands leave the state untouched.
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::SetAnimation(name) => {
                self.select(&name);
            }
            Command::NextAnimation => {
                self.animations.advance_to_next(&self.state);
                self.sync_animation_name();
            }
            Command::ToggleStrobe => {
                if self.animations.current_name() == Some(AnimationId::Strobe.as_str()) {
                    self.select(AnimationId::Fade.as_str());
                } else {
                    self.select(AnimationId::Strobe.as_str());
                }
            }
            Command::CycleColor => {
                if !self.color_presets.is_empty() {
                    self.preset_index = (self.preset_index + 1) % self.color_presets.len();
                    self.set_primary(self.color_presets[self.preset_index]);
                }
            }
            Command::SetBrightness(level) => {
                self.state.set_brightness(level);
                self.surface.set_brightness(level);
                self.surface.flush();
            }
            Command::SetColor(color) => self.set_primary(color),
            Command::SetSecondaryColor(color) => self.state.set_secondary(color),
            Command::SetPixel { position, color } => {
                self.state.set_pixel(position, color)?;
                self.select(AnimationId::Pixels.as_str());
            }
            Command::SetPixels(updates) => {
                self.state.set_pixels(&updates)?;
                self.select(AnimationId::Pixels.as_str());
            }
            Command::SetPower(on) => self.state.set_power(on),
            Command::TogglePower => self.state.set_power(!self.state.power()),
            Command::SetStepInterval(interval) => self.state.set_step_interval(interval)?,
            Command::SetTailLength(length) => self.state.set_tail_length(length)?,
            Command::SetStrobePeriod(period) => self.state.set_strobe_period(period)?,
        }
        Ok(())
    }

    pub fn state(&self) -> &DeviceState<N> {
        &self.state
    }

    pub fn status(&self) -> DeviceStatus {
        self.state.status()
    }

    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn button_mut(&mut self) -> &mut ButtonInput<P> {
        &mut self.button
    }

    /// Last presence classification acted upon
    pub const fn last_presence(&self) -> Presence {
        self.last_presence
    }

    /// Pending settle phase, if one is armed
    pub const fn settle(&self) -> Option<SettleTimer> {
        self.settle
    }

    fn submit(&mut self, command: Command) {
        if let Err(_err) = self.apply(command) {
            #[cfg(feature = "esp32-log")]
            println!("[command] rejected: {}", _err);
        }
    }

    /// Resolve a changed presence into state, animation and settle timer
    fn apply_presence(&mut self, presence: Presence, now: Millis) {
        if presence == self.last_presence {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[presence] {} -> {}",
            self.last_presence.as_str(),
            presence.as_str()
        );
        self.last_presence = presence;

        let effect = resolve(presence, self.layout, self.settle_after);
        self.state.set_primary(effect.color);
        match effect.hint.position() {
            Some(position) => self.state.stamp_pixels(&[position], effect.color),
            None => self.state.fill_pixels(effect.color),
        }

        // a newer presence always supersedes a pending settle
        self.settle = None;

        let Some(animation) = effect.animation else {
            self.state.set_power(false);
            return;
        };
        self.select(animation.as_str());
        self.state.set_power(true);

        if let Some(settle) = effect.settle {
            #[allow(clippy::cast_possible_truncation)]
            let duration = settle.after.as_millis() as Millis;
            self.settle = Some(SettleTimer {
                started: now,
                duration,
                then: settle.then,
            });
        }
    }

    fn process_settle(&mut self, now: Millis) {
        let Some(timer) = self.settle else {
            return;
        };
        if !timer.is_due(now) {
            return;
        }
        self.settle = None;
        #[cfg(feature = "esp32-log")]
        println!("[presence] settling into {}", timer.then.as_str());
        self.select(timer.then.as_str());
    }

    fn render(&mut self, now: Millis) {
        if !self.state.power() {
            if self.lit {
                self.surface.clear();
                self.surface.flush();
                self.lit = false;
            }
            return;
        }
        if !self.lit {
            // one-shot renderers must repaint after being dark
            self.animations.invalidate();
            self.lit = true;
        }

        if let Err(_err) = self.animations.render(now, &self.state, &mut self.surface) {
            #[cfg(feature = "esp32-log")]
            println!("[render] {}", _err);
        }
    }

    fn select(&mut self, name: &str) -> bool {
        let found = self.animations.set_active(name, &self.state);
        if found {
            self.sync_animation_name();
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[animation] unknown animation {}", name);
        }
        found
    }

    fn set_primary(&mut self, color: Rgb) {
        self.state.set_primary(color);
        self.animations.invalidate();
    }

    fn sync_animation_name(&mut self) {
        self.state
            .set_animation(self.animations.current_name().unwrap_or_default());
    }

    /// Frame pacing with drift correction
    ///
    /// If we fall more than two ticks behind, the backlog is skipped.
    fn pace(&mut self, now: Instant, button: ButtonEvent) -> TickResult {
        let max_drift = self.tick_interval * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }
        self.next_tick += self.tick_interval;

        TickResult {
            button,
            next_deadline: self.next_tick,
            sleep_duration: self.next_tick.saturating_duration_since(now),
        }
    }
}
