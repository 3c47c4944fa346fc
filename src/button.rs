//! Debounced button with multi-click and hold detection.
//!
//! [`Debouncer`] is the pure state machine: it is fed one raw sample per
//! tick and emits at most one [`ButtonEvent`]. [`ButtonInput`] binds it to an
//! `embedded-hal` input pin.
//!
//! All timing uses wrapping differences on a [`Millis`] counter, so the
//! detector keeps working when the clock wraps.

use embedded_hal::digital::InputPin;

use crate::Millis;

/// Raw signal must hold still this long before it is trusted
pub const DEBOUNCE_MS: Millis = 30;
/// Releases closer together than this accumulate into one burst
pub const MULTI_CLICK_WINDOW_MS: Millis = 300;
/// Press duration that turns into a hold
pub const HOLD_THRESHOLD_MS: Millis = 800;

/// Discrete event produced by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonEvent {
    #[default]
    None,
    Click1,
    Click2,
    /// Three or more clicks
    Click3,
    Hold,
}

impl ButtonEvent {
    const fn from_clicks(count: u8) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Click1,
            2 => Self::Click2,
            _ => Self::Click3,
        }
    }
}

/// Per-button session state
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    last_raw: bool,
    last_change: Millis,
    stable: bool,
    press_start: Millis,
    clicks: u8,
    last_release: Millis,
    hold_fired: bool,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            last_raw: false,
            last_change: 0,
            stable: false,
            press_start: 0,
            clicks: 0,
            last_release: 0,
            hold_fired: false,
        }
    }

    /// Debounced pressed state
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample (`true` = pressed)
    pub fn update(&mut self, raw: bool, now: Millis) -> ButtonEvent {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change = now;
        }

        let pressed = if now.wrapping_sub(self.last_change) >= DEBOUNCE_MS {
            self.last_raw
        } else {
            self.stable
        };
        let was_pressed = self.stable;
        self.stable = pressed;

        if pressed && !was_pressed {
            self.press_start = now;
            self.hold_fired = false;
        } else if !pressed && was_pressed {
            if !self.hold_fired {
                self.clicks = self.clicks.saturating_add(1);
                self.last_release = now;
            }
            self.hold_fired = false;
        }

        if pressed
            && !self.hold_fired
            && now.wrapping_sub(self.press_start) >= HOLD_THRESHOLD_MS
        {
            // a hold swallows any burst in progress
            self.hold_fired = true;
            self.clicks = 0;
            return ButtonEvent::Hold;
        }

        if !pressed
            && self.clicks > 0
            && now.wrapping_sub(self.last_release) >= MULTI_CLICK_WINDOW_MS
        {
            let event = ButtonEvent::from_clicks(self.clicks);
            self.clicks = 0;
            return event;
        }

        ButtonEvent::None
    }
}

/// Debounced button on a GPIO pin
pub struct ButtonInput<P: InputPin> {
    pin: P,
    active_low: bool,
    last_sample: bool,
    debouncer: Debouncer,
}

impl<P: InputPin> ButtonInput<P> {
    /// Create a button; `active_low` is the usual pull-up wiring
    pub const fn new(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            last_sample: false,
            debouncer: Debouncer::new(),
        }
    }

    /// Sample the pin and run the debouncer
    ///
    /// A failed read repeats the previous sample.
    pub fn update(&mut self, now: Millis) -> ButtonEvent {
        if let Ok(high) = self.pin.is_high() {
            self.last_sample = high != self.active_low;
        }
        self.debouncer.update(self.last_sample, now)
    }

    pub const fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
