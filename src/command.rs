//! Command vocabulary shared by the button and external control surfaces.
//!
//! Every state change goes through a [`Command`], applied by the control
//! loop between ticks. The validating constructors turn raw wire values into
//! commands and reject anything out of range before it is queued.

use heapless::{String, Vec};

use crate::button::ButtonEvent;
use crate::channel::{Channel, Receiver, Sender, Signal, TrySendError};
use crate::color::Rgb;
use crate::error::CommandError;
use crate::presence::Presence;
use crate::state::{
    MAX_TAIL_LENGTH, MIN_STEP_INTERVAL_MS, MIN_STROBE_PERIOD_MS, MIN_TAIL_LENGTH, PixelUpdate,
};

/// Longest animation name a command can carry
pub const MAX_NAME_LEN: usize = 16;
/// Largest per-pixel batch a single command can carry
pub const MAX_PIXEL_BATCH: usize = 16;
pub const COMMAND_CHANNEL_SIZE: usize = 8;

/// State changes understood by the control loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate an animation by name (case-insensitive, unknown is ignored)
    SetAnimation(String<MAX_NAME_LEN>),
    NextAnimation,
    /// Switch between strobe and fade
    ToggleStrobe,
    /// Move to the next preset color
    CycleColor,
    SetBrightness(u8),
    SetColor(Rgb),
    SetSecondaryColor(Rgb),
    /// Set one pixel target and show the pixel targets
    SetPixel { position: usize, color: Rgb },
    /// Set several pixel targets with one version bump and show them
    SetPixels(Vec<PixelUpdate, MAX_PIXEL_BATCH>),
    SetPower(bool),
    TogglePower,
    SetStepInterval(u16),
    SetTailLength(u8),
    SetStrobePeriod(u16),
}

impl Command {
    /// Button gesture mapping
    pub const fn from_button(event: ButtonEvent) -> Option<Self> {
        match event {
            ButtonEvent::None => None,
            ButtonEvent::Click1 => Some(Self::NextAnimation),
            ButtonEvent::Click2 => Some(Self::ToggleStrobe),
            ButtonEvent::Click3 => Some(Self::CycleColor),
            ButtonEvent::Hold => Some(Self::TogglePower),
        }
    }

    pub fn set_animation(name: &str) -> Result<Self, CommandError> {
        String::try_from(name)
            .map(Self::SetAnimation)
            .map_err(|()| CommandError::NameTooLong)
    }

    pub fn brightness(value: i32) -> Result<Self, CommandError> {
        u8::try_from(value)
            .map(Self::SetBrightness)
            .map_err(|_| CommandError::Brightness(value))
    }

    pub fn step_interval(value: i32) -> Result<Self, CommandError> {
        u16::try_from(value)
            .ok()
            .filter(|interval| *interval >= MIN_STEP_INTERVAL_MS)
            .map(Self::SetStepInterval)
            .ok_or(CommandError::StepInterval(value))
    }

    pub fn tail_length(value: i32) -> Result<Self, CommandError> {
        u8::try_from(value)
            .ok()
            .filter(|length| (MIN_TAIL_LENGTH..=MAX_TAIL_LENGTH).contains(length))
            .map(Self::SetTailLength)
            .ok_or(CommandError::TailLength(value))
    }

    pub fn strobe_period(value: i32) -> Result<Self, CommandError> {
        u16::try_from(value)
            .ok()
            .filter(|period| *period >= MIN_STROBE_PERIOD_MS)
            .map(Self::SetStrobePeriod)
            .ok_or(CommandError::StrobePeriod(value))
    }

    /// Build a batch update for a strip of `N` pixels
    ///
    /// Entries outside the strip are dropped first, then at most
    /// [`MAX_PIXEL_BATCH`] of the remaining ones are kept.
    pub fn pixels<const N: usize>(updates: &[PixelUpdate]) -> Result<Self, CommandError> {
        let batch: Vec<PixelUpdate, MAX_PIXEL_BATCH> = updates
            .iter()
            .copied()
            .filter(|update| update.position < N)
            .take(MAX_PIXEL_BATCH)
            .collect();
        if batch.is_empty() {
            return Err(CommandError::EmptyPixelBatch);
        }
        Ok(Self::SetPixels(batch))
    }
}

impl From<TrySendError<Command>> for CommandError {
    fn from(_: TrySendError<Command>) -> Self {
        Self::QueueFull
    }
}

/// Type alias for the command channel
pub type CommandChannel = Channel<Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for command sender
pub type CommandSender<'a> = Sender<'a, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a> = Receiver<'a, Command, COMMAND_CHANNEL_SIZE>;

/// Latest presence reading waiting for the control loop
pub type PresenceSignal = Signal<Presence>;
