#![no_std]

pub mod animation;
pub mod button;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod control;
pub mod effect;
pub mod error;
pub mod presence;
pub mod scheduler;
pub mod state;
pub mod surface;

pub use animation::{Animation, AnimationId, AnimationSlot};
pub use button::{ButtonEvent, ButtonInput, Debouncer};
pub use command::{
    Command, CommandChannel, CommandReceiver, CommandSender, PresenceSignal,
};
pub use config::{DeviceConfig, PresenceMonitorConfig};
pub use control::{ControlLoop, SettleTimer, TickResult};
pub use effect::{EffectDescriptor, PresenceLayout, Settle, TrafficLight, resolve};
pub use error::{CommandError, SetupError, SurfaceError};
pub use presence::{CredentialProvider, Presence, PresenceMonitor, PresenceSource};
pub use scheduler::{AnimationScheduler, Animations};
pub use state::{DeviceState, DeviceStatus, PixelUpdate};
pub use surface::{FrameSurface, PixelSurface};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Wrapping millisecond timestamp
///
/// Compare timestamps only through `wrapping_sub`.
pub type Millis = u32;

/// Truncate an [`Instant`] to the wrapping millisecond clock
#[allow(clippy::cast_possible_truncation)]
pub fn millis(now: Instant) -> Millis {
    now.as_millis() as Millis
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameSurface`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
