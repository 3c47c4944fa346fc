use embassy_time::Duration;

use crate::color::{BLACK, BLUE, Rgb, rgb_from_u32};
use crate::effect::PresenceLayout;

/// Colors visited by the triple-click cycle
pub const DEFAULT_COLOR_PRESETS: [Rgb; 7] = [
    rgb_from_u32(0x00_00_FF),
    rgb_from_u32(0x00_FF_00),
    rgb_from_u32(0xFF_00_00),
    rgb_from_u32(0xFF_00_FF),
    rgb_from_u32(0x00_FF_FF),
    rgb_from_u32(0xFF_FF_00),
    rgb_from_u32(0xFF_FF_FF),
];

/// Strobe phase length before a two-phase effect settles
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(1000);

/// Default control loop pacing (100 Hz)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Default interval between presence fetches
pub const DEFAULT_PRESENCE_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration for the device core
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    pub power: bool,
    pub brightness: u8,
    pub color: Rgb,
    pub secondary_color: Rgb,
    /// Animation activated at startup
    pub animation: &'static str,
    pub step_interval_ms: u16,
    pub tail_length: u8,
    pub strobe_period_ms: u16,
    pub settle_duration: Duration,
    pub layout: PresenceLayout,
    pub color_presets: &'static [Rgb],
    pub tick_interval: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            power: true,
            brightness: 128,
            color: BLUE,
            secondary_color: BLACK,
            animation: "fade",
            step_interval_ms: 50,
            tail_length: 6,
            strobe_period_ms: 100,
            settle_duration: DEFAULT_SETTLE_DURATION,
            layout: PresenceLayout::Ring,
            color_presets: &DEFAULT_COLOR_PRESETS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Configuration for [`PresenceMonitor`](crate::presence::PresenceMonitor)
#[derive(Debug, Clone, Copy)]
pub struct PresenceMonitorConfig {
    pub poll_interval: Duration,
}

impl Default for PresenceMonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_PRESENCE_POLL_INTERVAL,
        }
    }
}
