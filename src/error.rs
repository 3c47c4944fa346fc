//! Error types shared by the command boundary, the pixel surface and setup.

use core::fmt;

/// Error returned by a [`PixelSurface`](crate::surface::PixelSurface) when a
/// pixel index is outside `0..pixel_count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    OutOfRange { index: usize, count: usize },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "pixel {index} out of range (0..{count})")
            }
        }
    }
}

/// Input rejected at the command boundary.
///
/// A rejected command never reaches the shared device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Brightness outside `0..=255`
    Brightness(i32),
    /// Pixel index outside the strip
    PixelIndex { index: usize, count: usize },
    /// Pixel batch without a single valid entry
    EmptyPixelBatch,
    /// Tail length outside `MIN_TAIL_LENGTH..=MAX_TAIL_LENGTH`
    TailLength(i32),
    /// Step interval below `MIN_STEP_INTERVAL_MS`
    StepInterval(i32),
    /// Strobe period below `MIN_STROBE_PERIOD_MS`
    StrobePeriod(i32),
    /// Animation name does not fit the command buffer
    NameTooLong,
    /// Command queue is full
    QueueFull,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brightness(value) => write!(f, "invalid brightness {value} (0-255)"),
            Self::PixelIndex { index, count } => {
                write!(f, "invalid pixel position {index} (0-{})", count.saturating_sub(1))
            }
            Self::EmptyPixelBatch => f.write_str("no valid pixels provided"),
            Self::TailLength(value) => write!(f, "invalid tail length {value}"),
            Self::StepInterval(value) => write!(f, "invalid step interval {value}"),
            Self::StrobePeriod(value) => write!(f, "invalid strobe period {value}"),
            Self::NameTooLong => f.write_str("animation name too long"),
            Self::QueueFull => f.write_str("command queue full"),
        }
    }
}

impl From<SurfaceError> for CommandError {
    fn from(err: SurfaceError) -> Self {
        match err {
            SurfaceError::OutOfRange { index, count } => Self::PixelIndex { index, count },
        }
    }
}

/// Error returned when wiring the control loop together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Surface pixel count differs from the state's pixel array length
    PixelCountMismatch { surface: usize, state: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelCountMismatch { surface, state } => write!(
                f,
                "surface has {surface} pixels but state tracks {state}"
            ),
        }
    }
}
