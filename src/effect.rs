//! Presence to effect mapping.
//!
//! [`resolve`] is a pure table lookup. The animation choice, the colour, the
//! optional settle phase and the traffic-light hint are decided together per
//! layout.

use embassy_time::Duration;

use crate::animation::AnimationId;
use crate::color::{AMBER, BLACK, BLUE, GREEN, RED, Rgb};
use crate::presence::Presence;

/// How the strip is used to show presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceLayout {
    /// Whole-strip animations
    #[default]
    Ring,
    /// Three stacked pixels, one lit per state
    TrafficLight,
}

/// Which pixel targets an effect lights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLight {
    /// Pixel 0
    Bottom,
    /// Pixel 1
    Middle,
    /// Pixel 2
    Top,
    All,
}

impl TrafficLight {
    /// Pixel lit by this hint, or `None` for the whole strip
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::Bottom => Some(0),
            Self::Middle => Some(1),
            Self::Top => Some(2),
            Self::All => None,
        }
    }
}

/// Second phase of a two-phase effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    pub then: AnimationId,
    pub after: Duration,
}

/// Resolved effect for a presence classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectDescriptor {
    /// Animation to start with, `None` means power off
    pub animation: Option<AnimationId>,
    pub color: Rgb,
    pub settle: Option<Settle>,
    pub hint: TrafficLight,
}

impl EffectDescriptor {
    pub const fn is_off(&self) -> bool {
        self.animation.is_none()
    }
}

const fn effect(
    animation: Option<AnimationId>,
    color: Rgb,
    settle: Option<Settle>,
    hint: TrafficLight,
) -> EffectDescriptor {
    EffectDescriptor {
        animation,
        color,
        settle,
        hint,
    }
}

/// Map a presence classification to its effect
///
/// `settle_after` is the strobe phase length for the busy family.
pub const fn resolve(
    presence: Presence,
    layout: PresenceLayout,
    settle_after: Duration,
) -> EffectDescriptor {
    use AnimationId::{Fade, Pixels, Solid, Strobe};
    use PresenceLayout::{Ring, TrafficLight as Lights};
    use TrafficLight::{All, Bottom, Middle, Top};

    match (presence, layout) {
        (Presence::Available, Ring) => effect(Some(Solid), GREEN, None, All),
        (Presence::Available, Lights) => effect(Some(Pixels), GREEN, None, Top),

        // Away keeps the whole-strip fade even on the traffic light
        (Presence::Away | Presence::BeRightBack, Ring) => effect(Some(Fade), AMBER, None, All),
        (Presence::Away | Presence::BeRightBack, Lights) => {
            effect(Some(Fade), AMBER, None, Middle)
        }

        (
            Presence::Busy
            | Presence::DoNotDisturb
            | Presence::InACall
            | Presence::InAMeeting
            | Presence::Presenting,
            Ring,
        ) => effect(
            Some(Strobe),
            RED,
            Some(Settle {
                then: Solid,
                after: settle_after,
            }),
            All,
        ),
        (
            Presence::Busy
            | Presence::DoNotDisturb
            | Presence::InACall
            | Presence::InAMeeting
            | Presence::Presenting,
            Lights,
        ) => effect(
            Some(Strobe),
            RED,
            Some(Settle {
                then: Pixels,
                after: settle_after,
            }),
            Bottom,
        ),

        (Presence::Offline, _) => effect(None, BLACK, None, All),
        (Presence::Unknown, _) => effect(Some(Solid), BLUE, None, All),
    }
}
