//! Presence classification and the collaborator seams that supply it.
//!
//! The network side (token refresh, the presence HTTP call) lives outside
//! this crate behind [`CredentialProvider`] and [`PresenceSource`].
//! [`PresenceMonitor`] paces the fetches and hands results to the control
//! loop through a [`PresenceSignal`].

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::PresenceSignal;
use crate::config::PresenceMonitorConfig;
use crate::{Millis, millis};

/// Availability reported by the presence service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    Available,
    Away,
    BeRightBack,
    Busy,
    DoNotDisturb,
    InACall,
    InAMeeting,
    Presenting,
    Offline,
    #[default]
    Unknown,
}

impl Presence {
    /// Parse the service's availability string; anything unrecognised is
    /// [`Presence::Unknown`]
    pub fn parse_availability(value: &str) -> Self {
        match value {
            "Available" => Self::Available,
            "Away" => Self::Away,
            "BeRightBack" => Self::BeRightBack,
            "Busy" => Self::Busy,
            "DoNotDisturb" => Self::DoNotDisturb,
            "InACall" => Self::InACall,
            "InAMeeting" => Self::InAMeeting,
            "Presenting" => Self::Presenting,
            "Offline" => Self::Offline,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Away => "Away",
            Self::BeRightBack => "BeRightBack",
            Self::Busy => "Busy",
            Self::DoNotDisturb => "DoNotDisturb",
            Self::InACall => "InACall",
            Self::InAMeeting => "InAMeeting",
            Self::Presenting => "Presenting",
            Self::Offline => "Offline",
            Self::Unknown => "Unknown",
        }
    }
}

/// Supplies the current bearer credential
///
/// Implementations may refresh over the network; the core only cares
/// whether a token exists.
pub trait CredentialProvider {
    type Token;

    fn current_token(&mut self) -> Option<Self::Token>;
}

/// Fetches the current presence with a credential
pub trait PresenceSource<T> {
    type Error;

    fn fetch(&mut self, token: &T) -> Result<Presence, Self::Error>;
}

/// Why a poll produced no presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollFailure {
    /// No credential available; the authorization flow should run
    NoCredential,
    /// The fetch itself failed
    FetchFailed,
}

/// Paces presence fetches on their own interval
///
/// The first call to [`poll`](Self::poll) fetches immediately. Failures are
/// reported once and not retried before the next interval.
pub struct PresenceMonitor<C, S> {
    credentials: C,
    source: S,
    poll_interval: Millis,
    last_poll: Option<Millis>,
    last_failure: Option<PollFailure>,
}

impl<C, S> PresenceMonitor<C, S>
where
    C: CredentialProvider,
    S: PresenceSource<C::Token>,
{
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(credentials: C, source: S, config: &PresenceMonitorConfig) -> Self {
        Self {
            credentials,
            source,
            poll_interval: config.poll_interval.as_millis() as Millis,
            last_poll: None,
            last_failure: None,
        }
    }

    /// Fetch presence if the poll interval elapsed
    ///
    /// Returns `None` when it is not yet time, or when the fetch failed.
    pub fn poll(&mut self, now: Instant) -> Option<Presence> {
        let now = millis(now);
        if let Some(last) = self.last_poll
            && now.wrapping_sub(last) < self.poll_interval
        {
            return None;
        }
        self.last_poll = Some(now);

        match self.fetch() {
            Ok(presence) => {
                self.last_failure = None;
                Some(presence)
            }
            Err(failure) => {
                #[cfg(feature = "esp32-log")]
                println!("[presence] poll failed: {:?}", failure);
                self.last_failure = Some(failure);
                None
            }
        }
    }

    /// Poll and hand a fresh reading to the control loop
    ///
    /// Returns true if a presence was published.
    pub fn publish(&mut self, now: Instant, signal: &PresenceSignal) -> bool {
        let Some(presence) = self.poll(now) else {
            return false;
        };
        signal.signal(presence);
        true
    }

    /// Make the next [`poll`](Self::poll) fetch regardless of the interval
    pub fn poll_now(&mut self) {
        self.last_poll = None;
    }

    /// True when the last poll found no credential
    pub fn needs_authorization(&self) -> bool {
        self.last_failure == Some(PollFailure::NoCredential)
    }

    pub const fn last_failure(&self) -> Option<PollFailure> {
        self.last_failure
    }

    fn fetch(&mut self) -> Result<Presence, PollFailure> {
        let token = self
            .credentials
            .current_token()
            .ok_or(PollFailure::NoCredential)?;
        self.source
            .fetch(&token)
            .map_err(|_| PollFailure::FetchFailed)
    }
}
