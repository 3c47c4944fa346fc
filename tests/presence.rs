mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use myrtio_presence_ring::presence::PollFailure;
    use myrtio_presence_ring::{
        CredentialProvider, Duration, Instant, Presence, PresenceMonitor, PresenceMonitorConfig,
        PresenceSignal, PresenceSource,
    };

    struct StaticToken(Option<&'static str>);

    impl CredentialProvider for StaticToken {
        type Token = &'static str;

        fn current_token(&mut self) -> Option<Self::Token> {
            self.0
        }
    }

    /// Source answering from a shared cell and counting fetches
    #[derive(Clone, Default)]
    struct FakeSource {
        answer: Rc<Cell<Option<Presence>>>,
        fetches: Rc<Cell<usize>>,
    }

    impl PresenceSource<&'static str> for FakeSource {
        type Error = ();

        fn fetch(&mut self, token: &&'static str) -> Result<Presence, Self::Error> {
            assert_eq!(*token, "token");
            self.fetches.set(self.fetches.get() + 1);
            self.answer.get().ok_or(())
        }
    }

    type Monitor = PresenceMonitor<StaticToken, FakeSource>;

    fn monitor(token: Option<&'static str>) -> (Monitor, FakeSource) {
        let source = FakeSource::default();
        let config = PresenceMonitorConfig {
            poll_interval: Duration::from_secs(60),
        };
        (
            PresenceMonitor::new(StaticToken(token), source.clone(), &config),
            source,
        )
    }

    #[test]
    fn test_parse_availability() {
        assert_eq!(Presence::parse_availability("Available"), Presence::Available);
        assert_eq!(Presence::parse_availability("BeRightBack"), Presence::BeRightBack);
        assert_eq!(Presence::parse_availability("InAMeeting"), Presence::InAMeeting);
        assert_eq!(Presence::parse_availability("Offline"), Presence::Offline);
        assert_eq!(Presence::parse_availability("available"), Presence::Unknown);
        assert_eq!(Presence::parse_availability("PresenceUnknown"), Presence::Unknown);
        assert_eq!(Presence::parse_availability(""), Presence::Unknown);
        assert_eq!(Presence::default(), Presence::Unknown);
    }

    #[test]
    fn test_as_str_round_trips() {
        for presence in [
            Presence::Available,
            Presence::Away,
            Presence::BeRightBack,
            Presence::Busy,
            Presence::DoNotDisturb,
            Presence::InACall,
            Presence::InAMeeting,
            Presence::Presenting,
            Presence::Offline,
        ] {
            assert_eq!(Presence::parse_availability(presence.as_str()), presence);
        }
    }

    #[test]
    fn test_monitor_polls_on_interval() {
        let (mut monitor, source) = monitor(Some("token"));
        source.answer.set(Some(Presence::Busy));

        assert_eq!(monitor.poll(Instant::from_millis(5_000)), Some(Presence::Busy));
        assert_eq!(monitor.poll(Instant::from_millis(6_000)), None);
        assert_eq!(monitor.poll(Instant::from_millis(64_999)), None);
        assert_eq!(source.fetches.get(), 1);

        source.answer.set(Some(Presence::Available));
        assert_eq!(
            monitor.poll(Instant::from_millis(65_000)),
            Some(Presence::Available)
        );
        assert_eq!(source.fetches.get(), 2);
        assert_eq!(monitor.last_failure(), None);
    }

    #[test]
    fn test_missing_credential_needs_authorization() {
        let (mut monitor, source) = monitor(None);
        source.answer.set(Some(Presence::Busy));

        assert_eq!(monitor.poll(Instant::from_millis(0)), None);
        assert!(monitor.needs_authorization());
        assert_eq!(monitor.last_failure(), Some(PollFailure::NoCredential));
        assert_eq!(source.fetches.get(), 0);
    }

    #[test]
    fn test_fetch_failure_waits_for_next_interval() {
        let (mut monitor, source) = monitor(Some("token"));

        assert_eq!(monitor.poll(Instant::from_millis(0)), None);
        assert_eq!(monitor.last_failure(), Some(PollFailure::FetchFailed));
        assert!(!monitor.needs_authorization());

        source.answer.set(Some(Presence::Away));
        assert_eq!(monitor.poll(Instant::from_millis(1_000)), None);
        assert_eq!(source.fetches.get(), 1);

        assert_eq!(
            monitor.poll(Instant::from_millis(60_000)),
            Some(Presence::Away)
        );
        assert_eq!(monitor.last_failure(), None);
    }

    #[test]
    fn test_poll_now_skips_the_wait() {
        let (mut monitor, source) = monitor(Some("token"));
        source.answer.set(Some(Presence::Offline));

        assert_eq!(monitor.poll(Instant::from_millis(0)), Some(Presence::Offline));
        monitor.poll_now();
        source.answer.set(Some(Presence::Presenting));
        assert_eq!(
            monitor.poll(Instant::from_millis(10)),
            Some(Presence::Presenting)
        );
        assert_eq!(source.fetches.get(), 2);
    }

    #[test]
    fn test_publish_feeds_the_signal() {
        let (mut monitor, source) = monitor(Some("token"));
        let signal = PresenceSignal::new();

        assert!(!monitor.publish(Instant::from_millis(0), &signal));
        assert!(!signal.is_pending());

        monitor.poll_now();
        source.answer.set(Some(Presence::DoNotDisturb));
        assert!(monitor.publish(Instant::from_millis(100), &signal));
        assert_eq!(signal.take(), Some(Presence::DoNotDisturb));
    }

    #[test]
    fn test_poll_interval_across_clock_wrap() {
        let (mut monitor, source) = monitor(Some("token"));
        source.answer.set(Some(Presence::Busy));
        let base = u64::from(u32::MAX) - 1_000;

        assert_eq!(monitor.poll(Instant::from_millis(base)), Some(Presence::Busy));
        assert_eq!(monitor.poll(Instant::from_millis(base + 59_999)), None);
        assert_eq!(
            monitor.poll(Instant::from_millis(base + 60_000)),
            Some(Presence::Busy)
        );
        assert_eq!(source.fetches.get(), 2);
    }
}
