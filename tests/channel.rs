mod tests {
    use myrtio_presence_ring::channel::{Channel, Signal, TrySendError};
    use myrtio_presence_ring::{Command, CommandChannel, CommandError};

    #[test]
    fn test_channel_is_fifo() {
        let channel: Channel<u8, 4> = Channel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.try_send(1).unwrap();
        sender.try_send(2).unwrap();
        sender.try_send(3).unwrap();
        assert_eq!(channel.len(), 3);

        assert_eq!(receiver.try_receive(), Some(1));
        assert_eq!(receiver.drain().collect::<Vec<_>>(), vec![2, 3]);
        assert!(channel.is_empty());
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_full_channel_returns_value() {
        let channel: Channel<u8, 2> = Channel::new();
        channel.try_send(1).unwrap();
        channel.try_send(2).unwrap();
        assert_eq!(channel.try_send(3), Err(TrySendError(3)));

        assert_eq!(channel.try_receive(), Some(1));
        channel.try_send(3).unwrap();
        assert_eq!(channel.receiver().drain().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_full_command_queue_maps_to_error() {
        let channel = CommandChannel::new();
        let sender = channel.sender();
        while sender.try_send(Command::NextAnimation).is_ok() {}

        let err: CommandError = sender.try_send(Command::TogglePower).unwrap_err().into();
        assert_eq!(err, CommandError::QueueFull);
    }

    #[test]
    fn test_signal_keeps_latest() {
        let signal = Signal::new();
        assert!(!signal.is_pending());
        assert_eq!(signal.take(), None::<u32>);

        signal.signal(1);
        signal.signal(2);
        assert!(signal.is_pending());
        assert_eq!(signal.take(), Some(2));
        assert_eq!(signal.take(), None);
    }
}
