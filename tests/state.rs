mod tests {
    use myrtio_presence_ring::command::MAX_PIXEL_BATCH;
    use myrtio_presence_ring::{
        ButtonEvent, Command, CommandError, DeviceConfig, DeviceState, PixelUpdate, Rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    fn update(position: usize) -> PixelUpdate {
        PixelUpdate {
            position,
            color: RED,
        }
    }

    #[test]
    fn test_config_values_are_clamped() {
        let config = DeviceConfig {
            step_interval_ms: 0,
            tail_length: 40,
            strobe_period_ms: 1,
            ..DeviceConfig::default()
        };
        let state = DeviceState::<4>::new(&config);
        assert_eq!(state.step_interval_ms(), 1);
        assert_eq!(state.tail_length(), 12);
        assert_eq!(state.strobe_period_ms(), 10);
    }

    #[test]
    fn test_validated_setters() {
        let mut state = DeviceState::<4>::new(&DeviceConfig::default());

        assert_eq!(state.set_tail_length(0), Err(CommandError::TailLength(0)));
        assert_eq!(state.set_tail_length(13), Err(CommandError::TailLength(13)));
        assert_eq!(state.set_tail_length(12), Ok(()));
        assert_eq!(state.set_step_interval(0), Err(CommandError::StepInterval(0)));
        assert_eq!(state.set_strobe_period(9), Err(CommandError::StrobePeriod(9)));
        assert_eq!(state.set_strobe_period(10), Ok(()));

        let status = state.status();
        assert_eq!(status.tail_length, 12);
        assert_eq!(status.step_interval_ms, 50);
        assert_eq!(status.strobe_period_ms, 10);
    }

    #[test]
    fn test_set_pixel_bumps_version() {
        let mut state = DeviceState::<4>::new(&DeviceConfig::default());
        let version = state.pixel_version();

        state.set_pixel(3, RED).unwrap();
        assert_eq!(state.pixel_version(), version + 1);
        assert_eq!(state.pixels()[3], RED);

        assert_eq!(
            state.set_pixel(4, RED),
            Err(CommandError::PixelIndex { index: 4, count: 4 })
        );
        assert_eq!(state.pixel_version(), version + 1);
    }

    #[test]
    fn test_pixel_batch_bumps_once() {
        let mut state = DeviceState::<4>::new(&DeviceConfig::default());
        let version = state.pixel_version();

        let applied = state
            .set_pixels(&[update(0), update(9), update(2)])
            .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(state.pixel_version(), version + 1);
        assert_eq!(state.pixels()[1], Rgb::default());

        assert_eq!(
            state.set_pixels(&[update(4), update(5)]),
            Err(CommandError::EmptyPixelBatch)
        );
        assert_eq!(state.set_pixels(&[]), Err(CommandError::EmptyPixelBatch));
        assert_eq!(state.pixel_version(), version + 1);
    }

    #[test]
    fn test_command_constructors_validate() {
        assert_eq!(Command::brightness(255), Ok(Command::SetBrightness(255)));
        assert_eq!(Command::brightness(256), Err(CommandError::Brightness(256)));
        assert_eq!(Command::brightness(-1), Err(CommandError::Brightness(-1)));

        assert_eq!(Command::tail_length(1), Ok(Command::SetTailLength(1)));
        assert_eq!(Command::tail_length(13), Err(CommandError::TailLength(13)));
        assert_eq!(Command::step_interval(0), Err(CommandError::StepInterval(0)));
        assert_eq!(
            Command::step_interval(70_000),
            Err(CommandError::StepInterval(70_000))
        );
        assert_eq!(Command::strobe_period(10), Ok(Command::SetStrobePeriod(10)));
        assert_eq!(Command::strobe_period(9), Err(CommandError::StrobePeriod(9)));

        assert_eq!(
            Command::set_animation("a-name-well-over-sixteen"),
            Err(CommandError::NameTooLong)
        );
        assert_eq!(Command::pixels::<4>(&[]), Err(CommandError::EmptyPixelBatch));
        assert_eq!(
            Command::pixels::<4>(&[update(4), update(7)]),
            Err(CommandError::EmptyPixelBatch)
        );
    }

    #[test]
    fn test_pixel_batch_is_truncated() {
        let updates: Vec<_> = (0..40).map(update).collect();
        let Ok(Command::SetPixels(batch)) = Command::pixels::<64>(&updates) else {
            panic!("expected a pixel batch");
        };
        assert_eq!(batch.len(), MAX_PIXEL_BATCH);
        assert_eq!(batch[0].position, 0);
    }

    #[test]
    fn test_pixel_batch_drops_invalid_before_capping() {
        let mut updates = vec![update(99); MAX_PIXEL_BATCH];
        updates.push(update(0));

        let Ok(Command::SetPixels(batch)) = Command::pixels::<4>(&updates) else {
            panic!("expected a pixel batch");
        };
        assert_eq!(batch.as_slice(), &[update(0)]);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(Command::from_button(ButtonEvent::None), None);
        assert_eq!(
            Command::from_button(ButtonEvent::Click1),
            Some(Command::NextAnimation)
        );
        assert_eq!(
            Command::from_button(ButtonEvent::Click2),
            Some(Command::ToggleStrobe)
        );
        assert_eq!(
            Command::from_button(ButtonEvent::Click3),
            Some(Command::CycleColor)
        );
        assert_eq!(
            Command::from_button(ButtonEvent::Hold),
            Some(Command::TogglePower)
        );
    }
}
