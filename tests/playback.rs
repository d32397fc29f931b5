use vitalscope::{Panel, PlaybackClock, PlaybackSpeed, WINDOW_SIZE};

#[test]
fn tick_emits_current_position_then_increments() {
    let mut clock = PlaybackClock::new();
    clock.set_position(42);
    assert_eq!(clock.tick(), 42);
    assert_eq!(clock.position(), 43);
}

#[test]
fn stop_is_idempotent_and_retains_position() {
    let mut clock = PlaybackClock::new();
    clock.start();
    clock.set_position(7);
    clock.stop();
    clock.stop();
    assert!(!clock.running());
    assert_eq!(clock.position(), 7);
}

#[test]
fn set_speed_never_resumes_a_stopped_clock() {
    let mut clock = PlaybackClock::new();
    clock.set_speed(PlaybackSpeed::Double);
    assert!(!clock.running());
    assert_eq!(clock.speed(), PlaybackSpeed::Double);
}

#[test]
fn speed_index_maps_to_intervals() {
    // UI combo order 0.5x, 1x, 1.5x, 2x maps onto 300/200/100/50 ms.
    let expected = [300, 200, 100, 50];
    for (index, ms) in expected.into_iter().enumerate() {
        let speed = PlaybackSpeed::from_index(index).unwrap();
        assert_eq!(speed.interval_ms(), ms);
        assert_eq!(speed.index(), index);
    }
    assert!(PlaybackSpeed::from_index(4).is_none());
    assert_eq!(PlaybackSpeed::default(), PlaybackSpeed::Normal);
}

#[test]
fn ticks_raise_the_high_water_mark() {
    let mut clock = PlaybackClock::new();
    clock.set_position(10);
    clock.tick();
    assert_eq!(clock.high_water(), 10);
    // Seeking backwards does not lower it.
    clock.set_position(3);
    clock.tick();
    assert_eq!(clock.high_water(), 10);
}

fn panel_with(n: usize) -> Panel {
    let mut panel = Panel::new();
    let samples: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
    panel.load(samples, "sig", 125.0).unwrap();
    panel
}

#[test]
fn window_freezes_past_the_last_full_slice() {
    let mut panel = panel_with(1000);

    // Last renderable left edge is 800 for 1000 samples and a 200 window.
    let frame = panel.frame_at(800).expect("last full window");
    assert_eq!(frame.channels[0].points.len(), WINDOW_SIZE);
    assert!((frame.x_range.0 - 800.0 / 125.0).abs() < 1e-12);
    assert!((frame.x_range.1 - 1000.0 / 125.0).abs() < 1e-12);

    for position in 801..1000 {
        assert!(panel.frame_at(position).is_none(), "position {position}");
    }
}

#[test]
fn clock_keeps_advancing_while_the_display_is_frozen() {
    let mut panel = panel_with(1000);
    panel.clock.set_position(850);
    assert!(panel.tick().is_none());
    assert_eq!(panel.clock.position(), 851);
    assert!(panel.clock.running());
}

#[test]
fn empty_panel_is_a_no_op_not_a_crash() {
    let mut panel = Panel::new();
    assert!(panel.tick().is_none());
    assert!(panel.refresh().is_none());
    assert_eq!(panel.slider_value(1000), 0);
    assert!(panel.seek_from_slider(500, 1000).is_none());
}

#[test]
fn slider_value_maps_position_over_total_samples() {
    let mut panel = panel_with(1000);
    panel.clock.set_position(250);
    assert_eq!(panel.slider_value(1000), 250);
    panel.clock.set_position(5000);
    assert_eq!(panel.slider_value(1000), 1000); // clamped
}

#[test]
fn seek_is_bounded_by_the_high_water_mark() {
    let mut panel = panel_with(1000);
    for _ in 0..400 {
        panel.tick();
    }
    assert_eq!(panel.clock.position(), 400);

    // Backwards within played territory: accepted.
    assert_eq!(panel.seek_from_slider(100, 1000), Some(100));
    assert_eq!(panel.clock.position(), 100);

    // Past everything ever played: rejected, position unchanged.
    assert_eq!(panel.seek_from_slider(900, 1000), None);
    assert_eq!(panel.clock.position(), 100);
}

#[test]
fn structural_mutations_do_not_reset_clock_or_view() {
    let mut panel = panel_with(1000);
    panel.clock.set_position(300);
    panel.view.zoom_in();
    let scale = panel.view.scale;

    let samples: Vec<f64> = (0..1000).map(|i| i as f64).collect();
    panel.load(samples, "second", 125.0).unwrap();
    assert_eq!(panel.clock.position(), 300);
    assert_eq!(panel.view.scale, scale);

    panel.detach(1).unwrap();
    assert_eq!(panel.clock.position(), 300);
    assert_eq!(panel.view.scale, scale);
}

#[test]
fn detaching_the_last_channel_stops_and_rewinds_the_clock() {
    let mut panel = panel_with(1000);
    assert!(panel.clock.running());
    panel.clock.set_position(123);
    panel.detach(0).unwrap();
    assert!(!panel.clock.running());
    assert_eq!(panel.clock.position(), 0);
}

#[test]
fn shorter_channel_truncates_its_slice_silently() {
    // Unequal lengths are tolerated, not enforced: the first channel's
    // length drives the freeze boundary, a shorter one just runs out.
    let mut panel = panel_with(1000);
    panel
        .load((0..500).map(|i| i as f64).collect(), "short", 125.0)
        .unwrap();
    let frame = panel.frame_at(400).expect("within first channel");
    assert_eq!(frame.channels[0].points.len(), WINDOW_SIZE);
    assert_eq!(frame.channels[1].points.len(), 100);
}
