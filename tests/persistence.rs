use vitalscope::persistence::{load_session, save_session, SessionSerde};
use vitalscope::{ChannelColor, Monitor, PanelId, PlaybackSpeed};

fn session_monitor() -> Monitor {
    let mut monitor = Monitor::new();
    monitor
        .panel_mut(PanelId::Left)
        .load(vec![0.0; 400], "ecg", 125.0)
        .unwrap();
    monitor
        .panel_mut(PanelId::Left)
        .load(vec![1.0; 400], "resp", 125.0)
        .unwrap();
    monitor
        .panel_mut(PanelId::Right)
        .load(vec![2.0; 400], "art", 125.0)
        .unwrap();
    monitor
        .set_channel_color(PanelId::Left, 1, ChannelColor::Brown)
        .unwrap();
    monitor.set_channel_visible(PanelId::Left, 1, false).unwrap();
    monitor.set_speed(PanelId::Right, PlaybackSpeed::Double);
    monitor.zoom_in(PanelId::Right);
    monitor.panel_mut(PanelId::Right).view.pan_offset = 0.3;
    monitor
}

#[test]
fn session_round_trip_restores_the_presentation_state() {
    let saved = session_monitor();
    let path = std::env::temp_dir().join(format!("vitalscope_session_{}.json", std::process::id()));
    save_session(&path, &saved).unwrap();
    let loaded = load_session(&path).unwrap();
    std::fs::remove_file(&path).ok();

    // Restore into a fresh monitor with the same recordings loaded.
    let mut fresh = Monitor::new();
    fresh
        .panel_mut(PanelId::Left)
        .load(vec![0.0; 400], "a", 125.0)
        .unwrap();
    fresh
        .panel_mut(PanelId::Left)
        .load(vec![1.0; 400], "b", 125.0)
        .unwrap();
    fresh
        .panel_mut(PanelId::Right)
        .load(vec![2.0; 400], "c", 125.0)
        .unwrap();
    loaded.apply_to(&mut fresh);

    let left = fresh.panel(PanelId::Left);
    assert_eq!(left.channels.labels(), vec!["ecg", "resp"]);
    let resp = left.channels.get(1).unwrap();
    assert_eq!(resp.color, ChannelColor::Brown);
    assert!(!resp.visible);

    let right = fresh.panel(PanelId::Right);
    assert_eq!(right.channels.labels(), vec!["art"]);
    assert_eq!(right.clock.speed(), PlaybackSpeed::Double);
    assert_eq!(right.view.scale, 0.75);
    assert_eq!(right.view.pan_offset, 0.3);
}

#[test]
fn restoring_the_link_flag_does_not_mirror_the_panels() {
    let mut saved = session_monitor();
    saved.set_linked(true);
    let state = SessionSerde::from(&saved);

    let mut fresh = Monitor::new();
    fresh
        .panel_mut(PanelId::Left)
        .load(vec![0.0; 400], "a", 125.0)
        .unwrap();
    fresh
        .panel_mut(PanelId::Right)
        .load(vec![1.0; 400], "b", 125.0)
        .unwrap();
    fresh.pause(PanelId::Right);
    state.apply_to(&mut fresh);

    assert!(fresh.linked());
    // apply_to writes each panel's own saved state; it never re-runs the
    // engage-time mirroring, so the right panel keeps its transport state.
    assert!(!fresh.panel(PanelId::Right).clock.running());
}

#[test]
fn channel_looks_apply_positionally_to_fewer_channels() {
    let saved = session_monitor();
    let state = SessionSerde::from(&saved);

    // Only one of the two saved left-panel channels is loaded this time.
    let mut fresh = Monitor::new();
    fresh
        .panel_mut(PanelId::Left)
        .load(vec![0.0; 400], "a", 125.0)
        .unwrap();
    state.apply_to(&mut fresh);

    assert_eq!(fresh.panel(PanelId::Left).channels.labels(), vec!["ecg"]);
}
