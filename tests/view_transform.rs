use vitalscope::{PanDirection, ViewTransform};

#[test]
fn zoom_round_trip_is_not_identity() {
    let mut view = ViewTransform::new();
    view.zoom_in();
    view.zoom_out();
    // 1.0 * 0.75 * 1.25 — the operators are deliberately not inverses.
    assert_eq!(view.scale, 0.9375);
}

#[test]
fn zoom_steps_compound_multiplicatively() {
    let mut view = ViewTransform::new();
    view.zoom_in();
    view.zoom_in();
    assert_eq!(view.scale, 0.5625);
    let mut view = ViewTransform::new();
    view.zoom_out();
    view.zoom_out();
    assert_eq!(view.scale, 1.5625);
}

#[test]
fn pan_up_clamps_at_the_window_maximum() {
    let extent = (-1.0, 1.0);
    let mut view = ViewTransform::new();

    // Unzoomed, the ceiling already sits at the maximum: pan-up is a no-op.
    view.pan(PanDirection::Up, extent);
    assert_eq!(view.pan_offset, 0.0);

    // Zoomed in, there is headroom of 0.25 to recover in 0.05 steps.
    view.zoom_in();
    for _ in 0..10 {
        view.pan(PanDirection::Up, extent);
    }
    let clamped = view.pan_offset;
    assert!(extent.1 * view.scale + clamped >= extent.1);
    // All further pan-up calls hold the clamp.
    for _ in 0..10 {
        view.pan(PanDirection::Up, extent);
    }
    assert_eq!(view.pan_offset, clamped);
}

#[test]
fn pan_down_stops_at_the_guard_margin() {
    let extent = (-1.0, 1.0);
    let mut view = ViewTransform::new();
    view.zoom_in();
    for _ in 0..1000 {
        view.pan(PanDirection::Down, extent);
    }
    let floor = view.pan_offset;
    // The displayed ceiling never goes below window_min + 0.4 by more
    // than one step.
    assert!(extent.1 * view.scale + floor <= extent.0 + 0.4);
    assert!(extent.1 * view.scale + floor > extent.0 + 0.4 - 0.05 * extent.0.abs() - 1e-12);
    for _ in 0..10 {
        view.pan(PanDirection::Down, extent);
    }
    assert_eq!(view.pan_offset, floor);
}

#[test]
fn axis_range_applies_scale_then_offset_to_the_global_extent() {
    let mut view = ViewTransform::new();
    view.zoom_in(); // 0.75
    view.pan_offset = 0.1;
    let (lo, hi) = view.axis_range((-2.0, 4.0));
    assert!((lo - (-2.0 * 0.75 + 0.1)).abs() < 1e-12);
    assert!((hi - (4.0 * 0.75 + 0.1)).abs() < 1e-12);
}
