use approx::assert_abs_diff_eq;
use chart_pod::api::{
    AxisOptions, ChartOptions, ChartPod, ListenerKind, MIN_SCROLL_ZOOM, ScrollPanOptions,
    ScrollZoomOptions,
};
use chart_pod::core::{Axis, Margin, TimeSerie, Viewport};
use chart_pod::interaction::{
    InteractionMode, ScrollPanOrientation, WheelInput, ZoomEvent, ZoomTransform,
};
use chart_pod::render::NullRenderer;

fn build_pod(options: ChartOptions) -> ChartPod<NullRenderer> {
    let series = [TimeSerie::from_pairs(
        "cpu",
        &(0..=10)
            .map(|i| (f64::from(i) * 10.0, f64::from(i) * 60_000.0))
            .collect::<Vec<_>>(),
    )];
    let options = options.with_margin(Margin::new(0.0, 0.0, 0.0, 0.0));
    let mut pod = ChartPod::new(
        NullRenderer::default(),
        Viewport::new(600, 200),
        &series,
        &options,
    )
    .expect("pod init");
    pod.render().expect("first render");
    pod
}

fn scroll_pan(orientation: ScrollPanOrientation) -> ChartOptions {
    ChartOptions::default().with_scroll_pan(ScrollPanOptions {
        is_active: true,
        orientation,
        ..ScrollPanOptions::default()
    })
}

fn wheel(delta_y: f64) -> ZoomEvent {
    ZoomEvent::wheel(ZoomTransform::IDENTITY, WheelInput::vertical(delta_y).with_shift())
}

#[test]
fn wheel_listener_requires_an_active_wheel_gesture() {
    let pod = build_pod(ChartOptions::default());
    assert!(!pod.listeners().contains(ListenerKind::Wheel));

    let pod = build_pod(scroll_pan(ScrollPanOrientation::Vertical));
    assert!(pod.listeners().contains(ListenerKind::Wheel));
}

#[test]
fn vertical_wheel_step_is_clamped_to_a_tenth_of_the_height() {
    let mut pod = build_pod(scroll_pan(ScrollPanOrientation::Vertical));

    // 100 px wheel delta is clamped to 20 px = 10 value units.
    pod.on_zoom(wheel(100.0)).expect("wheel");

    let (y0, y1) = pod.view_state().y_range().expect("y range");
    assert_abs_diff_eq!(y0, -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y1, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pod.view_state().transform().y, -20.0);
    assert_eq!(pod.interaction_mode(), InteractionMode::Panning);
}

#[test]
fn vertical_wheel_pan_stops_at_ninety_percent_of_the_height() {
    let mut pod = build_pod(scroll_pan(ScrollPanOrientation::Vertical));

    for _ in 0..9 {
        pod.on_zoom(wheel(100.0)).expect("wheel");
    }
    assert_abs_diff_eq!(pod.interaction().scroll_pan().accumulated_y(), 180.0);
    let before = pod.view_state().y_range().expect("y range");
    assert_abs_diff_eq!(before.0, -90.0, epsilon = 1e-9);

    pod.on_zoom(wheel(100.0)).expect("wheel");

    assert_eq!(pod.view_state().y_range(), Some(before));
    assert_abs_diff_eq!(pod.interaction().scroll_pan().accumulated_y(), 180.0);
}

#[test]
fn pan_end_resets_the_vertical_wheel_budget() {
    let mut pod = build_pod(scroll_pan(ScrollPanOrientation::Vertical));
    for _ in 0..9 {
        pod.on_zoom(wheel(100.0)).expect("wheel");
    }

    pod.pan_end().expect("pan end");
    assert_eq!(pod.interaction().scroll_pan().accumulated_y(), 0.0);

    pod.on_zoom(wheel(100.0)).expect("wheel");
    let (y0, _) = pod.view_state().y_range().expect("y range");
    assert_abs_diff_eq!(y0, -100.0, epsilon = 1e-9);
}

#[test]
fn inverted_y_axis_flips_vertical_wheel_pan() {
    let options = scroll_pan(ScrollPanOrientation::Vertical)
        .with_axis(Axis::Y, AxisOptions::default().with_invert(true));
    let mut pod = build_pod(options);

    pod.on_zoom(wheel(100.0)).expect("wheel");

    let (y0, y1) = pod.view_state().y_range().expect("y range");
    assert_abs_diff_eq!(y0, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y1, 110.0, epsilon = 1e-9);
}

#[test]
fn horizontal_wheel_pan_moves_by_pan_step_in_wheel_direction() {
    let mut pod = build_pod(scroll_pan(ScrollPanOrientation::Horizontal));

    // pan_step 50 px = 50 s.
    pod.on_zoom(wheel(3.0)).expect("wheel");
    let (x0, x1) = pod.view_state().x_range().expect("x range");
    assert_abs_diff_eq!(x0, 50_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(x1, 650_000.0, epsilon = 1e-6);

    pod.on_zoom(wheel(-120.0)).expect("wheel");
    pod.on_zoom(wheel(-1.0)).expect("wheel");
    let (x0, _) = pod.view_state().x_range().expect("x range");
    assert_abs_diff_eq!(x0, -50_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pod.view_state().transform().x, 50.0);
}

#[test]
fn wheel_without_scroll_pan_modifier_falls_through_to_zoom() {
    let options = scroll_pan(ScrollPanOrientation::Vertical).with_scroll_zoom(ScrollZoomOptions {
        is_active: true,
        ..ScrollZoomOptions::default()
    });
    let mut pod = build_pod(options);

    pod.on_zoom(ZoomEvent::wheel(
        ZoomTransform::new(0.0, 0.0, 2.0),
        WheelInput::vertical(-40.0),
    ))
    .expect("wheel");

    assert_eq!(pod.view_state().y_range(), None);
    assert_eq!(pod.view_state().transform(), ZoomTransform::new(0.0, 0.0, 2.0));
    let metrics = pod.renderer().last_metrics_transform.expect("metrics transform");
    assert_abs_diff_eq!(metrics.scale, 2.0);
}

#[test]
fn wheel_zoom_factor_has_a_floor() {
    let mut pod = build_pod(ChartOptions::default().with_scroll_zoom(ScrollZoomOptions {
        is_active: true,
        ..ScrollZoomOptions::default()
    }));

    pod.on_zoom(ZoomEvent::wheel(
        ZoomTransform::new(0.0, 0.0, 0.1),
        WheelInput::vertical(400.0),
    ))
    .expect("wheel");

    assert_abs_diff_eq!(pod.view_state().transform().k, MIN_SCROLL_ZOOM);
}

#[test]
fn wheel_matching_no_gesture_changes_nothing() {
    let mut pod = build_pod(scroll_pan(ScrollPanOrientation::Vertical));

    pod.on_zoom(ZoomEvent::wheel(
        ZoomTransform::new(0.0, 0.0, 3.0),
        WheelInput::vertical(50.0),
    ))
    .expect("wheel");

    assert_eq!(pod.interaction_mode(), InteractionMode::Idle);
    assert_eq!(pod.view_state().transform(), ZoomTransform::IDENTITY);
}
