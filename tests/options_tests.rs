use chart_pod::ChartError;
use chart_pod::api::{AxisFormat, ChartOptions, ChartPod, TickOrientation};
use chart_pod::core::{Axis, TimeFormat, TimeSerie, Viewport};
use chart_pod::interaction::{
    BrushOrientation, CrosshairOrientation, KeyEvent, PanOrientation, ScrollPanOrientation,
};
use chart_pod::render::NullRenderer;
use serde_json::json;

#[test]
fn defaults_match_the_documented_gestures() {
    let options = ChartOptions::default();

    assert!(options.brush().is_active);
    assert_eq!(options.brush().key_event, KeyEvent::Main);
    assert_eq!(options.brush().orientation, BrushOrientation::Horizontal);
    assert!(options.pan().is_active);
    assert_eq!(options.pan().key_event, KeyEvent::Shift);
    assert!(!options.scroll_zoom().is_active);
    assert!(!options.scroll_pan().is_active);
    assert_eq!(options.scroll_pan().pan_step, 50.0);
    assert_eq!(options.axis.x.format, AxisFormat::Time);
    assert!(!options.axis.y1.is_active);
    assert_eq!(options.tick_format.x_axis, "%H:%M");
    assert!(!options.has_brush_pan_key_conflict());
}

#[test]
fn partial_json_is_merged_over_defaults() {
    let options = ChartOptions::from_json_str(
        r#"{
            "axis": { "y": { "range": [0, 10], "invert": true } },
            "crosshair": { "orientation": "both" },
            "zoom_events": {
                "mouse": { "pan": { "orientation": "vertical" } },
                "scroll": { "pan": { "is_active": true, "orientation": "horizontal" } }
            },
            "time_interval": { "time_format": "hour", "count": 2 },
            "tick_format": { "x_tick_orientation": "diagonal" }
        }"#,
    )
    .expect("valid options");

    assert_eq!(options.axis.y.range, Some((0.0, 10.0)));
    assert!(options.axis.y.invert);
    assert!(options.axis.y.is_active);
    assert_eq!(options.crosshair.orientation, CrosshairOrientation::Both);
    assert_eq!(options.crosshair.color, "red");
    assert_eq!(options.pan().orientation, PanOrientation::Vertical);
    assert_eq!(options.pan().key_event, KeyEvent::Shift);
    assert!(options.scroll_pan().is_active);
    assert_eq!(options.scroll_pan().orientation, ScrollPanOrientation::Horizontal);
    assert_eq!(options.scroll_pan().pan_step, 50.0);
    assert_eq!(options.time_interval.time_format, TimeFormat::Hour);
    assert_eq!(options.time_interval.count, Some(2));
    assert_eq!(
        options.tick_format.x_tick_orientation,
        TickOrientation::Diagonal
    );
}

#[test]
fn merging_leaves_the_base_untouched() {
    let base = ChartOptions::default();
    let merged = base
        .merged_with(&json!({ "render_grid": false, "axis": { "x": { "ticks_count": 8 } } }))
        .expect("merge");

    assert!(base.render_grid);
    assert!(!merged.render_grid);
    assert_eq!(merged.axis.get(Axis::X).ticks_count, Some(8));
    assert_eq!(merged.axis.get(Axis::X).format, AxisFormat::Time);
}

#[test]
fn null_in_patch_keeps_current_value() {
    let base = ChartOptions::default()
        .merged_with(&json!({ "crosshair": { "color": "#123456" } }))
        .expect("merge");
    let merged = base
        .merged_with(&json!({ "crosshair": { "color": null } }))
        .expect("merge");

    assert_eq!(merged.crosshair.color, "#123456");
}

#[test]
fn unknown_enum_values_fail_fast() {
    for patch in [
        json!({ "axis": { "y": { "format": "roman" } } }),
        json!({ "zoom_events": { "mouse": { "zoom": { "key_event": "ctrl" } } } }),
        json!({ "zoom_events": { "mouse": { "zoom": { "orientation": "circle" } } } }),
    ] {
        let err = ChartOptions::from_json_value(&patch).expect_err("invalid enum");
        assert!(matches!(err, ChartError::InvalidConfig(_)), "{patch}");
    }
}

#[test]
fn invalid_values_are_rejected() {
    for patch in [
        json!({ "crosshair": { "color": "not-a-colour" } }),
        json!({ "axis": { "y": { "ticks_count": 0 } } }),
        json!({ "zoom_events": { "scroll": { "pan": { "pan_step": -5.0 } } } }),
        json!({ "tick_format": { "x_axis": "%Q" } }),
        json!([1, 2, 3]),
    ] {
        assert!(ChartOptions::from_json_value(&patch).is_err(), "{patch}");
    }
    assert!(ChartOptions::from_json_str("{ not json").is_err());
}

#[test]
fn json_round_trip_preserves_options() {
    let options = ChartOptions::from_json_value(&json!({
        "margin": { "top": 1, "right": 2, "bottom": 3, "left": 4 },
        "bounds": { "upper": "$__metric_name max", "lower": "$__metric_name min" }
    }))
    .expect("options");

    let text = options.to_json_pretty().expect("serialize");
    assert_eq!(ChartOptions::from_json_str(&text).expect("parse"), options);
}

#[test]
fn update_options_json_resets_the_view_and_rerenders() {
    let series = [TimeSerie::from_pairs("a", &[(1.0, 0.0), (2.0, 60_000.0)])];
    let mut pod = ChartPod::new(
        NullRenderer::default(),
        Viewport::new(400, 300),
        &series,
        &ChartOptions::default(),
    )
    .expect("pod init");

    pod.update_options_json(&json!({ "axis": { "x": { "range": [10, 20] } } }), true)
        .expect("update");

    assert_eq!(pod.view_state().x_range(), Some((10.0, 20.0)));
    assert_eq!(pod.renderer().full_renders, 1);
    assert_eq!(pod.options().axis.x.range, Some((10.0, 20.0)));
}

#[test]
fn invalid_series_are_rejected_at_ingestion() {
    let duplicated = [
        TimeSerie::from_pairs("a", &[(1.0, 0.0)]),
        TimeSerie::from_pairs("a", &[(2.0, 0.0)]),
    ];
    let err = ChartPod::new(
        NullRenderer::default(),
        Viewport::new(400, 300),
        &duplicated,
        &ChartOptions::default(),
    )
    .err()
    .expect("duplicate targets");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let bad_colour = [TimeSerie::from_pairs("a", &[(1.0, 0.0)]).with_color("#zzzzzz")];
    assert!(
        ChartPod::new(
            NullRenderer::default(),
            Viewport::new(400, 300),
            &bad_colour,
            &ChartOptions::default(),
        )
        .is_err()
    );
}

#[test]
fn zero_sized_container_is_rejected() {
    let err = ChartPod::new(
        NullRenderer::default(),
        Viewport::new(0, 300),
        &[],
        &ChartOptions::default(),
    )
    .err()
    .expect("invalid viewport");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 300
        }
    ));
}
