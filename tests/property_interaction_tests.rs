use chart_pod::api::{BrushEventOptions, ChartOptions, ChartPod};
use chart_pod::core::{LinearScale, Margin, PlotSize, TimeSerie, Viewport};
use chart_pod::interaction::{BrushOrientation, PointerInput, ScrollPanTracker};
use chart_pod::render::NullRenderer;
use proptest::prelude::*;

fn brushed_pod(orientation: BrushOrientation) -> ChartPod<NullRenderer> {
    let series = [TimeSerie::from_pairs(
        "cpu",
        &(0..=10)
            .map(|i| (f64::from(i) * 10.0, f64::from(i) * 60_000.0))
            .collect::<Vec<_>>(),
    )];
    let options = ChartOptions::default()
        .with_margin(Margin::new(0.0, 0.0, 0.0, 0.0))
        .with_brush(BrushEventOptions {
            orientation,
            ..BrushEventOptions::default()
        });
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

fn orientation() -> impl Strategy<Value = BrushOrientation> {
    prop_oneof![
        Just(BrushOrientation::Horizontal),
        Just(BrushOrientation::Vertical),
        Just(BrushOrientation::Rectangle),
        Just(BrushOrientation::Square),
    ]
}

proptest! {
    #[test]
    fn brushed_ranges_are_ascending_and_inside_the_view(
        orientation in orientation(),
        start in (-50.0f64..650.0, -50.0f64..250.0),
        end in (-50.0f64..650.0, -50.0f64..250.0),
    ) {
        let mut pod = brushed_pod(orientation);
        pod.brush_start(PointerInput::new(start.0, start.1)).expect("brush start");
        let zoomed = pod.brush_end(PointerInput::new(end.0, end.1)).expect("brush end");

        if let Some(ranges) = zoomed {
            if let Some((x0, x1)) = ranges.x {
                prop_assert!(x0 < x1);
                prop_assert!(x0 >= -1e-6 && x1 <= 600_000.0 + 1e-6);
            }
            let scales = pod.scales();
            if let Some((x0, x1)) = ranges.x {
                let x_scale = scales.x_scale();
                prop_assert!(x_scale.map(x0) <= x_scale.map(x1));
            }
            if let Some((y0, y1)) = ranges.y {
                prop_assert!(y0 < y1);
                prop_assert!(y0 >= -1e-9 && y1 <= 100.0 + 1e-9);
                let y_scale = scales.y_scale();
                prop_assert!(y_scale.map(y0) >= y_scale.map(y1));
            }
            prop_assert_eq!(ranges.x.is_some(), orientation.selects_x());
            prop_assert_eq!(ranges.y.is_some(), orientation.selects_y());
        }
    }

    #[test]
    fn square_selection_has_equal_sides_and_touches_the_anchor(
        anchor in (0.0f64..600.0, 0.0f64..200.0),
        pointer in (0.0f64..600.0, 0.0f64..200.0),
    ) {
        let rect = BrushOrientation::Square.selection(anchor, pointer, PlotSize::new(600.0, 200.0));

        prop_assert!((rect.width - rect.height).abs() <= 1e-9);
        let (x0, x1) = rect.x_extent();
        let (y0, y1) = rect.y_extent();
        prop_assert!((x0 - anchor.0).abs() <= 1e-9 || (x1 - anchor.0).abs() <= 1e-9);
        prop_assert!((y0 - anchor.1).abs() <= 1e-9 || (y1 - anchor.1).abs() <= 1e-9);
    }

    #[test]
    fn vertical_wheel_budget_is_never_exceeded(
        height in 10.0f64..2_000.0,
        deltas in prop::collection::vec(-500.0f64..500.0, 1..64),
    ) {
        let mut tracker = ScrollPanTracker::default();
        for delta in deltas {
            let step = ScrollPanTracker::clamp_step(delta, height);
            prop_assert!(step.abs() <= height * 0.1 + 1e-9);
            let _ = tracker.try_accumulate(step, height);
            prop_assert!(tracker.accumulated_y().abs() <= height * 0.9 + 1e-9);
        }
    }

    #[test]
    fn linear_scale_round_trips(
        start in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor in 0.0f64..1.0,
    ) {
        let scale = LinearScale::new((start, start + span), (200.0, 0.0));
        let value = start + factor * span;

        let recovered = scale.invert(scale.map(value));

        prop_assert!((recovered - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn frames_stay_finite_for_any_samples(
        samples in prop::collection::vec(
            (prop_oneof![Just(f64::NAN), -1e6f64..1e6], 0.0f64..1e9),
            0..32,
        ),
    ) {
        let series = [TimeSerie::from_pairs("a", &samples)];
        let pod = ChartPod::new(
            NullRenderer::default(),
            Viewport::new(640, 480),
            &series,
            &ChartOptions::default(),
        )
        .expect("pod init");

        let frame = pod.build_render_frame().expect("frame");

        prop_assert!(frame.validate().is_ok());
    }
}
