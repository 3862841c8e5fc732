use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chart_pod::ChartError;
use chart_pod::api::{
    ChartCallbacks, ChartOptions, ChartPod, CrosshairOptions, LegendHit, MouseMoveEvent,
    SharedCrosshairEvent, SharedCrosshairValue, ZoomOutCenter,
};
use chart_pod::core::{Margin, TimeSerie, Viewport};
use chart_pod::interaction::{CrosshairOrientation, CrosshairSource, PointerInput};
use chart_pod::render::{LayerKind, NullRenderer};

fn series() -> Vec<TimeSerie> {
    vec![
        TimeSerie::from_pairs("cpu", &[(0.0, 0.0), (100.0, 600_000.0)]),
        TimeSerie::from_pairs("mem", &[(20.0, 0.0), (40.0, 600_000.0)]),
    ]
}

fn build_pod(options: ChartOptions) -> ChartPod<NullRenderer> {
    let options = options.with_margin(Margin::new(0.0, 0.0, 0.0, 0.0));
    let mut pod = ChartPod::new(
        NullRenderer::default(),
        Viewport::new(600, 200),
        &series(),
        &options,
    )
    .expect("pod init");
    pod.render().expect("first render");
    pod
}

#[test]
fn mouse_move_places_crosshair_and_reports_values() {
    let mut pod = build_pod(ChartOptions::default());
    let moves = Rc::new(RefCell::new(Vec::<MouseMoveEvent>::new()));
    let shared = Rc::new(RefCell::new(Vec::<SharedCrosshairEvent>::new()));
    let (move_sink, shared_sink) = (Rc::clone(&moves), Rc::clone(&shared));
    pod.set_callbacks(
        ChartCallbacks::new()
            .on_mouse_move(move |event| move_sink.borrow_mut().push(event))
            .on_shared_crosshair_move(move |event| shared_sink.borrow_mut().push(event)),
    );

    pod.mouse_move(PointerInput::new(150.0, 50.0))
        .expect("mouse move");

    let crosshair = pod.crosshair();
    assert!(crosshair.visible);
    assert_eq!(crosshair.source, CrosshairSource::Pointer);
    assert_eq!((crosshair.x, crosshair.y), (150.0, Some(50.0)));

    let moves = moves.borrow();
    assert_eq!(moves.len(), 1);
    assert_abs_diff_eq!(moves[0].time, 150_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(moves[0].value, 75.0, epsilon = 1e-9);
    let shared = shared.borrow();
    assert_abs_diff_eq!(shared[0].timestamp, 150_000.0, epsilon = 1e-6);
    assert_eq!(pod.renderer().last_partial_layers, vec![LayerKind::Crosshair]);
}

#[test]
fn crosshair_orientation_controls_drawn_lines() {
    let mut pod = build_pod(ChartOptions::default().with_crosshair(CrosshairOptions {
        orientation: CrosshairOrientation::Both,
        color: "#00ff00".to_owned(),
    }));
    pod.mouse_move(PointerInput::new(150.0, 50.0))
        .expect("mouse move");

    let frame = pod.build_render_frame().expect("frame");
    let layer = frame.layer(LayerKind::Crosshair).expect("crosshair layer");
    assert_eq!(layer.lines.len(), 2);
    assert_eq!(layer.lines[0].color.to_hex(), "#00ff00");
}

#[test]
fn leaving_the_plot_hides_the_crosshair() {
    let mut pod = build_pod(ChartOptions::default());
    let outs = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&outs);
    pod.set_callbacks(ChartCallbacks::new().on_mouse_out(move || *sink.borrow_mut() += 1));

    pod.mouse_move(PointerInput::new(150.0, 50.0))
        .expect("mouse move");
    pod.mouse_move(PointerInput::new(700.0, 50.0))
        .expect("mouse move");
    assert!(!pod.crosshair().visible);

    pod.mouse_move(PointerInput::new(150.0, 50.0))
        .expect("mouse move");
    pod.mouse_out().expect("mouse out");
    assert!(!pod.crosshair().visible);
    assert_eq!(*outs.borrow(), 1);
}

#[test]
fn crosshair_is_not_drawn_when_disabled() {
    let mut options = ChartOptions::default();
    options.render_crosshair = false;
    let mut pod = build_pod(options);

    pod.mouse_move(PointerInput::new(150.0, 50.0))
        .expect("mouse move");

    assert!(!pod.crosshair().visible);
    let frame = pod.build_render_frame().expect("frame");
    assert!(frame.layer(LayerKind::Crosshair).expect("layer").is_empty());
}

#[test]
fn double_click_reports_view_centre_without_changing_view() {
    let mut pod = build_pod(ChartOptions::default());
    let centres = Rc::new(RefCell::new(Vec::<ZoomOutCenter>::new()));
    let sink = Rc::clone(&centres);
    pod.set_callbacks(ChartCallbacks::new().on_zoom_out(move |centre| sink.borrow_mut().push(centre)));

    let centre = pod
        .double_click(PointerInput::new(10.0, 201.0))
        .expect("inside the plot");

    assert_abs_diff_eq!(centre.x, 300_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(centre.y, 50.0, epsilon = 1e-9);
    assert_eq!(centres.borrow().as_slice(), &[centre]);
    assert_eq!(pod.view_state().x_range(), None);
}

#[test]
fn double_click_outside_the_plot_is_ignored() {
    let mut pod = build_pod(ChartOptions::default());

    assert_eq!(pod.double_click(PointerInput::new(10.0, -2.0)), None);
    assert_eq!(pod.double_click(PointerInput::new(601.0, 10.0)), None);
}

#[test]
fn shared_crosshair_follows_timestamp_and_hides_out_of_range() {
    let mut pod = build_pod(ChartOptions::default());
    let echoes = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&echoes);
    pod.set_callbacks(ChartCallbacks::new().on_shared_crosshair_move(move |_| *sink.borrow_mut() += 1));

    pod.render_shared_crosshair(SharedCrosshairValue::at(300_000.0))
        .expect("shared crosshair");
    let crosshair = pod.crosshair();
    assert!(crosshair.visible);
    assert_eq!(crosshair.source, CrosshairSource::Shared);
    assert_abs_diff_eq!(crosshair.x, 300.0, epsilon = 1e-9);
    assert_eq!(crosshair.y, None);

    pod.render_shared_crosshair(SharedCrosshairValue::at(900_000.0))
        .expect("shared crosshair");
    assert!(!pod.crosshair().visible);
    assert_eq!(*echoes.borrow(), 0);
}

#[test]
fn shared_crosshair_with_value_draws_horizontal_line() {
    let mut pod = build_pod(ChartOptions::default().with_crosshair(CrosshairOptions {
        orientation: CrosshairOrientation::Both,
        ..CrosshairOptions::default()
    }));

    pod.render_shared_crosshair(SharedCrosshairValue::at(60_000.0).with_value(25.0))
        .expect("shared crosshair");

    assert_eq!(pod.crosshair().y, Some(150.0));
    pod.hide_shared_crosshair().expect("hide");
    assert!(!pod.crosshair().visible);
}

#[test]
fn shared_crosshair_rejects_non_finite_timestamp() {
    let mut pod = build_pod(ChartOptions::default());

    let err = pod
        .render_shared_crosshair(SharedCrosshairValue::at(f64::NAN))
        .expect_err("nan timestamp");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn legend_clicks_check_the_series_index() {
    let mut pod = build_pod(ChartOptions::default());
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    pod.set_callbacks(ChartCallbacks::new().on_legend_click(move |index| sink.borrow_mut().push(index)));

    pod.legend_click(1).expect("legend click");
    pod.legend_label_click(0).expect("label click without callback");
    let err = pod.legend_click(2).expect_err("out of range");

    assert!(matches!(
        err,
        ChartError::SeriesIndexOutOfRange { index: 2, len: 2 }
    ));
    assert_eq!(clicks.borrow().as_slice(), &[1]);
}

#[test]
fn click_on_legend_entry_routes_to_checkbox_or_label() {
    let mut pod = build_pod(ChartOptions::default());
    let labels = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&labels);
    pod.set_callbacks(
        ChartCallbacks::new().on_legend_label_click(move |index| sink.borrow_mut().push(index)),
    );

    let entries = pod.legend_entries().expect("legend entries");
    assert_eq!(entries.len(), 2);
    let second = &entries[1];
    let checkbox = second.checkbox;
    let hit = pod
        .click(PointerInput::new(checkbox.x + 2.0, checkbox.y + 2.0))
        .expect("click");
    assert_eq!(hit, Some(LegendHit::Checkbox(1)));

    let hit = pod
        .click(PointerInput::new(second.label.x + 1.0, second.label.y - 1.0))
        .expect("click");
    assert_eq!(hit, Some(LegendHit::Label(1)));
    assert_eq!(labels.borrow().as_slice(), &[1]);
}

#[test]
fn legend_of_series_without_datapoints_is_not_clickable() {
    let checkbox = build_pod(ChartOptions::default())
        .legend_entries()
        .expect("legend entries")[0]
        .checkbox;
    let empty = [TimeSerie::new("cpu", Vec::new()), TimeSerie::new("mem", Vec::new())];
    let options = ChartOptions::default().with_margin(Margin::new(0.0, 0.0, 0.0, 0.0));
    let mut pod = ChartPod::new(NullRenderer::default(), Viewport::new(600, 200), &empty, &options)
        .expect("pod init");
    pod.render().expect("render");
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    pod.set_callbacks(ChartCallbacks::new().on_legend_click(move |index| sink.borrow_mut().push(index)));

    assert!(pod.legend_entries().expect("legend entries").is_empty());
    let hit = pod
        .click(PointerInput::new(checkbox.x + 2.0, checkbox.y + 2.0))
        .expect("click");

    assert_eq!(hit, None);
    assert!(clicks.borrow().is_empty());
    let frame = pod.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.layer(LayerKind::Legend).expect("legend").is_empty());
}

#[test]
fn context_menu_forwards_the_pointer() {
    let mut pod = build_pod(ChartOptions::default());
    let menus = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&menus);
    pod.set_callbacks(ChartCallbacks::new().on_context_menu(move |pointer| sink.borrow_mut().push(pointer)));

    pod.context_menu(PointerInput::new(3.0, 4.0));

    assert_eq!(menus.borrow().as_slice(), &[PointerInput::new(3.0, 4.0)]);
}

#[test]
fn detach_silences_every_gesture() {
    let mut pod = build_pod(ChartOptions::default());
    pod.detach();

    assert!(pod.listeners().is_empty());
    pod.mouse_move(PointerInput::new(150.0, 50.0))
        .expect("mouse move");
    assert!(!pod.crosshair().visible);
    assert_eq!(pod.double_click(PointerInput::new(10.0, 10.0)), None);
}
