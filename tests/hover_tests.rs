use std::cell::{Cell, RefCell};
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use line_graph::api::{GraphStyle, LineGraph, LineGraphConfig};
use line_graph::interaction::{HoverSample, HoverState};
use line_graph::render::NullRenderer;

struct Recorded {
    values: Rc<RefCell<Vec<HoverSample>>>,
    cancels: Rc<Cell<usize>>,
}

fn recording_graph(config: LineGraphConfig) -> (LineGraph<NullRenderer>, Recorded) {
    let values = Rc::new(RefCell::new(Vec::new()));
    let cancels = Rc::new(Cell::new(0));
    let values_sink = Rc::clone(&values);
    let cancel_sink = Rc::clone(&cancels);
    let engine = LineGraph::with_callbacks(
        NullRenderer::default(),
        config,
        move |sample| values_sink.borrow_mut().push(sample),
        move || cancel_sink.set(cancel_sink.get() + 1),
    )
    .expect("graph init");
    (engine, Recorded { values, cancels })
}

fn five_points() -> LineGraphConfig {
    LineGraphConfig::new(vec![0.0, 10.0, 5.0, 10.0, 0.0]).with_size(200, 100)
}

#[test]
fn enter_always_reports_and_draws_marker() {
    let (mut engine, recorded) = recording_graph(five_points());

    let sample = engine.pointer_enter(100.0);
    assert_eq!(sample.index, 2);
    assert_abs_diff_eq!(sample.value, 5.0);
    assert_abs_diff_eq!(sample.offset, 0.5);
    assert_eq!(engine.state(), HoverState::Hovering);
    assert_eq!(recorded.values.borrow().as_slice(), &[sample]);

    assert_eq!(
        engine.overlay_path(),
        "M 99.5 0 L 100.5 0 L 100.5 48 L 99.5 48 Z \
         M 99.5 52 L 100.5 52 L 100.5 100 L 99.5 100 Z \
         M 98 50 a 2 2 0 1,1 4 0 a 2 2 0 1,1 -4 0"
    );
}

#[test]
fn overlay_ignores_relative_state_of_other_shapes() {
    let (mut engine, _recorded) = recording_graph(five_points());
    engine.pointer_enter(100.0);

    let overlay = engine.overlay_shape();
    assert!(!overlay.is_absolute_forced());
    let relative: Vec<bool> = overlay.commands().iter().map(|c| c.relative).collect();
    // Bars are absolute, the marker circle starts absolute and arcs relatively.
    assert_eq!(relative.len(), 13);
    assert!(relative[..10].iter().all(|r| !r));
    assert_eq!(&relative[10..], &[false, true, true]);
}

#[test]
fn moves_within_one_index_are_suppressed() {
    let (mut engine, recorded) = recording_graph(five_points());

    engine.pointer_move(98.0);
    engine.pointer_move(104.0);
    assert_eq!(recorded.values.borrow().len(), 1);

    engine.pointer_move(150.0);
    let values = recorded.values.borrow();
    assert_eq!(values.len(), 2);
    assert_eq!(values[1].index, 3);
}

#[test]
fn suppressed_moves_still_redraw_overlay() {
    let (mut engine, _recorded) = recording_graph(
        LineGraphConfig::new(vec![0.0, 10.0]).with_size(200, 100),
    );

    engine.pointer_move(10.0);
    let first = engine.overlay_path().to_owned();
    engine.pointer_move(20.0);
    assert_eq!(engine.overlay_path(), first);
    assert!(!first.is_empty());
}

#[test]
fn leave_clears_overlay_and_cancels_once() {
    let (mut engine, recorded) = recording_graph(five_points());

    engine.pointer_enter(40.0);
    assert!(!engine.overlay_path().is_empty());
    engine.pointer_leave();

    assert!(engine.overlay_path().is_empty());
    assert_eq!(recorded.cancels.get(), 1);
    assert_eq!(engine.state(), HoverState::Ready);
}

#[test]
fn leave_without_hover_still_cancels() {
    let (mut engine, recorded) = recording_graph(five_points());

    engine.pointer_leave();
    assert!(engine.overlay_path().is_empty());
    assert_eq!(recorded.cancels.get(), 1);
    assert!(recorded.values.borrow().is_empty());
}

#[test]
fn reenter_reports_same_index_again() {
    let (mut engine, recorded) = recording_graph(five_points());

    engine.pointer_enter(100.0);
    engine.pointer_leave();
    engine.pointer_enter(100.0);
    assert_eq!(recorded.values.borrow().len(), 2);
}

#[test]
fn graph_without_callbacks_handles_events() {
    let mut engine =
        LineGraph::new(NullRenderer::default(), five_points()).expect("graph init");

    engine.pointer_enter(10.0);
    engine.pointer_move(190.0);
    engine.pointer_leave();
    assert_eq!(engine.state(), HoverState::Ready);
}

#[test]
fn padded_center_samples_mid_series() {
    let style = GraphStyle {
        padding: 0.5,
        ..GraphStyle::default()
    };
    let engine = LineGraph::new(
        NullRenderer::default(),
        LineGraphConfig::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).with_style(style),
    )
    .expect("graph init");

    let transform = engine.canvas().transform().expect("scaled group");
    assert_abs_diff_eq!(transform.scale, 0.5);
    assert_abs_diff_eq!(transform.origin_x, 50.0);
    assert_abs_diff_eq!(transform.origin_y, 50.0);

    let sample = engine.sample_at(100.0);
    assert_abs_diff_eq!(sample.offset, 0.5);
    assert_eq!(sample.index, 2);
    assert_abs_diff_eq!(sample.value, 3.0);
}

#[test]
fn edge_offsets_are_reported_unclamped() {
    let style = GraphStyle {
        padding: 0.5,
        ..GraphStyle::default()
    };
    let engine = LineGraph::new(
        NullRenderer::default(),
        LineGraphConfig::new(vec![1.0, 2.0, 3.0]).with_style(style),
    )
    .expect("graph init");

    let left = engine.sample_at(0.0);
    assert_abs_diff_eq!(left.offset, -0.5);
    assert_eq!(left.index, 0);

    let right = engine.sample_at(200.0);
    assert_abs_diff_eq!(right.offset, 1.5);
    assert_eq!(right.index, 2);
}

#[test]
fn data_replacement_while_hovering_redraws_marker() {
    let (mut engine, recorded) = recording_graph(five_points());

    engine.pointer_enter(100.0);
    let before = engine.overlay_path().to_owned();
    engine
        .set_datapoints(vec![0.0, 10.0, 10.0, 10.0, 0.0])
        .expect("replace data");

    assert_ne!(engine.overlay_path(), before);
    assert!(engine.overlay_path().starts_with("M 99.5 0 L 100.5 0 L 100.5 -2"));
    assert_eq!(recorded.values.borrow().len(), 1);

    engine.pointer_move(101.0);
    assert_eq!(recorded.values.borrow().len(), 1);
}
