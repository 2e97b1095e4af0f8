use line_graph::api::{LineGraph, LineGraphConfig};
use line_graph::core::ValueRange;
use line_graph::error::GraphError;
use line_graph::render::NullRenderer;

fn graph(config: LineGraphConfig) -> LineGraph<NullRenderer> {
    LineGraph::new(NullRenderer::default(), config).expect("graph init")
}

#[test]
fn replacing_datapoints_recomputes_auto_range() {
    let mut engine = graph(LineGraphConfig::new(vec![0.0, 10.0]).with_size(100, 100));

    engine
        .set_datapoints(vec![-5.0, 5.0, 15.0])
        .expect("replace data");
    assert_eq!(engine.minmax(), ValueRange::new(-5.0, 15.0).expect("range"));
    assert_eq!(engine.stroke_path(), "M 0 100 L 50 50 L 100 0");
}

#[test]
fn pinned_range_survives_replacement() {
    let pinned = ValueRange::new(0.0, 100.0).expect("range");
    let mut engine = graph(
        LineGraphConfig::new(vec![0.0, 10.0])
            .with_size(100, 100)
            .with_minmax(pinned),
    );

    engine.set_datapoints(vec![50.0, 25.0]).expect("replace data");
    assert_eq!(engine.minmax(), pinned);
    assert_eq!(engine.stroke_path(), "M 0 50 L 100 75");
}

#[test]
fn replacing_with_empty_series_is_rejected() {
    let mut engine = graph(LineGraphConfig::new(vec![1.0, 2.0]));
    let stroke = engine.stroke_path().to_owned();

    let result = engine.set_datapoints(Vec::new());
    assert!(matches!(result, Err(GraphError::EmptySeries)));
    assert_eq!(engine.datapoints(), &[1.0, 2.0]);
    assert_eq!(engine.stroke_path(), stroke);
}

#[test]
fn unpinning_rederives_range() {
    let mut engine = graph(
        LineGraphConfig::new(vec![2.0, 4.0]).with_minmax(ValueRange::new(0.0, 10.0).expect("range")),
    );

    let derived = engine.compute_minmax().expect("compute");
    assert_eq!(derived, ValueRange::new(2.0, 4.0).expect("range"));
    assert!(!engine.is_minmax_pinned());
    assert_eq!(engine.stroke_path(), "M 0 200 L 200 0");
}

#[test]
fn pinning_at_runtime_rebuilds_geometry() {
    let mut engine = graph(LineGraphConfig::new(vec![2.0, 4.0]).with_size(100, 100));

    engine
        .set_minmax(Some(ValueRange::new(0.0, 8.0).expect("range")))
        .expect("pin");
    assert!(engine.is_minmax_pinned());
    assert_eq!(engine.stroke_path(), "M 0 75 L 100 50");
}

#[test]
fn update_rewrites_all_three_shapes() {
    let mut engine = graph(LineGraphConfig::new(vec![1.0, 3.0, 2.0]));
    engine.pointer_enter(100.0);
    engine.pointer_leave();

    engine.set_datapoints(vec![3.0, 1.0]).expect("replace data");
    assert!(engine.overlay_path().is_empty());
    assert_eq!(engine.stroke_path(), "M 0 0 L 200 200");
}
