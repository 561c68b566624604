//! Layout tests driven by deterministic jitter sources.

use stratmatrix_core::{Quadrant, Rating};
use stratmatrix_layout::{AnchorPosition, LayoutEngine, FAN_OUT_ORDER};
use stratmatrix_test::fixtures::coincident_records;
use stratmatrix_test::{record, sample_records, FixedJitter, ZeroJitter};

#[test]
fn test_fixed_sequence_gives_exact_coordinates() {
    let records = sample_records();
    let mut source = FixedJitter::new(vec![0.05, -0.02, 0.1, -0.1, 0.0, 0.03]);

    let layout = LayoutEngine::default().layout(&records, &mut source);

    assert_eq!(source.draws(), 6);
    assert_eq!((layout.points[0].x, layout.points[0].y), (3.0 + 0.05, 3.0 - 0.02));
    assert_eq!((layout.points[1].x, layout.points[1].y), (1.0 + 0.1, 2.0 - 0.1));
    assert_eq!((layout.points[2].x, layout.points[2].y), (2.0, 1.0 + 0.03));
}

#[test]
fn test_offsets_beyond_spread_are_clamped() {
    let records: stratmatrix_core::RecordSet =
        vec![record("Fraud Detection", "Low", "High", "Low")].into();
    let mut source = FixedJitter::new(vec![0.4, -0.4]);

    let layout = LayoutEngine::default().layout(&records, &mut source);

    assert_eq!(layout.points[0].x, 3.0 + 0.1);
    assert_eq!(layout.points[0].y, 1.0 - 0.1);
}

#[test]
fn test_three_coincident_records_fan_out() {
    let records = coincident_records(3);
    let layout = LayoutEngine::default().layout(&records, &mut ZeroJitter);

    let anchors: Vec<_> = layout.points.iter().map(|p| p.anchor).collect();
    assert_eq!(anchors, FAN_OUT_ORDER[..3].to_vec());
}

#[test]
fn test_single_record_gets_top_center() {
    let records: stratmatrix_core::RecordSet =
        vec![record("Route Optimization", "Medium", "Medium", "Medium")].into();
    let layout = LayoutEngine::default().layout(&records, &mut FixedJitter::new(vec![0.09]));

    assert_eq!(layout.points[0].anchor, AnchorPosition::TopCenter);
    assert_eq!(layout.points[0].wrapped_label, "Route<br>Optimization");
}

#[test]
fn test_end_to_end_scenario() {
    let records: stratmatrix_core::RecordSet = vec![
        record("AI Chatbot", "High", "High", "Medium"),
        record("Predictive Maintenance", "Medium", "Low", "High"),
    ]
    .into();

    let layout = LayoutEngine::default().layout(&records, &mut ZeroJitter);

    assert_eq!(layout.quadrants(), vec![Quadrant::Priority, Quadrant::Backlog]);
    assert_eq!((layout.points[0].x, layout.points[0].y), (3.0, 3.0));
    assert_eq!((layout.points[1].x, layout.points[1].y), (1.0, 2.0));
    assert_eq!(layout.points[0].business_value_rank, Rating::Medium.rank());
}

#[test]
fn test_layout_serializes_for_renderer() {
    let layout = LayoutEngine::default().layout(&sample_records(), &mut ZeroJitter);
    let json = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["points"][0]["anchor"], "top center");
    assert_eq!(json["points"][0]["quadrant"], "Priority");
    assert_eq!(json["regions"][0]["color"], "green");
    assert_eq!(json["x_axis"]["tick_text"][2], "High");
    assert_eq!(json["height"], 900);
}
