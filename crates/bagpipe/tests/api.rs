//! Integration tests for the public API

use bagpipe::prelude::*;
use bagpipe::layout::Segment;
use bagpipe::{render_json, render_text, render_text_with_style};

fn two_op_pipeline() -> (Pipeline, SlotRef, SlotRef) {
    let mut i0 = Operation::new("add x1, x2, x3");
    let mut i1 = Operation::new("orr x4, x5, x6");
    let d0 = i0.at("d", 1).unwrap();
    let d1 = i1.at("d", 2).unwrap();
    let mut pipeline = Pipeline::new();
    pipeline.add_operation(i0).add_operation(i1);
    (pipeline, d0, d1)
}

#[test]
fn test_layout_places_nodes_and_segments() {
    let mut i0 = Operation::new("add x1, x2, x3");
    let mut i1 = Operation::new("orr x4, x5, x6");
    let d0 = i0.at("d", 0).unwrap();
    let d1 = i1.at("d", 1).unwrap();
    let c1 = i1.at("c", 2).unwrap();

    let mut pipeline = Pipeline::new();
    pipeline
        .add_operation(i0)
        .add_operation(i1)
        .add_edge(Edge::new(d0 >> d1 >> c1, "red"));

    let plan = pipeline.layout().unwrap();
    assert_eq!(plan.nodes.len(), 3);
    assert_eq!(plan.edges.len(), 1);
    assert_eq!(
        plan.edges[0].segments,
        vec![
            Segment::new((0.0, 2.0), (1.0, 1.0)),
            Segment::new((1.0, 1.0), (2.0, 1.0)),
        ]
    );
    assert_eq!(plan.edges[0].color, "red");
}

#[test]
fn test_single_operation_chain_layout() {
    let mut op = Operation::new("add x1, x2, x3");
    let d = op.at("D", 0).unwrap();
    let e = op.at("E", 1).unwrap();
    let c = op.at("C", 2).unwrap();
    let mut pipeline = Pipeline::new();
    pipeline
        .add_operation(op)
        .add_edge(Edge::new(d >> e >> c, "red"));

    let plan = pipeline.layout().unwrap();
    let nodes: Vec<(f64, f64, &str)> = plan
        .nodes
        .iter()
        .map(|node| (node.x, node.y, node.label.as_str()))
        .collect();
    assert_eq!(nodes, vec![(0.0, 1.0, "D"), (1.0, 1.0, "E"), (2.0, 1.0, "C")]);

    assert_eq!(plan.edges.len(), 1);
    assert_eq!(plan.edges[0].color, "red");
    assert_eq!(
        plan.edges[0].segments,
        vec![
            Segment::new((0.0, 1.0), (1.0, 1.0)),
            Segment::new((1.0, 1.0), (2.0, 1.0)),
        ]
    );
}

#[test]
fn test_first_operation_is_top_row() {
    let mut i0 = Operation::new("first");
    let mut i1 = Operation::new("second");
    i0.at("D", 5).unwrap();
    i1.at("D", 5).unwrap();
    let mut pipeline = Pipeline::new();
    pipeline.add_operation(i0).add_operation(i1);

    let plan = pipeline.layout().unwrap();
    let rows: Vec<f64> = plan.nodes.iter().map(|node| node.y).collect();
    assert_eq!(rows, vec![2.0, 1.0]);
    assert!(plan.nodes.iter().all(|node| node.x == 5.0));
    assert_eq!(plan.y_axis.ticks.positions, vec![1.5, 0.5]);
    assert_eq!(plan.y_axis.ticks.labels, vec!["0: first", "1: second"]);
}

#[test]
fn test_layout_without_slots_fails() {
    let mut pipeline = Pipeline::new();
    assert_eq!(pipeline.layout().unwrap_err(), PipelineError::EmptyLayout);

    pipeline.add_operation(Operation::new("nop"));
    assert_eq!(pipeline.layout().unwrap_err(), PipelineError::EmptyLayout);
    assert!(render_text(&pipeline).is_err());
}

#[test]
fn test_dangling_slot_then_success() {
    let mut added = Operation::new("added");
    let mut later = Operation::new("later");
    let a = added.at("D", 0).unwrap();
    let b = later.at("D", 1).unwrap();

    let mut pipeline = Pipeline::new();
    pipeline.add_operation(added).add_edge(Edge::new(&a >> &b, "red"));
    assert!(matches!(
        pipeline.layout(),
        Err(PipelineError::DanglingReference { .. })
    ));

    pipeline.add_operation(later);
    let plan = pipeline.layout().unwrap();
    assert_eq!(plan.edges[0].segments.len(), 1);
}

#[test]
fn test_later_edge_node_color_wins() {
    let (mut pipeline, d0, d1) = two_op_pipeline();
    pipeline
        .add_edge(Edge::new(&d0 >> &d1, "red").with_node_color("pink"))
        .add_edge(Edge::new(d1.clone(), "blue").with_node_color("lightblue"));

    let plan = pipeline.layout().unwrap();
    assert_eq!(plan.nodes[0].color, "pink");
    assert_eq!(plan.nodes[1].color, "lightblue");

    // The model is never recolored
    assert_eq!(d1.color(), "white");
}

#[test]
fn test_slots_without_override_keep_their_color() {
    let mut op = Operation::new("op");
    match op.slot("D") {
        SlotEntry::Vacant(factory) => {
            factory.create_with_color(0, "gold").unwrap();
        }
        SlotEntry::Existing(_) => panic!("slot should not exist yet"),
    }
    op.at("E", 1).unwrap();
    let mut pipeline = Pipeline::new();
    pipeline.add_operation(op);

    let plan = pipeline.layout().unwrap();
    assert_eq!(plan.nodes[0].color, "gold");
    assert_eq!(plan.nodes[1].color, "white");
}

#[test]
fn test_lookup_returns_stored_slot() {
    let mut op = Operation::new("op");
    let created = op.at("d", 1).unwrap();
    let found = op.slot("d").existing().unwrap();
    assert!(found.ptr_eq(&created));
    assert_eq!(op.require("d").unwrap(), created);

    // Repeating the creation call returns the stored slot, time is ignored
    let again = op.at("d", 9).unwrap();
    assert!(again.ptr_eq(&created));
    assert_eq!(again.time(), 1);
}

#[test]
fn test_uncreated_slot_cannot_be_chained() {
    let op = Operation::new("op");
    let err = op.require("d").unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedOperand { .. }));
}

#[test]
fn test_duplicate_slot_is_rejected() {
    let mut op = Operation::new("op");
    op.add_slot(Slot::new("d", 1)).unwrap();
    let err = op.add_slot(Slot::new("d", 2)).unwrap_err();
    assert_eq!(err, PipelineError::duplicate_slot("d", "op"));
    assert_eq!(op.get("d").unwrap().time(), 1);
}

#[test]
fn test_chain_and_list_edges_compare_equal() {
    let (mut pipeline, d0, d1) = two_op_pipeline();
    let c1 = pipeline.operation_mut(1).unwrap().at("c", 3).unwrap();

    pipeline.add_edge(Edge::new(&d0 >> &d1 >> &c1, "red"));
    assert_eq!(
        pipeline.edges(),
        &[Edge::new(vec![d0, d1, c1], "red")]
    );
}

#[test]
fn test_append_rejects_non_members() {
    let (mut pipeline, d0, d1) = two_op_pipeline();
    let err = pipeline.append(&d0 >> &d1).unwrap_err();
    assert_eq!(
        err,
        PipelineError::unsupported_operand("chain", "pipeline append")
    );
    assert!(pipeline.append(Edge::new(d0 >> d1, "red")).is_ok());
    assert_eq!(pipeline.edges().len(), 1);
}

#[test]
fn test_render_helpers() {
    let (mut pipeline, d0, d1) = two_op_pipeline();
    pipeline.add_edge(Edge::new(d0 >> d1, "red").with_legend("in-order-dispatch"));

    let unicode = render_text(&pipeline).unwrap();
    assert!(unicode.contains("0: add x1, x2, x3"));
    assert!(unicode.contains("1: orr x4, x5, x6"));
    assert!(unicode.contains("red: in-order-dispatch"));

    let ascii = render_text_with_style(&pipeline, CharacterSet::Ascii).unwrap();
    assert!(ascii.is_ascii());

    let json: serde_json::Value = serde_json::from_str(&render_json(&pipeline).unwrap()).unwrap();
    assert_eq!(json["edges"][0]["legend"], "in-order-dispatch");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_custom_edge_offset() {
    let (mut pipeline, d0, d1) = two_op_pipeline();
    pipeline.add_edge(Edge::new(d0 >> d1, "red"));

    let config = LayoutConfig::new().with_edge_center_offset(0.25).unwrap();
    let plan = pipeline
        .layout_with(&LayoutEngine::with_config(config))
        .unwrap();
    assert_eq!(
        plan.edges[0].segments,
        vec![Segment::new((1.25, 1.75), (1.75, 1.25))]
    );

    assert!(LayoutConfig::new().with_edge_center_offset(0.75).is_err());
    assert!(LayoutConfig::new()
        .with_edge_center_offset(f64::NAN)
        .is_err());
}
