use proptest::prelude::*;
use serde_json::json;
use space_export::graph::reconstruct;
use space_export::trace::Trace;
use std::collections::HashSet;

/// Build a trace sequence from a coordinate grid: one line trace walking
/// some of the points with sentinels, plus one marker trace per chunk of
/// points. Small integer grids force coordinate collisions.
fn traces_from(points: Vec<(i8, i8)>, line: Vec<Option<(i8, i8)>>) -> Vec<Trace> {
    let marker_traces: Vec<serde_json::Value> = points
        .chunks(4)
        .map(|chunk| {
            json!({
                "mode": "markers",
                "x": chunk.iter().map(|(x, _)| f64::from(*x)).collect::<Vec<_>>(),
                "y": chunk.iter().map(|(_, y)| f64::from(*y)).collect::<Vec<_>>(),
            })
        })
        .collect();

    let line_x: Vec<serde_json::Value> = line
        .iter()
        .map(|p| match p {
            Some((x, _)) => json!(f64::from(*x)),
            None => serde_json::Value::Null,
        })
        .collect();
    let line_y: Vec<serde_json::Value> = line
        .iter()
        .map(|p| match p {
            Some((_, y)) => json!(f64::from(*y)),
            None => serde_json::Value::Null,
        })
        .collect();

    let mut traces = vec![json!({"mode": "lines", "x": line_x, "y": line_y})];
    traces.extend(marker_traces);
    serde_json::from_value(serde_json::Value::Array(traces)).unwrap()
}

proptest! {
    #[test]
    fn prop_one_id_per_distinct_coordinate(
        points in proptest::collection::vec((-3i8..3, -3i8..3), 0..40)
    ) {
        let graph = reconstruct(&traces_from(points.clone(), Vec::new())).unwrap();

        // Every occurrence keeps a row, so row count equals point count.
        prop_assert_eq!(graph.nodes.len(), points.len());

        let distinct_coords: HashSet<(i8, i8)> = points.iter().copied().collect();
        let distinct_ids: HashSet<&str> =
            graph.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(distinct_ids.len(), distinct_coords.len());
    }

    #[test]
    fn prop_duplicate_coordinates_share_the_first_id(
        points in proptest::collection::vec((-3i8..3, -3i8..3), 0..40)
    ) {
        let graph = reconstruct(&traces_from(points.clone(), Vec::new())).unwrap();

        let mut id_of = std::collections::HashMap::new();
        for (point, node) in points.iter().zip(&graph.nodes) {
            let id = id_of.entry(*point).or_insert_with(|| node.id.clone()).clone();
            prop_assert_eq!(node.id.as_str(), id.as_str());
        }
    }

    #[test]
    fn prop_edges_resolve_to_known_ids_with_unit_value(
        points in proptest::collection::vec((-3i8..3, -3i8..3), 0..20),
        line in proptest::collection::vec(
            proptest::option::weighted(0.8, (-4i8..4, -4i8..4)),
            0..30
        )
    ) {
        let graph = reconstruct(&traces_from(points, line)).unwrap();

        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &graph.edges {
            prop_assert!(ids.contains(edge.source.as_str()));
            prop_assert!(ids.contains(edge.target.as_str()));
            prop_assert_eq!(edge.value, 1);
        }
    }
}
