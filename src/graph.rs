//! Reconstruction of a node/edge graph from flattened plot traces
//!
//! The plot format stores the graph twice: once as marker points with
//! per-point metadata (the nodes), and once as a single pair of coordinate
//! sequences where null entries separate the polylines (the edges). This
//! module pairs the two back up: marker points are deduplicated by exact
//! coordinate into identified nodes, and consecutive line coordinates are
//! resolved against those identities to recover directed edges.

use crate::annotation;
use crate::error::{ExportError, ExportResult};
use crate::trace::Trace;
use indexmap::IndexMap;
use serde_json::Number;

/// Identity key for a point: the coordinate pair compared with exact
/// numeric equality, no tolerance.
///
/// Built from the f64 bit patterns with negative zero folded into zero so
/// that `0.0` and `-0.0` share one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey(u64, u64);

impl CoordKey {
    /// Key for an (x, y) pair
    #[must_use]
    pub fn new(x: &Number, y: &Number) -> Self {
        Self(Self::bits(x), Self::bits(y))
    }

    fn bits(n: &Number) -> u64 {
        let v = n.as_f64().unwrap_or(f64::NAN);
        let v = if v == 0.0 { 0.0 } else { v };
        v.to_bits()
    }
}

/// One row of the nodes table.
///
/// `id` is the identity assigned at the first sighting of this row's
/// coordinate; later sightings of the same coordinate produce further rows
/// carrying the same id (see [`reconstruct`]).
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    /// Node identity: the external identifier, or `node_<n>` when none was
    /// supplied at first sight
    pub id: String,
    /// X coordinate as received
    pub x: Number,
    /// Y coordinate as received
    pub y: Number,
    /// Group scraped from the annotation text, `"Unknown"` when absent
    pub category: String,
    /// External identifier supplied for this occurrence
    pub technology_code: Option<String>,
    /// Description scraped from the annotation text
    pub description: Option<String>,
    /// Raw annotation text, kept for reference
    pub text: Option<String>,
    /// Marker size for this occurrence
    pub size: Option<Number>,
}

/// One row of the edges table. The weight is always the constant 1; the
/// line trace encodes no weighting information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    /// Id of the edge's source node
    pub source: String,
    /// Id of the edge's target node
    pub target: String,
    /// Edge weight, fixed at 1
    pub value: u32,
}

/// Node and edge rows reconstructed from one trace sequence
#[derive(Debug, Clone, Default)]
pub struct SpaceGraph {
    /// Node rows in occurrence order (duplicate coordinates repeat their id)
    pub nodes: Vec<NodeRow>,
    /// Edge rows in line-trace order
    pub edges: Vec<EdgeRow>,
}

/// Rebuild the node/edge graph from an ordered trace sequence.
///
/// Element 0 must be the line trace; a line trace without both coordinate
/// sequences is a fatal input error. The remaining elements are scanned and
/// only marker-mode traces carrying both `x` and `y` contribute nodes;
/// anything else is skipped silently.
///
/// Deduplication is by id only: the first sighting of a coordinate fixes
/// its id permanently, but every later sighting still appends another node
/// row (with its own per-point metadata) under that same id. Consumers of
/// the node table must tolerate repeated ids.
pub fn reconstruct(traces: &[Trace]) -> ExportResult<SpaceGraph> {
    let line = traces
        .first()
        .ok_or_else(|| ExportError::shape("input contains no traces"))?;

    let mut nodes = Vec::new();
    let mut id_by_coord: IndexMap<CoordKey, String> = IndexMap::new();

    for trace in traces.iter().skip(1) {
        if !trace.is_marker_trace() {
            continue;
        }
        collect_nodes(trace, &mut nodes, &mut id_by_coord);
    }

    let edges = line_edges(line, &id_by_coord)?;

    Ok(SpaceGraph { nodes, edges })
}

fn collect_nodes(
    trace: &Trace,
    nodes: &mut Vec<NodeRow>,
    id_by_coord: &mut IndexMap<CoordKey, String>,
) {
    // is_marker_trace guarantees both sequences exist
    let (Some(xs), Some(ys)) = (&trace.x, &trace.y) else {
        return;
    };

    for i in 0..xs.len() {
        let Some(x) = xs.get(i).and_then(Option::as_ref) else {
            continue;
        };
        let Some(y) = ys.get(i).and_then(Option::as_ref) else {
            continue;
        };

        let tech_code = trace.customdata_at(i);

        let key = CoordKey::new(x, y);
        if !id_by_coord.contains_key(&key) {
            let id = match tech_code {
                Some(code) => code.to_string(),
                None => format!("node_{}", id_by_coord.len() + 1),
            };
            id_by_coord.insert(key, id);
        }
        let id = id_by_coord[&key].clone();

        let text = trace.text_at(i);
        let ann = text.map(annotation::scrape).unwrap_or_default();

        nodes.push(NodeRow {
            id,
            x: x.clone(),
            y: y.clone(),
            category: ann.category.unwrap_or_else(|| "Unknown".to_string()),
            technology_code: tech_code.map(str::to_string),
            description: ann.description.filter(|d| !d.is_empty()),
            text: text.map(str::to_string),
            size: trace.size_at(i).cloned(),
        });
    }
}

/// Walk the line trace and pair consecutive coordinates into edges.
///
/// The stepping is asymmetric: when the look-ahead slot `i + 2` holds the
/// sentinel, the pair (i, i+1) closes the current polyline and the walk
/// jumps over the sentinel (`i += 3`); otherwise the pair is an interior
/// segment and the walk advances one slot (`i += 1`). An exhausted
/// look-ahead counts as a sentinel so the terminal segment still closes
/// when the sequence lacks a trailing null.
fn line_edges(line: &Trace, id_by_coord: &IndexMap<CoordKey, String>) -> ExportResult<Vec<EdgeRow>> {
    let xs = line.x.as_ref().ok_or(ExportError::LineTrace("x"))?;
    let ys = line.y.as_ref().ok_or(ExportError::LineTrace("y"))?;

    let mut edges = Vec::new();
    let mut i = 0;
    while i + 1 < xs.len() {
        let at_segment_end = xs.get(i + 2).map_or(true, Option::is_none);
        if let Some(edge) = edge_between(xs, ys, i, id_by_coord) {
            edges.push(edge);
        }
        i += if at_segment_end { 3 } else { 1 };
    }

    Ok(edges)
}

/// Edge from slot `i` to slot `i + 1`, or None when either slot is a
/// sentinel or its coordinate was never seen as a marker point.
fn edge_between(
    xs: &[Option<Number>],
    ys: &[Option<Number>],
    i: usize,
    id_by_coord: &IndexMap<CoordKey, String>,
) -> Option<EdgeRow> {
    let sx = xs.get(i)?.as_ref()?;
    let sy = ys.get(i)?.as_ref()?;
    let tx = xs.get(i + 1)?.as_ref()?;
    let ty = ys.get(i + 1)?.as_ref()?;

    let source = id_by_coord.get(&CoordKey::new(sx, sy))?;
    let target = id_by_coord.get(&CoordKey::new(tx, ty))?;

    Some(EdgeRow {
        source: source.clone(),
        target: target.clone(),
        value: 1,
    })
}
