//! Technology-space conversion: plot traces into node and edge tables

use crate::error::{ExportError, ExportResult};
use crate::graph;
use crate::tables;
use crate::trace::Trace;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Default input path, as used by the space viewer build
pub const DEFAULT_INPUT: &str = "public/static/technology_space.json";
/// Default output directory (next to the input)
pub const DEFAULT_OUT_DIR: &str = "public/static";

const NODES_FILE: &str = "technology_space_nodes.csv";
const LINKS_FILE: &str = "technology_space_links.csv";

/// Row counts written by one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Node rows written (occurrences, not distinct ids)
    pub nodes: usize,
    /// Edge rows written
    pub edges: usize,
}

/// Convert one technology-space file into its nodes and links tables.
pub fn run(input: &Path, out_dir: &Path) -> ExportResult<Report> {
    info!(path = %input.display(), "reading technology space");
    let raw = std::fs::read_to_string(input).map_err(|e| ExportError::io(input, e))?;
    let traces: Vec<Trace> =
        serde_json::from_str(&raw).map_err(|e| ExportError::json(input, e))?;
    info!(traces = traces.len(), "parsed plot traces");

    let space = graph::reconstruct(&traces)?;
    info!(
        nodes = space.nodes.len(),
        edges = space.edges.len(),
        "reconstructed graph"
    );

    let nodes_path = out_dir.join(NODES_FILE);
    let links_path = out_dir.join(LINKS_FILE);

    let nodes_file = File::create(&nodes_path).map_err(|e| ExportError::io(&nodes_path, e))?;
    tables::write_nodes(nodes_file, &space.nodes)?;

    let links_file = File::create(&links_path).map_err(|e| ExportError::io(&links_path, e))?;
    tables::write_edges(links_file, &space.edges)?;

    info!(
        nodes = %nodes_path.display(),
        links = %links_path.display(),
        "wrote tables"
    );

    Ok(Report {
        nodes: space.nodes.len(),
        edges: space.edges.len(),
    })
}
