//! Industry-space conversion: flatten a `{nodes, links}` document
//!
//! Nodes may carry a nested `parent` object; its fields are hoisted into
//! `parent_<key>` columns. Headers are the union of keys across all rows,
//! sorted alphabetically (node columns first, then parent columns), and a
//! row's missing fields are emitted as empty strings.

use crate::error::{ExportError, ExportResult};
use crate::tables::json_cell;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Default input path, as used by the space viewer build
pub const DEFAULT_INPUT: &str = "public/space-viewer/industry_space.json";

const NODES_FILE: &str = "industry_space_nodes.csv";
const LINKS_FILE: &str = "industry_space_links.csv";

/// Row counts written by one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Node rows written
    pub nodes: usize,
    /// Link rows written
    pub links: usize,
}

/// Flatten one industry-space file into its nodes and links tables.
pub fn run(input: &Path, out_dir: &Path) -> ExportResult<Report> {
    info!(path = %input.display(), "reading industry space");
    let raw = std::fs::read_to_string(input).map_err(|e| ExportError::io(input, e))?;
    let doc: Value = serde_json::from_str(&raw).map_err(|e| ExportError::json(input, e))?;

    let nodes = array_field(&doc, "nodes")?;
    let links = array_field(&doc, "links")?;
    info!(nodes = nodes.len(), links = links.len(), "parsed document");

    let nodes_path = out_dir.join(NODES_FILE);
    let file = File::create(&nodes_path).map_err(|e| ExportError::io(&nodes_path, e))?;
    write_nodes(file, nodes)?;

    let links_path = out_dir.join(LINKS_FILE);
    let file = File::create(&links_path).map_err(|e| ExportError::io(&links_path, e))?;
    write_links(file, links)?;

    info!(
        nodes = %nodes_path.display(),
        links = %links_path.display(),
        "wrote tables"
    );

    Ok(Report {
        nodes: nodes.len(),
        links: links.len(),
    })
}

fn array_field<'a>(doc: &'a Value, name: &str) -> ExportResult<&'a Vec<Value>> {
    doc.get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| ExportError::shape(format!("missing '{name}' array")))
}

fn object<'a>(value: &'a Value, what: &str) -> ExportResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ExportError::shape(format!("{what} is not an object")))
}

/// Parent sub-object of a node, when present and non-null
fn parent_of(node: &Map<String, Value>) -> Option<&Map<String, Value>> {
    node.get("parent").and_then(Value::as_object)
}

fn write_nodes<W: std::io::Write>(writer: W, nodes: &[Value]) -> ExportResult<()> {
    // Union of keys across all rows; parent is flattened, not emitted as-is
    let mut node_headers = BTreeSet::new();
    let mut parent_headers = BTreeSet::new();
    for node in nodes {
        let node = object(node, "node")?;
        for key in node.keys() {
            if key != "parent" {
                node_headers.insert(key.clone());
            }
        }
        if let Some(parent) = parent_of(node) {
            for key in parent.keys() {
                parent_headers.insert(format!("parent_{key}"));
            }
        }
    }

    let mut wtr = csv::Writer::from_writer(writer);
    let header: Vec<&str> = node_headers
        .iter()
        .chain(parent_headers.iter())
        .map(String::as_str)
        .collect();
    wtr.write_record(&header)?;

    for node in nodes {
        let node = object(node, "node")?;
        let mut record: Vec<String> = node_headers
            .iter()
            .map(|key| node.get(key).map(json_cell).unwrap_or_default())
            .collect();
        let parent = parent_of(node);
        for key in &parent_headers {
            let bare = &key["parent_".len()..];
            let cell = parent
                .and_then(|p| p.get(bare))
                .map(json_cell)
                .unwrap_or_default();
            record.push(cell);
        }
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn write_links<W: std::io::Write>(writer: W, links: &[Value]) -> ExportResult<()> {
    let mut headers = BTreeSet::new();
    for link in links {
        let link = object(link, "link")?;
        for key in link.keys() {
            headers.insert(key.clone());
        }
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(headers.iter())?;

    for link in links {
        let link = object(link, "link")?;
        let record: Vec<String> = headers
            .iter()
            .map(|key| link.get(key).map(json_cell).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
