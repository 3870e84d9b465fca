//! CSV serialization of the reconstructed tables
//!
//! Minimal quoting throughout: a field is quoted only when it contains the
//! delimiter, a quote, or a newline. Text fields can be arbitrarily long.

use crate::error::ExportResult;
use crate::graph::{EdgeRow, NodeRow};
use serde_json::Value;
use std::io::Write;

/// Write the nodes table.
///
/// The header leads with `id,x,y,category,size` (those actually present in
/// the row set), then the remaining discovered columns in alphabetical
/// order. A row's missing fields are emitted as empty strings.
pub fn write_nodes<W: Write>(writer: W, nodes: &[NodeRow]) -> ExportResult<()> {
    let has_size = nodes.iter().any(|n| n.size.is_some());
    let has_description = nodes.iter().any(|n| n.description.is_some());
    let has_code = nodes.iter().any(|n| n.technology_code.is_some());
    let has_text = nodes.iter().any(|n| n.text.is_some());

    let mut header: Vec<&str> = vec!["id", "x", "y", "category"];
    if has_size {
        header.push("size");
    }
    // discovered columns, alphabetical
    if has_description {
        header.push("description");
    }
    if has_code {
        header.push("technology_code");
    }
    if has_text {
        header.push("text");
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&header)?;

    for node in nodes {
        let mut record: Vec<String> = vec![
            node.id.clone(),
            node.x.to_string(),
            node.y.to_string(),
            node.category.clone(),
        ];
        if has_size {
            record.push(node.size.as_ref().map(|n| n.to_string()).unwrap_or_default());
        }
        if has_description {
            record.push(node.description.clone().unwrap_or_default());
        }
        if has_code {
            record.push(node.technology_code.clone().unwrap_or_default());
        }
        if has_text {
            record.push(node.text.clone().unwrap_or_default());
        }
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the edges table: `source,target,value`, value always 1.
pub fn write_edges<W: Write>(writer: W, edges: &[EdgeRow]) -> ExportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["source", "target", "value"])?;

    for edge in edges {
        wtr.write_record([
            edge.source.as_str(),
            edge.target.as_str(),
            &edge.value.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render one JSON value as a CSV cell.
///
/// Scalars keep their JSON text form, null becomes an empty string, and
/// any nested structure falls back to compact JSON.
#[must_use]
pub(crate) fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
