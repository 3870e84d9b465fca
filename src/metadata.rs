//! Metadata derivation: parent-name to color lookup from a nodes table
//!
//! Scans a nodes CSV and records the color of every parent category. Later
//! rows overwrite the color for a name already seen, but the name keeps its
//! original position, so the output is in first-sighting order.

use crate::error::{ExportError, ExportResult};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Default input path, as used by the space viewer build
pub const DEFAULT_INPUT: &str = "public/space-viewer/industry_space_nodes.csv";
/// Default output path
pub const DEFAULT_OUTPUT: &str = "public/space-viewer/industry_space_metadata.csv";

/// Derive the `name,color` lookup table from a nodes CSV.
///
/// Rows missing either a non-empty `parent_name` or a non-empty `color`
/// are ignored; a nodes table without those columns yields a header-only
/// output file.
pub fn run(input: &Path, output: &Path) -> ExportResult<usize> {
    info!(path = %input.display(), "reading nodes table");
    let file = File::open(input).map_err(|e| ExportError::io(input, e))?;
    let colors = collect_colors(file)?;
    info!(names = colors.len(), "collected parent categories");

    let out = File::create(output).map_err(|e| ExportError::io(output, e))?;
    write_lookup(out, &colors)?;
    info!(path = %output.display(), "wrote metadata");

    Ok(colors.len())
}

/// Last-seen color per parent name, in first-sighting order
fn collect_colors<R: Read>(reader: R) -> ExportResult<IndexMap<String, String>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_idx = headers.iter().position(|h| h == "parent_name");
    let color_idx = headers.iter().position(|h| h == "color");

    let mut colors = IndexMap::new();
    let (Some(name_idx), Some(color_idx)) = (name_idx, color_idx) else {
        return Ok(colors);
    };

    for record in rdr.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or_default();
        let color = record.get(color_idx).unwrap_or_default();
        if !name.is_empty() && !color.is_empty() {
            colors.insert(name.to_string(), color.to_string());
        }
    }

    Ok(colors)
}

fn write_lookup<W: Write>(writer: W, colors: &IndexMap<String, String>) -> ExportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["name", "color"])?;
    for (name, color) in colors {
        wtr.write_record([name, color])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn collects_last_seen_color_in_first_sighting_order() {
        let input = "\
id,parent_name,color
a,Manufacturing,#111
b,Agriculture,#222
c,Manufacturing,#333
";
        let colors = collect_colors(input.as_bytes()).unwrap();
        let pairs: Vec<(&str, &str)> = colors
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("Manufacturing", "#333"), ("Agriculture", "#222")]
        );
    }

    #[test]
    fn rows_with_empty_name_or_color_are_ignored() {
        let input = "\
id,parent_name,color
a,,#111
b,Agriculture,
c,Services,#333
";
        let colors = collect_colors(input.as_bytes()).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.get("Services").map(String::as_str), Some("#333"));
    }

    #[test]
    fn missing_columns_yield_empty_lookup() {
        let input = "id,name\na,Textiles\n";
        let colors = collect_colors(input.as_bytes()).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn run_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nodes.csv");
        let output = dir.path().join("metadata.csv");
        fs::write(&input, "id,parent_name,color\na,Agro,#0f0\n").unwrap();

        let count = run(&input, &output).unwrap();
        assert_eq!(count, 1);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "name,color\nAgro,#0f0\n");
    }
}
