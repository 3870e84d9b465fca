//! Typed view of the plot-trace JSON
//!
//! The input file is an array of trace objects. Element 0 carries the
//! connecting lines (null coordinates separate polylines); the remaining
//! elements carry annotated marker points. Only the fields the conversion
//! reads are modeled; everything else in the document is ignored.

use serde::Deserialize;
use serde_json::Number;

/// One trace object from the plot JSON.
///
/// All per-point sequences (`x`, `y`, `text`, `customdata`, marker sizes)
/// are index-aligned within a trace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trace {
    /// Plot mode; marker traces carry `"markers"`
    #[serde(default)]
    pub mode: Option<String>,
    /// X coordinates; a null entry is a polyline sentinel in the line trace
    #[serde(default)]
    pub x: Option<Vec<Option<Number>>>,
    /// Y coordinates, aligned with `x`
    #[serde(default)]
    pub y: Option<Vec<Option<Number>>>,
    /// Free-form annotation string per point
    #[serde(default)]
    pub text: Option<Vec<Option<String>>>,
    /// External identifier per point
    #[serde(default)]
    pub customdata: Option<Vec<Option<String>>>,
    /// Marker styling; only the size sequence is read
    #[serde(default)]
    pub marker: Option<Marker>,
}

/// Marker styling block of a trace
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Marker {
    /// Per-point marker sizes
    #[serde(default)]
    pub size: Option<Vec<Option<Number>>>,
}

impl Trace {
    /// Whether this trace holds annotated marker points.
    ///
    /// Traces without marker mode or without both coordinate sequences are
    /// skipped by the reconstruction, not errored.
    #[must_use]
    pub fn is_marker_trace(&self) -> bool {
        self.mode.as_deref() == Some("markers") && self.x.is_some() && self.y.is_some()
    }

    /// Annotation string for point `i`, if one was supplied
    #[must_use]
    pub fn text_at(&self, i: usize) -> Option<&str> {
        self.text.as_ref()?.get(i)?.as_deref()
    }

    /// External identifier for point `i`; empty strings count as absent
    #[must_use]
    pub fn customdata_at(&self, i: usize) -> Option<&str> {
        self.customdata
            .as_ref()?
            .get(i)?
            .as_deref()
            .filter(|c| !c.is_empty())
    }

    /// Marker size for point `i`, if the trace carries a size sequence
    #[must_use]
    pub fn size_at(&self, i: usize) -> Option<&Number> {
        self.marker.as_ref()?.size.as_ref()?.get(i)?.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Trace {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn marker_trace_requires_mode_and_coordinates() {
        let t = parse(r#"{"mode": "markers", "x": [1.0], "y": [2.0]}"#);
        assert!(t.is_marker_trace());

        let t = parse(r#"{"mode": "lines", "x": [1.0], "y": [2.0]}"#);
        assert!(!t.is_marker_trace());

        let t = parse(r#"{"mode": "markers", "x": [1.0]}"#);
        assert!(!t.is_marker_trace());
    }

    #[test]
    fn null_coordinates_deserialize_as_sentinels() {
        let t = parse(r#"{"x": [1.0, null, 2.0], "y": [0.5, null, 1.5]}"#);
        let xs = t.x.unwrap();
        assert!(xs[0].is_some());
        assert!(xs[1].is_none());
        assert!(xs[2].is_some());
    }

    #[test]
    fn empty_customdata_counts_as_absent() {
        let t = parse(r#"{"customdata": ["ABC", "", null]}"#);
        assert_eq!(t.customdata_at(0), Some("ABC"));
        assert_eq!(t.customdata_at(1), None);
        assert_eq!(t.customdata_at(2), None);
        assert_eq!(t.customdata_at(3), None);
    }

    #[test]
    fn size_reads_through_nested_marker() {
        let t = parse(r#"{"marker": {"size": [4, null]}}"#);
        assert_eq!(t.size_at(0).map(|n| n.to_string()), Some("4".to_string()));
        assert_eq!(t.size_at(1), None);
    }
}
