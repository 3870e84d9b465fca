//! space-export - flatten "space" graph JSON into CSV tables
//!
//! Converts the graph-shaped JSON documents behind the industry- and
//! technology-space viewers into flat CSV tables:
//! - Technology space: decodes a plotting library's flattened coordinate
//!   traces back into a node table and an edge table
//! - Industry space: flattens a `{nodes, links}` document into two tables
//! - Metadata: derives a `name,color` lookup from a nodes table
//!
//! Each conversion is a single synchronous pass: read one file into memory,
//! reshape it, write the output tables, done.

pub mod annotation;
pub mod error;
pub mod graph;
pub mod industry;
pub mod metadata;
pub mod tables;
pub mod technology;
pub mod trace;

pub use error::{ExportError, ExportResult};
pub use graph::{EdgeRow, NodeRow, SpaceGraph};
pub use trace::{Marker, Trace};
