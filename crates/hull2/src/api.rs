//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   experiments. Breaking changes are allowed and expected.

// Hull engine
pub use crate::geom2::{convex_hull, cross_checked, turn, Hull, Point, PointSet, Turn};
// Text I/O
pub use crate::ingest::{
    classify_line, parse_line, parse_points, read_points, read_records, write_hull, Record, Records,
};
// Random clouds
pub use crate::rand2::{random_points, CloudCfg};
// Raster output
pub use crate::render::{render, save_png, Canvas, RasterMap, HULL_COLOR, MARKER_COLOR};
