//! Integer 2D convex hulls and their raster rendering.
//!
//! Layout
//! - `geom2`: points, sorted point sets, exact turn predicate, monotone chain hull.
//! - `ingest`: tolerant text parsing of point files and the hull text dump.
//! - `render`: raster image of the input points plus the closed hull outline.
//! - `rand2`: seeded point clouds for benches, property tests and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` re-exports in callers.

pub mod api;
pub mod geom2;
pub mod ingest;
pub mod rand2;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{convex_hull, Hull, Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{convex_hull, cross_checked, turn, Hull, Point, PointSet, Turn};
    pub use crate::ingest::{parse_line, parse_points, read_points, write_hull};
    pub use crate::render::{render, Canvas, RasterMap};
}
