//! Integer 2D geometry for the convex hull engine.
//!
//! Purpose
//! - `Point`/`PointSet`: exact integer values with lexicographic order.
//! - `turn`: exact orientation of three points over the full `i64` range.
//! - `convex_hull`: Andrew's monotone chain with strict pruning (`cross <= 0`
//!   pops), so collinear boundary points never appear in the output.
//!
//! No floating point is used anywhere in this module; hull output is
//! bit-for-bit reproducible for a fixed input multiset.

mod chain;
mod types;
mod util;

pub use chain::{convex_hull, Hull};
pub use types::{Point, PointSet};
pub use util::{cross_checked, turn, Turn};
