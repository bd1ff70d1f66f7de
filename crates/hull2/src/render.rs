//! Raster rendering of a point cloud and its hull.
//!
//! - `Canvas`: raster size; also decides which input points are drawable.
//! - `RasterMap`: Cartesian (origin bottom-left, y up) to raster (origin
//!   top-left, y down), `(x, y) ↦ (x, height − 1 − y)`.
//! - `render`: white background, 3×3 black markers for in-bounds points, blue
//!   closed hull outline of width 2.
//!
//! Everything is integer arithmetic. Hull edges are walked along their major
//! axis only across the canvas columns (or rows) they cover, with the minor
//! coordinate computed exactly, so vertices anywhere in the `i64` plane land
//! on the right pixels.

use std::path::Path;

use image::{ImageFormat, ImageResult, Rgb, RgbImage};
use nalgebra::{Matrix2, Vector2};

use crate::geom2::{Hull, Point};

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const MARKER_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const HULL_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
/// Marker half-size: a point covers `[x-1, x+1] × [y-1, y+1]`.
pub const MARKER_RADIUS: i64 = 1;
pub const STROKE_WIDTH: i128 = 2;

/// Raster size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
        }
    }
}

impl Canvas {
    /// `0 <= x < width` and `0 <= y < height`, in Cartesian coordinates.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..i64::from(self.width)).contains(&p.x) && (0..i64::from(self.height)).contains(&p.y)
    }
}

/// Cartesian → raster affine map `v ↦ M v + t`.
///
/// Works on `i128` so that the flip of any `i64` point is representable.
#[derive(Clone, Copy, Debug)]
pub struct RasterMap {
    pub m: Matrix2<i128>,
    pub t: Vector2<i128>,
    canvas: Canvas,
}

impl RasterMap {
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            m: Matrix2::new(1, 0, 0, -1),
            t: Vector2::new(0, i128::from(canvas.height) - 1),
            canvas,
        }
    }

    #[inline]
    pub fn apply(&self, v: Vector2<i128>) -> Vector2<i128> {
        self.m * v + self.t
    }

    /// Raster pixel of an in-bounds point; `None` for points off the canvas.
    pub fn pixel(&self, p: Point) -> Option<(i64, i64)> {
        if !self.canvas.contains(p) {
            return None;
        }
        let r = self.apply(p.to_vector());
        Some((i64::try_from(r.x).ok()?, i64::try_from(r.y).ok()?))
    }
}

/// Draw `points` and the closed outline of `hull` onto a fresh image.
///
/// Out-of-bounds points are skipped; hull edges reaching off the canvas only
/// contribute their visible part.
pub fn render(points: &[Point], hull: &Hull, canvas: Canvas) -> RgbImage {
    let mut img = RgbImage::from_pixel(canvas.width, canvas.height, BACKGROUND);
    let map = RasterMap::for_canvas(canvas);

    for p in points {
        if let Some((xi, yi)) = map.pixel(*p) {
            for y in yi - MARKER_RADIUS..=yi + MARKER_RADIUS {
                for x in xi - MARKER_RADIUS..=xi + MARKER_RADIUS {
                    paint(&mut img, Vector2::new(i128::from(x), i128::from(y)), MARKER_COLOR);
                }
            }
        }
    }

    if hull.len() >= 2 {
        for (a, b) in hull.edges() {
            draw_edge(
                &mut img,
                map.apply(a.to_vector()),
                map.apply(b.to_vector()),
                HULL_COLOR,
            );
        }
    }
    img
}

/// Encode as PNG regardless of the file extension.
pub fn save_png(img: &RgbImage, path: &Path) -> ImageResult<()> {
    img.save_with_format(path, ImageFormat::Png)
}

#[inline]
fn paint(img: &mut RgbImage, v: Vector2<i128>, c: Rgb<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(v.x), u32::try_from(v.y)) {
        if x < img.width() && y < img.height() {
            img.put_pixel(x, y, c);
        }
    }
}

/// `round(a · k / d)` (halves away from zero) for `a <= d` and all operands below `2^66`.
///
/// `a · k` may need 132 bits; splitting `k` at bit 32 keeps every partial
/// product below `2^99`.
fn mul_div_round(a: u128, k: u128, d: u128) -> u128 {
    let (k_hi, k_lo) = (k >> 32, k & 0xffff_ffff);
    let hi = a * k_hi;
    let (q1, r1) = (hi / d, hi % d);
    let lo = (r1 << 32) + a * k_lo;
    let (q2, r2) = (lo / d, lo % d);
    let q = (q1 << 32) + q2;
    if 2 * r2 >= d {
        q + 1
    } else {
        q
    }
}

/// Stroke the raster segment `a→b`, `STROKE_WIDTH` pixels across its minor axis.
///
/// Only major-axis positions in `[-1, extent]` are visited; the extra pixel on
/// each side keeps strokes hugging the border at full width.
fn draw_edge(img: &mut RgbImage, a: Vector2<i128>, b: Vector2<i128>, c: Rgb<u8>) {
    let d = b - a;
    let (major, minor) = if d.x.abs() >= d.y.abs() { (0, 1) } else { (1, 0) };
    let (a, b) = if a[major] <= b[major] { (a, b) } else { (b, a) };
    let d = b - a;
    let extent = i128::from(if major == 0 { img.width() } else { img.height() });
    let (run, rise) = (d[major].unsigned_abs(), d[minor].unsigned_abs());
    for m in a[major].max(-1)..=b[major].min(extent) {
        let off = if run == 0 {
            0
        } else {
            // Bounded by `rise < 2^66`, so the cast is lossless.
            mul_div_round(rise, (m - a[major]).unsigned_abs(), run) as i128
        };
        let mut px = a;
        px[major] = m;
        px[minor] += if d[minor] < 0 { -off } else { off };
        for k in -(STROKE_WIDTH / 2)..(STROKE_WIDTH - STROKE_WIDTH / 2) {
            let mut q = px;
            q[minor] += k;
            paint(img, q, c);
        }
    }
}
