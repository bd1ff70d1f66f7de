//! Seeded random point clouds.
//!
//! Purpose
//! - Reproducible inputs for benches, seeded tests and `cli sample`.
//!
//! Model
//! - `count` points drawn uniformly from the closed box `[x_min, x_max] × [y_min, y_max]`,
//!   optionally with a share of exact duplicates to exercise the dedupe step.
//! - Determinism: the same `(cfg, seed)` always yields the same sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Point;
use crate::render::Canvas;

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
    /// Probability in [0, 1] that a draw repeats an earlier point. Clamped; NaN and
    /// infinities mean no duplicates.
    pub duplicate_frac: f64,
}

impl CloudCfg {
    /// Points that all land inside `canvas` (with a small margin).
    pub fn within_canvas(canvas: Canvas, count: usize) -> Self {
        let margin = 10;
        Self {
            count,
            x_min: margin.min(i64::from(canvas.width) / 2),
            x_max: (i64::from(canvas.width) - 1 - margin).max(0),
            y_min: margin.min(i64::from(canvas.height) / 2),
            y_max: (i64::from(canvas.height) - 1 - margin).max(0),
            duplicate_frac: 0.0,
        }
    }
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self::within_canvas(Canvas::default(), 200)
    }
}

/// Draw `cfg.count` points with the given seed.
pub fn random_points(cfg: CloudCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (x_lo, x_hi) = (cfg.x_min.min(cfg.x_max), cfg.x_min.max(cfg.x_max));
    let (y_lo, y_hi) = (cfg.y_min.min(cfg.y_max), cfg.y_min.max(cfg.y_max));
    let dup = if cfg.duplicate_frac.is_finite() {
        cfg.duplicate_frac.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut out: Vec<Point> = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        if !out.is_empty() && rng.gen_bool(dup) {
            let k = rng.gen_range(0..out.len());
            out.push(out[k]);
            continue;
        }
        out.push(Point::new(
            rng.gen_range(x_lo..=x_hi),
            rng.gen_range(y_lo..=y_hi),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_cloud() {
        let cfg = CloudCfg::default();
        assert_eq!(random_points(cfg, 7), random_points(cfg, 7));
        assert_ne!(random_points(cfg, 7), random_points(cfg, 8));
    }

    #[test]
    fn stays_inside_canvas() {
        let canvas = Canvas::default();
        let cfg = CloudCfg::within_canvas(canvas, 500);
        for p in random_points(cfg, 1) {
            assert!(canvas.contains(p), "{p:?}");
        }
    }

    #[test]
    fn duplicates_are_generated_on_request() {
        let cfg = CloudCfg {
            count: 300,
            duplicate_frac: 0.5,
            ..Default::default()
        };
        let pts = random_points(cfg, 3);
        let mut uniq = pts.clone();
        uniq.sort();
        uniq.dedup();
        assert_eq!(pts.len(), 300);
        assert!(uniq.len() < pts.len());
    }

    #[test]
    fn non_finite_duplicate_share_means_none() {
        let plain = CloudCfg {
            count: 100,
            ..Default::default()
        };
        for frac in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let cfg = CloudCfg {
                duplicate_frac: frac,
                ..plain
            };
            assert_eq!(random_points(cfg, 5), random_points(plain, 5), "{frac}");
        }
    }
}
