//! Read → hull → dump → render, as one synchronous pass.
//!
//! Paths come from an explicit `Config`; `Config::beside_executable` resolves
//! the default file names in the directory of the running binary.

use anyhow::{Context, Result};
use hull2::api::{read_records, render, save_png, write_hull, Canvas, Hull, PointSet};
use serde::Serialize;
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::provenance::{write_sidecar, Payload};

pub const INPUT_NAME: &str = "DS5.txt";
pub const HULL_NAME: &str = "DS5_hull.txt";
pub const IMAGE_NAME: &str = "result_hull.png";

/// Input/output locations and canvas size for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    pub input: PathBuf,
    pub hull_out: PathBuf,
    pub image_out: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Config {
    /// Default file names inside `dir`, default canvas.
    pub fn in_dir(dir: &Path) -> Self {
        let canvas = Canvas::default();
        Self {
            input: dir.join(INPUT_NAME),
            hull_out: dir.join(HULL_NAME),
            image_out: dir.join(IMAGE_NAME),
            width: canvas.width,
            height: canvas.height,
        }
    }

    /// `in_dir` of the directory holding the current executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("locating current executable")?;
        let dir = exe
            .parent()
            .with_context(|| format!("executable {} has no parent dir", exe.display()))?;
        Ok(Self::in_dir(dir))
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

/// Counts reported after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Parsed records, duplicates included.
    pub points: usize,
    pub skipped_lines: usize,
    /// Integer pairs beyond the `i64` coordinate range; not part of `points`.
    pub out_of_range: usize,
    pub distinct: usize,
    pub hull_vertices: usize,
    /// Points inside the canvas, i.e. drawn as markers.
    pub drawn: usize,
}

/// Run the whole pipeline. Any I/O failure aborts with the offending path in context.
pub fn run(cfg: &Config) -> Result<Summary> {
    tracing::info!(input = %cfg.input.display(), "reading points");
    let file = File::open(&cfg.input)
        .with_context(|| format!("opening input {}", cfg.input.display()))?;
    let records = read_records(BufReader::new(file))
        .with_context(|| format!("reading input {}", cfg.input.display()))?;
    if records.skipped > 0 {
        tracing::debug!(skipped = records.skipped, "malformed lines skipped");
    }
    if !records.out_of_range.is_empty() {
        tracing::warn!(
            records = ?records.out_of_range,
            "integer pairs outside the i64 coordinate range skipped"
        );
    }

    let set = PointSet::from_points(records.points.iter().copied());
    let hull = Hull::from_point_set(&set);
    let canvas = cfg.canvas();
    let summary = Summary {
        points: records.points.len(),
        skipped_lines: records.skipped,
        out_of_range: records.out_of_range.len(),
        distinct: set.len(),
        hull_vertices: hull.len(),
        drawn: records.points.iter().filter(|p| canvas.contains(**p)).count(),
    };
    tracing::info!(
        points = summary.points,
        distinct = summary.distinct,
        hull_vertices = summary.hull_vertices,
        "hull computed"
    );

    ensure_parent(&cfg.hull_out)?;
    let out = File::create(&cfg.hull_out)
        .with_context(|| format!("creating {}", cfg.hull_out.display()))?;
    write_hull(BufWriter::new(out), &hull)
        .with_context(|| format!("writing {}", cfg.hull_out.display()))?;
    tracing::info!(out = %cfg.hull_out.display(), "hull dump written");

    ensure_parent(&cfg.image_out)?;
    let img = render(&records.points, &hull, canvas);
    save_png(&img, &cfg.image_out)
        .with_context(|| format!("writing image {}", cfg.image_out.display()))?;
    tracing::info!(
        out = %cfg.image_out.display(),
        width = canvas.width,
        height = canvas.height,
        drawn = summary.drawn,
        "image written"
    );

    let params = json!({ "config": cfg, "summary": summary });
    for artifact in [&cfg.hull_out, &cfg.image_out] {
        let payload = Payload::new(params.clone())
            .with_outputs([cfg.hull_out.clone(), cfg.image_out.clone()]);
        write_sidecar(artifact, payload)?;
    }
    Ok(summary)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
