//! Writers for the smoothed polyline and ribbon of a run.
//!
//! Format is chosen by extension:
//! - `.json`: nested document with polyline, ribbon and summary.
//! - `.csv` / `.parquet`: one row per polyline sample with columns
//!   `index, x, y, z, nx, ny, nz` (normals null when no ribbon was built).

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde_json::{json, Value};
use surface_spiral::api::{RibbonOutcome, SurfaceSpiral, UpdateSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("csv") => Ok(Format::Csv),
            Some("parquet") => Ok(Format::Parquet),
            other => bail!("unsupported output extension {:?} (json, csv, parquet)", other),
        }
    }
}

pub fn summary_json(summary: &UpdateSummary) -> Value {
    let ribbon = match summary.ribbon {
        RibbonOutcome::Disabled => json!({"status": "disabled"}),
        RibbonOutcome::Built { samples } => json!({"status": "built", "samples": samples}),
        RibbonOutcome::Degenerate { points } => json!({"status": "degenerate", "points": points}),
    };
    json!({
        "polyline_len": summary.polyline_len,
        "wire_len": summary.wire_len,
        "ribbon": ribbon,
    })
}

pub fn write(path: &Path, spiral: &SurfaceSpiral, summary: &UpdateSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match Format::from_path(path)? {
        Format::Json => write_json(path, spiral, summary),
        Format::Csv => {
            let mut df = frame(spiral)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
            Ok(())
        }
        Format::Parquet => {
            let mut df = frame(spiral)?;
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
            Ok(())
        }
    }
}

fn write_json(path: &Path, spiral: &SurfaceSpiral, summary: &UpdateSummary) -> Result<()> {
    let polyline: Vec<[f64; 3]> = spiral.polyline().iter().map(|p| [p.x, p.y, p.z]).collect();
    let ribbon: Vec<Value> = spiral
        .path()
        .samples()
        .iter()
        .map(|s| {
            json!({
                "position": [s.position.x, s.position.y, s.position.z],
                "normal": [s.normal.x, s.normal.y, s.normal.z],
            })
        })
        .collect();
    let doc = json!({
        "raw_points": spiral.points().len(),
        "summary": summary_json(summary),
        "polyline": polyline,
        "ribbon": ribbon,
    });
    std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Polyline samples as a data frame; normals joined by index when the path
/// buffer matches the polyline.
pub fn frame(spiral: &SurfaceSpiral) -> Result<DataFrame> {
    let poly = spiral.polyline();
    let samples = spiral.path().samples();
    let normal = |i: usize| samples.get(i).filter(|_| samples.len() == poly.len()).map(|s| s.normal);

    let index: Vec<u32> = (0..poly.len() as u32).collect();
    let x: Vec<f64> = poly.iter().map(|p| p.x).collect();
    let y: Vec<f64> = poly.iter().map(|p| p.y).collect();
    let z: Vec<f64> = poly.iter().map(|p| p.z).collect();
    let nx: Vec<Option<f64>> = (0..poly.len()).map(|i| normal(i).map(|n| n.x)).collect();
    let ny: Vec<Option<f64>> = (0..poly.len()).map(|i| normal(i).map(|n| n.y)).collect();
    let nz: Vec<Option<f64>> = (0..poly.len()).map(|i| normal(i).map(|n| n.z)).collect();
    let df = df!(
        "index" => index,
        "x" => x,
        "y" => y,
        "z" => z,
        "nx" => nx,
        "ny" => ny,
        "nz" => nz,
    )?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use surface_spiral::api::FlatSurface;
    use tempfile::tempdir;

    fn built() -> (SurfaceSpiral, UpdateSummary) {
        let mut s = SurfaceSpiral::new();
        s.setup(1.0, 2.0, 1.0, 0.1, 0.1).unwrap();
        let summary = s.update(&FlatSurface(0.0), 1.0, Vector2::zeros()).unwrap();
        (s, summary)
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.csv")).unwrap(), Format::Csv);
        assert_eq!(Format::from_path(Path::new("b.parquet")).unwrap(), Format::Parquet);
        assert!(Format::from_path(Path::new("b.txt")).is_err());
    }

    #[test]
    fn frame_has_one_row_per_sample() {
        let (s, summary) = built();
        let df = frame(&s).unwrap();
        assert_eq!(df.height(), summary.polyline_len);
        assert_eq!(df.width(), 7);
        assert_eq!(df.column("nx").unwrap().null_count(), 0);
    }

    #[test]
    fn json_and_csv_outputs_are_written() {
        let (s, summary) = built();
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("out/run.json");
        write(&json_path, &s, &summary).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
        assert_eq!(parsed["polyline"].as_array().unwrap().len(), summary.polyline_len);
        assert_eq!(parsed["summary"]["ribbon"]["status"], "built");

        let csv_path = dir.path().join("run.csv");
        write(&csv_path, &s, &summary).unwrap();
        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(text.lines().next().unwrap(), "index,x,y,z,nx,ny,nz");
        assert_eq!(text.lines().count(), summary.polyline_len + 1);
    }
}
