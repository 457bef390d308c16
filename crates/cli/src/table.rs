//! Vertex tables: coordinates relative to the centroid, their n-spherical
//! form, and closed-form names for both.

use anyhow::{Context, Result};
use nshape::names::named_point;
use nshape::polar::{to_n_spherical, NSpherical};
use nshape::Shape;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub struct VertexRow {
    pub coords: Vec<f64>,
    /// `None` in one dimension, where there is no angle.
    pub polar: Option<NSpherical>,
}

impl VertexRow {
    pub fn named(&self) -> String {
        named_point(&self.coords).join(", ")
    }

    pub fn named_polar(&self) -> String {
        self.polar
            .as_ref()
            .map(|ns| named_point(ns.to_vec()).join(", "))
            .unwrap_or_default()
    }
}

/// One row per vertex, centred on the centroid of `shape`.
pub fn vertex_rows(shape: &Shape) -> Result<Vec<VertexRow>> {
    let center = shape.centroid().context("shape has no points")?;
    shape
        .points
        .iter()
        .map(|p| {
            let rel = p - &center;
            let polar = if rel.dim() >= 2 {
                Some(to_n_spherical(&rel)?)
            } else {
                None
            };
            Ok(VertexRow {
                coords: rel.as_slice().to_vec(),
                polar,
            })
        })
        .collect()
}

pub fn vertex_frame(rows: &[VertexRow], dim: usize) -> PolarsResult<DataFrame> {
    let mut columns = vec![Series::new(
        "index".into(),
        (0..rows.len() as u32).collect::<Vec<_>>(),
    )];
    for i in 0..dim {
        let xs: Vec<f64> = rows.iter().map(|r| r.coords[i]).collect();
        columns.push(Series::new(format!("x{i}").as_str().into(), xs));
    }
    if dim >= 2 {
        let polar = |f: &dyn Fn(&NSpherical) -> f64| -> Vec<f64> {
            rows.iter()
                .map(|r| r.polar.as_ref().map_or(f64::NAN, f))
                .collect()
        };
        columns.push(Series::new("r".into(), polar(&|ns| ns.r)));
        for i in 0..dim - 1 {
            columns.push(Series::new(
                format!("phi{i}").as_str().into(),
                polar(&|ns| ns.angles[i]),
            ));
        }
    }
    let named: Vec<String> = rows.iter().map(VertexRow::named).collect();
    let named_polar: Vec<String> = rows.iter().map(VertexRow::named_polar).collect();
    columns.push(Series::new("named".into(), named));
    columns.push(Series::new("named_polar".into(), named_polar));
    DataFrame::new(columns)
}

/// CSV, or Parquet when the extension says so.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    crate::create_parent(path)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            let mut file = file;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}
