//! Regular polytopes as point sets plus edges.
//!
//! Purpose
//! - Closed-form vertex sets for the simplex, hypercube and cross polytope in
//!   any dimension, the dodecahedron and icosahedron (3-D) and the 24-, 120-
//!   and 600-cell (4-D).
//! - Edges are index pairs into `points`. The three infinite families use
//!   combinatorial rules; the others are found by brute force as the point
//!   pairs at the known edge length (within `EDGE_EPS`).
//!
//! Reference counts (points, edges, edge length)
//! - simplex in R^d: d+1, C(d+1, 2), √2
//! - cube in R^d: 2^d, d·2^(d-1), 1
//! - cross polytope in R^d (d ≥ 2): 2d, 2d(d-1), √2
//! - dodecahedron: 20, 30, 4/(1+√5); icosahedron: 12, 30, 1
//! - 24-cell: 24, 96, 1; 120-cell: 600, 1200, 3-√5; 600-cell: 120, 720, 1/φ
//!
//! References
//! - https://en.wikipedia.org/wiki/Simplex
//! - https://en.wikipedia.org/wiki/Hypercube
//! - https://en.wikipedia.org/wiki/Cross-polytope
//! - https://en.wikipedia.org/wiki/120-cell, https://en.wikipedia.org/wiki/600-cell

mod gen;

use crate::cfg::EDGE_EPS;
use crate::error::{check_dim, GeomError, Result};
use crate::point::Point;

/// Largest hypercube dimension we enumerate (2^16 points).
pub const MAX_CUBE_DIM: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Simplex,
    Cube,
    CrossPolytope,
    Dodecahedron,
    Icosahedron,
    Cell24,
    Cell120,
    Cell600,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Simplex,
        ShapeKind::Cube,
        ShapeKind::CrossPolytope,
        ShapeKind::Dodecahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Cell24,
        ShapeKind::Cell120,
        ShapeKind::Cell600,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Simplex => "simplex",
            ShapeKind::Cube => "cube",
            ShapeKind::CrossPolytope => "cross-polytope",
            ShapeKind::Dodecahedron => "dodecahedron",
            ShapeKind::Icosahedron => "icosahedron",
            ShapeKind::Cell24 => "24-cell",
            ShapeKind::Cell120 => "120-cell",
            ShapeKind::Cell600 => "600-cell",
        }
    }

    /// The only dimension a shape exists in, for the non-family shapes.
    pub fn fixed_dim(self) -> Option<usize> {
        match self {
            ShapeKind::Simplex | ShapeKind::Cube | ShapeKind::CrossPolytope => None,
            ShapeKind::Dodecahedron | ShapeKind::Icosahedron => Some(3),
            ShapeKind::Cell24 | ShapeKind::Cell120 | ShapeKind::Cell600 => Some(4),
        }
    }

    pub fn supports_dim(self, dim: usize) -> bool {
        match self {
            ShapeKind::Cube => (1..=MAX_CUBE_DIM).contains(&dim),
            ShapeKind::Simplex | ShapeKind::CrossPolytope => dim >= 1,
            _ => self.fixed_dim() == Some(dim),
        }
    }

    /// Edge length of the generated (unscaled) shape.
    pub fn edge_length(self) -> f64 {
        let sq5 = 5f64.sqrt();
        match self {
            ShapeKind::Simplex | ShapeKind::CrossPolytope => 2f64.sqrt(),
            ShapeKind::Cube | ShapeKind::Icosahedron | ShapeKind::Cell24 => 1.0,
            ShapeKind::Dodecahedron => 4.0 / (1.0 + sq5),
            ShapeKind::Cell120 => 3.0 - sq5,
            ShapeKind::Cell600 => 2.0 / (1.0 + sq5),
        }
    }

    /// Vertices around the shape's own reference point, before translation.
    pub fn base_points(self, dim: usize) -> Result<Vec<Point>> {
        if !self.supports_dim(dim) {
            return Err(GeomError::Unsupported {
                op: self.name(),
                dim,
            });
        }
        Ok(match self {
            ShapeKind::Simplex => gen::simplex(dim),
            ShapeKind::Cube => gen::cube(dim),
            ShapeKind::CrossPolytope => gen::cross_polytope(dim),
            ShapeKind::Dodecahedron => gen::dodecahedron(),
            ShapeKind::Icosahedron => gen::icosahedron(),
            ShapeKind::Cell24 => gen::cell24(),
            ShapeKind::Cell120 => gen::cell120(),
            ShapeKind::Cell600 => gen::cell600(),
        })
    }

    fn edges(self, points: &[Point]) -> Vec<(usize, usize)> {
        let n = points.len();
        match self {
            // complete graph
            ShapeKind::Simplex => (0..n)
                .flat_map(|a| (0..a).map(move |b| (a, b)))
                .collect(),
            // indices differing in exactly one bit
            ShapeKind::Cube => (1..n)
                .flat_map(|a| (0..a).map(move |b| (a, b)))
                .filter(|&(a, b)| (a ^ b).is_power_of_two())
                .collect(),
            // points 2i and 2i+1 share an axis; every other pair is an edge
            ShapeKind::CrossPolytope => (0..n)
                .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
                .filter(|&(a, b)| a ^ b != 1)
                .collect(),
            _ => edges_by_length(points, self.edge_length()),
        }
    }
}

/// All pairs `(a, b)`, `a > b`, at distance `len` within `EDGE_EPS`.
pub fn edges_by_length(points: &[Point], len: f64) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for a in 1..points.len() {
        for b in 0..a {
            if (points[a].distance(&points[b]) - len).abs() < EDGE_EPS {
                out.push((a, b));
            }
        }
    }
    out
}

/// Points plus edges (index pairs into `points`).
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub label: &'static str,
    pub points: Vec<Point>,
    pub edges: Vec<(usize, usize)>,
}

impl Shape {
    /// `kind` in `origin.dim()` dimensions, translated by `origin`.
    pub fn new(kind: ShapeKind, origin: &Point) -> Result<Self> {
        let points: Vec<Point> = kind
            .base_points(origin.dim())?
            .into_iter()
            .map(|p| &p + origin)
            .collect();
        let edges = kind.edges(&points);
        tracing::debug!(
            shape = kind.name(),
            dim = origin.dim(),
            points = points.len(),
            edges = edges.len(),
            "shape built"
        );
        Ok(Self {
            label: kind.name(),
            points,
            edges,
        })
    }

    /// Coordinate axes from `-extent` to `extent`; axis `i` is edge `(2i, 2i+1)`.
    pub fn axes(dim: usize, extent: f64) -> Self {
        let on_axis = |i: usize, v: f64| -> Point {
            (0..dim).map(|j| if i == j { v } else { 0.0 }).collect()
        };
        let points = (0..dim)
            .flat_map(|i| [on_axis(i, -extent), on_axis(i, extent)])
            .collect();
        let edges = (0..dim).map(|i| (2 * i, 2 * i + 1)).collect();
        Self {
            label: "axes",
            points,
            edges,
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.points.first().map_or(0, Point::dim)
    }

    /// Mean of the points; `None` for an empty shape.
    pub fn centroid(&self) -> Option<Point> {
        let mut it = self.points.iter();
        let mut acc = it.next()?.clone();
        for p in it {
            acc += p;
        }
        Some(acc / self.points.len() as f64)
    }

    /// Same shape moved by `offset`.
    pub fn translated(&self, offset: &Point) -> Result<Self> {
        check_dim(self.dim(), offset.dim())?;
        Ok(Self {
            label: self.label,
            points: self.points.iter().map(|p| p + offset).collect(),
            edges: self.edges.clone(),
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.edges
            .iter()
            .map(move |&(a, b)| (&self.points[a], &self.points[b]))
    }

    pub fn edge_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments().map(|(p, q)| p.distance(q))
    }
}

#[cfg(test)]
mod tests;
