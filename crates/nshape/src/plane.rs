//! Parallelograms: bounded planar patches `{ p1 + (p2 - p1) a + (p3 - p1) b }`.
//!
//! Purpose
//! - Parametrize a plane in R^n by two spanning vectors and recover the
//!   parameters of a point (least squares via the normal equations).
//! - Intersect lines with the plane (3-D) and project points onto it; the
//!   camera in `view` uses both as its screen.
//!
//! Conventions
//! - Corners are stored in drawing order `[p1, p2, p4, p3]` with the derived
//!   fourth corner `p4 = p2 + p3 - p1`, so `edges()` walks the outline.
//! - Degenerate (collinear) corners are accepted at construction; the solvers
//!   report `SingularSystem` or `Intersection::Degenerate` instead.

use nalgebra::{DMatrix, DVector, Matrix2, Matrix3, Vector2, Vector3};

use crate::cfg::{PARALLEL_EPS, SINGULAR_EPS};
use crate::error::{check_dim, GeomError, Result};
use crate::line::Line;
use crate::point::Point;

/// Outcome of a line/plane intersection, in plane parameters `(a, b)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Unique intersection point `point_for_params(a, b)`.
    Point { a: f64, b: f64 },
    /// Line direction lies in the plane's direction space.
    Parallel { in_plane: bool },
    /// The parallelogram or the line collapses (collinear corners, `p1 == p2`).
    Degenerate,
}

impl Intersection {
    #[inline]
    pub fn params(&self) -> Option<(f64, f64)> {
        match *self {
            Intersection::Point { a, b } => Some((a, b)),
            _ => None,
        }
    }

    /// Compatibility accessor: `(0, 0)` whenever there is no unique solution.
    #[inline]
    pub fn params_or_origin(&self) -> (f64, f64) {
        self.params().unwrap_or((0.0, 0.0))
    }

    #[inline]
    pub fn is_unique(&self) -> bool {
        matches!(self, Intersection::Point { .. })
    }
}

/// Object a parallelogram can be intersected with or projected from.
#[derive(Clone, Copy, Debug)]
pub enum Primitive<'a> {
    Point(&'a Point),
    Line(&'a Line),
    Parallelogram(&'a Parallelogram),
}

impl<'a> From<&'a Point> for Primitive<'a> {
    fn from(p: &'a Point) -> Self {
        Primitive::Point(p)
    }
}

impl<'a> From<&'a Line> for Primitive<'a> {
    fn from(l: &'a Line) -> Self {
        Primitive::Line(l)
    }
}

impl<'a> From<&'a Parallelogram> for Primitive<'a> {
    fn from(p: &'a Parallelogram) -> Self {
        Primitive::Parallelogram(p)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parallelogram {
    points: [Point; 4],
}

impl Parallelogram {
    /// From three corners; the fourth (opposite `p1`) is derived.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Result<Self> {
        check_dim(p1.dim(), p2.dim())?;
        check_dim(p1.dim(), p3.dim())?;
        let p4 = &(&p2 + &p3) - &p1;
        Ok(Self {
            points: [p1, p2, p4, p3],
        })
    }

    /// Centred on `center` and spanned by `v1`, `v2`.
    pub fn from_point_and_vectors(center: &Point, v1: &Point, v2: &Point) -> Result<Self> {
        check_dim(center.dim(), v1.dim())?;
        check_dim(center.dim(), v2.dim())?;
        let p = &(center - &(v1 / 2.0)) - &(v2 / 2.0);
        let (p2, p3) = (&p + v1, &p + v2);
        Self::new(p, p2, p3)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.points[0].dim()
    }

    #[inline]
    pub fn p1(&self) -> &Point {
        &self.points[0]
    }
    #[inline]
    pub fn p2(&self) -> &Point {
        &self.points[1]
    }
    #[inline]
    pub fn p3(&self) -> &Point {
        &self.points[3]
    }
    /// Derived corner `p2 + p3 - p1`.
    #[inline]
    pub fn p4(&self) -> &Point {
        &self.points[2]
    }

    /// Corners in outline order.
    #[inline]
    pub fn corners(&self) -> &[Point; 4] {
        &self.points
    }

    /// Outline as index pairs into `corners()`.
    pub fn edges() -> impl Iterator<Item = (usize, usize)> {
        (0..4).map(|a| (a, (a + 1) % 4))
    }

    #[inline]
    fn v1(&self) -> Point {
        self.p2() - self.p1()
    }
    #[inline]
    fn v2(&self) -> Point {
        self.p3() - self.p1()
    }

    /// Spanning vectors (nearly) linearly dependent: the Gram determinant
    /// `|v1|²|v2|² - (v1·v2)²` is at most `SINGULAR_EPS · |v1|²|v2|²`.
    pub fn is_degenerate(&self) -> bool {
        let (v1, v2) = (self.v1(), self.v2());
        let (g11, g22, g12) = (v1.inner(&v1), v2.inner(&v2), v1.inner(&v2));
        (g11 * g22 - g12 * g12).abs() <= SINGULAR_EPS * g11 * g22
    }

    #[doc(alias = "circumfence")]
    pub fn circumference(&self) -> f64 {
        2.0 * (self.p1().distance(self.p2()) + self.p1().distance(self.p3()))
    }

    /// Twice the Heron area of the triangle `p1 p2 p3`.
    ///
    /// Rounding can push Heron's product slightly below zero for collinear
    /// corners; that case reports area 0.
    pub fn surface_area(&self) -> f64 {
        let a = self.p1().distance(self.p2());
        let b = self.p2().distance(self.p3());
        let c = self.p3().distance(self.p1());
        let s = (a + b + c) / 2.0;
        2.0 * (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    pub fn point_for_params(&self, a: f64, b: f64) -> Point {
        &(self.p1() + &(self.v1() * a)) + &(self.v2() * b)
    }

    /// Least-squares plane parameters of `pt`: solves `AᵀA x = Aᵀu` with
    /// `A = [v1 v2]` and `u = pt - p1`. For points off the plane this is the
    /// parameter pair of their orthogonal projection.
    pub fn params_for_point(&self, pt: &Point) -> Result<(f64, f64)> {
        check_dim(self.dim(), pt.dim())?;
        let (v1, v2) = (self.v1(), self.v2());
        let u = pt - self.p1();
        let a = DMatrix::from_columns(&[v1.into_vector(), v2.into_vector()]);
        let at = a.transpose();
        let ata = &at * &a;
        let atu: DVector<f64> = &at * u.as_vector();
        let ata = Matrix2::new(ata[(0, 0)], ata[(0, 1)], ata[(1, 0)], ata[(1, 1)]);
        if ata.determinant().abs() <= SINGULAR_EPS * ata[(0, 0)] * ata[(1, 1)] {
            return Err(GeomError::SingularSystem {
                op: "params_for_point",
            });
        }
        let inv = ata.try_inverse().ok_or(GeomError::SingularSystem {
            op: "params_for_point",
        })?;
        let ab = inv * Vector2::new(atu[0], atu[1]);
        Ok((ab[0], ab[1]))
    }

    /// Normal vector `v1 × v2` (3-D only).
    pub fn perpendicular(&self) -> Result<Point> {
        self.v1().cross(&self.v2())
    }

    /// Intersect `obj` with the plane of this parallelogram.
    ///
    /// Supported: a line in 3-D. Plane/plane intersection (4-D) and every
    /// other combination report `Unsupported`.
    pub fn intersection_params<'a>(&self, obj: impl Into<Primitive<'a>>) -> Result<Intersection> {
        match (obj.into(), self.dim()) {
            (Primitive::Line(line), 3) => self.intersect_with_line(line),
            (Primitive::Parallelogram(_), 4) => Err(GeomError::Unsupported {
                op: "plane/plane intersection",
                dim: 4,
            }),
            (Primitive::Line(_), dim) => Err(GeomError::Unsupported {
                op: "line/plane intersection",
                dim,
            }),
            (Primitive::Parallelogram(_), dim) => Err(GeomError::Unsupported {
                op: "plane/plane intersection",
                dim,
            }),
            (Primitive::Point(_), dim) => Err(GeomError::Unsupported {
                op: "point/plane intersection",
                dim,
            }),
        }
    }

    /// Plane parameters where `line` (extended) meets the plane (3-D).
    ///
    /// Solves `[v1 v2 -w] (a, b, c)ᵀ = line.p1 - p1` with `w` the line direction.
    pub fn intersect_with_line(&self, line: &Line) -> Result<Intersection> {
        if self.dim() != 3 {
            return Err(GeomError::Unsupported {
                op: "line/plane intersection",
                dim: self.dim(),
            });
        }
        check_dim(3, line.dim())?;
        let normal = self.perpendicular()?;
        let w = line.vector();
        if self.is_degenerate() || w.is_zero() {
            tracing::debug!(line = %line.p1, "degenerate line/plane intersection");
            return Ok(Intersection::Degenerate);
        }
        let offset = &line.p1 - self.p1();
        let nw = normal.inner(&w);
        if nw * nw <= PARALLEL_EPS * normal.inner(&normal) * w.inner(&w) {
            let in_plane = normal.inner(&offset).abs() <= PARALLEL_EPS.sqrt() * normal.length();
            return Ok(Intersection::Parallel { in_plane });
        }
        let m = Matrix3::from_columns(&[to3(&self.v1()), to3(&self.v2()), -to3(&w)]);
        match m.lu().solve(&to3(&offset)) {
            Some(abc) => Ok(Intersection::Point {
                a: abc[0],
                b: abc[1],
            }),
            None => {
                tracing::debug!("line/plane system is singular");
                Ok(Intersection::Degenerate)
            }
        }
    }

    /// Project `obj` orthogonally onto the plane; points only, 3-D only.
    pub fn projection_params<'a>(&self, obj: impl Into<Primitive<'a>>) -> Result<Intersection> {
        match obj.into() {
            Primitive::Point(pt) => self.project_point(pt),
            Primitive::Line(_) => Err(GeomError::Unsupported {
                op: "line projection",
                dim: self.dim(),
            }),
            Primitive::Parallelogram(_) => Err(GeomError::Unsupported {
                op: "plane projection",
                dim: self.dim(),
            }),
        }
    }

    /// Foot of the normal through `pt`, as plane parameters (3-D).
    pub fn project_point(&self, pt: &Point) -> Result<Intersection> {
        check_dim(self.dim(), pt.dim())?;
        let normal = self.perpendicular()?;
        self.intersect_with_line(&Line::new(pt.clone(), pt + &normal)?)
    }
}

#[inline]
fn to3(p: &Point) -> Vector3<f64> {
    Vector3::new(p[0], p[1], p[2])
}

#[cfg(test)]
mod tests;
