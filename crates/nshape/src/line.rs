//! Line segments `{ p1 + (p2 - p1) a }`; `a ∈ [0, 1]` is the segment, any
//! other `a` extrapolates along the carrier line.
//!
//! Derived quantities (direction, length, parameters) are computed on demand.

use crate::error::{check_dim, GeomError, Result};
use crate::point::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    /// Segment from `p1` to `p2`; both endpoints must share one dimension.
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>) -> Result<Self> {
        let (p1, p2) = (p1.into(), p2.into());
        check_dim(p1.dim(), p2.dim())?;
        Ok(Self { p1, p2 })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.p1.dim()
    }

    /// Direction vector `p2 - p1`.
    #[inline]
    pub fn vector(&self) -> Point {
        &self.p2 - &self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    /// Angle in [0, π] between the two direction vectors.
    ///
    /// The cosine is clamped to [-1, 1], so (anti)parallel lines give exactly 0 or π.
    pub fn angle(&self, other: &Line) -> Result<f64> {
        check_dim(self.dim(), other.dim())?;
        let (v1, v2) = (self.vector(), other.vector());
        let (l1, l2) = (v1.length(), v2.length());
        if l1 == 0.0 || l2 == 0.0 {
            return Err(GeomError::ZeroLengthDirection);
        }
        Ok((v1.inner(&v2) / l1 / l2).clamp(-1.0, 1.0).acos())
    }

    /// `p1 + (p2 - p1) a`; no bounds check on `a`.
    #[inline]
    pub fn point_for_params(&self, a: f64) -> Point {
        &self.p1 + &(self.vector() * a)
    }

    /// Axis-only inverse of `point_for_params` for points on the line.
    ///
    /// Divides the x difference by the x direction, or the y difference when
    /// the x direction is exactly zero. `None` when both are zero (or the line
    /// has no such coordinate). Not a projection: off-line points give the
    /// parameter of their x (or y) coordinate only. See `projection_params`.
    pub fn params_for_point(&self, pt: &Point) -> Option<f64> {
        let v = self.vector();
        let u = pt.try_sub(&self.p1).ok()?;
        [0, 1]
            .into_iter()
            .find_map(|i| match v.get(i) {
                Some(d) if d != 0.0 => Some(u[i] / d),
                _ => None,
            })
    }

    /// Parameter of the orthogonal projection of `pt` onto the carrier line;
    /// `None` when `p1 == p2`.
    pub fn projection_params(&self, pt: &Point) -> Option<f64> {
        let p = pt.try_sub(&self.p1).ok()?;
        let q = self.vector();
        if q.is_zero() {
            return None;
        }
        Some(p.inner(&q) / q.inner(&q))
    }

    /// Foot of the perpendicular from `pt` onto the carrier line.
    pub fn project(&self, pt: &Point) -> Option<Point> {
        self.projection_params(pt).map(|a| self.point_for_params(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn params_round_trip_2d() {
        let l1 = Line::new(point![1, 1], point![1, 2]).unwrap();
        let p1 = point![1, 3];
        let a1 = l1.params_for_point(&p1).unwrap();
        assert_eq!(l1.point_for_params(a1), p1);

        let l2 = Line::new(point![1, 1], point![3, 2]).unwrap();
        let p2 = point![5, 3];
        let a2 = l2.params_for_point(&p2).unwrap();
        assert_eq!(l2.point_for_params(a2), p2);
    }

    #[test]
    fn params_undefined_for_degenerate_direction() {
        let l = Line::new(point![2, 2], point![2, 2]).unwrap();
        assert_eq!(l.params_for_point(&point![3, 3]), None);
        assert_eq!(l.projection_params(&point![3, 3]), None);
    }

    #[test]
    fn projection_onto_line() {
        let l = Line::new(point![1, 1], point![3, 2]).unwrap();
        let a = l.projection_params(&point![3, 3]).unwrap();
        let p = l.point_for_params(a);
        assert!(p.distance(&point![3.4, 2.2]) < 1e-12);
        // residual is orthogonal to the direction
        assert!((&point![3, 3] - &p).inner(&l.vector()).abs() < 1e-12);
    }

    #[test]
    fn extrapolation_is_allowed() {
        let l = Line::new(point![0, 0, 0], point![1, 2, 3]).unwrap();
        assert_eq!(l.point_for_params(-2.0), [-2.0, -4.0, -6.0]);
        assert_eq!(l.point_for_params(0.0), l.p1);
        assert_eq!(l.point_for_params(1.0), l.p2);
    }

    #[test]
    fn angles_between_lines() {
        let x = Line::new(point![0, 0], point![2, 0]).unwrap();
        let y = Line::new(point![1, 1], point![1, 5]).unwrap();
        let d = Line::new(point![0, 0], point![1, 1]).unwrap();
        assert!((x.angle(&y).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((x.angle(&d).unwrap() - FRAC_PI_4).abs() < 1e-12);
        let back = Line::new(point![0, 0], point![-3, 0]).unwrap();
        assert_eq!(x.angle(&back).unwrap(), PI);
        assert_eq!(x.angle(&x).unwrap(), 0.0);
    }

    #[test]
    fn angle_with_zero_direction_fails() {
        let x = Line::new(point![0, 0], point![2, 0]).unwrap();
        let z = Line::new(point![1, 1], point![1, 1]).unwrap();
        assert_eq!(x.angle(&z), Err(GeomError::ZeroLengthDirection));
    }

    #[test]
    fn mismatched_endpoints_rejected() {
        assert_eq!(
            Line::new(point![0, 0], point![1, 1, 1]),
            Err(GeomError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn length_and_vector() {
        let l = Line::new([1.0, 2.0, 2.0], [4.0, 6.0, 2.0]).unwrap();
        assert_eq!(l.vector(), [3.0, 4.0, 0.0]);
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.dim(), 3);
    }
}
