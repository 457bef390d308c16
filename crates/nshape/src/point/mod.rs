//! Arbitrary-dimension points (vectors) over `f64`.
//!
//! Purpose
//! - One value type, `Point`, used for positions and directions alike.
//! - Every other module (lines, planes, polar forms, shapes, camera) is a
//!   consumer of this one.
//!
//! Conventions
//! - Dimension is fixed at construction and equals the number of coordinates.
//! - Binary operators (`+`, `-`) and `inner`/`distance` require equal
//!   dimensions and panic otherwise. Use `try_add`, `try_sub`, `try_inner`,
//!   `try_distance` when the operands come from untrusted input.
//! - `p / s` follows IEEE semantics (`s == 0` yields infinities or NaN);
//!   `checked_div` reports `DivisionByZero` instead.
//! - Equality is exact and element-wise; points of different dimension are
//!   never equal. Raw arrays, slices and `Vec`s compare directly.
//! - Named accessors `x, y, z, w` are views onto coordinates 0..4 and fail
//!   with `NoSuchCoordinate` beyond the dimension, as does `coord(i)`.

mod ops;

use std::fmt;
use std::ops::Index;

use nalgebra::DVector;

use crate::error::{check_dim, GeomError, Result};
use crate::polar::{self, NSpherical};

/// Build a `Point` from coordinate expressions; integer literals are accepted.
///
/// ```
/// use nshape::point;
/// let p = point![3, -3, 1];
/// assert_eq!(p.dim(), 3);
/// ```
#[macro_export]
macro_rules! point {
    ($($x:expr),* $(,)?) => {
        $crate::Point::from_vec(vec![$(($x) as f64),*])
    };
}

/// Point (or vector) in R^n.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coord: DVector<f64>,
}

impl Point {
    #[inline]
    pub fn from_vec(coord: Vec<f64>) -> Self {
        Self {
            coord: DVector::from_vec(coord),
        }
    }

    #[inline]
    pub fn from_slice(coord: &[f64]) -> Self {
        Self {
            coord: DVector::from_column_slice(coord),
        }
    }

    /// Origin of R^dim.
    #[inline]
    pub fn zeros(dim: usize) -> Self {
        Self {
            coord: DVector::zeros(dim),
        }
    }

    /// Point with every coordinate equal to `value`.
    #[inline]
    pub fn splat(dim: usize, value: f64) -> Self {
        Self {
            coord: DVector::from_element(dim, value),
        }
    }

    /// Cartesian point for the n-spherical form `(r, phi_1, .., phi_m)`; m angles give m+1 coordinates.
    pub fn from_n_spherical(r: f64, phi: &[f64]) -> Result<Self> {
        polar::from_n_spherical(r, phi)
    }

    pub fn to_n_spherical(&self) -> Result<NSpherical> {
        polar::to_n_spherical(self)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.coord.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.coord.as_slice()
    }

    #[inline]
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.coord
    }

    #[inline]
    pub fn into_vector(self) -> DVector<f64> {
        self.coord
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coord.iter().copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.coord.get(index).copied()
    }

    /// Coordinate `index` (the `x0, x1, ..` view).
    pub fn coord(&self, index: usize) -> Result<f64> {
        self.get(index).ok_or(GeomError::NoSuchCoordinate {
            index,
            dim: self.dim(),
        })
    }

    #[inline]
    pub fn x(&self) -> Result<f64> {
        self.coord(0)
    }
    #[inline]
    pub fn y(&self) -> Result<f64> {
        self.coord(1)
    }
    #[inline]
    pub fn z(&self) -> Result<f64> {
        self.coord(2)
    }
    #[inline]
    pub fn w(&self) -> Result<f64> {
        self.coord(3)
    }

    /// Replace all coordinates (and possibly the dimension) with those of `other`.
    pub fn set(&mut self, other: impl Into<Point>) {
        self.coord = other.into().coord;
    }

    /// True iff every coordinate is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coord.iter().all(|&x| x == 0.0)
    }

    /// Inner product. Panics on dimension mismatch.
    #[inline]
    pub fn inner(&self, rhs: &Point) -> f64 {
        ops::assert_same_dim(self.dim(), rhs.dim());
        self.coord.dot(&rhs.coord)
    }

    /// Euclidean norm, `sqrt(inner(self, self))`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.inner(self).sqrt()
    }

    /// Euclidean distance. Panics on dimension mismatch.
    #[inline]
    pub fn distance(&self, rhs: &Point) -> f64 {
        (self - rhs).length()
    }

    /// 3-D cross product `self × rhs`.
    pub fn cross(&self, rhs: &Point) -> Result<Point> {
        check_dim(self.dim(), rhs.dim())?;
        if self.dim() != 3 {
            return Err(GeomError::CrossProductDimension { dim: self.dim() });
        }
        let (u, v) = (self.as_slice(), rhs.as_slice());
        Ok(Point::from_vec(vec![
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    pub fn try_add(&self, rhs: &Point) -> Result<Point> {
        check_dim(self.dim(), rhs.dim())?;
        Ok(self + rhs)
    }

    pub fn try_sub(&self, rhs: &Point) -> Result<Point> {
        check_dim(self.dim(), rhs.dim())?;
        Ok(self - rhs)
    }

    pub fn try_inner(&self, rhs: &Point) -> Result<f64> {
        check_dim(self.dim(), rhs.dim())?;
        Ok(self.inner(rhs))
    }

    pub fn try_distance(&self, rhs: &Point) -> Result<f64> {
        check_dim(self.dim(), rhs.dim())?;
        Ok(self.distance(rhs))
    }

    /// `self / s`, failing on an exact zero divisor.
    pub fn checked_div(&self, s: f64) -> Result<Point> {
        if s == 0.0 {
            return Err(GeomError::DivisionByZero);
        }
        Ok(self / s)
    }
}

impl Index<usize> for Point {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.coord[index]
    }
}

impl AsRef<[f64]> for Point {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl From<Vec<f64>> for Point {
    #[inline]
    fn from(v: Vec<f64>) -> Self {
        Point::from_vec(v)
    }
}

impl From<&[f64]> for Point {
    #[inline]
    fn from(v: &[f64]) -> Self {
        Point::from_slice(v)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    #[inline]
    fn from(v: [f64; N]) -> Self {
        Point::from_slice(&v)
    }
}

impl From<DVector<f64>> for Point {
    #[inline]
    fn from(coord: DVector<f64>) -> Self {
        Self { coord }
    }
}

impl From<&Point> for Point {
    #[inline]
    fn from(p: &Point) -> Self {
        p.clone()
    }
}

/// Consumes the iterator eagerly; the point keeps no reference to it.
impl FromIterator<f64> for Point {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Point::from_vec(iter.into_iter().collect())
    }
}

impl PartialEq<[f64]> for Point {
    fn eq(&self, other: &[f64]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Point {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<f64>> for Point {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{x:.1}")?;
        }
        write!(f, ")")
    }
}
