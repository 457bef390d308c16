//! Cartesian ↔ polar, spherical and n-spherical coordinates.
//!
//! Forms
//! - 2-D polar: `(r, phi)`, `phi = atan2(y, x) ∈ (-π, π]`.
//! - 3-D spherical: `(r, theta, phi)` with inclination `theta = acos(z/r)`
//!   and azimuth `phi = atan2(y, x)`; all zero at the origin.
//! - n-spherical: `(r, phi_1, .., phi_{n-1})` for an n-point:
//!
//! ```text
//! x_1     = r cos(phi_1)
//! x_2     = r sin(phi_1) cos(phi_2)
//! ...
//! x_{n-1} = r sin(phi_1) .. sin(phi_{n-2}) cos(phi_{n-1})
//! x_n     = r sin(phi_1) .. sin(phi_{n-2}) sin(phi_{n-1})
//! ```
//!
//!   `phi_1 .. phi_{n-2} ∈ [0, π]` come from `acos(x_i / r_i)` where `r_i` is
//!   the norm of `(x_i, .., x_n)` (angle 0 when `r_i == 0`); the last angle is
//!   `atan2(x_n, x_{n-1})`. m angles always produce m+1 coordinates; the
//!   single-angle case is exactly 2-D polar.
//!
//! Spherical vs n-spherical
//! - The 3-D spherical convention measures inclination from z and azimuth
//!   from x, while the n-spherical recursion starts at x_1. They agree after
//!   swapping the point to `(z, y, x)` and replacing the last angle `a` by
//!   `π/2 - a`. `swap_zyx` and `n_spherical_to_spherical` perform the two
//!   halves of that mapping.
//!
//! References
//! - https://en.wikipedia.org/wiki/Polar_coordinate_system
//! - https://en.wikipedia.org/wiki/Spherical_coordinate_system
//! - https://en.wikipedia.org/wiki/N-sphere#Spherical_coordinates

use std::f64::consts::FRAC_PI_2;

use crate::error::{check_dim, GeomError, Result};
use crate::point::Point;

/// 2-D polar coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub r: f64,
    pub phi: f64,
}

/// 3-D spherical coordinates (inclination `theta`, azimuth `phi`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

/// n-spherical coordinates: radius plus `n - 1` angles.
#[derive(Clone, Debug, PartialEq)]
pub struct NSpherical {
    pub r: f64,
    pub angles: Vec<f64>,
}

impl NSpherical {
    #[inline]
    pub fn new(r: f64, angles: Vec<f64>) -> Self {
        Self { r, angles }
    }

    /// Dimension of the Cartesian point this form describes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.angles.len() + 1
    }

    pub fn to_point(&self) -> Result<Point> {
        from_n_spherical(self.r, &self.angles)
    }

    /// Flat `(r, phi_1, ..)` tuple.
    pub fn to_vec(&self) -> Vec<f64> {
        std::iter::once(self.r)
            .chain(self.angles.iter().copied())
            .collect()
    }
}

impl Polar {
    pub fn to_point(&self) -> Point {
        from_polar(self.r, self.phi)
    }
}

impl Spherical {
    pub fn to_point(&self) -> Point {
        from_spherical(self.r, self.theta, self.phi)
    }
}

/// Norm as `sqrt(Σ x²)`, summed front to back. Both the polar and the
/// n-spherical paths use this so that they agree bit for bit in 2-D.
#[inline]
fn radius(xs: &[f64]) -> f64 {
    xs.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// `acos` with the argument clamped to [-1, 1] against rounding overshoot.
#[inline]
fn acos_clamped(c: f64) -> f64 {
    c.clamp(-1.0, 1.0).acos()
}

pub fn from_polar(r: f64, phi: f64) -> Point {
    Point::from_vec(vec![r * phi.cos(), r * phi.sin()])
}

pub fn to_polar(p: impl AsRef<[f64]>) -> Result<Polar> {
    let xs = p.as_ref();
    check_dim(2, xs.len())?;
    Ok(Polar {
        r: radius(xs),
        phi: xs[1].atan2(xs[0]),
    })
}

pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Point {
    Point::from_vec(vec![
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    ])
}

/// Spherical form of a 3-D point; the origin maps to `(0, 0, 0)`.
pub fn to_spherical(p: impl AsRef<[f64]>) -> Result<Spherical> {
    let xs = p.as_ref();
    check_dim(3, xs.len())?;
    let r = radius(xs);
    if r == 0.0 {
        return Ok(Spherical {
            r: 0.0,
            theta: 0.0,
            phi: 0.0,
        });
    }
    Ok(Spherical {
        r,
        theta: acos_clamped(xs[2] / r),
        phi: xs[1].atan2(xs[0]),
    })
}

/// Cartesian point for `(r, phi_1, .., phi_m)`, built outward from the first angle.
pub fn from_n_spherical(r: f64, phi: &[f64]) -> Result<Point> {
    if phi.is_empty() {
        return Err(GeomError::TooFewCoordinates {
            op: "from_n_spherical",
            needed: 1,
            found: 0,
        });
    }
    let mut coord = Vec::with_capacity(phi.len() + 1);
    let mut scale = r;
    for a in phi {
        coord.push(scale * a.cos());
        scale *= a.sin();
    }
    coord.push(scale);
    Ok(Point::from_vec(coord))
}

pub fn to_n_spherical(p: impl AsRef<[f64]>) -> Result<NSpherical> {
    let xs = p.as_ref();
    let n = xs.len();
    if n < 2 {
        return Err(GeomError::TooFewCoordinates {
            op: "to_n_spherical",
            needed: 2,
            found: n,
        });
    }
    let mut angles = Vec::with_capacity(n - 1);
    for i in 0..n - 2 {
        let sub = radius(&xs[i..]);
        angles.push(if sub == 0.0 {
            0.0
        } else {
            acos_clamped(xs[i] / sub)
        });
    }
    angles.push(xs[n - 1].atan2(xs[n - 2]));
    Ok(NSpherical {
        r: radius(xs),
        angles,
    })
}

/// `(x, y, z) -> (z, y, x)`.
pub fn swap_zyx(p: impl AsRef<[f64]>) -> Result<Point> {
    let xs = p.as_ref();
    check_dim(3, xs.len())?;
    Ok(Point::from_vec(vec![xs[2], xs[1], xs[0]]))
}

/// Read the n-spherical form of a `swap_zyx`-ed point as conventional spherical coordinates.
pub fn n_spherical_to_spherical(ns: &NSpherical) -> Result<Spherical> {
    check_dim(3, ns.dim())?;
    Ok(Spherical {
        r: ns.r,
        theta: ns.angles[0],
        phi: FRAC_PI_2 - ns.angles[1],
    })
}

/// Inverse of `n_spherical_to_spherical`.
pub fn spherical_to_n_spherical(sp: &Spherical) -> NSpherical {
    NSpherical {
        r: sp.r,
        angles: vec![sp.theta, FRAC_PI_2 - sp.phi],
    }
}

/// Symbolic form of `from_n_spherical` with `angles` angles (at least one).
///
/// Angles are named from the outside in: the first coordinate uses
/// `p{m-1}`, the last factor of the last coordinate is `sin(p0)`.
pub fn n_spherical_formula(unit_radius: bool, angles: usize) -> Vec<String> {
    let m = angles.max(1);
    let prefix = if unit_radius { "" } else { "r*" };
    (0..=m)
        .map(|k| {
            let mut factors: Vec<String> = (0..k)
                .map(|j| format!("sin(p{})", m - 1 - j))
                .collect();
            if k < m {
                factors.push(format!("cos(p{})", m - 1 - k));
            }
            format!("{prefix}{}", factors.join("*"))
        })
        .collect()
}
