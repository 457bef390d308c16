//! Points, line segments and parallelograms in any number of dimensions.
//!
//! Layers
//! - `Point` (vector algebra), `line::Line`, `plane::Parallelogram`.
//! - `polar`: polar, spherical and n-spherical coordinates.
//! - `shapes`, `lattice`, `names`: regular polytopes, their face lattices,
//!   and closed-form names for their coordinates.
//! - `view`: headless camera and SVG output for 3-D scenes.
//!
//! Error Policy
//! - Operators panic on dimension mismatch; every fallible query returns
//!   `error::Result`. Undefined-but-expected answers are `Option`s.

mod cfg;
pub mod error;
pub mod lattice;
pub mod line;
pub mod names;
pub mod plane;
mod point;
pub mod polar;
pub mod sample;
pub mod shapes;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};
pub use line::Line;
pub use plane::{Intersection, Parallelogram};
pub use point::Point;
pub use shapes::{Shape, ShapeKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, Result};
    pub use crate::line::Line;
    pub use crate::names::{named_number, named_point};
    pub use crate::plane::{Intersection, Parallelogram, Primitive};
    pub use crate::polar::{
        from_n_spherical, from_polar, from_spherical, to_n_spherical, to_polar, to_spherical,
        NSpherical, Polar, Spherical,
    };
    pub use crate::shapes::{Shape, ShapeKind};
    pub use crate::Point;
}
