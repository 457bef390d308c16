//! Error type shared by every fallible operation in the crate.
//!
//! Arithmetic operators never return these: a dimension mismatch inside `+`
//! or `-` is a usage error and panics. The `try_*` twins and all constructors
//! that validate caller input report through `GeomError`.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeomError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("no coordinate {index} in a {dim}-dimensional point")]
    NoSuchCoordinate { index: usize, dim: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("cross product is only defined in 3 dimensions, got {dim}")]
    CrossProductDimension { dim: usize },

    #[error("direction vector has zero length")]
    ZeroLengthDirection,

    #[error("{op} needs at least {needed} coordinates, got {found}")]
    TooFewCoordinates {
        op: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("{op}: linear system has no unique solution")]
    SingularSystem { op: &'static str },

    #[error("{op} is not implemented in {dim} dimensions")]
    Unsupported { op: &'static str, dim: usize },
}

pub type Result<T> = std::result::Result<T, GeomError>;

/// Fail with `DimensionMismatch` unless `found == expected`.
#[inline]
pub(crate) fn check_dim(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(GeomError::DimensionMismatch { expected, found })
    }
}
