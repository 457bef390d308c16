//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants, same as the rest of the geometry code: no tolerance
//!   juggling at call sites. If a caller ever needs different values, these
//!   move behind a small config struct.

/// Determinant magnitude below which a normal-equation system counts as singular.
pub(crate) const SINGULAR_EPS: f64 = 1e-12;
/// Squared-norm threshold for "this cross product is zero" in line/plane classification.
pub(crate) const PARALLEL_EPS: f64 = 1e-12;
/// Brute-force edge detection: |distance - edge length| below this is an edge.
pub(crate) const EDGE_EPS: f64 = 1e-3;
/// Named-constant matching tolerance.
pub(crate) const NAME_EPS: f64 = 1e-5;
/// Pointer distance that hits a toggle.
pub(crate) const TOGGLE_RADIUS: f64 = 8.0;
/// Pointer distance that grabs a slider knob.
pub(crate) const SLIDER_GRAB_RADIUS: f64 = 5.0;
