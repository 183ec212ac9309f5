// Centralized tolerances and constants for path geometry

pub const EPS_POS: f64 = 1e-9;            // point coincidence threshold
pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold

// Control-point fraction that makes four cubics approximate a circle.
pub const KAPPA: f64 = 0.5522847498;

// Rectangle corners place their controls this fraction of the radius away
// from the corner point (1 - KAPPA, rounded).
pub const RECT_CORNER_FRACTION: f64 = 0.448;

// Default chord resolution for flattening, in path units.
pub const DEFAULT_RESOLUTION: f64 = 0.1;

/// Resolution actually used by the sampler: non-positive or non-finite
/// requests fall back to the default.
#[inline]
pub fn effective_resolution(resolution: f64) -> f64 {
    if resolution.is_finite() && resolution > 0.0 { resolution } else { DEFAULT_RESOLUTION }
}
