// Centralized ingestion limits to harden against untrusted input (JSON/SVG)

// SVG caps
pub const MAX_SVG_LEN: usize = 8 * 1024 * 1024; // characters in the 'd' string
pub const MAX_SVG_COMMANDS: usize = 500_000;    // including implicit repeats

// JSON caps
pub const MAX_JSON_SEGMENTS: usize = 500_000;
pub const MAX_JSON_VERTICES: usize = 200_000;
pub const MAX_JSON_EDGES: usize = 300_000;

// Flattening budget: total sampled points across both boolean operands
pub const DEFAULT_MAX_POINTS: usize = 200_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x) }
