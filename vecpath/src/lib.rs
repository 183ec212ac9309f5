//! Vector path geometry engine.
//!
//! Paths are sequences of typed segments (`M L C Q A Z`). The crate covers
//! Bezier math, SVG path-data encoding, shape generators, flattening, an
//! approximate boolean engine and a pen-tool authoring session. Everything
//! here is synchronous and free of I/O; only path identity is
//! nondeterministic.

pub mod error;
pub mod model;
pub mod network;
pub mod session;
pub mod shapes;
pub mod geometry {
    pub mod arc;
    pub mod bezier;
    pub mod bounds;
    pub mod flatten;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod boolean;
    pub mod hull;
    pub mod winding;
}
mod json;
mod svg;

pub use algorithms::boolean::{boolean_operation, boolean_operation_with, BoolOp};
pub use error::{Error, JsonError, NetworkError, ParseError, ParseErrorKind, SessionError, ShapeError};
pub use geometry::flatten::{path_to_contours, path_to_points, FlattenOptions};
pub use geometry::math::Point;
pub use model::{
    HandleMirroring, PathId, PathSegment, StrokeCap, VectorPath, VectorVertex, VertexId,
    WindingRule,
};
pub use network::{EdgeId, VectorEdge, VectorNetwork, VectorRegion};
pub use session::{AuthoringSession, HandleSide, SessionState};
pub use shapes::{ellipse, rectangle, regular_polygon, star, CornerRadii, EllipseArc};

/// Serialize a path as SVG path data (`M x y L x y ... Z`).
pub fn path_to_svg(path: &VectorPath) -> String {
    svg::path_to_svg_impl(path)
}

/// Parse absolute SVG path data into a new path.
pub fn svg_to_path(d: &str) -> Result<VectorPath, ParseError> {
    svg::svg_to_path_impl(d)
}

pub fn path_to_json_value(path: &VectorPath) -> serde_json::Value {
    json::path_to_json_impl(path)
}

pub fn path_from_json_value(v: serde_json::Value) -> Result<VectorPath, JsonError> {
    json::path_from_json_impl(v)
}

pub fn network_to_json_value(network: &VectorNetwork) -> serde_json::Value {
    json::network_to_json_impl(network)
}

pub fn network_from_json_value(v: serde_json::Value) -> Result<VectorNetwork, JsonError> {
    json::network_from_json_impl(v)
}

/// Hit test honoring the path's winding rule.
pub fn contains_point(path: &VectorPath, p: Point, resolution: f64) -> bool {
    algorithms::winding::path_contains(path, p, resolution)
}
