use crate::error::JsonError;
use crate::geometry::limits;
use crate::geometry::math::Point;
use crate::model::{PathId, PathSegment, VectorPath, VectorVertex, WindingRule};
use crate::network::{VectorEdge, VectorNetwork, VectorRegion};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_VERSION: u32 = 1;

pub fn path_to_json_impl(path: &VectorPath) -> Value {
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        id: PathId,
        winding_rule: WindingRule,
        closed: bool,
        segments: &'a [PathSegment],
    }
    // Non-finite floats serialize as null, so this cannot fail
    serde_json::to_value(Doc {
        version: DOC_VERSION,
        id: path.id,
        winding_rule: path.winding_rule,
        closed: path.closed,
        segments: &path.segments,
    })
    .unwrap_or(Value::Null)
}

/// Import a path document. The stored id is ignored; the result is a new
/// path. `closed` is recomputed from the segments.
pub fn path_from_json_impl(v: Value) -> Result<VectorPath, JsonError> {
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u32>,
        winding_rule: Option<WindingRule>,
        segments: Vec<PathSegment>,
    }
    let doc: DocDe = serde_json::from_value(v)?;
    check_version(doc.version)?;
    if doc.segments.len() > limits::MAX_JSON_SEGMENTS {
        return Err(JsonError::CapExceeded {
            what: "segments",
            count: doc.segments.len(),
            max: limits::MAX_JSON_SEGMENTS,
        });
    }
    if let Some(first) = doc.segments.first() {
        if !matches!(first, PathSegment::MoveTo { .. }) {
            return Err(JsonError::MissingMoveTo);
        }
    }
    if let Some(i) = doc.segments.iter().position(|s| !segment_in_bounds(s)) {
        return Err(JsonError::BadCoordinate(i));
    }
    let closed = matches!(doc.segments.last(), Some(PathSegment::Close));
    Ok(VectorPath::build(doc.segments, closed, doc.winding_rule.unwrap_or_default()))
}

pub fn network_to_json_impl(network: &VectorNetwork) -> Value {
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        vertices: &'a [VectorVertex],
        edges: &'a [VectorEdge],
        regions: &'a [VectorRegion],
    }
    serde_json::to_value(Doc {
        version: DOC_VERSION,
        vertices: &network.vertices,
        edges: &network.edges,
        regions: &network.regions,
    })
    .unwrap_or(Value::Null)
}

pub fn network_from_json_impl(v: Value) -> Result<VectorNetwork, JsonError> {
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u32>,
        vertices: Vec<VectorVertex>,
        edges: Vec<VectorEdge>,
        #[serde(default)]
        regions: Vec<VectorRegion>,
    }
    let doc: DocDe = serde_json::from_value(v)?;
    check_version(doc.version)?;
    if doc.vertices.len() > limits::MAX_JSON_VERTICES {
        return Err(JsonError::CapExceeded {
            what: "vertices",
            count: doc.vertices.len(),
            max: limits::MAX_JSON_VERTICES,
        });
    }
    if doc.edges.len() > limits::MAX_JSON_EDGES {
        return Err(JsonError::CapExceeded {
            what: "edges",
            count: doc.edges.len(),
            max: limits::MAX_JSON_EDGES,
        });
    }
    for (i, v) in doc.vertices.iter().enumerate() {
        let handles_ok = [v.handle_in, v.handle_out].into_iter().flatten().all(point_in_bounds);
        if !point_in_bounds(v.position) || !handles_ok || !v.corner_radius.is_finite() {
            return Err(JsonError::BadCoordinate(i));
        }
    }
    let network = VectorNetwork { vertices: doc.vertices, edges: doc.edges, regions: doc.regions };
    network.validate()?;
    Ok(network)
}

fn check_version(version: Option<u32>) -> Result<(), JsonError> {
    match version {
        None | Some(DOC_VERSION) => Ok(()),
        Some(other) => Err(JsonError::Version(other)),
    }
}

fn point_in_bounds(p: Point) -> bool {
    limits::in_coord_bounds(p.x) && limits::in_coord_bounds(p.y)
}

fn segment_in_bounds(seg: &PathSegment) -> bool {
    let radii_ok = match *seg {
        PathSegment::ArcTo { rx, ry, .. } => limits::in_coord_bounds(rx) && limits::in_coord_bounds(ry),
        _ => true,
    };
    radii_ok && seg.is_finite() && seg.points().all(point_in_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_document_round_trip() {
        let path = crate::svg::svg_to_path_impl("M 0 0 C 1 2 3 4 5 6 A 2 2 0 0 1 9 6 Z").unwrap();
        let v = path_to_json_impl(&path);
        assert_eq!(v["version"], 1);
        assert_eq!(v["winding_rule"], "NON_ZERO");
        let back = path_from_json_impl(v).unwrap();
        assert_eq!(back.segments, path.segments);
        assert!(back.closed);
        assert_ne!(back.id, path.id);
    }

    #[test]
    fn rejects_bad_documents() {
        let no_move = json!({ "segments": [{ "command": "L", "to": { "x": 1.0, "y": 1.0 } }] });
        assert!(matches!(path_from_json_impl(no_move), Err(JsonError::MissingMoveTo)));

        let far = json!({ "segments": [
            { "command": "M", "to": { "x": 0.0, "y": 0.0 } },
            { "command": "L", "to": { "x": 1e9, "y": 0.0 } }
        ] });
        assert!(matches!(path_from_json_impl(far), Err(JsonError::BadCoordinate(1))));

        let future = json!({ "version": 7, "segments": [] });
        assert!(matches!(path_from_json_impl(future), Err(JsonError::Version(7))));

        assert!(matches!(path_from_json_impl(json!({ "segments": 3 })), Err(JsonError::Malformed(_))));
    }

    #[test]
    fn network_document_is_validated() {
        let doc = json!({
            "vertices": [],
            "edges": [{ "id": 0, "start": 0, "end": 1 }]
        });
        assert!(matches!(network_from_json_impl(doc), Err(JsonError::Network(_))));
    }
}
