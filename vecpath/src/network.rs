//! Vector networks: vertices joined by edges, with filled regions.
//!
//! Curve shape lives on the vertices: an edge is a cubic when its start
//! vertex has an out-handle or its end vertex has an in-handle, and a
//! straight line otherwise. Regions list the edges of their closed loops.

use crate::error::NetworkError;
use crate::geometry::arc::EndpointArc;
use crate::geometry::bezier::QuadraticBezier;
use crate::geometry::math::Point;
use crate::model::{PathSegment, VectorPath, VectorVertex, VertexId, WindingRule};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u32);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorEdge {
    pub id: EdgeId,
    pub start: VertexId,
    pub end: VertexId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorRegion {
    pub edge_ids: Vec<EdgeId>,
    pub winding_rule: WindingRule,
    pub fill_index: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorNetwork {
    pub vertices: Vec<VectorVertex>,
    pub edges: Vec<VectorEdge>,
    #[serde(default)]
    pub regions: Vec<VectorRegion>,
}

impl VectorNetwork {
    /// Build a network from path segments.
    ///
    /// Quadratics are elevated and arcs split into cubic pieces, so every
    /// edge is a line or a cubic. All closed subpaths go into one region
    /// carrying the path's winding rule. When a subpath ends on its own
    /// start point before `Z`, the final vertex is merged into the start.
    pub fn from_path(path: &VectorPath) -> VectorNetwork {
        let mut b = Builder::default();
        for seg in &path.segments {
            match *seg {
                PathSegment::MoveTo { to } => b.move_to(to),
                PathSegment::LineTo { to } => b.line_to(to),
                PathSegment::CubicTo { ctrl1, ctrl2, to } => b.cubic_to(ctrl1, ctrl2, to),
                PathSegment::QuadTo { ctrl, to } => {
                    let from = b.current_position().unwrap_or(ctrl);
                    let c = QuadraticBezier::new(from, ctrl, to).to_cubic();
                    b.cubic_to(c.p1, c.p2, to);
                }
                PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, to } => {
                    let from = b.current_position().unwrap_or(to);
                    let arc = EndpointArc { from, to, rx, ry, x_axis_rotation, large_arc, sweep };
                    match arc.to_center() {
                        Some(c) => {
                            let pieces = c.to_cubics();
                            let last = pieces.len().saturating_sub(1);
                            for (i, cubic) in pieces.iter().enumerate() {
                                let end = if i == last { to } else { cubic.p3 };
                                b.cubic_to(cubic.p1, cubic.p2, end);
                            }
                        }
                        // Zero radius draws a line; coincident ends draw nothing
                        None if from != to => b.line_to(to),
                        None => {}
                    }
                }
                PathSegment::Close => b.close(),
            }
        }
        let mut net = b.net;
        if !b.loops.is_empty() {
            net.regions.push(VectorRegion {
                edge_ids: b.loops,
                winding_rule: path.winding_rule,
                fill_index: 0,
            });
        }
        log::debug!(
            "network from {}: {} vertices, {} edges, {} regions",
            path.id,
            net.vertices.len(),
            net.edges.len(),
            net.regions.len()
        );
        net
    }

    /// Check that every edge and region reference resolves.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let vertex_ids: HashSet<VertexId> = self.vertices.iter().map(|v| v.id).collect();
        for e in &self.edges {
            for v in [e.start, e.end] {
                if !vertex_ids.contains(&v) {
                    return Err(NetworkError::DanglingVertex { edge: e.id.0, vertex: v.0 });
                }
            }
        }
        let edge_ids: HashSet<EdgeId> = self.edges.iter().map(|e| e.id).collect();
        for (i, r) in self.regions.iter().enumerate() {
            if let Some(missing) = r.edge_ids.iter().find(|id| !edge_ids.contains(id)) {
                return Err(NetworkError::DanglingEdge { region: i, edge: missing.0 });
            }
        }
        Ok(())
    }

    /// Rebuild `M L C Z` segments, walking edges in order.
    ///
    /// A new subpath starts wherever an edge does not continue from the
    /// previous one. A region edge returning to its loop's start closes the
    /// subpath: straight ones become a bare `Z`, curved ones `C` then `Z`.
    pub fn to_path(&self) -> Result<VectorPath, NetworkError> {
        self.validate()?;
        let vertices: HashMap<VertexId, &VectorVertex> = self.vertices.iter().map(|v| (v.id, v)).collect();
        let region_edges: HashSet<EdgeId> = self.regions.iter().flat_map(|r| r.edge_ids.iter().copied()).collect();
        let winding_rule = self.regions.first().map(|r| r.winding_rule).unwrap_or_default();

        let mut segments = Vec::with_capacity(self.edges.len() + 1);
        let mut current: Option<VertexId> = None;
        let mut loop_start = VertexId(0);
        for e in &self.edges {
            let (Some(&start), Some(&end)) = (vertices.get(&e.start), vertices.get(&e.end)) else {
                continue;
            };
            if current != Some(e.start) {
                segments.push(PathSegment::MoveTo { to: start.position });
                loop_start = e.start;
            }
            let straight = start.handle_out.is_none() && end.handle_in.is_none();
            let closing = e.end == loop_start && region_edges.contains(&e.id);
            if !(straight && closing) {
                segments.push(edge_segment(start, end));
            }
            if closing {
                segments.push(PathSegment::Close);
            }
            current = Some(e.end);
        }
        let closed = matches!(segments.last(), Some(PathSegment::Close));
        Ok(VectorPath::build(segments, closed, winding_rule))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&VectorVertex> {
        self.vertices.iter().find(|v| v.id == id)
    }
}

fn edge_segment(start: &VectorVertex, end: &VectorVertex) -> PathSegment {
    if start.handle_out.is_none() && end.handle_in.is_none() {
        PathSegment::LineTo { to: end.position }
    } else {
        PathSegment::CubicTo {
            ctrl1: start.handle_out.unwrap_or(start.position),
            ctrl2: end.handle_in.unwrap_or(end.position),
            to: end.position,
        }
    }
}

#[derive(Default)]
struct Builder {
    net: VectorNetwork,
    current: Option<VertexId>,
    subpath_start: Option<VertexId>,
    subpath_edges: Vec<EdgeId>,
    loops: Vec<EdgeId>,
}

impl Builder {
    fn current_position(&self) -> Option<Point> {
        self.current.map(|id| self.net.vertices[id.0 as usize].position)
    }

    fn add_vertex(&mut self, p: Point) -> VertexId {
        let id = VertexId(self.net.vertices.len() as u32);
        self.net.vertices.push(VectorVertex::corner(id, p));
        id
    }

    fn add_edge(&mut self, start: VertexId, end: VertexId) -> EdgeId {
        let id = EdgeId(self.net.edges.len() as u32);
        self.net.edges.push(VectorEdge { id, start, end });
        self.subpath_edges.push(id);
        id
    }

    fn move_to(&mut self, p: Point) {
        let id = self.add_vertex(p);
        self.current = Some(id);
        self.subpath_start = Some(id);
        self.subpath_edges.clear();
    }

    /// Ensure there is a current vertex, starting a subpath at `p` if not.
    fn from_vertex(&mut self, p: Point) -> VertexId {
        match self.current {
            Some(id) => id,
            None => {
                self.move_to(p);
                VertexId(self.net.vertices.len() as u32 - 1)
            }
        }
    }

    fn line_to(&mut self, p: Point) {
        let from = self.from_vertex(p);
        let to = self.add_vertex(p);
        self.add_edge(from, to);
        self.current = Some(to);
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, p: Point) {
        let from = self.from_vertex(ctrl1);
        self.net.vertices[from.0 as usize].handle_out = Some(ctrl1);
        let to = self.add_vertex(p);
        self.net.vertices[to.0 as usize].handle_in = Some(ctrl2);
        self.add_edge(from, to);
        self.current = Some(to);
    }

    fn close(&mut self) {
        let (Some(start), Some(cur)) = (self.subpath_start, self.current) else {
            return;
        };
        if cur != start {
            let start_pos = self.net.vertices[start.0 as usize].position;
            let last = self.net.vertices.len() - 1;
            let mergeable = cur.0 as usize == last
                && self.net.vertices[last].position == start_pos
                && self.net.edges.last().map(|e| e.end) == Some(cur);
            if mergeable {
                let handle_in = self.net.vertices.pop().and_then(|v| v.handle_in);
                self.net.vertices[start.0 as usize].handle_in = handle_in;
                if let Some(e) = self.net.edges.last_mut() {
                    e.end = start;
                }
            } else {
                self.add_edge(cur, start);
            }
        }
        self.loops.append(&mut self.subpath_edges);
        self.current = Some(start);
    }
}
