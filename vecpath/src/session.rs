//! Pen-tool authoring session.
//!
//! A session is owned by one editing tool and mutated through `&mut self`;
//! share it across threads only behind an external lock. Vertices live in a
//! tombstoned arena (`Vec<Option<_>>`, id is index), so ids stay stable when
//! a vertex is deleted.
//!
//! The in-progress path is derived from the live vertices in arena order.
//! Between consecutive vertices the segment is a cubic when the earlier one
//! has an out-handle or the later one has an in-handle (a missing control
//! falls back to the anchor), and a line otherwise.

use crate::error::SessionError;
use crate::geometry::math::Point;
use crate::model::{
    HandleMirroring, PathId, PathSegment, VectorPath, VectorVertex, VertexId, WindingRule,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Drawing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleSide {
    In,
    Out,
}

#[derive(Clone, Debug)]
pub struct AuthoringSession {
    vertices: Vec<Option<VectorVertex>>, // id is index
    state: SessionState,
    path_id: PathId,
}

impl Default for AuthoringSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthoringSession {
    pub fn new() -> Self {
        Self { vertices: Vec::new(), state: SessionState::Idle, path_id: PathId::fresh() }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == SessionState::Drawing
    }

    pub fn vertex(&self, id: VertexId) -> Option<&VectorVertex> {
        self.vertices.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Live vertices in path order.
    pub fn vertices(&self) -> impl Iterator<Item = &VectorVertex> {
        self.vertices.iter().flatten()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VectorVertex, SessionError> {
        self.vertices
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(SessionError::VertexNotFound(id))
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.state = SessionState::Idle;
        self.path_id = PathId::fresh();
    }

    /// Begin a new path at `point`. A path already in progress is abandoned.
    pub fn start_path(&mut self, point: Point) -> VertexId {
        if self.is_drawing() {
            log::debug!("start_path: abandoning {} with {} vertices", self.path_id, self.vertex_count());
            self.reset();
        }
        self.state = SessionState::Drawing;
        let id = VertexId(0);
        self.vertices.push(Some(VectorVertex::corner(id, point)));
        id
    }

    /// Append a vertex. With `handle_out`, the in-handle is its reflection
    /// through `point` and the handles are mirrored in angle and length.
    pub fn add_vertex(&mut self, point: Point, handle_out: Option<Point>) -> Result<VertexId, SessionError> {
        if !self.is_drawing() {
            return Err(SessionError::NotDrawing);
        }
        let id = VertexId(self.vertices.len() as u32);
        let mut v = VectorVertex::corner(id, point);
        if let Some(h) = handle_out {
            v.handle_out = Some(h);
            v.handle_in = Some(h.reflect_through(point));
            v.handle_mirroring = HandleMirroring::AngleAndLength;
        }
        self.vertices.push(Some(v));
        Ok(id)
    }

    fn segments(&self) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        let mut prev: Option<&VectorVertex> = None;
        for v in self.vertices() {
            segments.push(match prev {
                None => PathSegment::MoveTo { to: v.position },
                Some(p) if p.handle_out.is_some() || v.handle_in.is_some() => PathSegment::CubicTo {
                    ctrl1: p.handle_out.unwrap_or(p.position),
                    ctrl2: v.handle_in.unwrap_or(v.position),
                    to: v.position,
                },
                Some(_) => PathSegment::LineTo { to: v.position },
            });
            prev = Some(v);
        }
        segments
    }

    /// Open preview of the path in progress; empty while idle.
    pub fn current_path(&self) -> VectorPath {
        VectorPath {
            id: self.path_id,
            segments: self.segments(),
            closed: false,
            winding_rule: WindingRule::NonZero,
        }
    }

    /// Close and return the finished path, returning to idle.
    ///
    /// With fewer than two vertices nothing happens: the current (possibly
    /// empty) path is returned and the state is unchanged.
    pub fn close_path(&mut self) -> VectorPath {
        if self.vertex_count() < 2 {
            return self.current_path();
        }
        let mut path = self.current_path();
        path.segments.push(PathSegment::Close);
        path.closed = true;
        self.reset();
        path
    }

    pub fn cancel_path(&mut self) {
        self.reset();
    }

    /// Move a vertex; its handles travel with it.
    pub fn move_vertex(&mut self, id: VertexId, pos: Point) -> Result<(), SessionError> {
        let v = self.vertex_mut(id)?;
        let delta = pos - v.position;
        v.position = pos;
        v.handle_in = v.handle_in.map(|h| h + delta);
        v.handle_out = v.handle_out.map(|h| h + delta);
        Ok(())
    }

    /// Move one handle and update the opposite one per the vertex's
    /// mirroring mode.
    pub fn move_handle(&mut self, id: VertexId, side: HandleSide, pos: Point) -> Result<(), SessionError> {
        let v = self.vertex_mut(id)?;
        let anchor = v.position;
        let (moved, opposite) = match side {
            HandleSide::In => (&mut v.handle_in, &mut v.handle_out),
            HandleSide::Out => (&mut v.handle_out, &mut v.handle_in),
        };
        *moved = Some(pos);
        match v.handle_mirroring {
            HandleMirroring::AngleAndLength => *opposite = Some(pos.reflect_through(anchor)),
            HandleMirroring::Angle => {
                let dir = (anchor - pos).normalize();
                if let Some(o) = opposite.as_mut() {
                    if dir != Point::ORIGIN {
                        *o = anchor + dir * o.distance(anchor);
                    }
                }
            }
            HandleMirroring::None => {}
        }
        Ok(())
    }

    /// Switch the mirroring mode and bring the handles in line with it.
    ///
    /// `AngleAndLength` reflects the in-handle (or the out-handle when it is
    /// the only one) through the vertex. `Angle` turns the in-handle to face
    /// away from the out-handle and keeps its length.
    pub fn set_mirroring(&mut self, id: VertexId, mode: HandleMirroring) -> Result<(), SessionError> {
        let v = self.vertex_mut(id)?;
        v.handle_mirroring = mode;
        let anchor = v.position;
        match mode {
            HandleMirroring::AngleAndLength => match (v.handle_in, v.handle_out) {
                (Some(h), _) => v.handle_out = Some(h.reflect_through(anchor)),
                (None, Some(h)) => v.handle_in = Some(h.reflect_through(anchor)),
                (None, None) => {}
            },
            HandleMirroring::Angle => {
                if let (Some(h_in), Some(h_out)) = (v.handle_in, v.handle_out) {
                    let dir = (anchor - h_out).normalize();
                    if dir != Point::ORIGIN {
                        v.handle_in = Some(anchor + dir * h_in.distance(anchor));
                    }
                }
            }
            HandleMirroring::None => {}
        }
        Ok(())
    }

    pub fn convert_to_corner(&mut self, id: VertexId) -> Result<(), SessionError> {
        let v = self.vertex_mut(id)?;
        v.handle_in = None;
        v.handle_out = None;
        v.handle_mirroring = HandleMirroring::None;
        Ok(())
    }

    /// Give the vertex symmetric handles of `±¼·(next − previous)`.
    ///
    /// Returns `Ok(false)` without changes at either end of the path. The
    /// handles do not depend on any earlier ones, so a corner/smooth round
    /// trip does not restore authored handles.
    pub fn convert_to_smooth(&mut self, id: VertexId) -> Result<bool, SessionError> {
        let idx = id.0 as usize;
        if self.vertex(id).is_none() {
            return Err(SessionError::VertexNotFound(id));
        }
        let prev = self.vertices[..idx].iter().rev().flatten().next().map(|v| v.position);
        let next = self.vertices[idx + 1..].iter().flatten().next().map(|v| v.position);
        let (Some(prev), Some(next)) = (prev, next) else {
            return Ok(false);
        };
        let v = self.vertex_mut(id)?;
        let tangent = (next - prev) * 0.25;
        v.handle_in = Some(v.position - tangent);
        v.handle_out = Some(v.position + tangent);
        v.handle_mirroring = HandleMirroring::AngleAndLength;
        Ok(true)
    }

    /// Remove a vertex. Neighbours are joined directly with no repair of
    /// their handles.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<(), SessionError> {
        self.vertex_mut(id)?;
        self.vertices[id.0 as usize] = None;
        Ok(())
    }
}
