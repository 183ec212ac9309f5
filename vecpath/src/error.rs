//! Error types for vecpath.
//!
//! Every error is local to the call that produced it. The boolean engine
//! never fails; degenerate input yields an empty path instead.

use crate::model::VertexId;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Lowercase (relative) command letters are not supported.
    RelativeCommand,
    UnknownCommand,
    InvalidNumber,
    MissingArguments,
    MissingMoveTo,
    OutOfBounds,
    TooLong,
    TooManyCommands,
}

impl ParseErrorKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ParseErrorKind::RelativeCommand => "relative commands are not supported",
            ParseErrorKind::UnknownCommand => "unknown command",
            ParseErrorKind::InvalidNumber => "invalid number",
            ParseErrorKind::MissingArguments => "missing arguments",
            ParseErrorKind::MissingMoveTo => "path data must start with M",
            ParseErrorKind::OutOfBounds => "coordinate out of bounds",
            ParseErrorKind::TooLong => "path data too long",
            ParseErrorKind::TooManyCommands => "too many commands",
        }
    }
}

/// Malformed SVG path data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}: {:?} at offset {}", .kind.describe(), .token, .offset)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: String,
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, token: impl Into<String>, offset: usize) -> Self {
        Self { kind, token: token.into(), offset }
    }

    pub fn offending_token(&self) -> &str {
        &self.token
    }
}

/// Shape generator parameter violations. Corner radii are clamped instead.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ShapeError {
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ShapeError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        ShapeError::InvalidParameter { name, value, reason }
    }
}

/// Authoring failures. These are expected in interactive use (events can
/// race against deletions) and leave the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{0} not found")]
    VertexNotFound(VertexId),
    #[error("no path in progress")]
    NotDrawing,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("edge {edge} references missing vertex {vertex}")]
    DanglingVertex { edge: u32, vertex: u32 },
    #[error("region {region} references missing edge {edge}")]
    DanglingEdge { region: usize, edge: u32 },
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported document version {0}")]
    Version(u32),
    #[error("path must start with a move command")]
    MissingMoveTo,
    #[error("non-finite or out-of-bounds coordinate in segment {0}")]
    BadCoordinate(usize),
    #[error("{what} cap exceeded: {count} > {max}")]
    CapExceeded { what: &'static str, count: usize, max: usize },
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Json(#[from] JsonError),
}
