use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logger;

pub use api::{
    create_ellipse_res, create_polygon_res, create_rectangle, create_rectangle_corners_res, create_rectangle_res,
    create_star_res, init, parse_svg, parse_svg_res,
};

/// A finished path held on the Rust side.
#[wasm_bindgen]
pub struct Path {
    pub(crate) inner: vecpath::VectorPath,
}

impl Path {
    pub fn rs_new(inner: vecpath::VectorPath) -> Path {
        Path { inner }
    }
}

/// Pen-tool session; one per editing tool.
#[wasm_bindgen]
pub struct PenSession {
    pub(crate) inner: vecpath::AuthoringSession,
}
