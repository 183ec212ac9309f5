use crate::{Path, PenSession};
use js_sys::{Array, Float64Array};
use vecpath::{
    BoolOp, CornerRadii, EllipseArc, FlattenOptions, HandleMirroring, HandleSide, Point, VertexId, WindingRule,
};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop;

/// Set up panic reporting and console logging. `log_level` is one of
/// `error`, `warn`, `info`, `debug` or `trace`; default `warn`.
#[wasm_bindgen]
pub fn init(log_level: Option<String>) {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    crate::logger::install(crate::logger::parse_level(log_level.as_deref().unwrap_or("warn")));
}

fn check_finite(params: &[(&str, f64)]) -> Result<(), JsValue> {
    match params.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, _)) => Err(error::non_finite(name)),
        None => Ok(()),
    }
}

fn parse_op(op: &str) -> Option<BoolOp> {
    match op.to_ascii_uppercase().as_str() {
        "UNION" => Some(BoolOp::Union),
        "SUBTRACT" => Some(BoolOp::Subtract),
        "INTERSECT" => Some(BoolOp::Intersect),
        "EXCLUDE" => Some(BoolOp::Exclude),
        _ => None,
    }
}

fn path_res(r: Result<vecpath::VectorPath, vecpath::ShapeError>) -> JsValue {
    match r {
        Ok(p) => error::ok(Path::rs_new(p).into()),
        Err(e) => error::shape(&e),
    }
}

fn json_value(v: JsValue) -> Result<serde_json::Value, JsValue> {
    serde_wasm_bindgen::from_value(v).map_err(|e| error::err("invalid_json", e.to_string(), None))
}

#[wasm_bindgen]
pub fn parse_svg(d: &str) -> Option<Path> {
    vecpath::svg_to_path(d).ok().map(Path::rs_new)
}

#[wasm_bindgen]
pub fn parse_svg_res(d: &str) -> JsValue {
    match vecpath::svg_to_path(d) {
        Ok(p) => error::ok(Path::rs_new(p).into()),
        Err(e) => error::parse(&e),
    }
}

#[wasm_bindgen]
pub fn create_rectangle(x: f64, y: f64, w: f64, h: f64, corner_radius: f64) -> Option<Path> {
    vecpath::rectangle(x, y, w, h, corner_radius).ok().map(Path::rs_new)
}

#[wasm_bindgen]
pub fn create_rectangle_res(x: f64, y: f64, w: f64, h: f64, corner_radius: f64) -> JsValue {
    path_res(vecpath::rectangle(x, y, w, h, corner_radius))
}

#[wasm_bindgen]
pub fn create_rectangle_corners_res(x: f64, y: f64, w: f64, h: f64, tl: f64, tr: f64, br: f64, bl: f64) -> JsValue {
    path_res(vecpath::rectangle(x, y, w, h, CornerRadii::PerCorner([tl, tr, br, bl])))
}

#[wasm_bindgen]
pub fn create_ellipse_res(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_angle: Option<f64>,
    end_angle: Option<f64>,
    inner_radius: Option<f64>,
) -> JsValue {
    let d = EllipseArc::default();
    let arc = EllipseArc {
        start_angle: start_angle.unwrap_or(d.start_angle),
        end_angle: end_angle.unwrap_or(d.end_angle),
        inner_radius: inner_radius.unwrap_or(d.inner_radius),
    };
    path_res(vecpath::ellipse(cx, cy, rx, ry, arc))
}

#[wasm_bindgen]
pub fn create_polygon_res(cx: f64, cy: f64, radius: f64, sides: u32, corner_radius: f64) -> JsValue {
    path_res(vecpath::regular_polygon(cx, cy, radius, sides, corner_radius))
}

#[wasm_bindgen]
pub fn create_star_res(cx: f64, cy: f64, outer: f64, inner: f64, points: u32, corner_radius: f64) -> JsValue {
    path_res(vecpath::star(cx, cy, outer, inner, points, corner_radius))
}

#[wasm_bindgen]
impl Path {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> f64 {
        self.inner.id.0 as f64
    }
    #[wasm_bindgen(getter)]
    pub fn closed(&self) -> bool {
        self.inner.closed
    }
    #[wasm_bindgen(getter)]
    pub fn winding_rule(&self) -> String {
        match self.inner.winding_rule {
            WindingRule::NonZero => "NONZERO".into(),
            WindingRule::EvenOdd => "EVENODD".into(),
        }
    }
    pub fn segment_count(&self) -> u32 {
        self.inner.segments.len() as u32
    }
    pub fn subpath_count(&self) -> u32 {
        self.inner.subpath_count() as u32
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn segments(&self) -> JsValue {
        interop::to_js(&self.inner.segments)
    }
    pub fn to_svg(&self) -> String {
        vecpath::path_to_svg(&self.inner)
    }
    pub fn bounds(&self) -> JsValue {
        match self.inner.bounds() {
            Some(b) => interop::to_js(&b),
            None => JsValue::NULL,
        }
    }
    pub fn start_point(&self) -> JsValue {
        self.inner.start_point().map_or(JsValue::NULL, interop::point_obj)
    }

    /// Flattened samples as interleaved `[x, y, ...]`.
    pub fn to_points(&self, resolution: f64) -> Float64Array {
        interop::points_f64(&vecpath::path_to_points(&self.inner, resolution))
    }
    /// One interleaved array per subpath.
    pub fn to_contours(&self, resolution: f64) -> Array {
        vecpath::path_to_contours(&self.inner, resolution)
            .iter()
            .map(|c| JsValue::from(interop::points_f64(c)))
            .collect()
    }
    pub fn contains(&self, x: f64, y: f64, resolution: f64) -> bool {
        vecpath::contains_point(&self.inner, Point::new(x, y), resolution)
    }

    pub fn with_winding_rule_res(&self, rule: &str) -> JsValue {
        let winding_rule = match rule.to_ascii_uppercase().as_str() {
            "NONZERO" | "NON_ZERO" => WindingRule::NonZero,
            "EVENODD" | "EVEN_ODD" => WindingRule::EvenOdd,
            _ => return error::err("invalid_rule", "rule must be NONZERO or EVENODD", None),
        };
        let mut p = self.inner.fresh_id();
        p.winding_rule = winding_rule;
        error::ok(Path::rs_new(p).into())
    }

    pub fn boolean_res(&self, other: &Path, op: &str) -> JsValue {
        let Some(op) = parse_op(op) else {
            return error::invalid_op(op);
        };
        error::ok(Path::rs_new(vecpath::boolean_operation(&self.inner, &other.inner, op)).into())
    }
    /// Like `boolean_res` with `{ resolution, max_points }` overrides.
    pub fn boolean_with_res(&self, other: &Path, op: &str, options: JsValue) -> JsValue {
        let Some(bool_op) = parse_op(op) else {
            return error::invalid_op(op);
        };
        let opts: FlattenOptions = if options.is_undefined() || options.is_null() {
            FlattenOptions::default()
        } else {
            match serde_wasm_bindgen::from_value(options) {
                Ok(o) => o,
                Err(e) => return error::err("invalid_options", e.to_string(), None),
            }
        };
        if let Err(e) = check_finite(&[("resolution", opts.resolution)]) {
            return e;
        }
        error::ok(Path::rs_new(vecpath::boolean_operation_with(&self.inner, &other.inner, bool_op, &opts)).into())
    }

    pub fn to_json(&self) -> JsValue {
        interop::to_js(&vecpath::path_to_json_value(&self.inner))
    }
    pub fn from_json_res(v: JsValue) -> JsValue {
        let value = match json_value(v) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match vecpath::path_from_json_value(value) {
            Ok(p) => error::ok(Path::rs_new(p).into()),
            Err(e) => error::json(&e),
        }
    }

    pub fn to_network_json(&self) -> JsValue {
        let network = vecpath::VectorNetwork::from_path(&self.inner);
        interop::to_js(&vecpath::network_to_json_value(&network))
    }
    pub fn from_network_json_res(v: JsValue) -> JsValue {
        let value = match json_value(v) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let path = vecpath::network_from_json_value(value)
            .and_then(|n| n.to_path().map_err(vecpath::JsonError::from));
        match path {
            Ok(p) => error::ok(Path::rs_new(p).into()),
            Err(e) => error::json(&e),
        }
    }
}

fn parse_side(side: &str) -> Option<HandleSide> {
    match side {
        "in" => Some(HandleSide::In),
        "out" => Some(HandleSide::Out),
        _ => None,
    }
}

fn unit_res(r: Result<(), vecpath::SessionError>) -> JsValue {
    match r {
        Ok(()) => error::ok(JsValue::TRUE),
        Err(e) => error::session(&e),
    }
}

#[wasm_bindgen]
impl PenSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PenSession {
        PenSession { inner: vecpath::AuthoringSession::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn is_drawing(&self) -> bool {
        self.inner.is_drawing()
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn vertex(&self, id: u32) -> JsValue {
        self.inner.vertex(VertexId(id)).map_or(JsValue::NULL, interop::to_js)
    }
    pub fn vertices(&self) -> JsValue {
        let live: Vec<_> = self.inner.vertices().collect();
        interop::to_js(&live)
    }

    pub fn start_path_res(&mut self, x: f64, y: f64) -> JsValue {
        if let Err(e) = check_finite(&[("x", x), ("y", y)]) {
            return e;
        }
        let id = self.inner.start_path(Point::new(x, y));
        error::ok(JsValue::from_f64(id.0 as f64))
    }
    pub fn add_vertex_res(&mut self, x: f64, y: f64, handle_x: Option<f64>, handle_y: Option<f64>) -> JsValue {
        if let Err(e) = check_finite(&[("x", x), ("y", y)]) {
            return e;
        }
        let handle = match (handle_x, handle_y) {
            (Some(hx), Some(hy)) => {
                if let Err(e) = check_finite(&[("handle_x", hx), ("handle_y", hy)]) {
                    return e;
                }
                Some(Point::new(hx, hy))
            }
            _ => None,
        };
        match self.inner.add_vertex(Point::new(x, y), handle) {
            Ok(id) => error::ok(JsValue::from_f64(id.0 as f64)),
            Err(e) => error::session(&e),
        }
    }
    pub fn current_path(&self) -> Path {
        Path::rs_new(self.inner.current_path())
    }
    pub fn close_path(&mut self) -> Path {
        Path::rs_new(self.inner.close_path())
    }
    pub fn cancel_path(&mut self) {
        self.inner.cancel_path();
    }

    pub fn move_vertex_res(&mut self, id: u32, x: f64, y: f64) -> JsValue {
        if let Err(e) = check_finite(&[("x", x), ("y", y)]) {
            return e;
        }
        unit_res(self.inner.move_vertex(VertexId(id), Point::new(x, y)))
    }
    pub fn move_handle_res(&mut self, id: u32, side: &str, x: f64, y: f64) -> JsValue {
        if let Err(e) = check_finite(&[("x", x), ("y", y)]) {
            return e;
        }
        let Some(side) = parse_side(side) else {
            return error::err("invalid_side", "side must be 'in' or 'out'", None);
        };
        unit_res(self.inner.move_handle(VertexId(id), side, Point::new(x, y)))
    }
    pub fn set_mirroring_res(&mut self, id: u32, mode: u8) -> JsValue {
        let mode = match mode {
            0 => HandleMirroring::None,
            1 => HandleMirroring::Angle,
            2 => HandleMirroring::AngleAndLength,
            _ => return error::invalid_mode(mode),
        };
        unit_res(self.inner.set_mirroring(VertexId(id), mode))
    }
    pub fn convert_to_corner_res(&mut self, id: u32) -> JsValue {
        unit_res(self.inner.convert_to_corner(VertexId(id)))
    }
    pub fn convert_to_smooth_res(&mut self, id: u32) -> JsValue {
        match self.inner.convert_to_smooth(VertexId(id)) {
            Ok(changed) => error::ok(JsValue::from_bool(changed)),
            Err(e) => error::session(&e),
        }
    }
    pub fn delete_vertex_res(&mut self, id: u32) -> JsValue {
        unit_res(self.inner.delete_vertex(VertexId(id)))
    }
}

impl Default for PenSession {
    fn default() -> Self {
        Self::new()
    }
}
