use crate::interop::{new_obj, set_kv};
use vecpath::{JsonError, ParseError, SessionError, ShapeError};
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

pub fn parse(e: &ParseError) -> JsValue {
    let d = new_obj();
    set_kv(&d, "token", &JsValue::from_str(e.offending_token()));
    set_kv(&d, "offset", &JsValue::from_f64(e.offset as f64));
    err("parse_error", e.to_string(), Some(d.into()))
}

pub fn shape(e: &ShapeError) -> JsValue {
    let ShapeError::InvalidParameter { name, value, .. } = e;
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(name));
    set_kv(&d, "got", &JsValue::from_f64(*value));
    err("invalid_parameter", e.to_string(), Some(d.into()))
}

pub fn session(e: &SessionError) -> JsValue {
    match e {
        SessionError::VertexNotFound(id) => {
            let d = new_obj();
            set_kv(&d, "id", &JsValue::from_f64(id.0 as f64));
            err("not_found", e.to_string(), Some(d.into()))
        }
        SessionError::NotDrawing => err("not_drawing", e.to_string(), None),
    }
}

pub fn json(e: &JsonError) -> JsValue {
    err("invalid_json", e.to_string(), None)
}

#[inline]
pub fn invalid_mode(got: u8) -> JsValue {
    let d = new_obj();
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("invalid_mode", "mode must be 0:None, 1:Angle, 2:AngleAndLength", Some(d.into()))
}

pub fn invalid_op(got: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_op", "op must be UNION, SUBTRACT, INTERSECT or EXCLUDE", Some(d.into()))
}
