use js_sys::{Float64Array, Object, Reflect};
use serde::Serialize;
use vecpath::Point;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object {
    Object::new()
}
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice);
    arr
}
/// Interleaved `[x0, y0, x1, y1, ...]`.
pub fn points_f64(points: &[Point]) -> Float64Array {
    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    arr_f64(&flat)
}
pub fn point_obj(p: Point) -> JsValue {
    let o = new_obj();
    set_kv(&o, "x", &JsValue::from_f64(p.x));
    set_kv(&o, "y", &JsValue::from_f64(p.y));
    o.into()
}
/// Plain objects rather than ES `Map`s, so JSON documents read naturally.
pub fn to_js<T: Serialize>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).unwrap_or(JsValue::NULL)
}
