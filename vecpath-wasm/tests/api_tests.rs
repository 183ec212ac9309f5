use js_sys::Reflect;
use vecpath_wasm::{
    create_polygon_res, create_rectangle, create_star_res, parse_svg, parse_svg_res, Path, PenSession,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED)
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if field(v, "ok").as_bool() != Some(false) {
        return false;
    }
    field(&field(v, "error"), "code").as_string().map_or(false, |s| s == code)
}

fn is_ok(v: &JsValue) -> bool {
    field(v, "ok").as_bool() == Some(true)
}

#[wasm_bindgen_test]
fn svg_errors_carry_token_and_offset() {
    let r = parse_svg_res("M 0 0 l 5 5");
    assert!(is_err(&r, "parse_error"));
    let data = field(&field(&r, "error"), "data");
    assert_eq!(field(&data, "token").as_string().as_deref(), Some("l"));
    assert_eq!(field(&data, "offset").as_f64(), Some(6.0));
    assert!(is_ok(&parse_svg_res("M 0 0 L 5 5")));
}

#[wasm_bindgen_test]
fn shape_parameters_are_validated() {
    assert!(is_err(&create_polygon_res(0.0, 0.0, 10.0, 2, 0.0), "invalid_parameter"));
    assert!(is_err(&create_star_res(0.0, 0.0, 10.0, 5.0, 1, 0.0), "invalid_parameter"));
    assert!(is_ok(&create_polygon_res(0.0, 0.0, 10.0, 5, 1.0)));
}

#[wasm_bindgen_test]
fn path_exports() {
    let rect = create_rectangle(0.0, 0.0, 100.0, 50.0, 0.0).unwrap();
    assert_eq!(rect.to_svg(), "M 0 0 L 100 0 L 100 50 L 0 50 Z");
    assert!(rect.closed());
    assert_eq!(rect.winding_rule(), "NONZERO");
    assert_eq!(rect.to_points(1.0).to_vec(), vec![0.0, 0.0, 100.0, 0.0, 100.0, 50.0, 0.0, 50.0]);
    assert!(rect.contains(50.0, 25.0, 1.0));

    let back = Path::from_json_res(rect.to_json());
    assert!(is_ok(&back));
    assert!(is_ok(&Path::from_network_json_res(rect.to_network_json())));
    assert!(is_err(&Path::from_json_res(JsValue::from_str("nope")), "invalid_json"));
}

#[wasm_bindgen_test]
fn boolean_ops_by_name() {
    let a = create_rectangle(0.0, 0.0, 10.0, 10.0, 0.0).unwrap();
    let b = parse_svg("M 50 50 L 60 50 L 60 60 Z").unwrap();
    assert!(is_ok(&a.boolean_res(&b, "union")));
    assert!(is_err(&a.boolean_res(&b, "xor"), "invalid_op"));
    assert!(is_ok(&a.boolean_with_res(&b, "INTERSECT", JsValue::UNDEFINED)));
}

#[wasm_bindgen_test]
fn pen_session_errors_leave_state_alone() {
    let mut s = PenSession::new();
    assert!(is_err(&s.add_vertex_res(1.0, 1.0, None, None), "not_drawing"));
    assert!(is_ok(&s.start_path_res(0.0, 0.0)));
    assert!(is_err(&s.move_vertex_res(42, 1.0, 1.0), "not_found"));
    assert!(is_err(&s.start_path_res(f64::NAN, 0.0), "non_finite"));
    assert!(is_err(&s.set_mirroring_res(0, 9), "invalid_mode"));
    assert_eq!(s.vertex_count(), 1);

    let single = s.close_path();
    assert_eq!(single.segment_count(), 1);
    assert!(s.is_drawing());

    assert!(is_ok(&s.add_vertex_res(10.0, 0.0, Some(12.0), Some(3.0))));
    let done = s.close_path();
    assert!(done.closed());
    assert!(!s.is_drawing());
}
