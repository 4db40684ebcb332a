//! WASM build test
//!
//! Exercises the JavaScript-facing API in a browser: sampling, layout with
//! pre-measured widths, and drawing onto a real canvas.

#![cfg(target_arch = "wasm32")]

use ribbon_wasm::api::{draw_name, get_ribbon_defaults, layout_ribbon_js, sample_curve_js};
use ribbon_wasm::{RibbonLayout, SampleTable};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn curve_js() -> JsValue {
    js_sys::JSON::parse(
        r#"{"start":{"x":0,"y":100},"c1":{"x":50,"y":0},"c2":{"x":150,"y":0},"end":{"x":200,"y":100}}"#,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_sample_curve() {
    let result = sample_curve_js(curve_js(), JsValue::UNDEFINED).unwrap();
    let table: SampleTable = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(table.len(), 1001);
}

#[wasm_bindgen_test]
fn test_sample_curve_rejects_zero_samples() {
    let config = js_sys::JSON::parse(r#"{"sample_count":0}"#).unwrap();
    assert!(sample_curve_js(curve_js(), config).is_err());
}

#[wasm_bindgen_test]
fn test_layout_ribbon() {
    let ribbon = js_sys::Object::new();
    js_sys::Reflect::set(&ribbon, &"curve".into(), &curve_js()).unwrap();
    let widths = js_sys::JSON::parse(r#"{"default_width":10,"text_widths":{"AB":22}}"#).unwrap();
    let options = js_sys::JSON::parse(r#"{"padding":2}"#).unwrap();

    let result = layout_ribbon_js(ribbon.into(), "AB", widths, options).unwrap();
    let layout: RibbonLayout = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(layout.placements.len(), 2);
    assert_eq!(layout.total_length, 24.0);
}

#[wasm_bindgen_test]
fn test_draw_name_on_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();

    let styles = js_sys::Object::new();
    let name = js_sys::Object::new();
    let card = js_sys::Object::new();
    js_sys::Reflect::set(&name, &"textCurve".into(), &curve_js()).unwrap();
    js_sys::Reflect::set(&card, &"name".into(), &name).unwrap();
    js_sys::Reflect::set(&styles, &"hero".into(), &card).unwrap();

    let result = draw_name("Ada", "20px serif", "#ffffff", "hero", canvas.clone(), styles.clone().into());
    let layout: RibbonLayout = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(layout.placements.len(), 3);

    assert!(draw_name("Ada", "20px serif", "#ffffff", "missing", canvas, styles.into()).is_err());
}

#[wasm_bindgen_test]
fn test_defaults() {
    assert!(!get_ribbon_defaults().is_null());
}
