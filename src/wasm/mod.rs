use crate::errors::ExtractionError;
use wasm_bindgen::prelude::*;

pub mod contour_js;
pub mod field_js;
pub mod shell_js;

fn js_error(err: ExtractionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
