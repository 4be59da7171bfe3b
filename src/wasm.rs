//! WASM bindings for equivalent strain post-processing
//!
//! Runs the reduction directly in the browser; inputs and outputs are JSON
//! strings using the same envelopes as the HTTP server.

use wasm_bindgen::prelude::*;

use crate::api::{self, ApiResponse, ScratchRequest};
use crate::error::EstrnError;
use crate::odb::FieldOutput;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Compute `ESTRN` for a field output given as JSON
#[wasm_bindgen]
pub fn compute_estrn_json(snapshot_json: &str) -> String {
    let start = js_sys::Date::now();
    let result = serde_json::from_str::<FieldOutput>(snapshot_json)
        .map_err(EstrnError::from)
        .and_then(|snapshot| api::run_estrn(&snapshot));
    respond(ApiResponse::from_result(result).with_elapsed(elapsed_ms(start)))
}

/// Build a scratch database for a results database given as JSON
#[wasm_bindgen]
pub fn build_scratch_json(request_json: &str) -> String {
    let start = js_sys::Date::now();
    let result = serde_json::from_str::<ScratchRequest>(request_json)
        .map_err(EstrnError::from)
        .and_then(api::run_scratch);
    respond(ApiResponse::from_result(result).with_elapsed(elapsed_ms(start)))
}

fn elapsed_ms(start: f64) -> u64 {
    (js_sys::Date::now() - start) as u64
}

fn respond<T: serde::Serialize>(response: ApiResponse<T>) -> String {
    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}
