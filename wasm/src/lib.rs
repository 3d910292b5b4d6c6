//! Fasting Calculator WASM Module
//!
//! WebAssembly bindings exposing the weight-loss estimator to the browser
//! form. The page collects the six fields and calls in; the modal,
//! confetti, and unit toggle stay on the JavaScript side.

use fasting_calc_shared::{estimate, EstimateRequest};
use wasm_bindgen::prelude::*;

fn parse_field<T>(value: &str, what: &str) -> Result<T, JsError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e: String| JsError::new(&format!("{}: {}", what, e)))
}

/// Estimate monthly weight loss from the form's raw field values.
///
/// Enum fields arrive as the form's option values; both the canonical
/// snake_case names and the original option values ("5:2", "16/8",
/// "alternate", "very") are accepted. Returns the rounded number the
/// result modal displays, in kg or lbs per `unit_system`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn estimate_monthly_weight_loss(
    age: i32,
    sex: &str,
    weight: f64,
    height: f64,
    height_inches: Option<f64>,
    activity_level: &str,
    fasting_method: &str,
    unit_system: &str,
) -> Result<f64, JsError> {
    let request = EstimateRequest {
        age,
        sex: parse_field(sex, "sex")?,
        weight,
        height,
        height_inches,
        activity_level: parse_field(activity_level, "activity_level")?,
        fasting_method: parse_field(fasting_method, "fasting_method")?,
        unit_system: parse_field(unit_system, "unit_system")?,
    };
    let result = estimate(&request).map_err(|e| JsError::new(&e.user_message()))?;
    Ok(result.monthly_loss)
}

/// Estimate with the full breakdown, JSON in / JSON out.
///
/// The input is a serialized `EstimateRequest`; the output carries BMR,
/// TDEE, the retention factor, the daily deficit, and the rounded monthly
/// loss with its unit suffix.
#[wasm_bindgen]
pub fn estimate_breakdown(input: &str) -> Result<String, JsError> {
    let request: EstimateRequest =
        serde_json::from_str(input).map_err(|e| JsError::new(&e.to_string()))?;
    let result = estimate(&request).map_err(|e| JsError::new(&e.user_message()))?;
    serde_json::to_string(&result).map_err(|e| JsError::new(&e.to_string()))
}
