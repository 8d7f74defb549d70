//! Placeholder body-fat estimate. The coefficients are not fitted to any data.

use crate::core::validator::coerce_float;
use crate::domain::model::EstimateInput;
use serde_json::Value;

const BMI_WEIGHT: f64 = 0.1;
const AGE_WEIGHT: f64 = 0.05;
const DECIMALS: usize = 3;

pub fn parse_estimate_input(payload: &Value) -> Option<EstimateInput> {
    let obj = payload.as_object()?;

    Some(EstimateInput {
        age: coerce_float(obj.get("Age")?)?,
        weight: coerce_float(obj.get("Weight")?)?,
        height_cm: coerce_float(obj.get("Height_cm")?)?,
    })
}

pub fn bmi(weight: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight / (height_m * height_m)
}

/// Rounds from the exact decimal expansion of `value`, not from a scaled copy.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Returns `None` when the inputs produce a non-finite value (zero height,
/// infinities, NaN), since that cannot be represented in JSON.
pub fn estimate(input: &EstimateInput) -> Option<f64> {
    let raw = BMI_WEIGHT * bmi(input.weight, input.height_cm) + AGE_WEIGHT * input.age;
    raw.is_finite().then(|| round_to(raw, DECIMALS))
}
