use crate::domain::model::Record;
use serde_json::Value;

/// Lenient integer conversion: integers as is, reals truncated toward zero,
/// trimmed numeric strings, booleans as 1/0.
pub(crate) fn coerce_int(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(i128::from(u))
            } else {
                let f = n.as_f64()?.trunc();
                (f.is_finite() && f.abs() < i128::MAX as f64).then_some(f as i128)
            }
        }
        Value::String(s) => s.trim().parse::<i128>().ok(),
        Value::Bool(b) => Some(i128::from(*b)),
        _ => None,
    }
}

/// Lenient real conversion: numbers, trimmed numeric strings, booleans as 1/0.
pub(crate) fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn positive_real(value: Option<&Value>) -> Option<f64> {
    coerce_float(value?).filter(|f| f.is_finite() && *f > 0.0)
}

/// Builds a [`Record`] from a client payload, or `None` if any field is
/// missing, unconvertible or not strictly positive.
pub fn parse_record(payload: &Value) -> Option<Record> {
    let obj = payload.as_object()?;

    let age = coerce_int(obj.get("Age")?).filter(|a| *a > 0)?;
    let age = u64::try_from(age).ok()?;
    let weight = positive_real(obj.get("Weight"))?;
    let height_cm = positive_real(obj.get("Height_cm"))?;

    Some(Record {
        age,
        weight,
        height_cm,
    })
}

pub fn validate_payload(payload: &Value) -> bool {
    parse_record(payload).is_some()
}
