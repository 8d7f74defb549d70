use serde::{Deserialize, Serialize};

/// Column order of the persisted CSV file.
pub const FIELDNAMES: [&str; 3] = ["Age", "Weight", "Height_cm"];

/// One validated Age/Weight/Height triple. Serializes with the wire/CSV
/// column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Age")]
    pub age: u64,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "Height_cm")]
    pub height_cm: f64,
}

/// Inputs to the estimator. Unlike [`Record`] nothing here is required to be
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInput {
    pub age: f64,
    pub weight: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
