pub mod estimator;
pub mod validator;

pub use crate::domain::model::{EstimateInput, Prediction, Record};
pub use crate::domain::ports::{ConfigProvider, RecordStore};
pub use crate::utils::error::Result;
