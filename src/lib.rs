pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::storage::CsvRecordStore;
pub use config::ServerConfig;
pub use domain::model::{Prediction, Record};
pub use server::{router, serve, serve_on, AppState};
pub use utils::error::{Result, ServiceError};
