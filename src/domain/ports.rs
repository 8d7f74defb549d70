use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Append-only sink for accepted records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append(&self, record: &Record) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn csv_path(&self) -> &str;
}
