use crate::domain::model::{Record, FIELDNAMES};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Appends records to a single CSV file. There is no locking: two concurrent
/// appends may interleave their bytes.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true)
    }

    fn append_blocking(&self, record: &Record) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let write_header = self.needs_header();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            tracing::debug!("Writing CSV header to {}", self.path.display());
            writer.write_record(FIELDNAMES)?;
        }
        writer.serialize(record)?;
        writer.flush()?;

        Ok(())
    }
}

#[async_trait]
impl RecordStore for CsvRecordStore {
    async fn append(&self, record: &Record) -> Result<()> {
        self.append_blocking(record)?;
        tracing::debug!("Appended record to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(age: u64, weight: f64, height_cm: f64) -> Record {
        Record {
            age,
            weight,
            height_cm,
        }
    }

    #[tokio::test]
    async fn test_first_append_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");
        let store = CsvRecordStore::new(&path);

        store.append(&record(30, 70.5, 170.0)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Age,Weight,Height_cm", "30,70.5,170.0"]);
    }

    #[tokio::test]
    async fn test_subsequent_appends_add_one_row_each() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");
        let store = CsvRecordStore::new(&path);

        store.append(&record(30, 70.0, 170.0)).await.unwrap();
        store.append(&record(41, 82.3, 176.5)).await.unwrap();
        store.append(&record(25, 60.0, 165.0)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Age,Weight,Height_cm");
        assert_eq!(lines.iter().filter(|l| **l == "Age,Weight,Height_cm").count(), 1);
        assert_eq!(lines[2], "41,82.3,176.5");
    }

    #[tokio::test]
    async fn test_existing_file_gets_no_second_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");
        std::fs::write(&path, "Age,Weight,Height_cm\n50,90.0,180.0\n").unwrap();

        let store = CsvRecordStore::new(&path);
        store.append(&record(20, 55.0, 160.0)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Age,Weight,Height_cm\n50,90.0,180.0\n20,55.0,160.0\n"
        );
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("records.csv");
        let store = CsvRecordStore::new(&path);

        store.append(&record(30, 70.0, 170.0)).await.unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_rows_read_back_with_csv_reader() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");
        let store = CsvRecordStore::new(&path);

        let first = record(30, 70.0, 170.0);
        let second = record(45, 88.8, 182.2);
        store.append(&first).await.unwrap();
        store.append(&second).await.unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Record> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, vec![first, second]);
    }
}
