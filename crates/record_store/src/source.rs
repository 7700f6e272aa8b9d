use async_trait::async_trait;
use models::ExpenseRecord;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Record source boundary for the analytics engine.
///
/// One `list` call per explicit refresh; the returned list is treated as
/// the authoritative, complete snapshot for that owner. The owner key is
/// always an explicit parameter, never ambient process state. This
/// abstraction allows swapping between file-based and service-backed
/// implementations.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn list(&self, owner_key: &str) -> Result<Vec<ExpenseRecord>>;
}

/// File-based implementation that reads a JSON array of expense records
/// and partitions it by owner email.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn list(&self, owner_key: &str) -> Result<Vec<ExpenseRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let all: Vec<ExpenseRecord> = serde_json::from_str(&content)?;

        let records: Vec<ExpenseRecord> = all
            .into_iter()
            .filter(|record| record.owner_email == owner_key)
            .collect();

        tracing::debug!(
            "Loaded {} records for {} from {}",
            records.len(),
            owner_key,
            self.path.display()
        );
        Ok(records)
    }
}

/// In-memory implementation for tests and embedded use.
pub struct InMemoryRecordSource {
    records: Vec<ExpenseRecord>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn list(&self, owner_key: &str) -> Result<Vec<ExpenseRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.owner_email == owner_key)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, owner: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: id.to_string(),
            tag: "Food".to_string(),
            description: String::new(),
            amount: "10".to_string(),
            date: "Mon, 01/01/2024".to_string(),
            owner_email: owner.to_string(),
            timestamp: 0,
        }
    }

    #[tokio::test]
    async fn test_in_memory_partitions_by_owner() {
        let source = InMemoryRecordSource::new(vec![
            record("E1", "a@example.com"),
            record("E2", "b@example.com"),
            record("E3", "a@example.com"),
        ]);

        let records = source.list("a@example.com").await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.owner_email == "a@example.com"));

        let records = source.list("nobody@example.com").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_file_source_reads_and_partitions() {
        let path = std::env::temp_dir().join(format!(
            "record_store_test_{}.json",
            std::process::id()
        ));
        let json = r#"[
            {"expense_id": "E1", "tag": "Food", "amount": "10",
             "date": "Mon, 01/01/2024", "email": "a@example.com"},
            {"expense_id": "E2", "tag": "Transport", "amount": "5",
             "date": "Tue, 02/01/2024", "email": "b@example.com"}
        ]"#;
        std::fs::write(&path, json).unwrap();

        let source = FileRecordSource::new(&path);
        let records = source.list("a@example.com").await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "E1");
    }

    #[tokio::test]
    async fn test_missing_file_is_a_failed_load() {
        let source = FileRecordSource::new("/nonexistent/records.json");
        let result = source.list("a@example.com").await;
        assert!(matches!(result, Err(crate::error::StoreError::Load(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_surfaced() {
        let path = std::env::temp_dir().join(format!(
            "record_store_bad_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json ]").unwrap();

        let source = FileRecordSource::new(&path);
        let result = source.list("a@example.com").await;
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(crate::error::StoreError::Malformed(_))
        ));
    }
}
