use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Writes reports under a base directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        Ok(tokio::fs::read(full_path).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().join("nested").to_string_lossy().into_owned());

        storage.write_file("trip_plan.md", b"Day 1: Visit Louvre").await.unwrap();
        let data = storage.read_file("trip_plan.md").await.unwrap();
        assert_eq!(data, b"Day 1: Visit Louvre");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().into_owned());
        let result = tokio_test::block_on(storage.read_file("absent.json"));
        assert!(matches!(
            result,
            Err(crate::utils::error::PlannerError::IoError(_))
        ));
    }
}
