use crate::config::OUTPUT_DIR;
use crate::core::render::to_json;
use crate::domain::model::StatusReport;
use crate::domain::ports::{Fixture, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

pub fn status_report() -> StatusReport {
    StatusReport {
        processed: true,
        count: 42,
        status: "completed".to_string(),
    }
}

/// Writes the static status report to `output/data.json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataProcessorFixture;

impl Fixture for DataProcessorFixture {
    fn name(&self) -> &'static str {
        "data_processor"
    }

    fn write<S: Storage>(&self, storage: &S) -> Result<Vec<PathBuf>> {
        storage.ensure_dir(OUTPUT_DIR)?;

        let json = to_json(&status_report())?;
        let path = storage.write_file(&format!("{}/data.json", OUTPUT_DIR), &json)?;

        tracing::info!(
            "Data processing completed, output saved to: {}",
            path.display()
        );
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_writes_status_json() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let files = DataProcessorFixture.write(&storage).unwrap();

        assert_eq!(
            std::fs::read_to_string(&files[0]).unwrap(),
            "{\n  \"processed\": true,\n  \"count\": 42,\n  \"status\": \"completed\"\n}"
        );
    }
}
