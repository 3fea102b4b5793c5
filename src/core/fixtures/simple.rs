use crate::config::OUTPUT_DIR;
use crate::domain::ports::{Fixture, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

pub const SIMPLE_OUTPUT: &str = "Simple output from mock repository";

/// Writes `output/simple.txt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleFixture;

impl Fixture for SimpleFixture {
    fn name(&self) -> &'static str {
        "simple_script"
    }

    fn write<S: Storage>(&self, storage: &S) -> Result<Vec<PathBuf>> {
        storage.ensure_dir(OUTPUT_DIR)?;
        let path = storage.write_file(
            &format!("{}/simple.txt", OUTPUT_DIR),
            SIMPLE_OUTPUT.as_bytes(),
        )?;

        tracing::info!("Simple output created successfully at {}", path.display());
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_writes_exact_text() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let files = SimpleFixture.write(&storage).unwrap();

        assert_eq!(files, vec![temp_dir.path().join("output/simple.txt")]);
        assert_eq!(
            std::fs::read_to_string(&files[0]).unwrap(),
            "Simple output from mock repository"
        );
    }
}
