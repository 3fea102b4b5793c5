use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Location of `path` inside this storage.
    fn resolve(&self, path: &str) -> PathBuf;
    fn ensure_dir(&self, path: &str) -> Result<PathBuf>;
    /// Creates missing parents and replaces any existing file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait Fixture {
    fn name(&self) -> &'static str;

    /// Writes every file of the fixture and returns their paths in write order.
    fn write<S: Storage>(&self, storage: &S) -> Result<Vec<PathBuf>>;
}
