use crate::core::{Fixture, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub fixture: &'static str,
    pub files: Vec<PathBuf>,
}

pub struct FixtureRunner<F: Fixture, S: Storage> {
    fixture: F,
    storage: S,
}

impl<F: Fixture, S: Storage> FixtureRunner<F, S> {
    pub fn new(fixture: F, storage: S) -> Self {
        Self { fixture, storage }
    }

    pub fn run(&self) -> Result<RunReport> {
        let name = self.fixture.name();
        tracing::info!("Starting {}", name);

        let files = self.fixture.write(&self.storage).map_err(|e| {
            tracing::error!("{} failed: {}", name, e);
            e
        })?;

        tracing::debug!("{} wrote {} files", name, files.len());
        for file in &files {
            tracing::debug!("  {}", file.display());
        }
        tracing::info!("{} completed", name);

        Ok(RunReport {
            fixture: name,
            files,
        })
    }
}
