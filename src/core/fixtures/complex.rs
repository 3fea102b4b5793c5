use crate::config::OUTPUT_DIR;
use crate::core::render::{records_to_csv, to_json};
use crate::domain::model::{ColumnValues, Table};
use crate::domain::ports::{Fixture, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// The fixed 5x3 sample table.
pub fn sample_table() -> Table {
    Table::new()
        .with_column("A", ColumnValues::Int(vec![1, 2, 3, 4, 5]))
        .with_column("B", ColumnValues::Int(vec![10, 20, 30, 40, 50]))
        .with_column(
            "C",
            ColumnValues::Text(
                ["alpha", "beta", "gamma", "delta", "epsilon"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        )
}

/// Writes the sample table as `output/data.csv` and its shape as `output/summary.json`.
#[derive(Debug, Clone)]
pub struct ComplexFixture {
    table: Table,
}

impl ComplexFixture {
    pub fn new(table: Table) -> Self {
        Self { table }
    }
}

impl Default for ComplexFixture {
    fn default() -> Self {
        Self::new(sample_table())
    }
}

impl Fixture for ComplexFixture {
    fn name(&self) -> &'static str {
        "complex_script"
    }

    fn write<S: Storage>(&self, storage: &S) -> Result<Vec<PathBuf>> {
        storage.ensure_dir(OUTPUT_DIR)?;

        let csv = records_to_csv(&self.table.column_names(), self.table.rows())?;
        let csv_path = storage.write_file(&format!("{}/data.csv", OUTPUT_DIR), &csv)?;
        tracing::info!("Data saved to CSV: {}", csv_path.display());

        let summary = self.table.summary();
        let json_path =
            storage.write_file(&format!("{}/summary.json", OUTPUT_DIR), &to_json(&summary)?)?;
        tracing::info!("Summary saved to JSON: {}", json_path.display());

        tracing::info!("Complex data processing completed");
        Ok(vec![csv_path, json_path])
    }
}
