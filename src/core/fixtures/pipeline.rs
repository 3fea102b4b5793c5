use crate::config::{FixtureEnv, LOGS_DIR, OUTPUT_DIR};
use crate::core::render::{to_csv, to_json};
use crate::domain::model::{Item, ItemRow, PipelineInput, ProcessedData};
use crate::domain::ports::{Fixture, Storage};
use crate::utils::error::Result;
use crate::utils::timestamp::now_iso;
use std::path::PathBuf;

pub const COMPLETED: &str = "completed";

/// Hard-coded input for a run; test mode yields two tagged items instead of three.
pub fn sample_input(test_mode: bool) -> PipelineInput {
    if test_mode {
        PipelineInput::Many(vec![
            Item::new(1, "Test Item 1", 100).with_mode("test"),
            Item::new(2, "Test Item 2", 200).with_mode("test"),
        ])
    } else {
        PipelineInput::Many(vec![
            Item::new(1, "Test Item 1", 100),
            Item::new(2, "Test Item 2", 200),
            Item::new(3, "Test Item 3", 300),
        ])
    }
}

pub fn process_data(input: PipelineInput) -> ProcessedData {
    let record_count = input.record_count();
    ProcessedData {
        input,
        processed_at: now_iso(),
        status: COMPLETED.to_string(),
        record_count,
    }
}

pub fn render_result_text(results: &ProcessedData, env_id: &str) -> String {
    format!(
        "Processing completed at {}\nStatus: {}\nRecords processed: {}\nEnvironment: {}\n",
        results.processed_at, results.status, results.record_count, env_id
    )
}

pub fn render_processing_log(env_id: &str, items_processed: usize) -> String {
    [
        "Processing started".to_string(),
        format!("Environment: {}", env_id),
        format!("Items processed: {}", items_processed),
        "Processing completed".to_string(),
    ]
    .iter()
    .map(|line| format!("[{}] {}\n", now_iso(), line))
    .collect()
}

/// Simulated pipeline run: result text, JSON results, item CSV and a processing log.
#[derive(Debug, Clone)]
pub struct PipelineFixture {
    env: FixtureEnv,
    test_mode: bool,
}

impl PipelineFixture {
    pub fn new(env: FixtureEnv, test_mode: bool) -> Self {
        Self { env, test_mode }
    }
}

impl Fixture for PipelineFixture {
    fn name(&self) -> &'static str {
        "sample_pipeline"
    }

    fn write<S: Storage>(&self, storage: &S) -> Result<Vec<PathBuf>> {
        let env_id = self.env.env_id.as_str();
        tracing::info!("Environment ID: {}", env_id);
        tracing::info!("Entrypoint args: {}", self.env.entrypoint_args);

        storage.ensure_dir(OUTPUT_DIR)?;
        storage.ensure_dir(LOGS_DIR)?;

        if self.test_mode {
            tracing::info!("Running in test mode");
        }
        let input = sample_input(self.test_mode);
        let item_count = input.record_count();
        tracing::info!("Processing {} items...", item_count);

        let results = process_data(input);

        let result_path = storage.write_file(
            &format!("{}/result.txt", OUTPUT_DIR),
            render_result_text(&results, env_id).as_bytes(),
        )?;

        let json_path =
            storage.write_file(&format!("{}/results.json", OUTPUT_DIR), &to_json(&results)?)?;

        let csv = to_csv(results.input.items().iter().map(ItemRow::from))?;
        let csv_path = storage.write_file(&format!("{}/data.csv", OUTPUT_DIR), &csv)?;

        let log_path = storage.write_file(
            &format!("{}/processing.log", LOGS_DIR),
            render_processing_log(env_id, item_count).as_bytes(),
        )?;

        let files = vec![result_path, json_path, csv_path, log_path];
        tracing::info!("Output files created:");
        for file in &files {
            tracing::info!("- {}", file.display());
        }
        tracing::info!("Data processing completed successfully!");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_input_modes() {
        let normal = sample_input(false);
        assert_eq!(normal.record_count(), 3);
        assert!(normal.items().iter().all(|i| i.mode.is_none()));

        let test = sample_input(true);
        assert_eq!(test.record_count(), 2);
        assert!(test.items().iter().all(|i| i.mode.as_deref() == Some("test")));
    }

    #[test]
    fn test_process_data_counts_single_item() {
        let results = process_data(PipelineInput::One(Item::new(9, "Only", 1)));
        assert_eq!(results.record_count, 1);
        assert_eq!(results.status, "completed");
    }

    #[test]
    fn test_results_json_key_order() {
        let results = process_data(sample_input(false));
        let json = String::from_utf8(to_json(&results).unwrap()).unwrap();

        let input_at = json.find("\"input\"").unwrap();
        let processed_at = json.find("\"processed_at\"").unwrap();
        let status_at = json.find("\"status\"").unwrap();
        let count_at = json.find("\"record_count\"").unwrap();
        assert!(input_at < processed_at && processed_at < status_at && status_at < count_at);
        assert!(json.ends_with("\"record_count\": 3\n}"));
    }

    #[test]
    fn test_result_text_lines() {
        let results = ProcessedData {
            input: sample_input(false),
            processed_at: "2024-01-02T03:04:05.000006".to_string(),
            status: COMPLETED.to_string(),
            record_count: 3,
        };

        assert_eq!(
            render_result_text(&results, "env-7"),
            "Processing completed at 2024-01-02T03:04:05.000006\n\
             Status: completed\n\
             Records processed: 3\n\
             Environment: env-7\n"
        );
    }

    #[test]
    fn test_processing_log_lines() {
        let log = render_processing_log("unknown", 2);
        let lines: Vec<&str> = log.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.starts_with('[')));
        assert!(lines[0].ends_with("] Processing started"));
        assert!(lines[1].ends_with("] Environment: unknown"));
        assert!(lines[2].ends_with("] Items processed: 2"));
        assert!(lines[3].ends_with("] Processing completed"));
        assert!(log.ends_with('\n'));
    }
}
