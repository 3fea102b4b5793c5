pub mod fixtures;
pub mod render;
pub mod runner;

pub use crate::domain::model::{Item, PipelineInput, ProcessedData, StatusReport, Table};
pub use crate::domain::ports::{Fixture, Storage};
pub use crate::utils::error::Result;
