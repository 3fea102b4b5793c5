pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, FixtureEnv, PipelineArgs, RootPolicy};
pub use crate::core::fixtures::{
    ComplexFixture, DataProcessorFixture, PipelineFixture, SimpleFixture,
};
pub use crate::core::runner::{FixtureRunner, RunReport};
pub use crate::utils::error::{FixtureError, Result};
