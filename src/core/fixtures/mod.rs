pub mod complex;
pub mod data_processor;
pub mod pipeline;
pub mod simple;

pub use complex::ComplexFixture;
pub use data_processor::DataProcessorFixture;
pub use pipeline::PipelineFixture;
pub use simple::SimpleFixture;
