pub mod aggregate;
pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod filter;
pub mod intermediate;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod tokenize;

pub use error::PipelineError;
