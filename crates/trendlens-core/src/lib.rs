pub mod aggregate;
pub mod clean;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod sample;
pub mod schema;

pub use error::{PipelineError, Result};
pub use pipeline::{run, Analysis};
