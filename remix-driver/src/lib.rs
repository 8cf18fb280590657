//! C to Go Remixer - Driver
//!
//! The job-processing layer around the translator: configuration, the
//! artifact store, status reporting and the worker loop. The `remix`
//! binary wires these to the command line.

pub mod config;
pub mod job;
pub mod logging;
pub mod status;
pub mod store;
pub mod worker;

pub use config::{load_config, WorkerConfig};
pub use job::{JobMessage, Outcome};
pub use status::{JsonLinesReporter, StatusMessage, StatusReporter, SubmissionStatus};
pub use store::{ArtifactStore, DirectoryStore};
pub use worker::{RunSummary, Worker};
