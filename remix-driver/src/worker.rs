//! Job processing
//!
//! Each delivery names a job. All of the job's source artifacts are
//! translated before anything is written, so a failing job leaves no
//! partial output behind.

use crate::config::WorkerConfig;
use crate::job::{JobMessage, Outcome};
use crate::status::{StatusMessage, StatusReporter, SubmissionStatus};
use crate::store::ArtifactStore;
use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use rayon::prelude::*;
use remix_backend::Remixer;
use std::io::BufRead;

/// Acknowledgement counts for one run over a delivery stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub acked: usize,
    pub nacked: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Ack => self.acked += 1,
            Outcome::Nack => self.nacked += 1,
        }
    }
}

pub struct Worker<S, R> {
    config: WorkerConfig,
    store: S,
    reporter: R,
    remixer: Remixer,
}

impl<S: ArtifactStore, R: StatusReporter> Worker<S, R> {
    pub fn new(config: WorkerConfig, store: S, reporter: R) -> Self {
        Self {
            config,
            store,
            reporter,
            remixer: Remixer::new(),
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Status delivery is best effort; a lost message does not fail the job
    fn publish(&mut self, message: StatusMessage) {
        if let Err(err) = self.reporter.report(&message) {
            error!("Error publishing status message for job '{}': {:#}", message.id, err);
        }
    }

    /// Consume deliveries, one JSON job message per line, until the stream ends
    pub fn run(&mut self, deliveries: impl BufRead) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for line in deliveries.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            summary.record(self.handle_delivery(&line));
        }

        info!("{} jobs acknowledged, {} rejected", summary.acked, summary.nacked);
        Ok(summary)
    }

    /// Decode and process a single delivery
    pub fn handle_delivery(&mut self, body: &str) -> Outcome {
        match JobMessage::decode(body) {
            Ok(job) => self.process_job(&job),
            Err(err) => {
                warn!("Rejecting delivery: {:#}", err);
                Outcome::Nack
            }
        }
    }

    pub fn process_job(&mut self, job: &JobMessage) -> Outcome {
        self.publish(StatusMessage::new(&job.id, SubmissionStatus::Processing));
        info!("Job '{}' started", job.id);

        match self.remix_job(&job.id) {
            Ok(written) => {
                self.publish(StatusMessage::new(&job.id, SubmissionStatus::Done));
                info!("Job '{}' completed, {} artifacts written", job.id, written);
                Outcome::Ack
            }
            Err(err) => {
                error!("Failed to remix job '{}': {:#}", job.id, err);
                self.publish(StatusMessage::failed(&job.id, format!("{:#}", err)));
                Outcome::Nack
            }
        }
    }

    /// Translate every source artifact, then write all outputs. Returns the
    /// number of artifacts written.
    fn remix_job(&self, job: &str) -> Result<usize> {
        let mut sources = Vec::new();
        let mut outputs = Vec::new();

        for artifact in self.store.list(job)? {
            let contents = self.store.get(job, &artifact)?;
            if self.config.is_source(&artifact) {
                sources.push((artifact, contents));
            } else {
                outputs.push((artifact, contents));
            }
        }

        debug!("Job '{}': {} sources, {} pass-through", job, sources.len(), outputs.len());

        let remixer = &self.remixer;
        let config = &self.config;
        let translated: Vec<Result<(String, Vec<u8>)>> = sources
            .par_iter()
            .map(|(artifact, contents)| translate_artifact(remixer, config, artifact, contents))
            .collect();

        // First failure in artifact order, independent of scheduling
        for result in translated {
            outputs.push(result?);
        }

        for (artifact, contents) in &outputs {
            debug!("Job '{}': writing '{}'", job, artifact);
            self.store.put(job, artifact, contents)?;
        }

        Ok(outputs.len())
    }
}

fn translate_artifact(
    remixer: &Remixer,
    config: &WorkerConfig,
    artifact: &str,
    contents: &[u8],
) -> Result<(String, Vec<u8>)> {
    debug!("Remixing '{}'", artifact);

    let source = std::str::from_utf8(contents)
        .map_err(|_| anyhow!("{}: source is not valid UTF-8", artifact))?;
    let output = remixer.remix_named(source, artifact)?;

    Ok((config.target_name(artifact), output.into_bytes()))
}
