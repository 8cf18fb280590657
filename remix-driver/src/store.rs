//! Artifact storage
//!
//! A job's artifacts are addressed by `/`-separated paths relative to the
//! job's folder.

use anyhow::{Context, Result};
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where a job's input artifacts come from and its outputs go to
pub trait ArtifactStore {
    /// Every artifact of the job, sorted
    fn list(&self, job: &str) -> Result<Vec<String>>;

    fn get(&self, job: &str, artifact: &str) -> Result<Vec<u8>>;

    fn put(&self, job: &str, artifact: &str, contents: &[u8]) -> Result<()>;
}

/// Artifacts stored as plain files: inputs under `<input_root>/<job>/`,
/// outputs under `<output_root>/<job>/`
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl DirectoryStore {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    fn resolve(root: &Path, job: &str, artifact: &str) -> Result<PathBuf> {
        let mut path = root.join(job);
        for component in artifact.split('/') {
            if component.is_empty() || component == "." || component == ".." {
                anyhow::bail!("invalid artifact path '{}'", artifact);
            }
            path.push(component);
        }
        Ok(path)
    }
}

impl ArtifactStore for DirectoryStore {
    fn list(&self, job: &str) -> Result<Vec<String>> {
        let job_dir = self.input_root.join(job);
        if !job_dir.is_dir() {
            anyhow::bail!("no artifacts for job '{}' in {}", job, self.input_root.display());
        }

        let mut artifacts = Vec::new();
        for entry in WalkDir::new(&job_dir) {
            let entry = entry.with_context(|| format!("listing {}", job_dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&job_dir)?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            trace!("job '{}': found artifact '{}'", job, name);
            artifacts.push(name);
        }

        artifacts.sort();
        Ok(artifacts)
    }

    fn get(&self, job: &str, artifact: &str) -> Result<Vec<u8>> {
        let path = Self::resolve(&self.input_root, job, artifact)?;
        fs::read(&path).with_context(|| format!("reading {}", path.display()))
    }

    fn put(&self, job: &str, artifact: &str, contents: &[u8]) -> Result<()> {
        let path = Self::resolve(&self.output_root, job, artifact)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
    }
}
