use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Worker configuration loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Directory holding one `<job-id>/` folder of input artifacts per job
    pub input_root: PathBuf,
    /// Directory receiving one `<job-id>/` folder of output artifacts per job
    pub output_root: PathBuf,
    /// Extension (without the dot) of artifacts that get translated
    pub source_extension: String,
    /// Extension substituted on translated artifacts
    pub target_extension: String,
    pub log_level: Option<String>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("jobs"),
            output_root: PathBuf::from("remixed"),
            source_extension: "c".to_string(),
            target_extension: "go".to_string(),
            log_level: None,
        }
    }
}

impl WorkerConfig {
    /// Is `artifact` a source file to translate?
    pub fn is_source(&self, artifact: &str) -> bool {
        artifact
            .strip_suffix(self.source_extension.as_str())
            .is_some_and(|stem| stem.ends_with('.') && stem.len() > 1)
    }

    /// Output name for a source artifact: `dir/a.c` becomes `dir/a.go`
    pub fn target_name(&self, artifact: &str) -> String {
        let stem = artifact
            .strip_suffix(self.source_extension.as_str())
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(artifact);
        format!("{}.{}", stem, self.target_extension)
    }
}

/// Load worker configuration from JSON file
pub fn load_config(path: &Path) -> Result<WorkerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: WorkerConfig = serde_json::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: WorkerConfig = serde_json::from_str(r#"{"output_root": "out"}"#).unwrap();
        assert_eq!(config.output_root, PathBuf::from("out"));
        assert_eq!(config.input_root, PathBuf::from("jobs"));
        assert_eq!(config.source_extension, "c");
        assert_eq!(config.target_extension, "go");
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_source_matching() {
        let config = WorkerConfig::default();
        assert!(config.is_source("main.c"));
        assert!(config.is_source("lib/util.c"));
        assert!(!config.is_source("README.md"));
        assert!(!config.is_source("Makefile.cc"));
        assert!(!config.is_source("magic"));
        assert!(!config.is_source(".c"));
    }

    #[test]
    fn test_target_name() {
        let config = WorkerConfig::default();
        assert_eq!(config.target_name("main.c"), "main.go");
        assert_eq!(config.target_name("lib/util.c"), "lib/util.go");
    }

    #[test]
    fn test_load_config_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worker.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }
}
