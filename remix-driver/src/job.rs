//! Job deliveries and their acknowledgement

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A translation request, as delivered by the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMessage {
    pub id: String,
}

impl JobMessage {
    /// Decode one delivery body
    pub fn decode(body: &str) -> Result<JobMessage> {
        let job: JobMessage = serde_json::from_str(body).context("malformed job delivery")?;
        validate_job_id(&job.id)?;
        Ok(job)
    }
}

/// Job ids name directories, so they must be a single plain path component
fn validate_job_id(id: &str) -> Result<()> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        bail!("invalid job id '{}'", id);
    }
    Ok(())
}

/// How the originating delivery is settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ack,
    Nack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_job() {
        let job = JobMessage::decode(r#"{"id": "b3f1"}"#).unwrap();
        assert_eq!(job.id, "b3f1");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(JobMessage::decode("not json").is_err());
        assert!(JobMessage::decode(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_path_like_ids() {
        assert!(JobMessage::decode(r#"{"id": "../etc"}"#).is_err());
        assert!(JobMessage::decode(r#"{"id": ""}"#).is_err());
        assert!(JobMessage::decode(r#"{"id": "a/b"}"#).is_err());
    }
}
