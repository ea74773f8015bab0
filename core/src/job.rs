use serde::{Deserialize, Serialize};

/// Unit of work submitted to a pool: an identifier plus an opaque payload.
/// Immutable once created; consumed by exactly one worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub data: String,
}

impl Job {
    pub fn new(id: u64, data: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }
}

/// Output of processing one job, tagged with the originating job id and
/// the worker that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
    pub job_id: u64,
    pub output: String,
    pub worker_id: usize,
}

impl JobResult {
    pub fn new(job_id: u64, output: impl Into<String>, worker_id: usize) -> Self {
        Self {
            job_id,
            output: output.into(),
            worker_id,
        }
    }
}
