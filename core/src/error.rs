use std::time::Duration;

/// Failure modes of a bounded wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitError {
    /// The awaited work did not complete within the allotted duration
    Timeout(Duration),

    /// The awaited task stopped without producing a value (panic or abort)
    Failed(String),
}

impl std::fmt::Display for WaitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaitError::Timeout(limit) => write!(f, "work timed out after {:?}", limit),
            WaitError::Failed(msg) => write!(f, "work failed before completing: {}", msg),
        }
    }
}

impl std::error::Error for WaitError {}
