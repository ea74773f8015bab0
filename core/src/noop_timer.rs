use crate::Timer;
use std::time::Duration;

/// Timer that completes immediately regardless of the requested duration
/// Used by tests to run latency paths without waiting on a clock
#[derive(Debug, Default)]
pub struct NoopTimer;

#[async_trait::async_trait]
impl Timer for NoopTimer {
    async fn sleep(&self, _duration: Duration) {}
}
