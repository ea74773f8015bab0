use std::time::Duration;

/// Trait for abstracting timed waits
/// Lets callers simulate work latency without binding to a clock
#[async_trait::async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
