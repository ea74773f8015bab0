use crate::Timer;
use std::time::Duration;
use tokio::time::sleep;

/// Timer backed by the tokio clock
///
/// Zero-length waits return without touching the timer wheel.
#[derive(Debug, Default)]
pub struct TokioTimer;

#[async_trait::async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            sleep(duration).await;
        }
    }
}
