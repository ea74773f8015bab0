use pipework_core::WaitError;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Races `work` against a deadline
///
/// The work runs as its own task. If it finishes inside `limit` its value
/// is returned; otherwise `WaitError::Timeout` is returned and the task
/// keeps running detached, with its eventual output discarded. A task
/// that panics before the deadline surfaces as `WaitError::Failed`.
pub async fn bounded_wait<F, T>(limit: Duration, work: F) -> Result<T, WaitError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::spawn(work);
    match timeout(limit, handle).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(WaitError::Failed(e.to_string())),
        Err(_) => Err(WaitError::Timeout(limit)),
    }
}
