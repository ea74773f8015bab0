//! Pipeline stages connected by capacity-1 channels: a stage blocks on
//! emission until the next stage is ready to receive, so the fastest
//! stage is throttled by the slowest and nothing buffers without bound.

use tokio::sync::mpsc;

/// Source stage: emits 1..=max in order, then closes its output
pub fn generate(max: u64) -> mpsc::Receiver<u64> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        for value in 1..=max {
            if tx.send(value).await.is_err() {
                // Downstream hung up; stop producing
                return;
            }
        }
    });
    rx
}

/// Transform stage: applies `transform` to every input value, preserving
/// order; closes its output when its input closes
pub fn map_stage<T, U, F>(mut input: mpsc::Receiver<T>, mut transform: F) -> mpsc::Receiver<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        while let Some(value) = input.recv().await {
            if tx.send(transform(value)).await.is_err() {
                return;
            }
        }
    });
    rx
}

/// Filter stage: passes through values satisfying `keep`, preserving the
/// relative order of survivors; closes its output when its input closes
pub fn filter_stage<T, P>(mut input: mpsc::Receiver<T>, mut keep: P) -> mpsc::Receiver<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        while let Some(value) = input.recv().await {
            if keep(&value) && tx.send(value).await.is_err() {
                return;
            }
        }
    });
    rx
}
