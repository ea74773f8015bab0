use pipework_core::Timer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

/// Distributes one input stream across `replicas` competing transformer
/// workers
///
/// The replicas share the input through a locked receiver, so no element
/// is delivered to more than one of them. Each replica sleeps for
/// `work_delay` per element to simulate work before applying `transform`.
pub fn fan_out<T, U, F>(
    input: mpsc::Receiver<T>,
    replicas: usize,
    timer: Arc<dyn Timer>,
    work_delay: Duration,
    transform: F,
) -> Vec<mpsc::Receiver<U>>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Clone + Send + 'static,
{
    let shared_input = Arc::new(Mutex::new(input));
    let mut outputs = Vec::with_capacity(replicas);

    for _ in 0..replicas {
        let input = shared_input.clone();
        let timer = timer.clone();
        let transform = transform.clone();
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            loop {
                let value = { input.lock().await.recv().await };
                let Some(value) = value else { break };

                timer.sleep(work_delay).await;
                if tx.send(transform(value)).await.is_err() {
                    break;
                }
            }
        });
        outputs.push(rx);
    }

    outputs
}

/// Merges several upstream streams into one
///
/// One forwarder task drains each upstream. The merged channel closes
/// when the last forwarder drops its sender clone, so the combined
/// stream ends only after every upstream has finished and drained.
pub fn fan_in<T>(inputs: Vec<mpsc::Receiver<T>>) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    for mut input in inputs {
        let tx = tx.clone();
        tokio::spawn(async move {
            while let Some(value) = input.recv().await {
                if tx.send(value).await.is_err() {
                    return;
                }
            }
        });
    }
    rx
}
