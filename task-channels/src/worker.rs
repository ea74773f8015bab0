use pipework_core::{Job, JobResult, Timer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Receive side of the job queue, shared by every worker in a pool
/// Each job is delivered to exactly one worker.
pub type SharedJobQueue = Arc<Mutex<mpsc::Receiver<Job>>>;

/// Pool worker: repeatedly takes a job from the shared queue and emits one
/// result per job, until the queue closes or its stop token fires
pub struct Worker {
    id: usize,
    jobs: SharedJobQueue,
    stop: CancellationToken,
    timer: Arc<dyn Timer>,
    work_delay: Duration,
    task_handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn new(
        id: usize,
        jobs: SharedJobQueue,
        stop: CancellationToken,
        timer: Arc<dyn Timer>,
        work_delay: Duration,
    ) -> Self {
        Self {
            id,
            jobs,
            stop,
            timer,
            work_delay,
            task_handle: None,
        }
    }

    /// Spawns the worker loop, emitting results on the given sender
    ///
    /// The stop branch of the select is checked first, so a stop delivered
    /// while a job is already waiting still wins: the worker exits without
    /// taking the job.
    pub fn start(&mut self, results: mpsc::Sender<JobResult>) {
        let id = self.id;
        let jobs = self.jobs.clone();
        let stop = self.stop.clone();
        let timer = self.timer.clone();
        let work_delay = self.work_delay;

        let handle = tokio::spawn(async move {
            loop {
                let job = {
                    let mut jobs = jobs.lock().await;
                    tokio::select! {
                        biased;
                        _ = stop.cancelled() => {
                            println!("Worker {} stopping", id);
                            return;
                        }
                        job = jobs.recv() => job,
                    }
                };

                // Queue closed and fully drained
                let Some(job) = job else { break };

                timer.sleep(work_delay).await;

                let result = JobResult::new(job.id, format!("processed: {}", job.data), id);
                if results.send(result).await.is_err() {
                    // Collector went away; nothing left to report to
                    return;
                }
                println!("Worker {} finished job {}", id, job.id);
            }
        });

        self.task_handle = Some(handle);
    }

    /// Requests this worker stop; jobs it has not taken stay in the queue
    pub fn stop(&self) {
        self.stop.cancel();
    }

    /// Waits for the worker task to complete
    pub async fn wait(self) -> Result<(), tokio::task::JoinError> {
        if let Some(handle) = self.task_handle {
            handle.await
        } else {
            Ok(())
        }
    }
}
