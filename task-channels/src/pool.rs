use crate::worker::{SharedJobQueue, Worker};
use pipework_core::{Job, JobResult, Timer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

/// Fixed-size worker pool over a single multi-consumer job queue
///
/// Every worker holds a clone of the result sender; the result stream
/// closes when the last worker exits, so a consumer draining with
/// `next_result` can never block past pool completion.
pub struct WorkerPool {
    jobs_tx: Option<mpsc::Sender<Job>>,
    results_rx: mpsc::Receiver<JobResult>,
    workers: Vec<Worker>,
    stop_token: CancellationToken,
}

impl WorkerPool {
    /// Spawns `num_workers` workers sharing one job queue
    ///
    /// `capacity` bounds both the job and result queues. A submitter that
    /// enqueues more than `capacity` jobs before draining any results
    /// will block until a slot frees up.
    pub fn start(
        num_workers: usize,
        capacity: usize,
        timer: Arc<dyn Timer>,
        work_delay: Duration,
    ) -> Self {
        let capacity = capacity.max(1);
        let (jobs_tx, jobs_rx) = mpsc::channel(capacity);
        let (results_tx, results_rx) = mpsc::channel(capacity);
        let shared_jobs: SharedJobQueue = Arc::new(Mutex::new(jobs_rx));
        let stop_token = CancellationToken::new();

        let mut workers = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            let mut worker = Worker::new(
                worker_id,
                shared_jobs.clone(),
                stop_token.child_token(),
                timer.clone(),
                work_delay,
            );
            worker.start(results_tx.clone());
            workers.push(worker);
        }
        // The workers now hold the only result senders; the channel
        // closes once all of them have exited.
        drop(results_tx);

        Self {
            jobs_tx: Some(jobs_tx),
            results_rx,
            workers,
            stop_token,
        }
    }

    /// Enqueues a job; returns false once the queue is closed
    pub async fn submit(&self, job: Job) -> bool {
        match &self.jobs_tx {
            Some(tx) => tx.send(job).await.is_ok(),
            None => false,
        }
    }

    /// Closes the job queue; workers exit once it is drained
    pub fn close(&mut self) {
        self.jobs_tx.take();
    }

    /// Receives the next result
    ///
    /// Returns None only after the job queue was closed and every worker
    /// has exited.
    pub async fn next_result(&mut self) -> Option<JobResult> {
        self.results_rx.recv().await
    }

    /// Returns the token controlling all workers, for external wiring
    pub fn stop_token(&self) -> CancellationToken {
        self.stop_token.clone()
    }

    /// Requests a single worker stop; jobs it has not taken stay in the
    /// queue for the remaining workers
    pub fn stop_worker(&self, index: usize) {
        if let Some(worker) = self.workers.get(index) {
            worker.stop();
        }
    }

    /// Requests every worker stop; jobs still in the queue are abandoned
    pub fn stop(&self) {
        self.stop_token.cancel();
    }

    /// Waits for all workers to fully shut down
    pub async fn join(self) {
        for (worker_id, worker) in self.workers.into_iter().enumerate() {
            if let Err(e) = worker.wait().await {
                eprintln!("Worker {} task failed: {}", worker_id, e);
            }
        }
    }
}
