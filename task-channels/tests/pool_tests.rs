use pipework_core::{Job, JobResult, NoopTimer};
use pipework_task_channels::WorkerPool;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn test_pool(num_workers: usize, capacity: usize) -> WorkerPool {
    WorkerPool::start(num_workers, capacity, Arc::new(NoopTimer), Duration::ZERO)
}

async fn submit_jobs(pool: &WorkerPool, count: u64) {
    for id in 1..=count {
        assert!(pool.submit(Job::new(id, format!("job-data-{}", id))).await);
    }
}

async fn drain(pool: &mut WorkerPool) -> Vec<JobResult> {
    let mut results = Vec::new();
    while let Some(result) = pool.next_result().await {
        results.push(result);
    }
    results
}

// ============================================================
// Completion: N jobs in, exactly N results out
// ============================================================

#[tokio::test]
async fn test_every_job_processed_exactly_once() {
    let mut pool = test_pool(4, 25);
    submit_jobs(&pool, 25).await;
    pool.close();

    let results = drain(&mut pool).await;
    pool.join().await;

    assert_eq!(results.len(), 25);
    let job_ids: HashSet<u64> = results.iter().map(|r| r.job_id).collect();
    assert_eq!(job_ids.len(), 25, "no job id may appear twice");
    assert!(job_ids.iter().all(|id| (1..=25).contains(id)));
    assert!(results.iter().all(|r| r.worker_id < 4));
}

#[tokio::test]
async fn test_no_jobs_produces_no_results() {
    let mut pool = test_pool(3, 0);
    pool.close();

    assert!(drain(&mut pool).await.is_empty());
    pool.join().await;
}

#[tokio::test]
async fn test_single_worker_preserves_submission_order() {
    let mut pool = test_pool(1, 10);
    submit_jobs(&pool, 10).await;
    pool.close();

    let results = drain(&mut pool).await;
    pool.join().await;

    let ids: Vec<u64> = results.iter().map(|r| r.job_id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_results_carry_worker_output() {
    let mut pool = test_pool(2, 3);
    submit_jobs(&pool, 3).await;
    pool.close();

    let results = drain(&mut pool).await;
    pool.join().await;

    let first = results.iter().find(|r| r.job_id == 1).unwrap();
    assert_eq!(first.output, "processed: job-data-1");
}

#[tokio::test]
async fn test_submit_after_close_is_rejected() {
    let mut pool = test_pool(1, 2);
    pool.close();

    assert!(!pool.submit(Job::new(1, "late")).await);
    assert!(drain(&mut pool).await.is_empty());
    pool.join().await;
}

// ============================================================
// Cancellation: a stopped worker takes no further jobs
// ============================================================

#[tokio::test]
async fn test_stopped_worker_takes_no_jobs() {
    let mut pool = test_pool(2, 20);
    pool.stop_worker(0);
    submit_jobs(&pool, 20).await;
    pool.close();

    let results = drain(&mut pool).await;
    pool.join().await;

    assert_eq!(results.len(), 20, "remaining worker must cover the queue");
    assert!(
        results.iter().all(|r| r.worker_id == 1),
        "stopped worker must not process jobs"
    );
}

#[tokio::test]
async fn test_stop_all_abandons_queued_jobs() {
    let mut pool = test_pool(3, 10);
    pool.stop();
    submit_jobs(&pool, 10).await;
    pool.close();

    let results = drain(&mut pool).await;
    pool.join().await;

    assert!(results.is_empty(), "stopped workers abandon queued jobs");
}
