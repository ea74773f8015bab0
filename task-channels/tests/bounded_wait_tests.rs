use pipework_core::WaitError;
use pipework_task_channels::bounded_wait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

// All tests run on the paused tokio clock, so the deadline races are
// deterministic and take no wall time.

#[tokio::test(start_paused = true)]
async fn test_fast_work_beats_the_deadline() {
    let result = bounded_wait(Duration::from_secs(3), async {
        sleep(Duration::from_secs(2)).await;
        "work completed"
    })
    .await;

    assert_eq!(result.unwrap(), "work completed");
}

#[tokio::test(start_paused = true)]
async fn test_slow_work_times_out() {
    let limit = Duration::from_secs(1);
    let result = bounded_wait(limit, async {
        sleep(Duration::from_secs(2)).await;
        "too late"
    })
    .await;

    assert_eq!(result.unwrap_err(), WaitError::Timeout(limit));
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_work_keeps_running() {
    let finished = Arc::new(AtomicBool::new(false));

    let flag = finished.clone();
    let result = bounded_wait(Duration::from_millis(100), async move {
        sleep(Duration::from_millis(200)).await;
        flag.store(true, Ordering::SeqCst);
    })
    .await;

    assert!(matches!(result, Err(WaitError::Timeout(_))));
    assert!(!finished.load(Ordering::SeqCst));

    // The losing task was abandoned, not cancelled: it finishes on its
    // own schedule and its output is discarded
    sleep(Duration::from_millis(200)).await;
    assert!(finished.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_panicked_work_reports_failure() {
    let result: Result<(), WaitError> = bounded_wait(Duration::from_secs(1), async {
        panic!("worker blew up");
    })
    .await;

    assert!(matches!(result, Err(WaitError::Failed(_))));
}
