use clap::Parser;
use pipework_core::{Job, SharedCounter, TokioTimer, WaitError};
use pipework_task_channels::{bounded_wait, fan, pipeline, WorkerPool};
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};

const NUM_WORKERS: usize = 3;
const FAN_REPLICAS: usize = 3;
const COUNTER_TASKS: usize = 10;
const INCREMENTS_PER_TASK: usize = 100;

#[derive(Parser)]
#[command(about = "Channel concurrency patterns demo")]
struct Args {
    /// Path to the demo configuration file
    #[arg(long, default_value = "config.json")]
    config: String,
}

#[derive(Debug, Deserialize)]
struct Config {
    num_jobs: u64,
    payload_length: usize,
    work_ms: u64,
    pipeline_max: u64,
    fan_source_max: u64,
    fan_work_ms: u64,
    slow_work_ms: u64,
    short_timeout_ms: u64,
    long_timeout_ms: u64,
}

impl Config {
    fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Generate a random lowercase payload of `length` characters
fn random_payload(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| {
            let c = rng.random_range(b'a'..=b'z');
            c as char
        })
        .collect()
}

async fn worker_pool_demo(config: &Config) {
    println!("\n--- Worker Pool ---");

    let mut pool = WorkerPool::start(
        NUM_WORKERS,
        config.num_jobs as usize,
        Arc::new(TokioTimer),
        Duration::from_millis(config.work_ms),
    );

    // Ctrl+C stops the pool; queued jobs are abandoned
    let stop_token = pool.stop_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nCtrl+C received, stopping workers");
            stop_token.cancel();
        }
    });

    let payloads: Vec<String> = {
        let mut rng = rand::rng();
        (0..config.num_jobs)
            .map(|_| random_payload(&mut rng, config.payload_length))
            .collect()
    };

    for (i, payload) in payloads.into_iter().enumerate() {
        if !pool.submit(Job::new(i as u64 + 1, payload)).await {
            break;
        }
    }
    pool.close();

    while let Some(result) = pool.next_result().await {
        println!(
            "Result: job {} -> {} (worker {})",
            result.job_id, result.output, result.worker_id
        );
    }
    pool.join().await;
}

async fn pipeline_demo(config: &Config) {
    println!("\n--- Pipeline ---");

    let numbers = pipeline::generate(config.pipeline_max);
    let squared = pipeline::map_stage(numbers, |n| n * n);
    let mut evens = pipeline::filter_stage(squared, |n| n % 2 == 0);

    print!("Even squares: ");
    while let Some(value) = evens.recv().await {
        print!("{} ", value);
    }
    println!();
}

async fn fan_demo(config: &Config) {
    println!("\n--- Fan-out / Fan-in ---");

    let input = pipeline::generate(config.fan_source_max);
    let branches = fan::fan_out(
        input,
        FAN_REPLICAS,
        Arc::new(TokioTimer),
        Duration::from_millis(config.fan_work_ms),
        |n| n * 2,
    );
    let mut merged = fan::fan_in(branches);

    print!("Doubled: ");
    while let Some(value) = merged.recv().await {
        print!("{} ", value);
    }
    println!();
}

async fn counter_demo() {
    println!("\n--- Guarded Counter ---");

    let counter = Arc::new(SharedCounter::new());

    let mut handles = Vec::new();
    for task_id in 0..COUNTER_TASKS {
        let counter = counter.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..INCREMENTS_PER_TASK {
                counter.increment();
            }
            println!("Task {} finished incrementing", task_id);
        }));
    }
    for handle in handles {
        if let Err(e) = handle.await {
            eprintln!("Increment task failed: {}", e);
        }
    }

    println!("Final counter value: {}", counter.value());
}

async fn slow_work(duration: Duration) -> String {
    tokio::time::sleep(duration).await;
    "work completed".to_string()
}

async fn bounded_wait_demo(config: &Config) {
    println!("\n--- Bounded Wait ---");

    let work_duration = Duration::from_millis(config.slow_work_ms);

    for timeout_ms in [config.short_timeout_ms, config.long_timeout_ms] {
        let limit = Duration::from_millis(timeout_ms);
        match bounded_wait(limit, slow_work(work_duration)).await {
            Ok(message) => println!("Success: {}", message),
            Err(e @ WaitError::Timeout(_)) => println!("Error: {}", e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

#[tokio::main]
async fn main() {
    let start_time = Instant::now();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.config, e);
            eprintln!("Using default configuration...");
            Config {
                num_jobs: 10,
                payload_length: 8,
                work_ms: 100,
                pipeline_max: 10,
                fan_source_max: 5,
                fan_work_ms: 50,
                slow_work_ms: 2000,
                short_timeout_ms: 1000,
                long_timeout_ms: 3000,
            }
        }
    };

    println!("=== CHANNEL CONCURRENCY PATTERNS ===");
    println!("Configuration:");
    println!("  - Jobs: {} across {} workers", config.num_jobs, NUM_WORKERS);
    println!("  - Pipeline range: 1..={}", config.pipeline_max);
    println!(
        "  - Fan range: 1..={} across {} replicas",
        config.fan_source_max, FAN_REPLICAS
    );
    println!(
        "  - Counter: {} tasks x {} increments",
        COUNTER_TASKS, INCREMENTS_PER_TASK
    );

    worker_pool_demo(&config).await;
    pipeline_demo(&config).await;
    fan_demo(&config).await;
    counter_demo().await;
    bounded_wait_demo(&config).await;

    let elapsed = start_time.elapsed();
    println!("\n=== DEMO COMPLETE ===");
    println!("Total time: {:.2}s", elapsed.as_secs_f64());
}
