pub mod fan;
pub mod pipeline;

mod bounded_wait;
pub use bounded_wait::bounded_wait;

mod worker;
pub use worker::{SharedJobQueue, Worker};

mod pool;
pub use pool::WorkerPool;
