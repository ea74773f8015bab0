mod job;
pub use job::{Job, JobResult};

mod counter;
pub use counter::SharedCounter;

mod error;
pub use error::WaitError;

pub mod timer;
pub use timer::Timer;

pub mod tokio_timer;
pub use tokio_timer::TokioTimer;

pub mod noop_timer;
pub use noop_timer::NoopTimer;
