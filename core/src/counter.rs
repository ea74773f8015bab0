use std::sync::RwLock;

/// Shared integer guarded by a read/write lock
///
/// Increments take the write lock for the read-modify-write; reads take
/// the shared lock, so any number of readers proceed together while a
/// writer excludes everyone.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: RwLock<i64>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self {
            value: RwLock::new(0),
        }
    }

    /// Adds one under the write lock
    pub fn increment(&self) {
        let mut value = self.value.write().unwrap();
        *value += 1;
    }

    /// Returns the current value under the read lock
    pub fn value(&self) -> i64 {
        *self.value.read().unwrap()
    }
}
