use chrono::{DateTime, Local};

/// Time source for the scheduler's "today at HH:MM" default start.
/// Injected so tests can pin the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
