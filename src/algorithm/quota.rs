use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Checked by the colony between iterations, never during construction.
pub trait Quota {
    fn is_reached(&self) -> bool;
}

pub struct TimeQuota {
    deadline: Instant,
}

impl TimeQuota {
    pub fn new(limit: Duration) -> Self {
        TimeQuota { deadline: Instant::now() + limit }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Optional time limit plus a flag raised from outside the run, e.g. by a
/// signal handler.
pub struct InterruptionQuota {
    inner: Option<TimeQuota>,
    should_interrupt: Arc<AtomicBool>,
}

impl InterruptionQuota {
    pub fn new(limit: Option<Duration>, should_interrupt: Arc<AtomicBool>) -> Self {
        InterruptionQuota { inner: limit.map(TimeQuota::new), should_interrupt }
    }
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().map_or(false, |inner| inner.is_reached())
            || self.should_interrupt.load(Ordering::Relaxed)
    }
}
