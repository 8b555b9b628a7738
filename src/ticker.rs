//! Bookkeeping for the repeating timer behind the simulated processing loop.
//!
//! The driver owns at most one timer handle. Dropping a handle is what
//! cancels the underlying timer (as with `gloo_timers::callback::Interval`),
//! so arming always drops the previous handle before creating the next.

use crate::ProcessingStatus;
use log::debug;

struct ArmedTimer<H> {
    rate: u64,
    _handle: H,
}

/// Holds the live timer handle for the processing loop, if any.
pub struct TickDriver<H> {
    armed: Option<ArmedTimer<H>>,
}

impl<H> Default for TickDriver<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TickDriver<H> {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Bring the timer in line with the current run mode and rate.
    ///
    /// While running, `arm` is called with the rate the new timer should
    /// report, but only when no timer is live or the live one was armed with
    /// a different rate. When stopped, the live timer is dropped.
    ///
    /// Returns `true` if a new timer was armed.
    pub fn sync<F>(&mut self, status: ProcessingStatus, rate: u64, arm: F) -> bool
    where
        F: FnOnce(u64) -> H,
    {
        match status {
            ProcessingStatus::Running => {
                if self.armed_rate() == Some(rate) {
                    return false;
                }
                self.disarm();
                let handle = arm(rate);
                self.armed = Some(ArmedTimer {
                    rate,
                    _handle: handle,
                });
                debug!("Processing timer armed at {} tickets per tick", rate);
                true
            }
            ProcessingStatus::Stopped => {
                self.disarm();
                false
            }
        }
    }

    /// Drop the live timer. Returns `true` if one was live.
    pub fn disarm(&mut self) -> bool {
        match self.armed.take() {
            Some(timer) => {
                debug!("Processing timer disarmed (rate {})", timer.rate);
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Rate captured by the live timer.
    pub fn armed_rate(&self) -> Option<u64> {
        self.armed.as_ref().map(|timer| timer.rate)
    }
}
