//! Elapsed-time tracking utility: a running mean of `(start, end)`
//! interval durations, in microseconds.
//!
//! Only available under the `std` feature -- there is no portable
//! `no_std` wall-clock
//! source, and this is a thin convenience utility sitting outside the
//! numeric core, not something a `no_std` caller of the wavelet
//! transforms needs.

use std::eprintln;
use std::time::Instant;

/// Invariant violations: starting twice without an intervening `end`,
/// or ending without a matching `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingError {
    AlreadyStarted,
    NotStarted,
}

/// A running mean of elapsed-interval durations, updated incrementally
/// via `mean += (x - mean) / n` -- the same formula
/// `tracking_end` uses, verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Tracking {
    n: u64,
    mean_us: f64,
    start: Option<Instant>,
}

impl Default for Tracking {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracking {
    pub fn new() -> Self {
        Tracking {
            n: 0,
            mean_us: 0.0,
            start: None,
        }
    }

    /// Begins timing an interval. Fails if a `start` is already pending.
    pub fn start(&mut self) -> Result<(), TrackingError> {
        if self.start.is_some() {
            return Err(TrackingError::AlreadyStarted);
        }
        self.start = Some(Instant::now());
        Ok(())
    }

    /// Ends the pending interval and folds its duration into the
    /// running mean. Fails if no `start` is pending.
    pub fn end(&mut self) -> Result<(), TrackingError> {
        let started = self.start.take().ok_or(TrackingError::NotStarted)?;
        let elapsed_us = started.elapsed().as_secs_f64() * 1_000_000.0;
        self.n += 1;
        let delta = elapsed_us - self.mean_us;
        self.mean_us += delta / self.n as f64;
        Ok(())
    }

    /// Number of completed `(start, end)` samples folded into the mean.
    pub fn samples(&self) -> u64 {
        self.n
    }

    /// Running mean elapsed time per sample, in microseconds.
    pub fn mean(&self) -> f64 {
        self.mean_us
    }

    /// Prints `"{label} mean time: {mean:.3} us ({n} samples)"` to
    /// stderr, matching `tracking_print`'s format.
    pub fn print(&self, label: &str) {
        eprintln!(
            "{} mean time: {:.3} us ({} samples)",
            label, self.mean_us, self.n
        );
    }
}
