//! Simulated latency
//!
//! Each request waits `base + (offset - sample)` milliseconds, where `sample`
//! is drawn uniformly from `[0, span)`. The result is clamped at zero, so a
//! sample larger than `base + offset` means "respond immediately".

use rand::Rng;
use std::time::Duration;

/// Default base delay in milliseconds
pub const DEFAULT_BASE_MS: u64 = 100;
/// Default offset added before subtracting the sample
pub const DEFAULT_OFFSET_MS: i64 = 5;
/// Default width of the sample range
pub const DEFAULT_SPAN_MS: u64 = 10;

/// Per-request delay model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    base_ms: u64,
    offset_ms: i64,
    span_ms: u64,
}

impl Default for Jitter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_MS, DEFAULT_OFFSET_MS, DEFAULT_SPAN_MS)
    }
}

impl Jitter {
    pub const fn new(base_ms: u64, offset_ms: i64, span_ms: u64) -> Self {
        Self {
            base_ms,
            offset_ms,
            span_ms,
        }
    }

    /// No delay at all
    pub const fn none() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn base_ms(&self) -> u64 {
        self.base_ms
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    pub fn span_ms(&self) -> u64 {
        self.span_ms
    }

    /// Delay for a given sample, clamped at zero
    pub fn delay_for(&self, sample: u64) -> Duration {
        let ms = i128::from(self.base_ms) + i128::from(self.offset_ms) - i128::from(sample);
        let ms = ms.clamp(0, i128::from(u64::MAX)) as u64;
        Duration::from_millis(ms)
    }

    /// Draw a sample from `[0, span)` and compute the delay for it
    pub fn sample_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.span_ms == 0 {
            return self.delay_for(0);
        }
        self.delay_for(rng.gen_range(0..self.span_ms))
    }

    /// Inclusive (min, max) of every delay `sample_delay` can return
    pub fn bounds(&self) -> (Duration, Duration) {
        let max = self.delay_for(0);
        let min = self.delay_for(self.span_ms.saturating_sub(1));
        (min, max)
    }
}
