//! Platform abstraction layer
//!
//! The browser hands `requestAnimationFrame` callbacks a monotonic timestamp;
//! `FrameClock` turns those into the elapsed milliseconds `sim::tick`
//! expects. Headless drivers pass a fixed frame length instead.

use crate::sim::sanitize_elapsed;

/// Converts successive monotonic timestamps into per-frame elapsed time
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Elapsed ms since the previous call. The first call returns 0.
    /// A timestamp that goes backwards yields 0 and becomes the new base.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let elapsed = match self.last_ms {
            Some(last) => sanitize_elapsed(now_ms - last),
            None => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        elapsed
    }
}
