//! Request pacing.
//!
//! Blocking delays that space out portal traffic. Execution is
//! single-threaded and synchronous; `pause` simply returns once the delay
//! has elapsed. No cancellation or timeout semantics.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

/// Delay policy applied before portal requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep for a fixed duration
    Fixed(Duration),
    /// Sleep for a uniformly random duration in `[min_ms, max_ms]`
    Jittered { min_ms: u64, max_ms: u64 },
    /// No delay (tests)
    Disabled,
}

impl Pacing {
    /// Default pacing for portal fetches: 1.0-3.0s of jitter.
    pub fn portal_default() -> Self {
        Pacing::Jittered {
            min_ms: 1_000,
            max_ms: 3_000,
        }
    }

    /// The delay this policy would apply right now, if any.
    fn delay(&self) -> Option<Duration> {
        match self {
            Pacing::Fixed(d) => Some(*d),
            Pacing::Jittered { min_ms, max_ms } => {
                let ms = rand::thread_rng().gen_range(*min_ms..=*max_ms);
                Some(Duration::from_millis(ms))
            }
            Pacing::Disabled => None,
        }
    }

    /// Block the current thread for this policy's delay.
    pub fn pause(&self) {
        if let Some(delay) = self.delay() {
            debug!(delay_ms = delay.as_millis() as u64, "pacing delay");
            thread::sleep(delay);
        }
    }
}
