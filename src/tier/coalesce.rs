//! FrameCoalescer: collapse bursts of signals into one run per frame.
//!
//! This is a debounce aligned to frame cadence, not a fixed-delay debounce:
//! a newer trigger supersedes the pending one, and whatever is pending when
//! the next frame boundary arrives runs exactly once. The coalescer holds
//! plain state and is driven externally, so the frame source can be a
//! display ticker, a timer, or a manual pump in tests.

/// Coalesces high-frequency triggers into at most one pending payload.
///
/// `trigger` never blocks; the payload is consumed later, at the frame
/// boundary, via [`FrameCoalescer::take`].
#[derive(Debug, Default)]
pub struct FrameCoalescer<T> {
    /// Latest pending payload; a newer trigger replaces it.
    pending: Option<T>,
    /// Total triggers observed.
    triggers: u64,
    /// Total payloads consumed at frame boundaries.
    runs: u64,
}

impl<T> FrameCoalescer<T> {
    /// Create an empty coalescer.
    pub const fn new() -> Self {
        Self {
            pending: None,
            triggers: 0,
            runs: 0,
        }
    }

    /// Record a signal, superseding any not-yet-consumed payload.
    pub fn trigger(&mut self, payload: T) {
        self.triggers += 1;
        self.pending = Some(payload);
    }

    /// Consume the pending payload at a frame boundary.
    ///
    /// Returns `None` when no trigger arrived since the last frame. For any
    /// burst of N triggers within one frame window this yields exactly one
    /// payload: the one from the latest trigger.
    pub fn take(&mut self) -> Option<T> {
        let payload = self.pending.take();
        if payload.is_some() {
            self.runs += 1;
        }
        payload
    }

    /// Discard any pending payload without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a payload is waiting for the next frame boundary.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total triggers observed since creation.
    pub const fn triggers(&self) -> u64 {
        self.triggers
    }

    /// Total payloads consumed since creation.
    pub const fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_runs_once_with_latest_payload() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.trigger(1);
        coalescer.trigger(2);
        coalescer.trigger(3);

        assert_eq!(coalescer.take(), Some(3));
        assert_eq!(coalescer.take(), None);
        assert_eq!(coalescer.triggers(), 3);
        assert_eq!(coalescer.runs(), 1);
    }

    #[test]
    fn test_idle_frame_runs_nothing() {
        let mut coalescer: FrameCoalescer<u16> = FrameCoalescer::new();
        assert_eq!(coalescer.take(), None);
        assert_eq!(coalescer.runs(), 0);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.trigger("resize");
        assert!(coalescer.is_pending());

        coalescer.cancel();
        assert!(!coalescer.is_pending());
        assert_eq!(coalescer.take(), None);
        assert_eq!(coalescer.runs(), 0);
    }

    #[test]
    fn test_triggers_across_frames_run_separately() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.trigger(10);
        assert_eq!(coalescer.take(), Some(10));

        coalescer.trigger(20);
        coalescer.trigger(30);
        assert_eq!(coalescer.take(), Some(30));
        assert_eq!(coalescer.runs(), 2);
    }
}
