//! Frame Ticker: dedicated thread pacing layout recomputation.
//!
//! The ticker emits one [`FrameTick`] per frame interval over a small
//! bounded channel. Ticks never queue up: if the consumer falls behind,
//! stale ticks are dropped rather than delivered late, which keeps the
//! "at most one recomputation per frame" guarantee intact.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A frame boundary event.
#[derive(Debug, Clone, Copy)]
pub struct FrameTick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Ticker actor that emits frame boundaries at a fixed cadence.
pub struct FrameTicker {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for frame ticks.
    tick_rx: Receiver<FrameTick>,
}

impl FrameTicker {
    /// Spawn a ticker emitting `fps` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero or the OS fails to spawn the ticker thread.
    pub fn at_fps(fps: u32) -> Self {
        assert!(fps > 0, "frame rate must be non-zero");
        Self::spawn(Duration::from_secs(1) / fps)
    }

    /// Spawn a ticker with an explicit frame interval.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // One tick in flight is enough; anything more would deliver stale
        // frame boundaries.
        let (tick_tx, tick_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("marquee-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver.
    ///
    /// Use this with `select!` alongside the resize watcher:
    ///
    /// ```ignore
    /// loop {
    ///     select! {
    ///         recv(watcher.receiver()) -> _ => controller.notify_resize(),
    ///         recv(ticker.receiver()) -> _ => { controller.on_frame()?; }
    ///     }
    /// }
    /// ```
    pub const fn receiver(&self) -> &Receiver<FrameTick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<FrameTick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut deadline = start + interval;

        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            if now < deadline {
                thread::sleep((deadline - now).min(Duration::from_millis(1)));
                continue;
            }

            // Non-blocking send: a full buffer means the consumer still owes
            // a frame, so this boundary is dropped instead of queued.
            let _ = tick_tx.try_send(FrameTick {
                frame,
                elapsed: now - start,
            });

            frame += 1;
            deadline += interval;
            if deadline < now {
                // Fell behind; resynchronize instead of bursting
                deadline = now + interval;
            }
        }
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_delivers_frames() {
        let ticker = FrameTicker::spawn(Duration::from_millis(5));

        let first = ticker.receiver().recv_timeout(Duration::from_millis(200));
        assert!(first.is_ok());
        assert_eq!(first.unwrap().frame, 0);

        let second = ticker.receiver().recv_timeout(Duration::from_millis(200));
        assert!(second.is_ok());

        ticker.join();
    }

    #[test]
    fn test_ticker_shutdown_stops_thread() {
        let ticker = FrameTicker::at_fps(60);
        ticker.shutdown();
        thread::sleep(Duration::from_millis(40));
        ticker.join();
    }
}
