//! Resize Watcher: dedicated thread forwarding terminal resize events.
//!
//! The watcher polls crossterm for events and forwards only resize
//! notifications. Keyboard and mouse traffic is none of the layout
//! engine's business and is dropped at this boundary.

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Notifications from the viewport environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The viewport was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// The watcher thread hit an environment error.
    Error(String),
    /// The watcher thread is shutting down.
    Shutdown,
}

/// Watcher actor that polls terminal events and forwards resizes.
pub struct ResizeWatcher {
    /// Handle to the watcher thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for viewport events.
    event_rx: Receiver<ViewportEvent>,
}

impl ResizeWatcher {
    /// Spawn the watcher thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// re-checking the shutdown flag.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the watcher thread.
    pub fn spawn(poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let (event_tx, event_rx) = unbounded();

        let handle = thread::Builder::new()
            .name("marquee-resize".to_string())
            .spawn(move || {
                Self::run_loop(&event_tx, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn resize watcher thread");

        Self {
            handle: Some(handle),
            shutdown,
            event_rx,
        }
    }

    /// Get a reference to the event receiver.
    pub const fn receiver(&self) -> &Receiver<ViewportEvent> {
        &self.event_rx
    }

    /// Signal the watcher to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the watcher thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(
        event_tx: &Sender<ViewportEvent>,
        shutdown: &Arc<AtomicBool>,
        poll_timeout: Duration,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = event_tx.send(ViewportEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Resize(width, height)) => {
                        if event_tx
                            .send(ViewportEvent::Resize { width, height })
                            .is_err()
                        {
                            // Receiver dropped, exit
                            break;
                        }
                    }
                    // Not a resize: drop it
                    Ok(_) => {}
                    Err(e) => {
                        let _ = event_tx.send(ViewportEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, loop around to re-check shutdown
                }
                Err(e) => {
                    let _ = event_tx.send(ViewportEvent::Error(e.to_string()));
                }
            }
        }
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
