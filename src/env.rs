//! Viewport environment: where width readings and resize events come from.
//!
//! The controller never talks to the display surface directly; it is handed
//! a [`Viewport`] implementation. Production code uses [`TerminalViewport`]
//! (crossterm), tests and demos use [`FixedViewport`] so resizes can be
//! scripted deterministically.

use crate::actor::{ResizeWatcher, ViewportEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::terminal;
use std::io;
use std::time::Duration;

/// A source of viewport width readings and resize notifications.
///
/// Width is read synchronously at classification time; implementations must
/// not serve a stale cached value. Each controller holds exactly one resize
/// subscription, taken on mount and released on unmount.
pub trait Viewport {
    /// Read the current viewport width in columns.
    fn width(&mut self) -> io::Result<u16>;

    /// Subscribe to resize notifications.
    fn subscribe_resize(&mut self) -> Receiver<ViewportEvent>;

    /// Tear down the resize subscription.
    fn unsubscribe_resize(&mut self);
}

/// Production viewport backed by the terminal.
///
/// Width comes from `crossterm::terminal::size()`; resize notifications come
/// from a dedicated [`ResizeWatcher`] thread spawned on subscription and
/// joined on unsubscription.
pub struct TerminalViewport {
    /// Watcher thread, live while subscribed.
    watcher: Option<ResizeWatcher>,
    /// Poll timeout handed to the watcher.
    poll_timeout: Duration,
}

impl Default for TerminalViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalViewport {
    /// Create a terminal viewport with the default poll timeout.
    pub const fn new() -> Self {
        Self {
            watcher: None,
            poll_timeout: Duration::from_millis(10),
        }
    }

    /// Create a terminal viewport with a custom watcher poll timeout.
    pub const fn with_poll_timeout(poll_timeout: Duration) -> Self {
        Self {
            watcher: None,
            poll_timeout,
        }
    }
}

impl Viewport for TerminalViewport {
    fn width(&mut self) -> io::Result<u16> {
        let (width, _height) = terminal::size()?;
        Ok(width)
    }

    fn subscribe_resize(&mut self) -> Receiver<ViewportEvent> {
        let watcher = self
            .watcher
            .get_or_insert_with(|| ResizeWatcher::spawn(self.poll_timeout));
        watcher.receiver().clone()
    }

    fn unsubscribe_resize(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.join();
        }
    }
}

/// Scriptable viewport for tests and demos.
///
/// [`FixedViewport::set_width`] changes the reading and, while subscribed,
/// emits a matching resize event.
#[derive(Debug)]
pub struct FixedViewport {
    width: u16,
    height: u16,
    resize_tx: Option<Sender<ViewportEvent>>,
    subscriptions: u32,
    unsubscriptions: u32,
}

impl FixedViewport {
    /// Create a fixed viewport with the given initial width.
    pub const fn new(width: u16) -> Self {
        Self {
            width,
            height: 24,
            resize_tx: None,
            subscriptions: 0,
            unsubscriptions: 0,
        }
    }

    /// Change the viewport width, emitting a resize event while subscribed.
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
        if let Some(tx) = &self.resize_tx {
            let _ = tx.send(ViewportEvent::Resize {
                width,
                height: self.height,
            });
        }
    }

    /// Change the width without emitting a resize event, as if the reading
    /// drifted between notifications.
    pub const fn width_only(&mut self, width: u16) {
        self.width = width;
    }

    /// Number of times `subscribe_resize` was called.
    pub const fn subscriptions(&self) -> u32 {
        self.subscriptions
    }

    /// Number of times `unsubscribe_resize` was called.
    pub const fn unsubscriptions(&self) -> u32 {
        self.unsubscriptions
    }

    /// Whether a resize subscription is currently held.
    pub const fn is_subscribed(&self) -> bool {
        self.resize_tx.is_some()
    }
}

impl Viewport for FixedViewport {
    fn width(&mut self) -> io::Result<u16> {
        Ok(self.width)
    }

    fn subscribe_resize(&mut self) -> Receiver<ViewportEvent> {
        self.subscriptions += 1;
        let (tx, rx) = unbounded();
        self.resize_tx = Some(tx);
        rx
    }

    fn unsubscribe_resize(&mut self) {
        self.unsubscriptions += 1;
        self.resize_tx = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_viewport_reports_width() {
        let mut viewport = FixedViewport::new(640);
        assert_eq!(viewport.width().unwrap(), 640);

        viewport.set_width(1024);
        assert_eq!(viewport.width().unwrap(), 1024);
    }

    #[test]
    fn test_fixed_viewport_emits_resize_while_subscribed() {
        let mut viewport = FixedViewport::new(640);

        // No subscription yet: width changes are silent
        viewport.set_width(700);

        let rx = viewport.subscribe_resize();
        assert!(viewport.is_subscribed());
        viewport.set_width(820);
        assert_eq!(
            rx.try_recv().unwrap(),
            ViewportEvent::Resize {
                width: 820,
                height: 24
            }
        );

        viewport.unsubscribe_resize();
        assert!(!viewport.is_subscribed());
        viewport.set_width(500);
        assert!(rx.try_recv().is_err());
        assert_eq!(viewport.subscriptions(), 1);
        assert_eq!(viewport.unsubscriptions(), 1);
    }
}
