//! Tier Controller: owns the current layout tier and reacts to resizes.
//!
//! The controller starts `Uninitialized`; [`TierController::mount`]
//! classifies the current viewport width, enters `Ready`, and takes the
//! environment's resize subscription. Resize signals only arm the
//! coalescer; the actual reclassification happens on the next call to
//! [`TierController::on_frame`], and subscribers hear about it only when
//! the tier actually changed.

use super::breakpoints::{Breakpoints, LayoutTier};
use super::coalesce::FrameCoalescer;
use crate::actor::ViewportEvent;
use crate::env::Viewport;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::io;

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TierState {
    /// No classification has happened yet.
    Uninitialized,
    /// A tier is held and kept current across resizes.
    Ready(LayoutTier),
}

/// Reactive owner of the current layout tier.
pub struct TierController<V: Viewport> {
    /// Environment supplying width readings and resize events.
    viewport: V,
    /// Classification thresholds.
    breakpoints: Breakpoints,
    /// Lifecycle state.
    state: TierState,
    /// Pending-recomputation slot, armed by resize signals.
    coalescer: FrameCoalescer<()>,
    /// Resize subscription, held between mount and unmount.
    resize_rx: Option<Receiver<ViewportEvent>>,
    /// Tier-change subscribers.
    subscribers: Vec<Sender<LayoutTier>>,
}

impl<V: Viewport> TierController<V> {
    /// Create a controller over the given viewport with default breakpoints.
    pub fn new(viewport: V) -> Self {
        Self::with_breakpoints(viewport, Breakpoints::default())
    }

    /// Create a controller with custom breakpoints.
    pub const fn with_breakpoints(viewport: V, breakpoints: Breakpoints) -> Self {
        Self {
            viewport,
            breakpoints,
            state: TierState::Uninitialized,
            coalescer: FrameCoalescer::new(),
            resize_rx: None,
            subscribers: Vec::new(),
        }
    }

    /// Classify the current width, enter `Ready`, and subscribe to resizes.
    ///
    /// Subscribers are notified of the initial tier. Mounting an already
    /// mounted controller reclassifies without taking a second
    /// subscription.
    ///
    /// # Errors
    ///
    /// Propagates a failed viewport width read; the controller stays in its
    /// previous state and no notification is sent.
    pub fn mount(&mut self) -> io::Result<LayoutTier> {
        let tier = self.classify_now()?;
        if self.resize_rx.is_none() {
            self.resize_rx = Some(self.viewport.subscribe_resize());
        }
        self.apply(tier);
        Ok(tier)
    }

    /// Record a resize signal, superseding any pending recomputation.
    ///
    /// Never blocks and performs no classification; the work happens at the
    /// next frame boundary.
    pub fn notify_resize(&mut self) {
        self.coalescer.trigger(());
    }

    /// Run one frame boundary.
    ///
    /// Drains the resize subscription (each event arms the coalescer), then
    /// performs at most one reclassification. Returns the new tier when it
    /// changed, `None` when nothing was pending or the tier is unchanged.
    ///
    /// # Errors
    ///
    /// Propagates a failed viewport width read; the held tier is left
    /// untouched and subscribers are not notified.
    pub fn on_frame(&mut self) -> io::Result<Option<LayoutTier>> {
        self.drain_resize_events();

        if self.coalescer.take().is_none() {
            return Ok(None);
        }

        let tier = self.classify_now()?;
        if self.state == TierState::Ready(tier) {
            // Unchanged: no transition, no downstream recomposition
            return Ok(None);
        }

        self.apply(tier);
        Ok(Some(tier))
    }

    /// Subscribe to tier changes.
    ///
    /// While `Ready`, the current tier is delivered immediately; while
    /// `Uninitialized`, nothing is delivered until the first
    /// classification.
    pub fn subscribe(&mut self) -> Receiver<LayoutTier> {
        let (tx, rx) = unbounded();
        if let TierState::Ready(tier) = self.state {
            let _ = tx.send(tier);
        }
        self.subscribers.push(tx);
        rx
    }

    /// The currently held tier, or `None` before the first classification.
    pub const fn tier(&self) -> Option<LayoutTier> {
        match self.state {
            TierState::Uninitialized => None,
            TierState::Ready(tier) => Some(tier),
        }
    }

    /// Whether the resize subscription is currently held.
    pub const fn is_mounted(&self) -> bool {
        self.resize_rx.is_some()
    }

    /// Tear down: release the subscription and cancel pending work.
    ///
    /// Terminal for the subscription side; no notification can reach
    /// subscribers afterwards. The held tier remains readable.
    pub fn unmount(&mut self) {
        self.viewport.unsubscribe_resize();
        self.resize_rx = None;
        self.coalescer.cancel();
        self.subscribers.clear();
    }

    /// Borrow the underlying viewport.
    pub const fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Borrow the underlying viewport mutably.
    pub const fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Read the width and classify it. The width is read at call time, not
    /// taken from any resize event payload.
    fn classify_now(&mut self) -> io::Result<LayoutTier> {
        let width = self.viewport.width()?;
        Ok(self.breakpoints.classify(width))
    }

    /// Move resize events from the subscription into the coalescer.
    fn drain_resize_events(&mut self) {
        let Some(rx) = &self.resize_rx else {
            return;
        };
        let mut resized = false;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, ViewportEvent::Resize { .. }) {
                resized = true;
            }
        }
        if resized {
            self.coalescer.trigger(());
        }
    }

    /// Hold a new tier and notify live subscribers.
    fn apply(&mut self, tier: LayoutTier) {
        self.state = TierState::Ready(tier);
        self.subscribers.retain(|tx| tx.send(tier).is_ok());
    }
}
