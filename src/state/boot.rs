//! Boot sequence: the one-shot timed transition from the loading splash to the
//! interactive shell.
//!
//! The delay runs on a background thread owned by a [`BootTimer`] handle.
//! Dropping the handle cancels the timer. The transition itself, including the
//! session marker write, only happens when the shell polls the handle on its
//! own thread, so a shell torn down before that point never becomes ready.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default delay before the shell becomes interactive.
pub const DEFAULT_BOOT_DELAY: Duration = Duration::from_millis(1200);

/// Callback invoked from the timer thread when the delay elapses.
/// The GUI passes a repaint request so the next frame picks up the change.
pub type Waker = Box<dyn Fn() + Send + 'static>;

/// Whether the loading splash or the shell is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellVisibility {
    Loading,
    Ready,
}

/// Discoverable "loaded" signal for external styling or analytics.
pub trait SessionMarker: Send + Sync {
    /// Records that the shell finished loading. Must tolerate repeated calls.
    fn mark_loaded(&self);
}

/// Default [`SessionMarker`]: an idempotent flag that logs the first write.
#[derive(Debug, Default)]
pub struct LoadedFlag {
    loaded: AtomicBool,
}

impl LoadedFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }
}

impl SessionMarker for LoadedFlag {
    fn mark_loaded(&self) {
        if !self.loaded.swap(true, Ordering::SeqCst) {
            tracing::info!("session marked app-loaded");
        }
    }
}

/// Cancellable one-shot timer.
///
/// The background thread waits on a cancellation channel with the delay as
/// timeout. Dropping the handle disconnects that channel, which wakes the
/// thread early and makes it exit without firing.
pub struct BootTimer {
    /// Held only so that dropping the handle disconnects the channel
    _cancel: Sender<()>,
    /// Receives one message when the delay elapsed
    fired: Receiver<()>,
    /// Latched once the fire message was received
    has_fired: bool,
}

impl BootTimer {
    /// Starts the timer.
    ///
    /// # Arguments
    /// * `delay` - Time until the timer fires
    /// * `waker` - Optional callback run on the timer thread when it fires
    pub fn start(delay: Duration, waker: Option<Waker>) -> Self {
        let (cancel_tx, cancel_rx) = channel::<()>();
        let (fired_tx, fired_rx) = channel::<()>();

        thread::spawn(move || {
            // Anything other than a timeout means the handle was dropped
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                if fired_tx.send(()).is_ok() {
                    if let Some(waker) = waker {
                        waker();
                    }
                }
            }
        });

        Self {
            _cancel: cancel_tx,
            fired: fired_rx,
            has_fired: false,
        }
    }

    /// Returns true once the delay has elapsed. Never blocks.
    pub fn has_fired(&mut self) -> bool {
        if !self.has_fired && self.fired.try_recv().is_ok() {
            self.has_fired = true;
        }
        self.has_fired
    }

    /// Blocks until the timer fires or `timeout` passes. Returns whether it fired.
    pub fn wait_timeout(&mut self, timeout: Duration) -> bool {
        if !self.has_fired && self.fired.recv_timeout(timeout).is_ok() {
            self.has_fired = true;
        }
        self.has_fired
    }
}

/// Owns the loading → ready transition.
pub struct ShellBootstrap {
    visibility: ShellVisibility,
    delay: Duration,
    timer: Option<BootTimer>,
    marker: Arc<dyn SessionMarker>,
}

impl std::fmt::Debug for ShellBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellBootstrap")
            .field("visibility", &self.visibility)
            .field("delay", &self.delay)
            .field("timer_running", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}

impl ShellBootstrap {
    /// Creates a bootstrap in the loading state and starts its timer.
    pub fn start(delay: Duration, marker: Arc<dyn SessionMarker>, waker: Option<Waker>) -> Self {
        tracing::info!(delay_ms = delay.as_millis() as u64, "shell booting");
        Self {
            visibility: ShellVisibility::Loading,
            delay,
            timer: Some(BootTimer::start(delay, waker)),
            marker,
        }
    }

    pub fn visibility(&self) -> ShellVisibility {
        self.visibility
    }

    pub fn is_loading(&self) -> bool {
        self.visibility == ShellVisibility::Loading
    }

    /// Checks the timer and performs the transition if it fired.
    ///
    /// Returns true only on the call that performed the transition.
    pub fn poll(&mut self) -> bool {
        let fired = self.timer.as_mut().is_some_and(BootTimer::has_fired);
        if fired {
            self.mark_ready();
        }
        fired
    }

    /// Blocks up to `timeout` for the timer, then transitions if it fired.
    pub fn wait_until_ready(&mut self, timeout: Duration) -> bool {
        if let Some(timer) = self.timer.as_mut() {
            if timer.wait_timeout(timeout) {
                self.mark_ready();
            }
        }
        !self.is_loading()
    }

    /// One-shot transition to ready. Later calls are no-ops.
    fn mark_ready(&mut self) {
        self.timer = None;
        if self.visibility == ShellVisibility::Ready {
            return;
        }
        self.visibility = ShellVisibility::Ready;
        self.marker.mark_loaded();
        tracing::info!("shell ready");
    }
}
