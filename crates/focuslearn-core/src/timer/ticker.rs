//! Tick scheduling capability.
//!
//! The session timer does not own a clock. It asks a [`TickScheduler`] for a
//! registration when it starts and hands it back when it pauses; whoever
//! drives the application delivers the resulting ticks on a single logical
//! thread. Tests substitute [`ManualScheduler`] and call `tick()` directly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Opaque registration for an active repeating tick.
#[derive(Debug)]
pub struct TickHandle {
    stop: Arc<AtomicBool>,
}

/// Starts and cancels delivery of repeating ticks.
pub trait TickScheduler {
    /// Begin tick delivery. The registration stays live until cancelled.
    fn schedule(&mut self) -> TickHandle;

    /// Cancel a registration. A tick already in flight may still arrive;
    /// the timer drops it via its own registration guard.
    fn cancel(&mut self, handle: TickHandle);
}

/// Production scheduler: a background thread sleeps one period at a time and
/// sends a unit tick over a channel. The receiving side drains the channel
/// on its own thread, so all state mutation stays serialized.
///
/// Delivery is best-effort. A loaded host may delay ticks arbitrarily and
/// the countdown does not compensate with wall-clock arithmetic; slow ticks
/// stretch the session rather than skipping seconds.
pub struct IntervalScheduler {
    period: Duration,
    tx: mpsc::Sender<()>,
}

impl IntervalScheduler {
    /// Create a scheduler and the receiving end of its tick channel.
    pub fn new(period: Duration) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel();
        (Self { period, tx }, rx)
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule(&mut self) -> TickHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let tx = self.tx.clone();
        let period = self.period;
        thread::spawn(move || loop {
            thread::sleep(period);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            if tx.send(()).is_err() {
                break;
            }
        });
        TickHandle { stop }
    }

    fn cancel(&mut self, handle: TickHandle) {
        handle.stop.store(true, Ordering::Relaxed);
    }
}

/// Deterministic scheduler for tests: registrations are issued and cancelled
/// but no ticks are ever delivered. Tests drive `tick()` by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler;

impl ManualScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self) -> TickHandle {
        TickHandle {
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    fn cancel(&mut self, handle: TickHandle) {
        handle.stop.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_scheduler_delivers_and_cancels() {
        let (mut scheduler, rx) = IntervalScheduler::new(Duration::from_millis(5));
        let handle = scheduler.schedule();
        // At least one tick arrives while the registration is live.
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
        scheduler.cancel(handle);
        // Drain anything already in flight, then the channel goes quiet.
        while rx.recv_timeout(Duration::from_millis(50)).is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }
}
