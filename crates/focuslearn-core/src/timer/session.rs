//! Countdown session state machine.
//!
//! The timer counts delivered ticks rather than wall-clock time. It does not
//! own a thread - the scheduling capability handed to it at construction
//! delivers ticks, and the caller forwards each one to `tick()`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle            (pause, counter preserved)
//!         Running -> Idle            (completion, counter reset to full)
//! ```
//!
//! Completion is detected on the tick delivered after the counter reaches
//! zero, not the tick that reaches it: `tick()` checks the counter before
//! decrementing, so a full session consumes `total_seconds + 1` deliveries.
//! This mirrors the shipped behavior and is deliberate; "fixing" it would
//! shorten every session by one second of real time.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ticker::{TickHandle, TickScheduler};
use crate::events::Event;

/// Minutes credited to the daily total for one completed session.
pub const REWARD_MINUTES: u32 = 25;

/// XP granted for one completed session.
pub const REWARD_XP: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Core countdown timer.
///
/// Holds a tick registration iff it is running; a tick that arrives without
/// a live registration (cancellation racing a delivery) is dropped.
pub struct SessionTimer {
    state: TimerState,
    seconds_remaining: u32,
    total_seconds: u32,
    scheduler: Box<dyn TickScheduler>,
    ticket: Option<TickHandle>,
}

impl SessionTimer {
    /// Create an idle timer with a full countdown.
    ///
    /// The session length is fixed for the lifetime of the timer.
    pub fn new(total_seconds: u32, scheduler: Box<dyn TickScheduler>) -> Self {
        let total_seconds = total_seconds.max(1);
        Self {
            state: TimerState::Idle,
            seconds_remaining: total_seconds,
            total_seconds,
            scheduler,
            ticket: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// 0.0 .. 1.0 elapsed-time ratio of the current session.
    pub fn progress(&self) -> f64 {
        1.0 - f64::from(self.seconds_remaining) / f64::from(self.total_seconds)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin (or resume) the countdown.
    ///
    /// Idempotent while running: repeated calls return `None` and register
    /// nothing, guarded by the state rather than by debouncing.
    pub fn start(&mut self) -> Option<Event> {
        if self.state == TimerState::Running {
            return None; // Already running.
        }
        self.ticket = Some(self.scheduler.schedule());
        self.state = TimerState::Running;
        Some(Event::SessionStarted {
            seconds_remaining: self.seconds_remaining,
            total_seconds: self.total_seconds,
            at: Utc::now(),
        })
    }

    /// Stop the countdown, preserving the remaining time.
    ///
    /// A later `start()` resumes from exactly where the pause left off.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        if let Some(ticket) = self.ticket.take() {
            self.scheduler.cancel(ticket);
        }
        self.state = TimerState::Idle;
        Some(Event::SessionPaused {
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Deliver one scheduler tick.
    ///
    /// Returns a tick event while the counter is above zero, a completion
    /// event on the delivery after it reaches zero, and `None` when no
    /// registration is live.
    pub fn tick(&mut self) -> Option<Event> {
        self.ticket.as_ref()?;
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            Some(Event::SessionTick {
                seconds_remaining: self.seconds_remaining,
                progress: self.progress(),
                at: Utc::now(),
            })
        } else {
            self.complete()
        }
    }

    /// Force the countdown back to its full duration without starting it.
    ///
    /// Used when a session view is (re)opened. The running state and any
    /// live registration are left untouched.
    pub fn reset(&mut self) -> Option<Event> {
        self.seconds_remaining = self.total_seconds;
        Some(Event::SessionReset {
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete(&mut self) -> Option<Event> {
        let _ = self.pause();
        self.seconds_remaining = self.total_seconds;
        Some(Event::SessionCompleted {
            reward_minutes: REWARD_MINUTES,
            reward_xp: REWARD_XP,
            at: Utc::now(),
        })
    }
}
