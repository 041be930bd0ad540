use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the core produces an Event.
/// The application context translates events into presenter notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        seconds_remaining: u32,
        total_seconds: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    /// One second elapsed on a running session.
    SessionTick {
        seconds_remaining: u32,
        /// Elapsed-time ratio in [0, 1], for rendering only.
        progress: f64,
        at: DateTime<Utc>,
    },
    /// A session ran down naturally. Carries the fixed reward.
    SessionCompleted {
        reward_minutes: u32,
        reward_xp: u64,
        at: DateTime<Utc>,
    },
    /// The countdown was forced back to its full duration.
    SessionReset {
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
}
