mod session;
mod ticker;

pub use session::{SessionTimer, TimerState, REWARD_MINUTES, REWARD_XP};
pub use ticker::{IntervalScheduler, ManualScheduler, TickHandle, TickScheduler};
