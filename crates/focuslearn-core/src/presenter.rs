//! The notification interface between the core and rendering code.
//!
//! The core never touches a display. State transitions and progress changes
//! are pushed through this trait; implementations render them however they
//! like (terminal, GUI, nothing at all).

/// Receives display notifications from the application context.
///
/// All callbacks run synchronously on the driving thread.
pub trait Presenter {
    /// One second elapsed, or the display was reset. `progress` is the
    /// elapsed-time ratio in [0, 1].
    fn on_tick(&mut self, seconds_remaining: u32, progress: f64);

    /// The timer started or stopped; swap the start/pause affordances.
    fn on_state_change(&mut self, is_running: bool);

    /// A session completed naturally; show the celebration.
    fn on_session_completed(&mut self, reward_minutes: u32, reward_xp: u64);

    /// Derived progress displays changed after a reward was applied.
    fn on_progress_updated(&mut self, daily_percent: i64, total_xp: u64, xp_bar_fraction: f64);

    /// A progress save failed. Non-fatal: the in-memory record keeps its
    /// values until the next successful save.
    fn on_persistence_error(&mut self, _message: &str) {}
}

/// No-op presenter for headless use and tests.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_tick(&mut self, _seconds_remaining: u32, _progress: f64) {}
    fn on_state_change(&mut self, _is_running: bool) {}
    fn on_session_completed(&mut self, _reward_minutes: u32, _reward_xp: u64) {}
    fn on_progress_updated(&mut self, _daily_percent: i64, _total_xp: u64, _xp_bar_fraction: f64) {}
}
