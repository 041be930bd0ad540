//! Terminal rendering of core notifications.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use focuslearn_core::storage::NotificationsConfig;
use focuslearn_core::Presenter;

/// How long the completion banner stays up before the progress summary.
pub const CELEBRATION_WINDOW: Duration = Duration::from_secs(3);

pub struct TerminalPresenter {
    notifications: NotificationsConfig,
}

impl TerminalPresenter {
    pub fn new(notifications: NotificationsConfig) -> Self {
        Self { notifications }
    }
}

fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

impl Presenter for TerminalPresenter {
    fn on_tick(&mut self, seconds_remaining: u32, progress: f64) {
        print!(
            "\r  {}  [{:>3.0}%]",
            format_clock(seconds_remaining),
            progress * 100.0
        );
        let _ = io::stdout().flush();
    }

    fn on_state_change(&mut self, is_running: bool) {
        if is_running {
            println!("timer running (Ctrl-C abandons the session)");
        } else {
            println!("\ntimer stopped");
        }
    }

    fn on_session_completed(&mut self, reward_minutes: u32, reward_xp: u64) {
        if self.notifications.enabled && self.notifications.bell {
            print!("\x07");
        }
        println!("Session complete! +{reward_minutes} min focused, +{reward_xp} XP");
        let _ = io::stdout().flush();
        // Hold the banner before the summary scrolls in.
        thread::sleep(CELEBRATION_WINDOW);
    }

    fn on_progress_updated(&mut self, daily_percent: i64, total_xp: u64, xp_bar_fraction: f64) {
        println!(
            "daily goal {daily_percent}%  |  total {total_xp} XP  |  level progress {:.0}%",
            xp_bar_fraction * 100.0
        );
    }

    fn on_persistence_error(&mut self, message: &str) {
        eprintln!("warning: progress not saved: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }
}
