//! The persisted progress record.
//!
//! Every field carries its own serde default, so a partially stored record
//! deserializes as the stored keys layered over the defaults. Malformed
//! input falls back to the full defaults without surfacing an error; the
//! record is presentation data, not critical state.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version tag written with every record. The original storage format had
/// none, which made silent schema drift undetectable; new readers can now
/// key migrations off this field.
pub const SCHEMA_VERSION: u32 = 1;

/// Persisted user statistics, one instance per user/device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_daily_minutes_focused")]
    pub daily_minutes_focused: f64,
    #[serde(default = "default_daily_goal_minutes")]
    pub daily_goal_minutes: f64,
    #[serde(default = "default_streak_days")]
    pub streak_days: u32,
    #[serde(default = "default_total_xp")]
    pub total_xp: u64,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_xp_in_current_level")]
    pub xp_in_current_level: u64,
    #[serde(default = "default_xp_required_for_next_level")]
    pub xp_required_for_next_level: u64,
    #[serde(default = "default_achievements")]
    pub unlocked_achievements: BTreeSet<String>,
    #[serde(default = "Utc::now")]
    pub last_visit: DateTime<Utc>,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}
fn default_daily_minutes_focused() -> f64 {
    12.5
}
fn default_daily_goal_minutes() -> f64 {
    25.0
}
fn default_streak_days() -> u32 {
    7
}
fn default_total_xp() -> u64 {
    2450
}
fn default_level() -> u32 {
    12
}
fn default_xp_in_current_level() -> u64 {
    350
}
fn default_xp_required_for_next_level() -> u64 {
    500
}
fn default_achievements() -> BTreeSet<String> {
    ["speed-demon", "week-warrior", "precision-master", "champion"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            version: default_version(),
            daily_minutes_focused: default_daily_minutes_focused(),
            daily_goal_minutes: default_daily_goal_minutes(),
            streak_days: default_streak_days(),
            total_xp: default_total_xp(),
            level: default_level(),
            xp_in_current_level: default_xp_in_current_level(),
            xp_required_for_next_level: default_xp_required_for_next_level(),
            unlocked_achievements: default_achievements(),
            last_visit: Utc::now(),
        }
    }
}

impl ProgressRecord {
    /// Build a record from the stored slot contents, if any.
    ///
    /// Stored keys win over defaults per key; absent keys keep their
    /// defaults. Unparsable input is discarded wholesale.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|err| {
                tracing::warn!("discarding malformed progress record: {err}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Percentage of the daily goal reached, rounded to the nearest integer.
    ///
    /// Deliberately unclamped: over-focusing past the goal reads over 100.
    pub fn daily_completion_percent(&self) -> i64 {
        (self.daily_minutes_focused / self.daily_goal_minutes * 100.0).round() as i64
    }

    /// Fill proportion of the XP bar for the current level, unclamped.
    pub fn xp_bar_fraction(&self) -> f64 {
        self.xp_in_current_level as f64 / self.xp_required_for_next_level as f64
    }

    /// Credit one completed session.
    ///
    /// XP past the level requirement carries into the next level; the
    /// requirement itself stays fixed, so `xp_in_current_level` never
    /// reaches `xp_required_for_next_level`.
    pub fn apply_reward(&mut self, minutes: u32, xp: u64) {
        self.daily_minutes_focused += f64::from(minutes);
        self.total_xp += xp;
        self.xp_in_current_level += xp;
        while self.xp_in_current_level >= self.xp_required_for_next_level {
            self.xp_in_current_level -= self.xp_required_for_next_level;
            self.level += 1;
        }
    }
}
