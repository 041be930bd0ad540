//! Application context.
//!
//! One `App` is constructed at process start and owns the session timer,
//! the progress store, the database and the presenter - there are no
//! ambient globals. It translates timer events into presenter
//! notifications and applies the completion reward to the store.

use chrono::Utc;

use crate::error::StoreError;
use crate::events::Event;
use crate::presenter::Presenter;
use crate::progress::{ProgressRecord, ProgressStore};
use crate::storage::{Config, Database};
use crate::timer::{SessionTimer, TickScheduler};

pub struct App {
    timer: SessionTimer,
    store: ProgressStore,
    db: Database,
    presenter: Box<dyn Presenter>,
}

impl App {
    pub fn new(
        config: &Config,
        db: Database,
        scheduler: Box<dyn TickScheduler>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        let store = ProgressStore::load(&db);
        let timer = SessionTimer::new(config.total_seconds(), scheduler);
        Self {
            timer,
            store,
            db,
            presenter,
        }
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn progress(&self) -> &ProgressRecord {
        self.store.record()
    }

    /// Begin (or resume) the countdown.
    pub fn start(&mut self) {
        if self.timer.start().is_some() {
            self.presenter.on_state_change(true);
        }
    }

    /// Stop the countdown, keeping the remaining time for a later resume.
    pub fn pause(&mut self) {
        if self.timer.pause().is_some() {
            self.presenter.on_state_change(false);
        }
    }

    /// Open (or reopen) the session view: reset the countdown to its full
    /// duration and redraw, without starting it.
    pub fn open_session(&mut self) {
        if let Some(Event::SessionReset {
            seconds_remaining, ..
        }) = self.timer.reset()
        {
            self.presenter.on_tick(seconds_remaining, 0.0);
        }
    }

    /// Deliver one scheduler tick. Returns the resulting event, if any.
    ///
    /// On completion: the reward is applied to the progress record, the
    /// record is saved, and the derived displays are recomputed. A failed
    /// save is logged and reported to the presenter but never blocks the
    /// timer or the rendering.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.timer.tick();
        match &event {
            Some(Event::SessionTick {
                seconds_remaining,
                progress,
                ..
            }) => {
                self.presenter.on_tick(*seconds_remaining, *progress);
            }
            Some(Event::SessionCompleted {
                reward_minutes,
                reward_xp,
                ..
            }) => {
                let (reward_minutes, reward_xp) = (*reward_minutes, *reward_xp);
                self.presenter.on_state_change(false);
                let remaining = self.timer.seconds_remaining();
                self.presenter.on_tick(remaining, 0.0);
                self.presenter.on_session_completed(reward_minutes, reward_xp);

                self.store.apply_reward(reward_minutes, reward_xp);
                if let Err(err) = self.persist_completion(reward_minutes) {
                    tracing::warn!("progress save failed: {err}");
                    self.presenter.on_persistence_error(&err.to_string());
                }
                self.notify_progress();
            }
            _ => {}
        }
        event
    }

    fn persist_completion(&mut self, reward_minutes: u32) -> Result<(), StoreError> {
        self.store.save(&self.db)?;
        self.db.record_session(reward_minutes, Utc::now())?;
        Ok(())
    }

    fn notify_progress(&mut self) {
        let record = self.store.record();
        let daily_percent = record.daily_completion_percent();
        let total_xp = record.total_xp;
        let xp_bar_fraction = record.xp_bar_fraction();
        self.presenter
            .on_progress_updated(daily_percent, total_xp, xp_bar_fraction);
    }
}
