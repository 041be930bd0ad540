use std::time::Duration;

use clap::Subcommand;
use focuslearn_core::{App, Config, CoreError, Database, Event, IntervalScheduler};

use crate::presenter::TerminalPresenter;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Run one attended focus session to completion
    Run {
        /// Session length in minutes (defaults to the configured length)
        #[arg(long)]
        minutes: Option<u32>,
    },
}

pub fn run(action: SessionAction) -> Result<(), CoreError> {
    match action {
        SessionAction::Run { minutes } => run_session(minutes),
    }
}

fn run_session(minutes: Option<u32>) -> Result<(), CoreError> {
    let mut config = Config::load_or_default();
    if let Some(minutes) = minutes {
        config.session.focus_minutes = minutes.max(1);
    }

    let db = Database::open()?;
    let (scheduler, ticks) = IntervalScheduler::new(Duration::from_secs(1));
    let presenter = TerminalPresenter::new(config.notifications.clone());
    let mut app = App::new(&config, db, Box::new(scheduler), Box::new(presenter));

    app.open_session();
    app.start();
    while ticks.recv().is_ok() {
        if let Some(Event::SessionCompleted { .. }) = app.tick() {
            break;
        }
    }
    Ok(())
}
