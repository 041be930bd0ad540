//! # FocusLearn Core Library
//!
//! This library provides the core business logic for the FocusLearn focus
//! timer. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin
//! presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session Timer**: a tick-driven countdown state machine. Ticks are
//!   delivered by an injected scheduling capability, so tests can drive the
//!   timer deterministically without wall-clock delay
//! - **Progress Store**: persisted user statistics (minutes focused, XP,
//!   level, streak, achievements) with merge-over-defaults loading
//! - **Storage**: SQLite-based persistence and TOML-based configuration
//! - **Presenter**: the narrow notification interface rendering code
//!   implements; the core never touches a display directly
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: core countdown state machine
//! - [`ProgressStore`]: persisted progress record and its save contract
//! - [`App`]: application context wiring timer, store and presenter
//! - [`Config`]: application configuration management

pub mod app;
pub mod error;
pub mod events;
pub mod presenter;
pub mod progress;
pub mod storage;
pub mod timer;

pub use app::App;
pub use error::{ConfigError, CoreError, StoreError};
pub use events::Event;
pub use presenter::{NullPresenter, Presenter};
pub use progress::{ProgressRecord, ProgressStore};
pub use storage::{Config, Database, Stats};
pub use timer::{
    IntervalScheduler, ManualScheduler, SessionTimer, TickScheduler, TimerState,
};
