mod config;
pub mod database;

pub use config::{Config, NotificationsConfig, SessionConfig};
pub use database::{Database, Stats};

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `FOCUSLEARN_DATA_DIR` overrides the location outright (used by E2E
/// tests); otherwise `~/.config/focuslearn[-dev]/` based on FOCUSLEARN_ENV.
/// Set FOCUSLEARN_ENV=dev to use the development data directory.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("FOCUSLEARN_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FOCUSLEARN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focuslearn-dev")
            } else {
                base_dir.join("focuslearn")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
