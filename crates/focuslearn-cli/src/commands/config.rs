use clap::Subcommand;
use focuslearn_core::{Config, ConfigError, CoreError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a value by dot-separated key
    Get { key: String },
    /// Set a value by dot-separated key
    Set { key: String, value: String },
    /// List all known keys and values
    List,
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => {
                    println!("{value}");
                    Ok(())
                }
                None => Err(ConfigError::UnknownKey(key).into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
            Ok(())
        }
        ConfigAction::List => {
            let config = Config::load_or_default();
            for (key, value) in config.entries() {
                println!("{key} = {value}");
            }
            Ok(())
        }
    }
}
