use crate::commands::{link, CmdMessage, CmdResult};
use crate::config::LatchkeyConfig;
use crate::error::Result;
use crate::model::Theme;
use std::path::Path;

pub const KEYS: [&str; 3] = ["origin", "min-password-length", "default-theme"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = LatchkeyConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in KEYS {
                if let Some(value) = value_of(&config, key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
        }
        ConfigAction::ShowKey(key) => match value_of(&config, &key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => result.add_message(unknown_key(&key)),
        },
        ConfigAction::Set(key, value) => {
            match apply(&mut config, &key, &value) {
                Ok(()) => {
                    config.save(config_dir)?;
                    let stored = value_of(&config, &key).unwrap_or(value);
                    result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
                }
                Err(message) => result.add_message(CmdMessage::error(message)),
            }
        }
    }

    Ok(result)
}

fn value_of(config: &LatchkeyConfig, key: &str) -> Option<String> {
    match key {
        "origin" => Some(config.origin.clone()),
        "min-password-length" => Some(config.min_password_length.to_string()),
        "default-theme" => Some(config.default_theme.to_string()),
        _ => None,
    }
}

fn apply(config: &mut LatchkeyConfig, key: &str, value: &str) -> std::result::Result<(), String> {
    match key {
        "origin" => {
            link::check_origin(value).map_err(|e| format!("Invalid origin '{}': {}", value, e))?;
            config.set_origin(value);
        }
        "min-password-length" => {
            config.min_password_length = value
                .parse()
                .map_err(|_| format!("Invalid number: {}", value))?;
        }
        "default-theme" => {
            config.default_theme = value.parse::<Theme>()?;
        }
        _ => return Err(format!("Unknown config key: {}", key)),
    }
    Ok(())
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (known: {})",
        key,
        KEYS.join(", ")
    ))
}
