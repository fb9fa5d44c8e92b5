use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RosterConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RosterConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = RosterConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    #[test]
    fn show_all_returns_default_config_when_no_file() {
        let temp = tempdir().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), RosterConfig::default());
    }

    #[test]
    fn set_persists_value() {
        let temp = tempdir().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("slot".into(), "kn21".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "slot set to kn21");

        let shown = run(temp.path(), ConfigAction::ShowKey("slot".into())).unwrap();
        assert_eq!(shown.messages[0].content, "kn21");
    }

    #[test]
    fn unknown_key_reports_error_message() {
        let temp = tempdir().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);

        let result = run(temp.path(), ConfigAction::Set("nope".into(), "x".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.config.is_none());
    }
}
