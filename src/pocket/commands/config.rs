use crate::commands::{CmdMessage, CmdResult};
use crate::config::PocketConfig;
use crate::error::{PocketError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PocketConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| PocketError::Api(format!("Unknown config key: {}", key)))?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use tempfile::tempdir;

    #[test]
    fn set_persists_value() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("default-language".into(), "go".into()),
        )
        .unwrap();
        assert_eq!(result.config.unwrap().default_language, Language::Go);

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().default_language, Language::Go);
    }

    #[test]
    fn show_key_reports_value() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("storage-key".into())).unwrap();
        assert_eq!(result.messages[0].content, "storage-key = codeSnippets");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
