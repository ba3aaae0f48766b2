use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config from `path`. A missing file yields the default
/// config; unreadable or invalid content is an error.
pub fn load_yaml_config<TConfig>(path: impl AsRef<Path>) -> Result<TConfig, String>
where
    TConfig: DeserializeOwned + Validate + Default,
{
    let content = match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_yaml_config<TConfig>(path: impl AsRef<Path>, config: &TConfig) -> Result<(), String>
where
    TConfig: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path.as_ref(), content)
        .map_err(|e| format!("Failed to write config file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BotDifficulty, TicTacToeSessionSettings};

    fn temp_config_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tictactoe_engine_{}_{}.yaml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_returns_default() {
        let loaded: TicTacToeSessionSettings =
            load_yaml_config(temp_config_path("missing")).unwrap();
        assert_eq!(loaded, TicTacToeSessionSettings::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let settings = TicTacToeSessionSettings {
            difficulty: BotDifficulty::Difficult,
            ai_move_delay_ms: 250,
        };

        save_yaml_config(&path, &settings).unwrap();
        let loaded: TicTacToeSessionSettings = load_yaml_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "difficulty: impossible\nai_move_delay_ms: 250\n").unwrap();

        let result: Result<TicTacToeSessionSettings, String> = load_yaml_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let path = temp_config_path("validation");
        let settings = TicTacToeSessionSettings {
            difficulty: BotDifficulty::Easy,
            ai_move_delay_ms: 60_000,
        };

        let result = save_yaml_config(&path, &settings);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
