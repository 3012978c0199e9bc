use std::path::Path;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::SymbolConfig;

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub symbols: SymbolConfig,
    /// Print the cell the computer picked after each computer turn.
    pub announce_computer_moves: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.symbols.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: SymbolConfig::default(),
            announce_computer_moves: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};
    use std::path::PathBuf;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_round_trips_through_manager_and_file() {
        let config = Config {
            symbols: SymbolConfig { human: 'A', computer: 'B', empty: '.' },
            announce_computer_moves: true,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("announce_computer_moves: true\n")
            .unwrap();

        let loaded = get_config_manager(&file_path).get_config().unwrap();
        assert!(loaded.announce_computer_moves);
        assert_eq!(loaded.symbols, SymbolConfig::default());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_symbols_in_file_are_reported() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("symbols:\n  human: X\n  computer: X\n  empty: ' '\n")
            .unwrap();

        let result = get_config_manager(&file_path).get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let _ = std::fs::remove_file(&file_path);
    }
}
