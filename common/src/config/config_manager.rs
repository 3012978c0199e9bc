use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. The first successful load is kept
/// for the lifetime of the manager; `set_config` replaces it.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns defaults when the provider has no content.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Limits {
        max: u32,
    }

    impl Default for Limits {
        fn default() -> Self {
            Self { max: 3 }
        }
    }

    impl Validate for Limits {
        fn validate(&self) -> Result<(), String> {
            if self.max == 0 {
                return Err("max must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryProvider {
        fn with(content: Option<&str>) -> Self {
            Self { content: RefCell::new(content.map(str::to_string)) }
        }
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager: ConfigManager<_, Limits> =
            ConfigManager::new(MemoryProvider::with(None), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), Limits::default());
    }

    #[test]
    fn test_stored_content_is_parsed_and_cached() {
        let manager: ConfigManager<_, Limits> =
            ConfigManager::new(MemoryProvider::with(Some("max: 7\n")), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), Limits { max: 7 });

        *manager.config_content_provider.content.borrow_mut() = Some("max: 9\n".to_string());
        assert_eq!(manager.get_config().unwrap(), Limits { max: 7 });
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let manager: ConfigManager<_, Limits> =
            ConfigManager::new(MemoryProvider::with(Some("max: 0\n")), YamlConfigSerializer::new());
        let result = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(ref reason)) if reason.contains("max")));
    }

    #[test]
    fn test_set_config_refuses_invalid_values() {
        let manager: ConfigManager<_, Limits> =
            ConfigManager::new(MemoryProvider::with(None), YamlConfigSerializer::new());
        assert!(manager.set_config(&Limits { max: 0 }).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());

        manager.set_config(&Limits { max: 5 }).unwrap();
        assert_eq!(manager.get_config().unwrap(), Limits { max: 5 });
    }
}
