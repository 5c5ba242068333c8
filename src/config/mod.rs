use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::agents::BotConfig;
use crate::components::ComponentKind;
use crate::error::{HubError, Result};
use crate::processor::ProcessorConfig;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub agents: AgentsConfig,
    pub database: DatabaseConfig,
    pub memo: MemoConfig,
    pub logging: LoggingConfig,
    /// Per-component settings, keyed by component name.
    #[serde(default)]
    pub components: BTreeMap<String, ProcessorConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AgentsConfig {
    pub directory: PathBuf,
    pub command_prefix: String,
    pub token_env: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MemoConfig {
    pub store_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String, // "trace", "debug", "info", "warn", "error"
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Default for Config {
    fn default() -> Self {
        let bot = BotConfig::default();
        Self {
            agents: AgentsConfig {
                directory: PathBuf::from(crate::inventory::DEFAULT_AGENTS_DIR),
                command_prefix: bot.command_prefix,
                token_env: bot.token_env,
            },
            database: DatabaseConfig {
                directory: PathBuf::from("."),
            },
            memo: MemoConfig {
                store_path: PathBuf::from(crate::memo::DEFAULT_STORE_PATH),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            components: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Settings for `kind`. A component without a table gets an empty config.
    pub fn component_config(&self, kind: ComponentKind) -> ProcessorConfig {
        self.components
            .get(kind.as_str())
            .cloned()
            .unwrap_or_default()
    }

    pub fn bot_config(&self) -> BotConfig {
        BotConfig {
            command_prefix: self.agents.command_prefix.clone(),
            token_env: self.agents.token_env.clone(),
        }
    }
}

#[async_trait::async_trait]
pub trait ConfigManager {
    async fn load_config(&self) -> Result<Config>;
    async fn save_config(&self, config: &Config) -> Result<()>;
    fn validate_config(&self, config: &Config) -> Result<()>;
}

pub struct FileConfigManager {
    config_path: PathBuf,
}

/// Result of [`FileConfigManager::load_or_create`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    /// The file was missing and a default one was written.
    pub created: bool,
}

impl FileConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config, writing defaults first when the file is missing.
    /// Callers that set up logging from the config use `created` to report
    /// the write once a subscriber exists.
    pub async fn load_or_create(&self) -> Result<LoadedConfig> {
        info!("Loading configuration from {:?}", self.config_path);

        let created = !self.config_path.exists();
        if created {
            warn!("Configuration file not found, creating default config at {:?}", self.config_path);
            self.create_default_config().await?;
        }

        let config_content = fs::read_to_string(&self.config_path)
            .map_err(|e| HubError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&config_content)
            .map_err(|e| HubError::ConfigError(format!("Failed to parse TOML config: {}", e)))?;

        self.validate_config(&config)?;

        info!("Configuration loaded successfully");
        Ok(LoadedConfig { config, created })
    }
}

#[async_trait::async_trait]
impl ConfigManager for FileConfigManager {
    async fn load_config(&self) -> Result<Config> {
        Ok(self.load_or_create().await?.config)
    }

    fn validate_config(&self, config: &Config) -> Result<()> {
        debug!("Validating configuration");

        if config.agents.directory.as_os_str().is_empty() {
            return Err(HubError::ConfigError("agents.directory cannot be empty".to_string()).into());
        }

        let prefix = &config.agents.command_prefix;
        if prefix.trim().is_empty() {
            return Err(HubError::ConfigError("agents.command_prefix cannot be empty".to_string()).into());
        }
        if prefix.contains(char::is_whitespace) {
            return Err(HubError::ConfigError(format!("Command prefix '{}' cannot contain whitespace", prefix)).into());
        }
        if config.agents.token_env.trim().is_empty() {
            return Err(HubError::ConfigError("agents.token_env cannot be empty".to_string()).into());
        }

        if config.memo.store_path.as_os_str().is_empty() {
            return Err(HubError::ConfigError("memo.store_path cannot be empty".to_string()).into());
        }

        let level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(HubError::ConfigError(format!(
                "Invalid log level '{}', must be one of: {:?}",
                config.logging.level, VALID_LOG_LEVELS
            ))
            .into());
        }

        // component tables must use the exact component name, since lookups are by exact key
        for name in config.components.keys() {
            match name.parse::<ComponentKind>() {
                Ok(kind) if kind.as_str() == name.as_str() => {}
                Ok(kind) => {
                    return Err(HubError::ConfigError(format!(
                        "Component table '{}' must be written as '{}'",
                        name, kind
                    ))
                    .into());
                }
                Err(_) => {
                    return Err(HubError::ConfigError(format!("Unknown component table '{}'", name)).into());
                }
            }
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    async fn save_config(&self, config: &Config) -> Result<()> {
        info!("Saving configuration to {:?}", self.config_path);

        let toml_content = toml::to_string_pretty(config)
            .map_err(|e| HubError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(&self.config_path, toml_content)
            .map_err(|e| HubError::ConfigError(format!("Failed to write config file: {}", e)))?;

        info!("Configuration saved successfully");
        Ok(())
    }
}

impl FileConfigManager {
    /// Create a default configuration file
    async fn create_default_config(&self) -> Result<()> {
        let default_config = Config::default();
        let toml_content = toml::to_string_pretty(&default_config)
            .map_err(|e| HubError::ConfigError(format!("Failed to serialize default config: {}", e)))?;

        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| HubError::ConfigError(format!("Failed to create config directory: {}", e)))?;
            }
        }

        fs::write(&self.config_path, toml_content)
            .map_err(|e| HubError::ConfigError(format!("Failed to write default config: {}", e)))?;

        info!("Default configuration file created at {:?}", self.config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let manager = FileConfigManager::new(config_path.clone());

        let config = manager.load_config().await.unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.agents.directory, PathBuf::from("agents"));
        assert_eq!(config.agents.command_prefix, "!");
        assert_eq!(config.logging.level, "info");
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_component_tables_load_from_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[agents]
directory = "agents"
command_prefix = "?"
token_env = "NPB_BOT_TOKEN"

[database]
directory = "data"

[memo]
store_path = "memos.jsonl"

[logging]
level = "debug"

[components.websocket_server]
port = 9001
channels = ["scores", "news"]
"#,
        )
        .unwrap();

        let manager = FileConfigManager::new(config_path);
        let config = manager.load_config().await.unwrap();

        let ws = config.component_config(ComponentKind::WebsocketServer);
        assert_eq!(ws.get("port"), Some(&json!(9001)));
        assert_eq!(ws.get("channels"), Some(&json!(["scores", "news"])));
        assert!(config.component_config(ComponentKind::KnowledgeBase).is_empty());

        let bot = config.bot_config();
        assert_eq!(bot.command_prefix, "?");
        assert_eq!(bot.token_env, "NPB_BOT_TOKEN");
    }

    #[tokio::test]
    async fn test_load_or_create_reports_creation_once() {
        let temp_dir = tempdir().unwrap();
        let manager = FileConfigManager::new(temp_dir.path().join("config.toml"));

        let first = manager.load_or_create().await.unwrap();
        assert!(first.created);
        assert!(manager.config_path().exists());

        let second = manager.load_or_create().await.unwrap();
        assert!(!second.created);
        assert_eq!(second.config, first.config);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = tempdir().unwrap();
        let manager = FileConfigManager::new(temp_dir.path().join("config.toml"));

        let mut config = Config::default();
        config.logging.level = "warn".to_string();
        config.memo.store_path = PathBuf::from("notes/memos.jsonl");
        manager.save_config(&config).await.unwrap();

        let loaded = manager.load_config().await.unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_validation() {
        let manager = FileConfigManager::new(PathBuf::from("test.toml"));

        assert!(manager.validate_config(&Config::default()).is_ok());

        let mut invalid = Config::default();
        invalid.agents.command_prefix = "".to_string();
        assert!(manager.validate_config(&invalid).is_err());

        let mut invalid = Config::default();
        invalid.agents.command_prefix = "! ".to_string();
        assert!(manager.validate_config(&invalid).is_err());

        let mut invalid = Config::default();
        invalid.logging.level = "verbose".to_string();
        assert!(manager.validate_config(&invalid).is_err());

        let mut invalid = Config::default();
        invalid.agents.directory = PathBuf::new();
        assert!(manager.validate_config(&invalid).is_err());

        let mut invalid = Config::default();
        invalid
            .components
            .insert("lineup_optimizer".to_string(), ProcessorConfig::default());
        assert!(manager.validate_config(&invalid).is_err());
    }

    #[tokio::test]
    async fn test_dashed_component_table_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut content = toml::to_string_pretty(&Config::default()).unwrap();
        content.push_str("\n[components.websocket-server]\nport = 9001\n");
        fs::write(&config_path, content).unwrap();

        let manager = FileConfigManager::new(config_path);
        let err = manager.load_config().await.unwrap_err();
        assert!(err.to_string().contains("websocket_server"));
    }

    #[test]
    fn test_component_table_name_must_be_exact() {
        let manager = FileConfigManager::new(PathBuf::from("test.toml"));

        for key in ["Knowledge_Base", "knowledge-base", " knowledge_base"] {
            let mut config = Config::default();
            config.components.insert(key.to_string(), ProcessorConfig::default());
            assert!(manager.validate_config(&config).is_err(), "{key} was accepted");
        }

        let mut config = Config::default();
        config
            .components
            .insert("knowledge_base".to_string(), ProcessorConfig::default());
        assert!(manager.validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let manager = FileConfigManager::new(PathBuf::from("test.toml"));
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(manager.validate_config(&config).is_ok());
    }
}
