use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::agent::{Agent, AgentKind};
use crate::agents::database::Database;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";
pub const DEFAULT_TOKEN_ENV: &str = "DISCORD_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub command_prefix: String,
    /// Environment variable the token is read from. The token itself is
    /// never stored in config files.
    pub token_env: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

/// Discord wrapper around an agent. Gateway wiring is not implemented, so the
/// bot only binds an agent to its configuration.
pub struct DiscordBot {
    agent: Box<dyn Agent>,
    config: BotConfig,
}

impl DiscordBot {
    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    pub fn kind(&self) -> AgentKind {
        self.agent.kind()
    }

    pub fn database(&self) -> &Database {
        self.agent.database()
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn command_prefix(&self) -> &str {
        &self.config.command_prefix
    }

    pub fn has_token(&self) -> bool {
        std::env::var(&self.config.token_env)
            .map(|token| !token.trim().is_empty())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for DiscordBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordBot")
            .field("agent", &self.agent.kind())
            .field("database", self.agent.database())
            .field("config", &self.config)
            .finish()
    }
}

pub fn create_bot<A: Agent + 'static>(agent: A, config: BotConfig) -> DiscordBot {
    info!(
        "Created bot for {} (prefix '{}')",
        agent.name(),
        config.command_prefix
    );
    DiscordBot {
        agent: Box::new(agent),
        config,
    }
}
