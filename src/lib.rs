pub mod agents;
pub mod components;
pub mod config;
pub mod error;
pub mod inventory;
pub mod memo;
pub mod processor;

pub use error::{HubError, Result};
pub use config::Config;
pub use agents::{create_bot, Agent, AgentKind, BotConfig, Database, DiscordBot};
pub use processor::{Payload, Processor, ProcessorConfig};
