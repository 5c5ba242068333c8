pub mod agent;
pub mod bot;
pub mod database;
pub mod packages;


pub use agent::{Agent, AgentKind};
pub use bot::{create_bot, BotConfig, DiscordBot};
pub use database::{Database, DEFAULT_DB_PATH};
pub use packages::build_agent;
