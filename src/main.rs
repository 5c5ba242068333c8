use std::io::{self, Read, Write};
use std::path::PathBuf;

use agent_hub::agents::{build_agent, create_bot, AgentKind};
use agent_hub::components::{build_component, ComponentKind};
use agent_hub::config::{Config, FileConfigManager};
use agent_hub::inventory::{render_inventory, scan_agents};
use agent_hub::memo::{record_today, JsonlMemoStore, TodayMemo};
use agent_hub::{HubError, Payload};
use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path to config file
    #[clap(long, short, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the agent packages, numbered
    Scan {
        /// Directory holding the agent packages
        #[clap(long)]
        dir: Option<PathBuf>,
    },

    /// Store today's memo
    RecordToday {
        /// JSON-lines memo store
        #[clap(long)]
        store: Option<PathBuf>,
    },

    /// Run a payload through a component
    Process {
        /// Component name, e.g. knowledge_base
        component: String,

        /// JSON object; read from stdin when omitted
        json: Option<String>,
    },

    /// Show each agent with its database and bot settings
    Agents,
}

fn lift<T>(result: agent_hub::Result<T>) -> anyhow::Result<T> {
    result.map_err(|e| anyhow!(e))
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_payload(json: Option<String>) -> agent_hub::Result<Payload> {
    let raw = match json {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| HubError::ParseError(format!("Failed to read stdin: {}", e)))?;
            buf
        }
    };

    let payload: Payload = serde_json::from_str(&raw)
        .map_err(|e| HubError::ParseError(format!("Payload must be a JSON object: {}", e)))?;
    Ok(payload)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_manager = FileConfigManager::new(cli.config.clone());
    let loaded = lift(config_manager.load_or_create().await)?;
    let config = loaded.config;
    init_logging(&config);

    // events from loading fire before the subscriber exists
    if loaded.created {
        tracing::warn!("Configuration file not found, wrote defaults to {:?}", cli.config);
    }

    tracing::debug!("Using configuration from {:?}", cli.config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Scan { dir } => {
            let dir = dir.unwrap_or_else(|| config.agents.directory.clone());
            let names = lift(scan_agents(&dir))?;
            lift(render_inventory(&names, &mut out))?;
        }
        Command::RecordToday { store } => {
            let path = store.unwrap_or_else(|| config.memo.store_path.clone());
            let store = JsonlMemoStore::new(path);
            let today = chrono::Local::now().date_naive();
            lift(record_today(&store, &TodayMemo::default(), today, &mut out).await)?;
        }
        Command::Process { component, json } => {
            let kind: ComponentKind = lift(component.parse::<ComponentKind>().map_err(Into::into))?;
            let processor = build_component(kind, Some(config.component_config(kind)));
            let payload = lift(read_payload(json))?;

            let result = processor.process(payload);
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Command::Agents => {
            for kind in AgentKind::ALL {
                let agent = build_agent(kind, &config.database.directory);
                let bot = create_bot(agent, config.bot_config());
                writeln!(
                    out,
                    "{:<24} {:<40} prefix={} token={}",
                    kind.dir_name(),
                    bot.database().db_path(),
                    bot.command_prefix(),
                    if bot.has_token() { "set" } else { "unset" }
                )?;
            }
        }
    }

    Ok(())
}
