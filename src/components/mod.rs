pub mod chatbot_interface;
pub mod mobile_support;
pub mod realtime_analytics;

pub use chatbot_interface::{KnowledgeBase, ResponseGenerator};
pub use mobile_support::{MobileGateway, OfflineSync};
pub use realtime_analytics::{DataAggregator, WebsocketServer};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HubError;
use crate::processor::{Processor, ProcessorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    KnowledgeBase,
    ResponseGenerator,
    OfflineSync,
    MobileGateway,
    WebsocketServer,
    DataAggregator,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::KnowledgeBase,
        ComponentKind::ResponseGenerator,
        ComponentKind::OfflineSync,
        ComponentKind::MobileGateway,
        ComponentKind::WebsocketServer,
        ComponentKind::DataAggregator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::KnowledgeBase => "knowledge_base",
            ComponentKind::ResponseGenerator => "response_generator",
            ComponentKind::OfflineSync => "offline_sync",
            ComponentKind::MobileGateway => "mobile_gateway",
            ComponentKind::WebsocketServer => "websocket_server",
            ComponentKind::DataAggregator => "data_aggregator",
        }
    }

    /// Package the component lives in.
    pub fn group(&self) -> &'static str {
        match self {
            ComponentKind::KnowledgeBase | ComponentKind::ResponseGenerator => "chatbot_interface",
            ComponentKind::OfflineSync | ComponentKind::MobileGateway => "mobile_support",
            ComponentKind::WebsocketServer | ComponentKind::DataAggregator => "realtime_analytics",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = HubError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.as_str()).collect();
                HubError::ParseError(format!("Unknown component '{}', must be one of: {:?}", s, known))
            })
    }
}

pub fn build_component(kind: ComponentKind, config: Option<ProcessorConfig>) -> Box<dyn Processor> {
    match kind {
        ComponentKind::KnowledgeBase => Box::new(KnowledgeBase::new(config)),
        ComponentKind::ResponseGenerator => Box::new(ResponseGenerator::new(config)),
        ComponentKind::OfflineSync => Box::new(OfflineSync::new(config)),
        ComponentKind::MobileGateway => Box::new(MobileGateway::new(config)),
        ComponentKind::WebsocketServer => Box::new(WebsocketServer::new(config)),
        ComponentKind::DataAggregator => Box::new(DataAggregator::new(config)),
    }
}
