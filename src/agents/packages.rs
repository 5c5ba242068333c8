//! One module per agent package. Each exposes exactly the agent type,
//! `Database`, `DiscordBot` and `create_bot`.

use std::path::Path;

use crate::agents::agent::{Agent, AgentKind};
use crate::agents::database::Database;

macro_rules! agent_package {
    ($module:ident, $agent:ident, $kind:ident) => {
        pub mod $module {
            pub use crate::agents::bot::{create_bot, DiscordBot};
            pub use crate::agents::database::Database;

            use crate::agents::agent::{Agent, AgentKind};

            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $agent {
                database: Database,
            }

            impl $agent {
                pub fn new(database: Database) -> Self {
                    Self { database }
                }
            }

            impl Default for $agent {
                fn default() -> Self {
                    Self::new(Database::new(AgentKind::$kind.default_db_file()))
                }
            }

            impl Agent for $agent {
                fn kind(&self) -> AgentKind {
                    AgentKind::$kind
                }

                fn database(&self) -> &Database {
                    &self.database
                }
            }
        }
    };
}

agent_package!(baseball_stats_agent, BaseballStatsAgent, BaseballStats);
agent_package!(esports_calendar_agent, EsportsCalendarAgent, EsportsCalendar);
agent_package!(fantasy_baseball_agent, FantasyBaseballAgent, FantasyBaseball);
agent_package!(game_news_agent, GameNewsAgent, GameNews);
agent_package!(koshien_agent, KoshienAgent, Koshien);
agent_package!(lineup_agent, LineupAgent, Lineup);
agent_package!(mlb_scores_agent, MlbScoresAgent, MlbScores);
agent_package!(npb_agent, NpbAgent, Npb);
agent_package!(pitch_matchup_agent, PitchMatchupAgent, PitchMatchup);
agent_package!(scouting_agent, ScoutingAgent, Scouting);
agent_package!(test_agent, TestAgent, Test);
agent_package!(tournament_agent, TournamentAgent, Tournament);

/// Builds the package agent for `kind`, with its database placed in
/// `db_directory`.
pub fn build_agent(kind: AgentKind, db_directory: &Path) -> Box<dyn Agent> {
    let database = Database::in_directory(db_directory, &kind.default_db_file());
    match kind {
        AgentKind::BaseballStats => Box::new(baseball_stats_agent::BaseballStatsAgent::new(database)),
        AgentKind::EsportsCalendar => Box::new(esports_calendar_agent::EsportsCalendarAgent::new(database)),
        AgentKind::FantasyBaseball => Box::new(fantasy_baseball_agent::FantasyBaseballAgent::new(database)),
        AgentKind::GameNews => Box::new(game_news_agent::GameNewsAgent::new(database)),
        AgentKind::Koshien => Box::new(koshien_agent::KoshienAgent::new(database)),
        AgentKind::Lineup => Box::new(lineup_agent::LineupAgent::new(database)),
        AgentKind::MlbScores => Box::new(mlb_scores_agent::MlbScoresAgent::new(database)),
        AgentKind::Npb => Box::new(npb_agent::NpbAgent::new(database)),
        AgentKind::PitchMatchup => Box::new(pitch_matchup_agent::PitchMatchupAgent::new(database)),
        AgentKind::Scouting => Box::new(scouting_agent::ScoutingAgent::new(database)),
        AgentKind::Test => Box::new(test_agent::TestAgent::new(database)),
        AgentKind::Tournament => Box::new(tournament_agent::TournamentAgent::new(database)),
    }
}
