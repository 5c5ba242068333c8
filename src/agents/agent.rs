use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::agents::database::Database;
use crate::error::HubError;

/// The agent packages shipped under `agents/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    BaseballStats,
    EsportsCalendar,
    FantasyBaseball,
    GameNews,
    Koshien,
    Lineup,
    MlbScores,
    Npb,
    PitchMatchup,
    Scouting,
    Test,
    Tournament,
}

impl AgentKind {
    /// Sorted by directory name.
    pub const ALL: [AgentKind; 12] = [
        AgentKind::BaseballStats,
        AgentKind::EsportsCalendar,
        AgentKind::FantasyBaseball,
        AgentKind::GameNews,
        AgentKind::Koshien,
        AgentKind::Lineup,
        AgentKind::MlbScores,
        AgentKind::Npb,
        AgentKind::PitchMatchup,
        AgentKind::Scouting,
        AgentKind::Test,
        AgentKind::Tournament,
    ];

    /// Directory name of the package under `agents/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            AgentKind::BaseballStats => "baseball_stats_agent",
            AgentKind::EsportsCalendar => "esports_calendar_agent",
            AgentKind::FantasyBaseball => "fantasy_baseball_agent",
            AgentKind::GameNews => "game_news_agent",
            AgentKind::Koshien => "koshien_agent",
            AgentKind::Lineup => "lineup_agent",
            AgentKind::MlbScores => "mlb_scores_agent",
            AgentKind::Npb => "npb_agent",
            AgentKind::PitchMatchup => "pitch_matchup_agent",
            AgentKind::Scouting => "scouting_agent",
            AgentKind::Test => "test_agent",
            AgentKind::Tournament => "tournament_agent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentKind::BaseballStats => "Baseball Stats Agent",
            AgentKind::EsportsCalendar => "Esports Calendar Agent",
            AgentKind::FantasyBaseball => "Fantasy Baseball Agent",
            AgentKind::GameNews => "Game News Agent",
            AgentKind::Koshien => "Koshien Agent",
            AgentKind::Lineup => "Lineup Agent",
            AgentKind::MlbScores => "MLB Scores Agent",
            AgentKind::Npb => "NPB Agent",
            AgentKind::PitchMatchup => "Pitch Matchup Agent",
            AgentKind::Scouting => "Scouting Agent",
            AgentKind::Test => "Test Agent",
            AgentKind::Tournament => "Tournament Agent",
        }
    }

    /// Database filename used when a package builds its own handle.
    pub fn default_db_file(&self) -> String {
        format!("{}.db", self.dir_name())
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for AgentKind {
    type Err = HubError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        AgentKind::ALL
            .into_iter()
            .find(|kind| {
                kind.dir_name() == normalized
                    || kind.dir_name().trim_end_matches("_agent") == normalized
            })
            .ok_or_else(|| HubError::ParseError(format!("Unknown agent '{}'", s)))
    }
}

/// A domain agent. Per-domain behaviour is not defined yet, so the trait only
/// carries identity and the database handle the bot is wired with.
pub trait Agent: Send + Sync {
    fn kind(&self) -> AgentKind;

    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    fn database(&self) -> &Database;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn kind(&self) -> AgentKind {
        (**self).kind()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn database(&self) -> &Database {
        (**self).database()
    }
}
