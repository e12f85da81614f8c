//! Match and user documents as held by the document store.

use crate::domain::{Batsman, InningsScore, MatchId, PlayerUid, TeamSide};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Toss,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Toss => "toss",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "toss" => Ok(MatchStatus::Toss),
            "live" => Ok(MatchStatus::Live),
            "completed" => Ok(MatchStatus::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toss {
    pub winner: TeamSide,
    pub decision: TossDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub players: Vec<PlayerUid>,
}

/// Registered user; only used for uid -> display name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: PlayerUid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
}

impl User {
    pub fn new(uid: &str, name: &str, username: &str) -> Self {
        User {
            uid: PlayerUid::from(uid),
            name: name.to_string(),
            username: username.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub team_a: Team,
    pub team_b: Team,
    pub total_overs: u32,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toss: Option<Toss>,
    #[serde(default = "first_innings")]
    pub current_innings: u8,
    #[serde(default)]
    pub innings1: InningsScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innings2: Option<InningsScore>,
    #[serde(default)]
    pub current_batsmen: Vec<Batsman>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umpire_uid: Option<PlayerUid>,
}

fn first_innings() -> u8 {
    1
}

impl Match {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    /// Innings 1 or 2; `None` for any other number or an unstarted second innings.
    pub fn innings(&self, number: u8) -> Option<&InningsScore> {
        match number {
            1 => Some(&self.innings1),
            2 => self.innings2.as_ref(),
            _ => None,
        }
    }

    /// Side batting in the given innings, decided by the toss.
    pub fn batting_side(&self, number: u8) -> Option<TeamSide> {
        let toss = self.toss?;
        let first = match toss.decision {
            TossDecision::Bat => toss.winner,
            TossDecision::Bowl => toss.winner.opponent(),
        };
        match number {
            1 => Some(first),
            2 => Some(first.opponent()),
            _ => None,
        }
    }

    /// True while `number` is the innings being scored live.
    pub fn is_live_innings(&self, number: u8) -> bool {
        self.status == MatchStatus::Live && self.current_innings == number
    }

    /// Live batsmen overlay for the given innings.
    ///
    /// Only the innings in progress has an overlay; every other innings is
    /// complete and derives entirely from its log.
    pub fn live_overlay(&self, number: u8) -> &[Batsman] {
        if self.is_live_innings(number) {
            &self.current_batsmen
        } else {
            &[]
        }
    }

    /// Runs needed to win, once the chase has begun.
    pub fn target(&self) -> Option<u32> {
        self.innings2.as_ref().map(|_| self.innings1.runs + 1)
    }
}
