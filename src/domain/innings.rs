//! Innings record and the live scorer overlay.

use crate::domain::ball::BALLS_PER_OVER;
use crate::domain::{BallEvent, PlayerUid};
use serde::{Deserialize, Serialize};

/// A batter currently at the crease, as tracked by the live scorer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batsman {
    pub uid: PlayerUid,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub is_on_strike: bool,
}

impl Batsman {
    pub fn new(uid: &str, runs: u32, balls: u32, is_on_strike: bool) -> Self {
        Batsman {
            uid: PlayerUid::from(uid),
            runs,
            balls,
            is_on_strike,
        }
    }
}

/// Upstream-maintained aggregate for one bowler in an innings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bowler {
    pub uid: PlayerUid,
    #[serde(default)]
    pub overs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub maidens: u32,
}

impl Bowler {
    pub fn new(uid: &str, overs: u32, balls: u32, runs: u32, wickets: u32) -> Self {
        Bowler {
            uid: PlayerUid::from(uid),
            overs,
            balls,
            runs,
            wickets,
            maidens: 0,
        }
    }

    pub fn total_balls(&self) -> u64 {
        u64::from(self.overs) * u64::from(BALLS_PER_OVER) + u64::from(self.balls)
    }
}

/// One team's batting turn.
///
/// The `runs/wickets/overs/balls` counters are maintained by the live scorer
/// and are not re-derived from `ball_events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsScore {
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub overs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub ball_events: Vec<BallEvent>,
    #[serde(default)]
    pub bowlers: Vec<Bowler>,
}

impl InningsScore {
    pub fn from_events(ball_events: Vec<BallEvent>) -> Self {
        InningsScore {
            ball_events,
            ..Default::default()
        }
    }

    pub fn with_bowlers(mut self, bowlers: Vec<Bowler>) -> Self {
        self.bowlers = bowlers;
        self
    }

    pub fn with_totals(mut self, runs: u32, wickets: u32, overs: u32, balls: u32) -> Self {
        self.runs = runs;
        self.wickets = wickets;
        self.overs = overs;
        self.balls = balls;
        self
    }

    pub fn bowler(&self, uid: &PlayerUid) -> Option<&Bowler> {
        self.bowlers.iter().find(|b| &b.uid == uid)
    }

    /// Legal balls bowled according to the stored counters.
    pub fn total_balls(&self) -> u64 {
        u64::from(self.overs) * u64::from(BALLS_PER_OVER) + u64::from(self.balls)
    }

    /// Uids credited in the log, in order of first appearance.
    pub fn batting_order(&self) -> Vec<PlayerUid> {
        let mut order: Vec<PlayerUid> = Vec::new();
        for uid in self.ball_events.iter().filter_map(|b| b.batsman_uid.as_ref()) {
            if !order.contains(uid) {
                order.push(uid.clone());
            }
        }
        order
    }
}
