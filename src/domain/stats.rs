//! Derived statistics produced by the engine.
//!
//! All values are recomputed per request and carry no identity.

use crate::domain::{Decimal, PlayerUid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    pub uid: PlayerUid,
    pub runs: u32,
    pub balls: u32,
    pub strike_rate: Decimal,
    pub fours: u32,
    pub sixes: u32,
    pub dots: u32,
    pub is_out: bool,
}

impl BattingStats {
    /// Record for a player who has not faced a delivery.
    pub fn empty(uid: PlayerUid) -> Self {
        BattingStats {
            uid,
            runs: 0,
            balls: 0,
            strike_rate: Decimal::zero(),
            fours: 0,
            sixes: 0,
            dots: 0,
            is_out: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingStats {
    pub uid: PlayerUid,
    pub overs: u32,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: Decimal,
    pub dots: u32,
    pub wides: u32,
    pub no_balls: u32,
    pub maidens: u32,
}

impl BowlingStats {
    pub fn empty(uid: PlayerUid) -> Self {
        BowlingStats {
            uid,
            overs: 0,
            balls: 0,
            runs: 0,
            wickets: 0,
            economy: Decimal::zero(),
            dots: 0,
            wides: 0,
            no_balls: 0,
            maidens: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    pub runs: u32,
    pub wicket_number: u32,
    pub batsman1_uid: PlayerUid,
    pub batsman2_uid: PlayerUid,
    pub batsman1_runs: u32,
    pub batsman2_runs: u32,
    pub balls: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallOfWicket {
    pub wicket_number: u32,
    pub score: u32,
    pub overs: u32,
    pub balls: u32,
    pub batsman_uid: PlayerUid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasBreakdown {
    pub wides: u32,
    pub no_balls: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverSummary {
    pub over_number: u32,
    pub runs: u32,
    pub wickets: u32,
    /// Legal balls in the over; below 6 only for the trailing partial over.
    pub legal_balls: u32,
}
