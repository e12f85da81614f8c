//! Scorecard compilation: every derived view for an innings in one pass.
//!
//! This module provides:
//! - Scorecard assembly with display names and the live/completed overlay policy
//! - Match highlights across both innings
//! - Content-hash keyed memoization of compiled scorecards

use crate::domain::{
    BattingStats, BowlingStats, Decimal, ExtrasBreakdown, FallOfWicket, Match, OverSummary,
    Partnership, PlayerUid, User, BALLS_PER_OVER,
};
use crate::engine::{
    calculate_batting_stats, calculate_bowling_stats, calculate_extras,
    calculate_fall_of_wickets, calculate_over_summary, calculate_partnerships, current_run_rate,
    required_run_rate, resolve_player_name, Highlights,
};
use serde::Serialize;

pub mod cache;

pub use cache::ScorecardCache;

/// A derived record with the player's display name attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Named<T> {
    pub name: String,
    #[serde(flatten)]
    pub stats: T,
}

/// Records that belong to a single player.
trait PlayerRecord {
    fn player_uid(&self) -> &PlayerUid;
}

impl PlayerRecord for BattingStats {
    fn player_uid(&self) -> &PlayerUid {
        &self.uid
    }
}

impl PlayerRecord for BowlingStats {
    fn player_uid(&self) -> &PlayerUid {
        &self.uid
    }
}

impl PlayerRecord for FallOfWicket {
    fn player_uid(&self) -> &PlayerUid {
        &self.batsman_uid
    }
}

impl<T: PlayerRecord> Named<T> {
    fn new(players: &[User], stats: T) -> Self {
        Named {
            name: resolve_player_name(players, stats.player_uid()).to_string(),
            stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipCard {
    pub batsman1_name: String,
    pub batsman2_name: String,
    #[serde(flatten)]
    pub partnership: Partnership,
}

impl PartnershipCard {
    fn new(players: &[User], partnership: Partnership) -> Self {
        PartnershipCard {
            batsman1_name: resolve_player_name(players, &partnership.batsman1_uid).to_string(),
            batsman2_name: resolve_player_name(players, &partnership.batsman2_uid).to_string(),
            partnership,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DidNotBat {
    pub uid: PlayerUid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub innings_number: u8,
    pub is_live: bool,
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls: u32,
    pub run_rate: Decimal,
    pub batting: Vec<Named<BattingStats>>,
    pub did_not_bat: Vec<DidNotBat>,
    pub bowling: Vec<Named<BowlingStats>>,
    pub partnerships: Vec<PartnershipCard>,
    pub fall_of_wickets: Vec<Named<FallOfWicket>>,
    pub extras: ExtrasBreakdown,
    pub over_summary: Vec<OverSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_run_rate: Option<Decimal>,
}

impl Scorecard {
    /// Compile the scorecard for innings `innings_number` (1 or 2).
    ///
    /// Returns `None` when that innings does not exist yet.
    pub fn compile(m: &Match, innings_number: u8, players: &[User]) -> Option<Scorecard> {
        let innings = m.innings(innings_number)?;
        let overlay = m.live_overlay(innings_number);

        let batting_order = batting_order(m, innings_number);
        let batting = batting_order
            .iter()
            .map(|uid| Named::new(players, calculate_batting_stats(innings, uid, overlay)))
            .collect();

        let did_not_bat = m
            .batting_side(innings_number)
            .map(|side| {
                m.team(side)
                    .players
                    .iter()
                    .filter(|uid| !batting_order.contains(uid))
                    .map(|uid| DidNotBat {
                        uid: uid.clone(),
                        name: resolve_player_name(players, uid).to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let bowling = innings
            .bowlers
            .iter()
            .map(|b| Named::new(players, calculate_bowling_stats(innings, &b.uid)))
            .collect();

        let partnerships = calculate_partnerships(innings, overlay)
            .into_iter()
            .map(|p| PartnershipCard::new(players, p))
            .collect();

        let fall_of_wickets = calculate_fall_of_wickets(innings)
            .into_iter()
            .map(|w| Named::new(players, w))
            .collect();

        let (target, required) = match (innings_number, m.target()) {
            (2, Some(target)) => {
                let balls_remaining = (u64::from(m.total_overs) * u64::from(BALLS_PER_OVER))
                    .saturating_sub(innings.total_balls());
                (
                    Some(target),
                    Some(required_run_rate(target, innings.runs, balls_remaining)),
                )
            }
            _ => (None, None),
        };

        Some(Scorecard {
            innings_number,
            is_live: m.is_live_innings(innings_number),
            runs: innings.runs,
            wickets: innings.wickets,
            overs: innings.overs,
            balls: innings.balls,
            run_rate: current_run_rate(innings.runs, innings.overs, innings.balls),
            batting,
            did_not_bat,
            bowling,
            partnerships,
            fall_of_wickets,
            extras: calculate_extras(innings),
            over_summary: calculate_over_summary(innings),
            target,
            required_run_rate: required,
        })
    }
}

/// Log order of first appearance, then live batsmen yet to be credited.
fn batting_order(m: &Match, innings_number: u8) -> Vec<PlayerUid> {
    let mut order = m
        .innings(innings_number)
        .map(|i| i.batting_order())
        .unwrap_or_default();
    for batsman in m.live_overlay(innings_number) {
        if !order.contains(&batsman.uid) {
            order.push(batsman.uid.clone());
        }
    }
    order
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHighlights {
    pub top_scorer: Option<Named<BattingStats>>,
    pub best_bowler: Option<Named<BowlingStats>>,
    pub highest_partnership: Option<PartnershipCard>,
    pub best_strike_rate: Option<Named<BattingStats>>,
}

impl MatchHighlights {
    /// Highlights across every innings played so far.
    pub fn compile(m: &Match, players: &[User], min_strike_rate_balls: u32) -> Self {
        let mut batting = Vec::new();
        let mut bowling = Vec::new();
        let mut partnerships = Vec::new();

        for number in [1u8, 2] {
            let Some(innings) = m.innings(number) else {
                continue;
            };
            let overlay = m.live_overlay(number);
            batting.extend(
                batting_order(m, number)
                    .iter()
                    .map(|uid| calculate_batting_stats(innings, uid, overlay)),
            );
            bowling.extend(
                innings
                    .bowlers
                    .iter()
                    .map(|b| calculate_bowling_stats(innings, &b.uid)),
            );
            partnerships.extend(calculate_partnerships(innings, overlay));
        }

        let highlights =
            Highlights::select(&batting, &bowling, &partnerships, min_strike_rate_balls);

        MatchHighlights {
            top_scorer: highlights
                .top_scorer
                .map(|s| Named::new(players, s)),
            best_bowler: highlights
                .best_bowler
                .map(|s| Named::new(players, s)),
            highest_partnership: highlights
                .highest_partnership
                .map(|p| PartnershipCard::new(players, p)),
            best_strike_rate: highlights
                .best_strike_rate
                .map(|s| Named::new(players, s)),
        }
    }
}
