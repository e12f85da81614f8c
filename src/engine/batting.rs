//! Batting figures for one player in an innings.

use crate::domain::{BallEvent, Batsman, BattingStats, Decimal, InningsScore, PlayerUid};

/// Where a player's batting figures come from.
///
/// A batter still at the crease takes runs and balls from the live scorer;
/// everyone else (dismissed, retired, never batted) derives fully from the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattingState<'a> {
    Live(&'a Batsman),
    Completed,
}

impl<'a> BattingState<'a> {
    pub fn resolve(player_uid: &PlayerUid, current_batsmen: &'a [Batsman]) -> Self {
        match current_batsmen.iter().find(|b| &b.uid == player_uid) {
            Some(batsman) => BattingState::Live(batsman),
            None => BattingState::Completed,
        }
    }

    /// Deliveries counted as dots in this state.
    ///
    /// The live branch counts dot outcomes on any delivery, the completed
    /// branch on legal deliveries only.
    pub fn dot_rule(&self) -> DotRule {
        match self {
            BattingState::Live(_) => DotRule::AnyDelivery,
            BattingState::Completed => DotRule::LegalOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotRule {
    AnyDelivery,
    LegalOnly,
}

impl DotRule {
    fn counts(&self, ball: &BallEvent) -> bool {
        match self {
            DotRule::AnyDelivery => ball.is_dot_outcome(),
            DotRule::LegalOnly => ball.is_legal() && ball.is_dot_outcome(),
        }
    }
}

/// Runs per 100 balls, 2 dp; zero before the first ball.
pub fn strike_rate(runs: u32, balls: u32) -> Decimal {
    (Decimal::ratio(runs.into(), balls.into()) * Decimal::hundred()).round_2dp()
}

pub fn calculate_batting_stats(
    innings: &InningsScore,
    player_uid: &PlayerUid,
    current_batsmen: &[Batsman],
) -> BattingStats {
    let state = BattingState::resolve(player_uid, current_batsmen);
    let dot_rule = state.dot_rule();
    let mut stats = BattingStats::empty(player_uid.clone());

    for ball in innings.ball_events.iter().filter(|b| b.credits(player_uid)) {
        if state == BattingState::Completed {
            stats.runs += ball.runs;
            if ball.is_legal() {
                stats.balls += 1;
            }
            if ball.is_wicket {
                stats.is_out = true;
            }
        }
        if ball.is_four() {
            stats.fours += 1;
        }
        if ball.is_six() {
            stats.sixes += 1;
        }
        if dot_rule.counts(ball) {
            stats.dots += 1;
        }
    }

    if let BattingState::Live(batsman) = state {
        stats.runs = batsman.runs;
        stats.balls = batsman.balls;
        stats.is_out = false;
    }

    stats.strike_rate = strike_rate(stats.runs, stats.balls);
    stats
}
