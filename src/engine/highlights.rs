//! Match-level highlight selection across both teams.
//!
//! Every selector is a left fold: on ties the earlier record is kept.

use crate::domain::{BattingStats, BowlingStats, Partnership};
use serde::Serialize;

/// Default minimum balls faced to qualify for the best strike rate.
pub const MIN_STRIKE_RATE_BALLS: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub top_scorer: Option<BattingStats>,
    pub best_bowler: Option<BowlingStats>,
    pub highest_partnership: Option<Partnership>,
    pub best_strike_rate: Option<BattingStats>,
}

impl Highlights {
    pub fn select(
        batting: &[BattingStats],
        bowling: &[BowlingStats],
        partnerships: &[Partnership],
        min_strike_rate_balls: u32,
    ) -> Self {
        Highlights {
            top_scorer: top_scorer(batting).cloned(),
            best_bowler: best_bowler(bowling).cloned(),
            highest_partnership: highest_partnership(partnerships).cloned(),
            best_strike_rate: best_strike_rate(batting, min_strike_rate_balls).cloned(),
        }
    }
}

pub fn top_scorer(batting: &[BattingStats]) -> Option<&BattingStats> {
    batting
        .iter()
        .reduce(|best, b| if b.runs > best.runs { b } else { best })
}

/// Most wickets, then lowest economy.
///
/// Between two wicketless bowlers the lower economy only wins when it is
/// non-zero, so a bowler who has not bowled never displaces one who has.
pub fn best_bowler(bowling: &[BowlingStats]) -> Option<&BowlingStats> {
    bowling.iter().reduce(|best, b| {
        if b.wickets > best.wickets {
            return b;
        }
        if b.wickets < best.wickets {
            return best;
        }
        let better_economy = b.economy < best.economy;
        if b.wickets == 0 {
            if better_economy && !b.economy.is_zero() {
                b
            } else {
                best
            }
        } else if better_economy {
            b
        } else {
            best
        }
    })
}

pub fn highest_partnership(partnerships: &[Partnership]) -> Option<&Partnership> {
    partnerships
        .iter()
        .reduce(|best, p| if p.runs > best.runs { p } else { best })
}

/// Highest strike rate among batsmen with at least `min_balls` faced.
pub fn best_strike_rate(batting: &[BattingStats], min_balls: u32) -> Option<&BattingStats> {
    batting
        .iter()
        .filter(|b| b.balls >= min_balls)
        .reduce(|best, b| if b.strike_rate > best.strike_rate { b } else { best })
}
