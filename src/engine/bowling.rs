//! Bowling figures for one bowler in an innings.
//!
//! Overs, runs, wickets and maidens come from the scorer-maintained bowler
//! aggregate. The per-delivery breakdown (dots, wides, no-balls) needs a
//! bowler on each ball event; logs without `bowlerUid` report zeros.

use crate::domain::{
    BallEvent, BowlingStats, Decimal, InningsScore, PlayerUid, BALLS_PER_OVER,
};

/// Runs per over, 2 dp; zero before the first ball.
pub fn economy(runs: u32, total_balls: u64) -> Decimal {
    Decimal::ratio(u64::from(runs) * u64::from(BALLS_PER_OVER), total_balls).round_2dp()
}

pub fn calculate_bowling_stats(innings: &InningsScore, bowler_uid: &PlayerUid) -> BowlingStats {
    let Some(bowler) = innings.bowler(bowler_uid) else {
        return BowlingStats::empty(bowler_uid.clone());
    };

    let mut stats = BowlingStats {
        uid: bowler.uid.clone(),
        overs: bowler.overs,
        balls: bowler.balls,
        runs: bowler.runs,
        wickets: bowler.wickets,
        economy: economy(bowler.runs, bowler.total_balls()),
        dots: 0,
        wides: 0,
        no_balls: 0,
        maidens: bowler.maidens,
    };

    for ball in deliveries_by(innings, bowler_uid) {
        if ball.is_legal() && ball.is_dot_outcome() {
            stats.dots += 1;
        }
        if ball.is_wide {
            stats.wides += 1;
        }
        if ball.is_no_ball {
            stats.no_balls += 1;
        }
    }

    stats
}

fn deliveries_by<'a>(
    innings: &'a InningsScore,
    bowler_uid: &'a PlayerUid,
) -> impl Iterator<Item = &'a BallEvent> {
    innings
        .ball_events
        .iter()
        .filter(move |b| b.bowler_uid.as_ref() == Some(bowler_uid))
}
