use crate::domain::{ExtrasBreakdown, InningsScore};

/// Sum runs off wides and no-balls.
///
/// A delivery flagged as both wide and no-ball counts in both buckets.
pub fn calculate_extras(innings: &InningsScore) -> ExtrasBreakdown {
    let mut extras = ExtrasBreakdown::default();

    for ball in &innings.ball_events {
        if ball.is_wide {
            extras.wides += ball.runs;
        }
        if ball.is_no_ball {
            extras.no_balls += ball.runs;
        }
    }

    extras.total = extras.wides + extras.no_balls;
    extras
}
