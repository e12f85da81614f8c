use crate::domain::{FallOfWicket, InningsScore, BALLS_PER_OVER};
use tracing::debug;

/// Score and over at which each wicket fell.
///
/// The score includes extras and the wicket delivery itself. A wicket
/// delivery without a `batsmanUid` is skipped entirely: it is neither
/// numbered nor emitted.
pub fn calculate_fall_of_wickets(innings: &InningsScore) -> Vec<FallOfWicket> {
    let mut wickets = Vec::new();
    let mut current_score = 0u32;
    let mut current_overs = 0u32;
    let mut current_balls = 0u32;

    for (position, ball) in innings.ball_events.iter().enumerate() {
        current_score += ball.runs;
        if ball.is_legal() {
            current_balls += 1;
            if current_balls == BALLS_PER_OVER {
                current_overs += 1;
                current_balls = 0;
            }
        }

        if !ball.is_wicket {
            continue;
        }
        match &ball.batsman_uid {
            Some(uid) => wickets.push(FallOfWicket {
                wicket_number: wickets.len() as u32 + 1,
                score: current_score,
                overs: current_overs,
                balls: current_balls,
                batsman_uid: uid.clone(),
            }),
            None => debug!(position, "Skipping wicket delivery without batsmanUid"),
        }
    }

    wickets
}
