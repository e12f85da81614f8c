use crate::domain::{InningsScore, OverSummary, BALLS_PER_OVER};

/// Runs and wickets per over.
///
/// Every delivery adds to the current over; only legal ones advance the
/// six-ball counter that closes it. A trailing over with at least one legal
/// ball is emitted as incomplete.
pub fn calculate_over_summary(innings: &InningsScore) -> Vec<OverSummary> {
    let mut overs = Vec::new();
    let mut current_over_runs = 0u32;
    let mut current_over_wickets = 0u32;
    let mut legal_balls = 0u32;

    for ball in &innings.ball_events {
        current_over_runs += ball.runs;
        if ball.is_wicket {
            current_over_wickets += 1;
        }
        if ball.is_legal() {
            legal_balls += 1;
        }

        if legal_balls == BALLS_PER_OVER {
            overs.push(OverSummary {
                over_number: overs.len() as u32 + 1,
                runs: current_over_runs,
                wickets: current_over_wickets,
                legal_balls,
            });
            current_over_runs = 0;
            current_over_wickets = 0;
            legal_balls = 0;
        }
    }

    if legal_balls > 0 {
        overs.push(OverSummary {
            over_number: overs.len() as u32 + 1,
            runs: current_over_runs,
            wickets: current_over_wickets,
            legal_balls,
        });
    }

    overs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BallEvent;

    #[test]
    fn test_wide_mid_over_joins_the_over() {
        let mut events = vec![BallEvent::runs(1, "a"); 6];
        events.insert(3, BallEvent::wide(1));

        let overs = calculate_over_summary(&InningsScore::from_events(events));
        assert_eq!(overs.len(), 1);
        assert_eq!(overs[0].over_number, 1);
        assert_eq!(overs[0].runs, 7);
        assert_eq!(overs[0].wickets, 0);
    }

    #[test]
    fn test_partial_over_is_emitted() {
        let mut events = vec![BallEvent::runs(2, "a"); 6];
        events.push(BallEvent::wicket("a"));
        events.push(BallEvent::runs(3, "b"));

        let overs = calculate_over_summary(&InningsScore::from_events(events));
        assert_eq!(overs.len(), 2);
        assert_eq!(overs[1].over_number, 2);
        assert_eq!(overs[1].runs, 3);
        assert_eq!(overs[1].wickets, 1);
        assert_eq!(overs[1].legal_balls, 2);
    }

    #[test]
    fn test_trailing_extras_without_legal_ball_are_not_emitted() {
        let mut events = vec![BallEvent::runs(0, "a"); 6];
        events.push(BallEvent::wide(1));

        let overs = calculate_over_summary(&InningsScore::from_events(events));
        assert_eq!(overs.len(), 1);
        assert_eq!(overs[0].runs, 0);
    }
}
