//! Run rates and the over-by-over run-rate comparison between innings.

use crate::domain::{Decimal, InningsScore, BALLS_PER_OVER};
use crate::engine::overs::calculate_over_summary;
use serde::Serialize;

/// Runs per over from legal balls bowled, 2 dp.
pub fn current_run_rate(runs: u32, overs: u32, balls: u32) -> Decimal {
    run_rate(
        runs,
        u64::from(overs) * u64::from(BALLS_PER_OVER) + u64::from(balls),
    )
}

/// Runs per over still needed; zero once reached or when no balls remain.
pub fn required_run_rate(target: u32, runs: u32, balls_remaining: u64) -> Decimal {
    run_rate(target.saturating_sub(runs), balls_remaining)
}

fn run_rate(runs: u32, legal_balls: u64) -> Decimal {
    Decimal::ratio(u64::from(runs) * u64::from(BALLS_PER_OVER), legal_balls).round_2dp()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRatePoint {
    pub over_number: u32,
    pub runs: u32,
    pub cumulative_runs: u32,
    /// Cumulative run rate after this over.
    pub run_rate: Decimal,
}

pub fn run_rate_progression(innings: &InningsScore) -> Vec<RunRatePoint> {
    let mut cumulative_runs = 0u32;
    let mut cumulative_balls = 0u64;

    calculate_over_summary(innings)
        .into_iter()
        .map(|over| {
            cumulative_runs = cumulative_runs.saturating_add(over.runs);
            cumulative_balls += u64::from(over.legal_balls);
            RunRatePoint {
                over_number: over.over_number,
                runs: over.runs,
                cumulative_runs,
                run_rate: run_rate(cumulative_runs, cumulative_balls),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRateComparison {
    pub over_number: u32,
    pub first_innings: Option<RunRatePoint>,
    pub second_innings: Option<RunRatePoint>,
}

/// Align both innings' progressions by over number.
pub fn compare_run_rates(
    first: &InningsScore,
    second: Option<&InningsScore>,
) -> Vec<RunRateComparison> {
    let first = run_rate_progression(first);
    let second = second.map(run_rate_progression).unwrap_or_default();
    let len = first.len().max(second.len());

    (0..len)
        .map(|i| RunRateComparison {
            over_number: i as u32 + 1,
            first_innings: first.get(i).cloned(),
            second_innings: second.get(i).cloned(),
        })
        .collect()
}
