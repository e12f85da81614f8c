//! Pure statistics engine over an innings' ball-by-ball log.
//!
//! Every function takes an immutable snapshot and returns freshly built
//! values; nothing here performs I/O or keeps state between calls.

pub mod batting;
pub mod bowling;
pub mod extras;
pub mod fall_of_wickets;
pub mod highlights;
pub mod overs;
pub mod partnerships;
pub mod players;
pub mod run_rate;

pub use batting::{calculate_batting_stats, strike_rate, BattingState, DotRule};
pub use bowling::{calculate_bowling_stats, economy};
pub use extras::calculate_extras;
pub use fall_of_wickets::calculate_fall_of_wickets;
pub use highlights::{Highlights, MIN_STRIKE_RATE_BALLS};
pub use overs::calculate_over_summary;
pub use partnerships::calculate_partnerships;
pub use players::{resolve_player_name, UNKNOWN_PLAYER};
pub use run_rate::{
    compare_run_rates, current_run_rate, required_run_rate, run_rate_progression,
    RunRateComparison, RunRatePoint,
};
