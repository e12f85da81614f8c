//! Domain types for the match statistics engine.
//!
//! This module provides:
//! - Exact rate arithmetic via the Decimal wrapper
//! - Domain primitives: TimeMs, PlayerUid, MatchId, TeamSide
//! - The ball-by-ball log, innings record and live batsmen overlay
//! - Derived statistics returned to the presentation layer
//! - Match and user documents

pub mod ball;
pub mod cricket_match;
pub mod decimal;
pub mod innings;
pub mod primitives;
pub mod stats;

pub use ball::{BallEvent, BALLS_PER_OVER};
pub use cricket_match::{Match, MatchStatus, Team, Toss, TossDecision, User};
pub use decimal::Decimal;
pub use innings::{Batsman, Bowler, InningsScore};
pub use primitives::{MatchId, PlayerUid, TeamSide, TimeMs};
pub use stats::{
    BattingStats, BowlingStats, ExtrasBreakdown, FallOfWicket, OverSummary, Partnership,
};
