pub mod api;
pub mod compile;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;

pub use compile::{MatchHighlights, Scorecard, ScorecardCache};
pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{
    BallEvent, Batsman, BattingStats, Bowler, BowlingStats, Decimal, ExtrasBreakdown,
    FallOfWicket, InningsScore, Match, MatchId, MatchStatus, OverSummary, Partnership, PlayerUid,
    TimeMs, User,
};
pub use error::AppError;
