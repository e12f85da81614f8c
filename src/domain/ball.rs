//! BallEvent: one delivery in an innings' append-only log.

use crate::domain::{PlayerUid, TimeMs};
use serde::{Deserialize, Serialize};

/// Balls per over.
pub const BALLS_PER_OVER: u32 = 6;

/// Outcome of a single delivery.
///
/// Position in `InningsScore::ball_events` is authoritative for ordering;
/// `timestamp` is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallEvent {
    /// Total runs off the delivery, extras included.
    pub runs: u32,
    #[serde(default)]
    pub is_wide: bool,
    #[serde(default)]
    pub is_no_ball: bool,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default)]
    pub is_dot: bool,
    /// Striker credited with the delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batsman_uid: Option<PlayerUid>,
    /// Bowler of the delivery. Older logs never carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler_uid: Option<PlayerUid>,
    #[serde(default)]
    pub timestamp: TimeMs,
}

impl BallEvent {
    /// A legal delivery with `runs` credited to `batsman`.
    pub fn runs(runs: u32, batsman: &str) -> Self {
        BallEvent {
            runs,
            batsman_uid: Some(PlayerUid::from(batsman)),
            ..Default::default()
        }
    }

    pub fn wide(runs: u32) -> Self {
        BallEvent {
            runs,
            is_wide: true,
            ..Default::default()
        }
    }

    pub fn no_ball(runs: u32) -> Self {
        BallEvent {
            runs,
            is_no_ball: true,
            ..Default::default()
        }
    }

    /// A legal wicket delivery dismissing `batsman`.
    pub fn wicket(batsman: &str) -> Self {
        BallEvent {
            is_wicket: true,
            batsman_uid: Some(PlayerUid::from(batsman)),
            ..Default::default()
        }
    }

    pub fn by(mut self, batsman: &str) -> Self {
        self.batsman_uid = Some(PlayerUid::from(batsman));
        self
    }

    pub fn bowled_by(mut self, bowler: &str) -> Self {
        self.bowler_uid = Some(PlayerUid::from(bowler));
        self
    }

    pub fn at(mut self, timestamp: i64) -> Self {
        self.timestamp = TimeMs::new(timestamp);
        self
    }

    /// Counts toward the six-ball over.
    pub fn is_legal(&self) -> bool {
        !self.is_wide && !self.is_no_ball
    }

    /// `runs == 0 || isDot`, regardless of legality.
    pub fn is_dot_outcome(&self) -> bool {
        self.runs == 0 || self.is_dot
    }

    pub fn is_four(&self) -> bool {
        self.runs == 4
    }

    pub fn is_six(&self) -> bool {
        self.runs == 6
    }

    pub fn credits(&self, uid: &PlayerUid) -> bool {
        self.batsman_uid.as_ref() == Some(uid)
    }
}
