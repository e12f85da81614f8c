//! Partnership segmentation over the ball-by-ball log.

use crate::domain::{Batsman, InningsScore, Partnership, PlayerUid};

/// Open partnership while scanning the log.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PartnershipState {
    batsman1_uid: Option<PlayerUid>,
    batsman2_uid: Option<PlayerUid>,
    runs: u32,
    batsman1_runs: u32,
    batsman2_runs: u32,
    balls: u32,
    wicket_number: u32,
}

impl PartnershipState {
    fn new(wicket_number: u32, survivor: Option<PlayerUid>) -> Self {
        Self {
            batsman1_uid: survivor,
            batsman2_uid: None,
            runs: 0,
            batsman1_runs: 0,
            batsman2_runs: 0,
            balls: 0,
            wicket_number,
        }
    }

    fn register(&mut self, uid: &PlayerUid) {
        match (&self.batsman1_uid, &self.batsman2_uid) {
            (None, _) => self.batsman1_uid = Some(uid.clone()),
            (Some(first), None) if first != uid => self.batsman2_uid = Some(uid.clone()),
            _ => {}
        }
    }

    /// Credit runs to the shared total and to the matching slot.
    ///
    /// A batter in neither slot only adds to the shared total.
    fn credit(&mut self, uid: Option<&PlayerUid>, runs: u32) {
        self.runs += runs;
        if uid.is_some() && uid == self.batsman1_uid.as_ref() {
            self.batsman1_runs += runs;
        } else if uid.is_some() && uid == self.batsman2_uid.as_ref() {
            self.batsman2_runs += runs;
        }
    }

    fn is_established(&self) -> bool {
        self.batsman1_uid.is_some() && self.batsman2_uid.is_some()
    }

    fn to_record(&self) -> Option<Partnership> {
        Some(Partnership {
            runs: self.runs,
            wicket_number: self.wicket_number,
            batsman1_uid: self.batsman1_uid.clone()?,
            batsman2_uid: self.batsman2_uid.clone()?,
            batsman1_runs: self.batsman1_runs,
            batsman2_runs: self.batsman2_runs,
            balls: self.balls,
        })
    }

    /// The tracked batter not dismissed by this delivery.
    fn survivor(&self, dismissed: Option<&PlayerUid>) -> Option<PlayerUid> {
        if dismissed.is_some() && dismissed == self.batsman1_uid.as_ref() {
            self.batsman2_uid.clone()
        } else {
            self.batsman1_uid.clone()
        }
    }
}

/// Split the innings into partnerships.
///
/// A wicket only closes a partnership once both slots are filled, so a wicket
/// before the second batter has been credited leaves the partnership open
/// and does not advance its wicket number. The trailing unbroken partnership
/// is emitted when established and `runs > 0`.
///
/// `_current_batsmen` is accepted for parity with the batting calculator;
/// segmentation reads the log only.
pub fn calculate_partnerships(
    innings: &InningsScore,
    _current_batsmen: &[Batsman],
) -> Vec<Partnership> {
    let mut partnerships = Vec::new();
    let mut current = PartnershipState::new(1, None);

    for ball in &innings.ball_events {
        let striker = ball.batsman_uid.as_ref();
        if let Some(uid) = striker {
            current.register(uid);
        }

        current.credit(striker, ball.runs);
        if ball.is_legal() {
            current.balls += 1;
        }

        if ball.is_wicket && current.is_established() {
            partnerships.extend(current.to_record());
            let survivor = current.survivor(striker);
            current = PartnershipState::new(current.wicket_number + 1, survivor);
        }
    }

    if current.is_established() && current.runs > 0 {
        partnerships.extend(current.to_record());
    }

    partnerships
}
