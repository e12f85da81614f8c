//! Memoization of compiled scorecards keyed by a content hash of their inputs.
//!
//! The key is the SHA-256 of the canonical JSON of the match document, the
//! player list and the innings number, so any upstream write produces a new
//! key and stale entries simply age out.

use super::Scorecard;
use crate::domain::{Match, User};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheKeyInput<'a> {
    innings_number: u8,
    r#match: &'a Match,
    players: &'a [User],
}

/// Compute the content hash for a scorecard request.
pub fn content_hash(
    m: &Match,
    innings_number: u8,
    players: &[User],
) -> Result<String, serde_json::Error> {
    let canonical = serde_json::to_vec(&CacheKeyInput {
        innings_number,
        r#match: m,
        players,
    })?;
    Ok(hex::encode(Sha256::digest(&canonical)))
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, Arc<Scorecard>>,
    order: VecDeque<String>,
}

/// Bounded FIFO cache of compiled scorecards.
///
/// A capacity of zero disables caching.
pub struct ScorecardCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl ScorecardCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Return the cached scorecard for these inputs, compiling it on a miss.
    ///
    /// `None` when the innings does not exist.
    pub fn get_or_compile(
        &self,
        m: &Match,
        innings_number: u8,
        players: &[User],
    ) -> Option<Arc<Scorecard>> {
        if self.capacity == 0 {
            return Scorecard::compile(m, innings_number, players).map(Arc::new);
        }

        let key = match content_hash(m, innings_number, players) {
            Ok(key) => key,
            Err(e) => {
                warn!(match_id = %m.id, error = %e, "Failed to hash scorecard inputs, compiling uncached");
                return Scorecard::compile(m, innings_number, players).map(Arc::new);
            }
        };

        if let Some(hit) = self.lock().entries.get(&key) {
            debug!(match_id = %m.id, innings_number, "Scorecard cache hit");
            return Some(hit.clone());
        }

        debug!(match_id = %m.id, innings_number, "Scorecard cache miss");
        let scorecard = Arc::new(Scorecard::compile(m, innings_number, players)?);

        let mut inner = self.lock();
        if !inner.entries.contains_key(&key) {
            while inner.order.len() >= self.capacity {
                match inner.order.pop_front() {
                    Some(evicted) => {
                        inner.entries.remove(&evicted);
                    }
                    None => break,
                }
            }
            inner.order.push_back(key.clone());
            inner.entries.insert(key, scorecard.clone());
        }

        Some(scorecard)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BallEvent, InningsScore, MatchId, MatchStatus, Team};

    fn sample_match(id: &str, runs: u32) -> Match {
        Match {
            id: MatchId::new(id),
            team_a: Team {
                name: "A".to_string(),
                players: Vec::new(),
            },
            team_b: Team {
                name: "B".to_string(),
                players: Vec::new(),
            },
            total_overs: 5,
            status: MatchStatus::Live,
            toss: None,
            current_innings: 1,
            innings1: InningsScore::from_events(vec![BallEvent::runs(runs, "a")]),
            innings2: None,
            current_batsmen: Vec::new(),
            umpire_uid: None,
        }
    }

    #[test]
    fn test_hash_is_stable_and_content_sensitive() {
        let m = sample_match("m1", 1);
        let h1 = content_hash(&m, 1, &[]).unwrap();
        let h2 = content_hash(&m, 1, &[]).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);

        assert_ne!(h1, content_hash(&m, 2, &[]).unwrap());
        assert_ne!(h1, content_hash(&sample_match("m1", 2), 1, &[]).unwrap());
    }

    #[test]
    fn test_hit_returns_same_allocation() {
        let cache = ScorecardCache::new(4);
        let m = sample_match("m1", 4);

        let first = cache.get_or_compile(&m, 1, &[]).unwrap();
        let second = cache.get_or_compile(&m, 1, &[]).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_fifo_eviction() {
        let cache = ScorecardCache::new(2);
        for runs in 0..3 {
            cache.get_or_compile(&sample_match("m1", runs), 1, &[]);
        }
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_missing_innings_is_not_cached() {
        let cache = ScorecardCache::new(2);
        assert!(cache.get_or_compile(&sample_match("m1", 1), 2, &[]).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let cache = ScorecardCache::new(0);
        let m = sample_match("m1", 1);
        let first = cache.get_or_compile(&m, 1, &[]).unwrap();
        let second = cache.get_or_compile(&m, 1, &[]).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert!(cache.is_empty());
    }
}
