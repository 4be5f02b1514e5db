//! High score leaderboard system
//!
//! Persisted as JSON, tracks the top 10 survival scores.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, persistence};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Seconds survived
    pub score: u32,
    /// Frame the craft was hit on
    pub frames: u32,
    /// Unix timestamp (seconds) of the run
    pub timestamp: u64,
}

impl HighScoreEntry {
    /// Ordering key: score, then how far into the next second the run got
    fn standing(&self) -> (u32, u32) {
        (self.score, self.frames)
    }
}

/// Best runs, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run ending at `score` after `frames` would make the table
    pub fn qualifies(&self, score: u32, frames: u32) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_HIGH_SCORES
            || self
                .entries
                .last()
                .is_some_and(|worst| (score, frames) > worst.standing())
    }

    /// Record a run. Returns its 1-based rank, or `None` if it missed the table.
    /// A run level with an existing entry goes below it.
    pub fn add_score(&mut self, score: u32, frames: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score, frames) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            frames,
            timestamp,
        };
        let index = self
            .entries
            .partition_point(|e| e.standing() >= entry.standing());
        self.entries.insert(index, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from `path`, starting fresh if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match persistence::load_json::<HighScores>(path) {
            Ok(Some(scores)) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high scores at {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        persistence::save_json(path, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

/// Seconds since the Unix epoch (0 if the clock is before it)
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(0, 30, 1), None);
        assert!(hs.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_rank() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(10, 600, 1), Some(1));
        assert_eq!(hs.add_score(30, 1800, 2), Some(1));
        assert_eq!(hs.add_score(20, 1200, 3), Some(2));
        assert_eq!(hs.add_score(20, 1200, 4), Some(3));
        let scores: Vec<u32> = hs.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 20, 10]);
        // Earlier 20 stays ahead of the later one
        assert_eq!(hs.entries[1].timestamp, 3);
        assert_eq!(hs.top_score(), Some(30));
    }

    #[test]
    fn test_keeps_top_ten() {
        let mut hs = HighScores::new();
        for s in 1..=15 {
            hs.add_score(s, s * 60, u64::from(s));
        }
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries.last().map(|e| e.score), Some(6));
        assert!(!hs.qualifies(6, 360));
        assert!(hs.qualifies(6, 361));
        assert!(hs.qualifies(7, 420));
    }

    #[test]
    fn test_equal_scores_rank_by_survival() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(3, 190, 1), Some(1));
        assert_eq!(hs.add_score(3, 235, 2), Some(1));
        assert_eq!(hs.add_score(3, 200, 3), Some(2));
        assert_eq!(hs.add_score(4, 240, 4), Some(1));
        let frames: Vec<u32> = hs.entries.iter().map(|e| e.frames).collect();
        assert_eq!(frames, vec![240, 235, 200, 190]);
    }
}
