//! Persisted best scores, one integer per round key.
//!
//! Backed by LocalStorage on wasm32, in-memory only natively. Read at round
//! start, written only when the finished score beats the stored one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Best score per round identifier
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub scores: BTreeMap<String, i32>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dart_wheel_highscores";

    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored best for a round, zero when none
    pub fn get(&self, round: &str) -> i32 {
        self.scores.get(round).copied().unwrap_or(0)
    }

    /// Record a finished score; stores it only when it beats the current
    /// best and reports whether it did
    pub fn record(&mut self, round: &str, score: i32) -> bool {
        if score <= self.get(round) {
            return false;
        }
        self.scores.insert(round.to_string(), score);
        true
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores", scores.scores.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} rounds)", self.scores.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_round_reads_zero() {
        let scores = HighScores::new();
        assert_eq!(scores.get("wheel"), 0);
    }

    #[test]
    fn test_record_only_improvements() {
        let mut scores = HighScores::new();
        assert!(scores.record("wheel", 450));
        assert!(!scores.record("wheel", 450));
        assert!(!scores.record("wheel", 300));
        assert!(scores.record("wheel", 600));
        assert_eq!(scores.get("wheel"), 600);

        // Keys are independent
        assert!(scores.record("wheel_hard", 100));
        assert_eq!(scores.get("wheel"), 600);
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut scores = HighScores::new();
        scores.record("wheel", 450);
        let json = serde_json::to_string(&scores).unwrap();
        let loaded: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.get("wheel"), 450);
    }
}
