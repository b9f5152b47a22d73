//! Player-facing settings and their environment configuration.

use log::warn;

use crate::types::{Difficulty, DifficultyConfig};

/// Settings chosen outside of a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub time_limit: bool,
    /// Pile RNG seed; `None` seeds from the wall clock.
    pub seed: Option<u32>,
}

impl Settings {
    pub fn new(difficulty: Difficulty, time_limit: bool) -> Self {
        Self {
            difficulty,
            time_limit,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read settings from the environment.
    ///
    /// - `TAP_MATCH_DIFFICULTY`: easy | medium | hard (invalid values fall back to medium)
    /// - `TAP_MATCH_TIME_LIMIT`: "1" or "true" enables the countdown
    /// - `TAP_MATCH_SEED`: pile seed (u32)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let difficulty = lookup("TAP_MATCH_DIFFICULTY")
            .map(|s| difficulty_or_default(&s))
            .unwrap_or_default();

        let time_limit = lookup("TAP_MATCH_TIME_LIMIT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let seed = lookup("TAP_MATCH_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            difficulty,
            time_limit,
            seed,
        }
    }

    pub fn config(&self) -> DifficultyConfig {
        DifficultyConfig::preset(self.difficulty)
    }
}

/// Parse a difficulty key, falling back to the default for unknown keys.
pub fn difficulty_or_default(key: &str) -> Difficulty {
    Difficulty::from_str(key).unwrap_or_else(|| {
        let fallback = Difficulty::default();
        warn!(
            "unknown difficulty {:?}, using {}",
            key,
            fallback.as_str()
        );
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let s = Settings::from_lookup(lookup(&[]));
        assert_eq!(s, Settings::default());
        assert_eq!(s.difficulty, Difficulty::Medium);
        assert!(!s.time_limit);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_reads_all_variables() {
        let s = Settings::from_lookup(lookup(&[
            ("TAP_MATCH_DIFFICULTY", "Hard"),
            ("TAP_MATCH_TIME_LIMIT", "TRUE"),
            ("TAP_MATCH_SEED", " 77 "),
        ]));
        assert_eq!(s.difficulty, Difficulty::Hard);
        assert!(s.time_limit);
        assert_eq!(s.seed, Some(77));
        assert_eq!(s.config().layers, 7);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let s = Settings::from_lookup(lookup(&[
            ("TAP_MATCH_DIFFICULTY", "nightmare"),
            ("TAP_MATCH_TIME_LIMIT", "yes please"),
            ("TAP_MATCH_SEED", "-4"),
        ]));
        assert_eq!(s.difficulty, Difficulty::Medium);
        assert!(!s.time_limit);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_difficulty_or_default() {
        assert_eq!(difficulty_or_default("easy"), Difficulty::Easy);
        assert_eq!(difficulty_or_default(""), Difficulty::Medium);
    }
}
