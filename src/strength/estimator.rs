// src/strength/estimator.rs
use serde::{Deserialize, Serialize};

/// Raw output of a strength estimator, before blacklist handling and
/// label mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// 0 (weakest) to 4 (strongest).
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    /// Display string for the offline slow-hashing crack-time scenario.
    pub crack_time: String,
}

/// Heuristic strength estimator. Kept behind a trait so tests can pin
/// the score and feedback instead of re-deriving zxcvbn's heuristics.
pub trait Estimator {
    fn estimate(&self, password: &str) -> Estimate;
}

/// Production estimator backed by the zxcvbn crate.
pub struct ZxcvbnEstimator;

impl Estimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> Estimate {
        let entropy = zxcvbn::zxcvbn(password, &[]);

        let mut warning = None;
        let mut suggestions = Vec::new();
        if let Some(feedback) = entropy.feedback() {
            warning = feedback.warning().map(|w| w.to_string());
            suggestions = feedback
                .suggestions()
                .iter()
                .map(|s| s.to_string())
                .collect();
        }

        Estimate {
            score: entropy.score().into(),
            warning,
            suggestions,
            crack_time: entropy
                .crack_times()
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_passwords_score_low() {
        let estimate = ZxcvbnEstimator.estimate("abc123");
        assert!(estimate.score <= 1);
    }

    #[test]
    fn long_random_passwords_score_high() {
        let estimate = ZxcvbnEstimator.estimate("kT9#vR2$mW8@qL5!");
        assert!(estimate.score >= 3);
        assert!(!estimate.crack_time.is_empty());
    }
}
