// src/strength/mod.rs
pub mod blacklist;
pub mod estimator;

pub use estimator::{Estimate, Estimator, ZxcvbnEstimator};

use crate::models::{Checklist, StrengthReport};

pub const LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"];
pub const EMPTY_LABEL: &str = "Enter a password";
pub const BLACKLIST_NOTICE: &str =
    "This is a commonly used password. Please choose something unique!";

/// Minimum length the checklist considers acceptable.
const MIN_LENGTH: usize = 8;

/// Rates passwords: composition checklist, blacklist override, and an
/// estimator-backed 0-4 score mapped to a human-readable label.
///
/// Stateless apart from the estimator; rating the same password twice
/// yields the same report.
pub struct StrengthRater<E = ZxcvbnEstimator> {
    estimator: E,
}

impl StrengthRater {
    pub fn new() -> Self {
        Self {
            estimator: ZxcvbnEstimator,
        }
    }
}

impl Default for StrengthRater {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator> StrengthRater<E> {
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn rate(&self, password: &str) -> StrengthReport {
        if password.is_empty() {
            return StrengthReport {
                score: -1,
                label: EMPTY_LABEL.to_string(),
                checks: Checklist::default(),
                feedback: Vec::new(),
                blacklisted: false,
                crack_time: None,
            };
        }

        let checks = checklist(password);
        let blacklisted = blacklist::is_blacklisted(password);
        let estimate = self.estimator.estimate(password);

        // A blacklist hit floors the score no matter what the
        // estimator thought of the password.
        let score = if blacklisted { 0 } else { estimate.score.min(4) };

        let mut feedback = Vec::new();
        if blacklisted {
            feedback.push(BLACKLIST_NOTICE.to_string());
        }
        if let Some(warning) = estimate.warning {
            if !warning.is_empty() {
                feedback.push(warning);
            }
        }
        feedback.extend(estimate.suggestions);

        StrengthReport {
            score: score as i8,
            label: LABELS[score as usize].to_string(),
            checks,
            feedback,
            blacklisted,
            crack_time: Some(estimate.crack_time),
        }
    }
}

fn checklist(password: &str) -> Checklist {
    Checklist {
        length_ok: password.chars().count() >= MIN_LENGTH,
        has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}
