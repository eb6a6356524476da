// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Character classes a generated password can draw from, in fixed
/// priority order. When the requested length is too short to cover
/// every enabled class, mandatory characters are dropped from the
/// end of this order (symbols first, uppercase last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn charset(&self) -> &'static [u8] {
        match self {
            CharClass::Upper => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Lower => b"abcdefghijklmnopqrstuvwxyz",
            CharClass::Digit => b"0123456789",
            CharClass::Symbol => b"!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.charset().contains(&(c as u8))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Upper => write!(f, "upper"),
            CharClass::Lower => write!(f, "lower"),
            CharClass::Digit => write!(f, "digit"),
            CharClass::Symbol => write!(f, "symbol"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown character class '{0}' (expected upper, lower, digit or symbol)")]
pub struct ParseCharClassError(pub String);

impl FromStr for CharClass {
    type Err = ParseCharClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharClass::Upper),
            "lower" | "lowercase" => Ok(CharClass::Lower),
            "digit" | "digits" | "number" | "numbers" => Ok(CharClass::Digit),
            "symbol" | "symbols" | "special" => Ok(CharClass::Symbol),
            other => Err(ParseCharClassError(other.to_string())),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationOptions {
    pub fn from_classes(length: usize, classes: &[CharClass]) -> Self {
        Self {
            length,
            include_uppercase: classes.contains(&CharClass::Upper),
            include_lowercase: classes.contains(&CharClass::Lower),
            include_numbers: classes.contains(&CharClass::Digit),
            include_symbols: classes.contains(&CharClass::Symbol),
        }
    }

    /// Enabled classes in priority order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::new();
        if self.include_uppercase {
            classes.push(CharClass::Upper);
        }
        if self.include_lowercase {
            classes.push(CharClass::Lower);
        }
        if self.include_numbers {
            classes.push(CharClass::Digit);
        }
        if self.include_symbols {
            classes.push(CharClass::Symbol);
        }
        classes
    }
}

/// Character-composition checks shown alongside the strength score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub length_ok: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl Checklist {
    pub fn all_met(&self) -> bool {
        self.length_ok && self.has_upper && self.has_lower && self.has_digit && self.has_symbol
    }
}

/// Result of rating a single password.
///
/// `score` is -1 for empty input, otherwise 0-4 where a blacklist hit
/// forces 0 regardless of what the estimator said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: i8,
    pub label: String,
    pub checks: Checklist,
    pub feedback: Vec<String>,
    pub blacklisted: bool,
    /// Human-readable crack-time estimate, display-only.
    pub crack_time: Option<String>,
}

/// One generated candidate together with its rated score, as emitted
/// by `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCandidate {
    pub password: String,
    pub score: i8,
    pub label: String,
}
