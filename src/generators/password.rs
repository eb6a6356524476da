// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CharClass, GenerationOptions};

/// Random password generator over configurable character classes.
///
/// Every enabled class contributes at least one character whenever the
/// requested length allows it. Draws come from the OS random source;
/// a general-purpose PRNG is not acceptable for password material.
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a single password of exactly `options.length` characters.
    pub fn generate(&self, options: &GenerationOptions) -> String {
        let mut rng = OsRng;
        let classes = options.enabled_classes();

        // Union alphabet over the enabled classes, lowercase when
        // nothing is selected so the alphabet is never empty.
        let mut alphabet: Vec<u8> = Vec::new();
        for class in &classes {
            alphabet.extend_from_slice(class.charset());
        }
        if alphabet.is_empty() {
            alphabet.extend_from_slice(CharClass::Lower.charset());
        }

        // One mandatory character per enabled class, kept in priority
        // order so truncation below drops the lowest-priority classes.
        let mut chars: Vec<u8> = classes
            .iter()
            .take(options.length)
            .map(|class| {
                let set = class.charset();
                set[rng.gen_range(0..set.len())]
            })
            .collect();

        while chars.len() < options.length {
            chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }

        // Fisher-Yates, so the mandatory characters are not clustered
        // at the front.
        chars.shuffle(&mut rng);
        chars.truncate(options.length);

        String::from_utf8(chars).expect("charsets are ASCII")
    }

    /// Generate `count` independent passwords from the same options.
    pub fn generate_many(&self, options: &GenerationOptions, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate(options)).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(length: usize, classes: &[CharClass]) -> GenerationOptions {
        GenerationOptions::from_classes(length, classes)
    }

    #[test]
    fn generates_exact_length() {
        let generator = PasswordGenerator::new();
        for length in [1, 4, 8, 16, 64, 256] {
            let password = generator.generate(&options(length, &CharClass::ALL));
            assert_eq!(password.len(), length, "expected {} chars", length);
        }
    }

    #[test]
    fn covers_every_enabled_class() {
        let generator = PasswordGenerator::new();
        for _ in 0..50 {
            let password = generator.generate(&options(8, &CharClass::ALL));
            for class in CharClass::ALL {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "missing {} in {:?}",
                    class,
                    password
                );
            }
        }
    }

    #[test]
    fn lowercase_only_stays_lowercase() {
        let generator = PasswordGenerator::new();
        let opts = options(16, &[CharClass::Lower]);
        for _ in 0..200 {
            let password = generator.generate(&opts);
            assert_eq!(password.len(), 16);
            assert!(
                password.chars().all(|c| c.is_ascii_lowercase()),
                "disallowed character in {:?}",
                password
            );
        }
    }

    #[test]
    fn empty_class_set_falls_back_to_lowercase() {
        let generator = PasswordGenerator::new();
        let password = generator.generate(&options(12, &[]));
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn short_length_still_exact_with_all_classes() {
        let generator = PasswordGenerator::new();
        for length in 1..4 {
            let password = generator.generate(&options(length, &CharClass::ALL));
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn length_two_keeps_highest_priority_classes() {
        // With all four classes and length 2, only the two
        // highest-priority classes (upper, lower) get a mandatory slot.
        let generator = PasswordGenerator::new();
        for _ in 0..100 {
            let password = generator.generate(&options(2, &CharClass::ALL));
            assert!(password.chars().any(|c| CharClass::Upper.contains(c)));
            assert!(password.chars().any(|c| CharClass::Lower.contains(c)));
        }
    }

    #[test]
    fn batch_generates_independent_passwords() {
        let generator = PasswordGenerator::new();
        let batch = generator.generate_many(&GenerationOptions::default(), 5);
        assert_eq!(batch.len(), 5);
        for password in &batch {
            assert_eq!(password.len(), 16);
        }
    }
}
