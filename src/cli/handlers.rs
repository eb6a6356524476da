// src/cli/handlers.rs
use anyhow::{bail, Context};
use console::style;
use inquire::{Password, PasswordDisplayMode};

use crate::cli::CliCommand;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedCandidate, GenerationOptions, StrengthReport};
use crate::strength::StrengthRater;

pub const MAX_LENGTH: usize = 256;

/// Attempts before giving up on the `--strong` regeneration loop; a
/// short lowercase-only request may never reach a Strong rating.
const MAX_STRONG_ATTEMPTS: usize = 100;

pub fn handle_command(command: CliCommand, json: bool, config: &Config) -> anyhow::Result<()> {
    match command {
        CliCommand::Check { password } => handle_check(password, json),
        CliCommand::Generate {
            length,
            classes,
            count,
            strong,
        } => {
            let options = match classes {
                Some(classes) => GenerationOptions::from_classes(
                    length.unwrap_or(config.default_password_length),
                    &classes,
                ),
                None => GenerationOptions::from_classes(
                    length.unwrap_or(config.default_password_length),
                    &config.default_classes,
                ),
            };
            handle_generate(&options, count.unwrap_or(1), strong, json)
        }
    }
}

fn handle_check(password: Option<String>, json: bool) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to check:")
            .with_display_mode(PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()
            .context("failed to read password")?,
    };

    let report = StrengthRater::new().rate(&password);
    log::debug!("Rated password: score {}", report.score);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

pub fn handle_generate(
    options: &GenerationOptions,
    count: usize,
    strong: bool,
    json: bool,
) -> anyhow::Result<()> {
    if options.length < 1 || options.length > MAX_LENGTH {
        bail!("password length must be between 1 and {}", MAX_LENGTH);
    }
    if count < 1 {
        bail!("count must be at least 1");
    }

    let generator = PasswordGenerator::new();
    let rater = StrengthRater::new();

    let mut candidates = Vec::with_capacity(count);
    for _ in 0..count {
        let (password, report) = if strong {
            generate_strong(&generator, &rater, options)
        } else {
            let password = generator.generate(options);
            let report = rater.rate(&password);
            (password, report)
        };
        candidates.push(GeneratedCandidate {
            password,
            score: report.score,
            label: report.label,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        for candidate in &candidates {
            println!(
                "{}  {} {}",
                candidate.password,
                crate::utils::format::strength_meter(candidate.score),
                crate::utils::format::score_style(candidate.score).apply_to(&candidate.label),
            );
        }
    }

    Ok(())
}

/// Regenerate until the candidate rates at least Strong and is not
/// blacklisted, mirroring the generate-until-good behavior of the
/// original checker.
pub fn generate_strong(
    generator: &PasswordGenerator,
    rater: &StrengthRater,
    options: &GenerationOptions,
) -> (String, StrengthReport) {
    let mut password = generator.generate(options);
    let mut report = rater.rate(&password);

    for _ in 1..MAX_STRONG_ATTEMPTS {
        if report.score >= 3 && !report.blacklisted {
            return (password, report);
        }
        password = generator.generate(options);
        report = rater.rate(&password);
    }

    if report.score < 3 {
        log::warn!(
            "Gave up after {} attempts; best candidate rated {}",
            MAX_STRONG_ATTEMPTS,
            report.label
        );
    }
    (password, report)
}

pub fn print_report(report: &StrengthReport) {
    println!(
        "\nStrength: {} {}",
        crate::utils::format::strength_meter(report.score),
        crate::utils::format::score_style(report.score).apply_to(&report.label),
    );

    if let Some(crack_time) = &report.crack_time {
        println!("Estimated crack time: {}", crack_time);
    }

    println!("\nChecklist:");
    let checks = &report.checks;
    for (met, requirement) in [
        (checks.length_ok, "At least 8 characters"),
        (checks.has_upper, "Contains an uppercase letter"),
        (checks.has_lower, "Contains a lowercase letter"),
        (checks.has_digit, "Contains a number"),
        (checks.has_symbol, "Contains a symbol"),
    ] {
        println!("  {} {}", crate::utils::format::check_mark(met), requirement);
    }

    if !report.feedback.is_empty() {
        println!("\nSuggestions:");
        for line in &report.feedback {
            println!("  • {}", line);
        }
    }

    println!();
    if report.score < 0 {
        println!("{}", style("Enter a password to see its rating.").dim());
    } else if report.blacklisted {
        println!("{}", style("❌ This password is blacklisted. Choose another.").red());
    } else if report.score >= 3 {
        println!("{}", style("✅ Good password!").green());
    } else {
        println!("{}", style("❌ Password is too weak!").red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharClass;

    #[test]
    fn rejects_out_of_range_length() {
        let options = GenerationOptions::from_classes(0, &[CharClass::Lower]);
        assert!(handle_generate(&options, 1, false, true).is_err());

        let options = GenerationOptions::from_classes(MAX_LENGTH + 1, &[CharClass::Lower]);
        assert!(handle_generate(&options, 1, false, true).is_err());
    }

    #[test]
    fn rejects_zero_count() {
        let options = GenerationOptions::default();
        assert!(handle_generate(&options, 0, false, true).is_err());
    }

    #[test]
    fn strong_generation_reaches_strong_rating() {
        let generator = PasswordGenerator::new();
        let rater = StrengthRater::new();
        let options = GenerationOptions::default();
        let (password, report) = generate_strong(&generator, &rater, &options);
        assert_eq!(password.len(), 16);
        assert!(report.score >= 3);
        assert!(!report.blacklisted);
    }
}
