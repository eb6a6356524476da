// src/cli/menu.rs
use inquire::{Confirm, CustomType, Password, PasswordDisplayMode, Select};

use crate::cli::handlers;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{CharClass, GenerationOptions};
use crate::strength::StrengthRater;

const CHECK: &str = "🔍  Check a password";
const GENERATE: &str = "🎲  Generate a password";
const BATCH: &str = "📋  Generate a batch of passwords";
const EXIT: &str = "🚪  Exit";

pub fn run_menu(config: &Config) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║            🔐 PASSGAUGE              ║");
    println!("║  Password strength checker & forge   ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();
    let rater = StrengthRater::new();

    loop {
        println!();
        let choice = Select::new(
            "What would you like to do?",
            vec![CHECK, GENERATE, BATCH, EXIT],
        )
        .prompt()?;

        match choice {
            CHECK => {
                let password = Password::new("Password to check:")
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;

                let report = rater.rate(&password);
                handlers::print_report(&report);
            }
            GENERATE => {
                let options = prompt_options(config)?;
                if let Err(e) = validate_length(options.length) {
                    eprintln!("❌ {}", e);
                    continue;
                }

                let strong = Confirm::new("Keep regenerating until it rates Strong?")
                    .with_default(false)
                    .prompt()?;

                let (password, report) = if strong {
                    handlers::generate_strong(&generator, &rater, &options)
                } else {
                    let password = generator.generate(&options);
                    let report = rater.rate(&password);
                    (password, report)
                };

                println!("\nGenerated password: {}", password);
                handlers::print_report(&report);
            }
            BATCH => {
                let count: usize = CustomType::new("How many passwords?")
                    .with_default(config.default_batch_count)
                    .with_error_message("Please enter a number")
                    .prompt()?;
                if count < 1 {
                    eprintln!("❌ count must be at least 1");
                    continue;
                }

                let options = prompt_options(config)?;
                if let Err(e) = validate_length(options.length) {
                    eprintln!("❌ {}", e);
                    continue;
                }

                println!();
                for password in generator.generate_many(&options, count) {
                    let report = rater.rate(&password);
                    println!(
                        "{}  {} {}",
                        password,
                        crate::utils::format::strength_meter(report.score),
                        crate::utils::format::score_style(report.score).apply_to(&report.label),
                    );
                }
            }
            _ => {
                println!("👋 Goodbye!");
                break;
            }
        }
    }

    Ok(())
}

fn prompt_options(config: &Config) -> anyhow::Result<GenerationOptions> {
    let length: usize = CustomType::new("Password length:")
        .with_default(config.default_password_length)
        .with_error_message("Please enter a number")
        .prompt()?;

    let defaults = &config.default_classes;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(defaults.contains(&CharClass::Upper))
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(defaults.contains(&CharClass::Lower))
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(defaults.contains(&CharClass::Digit))
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(defaults.contains(&CharClass::Symbol))
        .prompt()?;

    Ok(GenerationOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    })
}

fn validate_length(length: usize) -> Result<(), String> {
    if length < 1 || length > handlers::MAX_LENGTH {
        Err(format!(
            "password length must be between 1 and {}",
            handlers::MAX_LENGTH
        ))
    } else {
        Ok(())
    }
}
