// src/cli/commands.rs
use clap::Subcommand;

use crate::models::CharClass;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to check (prompted for securely when omitted)
        password: Option<String>,
    },

    /// Generate one or more passwords
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Character classes to draw from: upper, lower, digit, symbol
        #[arg(long, value_delimiter = ',')]
        classes: Option<Vec<CharClass>>,

        /// Number of passwords to generate
        #[arg(long, short)]
        count: Option<usize>,

        /// Regenerate until the result rates at least Strong
        #[arg(long)]
        strong: bool,
    },
}
