//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::application::Locale;

/// Candidates-per-day calculator: cpd = 86400 * fermat * primes^10
#[derive(Parser, Debug)]
#[command(name = "cpdcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Language of prompts and messages
    #[arg(long, value_enum, default_value_t = Locale::En, global = true)]
    pub lang: Locale,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute CPD once, without prompting
    Eval {
        /// Fermat tests per second ('.' or ',' as decimal separator)
        #[arg(allow_hyphen_values = true)]
        fermat: String,
        /// Prime ratio, e.g. 0.105
        #[arg(allow_hyphen_values = true)]
        primes: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
