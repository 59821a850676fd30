//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{format_cpd, Locale, Session};
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::{evaluate, parse_rate};
use crate::infrastructure::StdTerminal;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => _interactive(cli.lang),
        Some(Commands::Eval { fermat, primes }) => _eval(fermat, primes),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Result line for a single fermat/primes pair given as text.
pub fn eval_line(fermat: &str, primes: &str) -> CliResult<String> {
    let fermat_rate =
        parse_rate(fermat).map_err(|e| CliError::InvalidArgs(format!("fermat: {}", e)))?;
    let prime_ratio =
        parse_rate(primes).map_err(|e| CliError::InvalidArgs(format!("primes: {}", e)))?;
    let cpd = evaluate(fermat_rate, prime_ratio);
    debug!(fermat_rate, prime_ratio, cpd, "evaluated");
    Ok(format_cpd(cpd))
}

#[instrument]
fn _interactive(lang: Locale) -> CliResult<()> {
    let mut session = Session::new(StdTerminal::stdio(), lang);
    let summary = session.run()?;
    debug!(?summary, "interactive session done");
    Ok(())
}

#[instrument]
fn _eval(fermat: &str, primes: &str) -> CliResult<()> {
    output::info(&eval_line(fermat, primes)?);
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
