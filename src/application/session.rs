//! Interactive read-validate-compute-print loop

use tracing::{debug, info, instrument};

use crate::application::error_ext::IoResultExt;
use crate::application::messages::{format_cpd, Locale, Messages};
use crate::application::ApplicationResult;
use crate::domain::{evaluate, is_quit_command, parse_rate, InputError, TARGET_EXPONENT};
use crate::infrastructure::Terminal;

/// Position in the prompt cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    AwaitFirstInput,
    AwaitSecondInput { fermat_rate: f64 },
    Terminated,
}

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub results: u64,
    pub rejected: u64,
}

pub struct Session<T: Terminal> {
    terminal: T,
    messages: &'static Messages,
    summary: SessionSummary,
}

impl<T: Terminal> Session<T> {
    pub fn new(terminal: T, locale: Locale) -> Self {
        Self {
            terminal,
            messages: Messages::for_locale(locale),
            summary: SessionSummary::default(),
        }
    }

    /// Print the banner and cycle through prompts until the user quits
    /// or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> ApplicationResult<SessionSummary> {
        for line in self.messages.banner(TARGET_EXPONENT) {
            self.terminal.info(&line).with_context("write banner")?;
        }

        let mut state = State::AwaitFirstInput;
        while state != State::Terminated {
            state = self.step(state)?;
        }

        info!(
            results = self.summary.results,
            rejected = self.summary.rejected,
            "session finished"
        );
        Ok(self.summary)
    }

    /// Handle exactly one prompt and return the next state.
    pub fn step(&mut self, state: State) -> ApplicationResult<State> {
        let next = match state {
            State::AwaitFirstInput => self.await_first_input()?,
            State::AwaitSecondInput { fermat_rate } => self.await_second_input(fermat_rate)?,
            State::Terminated => State::Terminated,
        };
        debug!(?state, ?next, "transition");
        Ok(next)
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    fn await_first_input(&mut self) -> ApplicationResult<State> {
        let Some(line) = self
            .terminal
            .read_line(self.messages.fermat_prompt)
            .with_context("read fermat rate")?
        else {
            debug!("end of input at fermat prompt");
            return self.terminate();
        };

        if is_quit_command(&line) {
            return self.terminate();
        }

        match parse_rate(&line) {
            Ok(fermat_rate) => Ok(State::AwaitSecondInput { fermat_rate }),
            Err(e) => {
                let msg = match e {
                    InputError::Parse(_) => self.messages.fermat_invalid,
                    InputError::Range(_) => self.messages.fermat_negative,
                };
                self.reject(&e, msg)?;
                self.terminal.info("").with_context("write error")?;
                Ok(State::AwaitFirstInput)
            }
        }
    }

    fn await_second_input(&mut self, fermat_rate: f64) -> ApplicationResult<State> {
        let Some(line) = self
            .terminal
            .read_line(self.messages.primes_prompt)
            .with_context("read prime ratio")?
        else {
            debug!("end of input at primes prompt");
            return self.terminate();
        };

        match parse_rate(&line) {
            Ok(prime_ratio) => {
                let cpd = evaluate(fermat_rate, prime_ratio);
                debug!(fermat_rate, prime_ratio, cpd, "evaluated");
                self.summary.results += 1;
                self.terminal
                    .info(&format_cpd(cpd))
                    .with_context("write result")?;
                self.terminal.info("").with_context("write result")?;
                Ok(State::AwaitFirstInput)
            }
            Err(e) => {
                let msg = match e {
                    InputError::Parse(_) => self.messages.primes_invalid,
                    InputError::Range(_) => self.messages.primes_negative,
                };
                self.reject(&e, msg)?;
                Ok(State::AwaitSecondInput { fermat_rate })
            }
        }
    }

    fn reject(&mut self, err: &InputError, msg: &str) -> ApplicationResult<()> {
        debug!(%err, "rejected input");
        self.summary.rejected += 1;
        self.terminal.error(msg).with_context("write error")
    }

    fn terminate(&mut self) -> ApplicationResult<State> {
        self.terminal
            .info(self.messages.farewell)
            .with_context("write farewell")?;
        Ok(State::Terminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::ScriptedTerminal;

    #[test]
    fn test_step_from_terminated_stays_terminated() {
        let mut session = Session::new(ScriptedTerminal::new(&[]), Locale::En);

        let next = session.step(State::Terminated).unwrap();

        assert_eq!(next, State::Terminated);
        assert!(session.into_terminal().prompts().is_empty());
    }

    #[test]
    fn test_step_first_input_carries_fermat_rate() {
        let mut session = Session::new(ScriptedTerminal::new(&["1,5"]), Locale::En);

        let next = session.step(State::AwaitFirstInput).unwrap();

        assert_eq!(next, State::AwaitSecondInput { fermat_rate: 1.5 });
    }

    #[test]
    fn test_step_second_input_rejects_quit_keyword() {
        let mut session = Session::new(ScriptedTerminal::new(&["q"]), Locale::En);

        let next = session
            .step(State::AwaitSecondInput { fermat_rate: 2.0 })
            .unwrap();

        assert_eq!(next, State::AwaitSecondInput { fermat_rate: 2.0 });
        assert_eq!(session.summary().rejected, 1);
    }
}
