use std::collections::VecDeque;
use std::env;
use std::io;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::Terminal;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// One thing the session did to the terminal, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Prompt(String),
    Info(String),
    Error(String),
}

/// Terminal test double: answers prompts from a script, records everything.
///
/// Runs out of input like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    events: Vec<Event>,
}

impl ScriptedTerminal {
    pub fn new(input: &[&str]) -> Self {
        Self {
            input: input.iter().map(|s| s.to_string()).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Prompt(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Info(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Input lines never consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.events.push(Event::Prompt(prompt.to_string()));
        Ok(self.input.pop_front())
    }

    fn info(&mut self, msg: &str) -> io::Result<()> {
        self.events.push(Event::Info(msg.to_string()));
        Ok(())
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        self.events.push(Event::Error(msg.to_string()));
        Ok(())
    }
}

/// Terminal whose writes always fail.
#[derive(Debug, Default)]
pub struct BrokenTerminal;

impl Terminal for BrokenTerminal {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn info(&mut self, _msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn error(&mut self, _msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }
}

// test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn test_scripted_terminal_records_in_order() {
        let mut terminal = ScriptedTerminal::new(&["1"]);

        assert_eq!(terminal.read_line("a").unwrap(), Some("1".to_string()));
        terminal.error("bad").unwrap();
        assert_eq!(terminal.read_line("b").unwrap(), None);

        assert_eq!(
            terminal.events(),
            &[
                Event::Prompt("a".into()),
                Event::Error("bad".into()),
                Event::Prompt("b".into()),
            ]
        );
    }
}
