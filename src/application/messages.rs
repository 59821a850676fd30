//! User-facing text, per locale

use std::fmt;

use clap::ValueEnum;

use crate::domain::formula;

/// Language of prompts and messages.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Pl => write!(f, "pl"),
        }
    }
}

/// Message catalogue for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub formula_label: &'static str,
    pub quit_hint: &'static str,
    pub fermat_prompt: &'static str,
    pub primes_prompt: &'static str,
    pub fermat_invalid: &'static str,
    pub fermat_negative: &'static str,
    pub primes_invalid: &'static str,
    pub primes_negative: &'static str,
    pub farewell: &'static str,
}

const EN: Messages = Messages {
    title: "CPD calculator",
    formula_label: "Formula",
    quit_hint: "Type 'q' to quit.",
    fermat_prompt: "Enter fermat (/sec):",
    primes_prompt: "Enter primes (e.g. 0.105):",
    fermat_invalid: "Invalid fermat value.",
    fermat_negative: "Fermat must be >= 0.",
    primes_invalid: "Invalid number, try again.",
    primes_negative: "Enter a number >= 0.",
    farewell: "Bye.",
};

const PL: Messages = Messages {
    title: "Kalkulator CPD",
    formula_label: "Wzór",
    quit_hint: "Wpisz 'q' aby zakończyć.",
    fermat_prompt: "Podaj fermat (/sec):",
    primes_prompt: "Podaj primes (np. 0.105):",
    fermat_invalid: "Niepoprawna liczba fermat.",
    fermat_negative: "Fermat musi być >= 0.",
    primes_invalid: "Niepoprawna liczba, spróbuj ponownie.",
    primes_negative: "Wpisz liczbę >= 0.",
    farewell: "Koniec.",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Pl => &PL,
        }
    }

    /// Banner lines printed once at startup (blank line last).
    pub fn banner(&self, target_exponent: u32) -> Vec<String> {
        vec![
            self.title.to_string(),
            format!("{}: {}", self.formula_label, formula::describe(target_exponent)),
            self.quit_hint.to_string(),
            String::new(),
        ]
    }
}

/// Result line; identical for every locale.
pub fn format_cpd(cpd: f64) -> String {
    format!("CPD = {:.2} / day", cpd)
}
