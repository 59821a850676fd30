//! Candidates-per-day formula
//!
//! `cpd = SECONDS_PER_DAY * fermat_rate * prime_ratio ^ target_exponent`

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Exponent applied to the prime ratio.
pub const TARGET_EXPONENT: u32 = 10;

/// Candidates per day for the default target exponent.
///
/// Callers guarantee both inputs are non-negative; overflow and underflow
/// follow plain `f64` behavior.
pub fn evaluate(fermat_rate: f64, prime_ratio: f64) -> f64 {
    evaluate_with_target(fermat_rate, prime_ratio, TARGET_EXPONENT)
}

/// Candidates per day for an explicit target exponent.
pub fn evaluate_with_target(fermat_rate: f64, prime_ratio: f64, target_exponent: u32) -> f64 {
    SECONDS_PER_DAY * fermat_rate * prime_ratio.powf(f64::from(target_exponent))
}

/// Human readable form of the formula, as shown in the startup banner.
pub fn describe(target_exponent: u32) -> String {
    format!(
        "cpd = {} * fermat * primes^{}",
        SECONDS_PER_DAY, target_exponent
    )
}
