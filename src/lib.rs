//! Candidates-per-day (CPD) calculator for prime chain mining tuning.
//!
//! `cpd = 86400 * fermat_rate * prime_ratio^10`

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
