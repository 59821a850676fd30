//! Domain layer: the CPD formula and input validation
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod error;
pub mod formula;
pub mod input;

pub use error::{DomainResult, InputError};
pub use formula::{evaluate, evaluate_with_target, SECONDS_PER_DAY, TARGET_EXPONENT};
pub use input::{is_quit_command, normalize_decimal, parse_rate};
