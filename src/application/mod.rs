//! Application layer: the interactive session and its messages
//!
//! This layer orchestrates domain logic and depends on the terminal boundary trait.

pub mod error;
pub mod error_ext;
pub mod messages;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use messages::{format_cpd, Locale, Messages};
pub use session::{Session, SessionSummary, State};
