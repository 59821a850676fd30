//! Infrastructure layer: I/O implementations
//!
//! This layer implements the terminal boundary used by the application layer.

pub mod terminal;

pub use terminal::{StdTerminal, StreamTerminal, Terminal};
