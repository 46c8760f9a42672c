//! Line-oriented terminal interaction shared by the hangman and portfolio
//! programs.
//!
//! Both programs follow the same shape: render some state, ask for one line of
//! input, validate it, and either re-prompt or commit it. This crate owns that
//! loop so each program only supplies prompts and validators.
//!
//! - **[`console`]**: Line reader/writer over any `BufRead`/`Write` pair.
//! - **[`prompt`]**: The validated input loop and yes/no confirmation.
//! - **[`logging`]**: Development tracing to stderr.

pub mod console;
pub mod exit_codes;
pub mod logging;
pub mod prompt;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use console::Console;
pub use prompt::{Prompt, Reply, confirm, request_validated_input};
