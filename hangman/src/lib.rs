//! Terminal hangman.
//!
//! - **[`game`]**: Pure guess session state machine (`InProgress`/`Won`/`Lost`).
//! - **[`words`]**: Word set and injectable word picker.
//! - **[`art`]**: Gallows drawings that also fix the wrong-guess budget.
//! - **[`round`]**: Drives a session through an [`interact::Console`].

pub mod art;
pub mod config;
pub mod game;
pub mod round;
pub mod words;
