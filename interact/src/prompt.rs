//! The validated input loop.
//!
//! [`request_validated_input`] keeps asking until the validator accepts a
//! line, the sentinel is typed, or input runs out. Rejections never escape the
//! loop: each one is reported to the user as a single line and the prompt is
//! shown again.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::console::Console;

/// Prompt text plus an optional sentinel that ends the loop without validation.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub text: &'a str,
    /// Matched case-insensitively against the trimmed line.
    pub sentinel: Option<&'a str>,
}

impl<'a> Prompt<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            sentinel: None,
        }
    }

    pub fn with_sentinel(mut self, sentinel: &'a str) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    fn is_sentinel(&self, line: &str) -> bool {
        self.sentinel
            .is_some_and(|sentinel| line.trim().eq_ignore_ascii_case(sentinel))
    }
}

/// How the input loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// The validator accepted a line.
    Accepted(T),
    /// The sentinel was entered.
    Sentinel,
    /// Input was exhausted before anything was accepted.
    Closed,
}

/// Prompt until `validate` accepts a line.
///
/// Each rejected line produces exactly one line of output: the `Display` of
/// the validation error. Only terminal I/O failures are returned as errors.
pub fn request_validated_input<R, W, T, E>(
    console: &mut Console<R, W>,
    prompt: &Prompt<'_>,
    mut validate: impl FnMut(&str) -> Result<T, E>,
) -> Result<Reply<T>>
where
    R: BufRead,
    W: Write,
    E: Display,
{
    loop {
        let Some(line) = console.read_line(prompt.text)? else {
            debug!("input closed while prompting");
            return Ok(Reply::Closed);
        };
        if prompt.is_sentinel(&line) {
            debug!(sentinel = ?prompt.sentinel, "sentinel entered");
            return Ok(Reply::Sentinel);
        }
        match validate(&line) {
            Ok(value) => return Ok(Reply::Accepted(value)),
            Err(err) => {
                debug!(input = %line, reason = %err, "input rejected");
                console.say(&err)?;
            }
        }
    }
}

/// Ask a yes/no question. Only `y` (any case) counts as yes; EOF counts as no.
pub fn confirm<R: BufRead, W: Write>(console: &mut Console<R, W>, question: &str) -> Result<bool> {
    let answer = console.read_line(question)?;
    Ok(answer.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::test_support::{output_text, scripted_console};

    fn parse_even(line: &str) -> Result<u32, String> {
        let value: u32 = line.trim().parse().map_err(|_| "not a number".to_string())?;
        if value % 2 == 0 {
            Ok(value)
        } else {
            Err("odd".to_string())
        }
    }

    #[test]
    fn reprompts_until_valid() {
        let mut console = scripted_console(&["x", "3", "4"]);
        let reply = request_validated_input(&mut console, &Prompt::new("n: "), parse_even)
            .expect("prompt");
        assert_eq!(reply, Reply::Accepted(4));
        assert_eq!(output_text(&console), "n: not a number\nn: odd\nn: ");
    }

    #[test]
    fn sentinel_short_circuits_validation() {
        let mut console = scripted_console(&["  DoNe "]);
        let prompt = Prompt::new("n: ").with_sentinel("done");
        let reply = request_validated_input(&mut console, &prompt, parse_even).expect("prompt");
        assert_eq!(reply, Reply::Sentinel);
    }

    #[test]
    fn sentinel_is_validated_when_not_configured() {
        let mut console = scripted_console(&["done", "2"]);
        let reply = request_validated_input(&mut console, &Prompt::new("n: "), parse_even)
            .expect("prompt");
        assert_eq!(reply, Reply::Accepted(2));
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_reprompted() {
        let mut console = Console::new(Cursor::new(b"\xff\n4\n".to_vec()), Vec::new());
        let reply = request_validated_input(&mut console, &Prompt::new("n: "), parse_even)
            .expect("prompt");
        assert_eq!(reply, Reply::Accepted(4));
        assert_eq!(output_text(&console), "n: not a number\nn: ");
    }

    #[test]
    fn closed_input_ends_loop() {
        let mut console = scripted_console(&["7"]);
        let reply = request_validated_input(&mut console, &Prompt::new("n: "), parse_even)
            .expect("prompt");
        assert_eq!(reply, Reply::Closed);
    }

    #[test]
    fn confirm_accepts_only_y() {
        let mut console = scripted_console(&["Y", "yes", "n"]);
        assert!(confirm(&mut console, "? ").expect("first"));
        assert!(!confirm(&mut console, "? ").expect("second"));
        assert!(!confirm(&mut console, "? ").expect("third"));
        assert!(!confirm(&mut console, "? ").expect("eof"));
    }
}
