//! Line reader/writer used by every interactive loop.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

/// A terminal-like pair of line input and text output.
///
/// Generic over the reader and writer so sessions can be driven by stdin in
/// the binaries and by in-memory buffers in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("write to console")?;
        Ok(())
    }

    /// Show `prompt` (without a newline) and read one line of input.
    ///
    /// Returns `None` once the input is exhausted. The line terminator is
    /// stripped; all other whitespace is left for the caller to judge.
    /// Bytes that are not valid UTF-8 become `U+FFFD` so validators can reject
    /// the line instead of the read failing.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("read console input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::Console;
    use crate::test_support::{output_text, scripted_console};

    #[test]
    fn read_line_strips_terminator_only() {
        let mut console = scripted_console(&[" a \r"]);
        let line = console.read_line("> ").expect("read");
        assert_eq!(line.as_deref(), Some(" a "));
    }

    #[test]
    fn read_line_returns_none_at_eof() {
        let mut console = scripted_console(&[]);
        assert_eq!(console.read_line("> ").expect("read"), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut console = Console::new(Cursor::new(b"\xffa\r\nok\n".to_vec()), Vec::new());
        let line = console.read_line("> ").expect("read");
        assert_eq!(line.as_deref(), Some("\u{fffd}a"));
        assert_eq!(console.read_line("> ").expect("read").as_deref(), Some("ok"));
    }

    #[test]
    fn prompt_and_lines_are_written_to_output() {
        let mut console = scripted_console(&["x"]);
        console.read_line("Guess: ").expect("read");
        console.say("hello").expect("say");
        assert_eq!(output_text(&console), "Guess: hello\n");
    }
}
