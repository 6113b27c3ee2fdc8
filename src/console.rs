//! console.rs
//!
//! Line-oriented console IO. Every prompt and report goes through
//! `Console`, which is generic over its reader and writer so the
//! interactive flows can be exercised against scripted input in tests.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write one line of output.
    pub fn line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> Result<(), ConsoleError> {
        self.line("")
    }

    /// Read one line, without the trailing newline. `Eof` once the
    /// input stream is exhausted.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the customer enters an unsigned number. Garbage is
    /// reported and re-solicited locally, it never aborts the session.
    pub fn prompt_u32(&mut self, prompt: &str) -> Result<u32, ConsoleError> {
        loop {
            self.line(prompt)?;
            let entry = self.read_line()?;
            match entry.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    warn!(entry = %entry, "not a number, re-prompting");
                    self.line("Wrong input!")?;
                }
            }
        }
    }

    /// Read a menu selection. Anything that is not an unsigned number
    /// comes back as `None` and is ignored by the caller.
    pub fn read_selection(&mut self) -> Result<Option<u32>, ConsoleError> {
        Ok(self.read_line()?.parse().ok())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn prompt_retries_until_numeric() {
        let mut console = scripted("abc\n-3\n7\n");
        let value = console.prompt_u32("Enter a number:").unwrap();
        assert_eq!(value, 7);

        let output = output_of(console);
        assert_eq!(output.matches("Wrong input!").count(), 2);
        assert_eq!(output.matches("Enter a number:").count(), 3);
    }

    #[test]
    fn prompt_reports_eof() {
        let mut console = scripted("");
        assert!(matches!(
            console.prompt_u32("Enter a number:"),
            Err(ConsoleError::Eof)
        ));
    }

    #[test]
    fn selection_ignores_garbage() {
        let mut console = scripted("first\n2\n");
        assert_eq!(console.read_selection().unwrap(), None);
        assert_eq!(console.read_selection().unwrap(), Some(2));
    }
}
