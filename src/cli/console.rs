use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::errors::AppError;

/// Line-oriented prompt/response channel used by every interactive step.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `prompt` without a newline and returns the trimmed reply.
    /// Bytes that are not UTF-8 come back as U+FFFD, which no menu letter
    /// or field pattern accepts.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            return Err(AppError::InputClosed);
        }

        let input = String::from_utf8_lossy(&input);
        if matches!(input, Cow::Owned(_)) {
            debug!("replaced undecodable bytes in input line");
        }
        Ok(input.trim().to_string())
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), AppError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
