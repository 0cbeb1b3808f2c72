//! Line-oriented terminal prompts.
//!
//! Reads answers from any `BufRead` and writes questions to any `Write`,
//! so the interactive flow can be driven by stdin or by an in-memory buffer.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::warn;

use crate::models::Score;

/// Errors that can occur while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before an answer was given")]
    Eof,

    #[error("Invalid score entry: {0:?}")]
    InvalidScore(String),
}

/// Parse a `home-away` score entry such as `2-1`.
pub fn parse_score(input: &str) -> Result<Score, PromptError> {
    let invalid = || PromptError::InvalidScore(input.to_string());

    let (home, away) = input.trim().split_once('-').ok_or_else(invalid)?;
    let home: u64 = home.trim().parse().map_err(|_| invalid())?;
    let away: u64 = away.trim().parse().map_err(|_| invalid())?;

    Ok(Score::Set { home, away })
}

/// Asks questions on a writer and reads answers from a reader.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write text without asking anything.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Write text without a trailing newline.
    pub fn say_inline(&mut self, text: &str) -> Result<(), PromptError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// Print a question and return the trimmed answer line.
    pub fn ask_line(&mut self, question: &str) -> Result<String, PromptError> {
        self.say(question)?;
        self.read_line()
    }

    /// Ask until the answer is `y` or `n`.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        self.say_inline(question)?;
        loop {
            self.say_inline(" [y/n] ")?;
            match self.read_line()?.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                other => warn!(answer = other, "Expected y or n"),
            }
        }
    }

    /// Ask for a score. `n` keeps `current`; anything malformed is asked again.
    pub fn ask_score(&mut self, current: Score) -> Result<Score, PromptError> {
        loop {
            self.say_inline("Enter score using eg. 0-0 or n to keep current score : ")?;
            let answer = self.read_line()?;
            if answer == "n" {
                return Ok(current);
            }
            match parse_score(&answer) {
                Ok(score) => return Ok(score),
                Err(e) => {
                    warn!(error = %e, "Rejected score entry");
                    self.say_inline("Invalid entry. ")?;
                }
            }
        }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
