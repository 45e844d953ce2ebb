//! Line-mode presenter
//!
//! Reads commands from any `BufRead`, writes narration to any `Write`. With
//! [`OutputFormat::Json`] every event is written as one JSON object per line
//! instead, for driving the engine from other programs.

use std::io::{BufRead, Write};

use dc_core::{Event, GameLoop, GameLoopResult, RandomSource};

use crate::error::AppError;

/// How events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Narration lines only
    #[default]
    Text,
    /// Every event, one JSON object per line
    Json,
}

pub struct PlainPresenter<W: Write> {
    out: W,
    format: OutputFormat,
    prompt: bool,
}

impl<W: Write> PlainPresenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            prompt: false,
        }
    }

    /// Print "> " before reading each command (text format only)
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn present(&mut self, events: &[Event]) -> Result<(), AppError> {
        for event in events {
            match self.format {
                OutputFormat::Text => {
                    if let Some(text) = event.text() {
                        writeln!(self.out, "{text}")?;
                    }
                }
                OutputFormat::Json => {
                    serde_json::to_writer(&mut self.out, event)?;
                    writeln!(self.out)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<(), AppError> {
        if self.prompt && self.format == OutputFormat::Text {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Play until the input ends, the player types `quit`, or the game ends.
    pub fn run<R: RandomSource>(
        &mut self,
        game: &mut GameLoop<R>,
        input: impl BufRead,
        welcome: bool,
    ) -> Result<GameLoopResult, AppError> {
        let opening = game.begin(welcome)?;
        self.present(&opening.events)?;

        let mut result = opening.result;
        self.show_prompt()?;
        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.is_empty() {
                self.show_prompt()?;
                continue;
            }
            if command.eq_ignore_ascii_case("quit") {
                tracing::debug!("quit requested");
                break;
            }

            let outcome = game.execute_line(command)?;
            self.present(&outcome.events)?;
            result = outcome.result;
            if result != GameLoopResult::Continue {
                break;
            }
            self.show_prompt()?;
        }
        Ok(result)
    }
}
