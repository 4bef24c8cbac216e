//! Interactive move source driven by line-based text input

use std::io::{self, BufRead, Write};

use crate::game::Game;
use crate::player::{MoveSource, PlayerError, PlayerKind};

/// Something a human answer can be read from, one line at a time
pub trait LineReader {
    /// Same contract as [`BufRead::read_line`]: `Ok(0)` means end of input
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineReader for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only while a single line is read.
///
/// Any number of human players can hold one of these at the same time.
#[derive(Debug)]
pub struct StdinLines(io::Stdin);

impl StdinLines {
    pub fn new() -> Self {
        Self(io::stdin())
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Prompts on `output` and reads answers from `input` until one is valid.
///
/// There is no retry limit and no timeout; the call blocks on `input`.
pub struct HumanInput<R, W> {
    input: R,
    output: W,
}

impl<R: LineReader, W: Write> HumanInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until the answer exactly matches one of the game's selections
    pub fn ask_move(&mut self, game: &Game) -> Result<String, PlayerError> {
        let selections = game.selection_set().selections();
        let question = format!("Your move? [{}]:", selections.join(", "));
        let mut answer = String::new();

        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;

            answer.clear();
            if LineReader::read_line(&mut self.input, &mut answer)? == 0 {
                return Err(PlayerError::InputClosed);
            }

            let trimmed = answer.trim_end_matches(['\n', '\r']);
            match parse_move(trimmed, selections) {
                Some(mv) => return Ok(mv),
                None => tracing::debug!("Rejected move {:?}", trimmed),
            }
        }
    }
}

impl HumanInput<StdinLines, io::Stdout> {
    /// Bind to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(StdinLines::new(), io::stdout())
    }
}

impl HumanInput<StdinLines, io::Stderr> {
    /// Read from stdin but prompt on stderr, leaving stdout to the caller
    pub fn stdin_stderr() -> Self {
        Self::new(StdinLines::new(), io::stderr())
    }
}

impl<R: LineReader, W: Write> MoveSource for HumanInput<R, W> {
    fn choose(&mut self, game: &Game) -> Result<String, PlayerError> {
        self.ask_move(game)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

/// Exact, case-sensitive match against the valid selections
pub fn parse_move(answer: &str, selections: &[String]) -> Option<String> {
    selections.iter().find(|s| *s == answer).cloned()
}
