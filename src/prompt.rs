//! Blocking terminal dialogue: numbered menus and yes/no questions.
//!
//! Generic over the input and output streams so lookups can be driven from
//! in-memory buffers in tests.

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writer for plain status lines.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line, without its line ending.
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask a yes/no question. Only answers whose first character is `y` or
    /// `Y` count as yes; end of input is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{} (y or n):  ", question))?;
        Ok(answer.is_some_and(|a| a.starts_with(['y', 'Y'])))
    }

    /// Show a numbered menu and read a selection.
    ///
    /// An out-of-range number asks again; empty input, anything that is not
    /// a non-negative integer, or end of input cancels with `None`.
    pub fn choose<S: AsRef<str>>(&mut self, choices: &[S]) -> io::Result<Option<usize>> {
        if choices.is_empty() {
            return Ok(None);
        }
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {:>6}:  {}", i, choice.as_ref())?;
        }

        let last = choices.len() - 1;
        loop {
            let Some(answer) = self.read_line(&format!("Choose (0..{}):  ", last))? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(index) if index <= last => return Ok(Some(index)),
                _ => writeln!(self.output, "Please choose a number from 0 to {}.", last)?,
            }
        }
    }
}
