//! One lookup from query to browser, and the interactive loop around it.

use crate::classify::{classify, Request};
use crate::config::Config;
use crate::model::Indexes;
use crate::open::Opener;
use crate::prompt::Prompter;
use crate::resolve::{Resolution, Resolver};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const REPL_PROMPT: &str = "webri> ";

pub struct Session<'a, R, W> {
    resolver: Resolver<'a>,
    opener: Opener<'a>,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(indexes: &'a Indexes, config: &'a Config, prompter: Prompter<R, W>) -> Self {
        Session {
            resolver: Resolver::new(indexes),
            opener: Opener::new(config),
            prompter,
        }
    }

    /// Look up a request, or explain why it can't be looked up.
    pub fn handle(&mut self, request: &Request) -> Result<Resolution> {
        match request {
            Request::Single(name) => self.lookup(name),
            other => {
                if let Some(complaint) = other.complaint() {
                    writeln!(self.prompter.out(), "{}", complaint)?;
                }
                Ok(Resolution::Abandoned)
            }
        }
    }

    /// Classify, resolve, and open a single name.
    pub fn lookup(&mut self, name: &str) -> Result<Resolution> {
        let Some(query) = classify(name) else {
            writeln!(
                self.prompter.out(),
                "No documentation available for name '{}'.",
                name
            )?;
            return Ok(Resolution::Abandoned);
        };

        let resolution = self.resolver.resolve(&query, &mut self.prompter)?;
        if let Resolution::Selected(selection) = &resolution {
            debug!(name = %selection.name, path = %selection.path, "selected");
            self.opener.open(selection, self.prompter.out())?;
        }
        Ok(resolution)
    }

    /// Read names until end of input, `exit`, or `quit`.
    ///
    /// A failed lookup is reported and the loop carries on.
    pub fn repl(&mut self) -> Result<()> {
        while let Some(line) = self.prompter.read_line(REPL_PROMPT)? {
            let request = Request::from_args(&[line.as_str()]);
            if matches!(&request, Request::Single(name) if name == "exit" || name == "quit") {
                return Ok(());
            }
            if let Err(err) = self.handle(&request) {
                eprintln!("error: {:#}", err);
            }
        }
        // Leave the shell prompt on a fresh line after ^D
        writeln!(self.prompter.out())?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
