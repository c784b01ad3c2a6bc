//! Page opener: turn a resolved path into a documentation URL and hand it to
//! the desktop's default browser.

use crate::config::Config;
use crate::resolve::Selection;
use std::io::{self, Write};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("unrecognized host OS: '{0}'")]
    UnsupportedPlatform(String),

    #[error("failed to run '{command}'")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How the host opens a URL in its default browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and the BSDs: `xdg-open`.
    Freedesktop,
    /// macOS: `open`.
    Apple,
    /// Windows: the `start` shell builtin.
    Windows,
}

impl Platform {
    /// Classify the OS this binary was built for.
    pub fn detect() -> Result<Self, OpenError> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Result<Self, OpenError> {
        match os {
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Ok(Platform::Freedesktop),
            "macos" => Ok(Platform::Apple),
            "windows" => Ok(Platform::Windows),
            other => Err(OpenError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Name shown to the user for the launch command.
    pub fn executable(self) -> &'static str {
        match self {
            Platform::Freedesktop => "xdg-open",
            Platform::Apple => "open",
            Platform::Windows => "start",
        }
    }

    fn command(self, url: &str) -> Command {
        match self {
            Platform::Windows => {
                let mut cmd = Command::new("cmd");
                // Empty title so a quoted URL is not taken as the window title
                cmd.args(["/C", "start", "", url]);
                cmd
            }
            _ => {
                let mut cmd = Command::new(self.executable());
                cmd.arg(url);
                cmd
            }
        }
    }
}

pub struct Opener<'a> {
    config: &'a Config,
}

impl<'a> Opener<'a> {
    pub fn new(config: &'a Config) -> Self {
        Opener { config }
    }

    /// Absolute URL for a site-relative path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.release_root(),
            path.trim_start_matches('/')
        )
    }

    /// The command line that opens `url`, as shown to the user.
    pub fn command_line(&self, url: &str) -> String {
        format!("{} {}", self.config.platform.executable(), url)
    }

    /// Announce and open the selected page. In no-op mode the command is
    /// printed instead of run.
    pub fn open<W: Write>(&self, selection: &Selection, out: &mut W) -> Result<(), OpenError> {
        let url = self.url_for(&selection.path);
        match url.split_once('#') {
            Some((page, _)) => writeln!(
                out,
                "Opening web page {} at method {}.",
                page, selection.name
            )?,
            None => writeln!(out, "Opening web page {}.", url)?,
        }

        let command = self.command_line(&url);
        if self.config.noop {
            writeln!(out, "Command: '{}'", command)?;
            return Ok(());
        }

        debug!(%command, "launching browser");
        let status = self
            .config
            .platform
            .command(&url)
            .status()
            .map_err(|source| OpenError::Launch {
                command: command.clone(),
                source,
            })?;
        if !status.success() {
            warn!(%command, %status, "browser command failed");
        }
        Ok(())
    }
}
