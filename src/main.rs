//! webri: open Ruby's online documentation from the command line.
//!
//! Looks a name up in the table of contents of https://docs.ruby-lang.org
//! and opens the matching page in the default browser:
//!
//! - `webri Array`: class or module (any name starting with an uppercase letter)
//! - `webri ruby:COPYING`: free-standing page
//! - `webri ::new`: singleton method
//! - `webri '#each'`: instance method
//!
//! Partial names are completed against the index; ambiguous ones are offered
//! as a numbered menu.

mod classify;
mod config;
mod fetch;
mod model;
mod open;
mod parser;
mod prompt;
mod resolve;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use classify::Request;
use config::Config;
use model::{Indexes, Kind};
use open::Platform;
use prompt::Prompter;
use session::Session;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "webri",
    about = "Open Ruby's online documentation for a class, module, page, or method"
)]
struct Cli {
    /// Name to look up: Array, ruby:COPYING, ::new, #each (prefixes allowed)
    names: Vec<String>,

    /// Documentation release, e.g. 3.4. Defaults to the newest supported release.
    #[arg(short = 'r', long, env = "WEBRI_RELEASE")]
    release: Option<String>,

    /// Print the browser command instead of running it
    #[arg(short = 'n', long)]
    noop: bool,

    /// Show where the documentation comes from and how many items it has
    #[arg(long)]
    info: bool,

    /// Keep prompting for names until end of input
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Read the table of contents from a local HTML file instead of the site
    #[arg(long, value_name = "FILE", requires = "release")]
    toc: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Reject unusable input before going to the network
    let request = Request::from_args(&cli.names);
    if !cli.info && !cli.interactive {
        if let Some(complaint) = request.complaint() {
            println!("{}", complaint);
            return Ok(());
        }
    }

    let config = Config {
        site_root: config::DOC_SITE.to_string(),
        release: select_release(&cli)?,
        noop: cli.noop,
        platform: Platform::detect()?,
    };
    let (source, indexes) = load_indexes(&cli, &config)?;

    if cli.info {
        print_info(&source, &indexes);
        return Ok(());
    }

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(&indexes, &config, prompter);
    if cli.interactive {
        if !cli.names.is_empty() {
            session.handle(&request)?;
        }
        session.repl()
    } else {
        session.handle(&request).map(|_| ())
    }
}

/// Diagnostics go to stderr, filtered by `WEBRI_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("WEBRI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// The release to browse. With `--toc` the requested release is trusted;
/// otherwise it is checked against the list on the site's home page.
fn select_release(cli: &Cli) -> Result<String> {
    if cli.toc.is_some() {
        return cli
            .release
            .clone()
            .context("--toc requires --release");
    }
    let home = fetch::get_text(config::DOC_SITE).context("failed to list documentation releases")?;
    let releases = parser::releases::parse(&home);
    debug!(?releases, "supported releases");
    Ok(config::select_release(cli.release.as_deref(), &releases)?)
}

/// Fetch (or read) the table of contents and index it.
/// Returns the location it came from along with the indexes.
fn load_indexes(cli: &Cli, config: &Config) -> Result<(String, Indexes)> {
    let (source, html) = match &cli.toc {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (path.display().to_string(), html)
        }
        None => {
            let url = config.toc_url();
            let html = fetch::get_text(&url)?;
            (url, html)
        }
    };

    let indexes = parser::toc::parse(&html)
        .with_context(|| format!("unexpected table of contents format in {}", source))?;
    for kind in Kind::ALL {
        debug!(kind = kind.plural(), count = indexes.get(kind).len(), "indexed");
    }
    Ok((source, indexes))
}

fn print_info(source: &str, indexes: &Indexes) {
    println!("Ruby documentation home: {}", source);
    println!("Items:");
    for kind in Kind::ALL {
        println!("  {:5} {}", indexes.get(kind).len(), kind.plural());
    }
}
