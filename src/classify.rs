//! Query classification by leading sigil.
//!
//! | Query            | Kind             | Compared as        |
//! |------------------|------------------|--------------------|
//! | `Array`, `fatal` | class or module  | unchanged          |
//! | `ruby:COPYING`   | page             | `COPYING`          |
//! | `::new`          | singleton method | `::new`            |
//! | `#each`          | instance method  | `#each`            |

use crate::model::Kind;

/// Prefixes of `fatal`, the one lowercase exception class.
const FATAL_ALIASES: &[&str] = &["fatal", "fata", "fat", "fa", "f"];

const PAGE_PREFIX: &str = "ruby:";

/// A classified query: which index to search and the key prefix to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: Kind,
    pub bare: String,
}

/// Classify a single query token. `None` means no documentation kind applies.
pub fn classify(name: &str) -> Option<Query> {
    let starts_upper = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    let (kind, bare) = if starts_upper || FATAL_ALIASES.contains(&name) {
        (Kind::ClassOrModule, name)
    } else if let Some(rest) = name.strip_prefix(PAGE_PREFIX) {
        (Kind::Page, rest)
    } else if name.starts_with("::") {
        (Kind::SingletonMethod, name)
    } else if name.starts_with('#') {
        (Kind::InstanceMethod, name)
    } else {
        return None;
    };

    Some(Query {
        kind,
        bare: bare.to_string(),
    })
}

/// What the user typed, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Empty,
    Single(String),
    Multiple,
}

impl Request {
    /// Split every argument on whitespace and count the tokens.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let mut tokens = args.iter().flat_map(|a| a.as_ref().split_whitespace());
        match (tokens.next(), tokens.next()) {
            (None, _) => Request::Empty,
            (Some(name), None) => Request::Single(name.to_string()),
            (Some(_), Some(_)) => Request::Multiple,
        }
    }

    /// The message shown when the request cannot be looked up.
    pub fn complaint(&self) -> Option<&'static str> {
        match self {
            Request::Empty => Some("No name given."),
            Request::Multiple => Some("Multiple names given; please do one at a time."),
            Request::Single(_) => None,
        }
    }
}
