//! Name resolution: narrow one index to a single page by prefix match,
//! asking the user whenever more than one page could be meant.

use crate::classify::Query;
use crate::model::{page_of, Choice, Entry, Indexes, Kind};
use crate::prompt::Prompter;
use std::io::{self, BufRead, Write};

/// The page a lookup settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Full name of the entry, e.g. `#each`.
    pub name: String,
    /// Site-relative path, possibly with a `#fragment`.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Selected(Selection),
    /// The user declined a question or cancelled the menu.
    Abandoned,
}

pub struct Resolver<'a> {
    indexes: &'a Indexes,
}

impl<'a> Resolver<'a> {
    pub fn new(indexes: &'a Indexes) -> Self {
        Resolver { indexes }
    }

    /// Resolve a classified query to one page.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        query: &Query,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<Resolution> {
        let kind = query.kind;
        let index = self.indexes.get(kind);
        let candidates: Vec<&Entry> = index.with_prefix(&query.bare).collect();

        match candidates.as_slice() {
            [] => {
                writeln!(
                    prompter.out(),
                    "Found no {} name starting with '{}'.",
                    kind.singular(),
                    query.bare
                )?;
                if index.is_empty() {
                    return Ok(Resolution::Abandoned);
                }
                let question = format!("Show names of all {} {}?", index.len(), kind.plural());
                if !prompter.confirm(&question)? {
                    return Ok(Resolution::Abandoned);
                }
                pick(Choice::flatten(kind, index.entries()), prompter)
            }
            [entry] if entry.paths().len() == 1 => resolve_single(kind, &query.bare, entry, prompter),
            _ => {
                let choices = Choice::flatten(kind, candidates.iter().copied());
                writeln!(
                    prompter.out(),
                    "Found {} {} names starting with '{}'.",
                    choices.len(),
                    kind.singular(),
                    query.bare
                )?;
                if !prompter.confirm(&format!("Show {} names?", choices.len()))? {
                    return Ok(Resolution::Abandoned);
                }
                pick(choices, prompter)
            }
        }
    }
}

/// One entry with one path. A prefix hit still needs a yes from the user.
fn resolve_single<R: BufRead, W: Write>(
    kind: Kind,
    bare: &str,
    entry: &Entry,
    prompter: &mut Prompter<R, W>,
) -> io::Result<Resolution> {
    let path = &entry.paths()[0];
    writeln!(
        prompter.out(),
        "Found one {} name starting with '{}'",
        kind.singular(),
        bare
    )?;
    writeln!(prompter.out(), "  {}", kind.choice_label(&entry.full_name, path))?;

    if bare != entry.full_name {
        let question = if kind.is_method() {
            format!("Open page {} at method {}?", page_of(path), entry.full_name)
        } else {
            format!("Open page {}?", path)
        };
        if !prompter.confirm(&question)? {
            return Ok(Resolution::Abandoned);
        }
    }

    Ok(Resolution::Selected(Selection {
        name: entry.full_name.clone(),
        path: path.clone(),
    }))
}

fn pick<R: BufRead, W: Write>(
    choices: Vec<Choice>,
    prompter: &mut Prompter<R, W>,
) -> io::Result<Resolution> {
    let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
    let Some(i) = prompter.choose(&labels)? else {
        return Ok(Resolution::Abandoned);
    };
    let choice = &choices[i];
    Ok(Resolution::Selected(Selection {
        name: choice.name.clone(),
        path: choice.path.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use std::io::Cursor;

    fn indexes() -> Indexes {
        let mut idx = Indexes::default();
        for name in ["ArgumentError", "Array", "File", "Hash"] {
            idx.classes.insert(name, &format!("{name}.html"));
        }
        idx.classes.insert("File::Stat", "File/Stat.html");
        idx.pages.insert("COPYING", "COPYING.html");
        idx.singleton_methods.insert("::new", "Array.html#method-c-new");
        idx.singleton_methods.insert("::new", "File.html#method-c-new");
        idx.singleton_methods.insert("::write", "File.html#method-c-write");
        idx.singleton_methods.insert("::writable?", "File.html#method-c-writable-3F");
        idx.instance_methods.insert("#each", "Array.html#method-i-each");
        idx.instance_methods.insert("#each", "Hash.html#method-i-each");
        idx.instance_methods.insert("#push", "Array.html#method-i-push");
        idx
    }

    fn run(name: &str, input: &str) -> (Resolution, String) {
        let idx = indexes();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let query = classify(name).unwrap();
        let resolution = Resolver::new(&idx).resolve(&query, &mut prompter).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();
        (resolution, out)
    }

    fn selected(name: &str, path: &str) -> Resolution {
        Resolution::Selected(Selection {
            name: name.to_string(),
            path: path.to_string(),
        })
    }

    #[test]
    fn exact_match_opens_without_asking() {
        let (res, out) = run("ArgumentError", "");
        assert_eq!(res, selected("ArgumentError", "ArgumentError.html"));
        assert_eq!(
            out,
            "Found one class or module name starting with 'ArgumentError'\n  ArgumentError (ArgumentError.html)\n"
        );
    }

    #[test]
    fn prefix_match_asks_first() {
        let (res, out) = run("Arr", "y\n");
        assert_eq!(res, selected("Array", "Array.html"));
        assert!(out.contains("Open page Array.html? (y or n)"));

        let (res, _) = run("Arr", "n\n");
        assert_eq!(res, Resolution::Abandoned);
    }

    #[test]
    fn method_prefix_question_names_page_and_method() {
        let (res, out) = run("#pu", "y\n");
        assert_eq!(res, selected("#push", "Array.html#method-i-push"));
        assert!(out.contains("  #push (in Array)\n"));
        assert!(out.contains("Open page Array.html at method #push?"));
    }

    #[test]
    fn no_match_offers_whole_index() {
        let (res, out) = run("NoSuChClAsS", "y\n0\n");
        assert!(out.starts_with(
            "Found no class or module name starting with 'NoSuChClAsS'.\nShow names of all 5 classes and modules? (y or n)"
        ));
        assert!(out.contains("       4:  Hash (Hash.html)\nChoose (0..4):  "));
        assert_eq!(res, selected("ArgumentError", "ArgumentError.html"));
    }

    #[test]
    fn no_match_declined() {
        let (res, out) = run("#zzz", "n\n");
        assert_eq!(res, Resolution::Abandoned);
        assert!(!out.contains("0:  "));
    }

    #[test]
    fn several_matches_are_counted_and_sorted() {
        let (res, out) = run("::wri", "y\n0\n");
        assert!(out.contains("Found 2 singleton method names starting with '::wri'.\n"));
        assert!(out.contains("Show 2 names? (y or n)"));
        let first = out.find("::writable? (in File)").unwrap();
        let second = out.find("::write (in File)").unwrap();
        assert!(first < second);
        assert_eq!(res, selected("::writable?", "File.html#method-c-writable-3F"));
    }

    #[test]
    fn one_name_with_many_paths_is_ambiguous() {
        let (res, out) = run("#each", "y\n1\n");
        assert!(out.contains("Found 2 instance method names starting with '#each'."));
        assert!(out.contains("0:  #each (in Array)"));
        assert!(out.contains("1:  #each (in Hash)"));
        assert_eq!(res, selected("#each", "Hash.html#method-i-each"));
    }

    #[test]
    fn exact_key_that_prefixes_others_is_ambiguous() {
        let (_, out) = run("File", "n\n");
        assert!(out.contains("Found 2 class or module names starting with 'File'."));
    }

    #[test]
    fn cancelled_menu_abandons() {
        let (res, _) = run("::new", "y\n\n");
        assert_eq!(res, Resolution::Abandoned);
    }

    #[test]
    fn page_query_compares_without_prefix() {
        let (res, out) = run("ruby:COPYING", "");
        assert_eq!(res, selected("COPYING", "COPYING.html"));
        assert!(out.starts_with("Found one page name starting with 'COPYING'"));
    }

    #[test]
    fn empty_index_is_not_offered() {
        let idx = Indexes::default();
        let mut prompter = Prompter::new(Cursor::new(b"y\n0\n".to_vec()), Vec::new());
        let query = classify("Array").unwrap();
        let res = Resolver::new(&idx).resolve(&query, &mut prompter).unwrap();
        assert_eq!(res, Resolution::Abandoned);
        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(out, "Found no class or module name starting with 'Array'.\n");
    }
}
