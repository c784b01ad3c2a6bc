//! Data model for the documentation index: one name to paths map per kind.

use std::collections::BTreeMap;
use std::ops::Bound;

/// The four lookup categories of the table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Classes and modules share one index.
    ClassOrModule,
    /// Free-standing pages such as `COPYING` or `NEWS-3.4.0`.
    Page,
    /// Class-level methods, keyed with their `::` sigil.
    SingletonMethod,
    /// Instance-level methods, keyed with their `#` sigil.
    InstanceMethod,
}

impl Kind {
    pub const ALL: [Kind; 4] = [
        Kind::ClassOrModule,
        Kind::Page,
        Kind::SingletonMethod,
        Kind::InstanceMethod,
    ];

    /// Label used in "Found one ... name" messages.
    pub fn singular(self) -> &'static str {
        match self {
            Kind::ClassOrModule => "class or module",
            Kind::Page => "page",
            Kind::SingletonMethod => "singleton method",
            Kind::InstanceMethod => "instance method",
        }
    }

    /// Label used when counting whole indexes.
    pub fn plural(self) -> &'static str {
        match self {
            Kind::ClassOrModule => "classes and modules",
            Kind::Page => "pages",
            Kind::SingletonMethod => "singleton methods",
            Kind::InstanceMethod => "instance methods",
        }
    }

    pub fn is_method(self) -> bool {
        matches!(self, Kind::SingletonMethod | Kind::InstanceMethod)
    }

    /// Render the menu line for one (name, path) pair.
    ///
    /// Classes and pages show the path itself; methods show the owning
    /// class, e.g. `#size (in File::Stat)` for `File/Stat.html#method-i-size`.
    pub fn choice_label(self, name: &str, path: &str) -> String {
        if self.is_method() {
            format!("{} (in {})", name, owner_of(path))
        } else {
            format!("{} ({})", name, path)
        }
    }
}

/// Derive the owning class or module name from a method path.
pub fn owner_of(path: &str) -> String {
    let page = page_of(path);
    page.strip_suffix(".html").unwrap_or(page).replace('/', "::")
}

/// Strip the `#fragment` from a site-relative path.
pub fn page_of(path: &str) -> &str {
    path.split_once('#').map_or(path, |(page, _)| page)
}

/// One documented name and every page it can be found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub full_name: String,
    paths: Vec<String>,
}

impl Entry {
    pub fn new(full_name: impl Into<String>) -> Self {
        Entry {
            full_name: full_name.into(),
            paths: Vec::new(),
        }
    }

    /// Paths in the order they were first seen.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Append a path unless it is already recorded.
    pub fn add_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }
}

/// All entries of a single kind, keyed by full name.
#[derive(Debug, Default, Clone)]
pub struct Index {
    entries: BTreeMap<String, Entry>,
}

impl Index {
    /// Record `path` under `name`, creating the entry on first sight.
    pub fn insert(&mut self, name: &str, path: &str) {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| Entry::new(name))
            .add_path(path);
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Entries whose name starts with `prefix`, in key order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(_, entry)| entry)
    }
}

/// The parsed table of contents: one index per kind.
#[derive(Debug, Default, Clone)]
pub struct Indexes {
    pub classes: Index,
    pub pages: Index,
    pub singleton_methods: Index,
    pub instance_methods: Index,
}

impl Indexes {
    pub fn get(&self, kind: Kind) -> &Index {
        match kind {
            Kind::ClassOrModule => &self.classes,
            Kind::Page => &self.pages,
            Kind::SingletonMethod => &self.singleton_methods,
            Kind::InstanceMethod => &self.instance_methods,
        }
    }

    pub fn get_mut(&mut self, kind: Kind) -> &mut Index {
        match kind {
            Kind::ClassOrModule => &mut self.classes,
            Kind::Page => &mut self.pages,
            Kind::SingletonMethod => &mut self.singleton_methods,
            Kind::InstanceMethod => &mut self.instance_methods,
        }
    }
}

/// A single menu line and the target it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub name: String,
    pub path: String,
}

impl Choice {
    /// Flatten entries into (name, path) choices, sorted by label then path.
    /// Only identical (label, path) pairs are merged.
    pub fn flatten<'a>(kind: Kind, entries: impl IntoIterator<Item = &'a Entry>) -> Vec<Choice> {
        let mut choices: Vec<Choice> = entries
            .into_iter()
            .flat_map(|entry| {
                entry.paths().iter().map(move |path| Choice {
                    label: kind.choice_label(&entry.full_name, path),
                    name: entry.full_name.clone(),
                    path: path.clone(),
                })
            })
            .collect();
        choices.sort_by(|a, b| (&a.label, &a.path).cmp(&(&b.label, &b.path)));
        choices.dedup_by(|a, b| a.label == b.label && a.path == b.path);
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_deduplicated_in_order() {
        let mut index = Index::default();
        index.insert("#each", "Array.html#method-i-each");
        index.insert("#each", "Hash.html#method-i-each");
        index.insert("#each", "Array.html#method-i-each");

        let entry = index.get("#each").unwrap();
        assert_eq!(
            entry.paths(),
            ["Array.html#method-i-each", "Hash.html#method-i-each"]
        );
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn prefix_scan_stops_at_first_non_match() {
        let mut index = Index::default();
        for name in ["Array", "ArgumentError", "Comparable", "Ar"] {
            index.insert(name, &format!("{name}.html"));
        }
        let names: Vec<_> = index.with_prefix("Ar").map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, ["Ar", "ArgumentError", "Array"]);
        assert_eq!(index.with_prefix("Z").count(), 0);
    }

    #[test]
    fn method_label_names_owner() {
        assert_eq!(
            Kind::InstanceMethod.choice_label("#size", "File/Stat.html#method-i-size"),
            "#size (in File::Stat)"
        );
        assert_eq!(
            Kind::SingletonMethod.choice_label("::new", "Array.html#method-c-new"),
            "::new (in Array)"
        );
    }

    #[test]
    fn class_label_shows_path() {
        assert_eq!(
            Kind::ClassOrModule.choice_label("Array", "Array.html"),
            "Array (Array.html)"
        );
    }

    #[test]
    fn flatten_sorts_by_label() {
        let mut index = Index::default();
        index.insert("::write", "File.html#method-c-write");
        index.insert("::new", "File.html#method-c-new");
        index.insert("::new", "Array.html#method-c-new");

        let labels: Vec<_> = Choice::flatten(Kind::SingletonMethod, index.entries())
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            ["::new (in Array)", "::new (in File)", "::write (in File)"]
        );
    }

    #[test]
    fn flatten_keeps_distinct_fragments_on_one_page() {
        let mut index = Index::default();
        index.insert("#to_s", "Array.html#method-i-to_s");
        index.insert("#to_s", "Array.html#method-i-to_s-alias");

        let paths: Vec<_> = Choice::flatten(Kind::InstanceMethod, index.entries())
            .into_iter()
            .map(|c| c.path)
            .collect();
        assert_eq!(
            paths,
            ["Array.html#method-i-to_s", "Array.html#method-i-to_s-alias"]
        );
    }
}
