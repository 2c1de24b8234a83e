//! Loads a collection from a directory of plain-text poems.
//!
//! One file per poem, ordered by file name. The first non-blank line is the
//! title; an immediately following `by <name>` line is the author.

use std::{fs, path::PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tracing::warn;

use super::{Collection, Poem};

pub fn from_dir(dir: PathBuf) -> Result<Collection> {
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .wrap_err_with(|| format!("reading poems from {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut poems = Vec::with_capacity(files.len());
    for path in files {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable poem file");
                continue;
            }
        };
        match parse_poem(&text) {
            Some(poem) => poems.push(poem),
            None => warn!(path = %path.display(), "skipping empty poem file"),
        }
    }

    let source = format!("{} ({} poems)", dir.display(), poems.len());
    Collection::new(poems, source)
}

fn parse_poem(text: &str) -> Option<Poem> {
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());

    let title = match lines.next() {
        Some(line) => line.trim().to_string(),
        None => return None,
    };

    let mut rest: Vec<&str> = lines.collect();

    let author = rest
        .first()
        .and_then(|line| line.trim().strip_prefix("by "))
        .map(str::to_string);
    if author.is_some() {
        rest.remove(0);
    }

    while rest.first().is_some_and(|line| line.trim().is_empty()) {
        rest.remove(0);
    }
    while rest.last().is_some_and(|line| line.trim().is_empty()) {
        rest.pop();
    }
    if rest.is_empty() {
        return None;
    }

    Some(Poem {
        title,
        author,
        lines: rest.into_iter().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Poem> {
        parse_poem(text)
    }

    #[test]
    fn title_author_and_body_are_split() {
        let poem = parse("Evening\nby A. Nonymous\n\nThe lamps come on\nin ones and twos.\n")
            .unwrap();
        assert_eq!(poem.title, "Evening");
        assert_eq!(poem.author.as_deref(), Some("A. Nonymous"));
        assert_eq!(poem.lines, vec!["The lamps come on", "in ones and twos."]);
    }

    #[test]
    fn author_line_is_optional() {
        let poem = parse("Evening\n\nThe lamps come on.\n").unwrap();
        assert_eq!(poem.author, None);
        assert_eq!(poem.lines, vec!["The lamps come on."]);
    }

    #[test]
    fn stanza_breaks_survive() {
        let poem = parse("Evening\n\none\n\ntwo\n").unwrap();
        assert_eq!(poem.lines, vec!["one", "", "two"]);
    }

    #[test]
    fn blank_files_are_rejected() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("\n  \n"), None);
        assert_eq!(parse("Title only\n\n"), None);
    }
}
