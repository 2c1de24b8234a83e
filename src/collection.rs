use std::{env, path::PathBuf};

use color_eyre::eyre::{Result, bail};

pub mod anthology;
pub mod loader;

/// Directory of `.txt` poems to read instead of the built-in anthology.
pub const POEMS_DIR_ENV: &str = "STANZA_POEMS";

/// One addressable content unit, identified by its position in the
/// collection. Blank lines inside `lines` separate stanzas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    pub title: String,
    pub author: Option<String>,
    pub lines: Vec<String>,
}

/// The ordered sequence of poems, fixed at startup and immutable after.
#[derive(Debug, Clone)]
pub struct Collection {
    poems: Vec<Poem>,
    source: String,
}

impl Collection {
    pub fn load() -> Result<Self> {
        match env::var(POEMS_DIR_ENV) {
            Ok(dir) => loader::from_dir(PathBuf::from(dir)),
            Err(_) => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self {
            poems: anthology::poems(),
            source: "built-in anthology".to_string(),
        }
    }

    pub fn new(poems: Vec<Poem>, source: String) -> Result<Self> {
        if poems.is_empty() {
            bail!("no poems to read in {source}");
        }
        Ok(Self { poems, source })
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Poem> {
        self.poems.get(index)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.poems.iter().map(|p| p.title.as_str())
    }

    /// Where the poems came from, shown next to the download affordance.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_anthology_is_never_empty() {
        let collection = Collection::builtin();
        assert!(!collection.is_empty());
        assert!(collection.titles().all(|t| !t.is_empty()));
    }

    #[test]
    fn empty_collection_is_a_startup_error() {
        assert!(Collection::new(Vec::new(), "nowhere".to_string()).is_err());
    }

    #[test]
    fn poems_are_index_addressable() {
        let collection = Collection::builtin();
        for i in 0..collection.len() {
            assert!(collection.get(i).is_some());
        }
        assert!(collection.get(collection.len()).is_none());
    }
}
