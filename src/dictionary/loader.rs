use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};

use super::checker::{self, AnnotatedWord, SearchStrategy};
use super::{Language, WordStore};
use crate::error::{DictionaryError, Result};

/// Somewhere the raw word list of a language can be read from, one word per line
pub trait WordSource {
    /// Read every line of the word list for `language`, without filtering.
    fn read_words(&self, language: Language) -> io::Result<Vec<String>>;
}

/// Word lists stored as `<dir>/<Language>.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, language: Language) -> PathBuf {
        self.root.join(language.file_name())
    }
}

impl WordSource for DirectorySource {
    fn read_words(&self, language: Language) -> io::Result<Vec<String>> {
        let path = self.path_for(language);
        info!("Loading dictionary from {}", path.display());

        let file = File::open(&path)?;
        let reader = io::BufReader::new(file);

        reader.lines().collect()
    }
}

/// Word lists held in memory, keyed by language
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: HashMap<Language, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, language: Language, contents: impl Into<String>) -> Self {
        self.lists.insert(language, contents.into());
        self
    }
}

impl WordSource for MemorySource {
    fn read_words(&self, language: Language) -> io::Result<Vec<String>> {
        self.lists
            .get(&language)
            .map(|contents| contents.lines().map(str::to_string).collect())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no word list for {language}"),
                )
            })
    }
}

/// Build a fresh store for `language` from `source`.
pub fn load_store(language: Option<Language>, source: &dyn WordSource) -> Result<WordStore> {
    let language = language.ok_or(DictionaryError::InvalidLanguage)?;

    let raw_words = source
        .read_words(language)
        .map_err(|source| DictionaryError::ReadError { language, source })?;

    Ok(WordStore::from_words(language, raw_words))
}

/// What a call to [`Dictionary::load`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { language: Language, words: usize },
    AlreadyLoaded(Language),
}

/// Holds at most one loaded word store
#[derive(Debug, Default)]
pub struct Dictionary {
    active: Option<WordStore>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the word list for `language`, replacing the active store only on success.
    ///
    /// Asking for the language that is already active does nothing.
    pub fn load(
        &mut self,
        language: Option<Language>,
        source: &dyn WordSource,
    ) -> Result<LoadOutcome> {
        if let (Some(requested), Some(active)) = (language, self.language()) {
            if requested == active {
                info!("Dictionary {} already loaded", active);
                return Ok(LoadOutcome::AlreadyLoaded(active));
            }
        }

        let store = load_store(language, source).inspect_err(|e| {
            warn!("Failed to load dictionary: {}", e);
        })?;

        let outcome = LoadOutcome::Loaded {
            language: store.language(),
            words: store.len(),
        };
        info!(
            "Dictionary {} loaded. Found {} words",
            store.language(),
            store.len()
        );

        self.active = Some(store);
        Ok(outcome)
    }

    pub fn language(&self) -> Option<Language> {
        self.active.as_ref().map(WordStore::language)
    }

    pub fn is_loaded(&self) -> bool {
        self.active.is_some()
    }

    /// The active store, or `NotReady` when nothing has been loaded
    pub fn store(&self) -> Result<&WordStore> {
        self.active
            .as_ref()
            .ok_or_else(|| DictionaryError::NotReady.into())
    }

    pub fn check<S: AsRef<str>>(
        &self,
        tokens: &[S],
        strategy: SearchStrategy,
    ) -> Result<Vec<AnnotatedWord>> {
        Ok(checker::check(tokens, self.store()?, strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::TempDir;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_list(Language::Italian, "Casa\nalbero\nZEBRA\n")
            .with_list(Language::English, "house\ntree\n")
    }

    #[test]
    fn test_load_store_normalizes_and_sorts() {
        let store = load_store(Some(Language::Italian), &source()).unwrap();
        assert_eq!(store.words(), ["albero", "casa", "zebra"]);
        assert!(store.contains_binary("CASA"));
        assert!(!store.contains_binary("gatto"));
    }

    #[test]
    fn test_missing_language() {
        let mut dictionary = Dictionary::new();
        match dictionary.load(None, &source()) {
            Err(Error::Dictionary(DictionaryError::InvalidLanguage)) => {}
            _ => panic!("Expected InvalidLanguage error"),
        }
        assert!(!dictionary.is_loaded());
    }

    #[test]
    fn test_reload_same_language_is_noop() {
        let mut dictionary = Dictionary::new();
        let first = dictionary.load(Some(Language::Italian), &source()).unwrap();
        assert_eq!(
            first,
            LoadOutcome::Loaded {
                language: Language::Italian,
                words: 3
            }
        );

        // A source that would fail proves nothing is read on the second call
        let second = dictionary
            .load(Some(Language::Italian), &MemorySource::new())
            .unwrap();
        assert_eq!(second, LoadOutcome::AlreadyLoaded(Language::Italian));
        assert_eq!(
            dictionary.store().unwrap().words(),
            ["albero", "casa", "zebra"]
        );
    }

    #[test]
    fn test_switching_language_replaces_store() {
        let mut dictionary = Dictionary::new();
        dictionary.load(Some(Language::Italian), &source()).unwrap();
        dictionary.load(Some(Language::English), &source()).unwrap();

        assert_eq!(dictionary.language(), Some(Language::English));
        let results = dictionary
            .check(&["casa", "house"], SearchStrategy::Linear)
            .unwrap();
        assert!(!results[0].is_correct());
        assert!(results[1].is_correct());
    }

    #[test]
    fn test_failed_load_keeps_previous_store() {
        let mut dictionary = Dictionary::new();
        dictionary.load(Some(Language::Italian), &source()).unwrap();

        let only_italian = MemorySource::new().with_list(Language::Italian, "casa");
        match dictionary.load(Some(Language::English), &only_italian) {
            Err(Error::Dictionary(DictionaryError::ReadError { language, .. })) => {
                assert_eq!(language, Language::English)
            }
            _ => panic!("Expected ReadError"),
        }

        assert_eq!(dictionary.language(), Some(Language::Italian));
        let results = dictionary
            .check(&["Casa", "gatto"], SearchStrategy::Binary)
            .unwrap();
        assert!(results[0].is_correct());
        assert!(!results[1].is_correct());
    }

    #[test]
    fn test_check_before_load() {
        let dictionary = Dictionary::new();
        match dictionary.check(&["casa"], SearchStrategy::Membership) {
            Err(Error::Dictionary(DictionaryError::NotReady)) => {}
            _ => panic!("Expected NotReady error"),
        }
    }

    #[test]
    fn test_directory_source() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let mut file = File::create(dir.path().join("English.txt"))?;
        writeln!(file, "Tree")?;
        writeln!(file, "apple")?;
        writeln!(file)?;

        let source = DirectorySource::new(dir.path());
        let store = load_store(Some(Language::English), &source).unwrap();
        assert_eq!(store.words(), ["", "apple", "tree"]);

        match load_store(Some(Language::Italian), &source) {
            Err(Error::Dictionary(DictionaryError::ReadError { source, .. })) => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound)
            }
            _ => panic!("Expected ReadError"),
        }

        Ok(())
    }
}
