use std::cmp::Ordering;
use std::collections::HashSet;

use super::Language;

fn folded(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().flat_map(char::to_lowercase)
}

/// Lower-case a word the same way the store collates it.
///
/// Folding is done character by character so that `fold_case(a) == fold_case(b)`
/// holds exactly when [`compare_ignore_case`] returns `Ordering::Equal`.
pub fn fold_case(word: &str) -> String {
    folded(word).collect()
}

/// Case-insensitive collation shared by sorting and every lookup.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

/// The word list of one language, lower-cased and sorted with [`compare_ignore_case`].
///
/// Blank entries and duplicates from the source are kept as they are.
#[derive(Debug, Clone)]
pub struct WordStore {
    language: Language,
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordStore {
    /// Build a store from raw source lines.
    pub fn from_words<I, S>(language: Language, raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = raw_words
            .into_iter()
            .map(|word| fold_case(word.as_ref()))
            .collect();
        words.sort_by(|a, b| compare_ignore_case(a, b));

        let index = words.iter().cloned().collect();

        Self {
            language,
            words,
            index,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Words in sorted order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Hash lookup of the folded token.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(&fold_case(token))
    }

    /// Scan the words in stored order, stopping at the first match.
    pub fn contains_linear(&self, token: &str) -> bool {
        self.words
            .iter()
            .any(|word| compare_ignore_case(word, token) == Ordering::Equal)
    }

    /// Binary search over the sorted words.
    pub fn contains_binary(&self, token: &str) -> bool {
        let mut lo = 0;
        let mut hi = self.words.len();

        while lo != hi {
            let mid = lo + (hi - lo) / 2;
            match compare_ignore_case(token, &self.words[mid]) {
                Ordering::Equal => return true,
                Ordering::Greater => lo = mid + 1,
                Ordering::Less => hi = mid,
            }
        }

        false
    }
}
