use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::WordStore;
use crate::error::Error;

/// Algorithm used to decide whether a token is in the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Hash containment of the lower-cased token
    #[default]
    Membership,
    /// Scan in stored order with early exit
    Linear,
    /// Binary search over the sorted words
    Binary,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Membership,
        SearchStrategy::Linear,
        SearchStrategy::Binary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Membership => "membership",
            SearchStrategy::Linear => "linear",
            SearchStrategy::Binary => "binary",
        }
    }

    pub fn lookup(&self, store: &WordStore, token: &str) -> bool {
        match self {
            SearchStrategy::Membership => store.contains(token),
            SearchStrategy::Linear => store.contains_linear(token),
            SearchStrategy::Binary => store.contains_binary(token),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "membership" | "simple" => Ok(SearchStrategy::Membership),
            "linear" => Ok(SearchStrategy::Linear),
            "binary" | "dichotomic" => Ok(SearchStrategy::Binary),
            _ => Err(Error::UnknownStrategy(s.trim().to_string())),
        }
    }
}

/// A token as typed, paired with its verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedWord {
    text: String,
    correct: bool,
}

impl AnnotatedWord {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// Check every token against `store`, keeping input order.
pub fn check<S: AsRef<str>>(
    tokens: &[S],
    store: &WordStore,
    strategy: SearchStrategy,
) -> Vec<AnnotatedWord> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            AnnotatedWord::new(token, strategy.lookup(store, token))
        })
        .collect()
}

/// Outcome of one spell check run
#[derive(Debug, Clone, Serialize)]
pub struct SpellCheckReport {
    pub strategy: SearchStrategy,
    pub words: Vec<AnnotatedWord>,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl SpellCheckReport {
    /// Original text of every incorrect word, in input order
    pub fn misspelled(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| !word.is_correct())
            .map(AnnotatedWord::text)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.words.iter().filter(|word| !word.is_correct()).count()
    }
}

impl fmt::Display for SpellCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.misspelled() {
            writeln!(f, "{word}")?;
        }
        writeln!(f, "The text contains {} errors", self.error_count())?;
        write!(
            f,
            "Spell check completed in {} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Language;

    fn sample_store() -> WordStore {
        WordStore::from_words(Language::Italian, ["Casa", "albero", "ZEBRA"])
    }

    #[test]
    fn test_check_preserves_order_and_casing() {
        let store = sample_store();

        for strategy in SearchStrategy::ALL {
            let results = check(&["Casa", "gatto", "Albero"], &store, strategy);
            assert_eq!(
                results,
                vec![
                    AnnotatedWord::new("Casa", true),
                    AnnotatedWord::new("gatto", false),
                    AnnotatedWord::new("Albero", true),
                ],
                "strategy {strategy}"
            );
        }
    }

    #[test]
    fn test_empty_tokens() {
        let store = sample_store();
        let tokens: [&str; 0] = [];
        for strategy in SearchStrategy::ALL {
            assert!(check(&tokens, &store, strategy).is_empty());
        }
    }

    #[test]
    fn test_check_is_idempotent() {
        let store = sample_store();
        let tokens = vec!["zebra".to_string(), "Zebre".to_string()];

        let first = check(&tokens, &store, SearchStrategy::Binary);
        let second = check(&tokens, &store, SearchStrategy::Binary);
        assert_eq!(first, second);
        assert_eq!(store.words(), ["albero", "casa", "zebra"]);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            "Membership".parse::<SearchStrategy>().unwrap(),
            SearchStrategy::Membership
        );
        assert_eq!(
            "simple".parse::<SearchStrategy>().unwrap(),
            SearchStrategy::Membership
        );
        assert_eq!(
            "LINEAR".parse::<SearchStrategy>().unwrap(),
            SearchStrategy::Linear
        );
        assert_eq!(
            "dichotomic".parse::<SearchStrategy>().unwrap(),
            SearchStrategy::Binary
        );

        match "hashed".parse::<SearchStrategy>() {
            Err(Error::UnknownStrategy(name)) => assert_eq!(name, "hashed"),
            _ => panic!("Expected UnknownStrategy error"),
        }
    }

    #[test]
    fn test_report() {
        let report = SpellCheckReport {
            strategy: SearchStrategy::Linear,
            words: check(
                &["Casa", "gatto", "Albero", "cane"],
                &sample_store(),
                SearchStrategy::Linear,
            ),
            elapsed: Duration::from_millis(1500),
        };

        assert_eq!(report.misspelled(), ["gatto", "cane"]);
        assert_eq!(report.error_count(), 2);
        assert_eq!(
            report.to_string(),
            "gatto\ncane\nThe text contains 2 errors\nSpell check completed in 1.5 seconds"
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "linear");
        assert_eq!(json["elapsed_secs"], 1.5);
        assert_eq!(json["words"][1]["text"], "gatto");
        assert_eq!(json["words"][1]["correct"], false);
    }
}
