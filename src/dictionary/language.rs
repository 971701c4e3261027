use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DictionaryError;

/// Languages with a word list available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Italian,
    English,
}

impl Language {
    /// Every supported language, in the order they are offered to the user
    pub const ALL: [Language; 2] = [Language::Italian, Language::English];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Italian => "Italian",
            Language::English => "English",
        }
    }

    /// Name of the word list resource, e.g. `Italian.txt`
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DictionaryError::UnknownLanguage(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("Italian".parse::<Language>().unwrap(), Language::Italian);
        assert_eq!(" english ".parse::<Language>().unwrap(), Language::English);

        match "Klingon".parse::<Language>() {
            Err(DictionaryError::UnknownLanguage(name)) => assert_eq!(name, "Klingon"),
            _ => panic!("Expected UnknownLanguage error"),
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Language::Italian.file_name(), "Italian.txt");
        assert_eq!(Language::English.file_name(), "English.txt");
    }
}
