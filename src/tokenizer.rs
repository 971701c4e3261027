/// Characters that separate words, besides whitespace
const DELIMITERS: &[char] = &[
    '[', ']', '.', ',', '?', '\\', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}',
    '=', '-', '_', '`', '~', '(', ')',
];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Split free text into word tokens, in order, dropping empty pieces.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Ciao, mondo! Come va?"),
            ["Ciao", "mondo", "Come", "va"]
        );
        assert_eq!(
            tokenize("well-known (text)\n\tover_there; x=y"),
            ["well", "known", "text", "over", "there", "x", "y"]
        );
    }

    #[test]
    fn test_tokenize_keeps_apostrophes_and_digits() {
        assert_eq!(tokenize("dell'albero 42 perché"), ["dell'albero", "42", "perché"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ... !!! \n").is_empty());
    }
}
