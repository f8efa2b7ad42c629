use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold text for matching: lowercase plus NFD decomposition with combining
/// marks stripped, so `"Satisfatório"` and `"satisfatorio"` compare equal.
#[must_use]
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split already-folded text into word tokens, dropping punctuation.
#[must_use]
pub fn tokenize(folded: &str) -> Vec<&str> {
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("Bob's"), "bob's");
        assert_eq!(fold("KFC"), "kfc");
    }

    #[test]
    fn fold_strips_diacritics() {
        assert_eq!(fold("Café Satisfatório"), "cafe satisfatorio");
        assert_eq!(fold("horrível"), "horrivel");
        assert_eq!(fold("sem graça"), "sem graca");
    }

    #[test]
    fn tokenize_drops_punctuation() {
        assert_eq!(
            tokenize("a comida e boa, e o atendimento tambem!"),
            vec!["a", "comida", "e", "boa", "e", "o", "atendimento", "tambem"]
        );
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("...!?").is_empty());
    }
}
