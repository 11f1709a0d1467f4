//! Word normalization and tokenization
//!
//! The boundary rule is load-bearing: word counts must be reproducible
//! bit-for-bit across independently run mapper invocations, so the only
//! classification used is "is this code point a letter". Digits,
//! punctuation, whitespace, and symbols are all separators alike. No stop
//! words, no stemming.

/// A normalized view of a text, ready for word iteration.
///
/// The whole text is lower-cased once up front, before boundary
/// classification; `words` is lazy and can be called any number of times,
/// always restarting from the beginning.
pub struct Tokenizer {
    lowered: String,
}

impl Tokenizer {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    /// Iterate over the normalized words of the text, in order.
    ///
    /// Splits on every code point that is not alphabetic and discards the
    /// empty tokens that adjacent separators produce.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| !word.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::new(text)
            .words()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn lowercases_and_splits_on_non_letters() {
        assert_eq!(
            tokens("Hello, World! 123 foo_bar"),
            vec!["hello", "world", "foo", "bar"]
        );
    }

    #[test]
    fn digits_are_separators_not_word_characters() {
        assert_eq!(tokens("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn empty_tokens_are_discarded() {
        assert_eq!(tokens("...  -- !!"), Vec::<String>::new());
        assert_eq!(tokens(""), Vec::<String>::new());
    }

    #[test]
    fn newlines_are_ordinary_separators() {
        assert_eq!(tokens("one\ntwo\n\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn non_ascii_letters_are_kept() {
        assert_eq!(tokens("Müller straße"), vec!["müller", "straße"]);
    }

    #[test]
    fn iteration_is_restartable_and_idempotent() {
        let tokenizer = Tokenizer::new("Apple apple! APPLE?");
        let first: Vec<&str> = tokenizer.words().collect();
        let second: Vec<&str> = tokenizer.words().collect();
        assert_eq!(first, vec!["apple", "apple", "apple"]);
        assert_eq!(first, second);
    }
}
