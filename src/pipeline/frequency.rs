//! Frequency Counter: per-chunk word-count tables

use crate::tokenizer::Tokenizer;

use super::WordCountTable;

/// Count normalized word occurrences in `content`.
///
/// Pure function of its input: the same content always yields the same
/// table, which is what makes a mapper invocation safe to re-run after a
/// lost or failed result write.
pub fn count_words(content: &str) -> WordCountTable {
    let tokenizer = Tokenizer::new(content);
    let mut table = WordCountTable::new();
    for word in tokenizer.words() {
        *table.entry(word.to_string()).or_insert(0) += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> WordCountTable {
        pairs
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect()
    }

    #[test]
    fn counts_repeated_words_in_a_chunk() {
        assert_eq!(count_words("apple apple"), table(&[("apple", 2)]));
    }

    #[test]
    fn normalization_folds_case_and_punctuation() {
        assert_eq!(
            count_words("banana\nApple!"),
            table(&[("apple", 1), ("banana", 1)])
        );
    }

    #[test]
    fn sum_of_counts_equals_token_count() {
        let text = "the quick brown fox, the lazy dog; the END. 42 times";
        let token_count = Tokenizer::new(text).words().count();
        let total: u64 = count_words(text).values().sum();
        assert_eq!(total, token_count as u64);
    }

    #[test]
    fn empty_content_yields_empty_table() {
        assert!(count_words("").is_empty());
        assert!(count_words("123 ... !!!").is_empty());
    }

    #[test]
    fn counting_is_idempotent() {
        let text = "Apple apple BANANA banana banana";
        assert_eq!(count_words(text), count_words(text));
    }
}
