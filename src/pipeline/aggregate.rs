//! Aggregator: commutative, associative merge of word-count tables

use super::WordCountTable;

/// Fold `tables` into one by adding matching-word counts.
///
/// A word absent from the running table starts at zero, so the merge is
/// commutative and associative and the order tables arrive in never changes
/// the result.
pub fn merge<I>(tables: I) -> WordCountTable
where
    I: IntoIterator<Item = WordCountTable>,
{
    let mut merged = WordCountTable::new();
    for table in tables {
        for (word, count) in table {
            *merged.entry(word).or_insert(0) += count;
        }
    }
    merged
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
    fn merges_matching_words_by_addition() {
        let merged = merge([
            table(&[("apple", 2)]),
            table(&[("banana", 1), ("apple", 1)]),
        ]);
        assert_eq!(merged, table(&[("apple", 3), ("banana", 1)]));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_is_commutative() {
        let a = table(&[("x", 5), ("y", 1)]);
        let b = table(&[("y", 2), ("z", 7)]);
        let c = table(&[("x", 1)]);
        let forward = merge([a.clone(), b.clone(), c.clone()]);
        let backward = merge([c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_table_is_the_identity() {
        let a = table(&[("apple", 3)]);
        assert_eq!(merge([a.clone(), WordCountTable::new()]), a);
        assert_eq!(merge(std::iter::empty::<WordCountTable>()), WordCountTable::new());
    }

    #[test]
    fn single_table_merges_to_itself() {
        let a = table(&[("one", 1), ("two", 2)]);
        assert_eq!(merge([a.clone()]), a);
    }
}
