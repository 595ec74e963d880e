use std::collections::BTreeMap;

/// Counts each whitespace-separated word in `text`.
///
/// Words are case-sensitive and keep their punctuation, so "donut." and
/// "donut" are counted separately. Repeated whitespace never produces an
/// empty word.
pub fn word_count(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word.to_owned()).or_insert(0) += 1;
    }
    counts
}
