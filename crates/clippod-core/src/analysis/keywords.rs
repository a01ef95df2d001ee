use std::collections::HashMap;

use regex::Regex;

pub(crate) const MAX_TOPICS: usize = 5;
pub(crate) const MAX_KEYWORDS: usize = 10;

/// Most frequent non-stop-word tokens of the text, best first. Ties keep
/// first-occurrence order.
pub(crate) fn extract_topics(text: &str, stop_words: &[String], token: &Regex) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for found in token.find_iter(&lower) {
        let word = found.as_str();
        if stop_words.iter().any(|s| s == word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.to_string(), counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_TOPICS)
        .map(|(word, _)| word)
        .collect()
}

/// Topic tokens of the text followed by novel all-caps emphasis words from
/// the segment texts, deduplicated in first-occurrence order.
pub(crate) fn extract_keywords(
    text: &str,
    segment_texts: &[&str],
    stop_words: &[String],
    token: &Regex,
    emphasis: &Regex,
) -> Vec<String> {
    let mut keywords = extract_topics(text, stop_words, token);

    for segment_text in segment_texts {
        for found in emphasis.find_iter(segment_text) {
            let word = found.as_str();
            if !keywords.iter().any(|k| k == word) {
                keywords.push(word.to_string());
            }
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}
