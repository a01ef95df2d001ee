use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClippodError, Result};

/// Bonus weights applied by the segment scorers.
///
/// Missing fields in a profile file keep these defaults, so a profile only
/// has to name the knobs it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub base_score: f64,
    /// Segments starting before this many seconds get the early bonus.
    pub early_start_cutoff: f64,
    pub early_start_bonus: f64,
    /// Segments starting before this (but past the early cutoff) get the mid bonus.
    pub mid_start_cutoff: f64,
    pub mid_start_bonus: f64,
    pub question_bonus: f64,
    pub bold_statement_bonus: f64,
    pub digit_bonus: f64,
    pub story_opener_bonus: f64,
    pub emotional_word_bonus: f64,
    pub cta_bonus: f64,
    pub controversy_bonus: f64,
    pub hook_weight: f64,
    pub engagement_weight: f64,
    pub viral_base: f64,
    pub trending_bonus: f64,
    /// Added to the matched emotion per trigger word.
    pub emotion_step: f64,
    /// Removed from neutral per trigger word.
    pub neutral_decay: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            early_start_cutoff: 30.0,
            early_start_bonus: 15.0,
            mid_start_cutoff: 60.0,
            mid_start_bonus: 10.0,
            question_bonus: 10.0,
            bold_statement_bonus: 5.0,
            digit_bonus: 5.0,
            story_opener_bonus: 10.0,
            emotional_word_bonus: 3.0,
            cta_bonus: 5.0,
            controversy_bonus: 5.0,
            hook_weight: 0.4,
            engagement_weight: 0.4,
            viral_base: 20.0,
            trending_bonus: 5.0,
            emotion_step: 0.2,
            neutral_decay: 0.1,
        }
    }
}

/// Vocabulary tables driving the heuristic matchers.
///
/// Every entry is matched as a case-insensitive substring of the segment
/// text, except `story_openers` which match as prefixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub bold_statements: Vec<String>,
    pub story_openers: Vec<String>,
    pub emotional_words: Vec<String>,
    pub cta_phrases: Vec<String>,
    pub controversy_words: Vec<String>,
    pub trending_topics: Vec<String>,
    pub joy_words: Vec<String>,
    pub anger_words: Vec<String>,
    pub surprise_words: Vec<String>,
    pub shift_markers: Vec<String>,
    pub stop_words: Vec<String>,
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            bold_statements: words(&[
                "fact", "truth", "secret", "never", "always", "everyone", "nobody",
            ]),
            story_openers: words(&["when i", "i remember", "one day", "last year", "recently"]),
            emotional_words: words(&[
                "amazing",
                "incredible",
                "shocking",
                "surprising",
                "unbelievable",
                "love",
                "hate",
                "angry",
                "happy",
                "sad",
                "excited",
                "worried",
                "perfect",
                "terrible",
                "awesome",
                "awful",
                "fantastic",
            ]),
            cta_phrases: words(&[
                "subscribe", "follow", "like", "comment", "share", "check out",
            ]),
            controversy_words: words(&[
                "controversial", "debate", "argue", "wrong", "right", "truth",
            ]),
            trending_topics: words(&["ai", "crypto", "bitcoin", "money", "success", "motivation"]),
            joy_words: words(&[
                "happy", "joy", "excited", "amazing", "great", "awesome", "love", "perfect",
            ]),
            anger_words: words(&["angry", "hate", "terrible", "awful", "worst", "annoying"]),
            surprise_words: words(&[
                "wow",
                "unbelievable",
                "shocking",
                "surprising",
                "incredible",
            ]),
            shift_markers: words(&[
                "but",
                "however",
                "on the other hand",
                "speaking of",
                "moving on",
                "let's talk about",
                "another thing",
            ]),
            stop_words: words(&[
                "this", "that", "with", "from", "they", "have", "were", "been", "their", "would",
                "there", "could", "should",
            ]),
        }
    }
}

/// A named set of weights and vocabularies the analyzer scores with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub name: String,
    pub weights: ScoreWeights,
    pub lexicon: Lexicon,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            weights: ScoreWeights::default(),
            lexicon: Lexicon::default(),
        }
    }
}

impl ScoringProfile {
    /// Load a profile from a JSON file. Fields absent from the file keep
    /// their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ClippodError::ProfileInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ClippodError::ProfileInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabularies_are_populated() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.bold_statements.len(), 7);
        assert_eq!(lexicon.emotional_words.len(), 17);
        assert_eq!(lexicon.stop_words.len(), 13);
    }

    #[test]
    fn partial_profile_keeps_defaults_for_missing_fields() {
        let json = r#"{"name": "punchy", "weights": {"question_bonus": 25.0}}"#;
        let profile: ScoringProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "punchy");
        assert_eq!(profile.weights.question_bonus, 25.0);
        assert_eq!(profile.weights.base_score, 50.0);
        assert_eq!(profile.lexicon.trending_topics.len(), 6);
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = ScoringProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let back: ScoringProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weights.emotion_step, profile.weights.emotion_step);
        assert_eq!(back.lexicon.joy_words, profile.lexicon.joy_words);
    }
}
