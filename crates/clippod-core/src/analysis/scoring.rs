use serde::{Deserialize, Serialize};

use super::TextPatterns;
use super::lexicon::ScoringProfile;
use super::sentiment::EmotionScores;
use crate::types::TranscriptSegment;

/// Heuristic signals derived from one transcript segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentAnnotation {
    pub hook_score: f64,
    pub engagement_score: f64,
    pub viral_score: f64,
    pub emotions: EmotionScores,
    pub topic_shift: bool,
}

pub(crate) fn annotate_segment(
    segment: &TranscriptSegment,
    profile: &ScoringProfile,
    patterns: &TextPatterns,
) -> SegmentAnnotation {
    let text = segment.text.as_str();
    let lower = text.to_lowercase();

    let hook_score = hook_score(text, &lower, segment.start, profile, patterns);
    let engagement_score = engagement_score(&lower, profile);
    let viral_score = viral_score(&lower, hook_score, engagement_score, profile);
    let emotions = detect_emotions(&lower, profile);
    let topic_shift = detect_topic_shift(&lower, profile);

    SegmentAnnotation {
        hook_score,
        engagement_score,
        viral_score,
        emotions,
        topic_shift,
    }
}

/// How likely the segment is to grab attention, given its text and where it
/// falls in the recording. Base score plus fixed bonuses, clamped to [0, 100].
fn hook_score(
    text: &str,
    lower: &str,
    start: f64,
    profile: &ScoringProfile,
    patterns: &TextPatterns,
) -> f64 {
    let w = &profile.weights;
    let lex = &profile.lexicon;
    let mut score = w.base_score;

    // Openings hook harder than the same words mid-episode.
    if start < w.early_start_cutoff {
        score += w.early_start_bonus;
    } else if start < w.mid_start_cutoff {
        score += w.mid_start_bonus;
    }

    if text.contains('?') {
        score += w.question_bonus;
    }

    if lex.bold_statements.iter().any(|s| lower.contains(s.as_str())) {
        score += w.bold_statement_bonus;
    }

    if patterns.digits.is_match(text) {
        score += w.digit_bonus;
    }

    if lex.story_openers.iter().any(|s| lower.starts_with(s.as_str())) {
        score += w.story_opener_bonus;
    }

    score.clamp(0.0, 100.0)
}

/// Emotional and interactive pull of the text. Every matched vocabulary
/// entry adds its bonus once.
fn engagement_score(lower: &str, profile: &ScoringProfile) -> f64 {
    let w = &profile.weights;
    let lex = &profile.lexicon;
    let mut score = w.base_score;

    for word in &lex.emotional_words {
        if lower.contains(word.as_str()) {
            score += w.emotional_word_bonus;
        }
    }
    for phrase in &lex.cta_phrases {
        if lower.contains(phrase.as_str()) {
            score += w.cta_bonus;
        }
    }
    for word in &lex.controversy_words {
        if lower.contains(word.as_str()) {
            score += w.controversy_bonus;
        }
    }

    score.clamp(0.0, 100.0)
}

/// Composite of hook and engagement plus a bonus per trending topic mention.
fn viral_score(lower: &str, hook: f64, engagement: f64, profile: &ScoringProfile) -> f64 {
    let w = &profile.weights;
    let mut score = hook * w.hook_weight + engagement * w.engagement_weight + w.viral_base;

    for topic in &profile.lexicon.trending_topics {
        if lower.contains(topic.as_str()) {
            score += w.trending_bonus;
        }
    }

    score.clamp(0.0, 100.0)
}

/// Per-emotion signal for the segment. Starts fully neutral; each trigger
/// word moves mass from neutral to its emotion, then the result is
/// normalized to sum to 1 when the total allows it.
fn detect_emotions(lower: &str, profile: &ScoringProfile) -> EmotionScores {
    let w = &profile.weights;
    let lex = &profile.lexicon;
    let mut emotions = EmotionScores {
        neutral: 1.0,
        ..EmotionScores::default()
    };

    for word in &lex.joy_words {
        if lower.contains(word.as_str()) {
            emotions.joy += w.emotion_step;
            emotions.neutral -= w.neutral_decay;
        }
    }
    for word in &lex.anger_words {
        if lower.contains(word.as_str()) {
            emotions.anger += w.emotion_step;
            emotions.neutral -= w.neutral_decay;
        }
    }
    for word in &lex.surprise_words {
        if lower.contains(word.as_str()) {
            emotions.surprise += w.emotion_step;
            emotions.neutral -= w.neutral_decay;
        }
    }

    let total = emotions.sum();
    if total > 0.0 {
        emotions.scale(1.0 / total);
    }

    emotions
}

fn detect_topic_shift(lower: &str, profile: &ScoringProfile) -> bool {
    profile
        .lexicon
        .shift_markers
        .iter()
        .any(|marker| lower.contains(marker.as_str()))
}
