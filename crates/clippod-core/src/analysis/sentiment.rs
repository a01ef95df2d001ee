use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::SegmentAnnotation;

/// Emotion labels tracked by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per emotion label. Serializes as a label-to-value map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    #[serde(default)]
    pub joy: f64,
    #[serde(default)]
    pub anger: f64,
    #[serde(default)]
    pub sadness: f64,
    #[serde(default)]
    pub fear: f64,
    #[serde(default)]
    pub surprise: f64,
    #[serde(default)]
    pub neutral: f64,
}

impl EmotionScores {
    pub fn sum(&self) -> f64 {
        self.joy + self.anger + self.sadness + self.fear + self.surprise + self.neutral
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        self.joy *= factor;
        self.anger *= factor;
        self.sadness *= factor;
        self.fear *= factor;
        self.surprise *= factor;
        self.neutral *= factor;
    }

    pub(crate) fn add(&mut self, other: &EmotionScores) {
        self.joy += other.joy;
        self.anger += other.anger;
        self.sadness += other.sadness;
        self.fear += other.fear;
        self.surprise += other.surprise;
        self.neutral += other.neutral;
    }

    fn round_thousandths(&mut self) {
        self.joy = round3(self.joy);
        self.anger = round3(self.anger);
        self.sadness = round3(self.sadness);
        self.fear = round3(self.fear);
        self.surprise = round3(self.surprise);
        self.neutral = round3(self.neutral);
    }

    /// Label with the highest value. Ties resolve to the alphabetically
    /// first label.
    pub fn dominant(&self) -> Emotion {
        let ranked = [
            (Emotion::Anger, self.anger),
            (Emotion::Fear, self.fear),
            (Emotion::Joy, self.joy),
            (Emotion::Neutral, self.neutral),
            (Emotion::Sadness, self.sadness),
            (Emotion::Surprise, self.surprise),
        ];
        let mut best = ranked[0];
        for candidate in &ranked[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best.0
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Transcript-wide sentiment derived from the per-segment emotion scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub overall: Emotion,
    pub distribution: EmotionScores,
    pub positive: f64,
    pub negative: f64,
}

impl SentimentSummary {
    pub(crate) fn neutral() -> Self {
        Self {
            overall: Emotion::Neutral,
            distribution: EmotionScores::default(),
            positive: 0.0,
            negative: 0.0,
        }
    }
}

/// Sum the per-segment emotion scores, normalize to a distribution, and
/// derive the overall label plus positive/negative composites.
pub(crate) fn aggregate_sentiment(annotations: &[SegmentAnnotation]) -> SentimentSummary {
    if annotations.is_empty() {
        return SentimentSummary::neutral();
    }

    let mut totals = EmotionScores::default();
    for annotation in annotations {
        totals.add(&annotation.emotions);
    }

    let sum = totals.sum();
    if sum > 0.0 {
        totals.scale(1.0 / sum);
        totals.round_thousandths();
    }

    SentimentSummary {
        overall: totals.dominant(),
        distribution: totals,
        positive: totals.joy + totals.surprise * 0.5,
        negative: totals.anger + totals.sadness + totals.fear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scoring::SegmentAnnotation;

    fn annotation(emotions: EmotionScores) -> SegmentAnnotation {
        SegmentAnnotation {
            hook_score: 50.0,
            engagement_score: 50.0,
            viral_score: 60.0,
            emotions,
            topic_shift: false,
        }
    }

    #[test]
    fn empty_input_is_neutral() {
        let summary = aggregate_sentiment(&[]);
        assert_eq!(summary.overall, Emotion::Neutral);
        assert_eq!(summary.distribution, EmotionScores::default());
        assert_eq!(summary.positive, 0.0);
        assert_eq!(summary.negative, 0.0);
    }

    #[test]
    fn distribution_sums_to_one() {
        let annotations = vec![
            annotation(EmotionScores {
                joy: 0.4,
                neutral: 0.6,
                ..EmotionScores::default()
            }),
            annotation(EmotionScores {
                anger: 0.2,
                neutral: 0.8,
                ..EmotionScores::default()
            }),
        ];
        let summary = aggregate_sentiment(&annotations);
        assert!((summary.distribution.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn dominant_label_wins() {
        let annotations = vec![annotation(EmotionScores {
            joy: 0.9,
            neutral: 0.1,
            ..EmotionScores::default()
        })];
        let summary = aggregate_sentiment(&annotations);
        assert_eq!(summary.overall, Emotion::Joy);
        assert!((summary.positive - 0.9).abs() < 1e-9);
    }

    #[test]
    fn positive_counts_half_of_surprise() {
        let annotations = vec![annotation(EmotionScores {
            joy: 0.5,
            surprise: 0.4,
            neutral: 0.1,
            ..EmotionScores::default()
        })];
        let summary = aggregate_sentiment(&annotations);
        assert!((summary.positive - 0.7).abs() < 1e-9);
        assert_eq!(summary.negative, 0.0);
    }

    #[test]
    fn ties_resolve_alphabetically() {
        let scores = EmotionScores {
            joy: 0.5,
            anger: 0.5,
            ..EmotionScores::default()
        };
        assert_eq!(scores.dominant(), Emotion::Anger);
    }

    #[test]
    fn values_round_to_three_decimals() {
        let annotations = vec![
            annotation(EmotionScores {
                joy: 1.0,
                neutral: 0.0,
                ..EmotionScores::default()
            }),
            annotation(EmotionScores {
                neutral: 1.0,
                ..EmotionScores::default()
            }),
            annotation(EmotionScores {
                neutral: 1.0,
                ..EmotionScores::default()
            }),
        ];
        let summary = aggregate_sentiment(&annotations);
        assert_eq!(summary.distribution.joy, 0.333);
        assert_eq!(summary.distribution.neutral, 0.667);
    }
}
