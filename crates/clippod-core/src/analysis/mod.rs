//! Heuristic highlight detection over timed transcripts.
//!
//! The analyzer scores every segment for hook, engagement and viral
//! potential, slides a fixed window across the recording to find the best
//! candidate clip spans, and summarizes keywords, topics and sentiment for
//! the whole transcript. All of it is pure computation over the input; a
//! constructed analyzer can be shared freely across tasks.

pub mod lexicon;

mod keywords;
mod scoring;
mod sentiment;
mod windows;

pub use lexicon::{Lexicon, ScoreWeights, ScoringProfile};
pub use scoring::SegmentAnnotation;
pub use sentiment::{Emotion, EmotionScores, SentimentSummary};
pub use windows::{HighlightWindow, MAX_HIGHLIGHTS, WINDOW_SECONDS, WINDOW_STRIDE};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ClippodError, Result};
use crate::types::{Transcript, TranscriptSegment};

/// Regexes shared by the analysis passes, compiled once per analyzer.
pub(crate) struct TextPatterns {
    pub(crate) digits: Regex,
    pub(crate) token: Regex,
    pub(crate) emphasis: Regex,
}

impl TextPatterns {
    pub(crate) fn new() -> Self {
        Self {
            digits: Regex::new(r"\d").unwrap(),
            token: Regex::new(r"\b[a-z]{4,}\b").unwrap(),
            emphasis: Regex::new(r"\b[A-Z]{3,}\b").unwrap(),
        }
    }
}

/// A transcript segment together with its derived annotation.
///
/// Serializes flat, so the JSON carries the segment fields and the score
/// fields side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentAnalysis {
    #[serde(flatten)]
    pub segment: TranscriptSegment,
    #[serde(flatten)]
    pub annotation: SegmentAnnotation,
}

/// Everything the analyzer derives from one transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub highlights: Vec<HighlightWindow>,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    pub sentiment: SentimentSummary,
    pub segment_analysis: Vec<SegmentAnalysis>,
}

impl AnalysisResult {
    fn empty() -> Self {
        Self {
            highlights: Vec::new(),
            topics: Vec::new(),
            keywords: Vec::new(),
            sentiment: SentimentSummary::neutral(),
            segment_analysis: Vec::new(),
        }
    }
}

/// Scores transcripts and ranks candidate clip windows.
pub struct HighlightAnalyzer {
    profile: ScoringProfile,
    patterns: TextPatterns,
}

impl HighlightAnalyzer {
    pub fn new() -> Self {
        Self::with_profile(ScoringProfile::default())
    }

    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self {
            profile,
            patterns: TextPatterns::new(),
        }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Annotate every segment, rank candidate highlight windows, and
    /// summarize keywords, topics and sentiment.
    ///
    /// Zero segments or a zero duration produce the empty result. Negative
    /// or non-finite durations and malformed segment timings are rejected
    /// up front.
    pub fn analyze(
        &self,
        segments: &[TranscriptSegment],
        full_text: &str,
        duration: f64,
    ) -> Result<AnalysisResult> {
        validate_input(segments, duration)?;

        if segments.is_empty() || duration == 0.0 {
            return Ok(AnalysisResult::empty());
        }

        let annotations: Vec<SegmentAnnotation> = segments
            .iter()
            .map(|segment| scoring::annotate_segment(segment, &self.profile, &self.patterns))
            .collect();

        let highlights =
            windows::build_highlights(segments, &annotations, duration, &self.profile, &self.patterns);

        let topics = keywords::extract_topics(
            full_text,
            &self.profile.lexicon.stop_words,
            &self.patterns.token,
        );

        let segment_texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        let keywords = keywords::extract_keywords(
            full_text,
            &segment_texts,
            &self.profile.lexicon.stop_words,
            &self.patterns.token,
            &self.patterns.emphasis,
        );

        let sentiment = sentiment::aggregate_sentiment(&annotations);

        let segment_analysis = segments
            .iter()
            .cloned()
            .zip(annotations)
            .map(|(segment, annotation)| SegmentAnalysis {
                segment,
                annotation,
            })
            .collect();

        Ok(AnalysisResult {
            highlights,
            topics,
            keywords,
            sentiment,
            segment_analysis,
        })
    }

    /// [`analyze`](Self::analyze) over a provider transcript.
    pub fn analyze_transcript(&self, transcript: &Transcript) -> Result<AnalysisResult> {
        self.analyze(
            &transcript.segments,
            &transcript.text,
            transcript.effective_duration(),
        )
    }
}

impl Default for HighlightAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_input(segments: &[TranscriptSegment], duration: f64) -> Result<()> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(ClippodError::InvalidInput {
            reason: format!("duration must be finite and non-negative, got {duration}"),
        });
    }
    for (i, segment) in segments.iter().enumerate() {
        if !segment.start.is_finite() || !segment.end.is_finite() {
            return Err(ClippodError::InvalidInput {
                reason: format!("segment {i} has non-finite timing"),
            });
        }
        if segment.end <= segment.start {
            return Err(ClippodError::InvalidInput {
                reason: format!(
                    "segment {i} has end {} at or before start {}",
                    segment.end, segment.start
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: f64, end: f64, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: text.to_string(),
            confidence: None,
        }
    }

    #[test]
    fn negative_duration_is_rejected() {
        let analyzer = HighlightAnalyzer::new();
        let err = analyzer.analyze(&[], "", -1.0).unwrap_err();
        assert!(matches!(err, ClippodError::InvalidInput { .. }));
    }

    #[test]
    fn non_finite_duration_is_rejected() {
        let analyzer = HighlightAnalyzer::new();
        assert!(analyzer.analyze(&[], "", f64::NAN).is_err());
        assert!(analyzer.analyze(&[], "", f64::INFINITY).is_err());
    }

    #[test]
    fn inverted_segment_is_rejected() {
        let analyzer = HighlightAnalyzer::new();
        let segments = vec![segment(10.0, 10.0, "zero length")];
        let err = analyzer.analyze(&segments, "zero length", 60.0).unwrap_err();
        assert!(matches!(err, ClippodError::InvalidInput { .. }));
    }

    #[test]
    fn empty_segments_short_circuit() {
        let analyzer = HighlightAnalyzer::new();
        let result = analyzer.analyze(&[], "", 0.0).unwrap();
        assert!(result.highlights.is_empty());
        assert!(result.topics.is_empty());
        assert!(result.keywords.is_empty());
        assert!(result.segment_analysis.is_empty());
        assert_eq!(result.sentiment.overall, Emotion::Neutral);
    }

    #[test]
    fn zero_duration_short_circuits_even_with_segments() {
        let analyzer = HighlightAnalyzer::new();
        let segments = vec![segment(0.0, 5.0, "hello there everyone")];
        let result = analyzer.analyze(&segments, "hello there everyone", 0.0).unwrap();
        assert!(result.segment_analysis.is_empty());
        assert_eq!(result.sentiment.overall, Emotion::Neutral);
    }

    #[test]
    fn segment_analysis_preserves_input_order() {
        let analyzer = HighlightAnalyzer::new();
        let segments = vec![
            segment(0.0, 5.0, "first part"),
            segment(5.0, 10.0, "second part"),
            segment(10.0, 15.0, "third part"),
        ];
        let result = analyzer
            .analyze(&segments, "first part second part third part", 15.0)
            .unwrap();
        assert_eq!(result.segment_analysis.len(), 3);
        assert_eq!(result.segment_analysis[0].segment.text, "first part");
        assert_eq!(result.segment_analysis[2].segment.text, "third part");
    }

    #[test]
    fn segment_analysis_serializes_flat() {
        let analyzer = HighlightAnalyzer::new();
        let segments = vec![segment(0.0, 5.0, "hello world")];
        let result = analyzer.analyze(&segments, "hello world", 5.0).unwrap();
        let json = serde_json::to_value(&result.segment_analysis[0]).unwrap();
        assert_eq!(json["start"], 0.0);
        assert_eq!(json["text"], "hello world");
        assert_eq!(json["hook_score"], 65.0);
        assert!(json["emotions"]["neutral"].is_number());
    }
}
