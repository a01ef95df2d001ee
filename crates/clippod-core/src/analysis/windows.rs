use serde::{Deserialize, Serialize};

use super::TextPatterns;
use super::keywords;
use super::lexicon::ScoringProfile;
use super::scoring::SegmentAnnotation;
use crate::types::TranscriptSegment;

/// Candidate clip span in seconds.
pub const WINDOW_SECONDS: i64 = 30;
/// Offset between consecutive candidate starts in seconds.
pub const WINDOW_STRIDE: i64 = 5;
/// Ranked windows kept in the result.
pub const MAX_HIGHLIGHTS: usize = 10;

const WINDOW_KEYWORDS: usize = 5;
const TITLE_MAX_CHARS: usize = 60;
const TITLE_KEPT_CHARS: usize = 57;
const DESCRIPTION_MAX_CHARS: usize = 200;

/// A scored candidate clip span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightWindow {
    pub start: f64,
    pub end: f64,
    pub title: String,
    pub description: String,
    pub viral_score: f64,
    pub hook_score: f64,
    pub engagement_score: f64,
    pub keywords: Vec<String>,
    pub transcript: String,
}

/// Slide a fixed window over the transcript, score each span from the
/// segments it fully contains, and keep the best ranked by viral score.
pub(crate) fn build_highlights(
    segments: &[TranscriptSegment],
    annotations: &[SegmentAnnotation],
    duration: f64,
    profile: &ScoringProfile,
    patterns: &TextPatterns,
) -> Vec<HighlightWindow> {
    let mut windows = Vec::new();
    let last_start = duration.trunc() as i64 - WINDOW_SECONDS;

    let mut start = 0i64;
    while start <= last_start {
        let end = start + WINDOW_SECONDS;
        let contained: Vec<usize> = (0..segments.len())
            .filter(|&i| segments[i].start >= start as f64 && segments[i].end <= end as f64)
            .collect();

        if !contained.is_empty() {
            windows.push(build_window(
                start,
                end,
                &contained,
                segments,
                annotations,
                profile,
                patterns,
            ));
        }

        start += WINDOW_STRIDE;
    }

    // Stable sort, so equal scores keep the earlier window first.
    windows.sort_by(|a, b| b.viral_score.total_cmp(&a.viral_score));
    windows.truncate(MAX_HIGHLIGHTS);
    windows
}

fn build_window(
    start: i64,
    end: i64,
    contained: &[usize],
    segments: &[TranscriptSegment],
    annotations: &[SegmentAnnotation],
    profile: &ScoringProfile,
    patterns: &TextPatterns,
) -> HighlightWindow {
    let count = contained.len() as f64;
    let mut viral = 0.0;
    let mut hook = 0.0;
    let mut engagement = 0.0;
    for &i in contained {
        viral += annotations[i].viral_score;
        hook += annotations[i].hook_score;
        engagement += annotations[i].engagement_score;
    }

    let texts: Vec<&str> = contained.iter().map(|&i| segments[i].text.as_str()).collect();
    let transcript = texts.join(" ");

    let mut window_keywords = keywords::extract_keywords(
        &transcript,
        &texts,
        &profile.lexicon.stop_words,
        &patterns.token,
        &patterns.emphasis,
    );
    window_keywords.truncate(WINDOW_KEYWORDS);

    HighlightWindow {
        start: start as f64,
        end: end as f64,
        title: window_title(&transcript),
        description: window_description(&transcript),
        viral_score: round1(viral / count),
        hook_score: round1(hook / count),
        engagement_score: round1(engagement / count),
        keywords: window_keywords,
        transcript,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn window_title(transcript: &str) -> String {
    let first = transcript.split('.').next().unwrap_or("").trim();
    if first.is_empty() {
        return "Untitled Clip".to_string();
    }
    if first.chars().count() > TITLE_MAX_CHARS {
        let mut title: String = first.chars().take(TITLE_KEPT_CHARS).collect();
        title.push_str("...");
        title
    } else {
        first.to_string()
    }
}

fn window_description(transcript: &str) -> String {
    if transcript.chars().count() > DESCRIPTION_MAX_CHARS {
        let mut description: String = transcript.chars().take(DESCRIPTION_MAX_CHARS).collect();
        description.push_str("...");
        description
    } else {
        transcript.to_string()
    }
}
