use serde::{Deserialize, Serialize};

/// A timed transcript for one media file, as produced by a transcription
/// provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub segments: Vec<TranscriptSegment>,
    #[serde(default)]
    pub duration: f64,
}

/// One timed span of speech within a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Transcript {
    /// Reported duration, falling back to the last segment end when the
    /// provider left it unset.
    pub fn effective_duration(&self) -> f64 {
        if self.duration > 0.0 {
            self.duration
        } else {
            self.segments.last().map(|s| s.end).unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_duration_prefers_reported_value() {
        let transcript = Transcript {
            text: "hello".to_string(),
            language: None,
            segments: vec![TranscriptSegment {
                start: 0.0,
                end: 4.5,
                text: "hello".to_string(),
                confidence: None,
            }],
            duration: 12.0,
        };
        assert_eq!(transcript.effective_duration(), 12.0);
    }

    #[test]
    fn effective_duration_falls_back_to_last_segment() {
        let transcript = Transcript {
            text: "hello".to_string(),
            language: None,
            segments: vec![TranscriptSegment {
                start: 0.0,
                end: 4.5,
                text: "hello".to_string(),
                confidence: None,
            }],
            duration: 0.0,
        };
        assert_eq!(transcript.effective_duration(), 4.5);
    }

    #[test]
    fn transcript_parses_without_optional_fields() {
        let json = r#"{"text": "hi", "segments": [{"start": 0.0, "end": 1.0, "text": "hi"}]}"#;
        let transcript: Transcript = serde_json::from_str(json).unwrap();
        assert!(transcript.language.is_none());
        assert_eq!(transcript.duration, 0.0);
        assert!(transcript.segments[0].confidence.is_none());
    }
}
