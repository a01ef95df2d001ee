use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{fs, process::Command};
use tracing::{debug, info};

use crate::error::{ClippodError, Result};
use crate::types::{Transcript, TranscriptSegment};

/// Produces a timed transcript for a media file.
#[async_trait]
pub trait TranscriptionProvider {
    async fn transcribe(&self, media: &Path) -> Result<Transcript>;
}

/// Transcription by shelling out to the `whisper` CLI.
pub struct WhisperCommand {
    model: String,
    output_dir: PathBuf,
}

impl WhisperCommand {
    pub fn new(model: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            output_dir: output_dir.into(),
        }
    }
}

#[derive(Deserialize)]
struct WhisperOutput {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

#[derive(Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
    #[serde(default)]
    avg_logprob: Option<f64>,
}

impl WhisperOutput {
    fn into_transcript(self) -> Transcript {
        let segments: Vec<TranscriptSegment> = self
            .segments
            .into_iter()
            .map(|s| TranscriptSegment {
                start: s.start,
                end: s.end,
                text: s.text.trim().to_string(),
                confidence: s.avg_logprob,
            })
            .collect();
        // Whisper reports no overall duration; the last segment end is the
        // closest thing to one.
        let duration = segments.last().map(|s| s.end).unwrap_or(0.0);

        Transcript {
            text: self.text.trim().to_string(),
            language: self.language,
            segments,
            duration,
        }
    }
}

#[async_trait]
impl TranscriptionProvider for WhisperCommand {
    async fn transcribe(&self, media: &Path) -> Result<Transcript> {
        info!(media = %media.display(), model = %self.model, "running whisper");

        let output = Command::new("whisper")
            .arg(media)
            .arg("--model")
            .arg(&self.model)
            .arg("--output_format")
            .arg("json")
            .arg("--output_dir")
            .arg(&self.output_dir)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ClippodError::TranscriptionFailed {
                media_path: media.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        // Whisper names its output after the input file.
        let stem = media.file_stem().unwrap_or_default();
        let json_path = self.output_dir.join(stem).with_extension("json");
        let json_content = fs::read_to_string(&json_path).await?;
        let raw: WhisperOutput = serde_json::from_str(&json_content)?;

        debug!(segments = raw.segments.len(), "parsed whisper output");
        Ok(raw.into_transcript())
    }
}
