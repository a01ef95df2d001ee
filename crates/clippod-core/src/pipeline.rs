use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::clip::ClipPlan;
use crate::error::Result;
use crate::render::{ClipRenderer, RenderStyle};
use crate::transcription::TranscriptionProvider;
use crate::types::Transcript;

/// Transcribe a media file and cache the transcript at the given path.
pub async fn transcribe_media(
    provider: &dyn TranscriptionProvider,
    media: &Path,
    transcript_path: &Path,
) -> Result<Transcript> {
    let transcript = provider.transcribe(media).await?;
    save_transcript(&transcript, transcript_path).await?;
    info!(
        segments = transcript.segments.len(),
        duration = transcript.effective_duration(),
        "transcription complete"
    );
    Ok(transcript)
}

/// Load a transcript from a cached file
pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let json_content = fs::read_to_string(path).await?;
    let transcript: Transcript = serde_json::from_str(&json_content)?;
    Ok(transcript)
}

/// Save a transcript to a file
pub async fn save_transcript(transcript: &Transcript, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(transcript)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

/// Load an analysis result from a cached file
pub async fn load_analysis(path: &Path) -> Result<AnalysisResult> {
    let json_content = fs::read_to_string(path).await?;
    let analysis: AnalysisResult = serde_json::from_str(&json_content)?;
    Ok(analysis)
}

/// Save an analysis result to a file
pub async fn save_analysis(analysis: &AnalysisResult, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(analysis)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

/// Render every clip plan plus a mid-clip thumbnail into `out_dir`.
/// Returns the rendered clip paths in plan order.
pub async fn render_clip_plans(
    renderer: &dyn ClipRenderer,
    source: &Path,
    plans: &[ClipPlan],
    style: &RenderStyle,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).await?;

    let mut rendered = Vec::new();
    for (i, plan) in plans.iter().enumerate() {
        let clip_path = out_dir.join(format!("clip_{:02}.mp4", i + 1));
        let thumbnail_path = out_dir.join(format!("clip_{:02}.jpg", i + 1));

        renderer.render(source, plan, style, &clip_path).await?;
        renderer
            .thumbnail(&clip_path, plan.duration() / 2.0, &thumbnail_path)
            .await?;

        info!(clip = %clip_path.display(), title = %plan.title, "clip rendered");
        rendered.push(clip_path);
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HighlightAnalyzer;
    use crate::types::TranscriptSegment;

    fn sample_transcript() -> Transcript {
        Transcript {
            text: "What if I told you a secret?".to_string(),
            language: Some("en".to_string()),
            segments: vec![TranscriptSegment {
                start: 2.0,
                end: 10.0,
                text: "What if I told you a secret?".to_string(),
                confidence: Some(-0.2),
            }],
            duration: 45.0,
        }
    }

    #[tokio::test]
    async fn transcript_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("transcript-{}.json", uuid::Uuid::new_v4()));
        let transcript = sample_transcript();
        save_transcript(&transcript, &path).await.unwrap();
        let loaded = load_transcript(&path).await.unwrap();

        assert_eq!(loaded.text, transcript.text);
        assert_eq!(loaded.segments.len(), 1);
        assert_eq!(loaded.duration, 45.0);
        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn analysis_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("analysis-{}.json", uuid::Uuid::new_v4()));
        let transcript = sample_transcript();
        let analysis = HighlightAnalyzer::new()
            .analyze_transcript(&transcript)
            .unwrap();
        save_analysis(&analysis, &path).await.unwrap();
        let loaded = load_analysis(&path).await.unwrap();

        assert_eq!(loaded.highlights.len(), analysis.highlights.len());
        assert_eq!(loaded.sentiment.overall, analysis.sentiment.overall);
        assert_eq!(
            loaded.segment_analysis[0].annotation.hook_score,
            analysis.segment_analysis[0].annotation.hook_score
        );
        fs::remove_file(&path).await.unwrap();
    }
}
