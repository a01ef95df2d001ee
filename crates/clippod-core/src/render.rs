use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::info;

use crate::clip::ClipPlan;
use crate::error::{ClippodError, Result};

const OUTPUT_WIDTH: u32 = 1080;
const OUTPUT_HEIGHT: u32 = 1920;
const VIDEO_BITRATE: &str = "5M";
const AUDIO_BITRATE: &str = "192k";
const ENCODE_PRESET: &str = "fast";
const THUMBNAIL_WIDTH: u32 = 480;

/// Visual treatment applied when rendering a clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Center-crop to 9:16 and scale to 1080x1920.
    pub vertical: bool,
    /// Slow push-in zoom over the clip.
    pub zoom: bool,
    pub crf: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            vertical: true,
            zoom: true,
            crf: 23,
        }
    }
}

/// Cuts a planned clip out of the source media.
#[async_trait]
pub trait ClipRenderer {
    async fn render(
        &self,
        source: &Path,
        plan: &ClipPlan,
        style: &RenderStyle,
        output: &Path,
    ) -> Result<()>;

    async fn thumbnail(&self, clip: &Path, at_seconds: f64, output: &Path) -> Result<()>;
}

/// Renderer shelling out to `ffmpeg`.
pub struct FfmpegRenderer;

#[async_trait]
impl ClipRenderer for FfmpegRenderer {
    async fn render(
        &self,
        source: &Path,
        plan: &ClipPlan,
        style: &RenderStyle,
        output: &Path,
    ) -> Result<()> {
        info!(
            start = plan.start,
            end = plan.end,
            output = %output.display(),
            "rendering clip"
        );

        let mut cmd = Command::new("ffmpeg");
        cmd.arg("-y")
            .args(["-ss", &plan.start.to_string()])
            .args(["-t", &plan.duration().to_string()])
            .arg("-i")
            .arg(source);

        if let Some(chain) = filter_chain(style) {
            cmd.args(["-vf", &chain]);
        }

        cmd.args(["-c:v", "libx264", "-c:a", "aac"])
            .args(["-b:v", VIDEO_BITRATE, "-b:a", AUDIO_BITRATE])
            .args(["-pix_fmt", "yuv420p"])
            .args(["-movflags", "+faststart"])
            .args(["-preset", ENCODE_PRESET])
            .args(["-crf", &style.crf.to_string()])
            .arg(output);

        let result = cmd.output().await?;
        if !result.status.success() {
            return Err(ClippodError::RenderFailed {
                output_path: output.to_path_buf(),
                reason: String::from_utf8_lossy(&result.stderr).to_string(),
            });
        }
        Ok(())
    }

    async fn thumbnail(&self, clip: &Path, at_seconds: f64, output: &Path) -> Result<()> {
        let result = Command::new("ffmpeg")
            .arg("-y")
            .args(["-ss", &at_seconds.to_string()])
            .arg("-i")
            .arg(clip)
            .args(["-vf", &format!("scale={THUMBNAIL_WIDTH}:-1")])
            .args(["-vframes", "1"])
            .arg(output)
            .output()
            .await?;

        if !result.status.success() {
            return Err(ClippodError::RenderFailed {
                output_path: output.to_path_buf(),
                reason: String::from_utf8_lossy(&result.stderr).to_string(),
            });
        }
        Ok(())
    }
}

/// Media duration in seconds via `ffprobe`.
pub async fn probe_duration(media: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(media)
        .output()
        .await?;

    if !output.status.success() {
        return Err(ClippodError::ProbeFailed {
            media_path: media.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim();
    trimmed.parse::<f64>().map_err(|e| ClippodError::ProbeFailed {
        media_path: media.to_path_buf(),
        reason: format!("unexpected ffprobe output {trimmed:?}: {e}"),
    })
}

fn filter_chain(style: &RenderStyle) -> Option<String> {
    let mut filters = Vec::new();
    if style.vertical {
        filters.push("crop=ih*9/16:ih:(iw-ih*9/16)/2".to_string());
        filters.push(format!("scale={OUTPUT_WIDTH}:{OUTPUT_HEIGHT}"));
    }
    if style.zoom {
        filters.push("zoompan=z=zoom+0.001:d=1:x=iw/2-(iw/zoom/2):y=ih/2-(ih/zoom/2)".to_string());
    }
    if filters.is_empty() {
        None
    } else {
        Some(filters.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_crops_scales_and_zooms() {
        let chain = filter_chain(&RenderStyle::default()).unwrap();
        assert_eq!(
            chain,
            "crop=ih*9/16:ih:(iw-ih*9/16)/2,scale=1080:1920,\
             zoompan=z=zoom+0.001:d=1:x=iw/2-(iw/zoom/2):y=ih/2-(ih/zoom/2)"
        );
    }

    #[test]
    fn vertical_only_skips_zoompan() {
        let style = RenderStyle {
            zoom: false,
            ..RenderStyle::default()
        };
        let chain = filter_chain(&style).unwrap();
        assert!(chain.starts_with("crop="));
        assert!(!chain.contains("zoompan"));
    }

    #[test]
    fn plain_cut_needs_no_filters() {
        let style = RenderStyle {
            vertical: false,
            zoom: false,
            crf: 23,
        };
        assert!(filter_chain(&style).is_none());
    }

    #[test]
    fn style_deserializes_with_defaults() {
        let style: RenderStyle = serde_json::from_str(r#"{"zoom": false}"#).unwrap();
        assert!(style.vertical);
        assert!(!style.zoom);
        assert_eq!(style.crf, 23);
    }
}
