//! Clippod Core Library
//!
//! Core functionality for scoring podcast and video transcripts, ranking
//! highlight windows, and cutting vertical clips with ffmpeg.

pub mod analysis;
pub mod cache;
pub mod clip;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod render;
pub mod transcription;
pub mod types;

// Re-export commonly used items at crate root
pub use analysis::{
    AnalysisResult, Emotion, EmotionScores, HighlightAnalyzer, HighlightWindow, Lexicon,
    ScoreWeights, ScoringProfile, SegmentAnalysis, SegmentAnnotation, SentimentSummary,
};
pub use cache::{get_analysis_path, get_cache_dir, get_root_cache_dir, get_transcript_path};
pub use clip::{ClipPlan, ClipPlanOptions, plan_clips};
pub use error::{ClippodError, Result};
pub use format::{format_analysis_readable, format_timestamp, format_transcript_with_timestamps};
pub use pipeline::{
    load_analysis, load_transcript, render_clip_plans, save_analysis, save_transcript,
    transcribe_media,
};
pub use render::{ClipRenderer, FfmpegRenderer, RenderStyle, probe_duration};
pub use transcription::{TranscriptionProvider, WhisperCommand};
pub use types::{Transcript, TranscriptSegment};
