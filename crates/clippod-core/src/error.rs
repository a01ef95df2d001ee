use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClippodError {
    #[error("Invalid analyzer input: {reason}")]
    InvalidInput { reason: String },

    #[error("Transcription failed for {media_path}: {reason}")]
    TranscriptionFailed { media_path: PathBuf, reason: String },

    #[error("Probe failed for {media_path}: {reason}")]
    ProbeFailed { media_path: PathBuf, reason: String },

    #[error("Render failed for {output_path}: {reason}")]
    RenderFailed { output_path: PathBuf, reason: String },

    #[error("Scoring profile {path} is invalid: {reason}")]
    ProfileInvalid { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClippodError>;
