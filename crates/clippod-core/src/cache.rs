use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

/// Get the cache directory for a given media file
pub fn get_cache_dir(media: &Path) -> PathBuf {
    let canonical = media.canonicalize().unwrap_or_else(|_| media.to_path_buf());
    let mut hasher = DefaultHasher::new();
    canonical.hash(&mut hasher);
    let media_hash = hasher.finish();

    get_root_cache_dir().join(media_hash.to_string())
}

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("clippod")
}

/// Get the path for a cached transcript file
pub fn get_transcript_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("transcript.json")
}

/// Get the path for a cached analysis file (profile aware)
pub fn get_analysis_path(cache_dir: &Path, profile_name: &str) -> PathBuf {
    cache_dir.join(format!("analysis_{}.json", profile_name))
}
