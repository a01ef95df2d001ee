use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::HighlightWindow;

/// Bounds for turning ranked highlights into render-ready clips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipPlanOptions {
    pub max_clips: usize,
    pub min_duration: f64,
    pub max_duration: f64,
}

impl Default for ClipPlanOptions {
    fn default() -> Self {
        Self {
            max_clips: 5,
            min_duration: 15.0,
            max_duration: 60.0,
        }
    }
}

/// A render-ready clip derived from one highlight window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start: f64,
    pub end: f64,
    pub viral_score: f64,
    pub hook_score: f64,
    pub engagement_score: f64,
    pub keywords: Vec<String>,
    pub transcript: String,
}

impl ClipPlan {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Turn the top ranked highlights into numbered clip plans, stretching or
/// cutting each span to fit the configured duration bounds.
pub fn plan_clips(highlights: &[HighlightWindow], options: &ClipPlanOptions) -> Vec<ClipPlan> {
    highlights
        .iter()
        .take(options.max_clips)
        .enumerate()
        .map(|(i, highlight)| {
            let start = highlight.start;
            let mut end = highlight.end;
            let duration = end - start;

            if duration < options.min_duration {
                end = start + options.min_duration;
            } else if duration > options.max_duration {
                end = start + options.max_duration;
            }

            ClipPlan {
                id: Uuid::new_v4(),
                title: format!("Clip {}: {}", i + 1, highlight.title),
                description: highlight.description.clone(),
                start,
                end,
                viral_score: highlight.viral_score,
                hook_score: highlight.hook_score,
                engagement_score: highlight.engagement_score,
                keywords: highlight.keywords.clone(),
                transcript: highlight.transcript.clone(),
            }
        })
        .collect()
}
