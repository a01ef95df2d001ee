use crate::analysis::AnalysisResult;
use crate::types::Transcript;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format transcript segments with timestamps
pub fn format_transcript_with_timestamps(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|seg| format!("[{}] {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an analysis result as human-readable markdown
pub fn format_analysis_readable(result: &AnalysisResult) -> String {
    let mut output = String::new();

    // Sentiment
    output.push_str(&format!(
        "**Sentiment:** {} | **Positive:** {:.3} | **Negative:** {:.3}\n\n",
        result.sentiment.overall, result.sentiment.positive, result.sentiment.negative
    ));

    // Topics
    if !result.topics.is_empty() {
        output.push_str("## Topics\n\n");
        for topic in &result.topics {
            output.push_str(&format!("• {}\n", topic));
        }
        output.push('\n');
    }

    // Keywords
    if !result.keywords.is_empty() {
        output.push_str(&format!("**Keywords:** {}\n\n", result.keywords.join(", ")));
    }

    // Highlights
    output.push_str("## Highlights\n\n");
    if result.highlights.is_empty() {
        output.push_str("No highlight windows found.\n");
    }
    for (i, highlight) in result.highlights.iter().enumerate() {
        let start = format_timestamp(highlight.start);
        let end = format_timestamp(highlight.end);
        output.push_str(&format!(
            "### {}. [{}–{}] {}\n\n",
            i + 1,
            start,
            end,
            highlight.title
        ));
        output.push_str(&format!(
            "viral {:.1} | hook {:.1} | engagement {:.1}\n\n",
            highlight.viral_score, highlight.hook_score, highlight.engagement_score
        ));
        output.push_str(&format!("{}\n\n", highlight.description));
        if !highlight.keywords.is_empty() {
            output.push_str(&format!("Keywords: {}\n\n", highlight.keywords.join(", ")));
        }
    }

    output
}
