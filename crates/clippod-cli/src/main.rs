use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use clippod_core::{
    ClipPlanOptions, FfmpegRenderer, HighlightAnalyzer, RenderStyle, ScoringProfile,
    Transcript, WhisperCommand, format_analysis_readable, format_transcript_with_timestamps,
    get_analysis_path, get_cache_dir, get_transcript_path, load_analysis, load_transcript,
    plan_clips, probe_duration, render_clip_plans, save_analysis, transcribe_media,
};

#[derive(Parser)]
#[command(name = "clippod")]
#[command(
    about = "Find highlight moments in podcast recordings and cut them into vertical clips"
)]
struct Cli {
    /// Media file to analyze, or a transcript JSON from an earlier run
    input: PathBuf,

    /// Scoring profile JSON overriding the built-in weights and vocabularies
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Whisper model for transcription
    #[arg(short, long, default_value = "base")]
    model: String,

    /// Override the recording duration in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Show only the top N highlights in the report
    #[arg(short, long)]
    top: Option<usize>,

    /// Print the analysis as JSON instead of a readable report
    #[arg(long)]
    json: bool,

    /// Print the timestamped transcript before the report
    #[arg(long)]
    show_transcript: bool,

    /// Render the top highlights as vertical clips with ffmpeg
    #[arg(short, long)]
    render: bool,

    /// Directory for rendered clips and thumbnails
    #[arg(short, long, default_value = "clips")]
    out_dir: PathBuf,

    /// How many clips to render
    #[arg(long, default_value_t = 5)]
    max_clips: usize,

    /// Force re-processing even if cached files exist
    #[arg(short, long)]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn is_transcript_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let from_transcript = is_transcript_file(&cli.input);
    if cli.render && from_transcript {
        eprintln!(
            "{} --render needs the original media file as input, not a transcript",
            style("Error:").red().bold()
        );
        std::process::exit(1);
    }

    // Validate the scoring profile early
    let analyzer = match &cli.profile {
        Some(path) => match ScoringProfile::from_file(path) {
            Ok(profile) => HighlightAnalyzer::with_profile(profile),
            Err(e) => {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                std::process::exit(1);
            }
        },
        None => HighlightAnalyzer::new(),
    };

    // Setup cache directory
    let cache_dir = get_cache_dir(&cli.input);
    fs::create_dir_all(&cache_dir).await?;

    println!(
        "\n{}  {}\n",
        style("clippod").cyan().bold(),
        style("Highlight Finder").dim()
    );

    // Step 1: Transcribe (check cache)
    let transcript = if from_transcript {
        let transcript = load_transcript(&cli.input).await?;
        println!(
            "{} Transcript loaded: {:.1} min, {} segments",
            style("✓").green().bold(),
            transcript.effective_duration() / 60.0,
            transcript.segments.len()
        );
        transcript
    } else {
        let transcript_path = get_transcript_path(&cache_dir);
        if !cli.force && transcript_path.exists() {
            let transcript = load_transcript(&transcript_path).await?;
            println!(
                "{} Transcribed: {:.1} min, {} {}",
                style("✓").green().bold(),
                transcript.effective_duration() / 60.0,
                style(transcript.language.as_deref().unwrap_or("unknown")).yellow(),
                style("(cached)").dim()
            );
            transcript
        } else {
            let spinner = create_spinner("Transcribing with Whisper...");
            let whisper = WhisperCommand::new(&cli.model, &cache_dir);
            let transcript = transcribe_media(&whisper, &cli.input, &transcript_path).await?;
            spinner.finish_with_message(format!(
                "{} Transcribed: {:.1} min, {} detected",
                style("✓").green().bold(),
                transcript.effective_duration() / 60.0,
                style(transcript.language.as_deref().unwrap_or("unknown")).yellow()
            ));
            transcript
        }
    };

    let duration = resolve_duration(&cli, &transcript, from_transcript).await;

    // Step 2: Analyze (check cache with profile name)
    let analysis_path = get_analysis_path(&cache_dir, &analyzer.profile().name);
    let analysis = if !cli.force && analysis_path.exists() {
        let analysis = load_analysis(&analysis_path).await?;
        println!(
            "{} Analyzed: {} highlights {}",
            style("✓").green().bold(),
            analysis.highlights.len(),
            style("(cached)").dim()
        );
        analysis
    } else {
        let spinner = create_spinner("Scoring segments...");
        let analysis = analyzer.analyze(&transcript.segments, &transcript.text, duration)?;
        save_analysis(&analysis, &analysis_path).await?;
        spinner.finish_with_message(format!(
            "{} Analyzed: {} highlights",
            style("✓").green().bold(),
            analysis.highlights.len()
        ));
        analysis
    };

    // Step 3: Render clips (optional)
    if cli.render {
        let options = ClipPlanOptions {
            max_clips: cli.max_clips,
            ..ClipPlanOptions::default()
        };
        let plans = plan_clips(&analysis.highlights, &options);
        if plans.is_empty() {
            println!(
                "{} Nothing to render, no highlight windows found",
                style("✓").green().bold()
            );
        } else {
            let spinner = create_spinner(&format!("Rendering {} clips with ffmpeg...", plans.len()));
            let rendered = render_clip_plans(
                &FfmpegRenderer,
                &cli.input,
                &plans,
                &RenderStyle::default(),
                &cli.out_dir,
            )
            .await?;
            spinner.finish_with_message(format!(
                "{} Rendered {} clips to {}",
                style("✓").green().bold(),
                rendered.len(),
                style(cli.out_dir.display()).cyan()
            ));
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if cli.show_transcript {
        println!("\n{}", style("─".repeat(60)).dim());
        println!("{}", format_transcript_with_timestamps(&transcript));
    }

    println!(
        "\n{} {}\n",
        style("Saved:").dim(),
        style(analysis_path.display()).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    let mut display = analysis;
    if let Some(top) = cli.top {
        display.highlights.truncate(top);
    }
    println!("{}", format_analysis_readable(&display));

    Ok(())
}

/// Best known duration for the recording: an explicit flag wins, then an
/// ffprobe of the media, then whatever the transcript itself reports.
async fn resolve_duration(cli: &Cli, transcript: &Transcript, from_transcript: bool) -> f64 {
    if let Some(duration) = cli.duration {
        return duration;
    }
    if !from_transcript {
        if let Ok(duration) = probe_duration(&cli.input).await {
            return duration;
        }
    }
    transcript.effective_duration()
}
