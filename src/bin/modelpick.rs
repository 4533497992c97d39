use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use modelpick::{DemoVideo, FrameIndex, LANDING, VideoConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "modelpick", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the description of a single frame as JSON.
    Frame(FrameArgs),
    /// Write every frame of the demo video as JSON lines.
    Export(ExportArgs),
    /// List the scene windows of the demo video.
    Scenes(ConfigArg),
    /// Print the landing page content as JSON.
    Landing,
}

#[derive(Parser, Debug)]
struct ConfigArg {
    /// Video config JSON (defaults: 30 fps, 1280x720).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    #[command(flatten)]
    config: ConfigArg,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Output path for the JSON lines.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    config: ConfigArg,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Export(args) => cmd_export(args),
        Command::Scenes(args) => cmd_scenes(args),
        Command::Landing => cmd_landing(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_video(arg: &ConfigArg) -> anyhow::Result<DemoVideo> {
    let config = match &arg.config {
        Some(path) => VideoConfig::from_path(path)
            .with_context(|| format!("load video config '{}'", path.display()))?,
        None => VideoConfig::default(),
    };
    Ok(DemoVideo::new(config)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let video = load_video(&args.config)?;
    let frame = video.render(FrameIndex(args.frame));
    if frame.is_empty() {
        tracing::warn!(
            frame = args.frame,
            duration = video.duration().0,
            "frame is past the end of the video"
        );
    }
    let json = serde_json::to_string_pretty(&frame).context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let video = load_video(&args.config)?;
    create_parent_dir(&args.out)?;

    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    let mut count = 0u64;
    for frame in video.frames() {
        serde_json::to_writer(&mut w, &frame)
            .with_context(|| format!("write frame {}", frame.frame.0))?;
        w.write_all(b"\n")?;
        count += 1;
    }
    w.flush()
        .with_context(|| format!("flush output '{}'", args.out.display()))?;

    eprintln!("wrote {count} frames to {}", args.out.display());
    Ok(())
}

fn cmd_scenes(args: ConfigArg) -> anyhow::Result<()> {
    let video = load_video(&args)?;
    let fps = video.timeline().fps();
    println!(
        "{:<16} {:>6} {:>9} {:>6} {:>8}",
        "scene", "start", "duration", "end", "seconds"
    );
    for w in video.timeline().windows() {
        println!(
            "{:<16} {:>6} {:>9} {:>6} {:>8.2}",
            w.scene.name(),
            w.start_frame.0,
            w.duration_frames,
            w.range().end.0,
            fps.frames_to_secs(w.duration_frames as f64),
        );
    }
    println!(
        "total: {} frames ({:.2}s at {} fps)",
        video.duration().0,
        fps.frames_to_secs(video.duration().0 as f64),
        fps.as_f64()
    );
    Ok(())
}

fn cmd_landing() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&LANDING).context("serialize landing content")?;
    println!("{json}");
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
