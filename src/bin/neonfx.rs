use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use neonfx::{
    BackgroundVariant, EffectSession, FrameIndex, FrameRange, PngSequenceSink, SceneConfig,
    SessionOpts,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "neonfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the first N frames as a PNG sequence.
    Render(RenderArgs),
    /// Simulate N frames and print population statistics as JSON.
    Stats(StatsArgs),
    /// Print the draw commands of one frame as JSON.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Override the scene seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the background variant.
    #[arg(long)]
    background: Option<BackgroundVariant>,

    /// Force the reduced-motion preference on.
    #[arg(long, default_value_t = false)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render, starting at frame 0.
    #[arg(long)]
    frames: u64,

    /// Output directory for `frame_00000.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to simulate.
    #[arg(long)]
    frames: u64,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Stats(args) => cmd_stats(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn open_session(args: &SceneArgs) -> anyhow::Result<EffectSession> {
    let mut cfg = SceneConfig::from_path(&args.config)?;
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(variant) = args.background {
        cfg.background = Some(variant);
    }
    if args.reduced_motion {
        cfg.reduced_motion = true;
    }
    let assets_root = args.config.parent().unwrap_or_else(|| Path::new("."));
    let opts = SessionOpts {
        assets_root: assets_root.to_path_buf(),
    };
    let sess = EffectSession::new(&cfg, opts)
        .with_context(|| format!("load scene '{}'", args.config.display()))?;
    Ok(sess)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let sess = open_session(&args.scene)?;
    let frame = sess.render_frame(FrameIndex(args.frame))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let data = frame.to_straight_rgba8();
    image::save_buffer_with_format(
        &args.out,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let sess = open_session(&args.scene)?;
    let range = FrameRange::new(FrameIndex(0), FrameIndex(args.frames))?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = sess.render_range(range, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_total,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.frames > 0, "--frames must be at least 1");
    let mut sess = open_session(&args.scene)?;

    let mut min = usize::MAX;
    let mut max = 0usize;
    let mut sum = 0u64;
    let mut last = None;
    for _ in 0..args.frames {
        let report = sess.step();
        min = min.min(report.population);
        max = max.max(report.population);
        sum += report.population as u64;
        last = Some(report);
    }
    let last = last.context("no frames simulated")?;

    let out = serde_json::json!({
        "frames": args.frames,
        "seed": sess.config().seed,
        "population": {
            "min": min,
            "max": max,
            "mean": sum as f64 / args.frames as f64,
            "final": last.population,
        },
        "final_fingerprint": last.fingerprint.to_string(),
        "elapsed_ms": last.timestamp_ms,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let sess = open_session(&args.scene)?;
    let cmds = sess.record_frame(FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&cmds)?);
    Ok(())
}
