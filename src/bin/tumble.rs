use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tumble", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the full rotation to MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render to a temporary MP4, publish it into a directory, then delete the temporary file.
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Animation config JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame side length in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Frames in one full rotation.
    #[arg(long)]
    frames: Option<u64>,

    /// Playback rate in frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Number of random face colors.
    #[arg(long)]
    colors: Option<usize>,

    /// Seed for the random palette.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct PublishArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Directory that receives published videos.
    #[arg(long)]
    dest: PathBuf,

    /// Directory for the temporary MP4.
    #[arg(long, default_value = ".")]
    workdir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Publish(args) => cmd_publish(args),
    }
}

fn load_animation(args: &RunArgs) -> anyhow::Result<tumble::Animation> {
    let mut cfg = match &args.config {
        Some(path) => tumble::AnimationConfig::from_path(path)?,
        None => tumble::AnimationConfig::default(),
    };
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(frames) = args.frames {
        cfg.frame_count = frames;
    }
    if let Some(fps) = args.fps {
        cfg.fps = tumble::Fps::new(fps, 1)?;
    }
    if args.colors.is_some() || args.seed.is_some() {
        let count = args.colors.unwrap_or(match &cfg.palette {
            tumble::PaletteSpec::Random { count, .. } => *count,
            tumble::PaletteSpec::Fixed { .. } => tumble::DEFAULT_PALETTE_LEN,
        });
        cfg.palette = tumble::PaletteSpec::Random {
            count,
            seed: args.seed,
        };
    }
    Ok(cfg.resolve()?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let anim = load_animation(&args.run)?;
    let frame = anim
        .frames()?
        .render_at(tumble::FrameIndex(args.index))
        .with_context(|| format!("render frame {}", args.index))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let anim = load_animation(&args.run)?;
    let stats = tumble::render_to_mp4(&anim, &args.out, !args.no_overwrite)
        .with_context(|| format!("render '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames_total);
    Ok(())
}

fn cmd_publish(args: PublishArgs) -> anyhow::Result<()> {
    let anim = load_animation(&args.run)?;
    let mut publisher = tumble::DirectoryPublisher::new(&args.dest);
    let receipt = tumble::render_and_publish(&anim, &args.workdir, &mut publisher)
        .context("render and publish")?;

    eprintln!("published {} ({} bytes)", receipt.id, receipt.bytes);
    Ok(())
}
