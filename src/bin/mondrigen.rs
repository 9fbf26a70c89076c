use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use mondrigen::{SceneConfig, SceneController, batch_frame, render_batch};

#[derive(Parser, Debug)]
#[command(name = "mondrigen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene configuration JSON; defaults to the classic 800x800 scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based); motion is advanced this many frames.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Randomize tile speeds before advancing, so frames actually differ.
    #[arg(long, default_value_t = false)]
    animate: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Scene configuration JSON; defaults to the classic 800x800 scene.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Randomize tile speeds before advancing, so frames actually differ.
    #[arg(long, default_value_t = true)]
    animate: bool,

    /// Output directory for frame_NNNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(p) => Ok(SceneConfig::from_path(p)?),
        None => Ok(SceneConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.in_path.as_ref())?;
    let mut controller = SceneController::new(&config)?;
    if args.animate {
        controller.randomize_speed();
    }
    for _ in 0..args.frame {
        controller.advance_frame();
    }

    let frame = render_batch(&batch_frame(controller.state()));
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let config = load_config(args.in_path.as_ref())?;
    let mut controller = SceneController::new(&config)?;
    if args.animate {
        controller.randomize_speed();
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.frames {
        let frame = render_batch(&batch_frame(controller.state()));
        let out = args.out_dir.join(format!("frame_{i:05}.png"));
        write_png(&out, &frame)?;
        controller.advance_frame();
    }
    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn write_png(out: &PathBuf, frame: &mondrigen::FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
