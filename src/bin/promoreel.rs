use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    /// Log act mounts and chunk scheduling.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the act layout of the composition.
    Info(InfoArgs),
    /// Evaluate a single frame and print it as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range into a JSON-lines file.
    Render(RenderArgs),
    /// Print the composition description as JSON.
    Dump(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Promo description JSON. Defaults to the built-in promo.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InfoArgs {
    #[command(flatten)]
    input: ConfigArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: ConfigArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive). Defaults to the composition duration.
    #[arg(long)]
    to: Option<u64>,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<promoreel::PromoConfig> {
    match &args.config {
        Some(path) => Ok(promoreel::PromoConfig::from_json_path(path)?),
        None => Ok(promoreel::PromoConfig::default()),
    }
}

fn load_composition(args: &ConfigArgs) -> anyhow::Result<promoreel::Composition> {
    let comp = load_config(args)?.build().context("build composition")?;
    Ok(comp)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.input)?;
    let fps = comp.fps();
    println!(
        "{} {}x{} @ {}/{} fps, {} frames ({:.2}s)",
        comp.config.id,
        comp.canvas().width,
        comp.canvas().height,
        fps.num,
        fps.den,
        comp.duration().0,
        fps.frames_to_secs(comp.duration().0 as f64)
    );
    for act in &comp.acts {
        let fade = act
            .transition_out
            .as_ref()
            .map(|t| format!(", crossfade {}f", t.frames))
            .unwrap_or_default();
        println!(
            "  {:<18} [{:>4}, {:>4}) {:>4}f{}",
            act.name,
            act.window.start.0,
            act.window.end().0,
            act.window.duration,
            fade
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.input)?;
    let frame = promoreel::render_frame(&comp, promoreel::FrameIndex(args.frame))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)?
    } else {
        serde_json::to_string(&frame)?
    };

    match args.out {
        Some(out) => {
            ensure_parent(&out)?;
            std::fs::write(&out, json)
                .with_context(|| format!("write frame json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.input)?;
    let to = args.to.unwrap_or(comp.duration().0);
    let range =
        promoreel::FrameRange::new(promoreel::FrameIndex(args.from), promoreel::FrameIndex(to))?;
    let threading = promoreel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    promoreel::check_render_range(&comp, range)?;
    ensure_parent(&args.out)?;
    let mut sink = promoreel::JsonLinesSink::create(&args.out)?;
    let stats = promoreel::render_to_sink(&comp, range, &threading, &mut sink)?;

    eprintln!(
        "wrote {} ({} frames, {} chunks)",
        args.out.display(),
        stats.frames_rendered,
        stats.chunks
    );
    Ok(())
}

fn cmd_dump(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    cfg.build().context("build composition")?;
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
