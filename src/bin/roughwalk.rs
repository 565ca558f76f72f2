use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[derive(Parser, Debug)]
#[command(name = "roughwalk", version)]
struct Cli {
    /// Log debug-level progress to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a walk and write it as SVG (and optionally PNG).
    Render(RenderArgs),
    /// Print the built-in configuration as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Configuration JSON; the built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize the SVG to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Random seed; drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Background color as hex (`#rrggbb`), or `none` for a transparent canvas.
    #[arg(long, default_value = "#ffffff")]
    background: String,

    /// Sample the attribute paths in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => roughwalk::Configuration::from_path(path)?,
        None => roughwalk::Configuration::default(),
    };
    let background = if args.background.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(roughwalk::parse_hex(&args.background)?)
    };
    let settings = roughwalk::RenderSettings {
        width: args.width,
        height: args.height,
        background,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "walking");
    let mut rng = Pcg64::seed_from_u64(seed);
    let opts = roughwalk::WalkOpts {
        parallel: args.parallel,
    };
    let circles = roughwalk::walk_with(&config, opts, &mut rng)?;

    let svg = roughwalk::render_svg(&circles, &settings)?;
    roughwalk::write_svg(&args.out, &svg)?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png) = &args.png {
        let raster = roughwalk::rasterize_svg(&svg)?;
        roughwalk::write_png(png, &raster)?;
        eprintln!("wrote {}", png.display());
    }
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    println!(
        "{}",
        roughwalk::Configuration::default().to_json_pretty()?
    );
    Ok(())
}
