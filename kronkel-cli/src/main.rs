use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use kronkel::OutputSink;

#[derive(Parser, Debug)]
#[command(name = "kronkel", version, about = "Write text as Kronkelschrift")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the figure as an SVG document.
    Svg(OutputArgs),
    /// Rasterize the figure and write a PNG.
    Png(OutputArgs),
    /// Print the path data and canvas size as JSON.
    Path(FigureArgs),
}

#[derive(Args, Debug)]
struct FigureArgs {
    /// Text to encode.
    #[arg(long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read the text to encode from a file.
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Settings JSON; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of column pairs.
    #[arg(long)]
    width: Option<u32>,

    /// Cell size in pixels.
    #[arg(long)]
    tile: Option<f64>,

    /// Grid inset in pixels (default: 3 x tile).
    #[arg(long)]
    margin: Option<f64>,

    /// Stroke thickness in pixels (default: 0.75 x tile).
    #[arg(long)]
    line_width: Option<f64>,

    /// Background color, passed to the renderer as is.
    #[arg(long)]
    background: Option<String>,

    /// Line color, passed to the renderer as is.
    #[arg(long)]
    line: Option<String>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[command(flatten)]
    figure: FigureArgs,

    /// Output path (default: <normalized text>.<ext> in the current directory).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
enum Format {
    Svg,
    Png,
}

impl Format {
    fn ext(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    fn sink(self, out: &Path) -> Box<dyn OutputSink> {
        match self {
            Self::Svg => Box::new(kronkel::SvgFileSink::new(out)),
            Self::Png => Box::new(kronkel::PngFileSink::new(out)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Svg(args) => cmd_write(args, Format::Svg),
        Command::Png(args) => cmd_write(args, Format::Png),
        Command::Path(args) => cmd_path(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(args: &FigureArgs) -> anyhow::Result<kronkel::Settings> {
    let base = match &args.config {
        Some(path) => kronkel::Settings::from_path(path)?,
        None => kronkel::Settings::default(),
    };

    let text = match &args.text_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("read text file '{}'", path.display()))?,
        ),
        None => args.text.clone(),
    };

    let overrides = kronkel::Settings {
        text,
        width: args.width,
        tile: args.tile,
        margin: args.margin,
        line_width: args.line_width,
        background_color: args.background.clone().map(kronkel::Color::new),
        line_color: args.line.clone().map(kronkel::Color::new),
    };
    Ok(base.merged_with(overrides))
}

fn build(args: &FigureArgs) -> anyhow::Result<kronkel::Kronkel> {
    let req = load_settings(args)?.to_request();
    let kronkel = kronkel::generate(&req.raw_text, &req.params, req.palette)?;
    if kronkel.normalized_text() != req.raw_text {
        eprintln!("text: {}", kronkel.normalized_text());
    }
    Ok(kronkel)
}

fn cmd_write(args: OutputArgs, format: Format) -> anyhow::Result<()> {
    let kronkel = build(&args.figure)?;
    let out = args
        .out
        .unwrap_or_else(|| default_out_path(kronkel.file_stem(), format.ext()));

    format.sink(&out).consume(&kronkel)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_path(args: FigureArgs) -> anyhow::Result<()> {
    let kronkel = build(&args)?;
    let json = serde_json::to_string_pretty(&kronkel.summary()).context("serialize summary")?;
    println!("{json}");
    Ok(())
}

fn default_out_path(stem: &str, ext: &str) -> PathBuf {
    Path::new(".").join(format!("{stem}.{ext}"))
}
