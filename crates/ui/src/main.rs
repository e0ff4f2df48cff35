use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use osm_chart_core::Dataset;
use osm_chart_core::measure::measure_all;
use osm_chart_protocol::{ThemeToken, Viewport};
use osm_chart_ui::ThemeMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "osm-chart",
    version,
    about = "Compare direct and in-VM operation latencies on a log-scale bar chart"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the chart in a window (default).
    Show(ShowArgs),
    /// Write the chart to an SVG file without opening a window.
    Render(RenderArgs),
    /// Time an operation, a function call and a syscall on this host.
    Measure(MeasureArgs),
}

#[derive(Args, Debug, Default)]
struct ShowArgs {
    /// Use the dark palette.
    #[arg(long)]
    dark: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Destination SVG file.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: PathBuf,
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    #[arg(long, default_value_t = 480.0)]
    height: f64,
    /// Use the dark palette.
    #[arg(long)]
    dark: bool,
}

#[derive(Args, Debug)]
struct MeasureArgs {
    /// Iterations per benchmark; 0 selects the default of 1000.
    #[arg(short = 'n', long, default_value_t = 0)]
    iterations: u32,
    /// Print the results as JSON.
    #[arg(long)]
    json: bool,
    /// Also write an SVG chart of these timings against the VM reference.
    #[arg(long, value_hint = ValueHint::FilePath)]
    chart: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command.unwrap_or(Command::Show(ShowArgs::default())) {
        Command::Show(args) => handle_show(&args),
        Command::Render(args) => handle_render(&args),
        Command::Measure(args) => handle_measure(&args),
    }
}

fn handle_show(args: &ShowArgs) -> Result<()> {
    let mode = if args.dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    osm_chart_ui::show(Dataset::reference()?, mode)
}

fn handle_render(args: &RenderArgs) -> Result<()> {
    let viewport = Viewport::sized(args.width, args.height);
    osm_chart_ui::write_svg(&Dataset::reference()?, &viewport, args.dark, &args.output)
}

fn handle_measure(args: &MeasureArgs) -> Result<()> {
    let measurements = measure_all(args.iterations)?;

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &measurements)?;
        writeln!(out)?;
    } else {
        writeln!(out, "iterations: {}", measurements.iterations)?;
        for (category, ns) in measurements.named() {
            writeln!(out, "{category:<10} {ns:>12.3} ns")?;
        }
    }

    if let Some(path) = &args.chart {
        let direct = measurements.into_series("Direct", ThemeToken::series(0));
        let dataset = Dataset::with_direct(direct)
            .context("measured latencies cannot be drawn on a log axis")?;
        osm_chart_ui::write_svg(&dataset, &Viewport::default(), false, path)?;
    }
    Ok(())
}
