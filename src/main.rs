//! HEADCOUNT — closed-form complexity comparisons.
//!
//! Sweeps a range of input sizes through one factorized and one
//! conventional block formula and renders the comparison to a PNG.
//!
//! This is the CLI binary entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use headcount::blocks::attention::{ca_bot, ca_dot, ca_multi, fa_bot, fa_dot, fa_multi};
use headcount::blocks::geometry::Geometry;
use headcount::blocks::transformer::{ca_tfm, fa_tfm};
use headcount::chart::render::Chart;
use headcount::chart::series::{side_lengths, ComparisonSeries, Metric, Scale};
use headcount::report::bundle::ComplexityBundle;

/// HEADCOUNT comparison CLI.
#[derive(Parser, Debug)]
#[command(
    name = "headcount",
    about = "HEADCOUNT — factorized vs conventional attention complexity",
    version
)]
struct Cli {
    /// FA/CA block pair to compare.
    #[arg(long, value_enum, default_value = "dot")]
    blocks: BlockPair,

    /// Metric to chart.
    #[arg(long, value_enum, default_value = "computation")]
    metric: MetricArg,

    /// SI scale for the value axis.
    #[arg(long, value_enum, default_value = "unit")]
    scale: ScaleArg,

    /// Chart style.
    #[arg(long, value_enum, default_value = "bars")]
    style: StyleArg,

    /// Smallest swept input side, as a power of two.
    #[arg(long, default_value_t = 6)]
    min_pow: u32,

    /// Largest swept input side, as a power of two.
    #[arg(long, default_value_t = 8)]
    max_pow: u32,

    /// Output image path.
    #[arg(short, long, default_value = "graph.png")]
    output: PathBuf,

    /// Print the comparison series as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the formula catalogue and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
}

/// Which FA/CA formula pair a run compares.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum BlockPair {
    /// fa_dot vs ca_dot.
    Dot,
    /// fa_bot vs ca_bot.
    Bot,
    /// fa_multi vs ca_multi.
    Multi,
    /// fa_tfm vs ca_tfm.
    Tfm,
}

impl BlockPair {
    /// The pair as spatial-size → bundle functions, all other
    /// hyperparameters at their catalogue defaults.
    fn formulas(self) -> (fn(u64) -> ComplexityBundle, fn(u64) -> ComplexityBundle) {
        match self {
            BlockPair::Dot => (
                |s| fa_dot(&Geometry::default().with_spatial(s)),
                |s| ca_dot(&Geometry::default().with_spatial(s)),
            ),
            BlockPair::Bot => (
                |s| fa_bot(&Geometry::default().with_spatial(s)),
                |s| ca_bot(&Geometry::default().with_spatial(s)),
            ),
            BlockPair::Multi => (
                |s| fa_multi(&Geometry::default().with_spatial(s)),
                |s| ca_multi(&Geometry::default().with_spatial(s)),
            ),
            BlockPair::Tfm => (
                |s| fa_tfm(&Geometry::transformer().with_spatial(s)),
                |s| ca_tfm(&Geometry::transformer().with_spatial(s)),
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Memory,
    Computation,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Memory => Metric::Memory,
            MetricArg::Computation => Metric::Computation,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScaleArg {
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl From<ScaleArg> for Scale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Unit => Scale::Unit,
            ScaleArg::Kilo => Scale::Kilo,
            ScaleArg::Mega => Scale::Mega,
            ScaleArg::Giga => Scale::Giga,
            ScaleArg::Tera => Scale::Tera,
            ScaleArg::Peta => Scale::Peta,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Bars,
    Lines,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.list {
        println!("{}", headcount::usage());
        return Ok(());
    }

    tracing::info!("HEADCOUNT v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Comparing {:?} blocks, metric {:?}, sides 2^{}..2^{}",
        cli.blocks,
        cli.metric,
        cli.min_pow,
        cli.max_pow,
    );

    let sides = side_lengths(cli.min_pow, cli.max_pow);
    let (factorized, conventional) = cli.blocks.formulas();

    for &side in &sides {
        let spatial = side * side;
        tracing::info!("{}x{} factorized:\n{}", side, side, factorized(spatial));
        tracing::info!("{}x{} conventional:\n{}", side, side, conventional(spatial));
    }

    let series = ComparisonSeries::sweep(&sides, cli.metric.into(), factorized, conventional);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    }

    let chart = match cli.style {
        StyleArg::Bars => Chart::grouped_bars(&series, cli.scale.into(), "Input side length"),
        StyleArg::Lines => Chart::lines(&series, cli.scale.into(), "Input side length"),
    };
    chart.save(&cli.output)?;

    tracing::info!(
        "Wrote {} ({} groups)",
        cli.output.display(),
        chart.group_count(),
    );
    Ok(())
}
