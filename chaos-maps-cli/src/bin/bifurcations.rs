//! Bifurcation diagram of a logistic, cubic or sine map.

use std::io;

use anyhow::{Context, Result};
use chaos_maps::{BifurcationConfig, BifurcationSampler, DEFAULT_SAMPLES};
use chaos_maps_cli::args::{range_value, MapArgs, OutputArgs};
use chaos_maps_cli::{output, render, runtime, BANNER};
use clap::Parser;
use log::{debug, info};

const EXAMPLES: &str = "\
Examples:
  bifurcations
  bifurcations -r 1:4
  bifurcations -r 3.4:3.7 -y 0.3:0.9
  bifurcations -r 3.5:3.6 -y 0.3:0.6 -n 300 -s 400
  bifurcations --cubic --csv > cubic.csv";

#[derive(Debug, Parser)]
#[command(
    name = "bifurcations",
    about = "Plot the bifurcation diagram of a Logistic, Cubic or Sine map",
    version,
    before_help = BANNER,
    after_help = EXAMPLES
)]
struct Cli {
    /// Growth rate range as lo:hi (defaults to the map's full domain)
    #[arg(short = 'r', long = "rate", value_name = "LO:HI", value_parser = range_value)]
    rate: Option<(f64, f64)>,

    /// Population range as lo:hi (defaults to the map's range)
    #[arg(
        short = 'y',
        long = "ypop",
        alias = "people",
        value_name = "LO:HI",
        value_parser = range_value
    )]
    ypop: Option<(f64, f64)>,

    /// Number of iterations kept per growth rate
    #[arg(short = 'n', long = "steps", value_name = "INT", default_value_t = 100)]
    steps: usize,

    /// Number of transient iterations discarded per growth rate
    #[arg(short = 's', long = "skip", value_name = "INT", default_value_t = 200)]
    skip: usize,

    /// Number of growth rates sampled
    #[arg(long = "samples", value_name = "INT", default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn run(cli: Cli) -> Result<()> {
    let interrupted = runtime::interrupt_flag()?;
    let map = cli.map.kind();
    let config = BifurcationConfig {
        r_range: cli.rate,
        y_range: cli.ypop,
        steps: cli.steps,
        skip: cli.skip,
        samples: cli.samples,
    };
    debug!("bifurcations: map={map}, config={config:?}");

    let diagram = BifurcationSampler::new(map, &config)
        .context("cannot set up the sweep")?
        .sample_cancellable(&interrupted)?;
    info!(
        "collected {} points for r in [{}, {}]",
        diagram.points.len(),
        diagram.r_range.0,
        diagram.r_range.1
    );

    if cli.output.csv {
        let mut stdout = io::stdout().lock();
        output::write_bifurcation(&mut stdout, &diagram).context("failed to write CSV")?;
    } else {
        let path = cli.output.output_or("bifurcation.svg");
        render::bifurcation(&path, &diagram)
            .with_context(|| format!("failed to render {}", path.display()))?;
        println!("{}", path.display());
    }
    runtime::ensure_not_interrupted(&interrupted)
}

fn main() {
    let cli = Cli::parse();
    runtime::init_logging(cli.output.verbose);
    if let Err(err) = run(cli) {
        runtime::die("bifurcations", &err);
    }
}
